//! Verb and path for every administrative operation.

use reqwest::Method;

/// One administrative operation, resolved to a verb and a path relative to
/// the base URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    GetServer(u64),
    DeleteServer(u64),
    CreateServer,
    EditServer(u64),
    ListServers,
    ListSignatures,
    GetSignature(u64),
    DeleteSignature(u64),
    ResendVerification(u64),
    RequestNewDkim(u64),
    VerifySpf(u64),
    CreateSignature,
    UpdateSignature(u64),
}

impl Endpoint {
    pub(crate) fn method(&self) -> Method {
        use Endpoint::*;
        match self {
            GetServer(_) | ListServers | ListSignatures | GetSignature(_) => Method::GET,
            DeleteServer(_) | DeleteSignature(_) => Method::DELETE,
            CreateServer | CreateSignature | ResendVerification(_) | RequestNewDkim(_)
            | VerifySpf(_) => Method::POST,
            EditServer(_) | UpdateSignature(_) => Method::PUT,
        }
    }

    pub(crate) fn path(&self) -> String {
        use Endpoint::*;
        match self {
            GetServer(id) | DeleteServer(id) | EditServer(id) => format!("/servers/{id}"),
            CreateServer => "/servers/".to_string(),
            ListServers => "/servers".to_string(),
            ListSignatures => "/senders".to_string(),
            CreateSignature => "/senders/".to_string(),
            GetSignature(id) | DeleteSignature(id) | UpdateSignature(id) => {
                format!("/senders/{id}")
            }
            ResendVerification(id) => format!("/senders/{id}/resend"),
            RequestNewDkim(id) => format!("/senders/{id}/requestnewdkim"),
            VerifySpf(id) => format!("/senders/{id}/verifyspf"),
        }
    }
}
