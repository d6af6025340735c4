//! Response records returned by the administrative API.
//!
//! Every record is a point-in-time snapshot decoded from one response body.
//! Fields the service may leave out default instead of failing the decode.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode an explicit `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A sending configuration under the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Server {
    /// Server identifier assigned by Postmark.
    #[serde(rename = "ID")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Server API tokens (per-server credentials, not the account token).
    #[serde(deserialize_with = "null_as_default")]
    pub api_tokens: Vec<String>,
    /// Link to the server in the Postmark web UI.
    pub server_link: Option<String>,
    /// Color label shown in the web UI (e.g. `purple`, `red`).
    pub color: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub smtp_api_activated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub raw_email_enabled: bool,
    pub inbound_address: Option<String>,
    pub inbound_hook_url: Option<String>,
    pub bounce_hook_url: Option<String>,
    pub open_hook_url: Option<String>,
    /// Only post the first open of a message to the open hook.
    #[serde(deserialize_with = "null_as_default")]
    pub post_first_open_only: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub track_opens: bool,
    pub inbound_domain: Option<String>,
    pub inbound_hash: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub inbound_spam_threshold: i32,
}

/// One page of servers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServerList {
    /// Total number of servers on the account, across all pages.
    #[serde(deserialize_with = "null_as_default")]
    pub total_count: u64,
    /// Servers in the order returned by the service.
    #[serde(deserialize_with = "null_as_default")]
    pub servers: Vec<Server>,
}

/// Summary form of a sender signature, as returned by list calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SenderSignature {
    #[serde(rename = "ID")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email_address: String,
    pub reply_to_email_address: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Whether the from-address has been confirmed by email.
    #[serde(deserialize_with = "null_as_default")]
    pub confirmed: bool,
}

/// Full sender signature, including SPF, DKIM and return-path detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CompleteSenderSignature {
    #[serde(rename = "ID")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email_address: String,
    pub reply_to_email_address: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub confirmed: bool,
    #[serde(rename = "SPFVerified")]
    #[serde(deserialize_with = "null_as_default")]
    pub spf_verified: bool,
    #[serde(rename = "SPFHost")]
    pub spf_host: Option<String>,
    #[serde(rename = "SPFTextValue")]
    pub spf_text_value: Option<String>,
    #[serde(rename = "DKIMVerified")]
    #[serde(deserialize_with = "null_as_default")]
    pub dkim_verified: bool,
    #[serde(rename = "WeakDKIM")]
    #[serde(deserialize_with = "null_as_default")]
    pub weak_dkim: bool,
    #[serde(rename = "DKIMHost")]
    pub dkim_host: Option<String>,
    #[serde(rename = "DKIMTextValue")]
    pub dkim_text_value: Option<String>,
    #[serde(rename = "DKIMPendingHost")]
    pub dkim_pending_host: Option<String>,
    #[serde(rename = "DKIMPendingTextValue")]
    pub dkim_pending_text_value: Option<String>,
    #[serde(rename = "DKIMRevokedHost")]
    pub dkim_revoked_host: Option<String>,
    #[serde(rename = "DKIMRevokedTextValue")]
    pub dkim_revoked_text_value: Option<String>,
    #[serde(rename = "SafeToRemoveRevokedKeyFromDNS")]
    #[serde(deserialize_with = "null_as_default")]
    pub safe_to_remove_revoked_key_from_dns: bool,
    /// DKIM key rotation state, e.g. `Pending` or `Verified`.
    #[serde(rename = "DKIMUpdateStatus")]
    pub dkim_update_status: Option<String>,
    pub return_path_domain: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub return_path_domain_verified: bool,
    #[serde(rename = "ReturnPathDomainCNAMEValue")]
    pub return_path_domain_cname_value: Option<String>,
}

/// One page of sender signatures (summary form).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SenderSignatureList {
    #[serde(deserialize_with = "null_as_default")]
    pub total_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sender_signatures: Vec<SenderSignature>,
}

/// Outcome of a call that only acknowledges, such as a delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PostmarkResponse {
    /// Postmark error code; `0` on success.
    #[serde(deserialize_with = "null_as_default")]
    pub error_code: i64,
    /// Human-readable outcome, e.g. `Server Production removed.`
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

/// Coarse outcome of a [`PostmarkResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostmarkStatus {
    Success,
    UserError,
}

impl PostmarkResponse {
    pub fn status(&self) -> PostmarkStatus {
        if self.error_code == 0 {
            PostmarkStatus::Success
        } else {
            PostmarkStatus::UserError
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == PostmarkStatus::Success
    }
}
