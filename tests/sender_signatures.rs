use httpmock::prelude::*;
use postmark_admin_client::{
    AdminClient, CreateServerOptions, CreateSignatureOptions, EditServerOptions,
    ListServersOptions, PageOptions, Result, UpdateSignatureOptions,
};
use serde_json::json;

const TOKEN_HEADER: &str = "x-postmark-account-token";

fn client_for(server: &MockServer) -> AdminClient {
    AdminClient::builder("ACCOUNT-TOKEN")
        .base_url(server.base_url())
        .build()
        .unwrap()
}

fn signature_json(id: u64, email: &str) -> serde_json::Value {
    json!({
        "ID": id,
        "Domain": "b.com",
        "EmailAddress": email,
        "ReplyToEmailAddress": "",
        "Name": "A",
        "Confirmed": false,
        "SPFVerified": true,
        "SPFHost": "b.com",
        "SPFTextValue": "v=spf1 a mx include:spf.mtasv.net ~all",
        "DKIMVerified": false,
        "WeakDKIM": false,
        "DKIMHost": "",
        "DKIMTextValue": "",
        "DKIMPendingHost": "20240101._domainkey.b.com",
        "DKIMPendingTextValue": "k=rsa;p=MIGf",
        "DKIMRevokedHost": "",
        "DKIMRevokedTextValue": "",
        "SafeToRemoveRevokedKeyFromDNS": false,
        "DKIMUpdateStatus": "Pending",
        "ReturnPathDomain": "",
        "ReturnPathDomainVerified": false,
        "ReturnPathDomainCNAMEValue": "pm.mtasv.net"
    })
}

#[tokio::test]
async fn list_signatures_defaults_pagination() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/senders")
                .header(TOKEN_HEADER, "ACCOUNT-TOKEN")
                .query_param("offset", "0")
                .query_param("count", "100");
            then.status(200).json_body(json!({
                "TotalCount": 2,
                "SenderSignatures": [
                    { "ID": 5, "Domain": "b.com", "EmailAddress": "x@b.com", "Name": "X", "Confirmed": true },
                    { "ID": 3, "Domain": "b.com", "EmailAddress": "y@b.com", "Name": "Y", "Confirmed": false }
                ]
            }));
        })
        .await;

    let list = client_for(&server)
        .list_sender_signatures(&PageOptions::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(list.total_count, 2);
    assert_eq!(list.sender_signatures[0].id, 5);
    assert_eq!(list.sender_signatures[1].email_address, "y@b.com");
}

#[tokio::test]
async fn list_signatures_passes_page_through() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/senders")
                .query_param("offset", "50")
                .query_param("count", "25");
            then.status(200)
                .json_body(json!({ "TotalCount": 60, "SenderSignatures": [] }));
        })
        .await;

    client_for(&server)
        .list_sender_signatures(&PageOptions::new(50, 25))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn get_signature_returns_complete_record() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/senders/8").body("");
            then.status(200).json_body(signature_json(8, "a@b.com"));
        })
        .await;

    let sig = client_for(&server).get_sender_signature(8).await.unwrap();

    mock.assert_async().await;
    assert_eq!(sig.id, 8);
    assert!(sig.spf_verified);
    assert_eq!(sig.dkim_update_status.as_deref(), Some("Pending"));
}

#[tokio::test]
async fn delete_signature_sends_delete() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/senders/8").body("");
            then.status(200).json_body(
                json!({ "ErrorCode": 0, "Message": "Signature a@b.com removed." }),
            );
        })
        .await;

    let response = client_for(&server).delete_sender_signature(8).await.unwrap();

    mock.assert_async().await;
    assert!(response.is_success());
}

#[tokio::test]
async fn signature_actions_post_without_body() {
    let server = MockServer::start_async().await;
    let resend = server
        .mock_async(|when, then| {
            when.method(POST).path("/senders/8/resend").body("");
            then.status(200)
                .json_body(json!({ "ErrorCode": 0, "Message": "Confirmation email resent." }));
        })
        .await;
    let dkim = server
        .mock_async(|when, then| {
            when.method(POST).path("/senders/8/requestnewdkim").body("");
            then.status(200)
                .json_body(json!({ "ErrorCode": 0, "Message": "New DKIM key requested." }));
        })
        .await;
    let spf = server
        .mock_async(|when, then| {
            when.method(POST).path("/senders/8/verifyspf").body("");
            then.status(200).json_body(signature_json(8, "a@b.com"));
        })
        .await;

    let client = client_for(&server);
    let resent = client.resend_signature_verification(8).await.unwrap();
    let requested = client.request_new_signature_dkim(8).await.unwrap();
    let verified = client.verify_signature_spf(8).await.unwrap();

    resend.assert_async().await;
    dkim.assert_async().await;
    spf.assert_async().await;
    assert_eq!(resent.message, "Confirmation email resent.");
    assert_eq!(requested.message, "New DKIM key requested.");
    assert!(verified.spf_verified);
}

#[tokio::test]
async fn create_signature_omits_unset_reply_to() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/senders/")
                .header(TOKEN_HEADER, "ACCOUNT-TOKEN")
                .json_body(json!({ "FromEmail": "a@b.com", "Name": "A" }));
            then.status(200).json_body(signature_json(9, "a@b.com"));
        })
        .await;

    let sig = client_for(&server)
        .create_sender_signature(&CreateSignatureOptions::new("a@b.com", "A"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(sig.id, 9);
    assert_eq!(sig.email_address, "a@b.com");
}

#[tokio::test]
async fn create_signature_sends_reply_to_when_set() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/senders/").json_body(json!({
                "FromEmail": "a@b.com",
                "Name": "A",
                "ReplyToEmail": "r@b.com"
            }));
            then.status(200).json_body(signature_json(9, "a@b.com"));
        })
        .await;

    let options = CreateSignatureOptions::new("a@b.com", "A").reply_to_email("r@b.com");
    client_for(&server)
        .create_sender_signature(&options)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn update_signature_puts_supplied_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/senders/9")
                .json_body(json!({ "Name": "B" }));
            then.status(200).json_body(signature_json(9, "a@b.com"));
        })
        .await;

    client_for(&server)
        .update_sender_signature(9, &UpdateSignatureOptions::new().name("B"))
        .await
        .unwrap();

    mock.assert_async().await;
}

fn assert_invalid_token<T: std::fmt::Debug>(operation: &str, result: Result<T>) {
    let err = result.expect_err(operation);
    assert_eq!(err.error_code(), Some(300), "{operation}");
    assert!(err.to_string().contains("Invalid token"), "{operation}");
}

#[tokio::test]
async fn every_operation_maps_service_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|_when, then| {
            then.status(401)
                .json_body(json!({ "ErrorCode": 300, "Message": "Invalid token" }));
        })
        .await;

    let client = client_for(&server);
    assert_invalid_token("get_server", client.get_server(1).await);
    assert_invalid_token("delete_server", client.delete_server(1).await);
    assert_invalid_token(
        "create_server",
        client.create_server(&CreateServerOptions::new("S")).await,
    );
    assert_invalid_token(
        "edit_server",
        client.edit_server(1, &EditServerOptions::new()).await,
    );
    assert_invalid_token(
        "list_servers",
        client.list_servers(&ListServersOptions::default()).await,
    );
    assert_invalid_token(
        "list_sender_signatures",
        client.list_sender_signatures(&PageOptions::default()).await,
    );
    assert_invalid_token(
        "get_sender_signature",
        client.get_sender_signature(1).await,
    );
    assert_invalid_token(
        "delete_sender_signature",
        client.delete_sender_signature(1).await,
    );
    assert_invalid_token(
        "resend_signature_verification",
        client.resend_signature_verification(1).await,
    );
    assert_invalid_token(
        "request_new_signature_dkim",
        client.request_new_signature_dkim(1).await,
    );
    assert_invalid_token(
        "verify_signature_spf",
        client.verify_signature_spf(1).await,
    );
    assert_invalid_token(
        "create_sender_signature",
        client
            .create_sender_signature(&CreateSignatureOptions::new("a@b.com", "A"))
            .await,
    );
    assert_invalid_token(
        "update_sender_signature",
        client
            .update_sender_signature(1, &UpdateSignatureOptions::new())
            .await,
    );
}
