use postmark_admin_client::{AdminClient, ListServersOptions, PageOptions};

#[tokio::main]
async fn main() -> Result<(), postmark_admin_client::Error> {
    // Reads POSTMARK_ACCOUNT_TOKEN (and optionally POSTMARK_API_BASE_URL).
    let client = AdminClient::from_env()?;

    let servers = client.list_servers(&ListServersOptions::default()).await?;
    println!("{} servers", servers.total_count);
    for server in &servers.servers {
        println!("  [{}] {} ({})", server.id, server.name, server.color.as_deref().unwrap_or("-"));
    }

    let signatures = client.list_sender_signatures(&PageOptions::default()).await?;
    println!("{} sender signatures", signatures.total_count);
    for signature in &signatures.sender_signatures {
        let state = if signature.confirmed { "confirmed" } else { "pending" };
        println!("  [{}] {} <{}> {state}", signature.id, signature.name, signature.email_address);
    }

    Ok(())
}
