//! Postmark administrative client implementation.

use crate::base::BaseClient;
use crate::endpoint::Endpoint;
use crate::options::{
    CreateServerOptions, CreateSignatureOptions, EditServerOptions, ListServersOptions,
    PageOptions, UpdateSignatureOptions,
};
use crate::{
    CompleteSenderSignature, Error, PostmarkResponse, Result, SenderSignatureList, Server,
    ServerList,
};
use log::debug;
use std::fmt;
use std::time::Duration;

/// Default Postmark API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.postmarkapp.com";
/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Header carrying the account-scoped token.
pub const ACCOUNT_TOKEN_HEADER: &str = "x-postmark-account-token";
/// Environment variable read by [`AdminClient::from_env`] for the token.
pub const TOKEN_ENV_VAR: &str = "POSTMARK_ACCOUNT_TOKEN";
/// Environment variable read by [`AdminClient::from_env`] for the base URI.
pub const BASE_URL_ENV_VAR: &str = "POSTMARK_API_BASE_URL";

const USER_AGENT_VALUE: &str = concat!("postmark-admin-client/", env!("CARGO_PKG_VERSION"));

/// Async client for the Postmark administrative API.
///
/// Holds an account token and issues one request per call. The client keeps
/// no per-call state, so a single instance can be shared across tasks.
///
/// Use [`AdminClient::new`] for defaults or [`AdminClient::builder`] to set
/// the base URI, timeout, user agent or proxy.
#[derive(Debug, Clone)]
pub struct AdminClient {
    base: BaseClient,
    timeout: Duration,
    proxy: Option<String>,
}

impl AdminClient {
    /// Create a builder for configuring the client.
    pub fn builder(account_token: impl Into<String>) -> AdminClientBuilder {
        AdminClientBuilder::new(account_token)
    }

    /// Create a client against the production endpoint with a 30 second timeout.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_admin_client::AdminClient;
    /// # fn main() -> Result<(), postmark_admin_client::Error> {
    /// let client = AdminClient::new("ACCOUNT-TOKEN")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(account_token: impl Into<String>) -> Result<Self> {
        AdminClientBuilder::new(account_token).build()
    }

    /// Create a client from `POSTMARK_ACCOUNT_TOKEN`, honoring
    /// `POSTMARK_API_BASE_URL` when set.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| Error::Config(format!("{TOKEN_ENV_VAR} is not set")))?;
        let mut builder = AdminClientBuilder::new(token);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// Base URI requests are issued against, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base.base_url()
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Get a server by id.
    ///
    /// Postmark leaves the id out of this response, so the returned record
    /// always carries `server_id`.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_admin_client::AdminClient;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_admin_client::Error> {
    /// let client = AdminClient::new("ACCOUNT-TOKEN")?;
    /// let server = client.get_server(42).await?;
    /// println!("{} {}", server.id, server.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_server(&self, server_id: u64) -> Result<Server> {
        let mut server: Server = self.base.send(Endpoint::GetServer(server_id)).await?;
        server.id = server_id;
        Ok(server)
    }

    /// Delete a server.
    pub async fn delete_server(&self, server_id: u64) -> Result<PostmarkResponse> {
        self.base.send(Endpoint::DeleteServer(server_id)).await
    }

    /// Create a server.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_admin_client::{AdminClient, CreateServerOptions};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_admin_client::Error> {
    /// let client = AdminClient::new("ACCOUNT-TOKEN")?;
    /// let options = CreateServerOptions::new("Staging")
    ///     .color("green")
    ///     .track_opens(true);
    /// let server = client.create_server(&options).await?;
    /// println!("created {}", server.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_server(&self, options: &CreateServerOptions) -> Result<Server> {
        self.base.send_json(Endpoint::CreateServer, options).await
    }

    /// Edit a server. Only fields set on `options` are sent.
    pub async fn edit_server(&self, server_id: u64, options: &EditServerOptions) -> Result<Server> {
        self.base
            .send_json(Endpoint::EditServer(server_id), options)
            .await
    }

    /// List servers, optionally filtered by name.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_admin_client::{AdminClient, ListServersOptions};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_admin_client::Error> {
    /// let client = AdminClient::new("ACCOUNT-TOKEN")?;
    /// let page = client
    ///     .list_servers(&ListServersOptions::new().count(20).name("prod"))
    ///     .await?;
    /// for server in page.servers {
    ///     println!("{}: {}", server.id, server.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_servers(&self, options: &ListServersOptions) -> Result<ServerList> {
        self.base.send_query(Endpoint::ListServers, options).await
    }

    /// List sender signatures (summary form).
    pub async fn list_sender_signatures(&self, page: &PageOptions) -> Result<SenderSignatureList> {
        self.base.send_query(Endpoint::ListSignatures, page).await
    }

    /// Get the complete record for a sender signature.
    pub async fn get_sender_signature(
        &self,
        signature_id: u64,
    ) -> Result<CompleteSenderSignature> {
        self.base.send(Endpoint::GetSignature(signature_id)).await
    }

    /// Delete a sender signature.
    pub async fn delete_sender_signature(&self, signature_id: u64) -> Result<PostmarkResponse> {
        self.base.send(Endpoint::DeleteSignature(signature_id)).await
    }

    /// Resend the confirmation email for a sender signature.
    pub async fn resend_signature_verification(
        &self,
        signature_id: u64,
    ) -> Result<PostmarkResponse> {
        self.base
            .send(Endpoint::ResendVerification(signature_id))
            .await
    }

    /// Request a new DKIM key for the signature's domain.
    pub async fn request_new_signature_dkim(&self, signature_id: u64) -> Result<PostmarkResponse> {
        self.base.send(Endpoint::RequestNewDkim(signature_id)).await
    }

    /// Ask Postmark to re-check the SPF record and return the updated signature.
    pub async fn verify_signature_spf(&self, signature_id: u64) -> Result<CompleteSenderSignature> {
        self.base.send(Endpoint::VerifySpf(signature_id)).await
    }

    /// Create a sender signature. Postmark emails the address for confirmation.
    pub async fn create_sender_signature(
        &self,
        options: &CreateSignatureOptions,
    ) -> Result<CompleteSenderSignature> {
        self.base.send_json(Endpoint::CreateSignature, options).await
    }

    /// Update a sender signature. Only fields set on `options` are sent.
    pub async fn update_sender_signature(
        &self,
        signature_id: u64,
        options: &UpdateSignatureOptions,
    ) -> Result<CompleteSenderSignature> {
        self.base
            .send_json(Endpoint::UpdateSignature(signature_id), options)
            .await
    }
}

/// Builder for configuring an [`AdminClient`].
///
/// Start with [`AdminClient::builder`] to override defaults.
#[derive(Clone)]
pub struct AdminClientBuilder {
    account_token: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    proxy: Option<String>,
}

impl fmt::Debug for AdminClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminClientBuilder")
            .field("account_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("proxy", &self.proxy)
            .finish()
    }
}

impl AdminClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Base URI `https://api.postmarkapp.com`
    /// - 30 second request timeout
    /// - No proxy
    /// - `postmark-admin-client/<version>` user agent
    pub fn new(account_token: impl Into<String>) -> Self {
        Self {
            account_token: account_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT_VALUE.to_string(),
            proxy: None,
        }
    }

    /// Override the API base URI.
    ///
    /// Useful for testing against a local mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:1080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the client. No network request is made.
    pub fn build(self) -> Result<AdminClient> {
        if self.account_token.is_empty() {
            return Err(Error::Config("account token is empty".to_string()));
        }
        let base_url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base url {:?}: {e}", self.base_url)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base url must be http or https: {}",
                self.base_url
            )));
        }

        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }
        let http = builder.build()?;

        debug!(
            "creating admin client for {} (timeout {:?})",
            self.base_url, self.timeout
        );

        let base = BaseClient::new(
            http,
            &self.base_url,
            ACCOUNT_TOKEN_HEADER,
            &self.account_token,
            &self.user_agent,
        )?;

        Ok(AdminClient {
            base,
            timeout: self.timeout,
            proxy: self.proxy,
        })
    }
}
