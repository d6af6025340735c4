//! Shared request pipeline: auth header injection, JSON encoding and
//! response-to-error mapping.

use crate::endpoint::Endpoint;
use crate::{Error, Result};
use log::{debug, trace, warn};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error payload returned by Postmark with non-success statuses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    error_code: i64,
    message: String,
}

/// Issues requests against one base URI with one credential.
#[derive(Debug, Clone)]
pub(crate) struct BaseClient {
    http: reqwest::Client,
    base_url: String,
    auth_header: HeaderName,
    auth_value: HeaderValue,
    user_agent: HeaderValue,
}

impl BaseClient {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: &str,
        auth_header: &'static str,
        token: &str,
        user_agent: &str,
    ) -> Result<Self> {
        let mut auth_value = HeaderValue::from_str(token)
            .map_err(|_| Error::Config("token is not a valid header value".to_string()))?;
        auth_value.set_sensitive(true);
        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|_| Error::Config("user agent is not a valid header value".to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: HeaderName::from_static(auth_header),
            auth_value,
            user_agent,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request without a body or query string.
    pub(crate) async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let request = self.request(endpoint);
        self.execute(endpoint, request).await
    }

    /// Send a request without a body, with `query` encoded into the URL.
    pub(crate) async fn send_query<Q, T>(&self, endpoint: Endpoint, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(endpoint).query(query);
        self.execute(endpoint, request).await
    }

    /// Send a request with `body` encoded as JSON.
    pub(crate) async fn send_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        if log::log_enabled!(log::Level::Trace) {
            trace!(
                "request body: {}",
                serde_json::to_string(body).unwrap_or_else(|_| "<unserializable>".to_string())
            );
        }
        let request = self.request(endpoint).json(body);
        self.execute(endpoint, request).await
    }

    fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint.path());
        self.http
            .request(endpoint.method(), url)
            .headers(self.headers())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T> {
        debug!("{} {}", endpoint.method(), endpoint.path());
        let response = request.send().await?;
        debug!("{} {} -> {}", endpoint.method(), endpoint.path(), response.status());
        Self::read_response(response).await
    }

    async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        trace!("response body: {body}");

        if status.is_success() {
            return serde_json::from_str(&body).map_err(Into::into);
        }

        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(err) => {
                warn!("postmark error {} ({status}): {}", err.error_code, err.message);
                Err(Error::Api {
                    status,
                    code: err.error_code,
                    message: err.message,
                })
            }
            Err(_) => {
                warn!("unexpected status {status}");
                Err(Error::Status { status, body })
            }
        }
    }

    /// Build headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(self.auth_header.clone(), self.auth_value.clone());
        headers
    }
}
