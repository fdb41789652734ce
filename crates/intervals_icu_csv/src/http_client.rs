//! HTTP transport for the intervals.icu API.
//!
//! [`Transport`] is the seam the fetcher talks through; [`ReqwestTransport`]
//! is the production implementation.

use crate::FetchError;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Username intervals.icu expects when the API key is the password.
pub const API_KEY_USER: &str = "API_KEY";

/// HTTP Basic credentials for one request.
#[derive(Clone, Copy, Debug)]
pub struct BasicAuth<'a> {
    pub username: &'a str,
    pub password: &'a SecretString,
}

impl<'a> BasicAuth<'a> {
    pub fn api_key(key: &'a SecretString) -> Self {
        Self {
            username: API_KEY_USER,
            password: key,
        }
    }
}

/// A fully buffered response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single GET. Non-success statuses are returned, not raised.
    async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        auth: &BasicAuth<'_>,
    ) -> Result<HttpResponse, FetchError>;
}

/// [`Transport`] backed by `reqwest` with the client's default timeouts.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn get_request(&self, url: &str, auth: &BasicAuth<'_>) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(auth.username, Some(auth.password.expose_secret()))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        auth: &BasicAuth<'_>,
    ) -> Result<HttpResponse, FetchError> {
        let resp = self.get_request(url, auth).query(query).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        tracing::debug!(url, status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}
