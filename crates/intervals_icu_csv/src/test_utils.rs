//! Scripted [`Transport`] for unit tests.

use crate::{BasicAuth, FetchError, HttpResponse, Transport};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub username: String,
    pub password: String,
}

/// Replays queued responses in order and records every request.
/// Running out of responses yields a 599 so a surplus call is visible.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &[u8]) -> Self {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            body: body.to_vec(),
        });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        auth: &BasicAuth<'_>,
    ) -> Result<HttpResponse, FetchError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            username: auth.username.to_string(),
            password: auth.password.expose_secret().to_string(),
        });
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or(HttpResponse {
            status: 599,
            body: b"no scripted response".to_vec(),
        }))
    }
}
