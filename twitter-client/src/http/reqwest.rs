// twitter-client/src/http/reqwest.rs
use super::{HttpClient, HttpError, HttpRequest, HttpResponse, Method};
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport backed by `reqwest`.
///
/// Supports app-only bearer authentication out of the box. For user-context
/// signing, build a `reqwest::Client` with the signing middleware of your
/// choice and hand it over with [`ReqwestClient::with_client`].
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    bearer_token: Option<String>,
}

#[cfg(feature = "reqwest")]
impl ReqwestClient {
    pub fn new() -> Self {
        Self::with_client(default_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_client(default_client(timeout))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            inner: client,
            bearer_token: None,
        }
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.bearer_token = Some(token);
        self
    }
}

#[cfg(feature = "reqwest")]
impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

// Falls back to an unconfigured client if the builder rejects the TLS setup.
fn default_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(feature = "reqwest")]
#[async_trait]
impl HttpClient for ReqwestClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut req = match request.method {
            Method::Get => self.inner.get(&request.url),
            Method::Post => self.inner.post(&request.url),
        };

        if let Some(token) = &self.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await.map_err(|e| HttpError {
            status: None,
            message: e.to_string(),
        })?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let body = resp
            .bytes()
            .await
            .map_err(|e| HttpError {
                status: Some(status),
                message: e.to_string(),
            })?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
