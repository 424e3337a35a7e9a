// twitter-client/src/resource.rs
use crate::error::Result;
use crate::http::{HttpClient, HttpRequest, Method};
use crate::response::{decode, ApiResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request issuer scoped to one resource group, e.g. `friendships/`.
///
/// Holds a borrowed transport and the group's URL prefix. Every operation of
/// the group is a [`Resource::get`] or [`Resource::post`] against a path
/// relative to that prefix.
pub struct Resource<'a, C: HttpClient> {
    http: &'a C,
    base: String,
}

impl<'a, C: HttpClient> Resource<'a, C> {
    /// `base_url` must end with `/`; `prefix` is appended as is.
    pub(crate) fn new(http: &'a C, base_url: &str, prefix: &str) -> Self {
        Self {
            http,
            base: format!("{}{}", base_url, prefix),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn get<P, T>(&self, path: &str, params: Option<&P>) -> Result<ApiResponse<T>>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let request = self.build(Method::Get, path, params)?;
        self.send(request).await
    }

    pub async fn post<P, T>(&self, path: &str, params: Option<&P>) -> Result<ApiResponse<T>>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let request = self.build(Method::Post, path, params)?;
        self.send(request).await
    }

    /// Compose a request: GET parameters go to the query string, POST
    /// parameters to a form-encoded body. The verb alone decides.
    pub fn build<P>(&self, method: Method, path: &str, params: Option<&P>) -> Result<HttpRequest>
    where
        P: Serialize + ?Sized,
    {
        let encoded = match params {
            Some(p) => serde_urlencoded::to_string(p)?,
            None => String::new(),
        };

        let mut url = format!("{}{}", self.base, path);
        let mut headers = Vec::new();
        let mut body = None;

        match method {
            Method::Get => {
                if !encoded.is_empty() {
                    url.push('?');
                    url.push_str(&encoded);
                }
            }
            Method::Post => {
                headers.push(("content-type".to_string(), FORM_CONTENT_TYPE.to_string()));
                body = Some(encoded);
            }
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    async fn send<T>(&self, request: HttpRequest) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.http.execute(request).await?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "received response");
        decode(response)
    }
}

/// Placeholder parameter type for operations that take no parameters
pub(crate) type NoParams = ();

#[cfg(test)]
pub(crate) mod testing {
    use crate::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Transport that records requests and replays one canned response
    pub struct FakeHttp {
        pub requests: Mutex<Vec<HttpRequest>>,
        status: u16,
        body: String,
    }

    impl FakeHttp {
        pub fn new(status: u16, body: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                status,
                body: body.to_string(),
            }
        }

        pub fn last_request(&self) -> HttpRequest {
            self.requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request recorded")
        }
    }

    #[async_trait]
    impl HttpClient for FakeHttp {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.requests.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: self.status,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    /// Transport that never gets a response
    pub struct DeadHttp;

    #[async_trait]
    impl HttpClient for DeadHttp {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
            Err(HttpError {
                status: None,
                message: "connection refused".to_string(),
            })
        }
    }
}
