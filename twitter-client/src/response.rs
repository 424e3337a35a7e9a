// twitter-client/src/response.rs
use crate::error::{ApiError, Error, Result};
use crate::http::HttpResponse;
use serde::de::DeserializeOwned;

/// A successful call: the decoded result plus the raw exchange it came from
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub raw: HttpResponse,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }

    pub fn status(&self) -> u16 {
        self.raw.status
    }
}

/// Decode a completed exchange into a result or an error.
///
/// The body is read as the error envelope on every status, and as `T` on
/// 2xx. A non-empty envelope always wins; after that an unexpected status,
/// then a malformed body. An empty 2xx body decodes to `T::default()`.
pub fn decode<T>(response: HttpResponse) -> Result<ApiResponse<T>>
where
    T: DeserializeOwned + Default,
{
    let envelope = ApiError::from_body(&response.body);

    let decoded = if response.is_success() {
        Some(decode_body::<T>(&response.body))
    } else {
        None
    };

    if !envelope.is_empty() {
        tracing::warn!(status = response.status, error = %envelope, "API returned error envelope");
        return Err(Error::Api {
            error: envelope,
            response: Box::new(response),
        });
    }

    match decoded {
        None => Err(Error::Status {
            status: response.status,
            response: Box::new(response),
        }),
        Some(Err(source)) => Err(Error::Decode {
            source,
            response: Box::new(response),
        }),
        Some(Ok(data)) => Ok(ApiResponse {
            data,
            raw: response,
        }),
    }
}

fn decode_body<T>(body: &[u8]) -> std::result::Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
}
