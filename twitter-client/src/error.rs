// twitter-client/src/error.rs
use crate::http::{HttpError, HttpResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of the API error envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub code: i64,
    pub message: String,
}

/// The API's structured failure body: `{"errors":[{"code":..,"message":..}]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub errors: Vec<ErrorDetail>,
}

impl ApiError {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first(&self) -> Option<&ErrorDetail> {
        self.errors.first()
    }

    /// Parse an envelope out of a response body. Anything that is not an
    /// envelope, arrays included, yields an empty one.
    pub(crate) fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.first() {
            Some(detail) => write!(f, "twitter: {} {}", detail.code, detail.message),
            None => f.write_str("twitter: empty error envelope"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Everything that can go wrong with a single API call.
///
/// Variants produced after a response arrived keep it, so callers can still
/// look at the status code and headers of a failed call.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Transport(#[from] HttpError),

    #[error("{error}")]
    Api {
        error: ApiError,
        response: Box<HttpResponse>,
    },

    #[error("unexpected HTTP status {status}")]
    Status {
        status: u16,
        response: Box<HttpResponse>,
    },

    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        response: Box<HttpResponse>,
    },

    #[error("failed to encode request parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl Error {
    /// The raw response, when the exchange got far enough to produce one
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            Error::Api { response, .. }
            | Error::Status { response, .. }
            | Error::Decode { response, .. } => Some(&**response),
            Error::Transport(_) | Error::Encode(_) => None,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Status code of the failed exchange, if known
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(e) => e.status,
            _ => self.response().map(|r| r.status),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
