// twitter-cli/src/output.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use twitter_client::{ApiResponse, Error, ErrorDetail, HttpResponse};

/// Standard JSON response envelope
#[derive(Debug, Serialize)]
pub struct Response<T> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<Meta>,
}

impl<T> Response<T> {
    pub fn ok(result: T) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
            meta: None,
        }
    }

    pub fn ok_with_meta(result: T, meta: Meta) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
            meta: Some(meta),
        }
    }

    pub fn error(error: ErrorResponse, meta: Option<Meta>) -> Response<()> {
        Response::<()> {
            ok: false,
            result: None,
            error: Some(error),
            meta,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    type_: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ErrorDetail>,
    retryable: bool,
}

impl ErrorResponse {
    pub fn from_error(err: &Error) -> Self {
        let type_ = match err {
            Error::Api { .. } => "api_error",
            Error::Status { .. } => "http_status",
            Error::Decode { .. } => "decode_failed",
            Error::Encode(_) => "validation_failed",
            Error::Transport(_) => "transport_error",
        };
        Self {
            type_,
            message: err.to_string(),
            status: err.status(),
            errors: err.api_error().map(|e| e.errors.clone()).unwrap_or_default(),
            retryable: ExitCode::for_error(err) == ExitCode::TransientError,
        }
    }

    pub fn validation_failed(message: String) -> Self {
        Self {
            type_: "validation_failed",
            message,
            status: None,
            errors: Vec::new(),
            retryable: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<RateLimitInfo>,
}

impl Meta {
    /// Picks the rate-limit headers out of a raw response, if any
    pub fn from_response(raw: &HttpResponse) -> Option<Self> {
        let remaining = raw.header("x-rate-limit-remaining")?.trim().parse().ok()?;
        let reset_at = raw
            .header("x-rate-limit-reset")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .map(|ts| ts.to_rfc3339());
        Some(Self {
            rate_limit: Some(RateLimitInfo {
                remaining,
                reset_at,
            }),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RateLimitInfo {
    pub remaining: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_at: Option<String>,
}

/// Exit codes for agent decision making
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    TransientError = 1,
    PermanentError = 2,
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::TransientError => write!(f, "transient_error"),
            Self::PermanentError => write!(f, "permanent_error"),
        }
    }
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Network trouble, throttling and server faults are worth retrying
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::Transport(_) => Self::TransientError,
            _ => match err.status() {
                Some(429) => Self::TransientError,
                Some(status) if status >= 500 => Self::TransientError,
                _ => Self::PermanentError,
            },
        }
    }
}

// Print response to stdout
pub fn print_response<T: Serialize>(resp: &Response<T>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(resp)?);
    Ok(())
}

/// Print the outcome of one API call and return the process exit code
pub fn print_outcome<T: Serialize>(
    outcome: twitter_client::Result<ApiResponse<T>>,
) -> anyhow::Result<ExitCode> {
    match outcome {
        Ok(resp) => {
            let printed = match Meta::from_response(&resp.raw) {
                Some(meta) => Response::ok_with_meta(resp.data, meta),
                None => Response::ok(resp.data),
            };
            print_response(&printed)?;
            Ok(ExitCode::Success)
        }
        Err(err) => {
            let meta = err.response().and_then(Meta::from_response);
            print_response(&Response::<()>::error(ErrorResponse::from_error(&err), meta))?;
            Ok(ExitCode::for_error(&err))
        }
    }
}

/// Print a styled success message
pub fn print_success(message: &str) {
    let term = console::Term::stderr();
    let _ = term.write_line(&format!("{} {}", console::style("✓").green(), message));
}

/// Print a styled error message
pub fn print_error(message: &str) {
    let term = console::Term::stderr();
    let _ = term.write_line(&format!("{} {}", console::style("Error:").red(), message));
}
