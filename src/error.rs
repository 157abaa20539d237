//! API Error Types

use thiserror::Error;

/// Errors returned by the remote data client and the resource helpers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// 401. The session has already been cleared when this is returned.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Server error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Map a non-2xx status and its body to an error
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Status {
                status,
                message: server_message(body),
            },
        }
    }
}

/// Pull `message`/`error` out of a JSON error body, else use the raw text
fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|field| value.get(field)?.as_str().map(str::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string())
}

pub type ApiResult<T> = Result<T, ApiError>;
