//! Errors raised while talking to the finance API.
//!
//! Business rejections that arrive as a well-formed body (`success: false`,
//! a `status`/`message` pair) are not errors at this level; they are decoded
//! into the endpoint's response type and handled by the caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Non-success status without a usable JSON body
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ApiError::Server { status: 500, message: "boom".to_string() }.to_string(),
            "Server error 500: boom"
        );
    }

    #[test]
    fn test_decode_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let api_err: ApiError = err.into();
        assert!(matches!(api_err, ApiError::Decode(_)));
    }
}
