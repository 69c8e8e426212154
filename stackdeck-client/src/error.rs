use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Generic message shown to the user for transport-level failures.
///
/// The original failure detail is carried in the error variant and logged,
/// but never surfaced in the UI.
pub const GENERIC_REQUEST_ERROR: &str = "An error occurred while processing your request";

/// Fallback message when a non-2xx response carries no usable `{message}`.
pub const GENERIC_SERVER_ERROR: &str = "An error occurred";

/// Unified error type for all stack API operations.
///
/// The variants map onto the client's error taxonomy:
///
/// - [`Api`](Self::Api) — the server answered with a non-2xx status; the
///   message is extracted from the response payload when present.
/// - [`Network`](Self::Network) / [`Timeout`](Self::Timeout) — transport
///   failure before a response was obtained.
/// - [`Parse`](Self::Parse) — the response arrived but could not be decoded.
/// - [`InvalidStackId`](Self::InvalidStackId) — identifier validation failed
///   before any request was issued.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The server rejected the request with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the response payload, or a generic fallback.
        message: String,
    },

    /// A network-level error occurred (connection refused, DNS failure, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Transport error details, for logs only.
        detail: String,
    },

    /// The request timed out.
    #[error("Request timed out: {detail}")]
    Timeout {
        /// Transport error details, for logs only.
        detail: String,
    },

    /// The response body could not be parsed as the expected shape.
    #[error("Failed to parse response: {detail}")]
    Parse {
        /// Decode error details, for logs only.
        detail: String,
    },

    /// The configured base URL is not a valid URL.
    #[error("Invalid base URL: {input}")]
    InvalidBaseUrl {
        /// The rejected input.
        input: String,
    },

    /// A stack identifier failed validation (empty, non-numeric or not
    /// a positive integer). No request is issued for such input.
    #[error("Invalid stack id: {input:?}")]
    InvalidStackId {
        /// The rejected input.
        input: String,
    },
}

impl ClientError {
    /// The message suitable for end-user display.
    ///
    /// Server-provided messages pass through; transport and parse failures
    /// collapse to a generic message, their detail belongs in the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Network { .. } | Self::Timeout { .. } | Self::Parse { .. } => {
                GENERIC_REQUEST_ERROR.to_string()
            }
            Self::InvalidBaseUrl { input } => format!("Invalid base URL: {input}"),
            Self::InvalidStackId { .. } => "Please enter a valid Stack ID".to_string(),
        }
    }

    /// Whether this error was raised before any request left the client.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidStackId { .. } | Self::InvalidBaseUrl { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_passes_through() {
        let err = ClientError::Api {
            status: 404,
            message: "Stack 3 does not exist".to_string(),
        };
        assert_eq!(err.user_message(), "Stack 3 does not exist");
    }

    #[test]
    fn test_transport_errors_collapse_to_generic_message() {
        let network = ClientError::Network {
            detail: "connection refused".to_string(),
        };
        let timeout = ClientError::Timeout {
            detail: "deadline elapsed".to_string(),
        };
        let parse = ClientError::Parse {
            detail: "expected value at line 1".to_string(),
        };

        for err in [network, timeout, parse] {
            assert_eq!(err.user_message(), GENERIC_REQUEST_ERROR);
        }
    }

    #[test]
    fn test_validation_classification() {
        let err = ClientError::InvalidStackId {
            input: "abc".to_string(),
        };
        assert!(err.is_validation());

        let err = ClientError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_validation());
    }
}
