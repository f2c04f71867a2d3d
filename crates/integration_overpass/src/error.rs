//! Overpass error types

use thiserror::Error;

/// Errors that can occur while querying Overpass
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Connection to the interpreter failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Interpreter answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body is not the expected JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// No way connects the two nodes
    #[error("No way found between nodes {from} and {to}")]
    RouteNotFound { from: i64, to: i64 },
}

impl OverpassError {
    /// Whether the failure happened on the network rather than in the content
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors() {
        assert!(OverpassError::ConnectionFailed("refused".to_string()).is_transport());
        assert!(OverpassError::RequestFailed("HTTP 504".to_string()).is_transport());
        assert!(OverpassError::Timeout { timeout_secs: 30 }.is_transport());
        assert!(!OverpassError::ParseError("eof".to_string()).is_transport());
        assert!(!OverpassError::RouteNotFound { from: 1, to: 2 }.is_transport());
    }

    #[test]
    fn test_error_display() {
        let err = OverpassError::RouteNotFound { from: 12, to: 34 };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("34"));

        let err = OverpassError::Timeout { timeout_secs: 30 };
        assert!(err.to_string().contains("30"));
    }
}
