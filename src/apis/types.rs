/// Error taxonomy for API fetch operations
///
/// These stay local to the fetch layer: callers that need the "never fails"
/// contract use the Option-returning wrappers, which log the variant and
/// collapse it to an absent outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure: DNS, refused connection, reset, TLS
    NetworkError(String),
    /// Non-200 status or a body that does not parse as expected
    InvalidResponse(String),
    /// The bounded request time elapsed before the response completed
    Timeout,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ApiError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Timeout => write!(f, "Request timeout"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::Timeout.to_string(), "Request timeout");
        assert_eq!(
            ApiError::NetworkError("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ApiError::InvalidResponse("HTTP 500".to_string()).to_string(),
            "Invalid response: HTTP 500"
        );
    }
}
