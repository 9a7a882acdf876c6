use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid address {input:?}: {message}")]
    InvalidAddress { input: String, message: String },

    #[error("Read length {length} out of range (1..={max})")]
    ReadLengthOutOfRange { length: usize, max: usize },

    #[error("Server returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] ureq::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if a request failing with this error is worth sending again
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http { status, .. } => *status == 429 || (500..600).contains(status),
            Error::Network(e) => matches!(
                e,
                ureq::Error::Timeout(_) | ureq::Error::ConnectionFailed | ureq::Error::Io(_)
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_is_retryable() {
        let rate_limited = Error::Http {
            status: 429,
            message: String::new(),
        };
        assert!(rate_limited.is_retryable());

        let server_error = Error::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(server_error.is_retryable());

        let not_found = Error::Http {
            status: 404,
            message: "no such address".to_string(),
        };
        assert!(!not_found.is_retryable());
    }

    #[test]
    fn test_local_errors_are_not_retryable() {
        let err = Error::ReadLengthOutOfRange {
            length: 0,
            max: 65536,
        };
        assert!(!err.is_retryable());
        assert!(!Error::Config("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = Error::Http {
            status: 400,
            message: "Invalid address".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 400: Invalid address");
    }
}
