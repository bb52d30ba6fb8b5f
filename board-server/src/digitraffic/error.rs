//! Digitraffic client error types.

use std::fmt;

/// Errors from the Digitraffic HTTP client.
#[derive(Debug)]
pub enum DigitrafficError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },
}

impl DigitrafficError {
    /// True for transport-level failures (connection, timeout, bad status),
    /// as opposed to a response that arrived but could not be decoded.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            DigitrafficError::Http(_) | DigitrafficError::ApiError { .. }
        )
    }
}

impl fmt::Display for DigitrafficError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitrafficError::Http(e) => write!(f, "HTTP error: {e}"),
            DigitrafficError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            DigitrafficError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
        }
    }
}

impl std::error::Error for DigitrafficError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DigitrafficError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DigitrafficError {
    fn from(err: reqwest::Error) -> Self {
        DigitrafficError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DigitrafficError::ApiError {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = DigitrafficError::Json {
            message: "expected array".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected array"));
    }

    #[test]
    fn network_classification() {
        let api = DigitrafficError::ApiError {
            status: 502,
            message: String::new(),
        };
        assert!(api.is_network());

        let json = DigitrafficError::Json {
            message: "bad".into(),
            body: None,
        };
        assert!(!json.is_network());
    }
}
