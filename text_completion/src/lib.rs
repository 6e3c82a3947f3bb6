//! An interface for handling text generation requests
//!
//! This crate provides a `TextGenerator` trait so the relay does not depend on
//! the HTTP client that talks to the remote generation service.

use std::error::Error;
use std::future::Future;

/// Failure of one generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The remote service answered with a non-2xx status.
    /// `body` is the raw error text it sent back.
    #[error("remote service returned {status}: {body}")]
    Remote { status: u16, body: String },

    /// Anything else: network failure, timeout, undecodable response.
    #[error(transparent)]
    Other(#[from] Box<dyn Error + Send + Sync>),
}

pub trait TextGenerator {
    /// Generates a completion for a single prompt.
    fn generate(&self, prompt: &str)
        -> impl Future<Output = Result<String, GenerationError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_displays_inner_message() {
        let err = GenerationError::Other("operation timed out".into());
        assert_eq!(err.to_string(), "operation timed out");
    }

    #[test]
    fn test_remote_display() {
        let err = GenerationError::Remote {
            status: 503,
            body: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "remote service returned 503: busy");
    }
}
