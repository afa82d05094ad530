use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Failure reported by a text-generation backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Connection refused/reset, DNS failure, transport-level timeout.
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend answered but the payload carried no generated text.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl GenerationError {
    /// Transport failures and 5xx responses may succeed on a later attempt.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            GenerationError::Transport(_) => true,
            GenerationError::Status { status, .. } => (500..600).contains(status),
            GenerationError::Malformed(_) => false,
        }
    }
}

/// Text-generation backend (an LLM API in production, a stub in tests).
///
/// This trait is dyn-compatible by using boxed futures instead of `impl Future`.
/// Dropping the returned future must abandon the in-flight request.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>>;
}
