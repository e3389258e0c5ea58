//! Errors that abort a generation run.

use nodehat_core::ResolutionError;
use thiserror::Error;

/// Result alias for [`Generator`](crate::Generator) runs.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// A run that produced no output.
///
/// Problems in user code are never errors; they come back as diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// A required framework type is not in the reference set.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The host cancelled the run.
    #[error("generation cancelled")]
    Cancelled,
}
