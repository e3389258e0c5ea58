//! Error types for the generator.
//!
//! Only environmental problems are errors. Shape problems in user code are
//! reported as [`Diagnostic`](crate::Diagnostic) values and never abort a run.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ResolutionError   - a required framework type is missing (fatal)
//! RegistrationError - the host registered the same type twice
//! ```

use thiserror::Error;

// ============================================================================
// Resolution Errors
// ============================================================================

/// A framework type the generator depends on could not be resolved.
///
/// This indicates a broken reference set rather than a user mistake, so the
/// whole run is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// No type with this fully qualified name is registered.
    #[error("failed to resolve {name}, is it in a referenced assembly?")]
    MissingType { name: String },
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while populating the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A type with this name already exists.
    #[error("duplicate type: {0}")]
    DuplicateType(String),
}
