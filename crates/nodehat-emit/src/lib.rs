//! Source rendering for the nodehat generator.
//!
//! The [`Renderer`] turns analysis models into [`GeneratedSource`] units. It
//! never consults the symbol table: everything it prints is already in the
//! model, so identical models render to identical bytes.

mod lifecycle;
mod script_methods;
pub mod writer;

pub use lifecycle::{call_statement, helper_source};

/// Namespace of the generators named in header comments.
pub const DEFAULT_GENERATOR_NAMESPACE: &str = "GodotHat.SourceGenerators";

/// One generated source unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedSource {
    /// File name the host registers the unit under.
    pub hint_name: String,
    pub text: String,
}

/// Renders lifecycle and script-methods units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    generator_namespace: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATOR_NAMESPACE)
    }
}

impl Renderer {
    pub fn new(generator_namespace: impl Into<String>) -> Self {
        Self {
            generator_namespace: generator_namespace.into(),
        }
    }

    pub fn generator_namespace(&self) -> &str {
        &self.generator_namespace
    }
}
