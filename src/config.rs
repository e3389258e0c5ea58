//! Run configuration.

use nodehat_analysis::PassSet;
use nodehat_core::FrameworkNames;
use nodehat_emit::DEFAULT_GENERATOR_NAMESPACE;

/// Settings for one [`Generator`](crate::Generator).
///
/// Attribute arguments on user members stay the only per-member
/// configuration. This only selects the reference set and which units a run
/// produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Framework type names resolved before any class is processed.
    pub names: FrameworkNames,
    /// Namespace written into each unit's header comment.
    pub generator_namespace: String,
    /// Units to emit.
    pub passes: PassSet,
    /// Build method tables.
    pub marshalling: bool,
    /// Process classes on the rayon pool.
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            names: FrameworkNames::default(),
            generator_namespace: DEFAULT_GENERATOR_NAMESPACE.to_string(),
            passes: PassSet::ALL,
            marshalling: true,
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // === Builder Methods ===

    pub fn with_names(mut self, names: FrameworkNames) -> Self {
        self.names = names;
        self
    }

    pub fn with_generator_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.generator_namespace = namespace.into();
        self
    }

    pub fn with_passes(mut self, passes: PassSet) -> Self {
        self.passes = passes;
        self
    }

    /// Disabling marshalling also drops the script-methods unit.
    pub fn with_marshalling(mut self, enabled: bool) -> Self {
        self.marshalling = enabled;
        self
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Whether method tables are built and rendered.
    pub fn emits_script_methods(&self) -> bool {
        self.marshalling && self.passes.contains(PassSet::SCRIPT_METHODS)
    }
}
