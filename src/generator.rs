//! The generation run.
//!
//! A run resolves the framework reference set once, picks the candidate
//! classes, analyzes each one through the [`ClassPipeline`] and renders the
//! enabled units. Classes are independent; the stage order inside a class is
//! fixed by the pipeline.

use nodehat_analysis::{ClassAnalysis, ClassPipeline, FrameworkTypes, Oracle, PassKind, PassSet};
use nodehat_core::{Diagnostics, SymbolTable, TypeEntry};
use nodehat_emit::{GeneratedSource, Renderer};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{CancellationToken, GeneratorConfig, GeneratorError, Result};

/// Units and diagnostics of one run.
#[derive(Debug, Default, Clone)]
pub struct GenerationOutput {
    /// Units in class registration order, lifecycle passes first.
    pub sources: Vec<GeneratedSource>,
    pub diagnostics: Diagnostics,
}

impl GenerationOutput {
    /// Find a unit by hint name.
    pub fn source(&self, hint_name: &str) -> Option<&GeneratedSource> {
        self.sources.iter().find(|s| s.hint_name == hint_name)
    }

    pub fn hint_names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.hint_name.as_str())
    }

    fn append(&mut self, class: ClassOutput) {
        self.sources.extend(class.sources);
        self.diagnostics.extend(class.diagnostics);
    }
}

/// What one class contributes to a run.
#[derive(Debug, Default, Clone)]
pub struct ClassOutput {
    pub sources: Vec<GeneratedSource>,
    pub diagnostics: Diagnostics,
}

/// Entry point for hosts.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
    renderer: Renderer,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let renderer = Renderer::new(config.generator_namespace.clone());
        Self { config, renderer }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate every unit for the source classes in `table`.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::Resolution`] when a framework type is missing from
    /// the table. Nothing is generated in that case.
    pub fn run(&self, table: &SymbolTable) -> Result<GenerationOutput> {
        self.run_with_cancellation(table, &CancellationToken::new())
    }

    /// Like [`run`](Self::run), polling `token` before each class.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::Resolution`] as for `run`, and
    /// [`GeneratorError::Cancelled`] once the token is observed as cancelled.
    /// Partial output is discarded.
    #[cfg_attr(feature = "profiling", profiling::function)]
    #[tracing::instrument(level = "debug", skip_all, fields(types = table.len(), parallel = self.config.parallel))]
    pub fn run_with_cancellation(
        &self,
        table: &SymbolTable,
        token: &CancellationToken,
    ) -> Result<GenerationOutput> {
        let oracle = Oracle::new(table);
        let types = FrameworkTypes::resolve(&oracle, &self.config.names)?;
        let pipeline = ClassPipeline::new(oracle, &types)
            .with_marshalling(self.config.emits_script_methods());

        let candidates: Vec<&TypeEntry> = table
            .source_classes()
            .filter(|class| pipeline.is_candidate(class))
            .collect();
        debug!(candidates = candidates.len(), "selected candidate classes");

        let classes: Vec<ClassOutput> = if self.config.parallel {
            candidates
                .par_iter()
                .map(|class| self.process(&pipeline, class, token))
                .collect::<Result<_>>()?
        } else {
            candidates
                .iter()
                .map(|class| self.process(&pipeline, class, token))
                .collect::<Result<_>>()?
        };

        let mut output = GenerationOutput::default();
        for class in classes {
            output.append(class);
        }
        debug!(
            sources = output.sources.len(),
            diagnostics = output.diagnostics.count(),
            "generation finished"
        );
        Ok(output)
    }

    fn process(
        &self,
        pipeline: &ClassPipeline<'_>,
        class: &TypeEntry,
        token: &CancellationToken,
    ) -> Result<ClassOutput> {
        if token.is_cancelled() {
            return Err(GeneratorError::Cancelled);
        }
        let analysis = pipeline.analyze(class);
        Ok(self.render(&analysis))
    }

    /// Render the enabled units of one analyzed class.
    ///
    /// Diagnostics of disabled lifecycle passes are left out with their units.
    pub fn render(&self, analysis: &ClassAnalysis) -> ClassOutput {
        let passes = self.config.passes;
        let mut output = ClassOutput::default();

        for kind in PassKind::ORDER {
            if !passes.contains(kind.flag()) {
                continue;
            }
            let model = analysis.model(kind);
            output.diagnostics.extend(model.diagnostics.iter().cloned());
            if let Some(source) = self.renderer.render_lifecycle(model) {
                trace!(hint = %source.hint_name, "rendered lifecycle unit");
                output.sources.push(source);
            }
        }

        if passes.contains(PassSet::SCRIPT_METHODS) {
            let table = analysis.method_table.as_ref();
            let source = table.and_then(|table| {
                self.renderer
                    .render_script_methods(&analysis.ready.descriptor, table)
            });
            if let Some(source) = source {
                trace!(hint = %source.hint_name, "rendered script methods unit");
                output.sources.push(source);
            }
        }

        output
    }
}
