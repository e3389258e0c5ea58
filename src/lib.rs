//! nodehat
//!
//! Generates lifecycle overrides, resource disposal, scene-unique injection
//! and script method tables for annotated engine node classes.
//!
//! The host fills a [`SymbolTable`] with the classes of a compilation plus
//! the referenced engine and attribute types, then hands it to a
//! [`Generator`]. Each candidate class goes through a fixed pipeline:
//! scene injection, enter-tree, ready, disposal merge, exit-tree and the
//! method table. The enabled units are rendered as C# source.
//!
//! ## Crates
//!
//! - [`nodehat_core`]: symbol model, diagnostic catalog and errors
//! - [`nodehat_analysis`]: oracle, classifier and the class pipeline
//! - [`nodehat_emit`]: source rendering
//!
//! ## Modules
//!
//! - [`config`]: [`GeneratorConfig`] builder
//! - [`cancel`]: cooperative [`CancellationToken`]
//! - [`error`]: [`GeneratorError`] for runs that produce nothing
//! - [`generator`]: the [`Generator`] run
//!
//! ```
//! use nodehat::{AttributeData, FrameworkNames, Generator, MemberEntry, MethodEntry, SymbolTable, TypeEntry};
//!
//! let mut table = SymbolTable::with_engine_types(&FrameworkNames::default());
//! table
//!     .register_type(
//!         TypeEntry::source_class("Game.Player")
//!             .with_base("Godot.Node")
//!             .as_public_partial()
//!             .with_member(
//!                 MemberEntry::method("Setup", MethodEntry::void())
//!                     .with_attribute(AttributeData::new("GodotHat.OnReadyAttribute")),
//!             ),
//!     )
//!     .unwrap();
//!
//! let output = Generator::default().run(&table).unwrap();
//! assert!(output.source("Game.Player_OnReady.generated.cs").is_some());
//! assert!(output.diagnostics.is_empty());
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod generator;

pub use cancel::CancellationToken;
pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use generator::{ClassOutput, GenerationOutput, Generator};

pub use nodehat_analysis::{ClassAnalysis, ClassPipeline, PassKind, PassSet};
pub use nodehat_core::{
    AttrValue, AttributeData, Diagnostic, DiagnosticCode, DiagnosticKind, Diagnostics,
    FrameworkNames, MemberEntry, MethodEntry, MethodKind, Modifier, QualifiedName,
    RegistrationError, ResolutionError, SpecialType, SymbolTable, TypeEntry, TypeKind, TypeRef,
    Visibility,
};
pub use nodehat_emit::{GeneratedSource, Renderer};

// Re-export the member crates for hosts that need the lower layers.
pub use nodehat_analysis;
pub use nodehat_core;
pub use nodehat_emit;
