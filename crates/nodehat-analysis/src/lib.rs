//! Analysis for the nodehat generator.
//!
//! Turns annotated class declarations from a [`SymbolTable`] into per-class
//! models the renderer can print:
//!
//! - [`Oracle`]: inheritance and capability queries over the symbol table
//! - [`MarkerSet`]: which recognized markers a member carries
//! - [`Classifier`]: the roles a method plays in one lifecycle pass
//! - [`resolve_scene_injections`]: scene-unique field and property lookups
//! - [`DisposalPlan`]: resources released on exit-tree, in reverse order
//! - [`marshal`]: wire categories and the per-class method table
//! - [`ClassPipeline`]: the fixed stage order producing a [`ClassAnalysis`]
//!
//! [`SymbolTable`]: nodehat_core::SymbolTable

mod classify;
mod disposal;
mod markers;
pub mod marshal;
pub mod model;
pub mod naming;
mod oracle;
pub mod passes;
mod scene;

pub use classify::{Classification, Classifier, RoleFlags};
pub use disposal::{DisposalEntry, DisposalPlan};
pub use markers::{Marker, MarkerSet};
pub use marshal::{MethodTable, MethodTableEntry, ValueTypeMapper};
pub use model::{Helper, HookCall, LifecycleModel, MemberRole};
pub use oracle::{BaseChain, FrameworkTypes, Oracle};
pub use passes::{ClassAnalysis, ClassDescriptor, ClassPipeline, PassKind, PassSet, PassSpec};
pub use scene::{SceneInjection, resolve_scene_injections};
