//! Per-pass constants and the class pipeline.
//!
//! - [`PassSpec`]: the small table of constants that distinguishes the three
//!   lifecycle passes
//! - [`descriptor`]: per-pass class identity
//! - [`pipeline`]: the fixed stage order that threads disposal discovery from
//!   the enter-tree and ready passes into the exit-tree pass

use bitflags::bitflags;

use crate::Marker;

pub mod descriptor;
pub mod pipeline;

pub use descriptor::ClassDescriptor;
pub use pipeline::{ClassAnalysis, ClassPipeline};

/// The three engine lifecycle callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassKind {
    EnterTree,
    Ready,
    ExitTree,
}

impl PassKind {
    /// Stage order within one class.
    pub const ORDER: [PassKind; 3] = [PassKind::EnterTree, PassKind::Ready, PassKind::ExitTree];

    pub const fn spec(self) -> &'static PassSpec {
        match self {
            PassKind::EnterTree => &PassSpec::ENTER_TREE,
            PassKind::Ready => &PassSpec::READY,
            PassKind::ExitTree => &PassSpec::EXIT_TREE,
        }
    }

    pub const fn flag(self) -> PassSet {
        match self {
            PassKind::EnterTree => PassSet::ENTER_TREE,
            PassKind::Ready => PassSet::READY,
            PassKind::ExitTree => PassSet::EXIT_TREE,
        }
    }
}

/// Constants for one lifecycle pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSpec {
    pub kind: PassKind,
    /// Marker that designates a hook for this pass.
    pub marker: Marker,
    /// Attribute short name, used in generated comments and hint names.
    pub short_name: &'static str,
    /// Engine callback the generated override implements.
    pub override_name: &'static str,
    /// Generator name written into the header comment.
    pub generator_name: &'static str,
    /// Hooks may return a disposable that is released on exit.
    pub allow_disposable_returns: bool,
}

impl PassSpec {
    pub const ENTER_TREE: PassSpec = PassSpec {
        kind: PassKind::EnterTree,
        marker: Marker::OnEnterTree,
        short_name: "OnEnterTree",
        override_name: "_EnterTree",
        generator_name: "OnEnterTreeGenerator",
        allow_disposable_returns: true,
    };

    pub const READY: PassSpec = PassSpec {
        kind: PassKind::Ready,
        marker: Marker::OnReady,
        short_name: "OnReady",
        override_name: "_Ready",
        generator_name: "OnReadyGenerator",
        allow_disposable_returns: true,
    };

    pub const EXIT_TREE: PassSpec = PassSpec {
        kind: PassKind::ExitTree,
        marker: Marker::OnExitTree,
        short_name: "OnExitTree",
        override_name: "_ExitTree",
        generator_name: "OnExitTreeGenerator",
        allow_disposable_returns: false,
    };
}

/// Short name of the method table unit.
pub const SCRIPT_METHODS_SHORT_NAME: &str = "ScriptMethods";
/// Generator name of the method table unit.
pub const SCRIPT_METHODS_GENERATOR_NAME: &str = "ScriptMethodsGenerator";

bitflags! {
    /// Which units a run emits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PassSet: u8 {
        const ENTER_TREE = 1 << 0;
        const READY = 1 << 1;
        const EXIT_TREE = 1 << 2;
        const SCRIPT_METHODS = 1 << 3;

        const LIFECYCLE = Self::ENTER_TREE.bits() | Self::READY.bits() | Self::EXIT_TREE.bits();
        const ALL = Self::LIFECYCLE.bits() | Self::SCRIPT_METHODS.bits();
    }
}

impl Default for PassSet {
    fn default() -> Self {
        PassSet::ALL
    }
}
