//! Per-class output model.
//!
//! The pipeline produces one [`LifecycleModel`] per pass; the renderer turns
//! each into text without consulting the symbol table again.

use nodehat_core::{Diagnostic, ParamEntry, Visibility};

use crate::disposal::DisposalEntry;
use crate::marshal::MethodTableEntry;
use crate::passes::{ClassDescriptor, PassKind, PassSpec};
use crate::scene::SceneInjection;

/// One statement in a generated override body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookCall {
    /// `__InitFromScene_X()`
    InitFromScene { member: String },
    /// `M()`
    Invoke { method: String },
    /// `__disposable_M = M()`
    Acquire { method: String },
    /// `UpdateM()`
    Update { method: String },
    /// `__DisposeOnExitTree()`
    DisposeAll,
}

/// A generated helper member, rendered after the override.
#[derive(Debug, Clone, PartialEq)]
pub enum Helper {
    SceneInit(SceneInjection),
    /// Aggregate reset; holds reset names in release order.
    DisposeAll { resets: Vec<String> },
    /// `private IDisposable? __disposable_M;`
    Slot(DisposalEntry),
    Updater(DisposalEntry),
    Reset(DisposalEntry),
}

/// Role assignments a member ends up with, across all passes.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberRole {
    PrimaryHook {
        method: String,
        returns_disposable: bool,
    },
    AutoDisposed {
        method: String,
        visibility: Visibility,
        params: Vec<ParamEntry>,
    },
    SceneInjected(SceneInjection),
    Marshalled(MethodTableEntry),
}

impl MemberRole {
    /// Name of the member the role belongs to.
    pub fn member(&self) -> &str {
        match self {
            MemberRole::PrimaryHook { method, .. } | MemberRole::AutoDisposed { method, .. } => {
                method
            }
            MemberRole::SceneInjected(injection) => &injection.member,
            MemberRole::Marshalled(entry) => &entry.name,
        }
    }
}

/// Everything one lifecycle pass generates for one class.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleModel {
    pub pass: PassKind,
    pub descriptor: ClassDescriptor,
    /// Override body, in execution order.
    pub calls: Vec<HookCall>,
    pub helpers: Vec<Helper>,
    /// Diagnostics raised by this pass.
    pub diagnostics: Vec<Diagnostic>,
}

impl LifecycleModel {
    pub fn spec(&self) -> &'static PassSpec {
        self.pass.spec()
    }

    /// The class has a reason to define this pass's override.
    pub fn has_work(&self) -> bool {
        !self.calls.is_empty() || !self.helpers.is_empty()
    }

    /// Work exists and the class can be reopened.
    pub fn should_emit(&self) -> bool {
        self.has_work() && self.descriptor.is_partial
    }
}
