//! Member classification.
//!
//! One call examines one method against the hook markers of one pass and
//! decides which roles it plays. Shape problems become diagnostics; the roles
//! that still make sense are kept so the nearest-effort code is generated.

use bitflags::bitflags;
use nodehat_core::{AttrValue, Diagnostic, MemberEntry, ParamEntry, TypeEntry, Visibility};
use tracing::trace;

use crate::model::{HookCall, MemberRole};
use crate::{FrameworkTypes, Marker, MarkerSet, Oracle, naming};

bitflags! {
    /// Roles a classified method plays.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RoleFlags: u8 {
        /// Called directly from the generated override.
        const PRIMARY_EVENT = 1 << 0;
        /// Produces a resource released on exit-tree.
        const DISPOSE_ON_EXIT = 1 << 1;
        /// Gets a generated updater that can be called at any time.
        const AUTO_DISPOSABLE = 1 << 2;
    }
}

/// Outcome of classifying one method for one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub method: String,
    pub roles: RoleFlags,
    /// Producer parameters, forwarded verbatim by the updater.
    pub params: Vec<ParamEntry>,
    /// Visibility of the generated updater.
    pub updater_visibility: Visibility,
    pub diagnostics: Vec<Diagnostic>,
}

impl Classification {
    pub fn is_primary(&self) -> bool {
        self.roles.contains(RoleFlags::PRIMARY_EVENT)
    }

    pub fn disposes_on_exit(&self) -> bool {
        self.roles.contains(RoleFlags::DISPOSE_ON_EXIT)
    }

    pub fn is_auto_disposable(&self) -> bool {
        self.roles.contains(RoleFlags::AUTO_DISPOSABLE)
    }

    /// The statement the override makes for this method, if it is a hook.
    pub fn primary_call(&self) -> Option<HookCall> {
        if !self.is_primary() {
            return None;
        }
        let method = self.method.clone();
        Some(if self.is_auto_disposable() {
            HookCall::Update { method }
        } else if self.disposes_on_exit() {
            HookCall::Acquire { method }
        } else {
            HookCall::Invoke { method }
        })
    }

    pub fn slot_name(&self) -> Option<String> {
        self.disposes_on_exit().then(|| naming::slot_name(&self.method))
    }

    pub fn reset_name(&self) -> Option<String> {
        self.disposes_on_exit()
            .then(|| naming::reset_name(&self.method, self.is_auto_disposable()))
    }

    /// Role view of this classification.
    pub fn roles(&self) -> Vec<MemberRole> {
        let mut roles = Vec::new();
        if self.is_primary() {
            roles.push(MemberRole::PrimaryHook {
                method: self.method.clone(),
                returns_disposable: self.disposes_on_exit(),
            });
        }
        if self.is_auto_disposable() {
            roles.push(MemberRole::AutoDisposed {
                method: self.method.clone(),
                visibility: self.updater_visibility,
                params: self.params.clone(),
            });
        }
        roles
    }
}

/// Classifies methods against marker sets.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    oracle: Oracle<'a>,
    types: &'a FrameworkTypes,
}

impl<'a> Classifier<'a> {
    pub fn new(oracle: Oracle<'a>, types: &'a FrameworkTypes) -> Self {
        Self { oracle, types }
    }

    /// Classify `member` of `class`.
    ///
    /// `hooks` names the markers that make a method a hook in this pass.
    /// Returns `None` for members that are not methods, and for methods with
    /// no role and no diagnostic.
    pub fn classify(
        &self,
        class: &TypeEntry,
        member: &MemberEntry,
        hooks: MarkerSet,
        allow_disposable_returns: bool,
    ) -> Option<Classification> {
        let method = member.as_method()?;
        let markers = MarkerSet::of_member(member, self.types);
        let class_name = class.simple_name();

        let returns_void = method.returns_void();
        let returns_disposable = self
            .oracle
            .type_implements(&method.return_type, self.types.disposable);

        let mut roles = RoleFlags::empty();
        let mut diagnostics = Vec::new();

        if let Some(hook) = (markers & hooks).markers().next() {
            let attribute = hook.class_name(self.types);
            roles |= RoleFlags::PRIMARY_EVENT;
            if !method.params.is_empty() {
                diagnostics.push(Diagnostic::method_should_have_no_params(
                    class_name,
                    attribute,
                    &member.name,
                ));
            }
            if allow_disposable_returns && returns_disposable {
                roles |= RoleFlags::DISPOSE_ON_EXIT;
            } else if !returns_void {
                diagnostics.push(Diagnostic::method_should_return_void(
                    class_name,
                    attribute,
                    &member.name,
                ));
            }
        }

        let mut updater_visibility = Visibility::Public;
        if markers.has(Marker::AutoDispose) {
            let attribute = Marker::AutoDispose.class_name(self.types);
            if !member.visibility.is_private() {
                diagnostics.push(Diagnostic::method_should_be_private(
                    class_name,
                    attribute,
                    &member.name,
                ));
            }
            if returns_disposable {
                roles |= RoleFlags::DISPOSE_ON_EXIT | RoleFlags::AUTO_DISPOSABLE;
            } else {
                diagnostics.push(Diagnostic::method_should_return_disposable(
                    class_name,
                    attribute,
                    &member.name,
                ));
            }
            updater_visibility = self.updater_visibility(member);
        }

        if roles.is_empty() && diagnostics.is_empty() {
            return None;
        }

        trace!(
            class = class_name,
            method = %member.name,
            ?roles,
            diagnostics = diagnostics.len(),
            "classified method"
        );

        let namespace = class.name.namespace_string();
        Some(Classification {
            method: member.name.clone(),
            roles,
            params: method.params.clone(),
            updater_visibility,
            diagnostics: diagnostics
                .into_iter()
                .map(|d| d.in_namespace(namespace.as_str()))
                .collect(),
        })
    }

    /// Named `Accessibility` argument first, then the constructor argument.
    fn updater_visibility(&self, member: &MemberEntry) -> Visibility {
        member
            .attribute(self.types.auto_dispose)
            .and_then(|attr| attr.argument(0, "Accessibility"))
            .and_then(AttrValue::enum_member)
            .map(Visibility::from_member_name)
            .unwrap_or_default()
    }
}
