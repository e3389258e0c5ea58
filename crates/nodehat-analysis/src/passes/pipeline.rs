//! The per-class analysis pipeline.
//!
//! Stages run in a fixed order for one class:
//!
//! 1. scene injections
//! 2. enter-tree classification
//! 3. ready classification
//! 4. disposal merge of stages 2 and 3
//! 5. exit-tree classification and aggregation
//! 6. method table
//!
//! Each stage produces an immutable value; the [`ClassAnalysis`] holds them
//! all. Distinct classes share nothing and may be analyzed in parallel.

use nodehat_core::{Diagnostic, Diagnostics, QualifiedName, TypeEntry, TypeOrigin};
use tracing::debug;

use super::{ClassDescriptor, PassKind, PassSpec};
use crate::disposal::DisposalPlan;
use crate::marshal::{MethodTable, MethodTableBuilder};
use crate::model::{Helper, HookCall, LifecycleModel, MemberRole};
use crate::scene::{SceneInjection, resolve_scene_injections};
use crate::{Classification, Classifier, FrameworkTypes, Oracle};

/// Result of analyzing one class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassAnalysis {
    pub class: QualifiedName,
    pub enter_tree: LifecycleModel,
    pub ready: LifecycleModel,
    pub exit_tree: LifecycleModel,
    pub disposal: DisposalPlan,
    pub scene: Vec<SceneInjection>,
    /// `None` when marshalling is disabled or the class is not partial.
    pub method_table: Option<MethodTable>,
    /// Every role assigned to a member, without repeats.
    pub roles: Vec<MemberRole>,
}

impl ClassAnalysis {
    pub fn model(&self, pass: PassKind) -> &LifecycleModel {
        match pass {
            PassKind::EnterTree => &self.enter_tree,
            PassKind::Ready => &self.ready,
            PassKind::ExitTree => &self.exit_tree,
        }
    }

    /// Lifecycle models in stage order.
    pub fn lifecycle(&self) -> [&LifecycleModel; 3] {
        [&self.enter_tree, &self.ready, &self.exit_tree]
    }

    /// Diagnostics from every pass, each reported once.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for model in self.lifecycle() {
            diagnostics.extend(model.diagnostics.iter().cloned());
        }
        diagnostics
    }

    /// Roles of one member.
    pub fn roles_of<'s>(&'s self, member: &'s str) -> impl Iterator<Item = &'s MemberRole> {
        self.roles.iter().filter(move |r| r.member() == member)
    }
}

/// Runs the analysis stages for a class.
#[derive(Debug, Clone, Copy)]
pub struct ClassPipeline<'a> {
    oracle: Oracle<'a>,
    types: &'a FrameworkTypes,
    marshalling: bool,
}

impl<'a> ClassPipeline<'a> {
    pub fn new(oracle: Oracle<'a>, types: &'a FrameworkTypes) -> Self {
        Self {
            oracle,
            types,
            marshalling: true,
        }
    }

    /// Enable or disable method table construction.
    pub fn with_marshalling(mut self, enabled: bool) -> Self {
        self.marshalling = enabled;
        self
    }

    /// Check if `class` is a source class deriving from the engine node class.
    pub fn is_candidate(&self, class: &TypeEntry) -> bool {
        class.origin == TypeOrigin::Source
            && class.is_class()
            && self.oracle.extends_class(&class.name, self.types.node)
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    #[tracing::instrument(level = "debug", skip_all, fields(class = %class.name))]
    pub fn analyze(&self, class: &TypeEntry) -> ClassAnalysis {
        let classifier = Classifier::new(self.oracle, self.types);

        let scene = resolve_scene_injections(class, self.types);
        let enter = classify_pass(&classifier, class, &PassSpec::ENTER_TREE);
        let ready = classify_pass(&classifier, class, &PassSpec::READY);
        let disposal = DisposalPlan::merge(class, &enter, &ready);
        let exit = classify_pass(&classifier, class, &PassSpec::EXIT_TREE);

        let enter_tree = {
            let mut calls: Vec<HookCall> = scene
                .iter()
                .map(|s| HookCall::InitFromScene {
                    member: s.member.clone(),
                })
                .collect();
            calls.extend(enter.iter().filter_map(Classification::primary_call));
            let helpers = scene.iter().cloned().map(Helper::SceneInit).collect();
            self.finish(class, &PassSpec::ENTER_TREE, calls, helpers, &enter)
        };

        let ready_model = {
            let calls = ready
                .iter()
                .filter_map(Classification::primary_call)
                .collect();
            self.finish(class, &PassSpec::READY, calls, Vec::new(), &ready)
        };

        let exit_tree = {
            let mut calls: Vec<HookCall> = exit
                .iter()
                .filter_map(Classification::primary_call)
                .collect();
            let mut helpers = Vec::new();
            if !disposal.is_empty() {
                calls.push(HookCall::DisposeAll);
                helpers.push(Helper::DisposeAll {
                    resets: disposal.reset_calls(),
                });
                for entry in disposal.entries() {
                    helpers.push(Helper::Slot(entry.clone()));
                    if entry.auto_disposable {
                        helpers.push(Helper::Updater(entry.clone()));
                    }
                    helpers.push(Helper::Reset(entry.clone()));
                }
            }
            self.finish(class, &PassSpec::EXIT_TREE, calls, helpers, &exit)
        };

        let method_table = (self.marshalling && class.is_partial()).then(|| {
            let overrides: Vec<&str> = [&enter_tree, &ready_model, &exit_tree]
                .into_iter()
                .filter(|m| m.has_work())
                .map(|m| m.spec().override_name)
                .collect();
            MethodTableBuilder::new(self.oracle, self.types).build(class, &overrides)
        });

        let mut roles: Vec<MemberRole> = Vec::new();
        let assigned = enter
            .iter()
            .chain(&ready)
            .chain(&exit)
            .flat_map(Classification::roles)
            .chain(scene.iter().cloned().map(MemberRole::SceneInjected))
            .chain(
                method_table
                    .iter()
                    .flat_map(|t| &t.entries)
                    .filter(|e| !e.synthetic)
                    .cloned()
                    .map(MemberRole::Marshalled),
            );
        for role in assigned {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }

        debug!(
            enter_tree = enter_tree.calls.len(),
            ready = ready_model.calls.len(),
            exit_tree = exit_tree.calls.len(),
            disposables = disposal.len(),
            table = method_table.as_ref().map_or(0, MethodTable::len),
            "analyzed class"
        );

        ClassAnalysis {
            class: class.name.clone(),
            enter_tree,
            ready: ready_model,
            exit_tree,
            disposal,
            scene,
            method_table,
            roles,
        }
    }

    fn finish(
        &self,
        class: &TypeEntry,
        spec: &PassSpec,
        calls: Vec<HookCall>,
        helpers: Vec<Helper>,
        classifications: &[Classification],
    ) -> LifecycleModel {
        let descriptor = ClassDescriptor::new(class, spec, self.types);
        let mut diagnostics = Vec::new();
        if !calls.is_empty() || !helpers.is_empty() {
            if !descriptor.is_partial {
                diagnostics.push(
                    Diagnostic::node_not_partial(descriptor.simple_name())
                        .in_namespace(descriptor.namespace()),
                );
            } else if descriptor.has_override {
                diagnostics.push(
                    Diagnostic::node_already_contains_method(
                        descriptor.simple_name(),
                        spec.override_name,
                        spec.short_name,
                    )
                    .in_namespace(descriptor.namespace()),
                );
            }
        }
        diagnostics.extend(
            classifications
                .iter()
                .flat_map(|c| c.diagnostics.iter().cloned()),
        );
        LifecycleModel {
            pass: spec.kind,
            descriptor,
            calls,
            helpers,
            diagnostics,
        }
    }
}

fn classify_pass(
    classifier: &Classifier<'_>,
    class: &TypeEntry,
    spec: &PassSpec,
) -> Vec<Classification> {
    let hooks = spec.marker.flag();
    class
        .members
        .iter()
        .filter_map(|m| classifier.classify(class, m, hooks, spec.allow_disposable_returns))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{auto_dispose, framework, marker, scene_unique, table_with};
    use nodehat_core::{DiagnosticCode, MemberEntry, MethodEntry, SpecialType, TypeRef};
    use pretty_assertions::assert_eq;

    fn disposable() -> TypeRef {
        TypeRef::named("System.IDisposable")
    }

    fn node(members: Vec<MemberEntry>) -> TypeEntry {
        members.into_iter().fold(
            TypeEntry::source_class("Test.MyNode")
                .with_base("Godot.Node")
                .as_public_partial(),
            TypeEntry::with_member,
        )
    }

    fn analyze(class: TypeEntry) -> ClassAnalysis {
        let table = table_with(vec![class.clone()]);
        let types = framework();
        ClassPipeline::new(Oracle::new(&table), &types).analyze(&class)
    }

    fn method(name: &str) -> HookCall {
        HookCall::Invoke {
            method: name.into(),
        }
    }

    #[test]
    fn scene_inits_precede_enter_tree_hooks() {
        let analysis = analyze(node(vec![
            MemberEntry::method("Early", MethodEntry::void()).with_attribute(marker("OnEnterTree")),
            MemberEntry::field("TheCamera", TypeRef::named("Godot.Camera2D"))
                .with_attribute(scene_unique(None, None)),
        ]));
        assert_eq!(
            analysis.enter_tree.calls,
            vec![
                HookCall::InitFromScene {
                    member: "TheCamera".into()
                },
                method("Early"),
            ]
        );
        assert_eq!(analysis.enter_tree.helpers.len(), 1);
        assert!(analysis.enter_tree.should_emit());
        assert!(!analysis.ready.has_work());
    }

    #[test]
    fn ready_disposable_and_auto_dispose_release_in_reverse() {
        let analysis = analyze(node(vec![
            MemberEntry::method("DoThing", MethodEntry::new(disposable()))
                .with_attribute(marker("OnReady")),
            MemberEntry::method("MakeThing", MethodEntry::new(disposable()))
                .with_attribute(auto_dispose(None)),
            MemberEntry::method("Plain", MethodEntry::void()),
        ]));

        assert_eq!(
            analysis.ready.calls,
            vec![HookCall::Acquire {
                method: "DoThing".into()
            }]
        );
        assert_eq!(analysis.exit_tree.calls, vec![HookCall::DisposeAll]);
        let Some(Helper::DisposeAll { resets }) = analysis.exit_tree.helpers.first() else {
            panic!("expected aggregate reset first");
        };
        assert_eq!(resets, &["DisposeMakeThing", "__Dispose_DoThing"]);
        let kinds: Vec<&str> = analysis
            .exit_tree
            .helpers
            .iter()
            .map(|h| match h {
                Helper::SceneInit(_) => "scene",
                Helper::DisposeAll { .. } => "all",
                Helper::Slot(_) => "slot",
                Helper::Updater(_) => "updater",
                Helper::Reset(_) => "reset",
            })
            .collect();
        assert_eq!(kinds, ["all", "slot", "reset", "slot", "updater", "reset"]);
        assert!(analysis.diagnostics().is_empty());
    }

    #[test]
    fn exit_hooks_run_before_aggregate() {
        let analysis = analyze(node(vec![
            MemberEntry::method("Res", MethodEntry::new(disposable()))
                .with_attribute(marker("OnEnterTree")),
            MemberEntry::method("Bye", MethodEntry::void()).with_attribute(marker("OnExitTree")),
        ]));
        assert_eq!(analysis.exit_tree.calls, vec![method("Bye"), HookCall::DisposeAll]);
    }

    #[test]
    fn not_partial_reports_and_suppresses_emission() {
        let class = TypeEntry::source_class("Test.Plain")
            .with_base("Godot.Node")
            .with_member(
                MemberEntry::method("DoThing", MethodEntry::void()).with_attribute(marker("OnReady")),
            );
        let analysis = analyze(class);
        assert!(analysis.ready.has_work());
        assert!(!analysis.ready.should_emit());
        assert_eq!(
            analysis.ready.diagnostics.iter().map(|d| d.code).collect::<Vec<_>>(),
            [DiagnosticCode::NodeNotPartial]
        );
        assert!(analysis.enter_tree.diagnostics.is_empty());
        assert!(analysis.method_table.is_none());
    }

    #[test]
    fn existing_override_is_reported() {
        let analysis = analyze(node(vec![
            MemberEntry::method("_Ready", MethodEntry::void()).as_public(),
            MemberEntry::method("DoThing", MethodEntry::void()).with_attribute(marker("OnReady")),
        ]));
        let codes: Vec<_> = analysis.ready.diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(codes, [DiagnosticCode::NodeAlreadyContainsMethod]);
        assert!(analysis.ready.should_emit());
    }

    #[test]
    fn auto_dispose_diagnostics_are_reported_once() {
        let analysis = analyze(node(vec![
            MemberEntry::method("Make", MethodEntry::void())
                .as_public()
                .with_attribute(auto_dispose(None)),
        ]));
        let diagnostics = analysis.diagnostics();
        assert_eq!(diagnostics.count(), 2);
        assert_eq!(diagnostics.with_code(DiagnosticCode::MethodShouldBePrivate).count(), 1);
        assert!(!analysis.exit_tree.has_work());
    }

    #[test]
    fn method_table_gets_synthetic_overrides() {
        let analysis = analyze(node(vec![
            MemberEntry::method("DoThing", MethodEntry::new(disposable()))
                .with_attribute(marker("OnReady")),
            MemberEntry::method(
                "Add",
                MethodEntry::new(TypeRef::special(SpecialType::Int32))
                    .with_param("a", TypeRef::special(SpecialType::Int32)),
            ),
        ]));
        let table = analysis.method_table.as_ref().unwrap();
        let names: Vec<_> = table.entries.iter().map(|e| e.info_name()).collect();
        assert_eq!(names, ["_ExitTree", "_Ready", "Add"]);
        assert_eq!(analysis.roles_of("Add").count(), 1);
        assert!(matches!(
            analysis.roles_of("DoThing").next(),
            Some(MemberRole::PrimaryHook {
                returns_disposable: true,
                ..
            })
        ));
    }

    #[test]
    fn candidates_derive_from_node() {
        let table = table_with(vec![
            TypeEntry::source_class("Test.MyNode").with_base("Godot.Node2D"),
            TypeEntry::source_class("Test.Res").with_base("Godot.Resource"),
        ]);
        let types = framework();
        let pipeline = ClassPipeline::new(Oracle::new(&table), &types);
        let candidates: Vec<_> = table
            .iter()
            .filter(|c| pipeline.is_candidate(c))
            .map(|c| c.name.to_string())
            .collect();
        assert_eq!(candidates, ["Test.MyNode"]);
    }

    #[test]
    fn markers_for_other_passes_are_ignored() {
        let analysis = analyze(node(vec![
            MemberEntry::method("A", MethodEntry::void()).with_attribute(marker("OnReady")),
        ]));
        assert!(!analysis.enter_tree.has_work());
        assert!(!analysis.exit_tree.has_work());
        assert_eq!(analysis.ready.calls, vec![method("A")]);
    }
}
