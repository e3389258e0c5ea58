//! Scene-injection resolution.
//!
//! Fields and properties carrying the scene-unique marker are populated from
//! a node lookup at the start of the enter-tree override.

use nodehat_core::{AttrValue, TypeEntry, TypeRef};

use crate::{FrameworkTypes, naming};

/// One scene-injected field or property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneInjection {
    pub member: String,
    /// Declared type of the member.
    pub ty: TypeRef,
    /// Node path to look up, e.g. `%TheCamera`.
    pub path: String,
    /// Required lookups throw when the node is missing.
    pub required: bool,
}

impl SceneInjection {
    /// Generated initializer name.
    pub fn init_name(&self) -> String {
        naming::scene_init_name(&self.member)
    }

    /// Engine lookup used by the initializer.
    pub fn lookup(&self) -> &'static str {
        if self.required {
            "GetNode"
        } else {
            "GetNodeOrNull"
        }
    }
}

/// Resolve every scene-injected member of `class`, in declaration order.
///
/// The path comes from the `nodePath` argument (named or first positional);
/// an absent or empty path becomes `"%" + member`. An explicit `required`
/// argument always wins; otherwise a nullable member is optional and any
/// other member is required.
pub fn resolve_scene_injections(class: &TypeEntry, types: &FrameworkTypes) -> Vec<SceneInjection> {
    class
        .members
        .iter()
        .filter_map(|member| {
            let ty = member.value_type()?;
            let attr = member.attribute(types.scene_unique_name)?;
            let path = attr
                .argument(0, "nodePath")
                .and_then(AttrValue::as_str)
                .filter(|p| !p.is_empty())
                .map_or_else(|| format!("%{}", member.name), str::to_string);
            let required = attr
                .argument(1, "required")
                .and_then(AttrValue::as_bool)
                .unwrap_or(!ty.nullable);
            Some(SceneInjection {
                member: member.name.clone(),
                ty: ty.clone(),
                path,
                required,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{framework, scene_unique};
    use nodehat_core::{MemberEntry, MethodEntry};
    use pretty_assertions::assert_eq;

    fn camera() -> TypeRef {
        TypeRef::named("Godot.Camera2D")
    }

    fn resolve(members: Vec<MemberEntry>) -> Vec<(String, String, bool)> {
        let class = members
            .into_iter()
            .fold(TypeEntry::source_class("Test.MyNode"), TypeEntry::with_member);
        resolve_scene_injections(&class, &framework())
            .into_iter()
            .map(|s| (s.member, s.path, s.required))
            .collect()
    }

    #[test]
    fn mirrors_attribute_forms() {
        let got = resolve(vec![
            MemberEntry::field("TheCamera", camera()).with_attribute(scene_unique(None, None)),
            MemberEntry::field("TheCamera2", camera())
                .with_attribute(scene_unique(Some("%TheCamera"), None)),
            MemberEntry::property("TheCamera3", camera().nullable())
                .with_attribute(scene_unique(Some("%TheCamera"), Some(false))),
            MemberEntry::property("TheCamera4", camera().nullable())
                .with_attribute(scene_unique(None, Some(false))),
        ]);
        assert_eq!(
            got,
            vec![
                ("TheCamera".into(), "%TheCamera".into(), true),
                ("TheCamera2".into(), "%TheCamera".into(), true),
                ("TheCamera3".into(), "%TheCamera".into(), false),
                ("TheCamera4".into(), "%TheCamera4".into(), false),
            ]
        );
    }

    #[test]
    fn nullability_defaults_required() {
        let got = resolve(vec![
            MemberEntry::field("A", camera().nullable()).with_attribute(scene_unique(None, None)),
            MemberEntry::field("B", camera()).with_attribute(scene_unique(None, None)),
            MemberEntry::field("C", camera().nullable())
                .with_attribute(scene_unique(None, Some(true))),
        ]);
        assert_eq!(
            got.iter().map(|(_, _, r)| *r).collect::<Vec<_>>(),
            [false, true, true]
        );
    }

    #[test]
    fn empty_path_is_derived() {
        let got = resolve(vec![
            MemberEntry::field("Label", camera()).with_attribute(scene_unique(Some(""), None)),
        ]);
        assert_eq!(got[0].1, "%Label");
    }

    #[test]
    fn named_arguments() {
        let attr = nodehat_core::AttributeData::new("GodotHat.SceneUniqueNameAttribute")
            .with_named("required", AttrValue::Bool(false))
            .with_named("nodePath", AttrValue::Str("%TheCamera".into()));
        let got = resolve(vec![MemberEntry::property("TheCamera5", camera().nullable()).with_attribute(attr)]);
        assert_eq!(got, vec![("TheCamera5".into(), "%TheCamera".into(), false)]);
    }

    #[test]
    fn unmarked_and_methods_ignored() {
        let got = resolve(vec![
            MemberEntry::field("Plain", camera()),
            MemberEntry::method("M", MethodEntry::void()).with_attribute(scene_unique(None, None)),
        ]);
        assert!(got.is_empty());
    }

    #[test]
    fn lookup_primitive() {
        let mut s = SceneInjection {
            member: "A".into(),
            ty: camera(),
            path: "%A".into(),
            required: true,
        };
        assert_eq!(s.lookup(), "GetNode");
        s.required = false;
        assert_eq!(s.lookup(), "GetNodeOrNull");
        assert_eq!(s.init_name(), "__InitFromScene_A");
    }
}
