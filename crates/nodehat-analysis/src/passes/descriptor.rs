//! Class identity as seen by one lifecycle pass.

use nodehat_core::{QualifiedName, TypeEntry};

use super::PassSpec;
use crate::FrameworkTypes;

/// Immutable per-pass view of a class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: QualifiedName,
    pub base: Option<QualifiedName>,
    /// Declared modifiers, space separated (`public partial`).
    pub modifiers: String,
    pub is_partial: bool,
    /// Carries the engine's tool marker and runs inside the editor.
    pub is_tool: bool,
    /// Already declares the override this pass would generate.
    pub has_override: bool,
}

impl ClassDescriptor {
    pub fn new(class: &TypeEntry, spec: &PassSpec, types: &FrameworkTypes) -> Self {
        Self {
            name: class.name.clone(),
            base: class.base.clone(),
            modifiers: class.modifiers_text(),
            is_partial: class.is_partial(),
            is_tool: class.has_attribute(types.tool),
            has_override: class.has_member(spec.override_name),
        }
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    /// Dotted namespace, empty for the global namespace.
    pub fn namespace(&self) -> String {
        self.name.namespace_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::framework;
    use nodehat_core::{AttributeData, MemberEntry, MethodEntry};

    #[test]
    fn reads_declaration() {
        let types = framework();
        let class = TypeEntry::source_class("Test.MyNode")
            .with_base("Godot.Node")
            .as_public_partial()
            .with_attribute(AttributeData::new("Godot.ToolAttribute"))
            .with_member(MemberEntry::method("_Ready", MethodEntry::void()).as_public());

        let ready = ClassDescriptor::new(&class, &PassSpec::READY, &types);
        assert_eq!(ready.modifiers, "public partial");
        assert!(ready.is_partial);
        assert!(ready.is_tool);
        assert!(ready.has_override);
        assert_eq!(ready.namespace(), "Test");
        assert_eq!(ready.simple_name(), "MyNode");

        let enter = ClassDescriptor::new(&class, &PassSpec::ENTER_TREE, &types);
        assert!(!enter.has_override);
    }
}
