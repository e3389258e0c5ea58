//! Type entries.
//!
//! A `TypeEntry` describes one named type: its identity, where it came from,
//! its inheritance edges, its attributes and modifiers, and its members in
//! declaration order.

use std::fmt;

use crate::{AttributeData, QualifiedName, TypeHash};

use super::MemberEntry;

/// Kind of named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Enum,
    Interface,
}

/// Where a type was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeOrigin {
    /// Declared in the compilation unit being generated for.
    Source,
    /// Loaded from a referenced assembly.
    Metadata,
}

/// Declaration modifiers, kept in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Internal,
    Protected,
    Private,
    Partial,
    Sealed,
    Abstract,
    Static,
}

impl Modifier {
    pub const fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Internal => "internal",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Partial => "partial",
            Modifier::Sealed => "sealed",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Symbol table entry for a named type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeEntry {
    /// Fully qualified name.
    pub name: QualifiedName,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    pub kind: TypeKind,
    pub origin: TypeOrigin,
    /// Name of the assembly the type lives in.
    pub assembly: String,

    // === Inheritance ===
    /// Base class (single inheritance). `None` for the root of a hierarchy.
    pub base: Option<QualifiedName>,
    /// Directly implemented interfaces (or base interfaces for an interface).
    pub interfaces: Vec<QualifiedName>,

    // === Declaration ===
    pub attributes: Vec<AttributeData>,
    pub modifiers: Vec<Modifier>,
    /// Members in declaration order.
    pub members: Vec<MemberEntry>,
}

impl TypeEntry {
    pub fn new(
        name: impl Into<QualifiedName>,
        kind: TypeKind,
        origin: TypeOrigin,
        assembly: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let type_hash = name.to_type_hash();
        Self {
            name,
            type_hash,
            kind,
            origin,
            assembly: assembly.into(),
            base: None,
            interfaces: Vec::new(),
            attributes: Vec::new(),
            modifiers: Vec::new(),
            members: Vec::new(),
        }
    }

    /// A class declared in the compilation unit.
    pub fn source_class(name: impl Into<QualifiedName>) -> Self {
        Self::new(name, TypeKind::Class, TypeOrigin::Source, "")
    }

    /// A type loaded from a referenced assembly.
    pub fn metadata(
        name: impl Into<QualifiedName>,
        kind: TypeKind,
        assembly: impl Into<String>,
    ) -> Self {
        Self::new(name, kind, TypeOrigin::Metadata, assembly)
    }

    // === Builder Methods ===

    /// Set the base class.
    pub fn with_base(mut self, base: impl Into<QualifiedName>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Add an implemented interface.
    pub fn with_interface(mut self, interface: impl Into<QualifiedName>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Shorthand for `public partial`.
    pub fn as_public_partial(self) -> Self {
        self.with_modifier(Modifier::Public)
            .with_modifier(Modifier::Partial)
    }

    pub fn with_member(mut self, member: MemberEntry) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = assembly.into();
        self
    }

    // === Query Methods ===

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    pub fn is_partial(&self) -> bool {
        self.has_modifier(Modifier::Partial)
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Modifiers as written on the declaration, e.g. `public partial`.
    pub fn modifiers_text(&self) -> String {
        self.modifiers
            .iter()
            .map(|m| m.keyword())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if any member (of any kind) carries this name.
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }

    pub fn members_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MemberEntry> {
        self.members.iter().filter(move |m| m.name == name)
    }

    /// Check if the type carries an attribute of the given class.
    pub fn has_attribute(&self, class: TypeHash) -> bool {
        self.attributes.iter().any(|a| a.class_hash == class)
    }

    /// Check if the type lives in the given assembly and dotted namespace.
    pub fn is_in(&self, assembly: &str, namespace: &str) -> bool {
        self.assembly == assembly && self.name.is_in_namespace(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemberEntry, MethodEntry, TypeRef};

    #[test]
    fn builder_sets_identity() {
        let entry = TypeEntry::source_class("Test.Node.MyNode").with_base("Godot.Node");
        assert_eq!(entry.type_hash, TypeHash::from_name("Test.Node.MyNode"));
        assert_eq!(entry.simple_name(), "MyNode");
        assert_eq!(entry.base, Some(QualifiedName::from("Godot.Node")));
        assert_eq!(entry.origin, TypeOrigin::Source);
    }

    #[test]
    fn modifiers_in_declared_order() {
        let entry = TypeEntry::source_class("A")
            .with_modifier(Modifier::Public)
            .with_modifier(Modifier::Sealed)
            .with_modifier(Modifier::Partial);
        assert!(entry.is_partial());
        assert_eq!(entry.modifiers_text(), "public sealed partial");

        let plain = TypeEntry::source_class("B").with_modifier(Modifier::Public);
        assert!(!plain.is_partial());
    }

    #[test]
    fn member_lookup() {
        let entry = TypeEntry::source_class("A")
            .with_member(MemberEntry::method("_Ready", MethodEntry::void()))
            .with_member(MemberEntry::field("Count", TypeRef::named("Godot.Node")));
        assert!(entry.has_member("_Ready"));
        assert!(!entry.has_member("_EnterTree"));
        assert_eq!(entry.members_named("Count").count(), 1);
    }

    #[test]
    fn assembly_and_namespace() {
        let entry = TypeEntry::metadata("Godot.Node", TypeKind::Class, "GodotSharp");
        assert!(entry.is_in("GodotSharp", "Godot"));
        assert!(!entry.is_in("GodotSharp", "Godot.Collections"));
        assert!(!entry.is_in("Game", "Godot"));
    }
}
