//! Attribute applications on types and members.

use crate::{QualifiedName, TypeHash};

/// A constant attribute argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    /// An enum constant, e.g. `Accessibility.Internal`.
    Enum { ty: QualifiedName, member: String },
}

impl AttrValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String value; `None` for null and non-string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn enum_member(&self) -> Option<&str> {
        match self {
            AttrValue::Enum { member, .. } => Some(member),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

/// One attribute applied to a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeData {
    /// Attribute class.
    pub class: QualifiedName,
    /// Hash of `class`, compared against resolved marker handles.
    pub class_hash: TypeHash,
    /// Constructor arguments in declaration order.
    pub positional: Vec<AttrValue>,
    /// Named arguments (`Name = value` or `name: value`).
    pub named: Vec<(String, AttrValue)>,
}

impl AttributeData {
    pub fn new(class: impl Into<QualifiedName>) -> Self {
        let class = class.into();
        let class_hash = class.to_type_hash();
        Self {
            class,
            class_hash,
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    // === Builder Methods ===

    pub fn with_arg(mut self, value: AttrValue) -> Self {
        self.positional.push(value);
        self
    }

    pub fn with_named(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.named.push((name.into(), value));
        self
    }

    // === Query Methods ===

    /// Look up an argument by name first, then by constructor position.
    ///
    /// Names compare case-insensitively so both the constructor parameter
    /// (`nodePath`) and the property spelling (`NodePath`) are accepted. A
    /// named argument holding `null` does not shadow the positional one.
    pub fn argument(&self, position: usize, name: &str) -> Option<&AttrValue> {
        self.named
            .iter()
            .find(|(n, v)| n.eq_ignore_ascii_case(name) && !v.is_null())
            .map(|(_, v)| v)
            .or_else(|| self.positional.get(position))
    }
}
