//! Member entries: methods, fields and properties.

use crate::{AttributeData, RefKind, TypeHash, TypeRef, Visibility};

/// A member declared on a type.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberEntry {
    pub name: String,
    /// Declared accessibility. Members default to private.
    pub visibility: Visibility,
    pub is_static: bool,
    /// Compiler-synthesized (backing fields, default constructors, ...).
    pub is_implicit: bool,
    pub attributes: Vec<AttributeData>,
    pub kind: MemberKind,
}

/// What kind of member this is.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberKind {
    Method(MethodEntry),
    Field(TypeRef),
    Property(TypeRef),
}

/// Method signature.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodEntry {
    pub return_type: TypeRef,
    pub params: Vec<ParamEntry>,
    pub method_kind: MethodKind,
    /// Returns `ref T` / `ref readonly T`.
    pub returns_by_ref: bool,
}

/// Method kinds the host distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    Operator,
    /// Property or event accessor.
    Accessor,
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamEntry {
    pub name: String,
    pub ty: TypeRef,
    pub ref_kind: RefKind,
}

impl ParamEntry {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            ref_kind: RefKind::None,
        }
    }

    /// Declaration text, e.g. `ref int count`.
    pub fn declaration(&self) -> String {
        format!("{}{} {}", self.ref_kind.prefix(), self.ty.minimal(), self.name)
    }
}

impl MethodEntry {
    pub fn new(return_type: TypeRef) -> Self {
        Self {
            return_type,
            params: Vec::new(),
            method_kind: MethodKind::Ordinary,
            returns_by_ref: false,
        }
    }

    pub fn void() -> Self {
        Self::new(TypeRef::void())
    }

    // === Builder Methods ===

    pub fn with_param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push(ParamEntry::new(name, ty));
        self
    }

    /// Add a `ref`/`out`/`in` parameter.
    pub fn with_ref_param(mut self, name: impl Into<String>, ty: TypeRef, ref_kind: RefKind) -> Self {
        let mut param = ParamEntry::new(name, ty);
        param.ref_kind = ref_kind;
        self.params.push(param);
        self
    }

    pub fn with_kind(mut self, kind: MethodKind) -> Self {
        self.method_kind = kind;
        self
    }

    pub fn as_ref_return(mut self) -> Self {
        self.returns_by_ref = true;
        self
    }

    // === Query Methods ===

    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl MemberEntry {
    fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Private,
            is_static: false,
            is_implicit: false,
            attributes: Vec::new(),
            kind,
        }
    }

    pub fn method(name: impl Into<String>, method: MethodEntry) -> Self {
        Self::new(name, MemberKind::Method(method))
    }

    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, MemberKind::Field(ty))
    }

    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, MemberKind::Property(ty))
    }

    // === Builder Methods ===

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn as_public(self) -> Self {
        self.with_visibility(Visibility::Public)
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn as_implicit(mut self) -> Self {
        self.is_implicit = true;
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    // === Query Methods ===

    pub fn as_method(&self) -> Option<&MethodEntry> {
        match &self.kind {
            MemberKind::Method(method) => Some(method),
            _ => None,
        }
    }

    /// Declared type of a field or property.
    pub fn value_type(&self) -> Option<&TypeRef> {
        match &self.kind {
            MemberKind::Field(ty) | MemberKind::Property(ty) => Some(ty),
            MemberKind::Method(_) => None,
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method(_))
    }

    /// First attribute of the given class.
    pub fn attribute(&self, class: TypeHash) -> Option<&AttributeData> {
        self.attributes.iter().find(|a| a.class_hash == class)
    }
}
