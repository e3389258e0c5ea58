//! Declared types of members, parameters and returns.

use std::fmt::{self, Write as _};

use crate::{QualifiedName, SpecialType};

/// Structural shape of a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// `void`, only valid as a return type.
    Void,
    /// A keyword type such as `int` or `string`.
    Special(SpecialType),
    /// A named type declared in the symbol table.
    Named(QualifiedName),
    /// An array of `element` with `rank` dimensions.
    Array { element: Box<TypeRef>, rank: u8 },
}

/// A declared type plus its nullable annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub shape: TypeShape,
    /// Declared with a `?` annotation.
    pub nullable: bool,
}

impl TypeRef {
    pub fn void() -> Self {
        Self {
            shape: TypeShape::Void,
            nullable: false,
        }
    }

    pub fn special(special: SpecialType) -> Self {
        Self {
            shape: TypeShape::Special(special),
            nullable: false,
        }
    }

    pub fn named(name: impl Into<QualifiedName>) -> Self {
        Self {
            shape: TypeShape::Named(name.into()),
            nullable: false,
        }
    }

    /// Single-dimensional array of `element`.
    pub fn array_of(element: TypeRef) -> Self {
        Self::array(element, 1)
    }

    pub fn array(element: TypeRef, rank: u8) -> Self {
        Self {
            shape: TypeShape::Array {
                element: Box::new(element),
                rank,
            },
            nullable: false,
        }
    }

    /// Mark as nullable (`T?`).
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn is_void(&self) -> bool {
        matches!(self.shape, TypeShape::Void)
    }

    /// The named type, if this is one.
    pub fn as_named(&self) -> Option<&QualifiedName> {
        match &self.shape {
            TypeShape::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Minimal spelling, as written in a parameter list: `Camera2D?`, `int[]`.
    pub fn minimal(&self) -> String {
        let mut out = String::new();
        self.write_shape(&mut out, Spelling::Minimal);
        if self.nullable {
            out.push('?');
        }
        out
    }

    /// Namespace-qualified spelling without the nullable annotation:
    /// `Godot.Camera2D`, `string`.
    pub fn qualified(&self) -> String {
        let mut out = String::new();
        self.write_shape(&mut out, Spelling::Qualified);
        out
    }

    /// Fully qualified spelling with the `global::` alias and runtime names:
    /// `global::System.String`, `global::Godot.Vector2[]`.
    pub fn global_qualified(&self) -> String {
        let mut out = String::new();
        self.write_shape(&mut out, Spelling::Global);
        out
    }

    fn write_shape(&self, out: &mut String, spelling: Spelling) {
        match (&self.shape, spelling) {
            (TypeShape::Void, _) => out.push_str("void"),
            (TypeShape::Special(s), Spelling::Global) => {
                let _ = write!(out, "global::System.{}", s.runtime_name());
            }
            (TypeShape::Special(s), _) => out.push_str(s.keyword()),
            (TypeShape::Named(name), Spelling::Minimal) => out.push_str(name.simple_name()),
            (TypeShape::Named(name), Spelling::Qualified) => {
                let _ = write!(out, "{name}");
            }
            (TypeShape::Named(name), Spelling::Global) => out.push_str(&name.global_qualified()),
            (TypeShape::Array { element, rank }, _) => {
                element.write_shape(out, spelling);
                if spelling == Spelling::Minimal && element.nullable {
                    out.push('?');
                }
                out.push('[');
                for _ in 1..*rank {
                    out.push(',');
                }
                out.push(']');
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Spelling {
    Minimal,
    Qualified,
    Global,
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.minimal())
    }
}

/// How a parameter is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
    In,
}

impl RefKind {
    /// Keyword prefix including the trailing space, empty for by-value.
    pub const fn prefix(self) -> &'static str {
        match self {
            RefKind::None => "",
            RefKind::Ref => "ref ",
            RefKind::Out => "out ",
            RefKind::In => "in ",
        }
    }
}
