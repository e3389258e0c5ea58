//! Built-in types of the host language that have a keyword spelling.

use std::fmt;

/// Special (keyword) types.
///
/// These are the host language's built-in scalar types plus `string` and
/// `object`. Everything else is a named type in the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialType {
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    String,
    Object,
}

impl SpecialType {
    /// Keyword spelling, e.g. `int`.
    pub const fn keyword(self) -> &'static str {
        match self {
            SpecialType::Boolean => "bool",
            SpecialType::Char => "char",
            SpecialType::SByte => "sbyte",
            SpecialType::Byte => "byte",
            SpecialType::Int16 => "short",
            SpecialType::UInt16 => "ushort",
            SpecialType::Int32 => "int",
            SpecialType::UInt32 => "uint",
            SpecialType::Int64 => "long",
            SpecialType::UInt64 => "ulong",
            SpecialType::Single => "float",
            SpecialType::Double => "double",
            SpecialType::String => "string",
            SpecialType::Object => "object",
        }
    }

    /// Runtime type name in the `System` namespace, e.g. `Int32`.
    pub const fn runtime_name(self) -> &'static str {
        match self {
            SpecialType::Boolean => "Boolean",
            SpecialType::Char => "Char",
            SpecialType::SByte => "SByte",
            SpecialType::Byte => "Byte",
            SpecialType::Int16 => "Int16",
            SpecialType::UInt16 => "UInt16",
            SpecialType::Int32 => "Int32",
            SpecialType::UInt32 => "UInt32",
            SpecialType::Int64 => "Int64",
            SpecialType::UInt64 => "UInt64",
            SpecialType::Single => "Single",
            SpecialType::Double => "Double",
            SpecialType::String => "String",
            SpecialType::Object => "Object",
        }
    }

    /// Check if this is one of the integral types (including `char`).
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            SpecialType::Char
                | SpecialType::SByte
                | SpecialType::Byte
                | SpecialType::Int16
                | SpecialType::UInt16
                | SpecialType::Int32
                | SpecialType::UInt32
                | SpecialType::Int64
                | SpecialType::UInt64
        )
    }

    /// Check if this is a floating point type.
    pub const fn is_floating(self) -> bool {
        matches!(self, SpecialType::Single | SpecialType::Double)
    }
}

impl fmt::Display for SpecialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
