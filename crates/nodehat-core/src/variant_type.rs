//! Wire categories for marshalled method signatures.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Closed set of wire categories a declared type can marshal as.
///
/// Discriminants are the engine's variant type codes, so a category can be
/// exchanged with the engine as a plain integer.
///
/// ```
/// use nodehat_core::VariantType;
///
/// assert_eq!(u8::from(VariantType::String), 4);
/// assert_eq!(VariantType::try_from(24u8).unwrap(), VariantType::Object);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive,
)]
#[repr(u8)]
pub enum VariantType {
    Nil = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Vector2 = 5,
    Vector2I = 6,
    Rect2 = 7,
    Rect2I = 8,
    Vector3 = 9,
    Vector3I = 10,
    Transform2D = 11,
    Vector4 = 12,
    Vector4I = 13,
    Plane = 14,
    Quaternion = 15,
    Aabb = 16,
    Basis = 17,
    Transform3D = 18,
    Projection = 19,
    Color = 20,
    StringName = 21,
    NodePath = 22,
    Rid = 23,
    Object = 24,
    Callable = 25,
    Signal = 26,
    Dictionary = 27,
    Array = 28,
    PackedByteArray = 29,
    PackedInt32Array = 30,
    PackedInt64Array = 31,
    PackedFloat32Array = 32,
    PackedFloat64Array = 33,
    PackedStringArray = 34,
    PackedVector2Array = 35,
    PackedVector3Array = 36,
    PackedColorArray = 37,
    PackedVector4Array = 38,
}

impl VariantType {
    /// Member name as spelled in `Variant.Type`.
    pub const fn name(self) -> &'static str {
        match self {
            VariantType::Nil => "Nil",
            VariantType::Bool => "Bool",
            VariantType::Int => "Int",
            VariantType::Float => "Float",
            VariantType::String => "String",
            VariantType::Vector2 => "Vector2",
            VariantType::Vector2I => "Vector2I",
            VariantType::Rect2 => "Rect2",
            VariantType::Rect2I => "Rect2I",
            VariantType::Vector3 => "Vector3",
            VariantType::Vector3I => "Vector3I",
            VariantType::Transform2D => "Transform2D",
            VariantType::Vector4 => "Vector4",
            VariantType::Vector4I => "Vector4I",
            VariantType::Plane => "Plane",
            VariantType::Quaternion => "Quaternion",
            VariantType::Aabb => "Aabb",
            VariantType::Basis => "Basis",
            VariantType::Transform3D => "Transform3D",
            VariantType::Projection => "Projection",
            VariantType::Color => "Color",
            VariantType::StringName => "StringName",
            VariantType::NodePath => "NodePath",
            VariantType::Rid => "Rid",
            VariantType::Object => "Object",
            VariantType::Callable => "Callable",
            VariantType::Signal => "Signal",
            VariantType::Dictionary => "Dictionary",
            VariantType::Array => "Array",
            VariantType::PackedByteArray => "PackedByteArray",
            VariantType::PackedInt32Array => "PackedInt32Array",
            VariantType::PackedInt64Array => "PackedInt64Array",
            VariantType::PackedFloat32Array => "PackedFloat32Array",
            VariantType::PackedFloat64Array => "PackedFloat64Array",
            VariantType::PackedStringArray => "PackedStringArray",
            VariantType::PackedVector2Array => "PackedVector2Array",
            VariantType::PackedVector3Array => "PackedVector3Array",
            VariantType::PackedColorArray => "PackedColorArray",
            VariantType::PackedVector4Array => "PackedVector4Array",
        }
    }

    /// Engine value type for a simple name inside the engine namespace.
    pub fn engine_value_type(name: &str) -> Option<Self> {
        let ty = match name {
            "Aabb" => VariantType::Aabb,
            "Basis" => VariantType::Basis,
            "Callable" => VariantType::Callable,
            "Color" => VariantType::Color,
            "Plane" => VariantType::Plane,
            "Projection" => VariantType::Projection,
            "Quaternion" => VariantType::Quaternion,
            "Rect2" => VariantType::Rect2,
            "Rect2I" => VariantType::Rect2I,
            "Rid" => VariantType::Rid,
            "Signal" => VariantType::Signal,
            "Transform2D" => VariantType::Transform2D,
            "Transform3D" => VariantType::Transform3D,
            "Variant" => VariantType::Nil,
            "Vector2" => VariantType::Vector2,
            "Vector2I" => VariantType::Vector2I,
            "Vector3" => VariantType::Vector3,
            "Vector3I" => VariantType::Vector3I,
            "Vector4" => VariantType::Vector4,
            "Vector4I" => VariantType::Vector4I,
            _ => return None,
        };
        Some(ty)
    }

    /// Check if this is one of the packed array categories.
    pub const fn is_packed_array(self) -> bool {
        (self as u8) >= (VariantType::PackedByteArray as u8)
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_round_trip_through_u8() {
        assert_eq!(u8::from(VariantType::Nil), 0);
        assert_eq!(u8::from(VariantType::Object), 24);
        assert_eq!(u8::from(VariantType::PackedVector4Array), 38);
        assert_eq!(VariantType::try_from(34u8), Ok(VariantType::PackedStringArray));
        assert!(VariantType::try_from(39u8).is_err());
    }

    #[test]
    fn engine_value_types() {
        assert_eq!(VariantType::engine_value_type("Vector2"), Some(VariantType::Vector2));
        assert_eq!(VariantType::engine_value_type("Variant"), Some(VariantType::Nil));
        assert_eq!(VariantType::engine_value_type("Matrix"), None);
    }

    #[test]
    fn packed_arrays() {
        assert!(VariantType::PackedByteArray.is_packed_array());
        assert!(VariantType::PackedColorArray.is_packed_array());
        assert!(!VariantType::Array.is_packed_array());
        assert!(!VariantType::Int.is_packed_array());
    }
}
