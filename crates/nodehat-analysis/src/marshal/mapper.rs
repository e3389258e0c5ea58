//! Declared type to wire category mapping.

use nodehat_core::{SpecialType, TypeEntry, TypeKind, TypeRef, TypeShape, VariantType};

use crate::{FrameworkTypes, Oracle};

/// Maps declared types to [`VariantType`] categories.
///
/// The mapping is pure: it reads the symbol table and nothing else, so the
/// same declared type always maps to the same category.
#[derive(Debug, Clone, Copy)]
pub struct ValueTypeMapper<'a> {
    oracle: Oracle<'a>,
    types: &'a FrameworkTypes,
}

impl<'a> ValueTypeMapper<'a> {
    pub fn new(oracle: Oracle<'a>, types: &'a FrameworkTypes) -> Self {
        Self { oracle, types }
    }

    /// Category of `ty`, or `None` when it cannot cross the engine boundary.
    ///
    /// `void` is unmapped; callers treat a void return separately.
    pub fn map(&self, ty: &TypeRef) -> Option<VariantType> {
        match &ty.shape {
            TypeShape::Void => None,
            TypeShape::Special(special) => {
                if ty.nullable && !matches!(special, SpecialType::String | SpecialType::Object) {
                    return None;
                }
                map_special(*special)
            }
            TypeShape::Named(name) => {
                let entry = self.oracle.table().get(name)?;
                if ty.nullable && matches!(entry.kind, TypeKind::Struct | TypeKind::Enum) {
                    return None;
                }
                self.map_entry(entry)
            }
            TypeShape::Array { element, rank } => {
                if *rank != 1 {
                    return None;
                }
                self.map_array_element(element)
            }
        }
    }

    fn map_entry(&self, entry: &TypeEntry) -> Option<VariantType> {
        let names = &self.types.names;
        match entry.kind {
            TypeKind::Enum => Some(VariantType::Int),
            TypeKind::Struct => {
                if self.is_engine(entry) {
                    VariantType::engine_value_type(entry.simple_name())
                } else {
                    None
                }
            }
            TypeKind::Class | TypeKind::Interface => {
                if self.is_engine(entry) {
                    match entry.simple_name() {
                        "StringName" => return Some(VariantType::StringName),
                        "NodePath" => return Some(VariantType::NodePath),
                        _ => {}
                    }
                }
                if entry.is_in(&names.engine_assembly, &names.collections_namespace) {
                    match entry.simple_name() {
                        "Array" => return Some(VariantType::Array),
                        "Dictionary" => return Some(VariantType::Dictionary),
                        _ => {}
                    }
                }
                self.oracle
                    .extends_class(&entry.name, self.types.object)
                    .then_some(VariantType::Object)
            }
        }
    }

    fn map_array_element(&self, element: &TypeRef) -> Option<VariantType> {
        match &element.shape {
            TypeShape::Special(special) => match special {
                SpecialType::Byte => Some(VariantType::PackedByteArray),
                SpecialType::Int32 => Some(VariantType::PackedInt32Array),
                SpecialType::Int64 => Some(VariantType::PackedInt64Array),
                SpecialType::Single => Some(VariantType::PackedFloat32Array),
                SpecialType::Double => Some(VariantType::PackedFloat64Array),
                SpecialType::String => Some(VariantType::PackedStringArray),
                _ => None,
            },
            TypeShape::Named(name) => {
                let entry = self.oracle.table().get(name)?;
                if self.is_engine(entry) {
                    let packed = match entry.simple_name() {
                        "Color" => Some(VariantType::PackedColorArray),
                        "Vector2" => Some(VariantType::PackedVector2Array),
                        "Vector3" => Some(VariantType::PackedVector3Array),
                        "Vector4" => Some(VariantType::PackedVector4Array),
                        "NodePath" | "Rid" | "StringName" => Some(VariantType::Array),
                        _ => None,
                    };
                    if packed.is_some() {
                        return packed;
                    }
                }
                (entry.kind == TypeKind::Class
                    && self.oracle.extends_class(&entry.name, self.types.object))
                .then_some(VariantType::Array)
            }
            TypeShape::Void | TypeShape::Array { .. } => None,
        }
    }

    fn is_engine(&self, entry: &TypeEntry) -> bool {
        let names = &self.types.names;
        entry.is_in(&names.engine_assembly, &names.engine_namespace)
    }
}

fn map_special(special: SpecialType) -> Option<VariantType> {
    match special {
        SpecialType::Boolean => Some(VariantType::Bool),
        SpecialType::Single | SpecialType::Double => Some(VariantType::Float),
        SpecialType::String => Some(VariantType::String),
        SpecialType::Object => None,
        s if s.is_integral() => Some(VariantType::Int),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{framework, table_with};
    use nodehat_core::TypeEntry;

    fn map(ty: TypeRef) -> Option<VariantType> {
        let table = table_with(vec![
            TypeEntry::metadata("Game.Stats", TypeKind::Struct, "Game"),
            TypeEntry::metadata("Game.Mode", TypeKind::Enum, "Game"),
            TypeEntry::source_class("Game.Player").with_base("Godot.Node2D"),
            TypeEntry::source_class("Game.Plain").with_base("System.Object"),
        ]);
        let types = framework();
        ValueTypeMapper::new(Oracle::new(&table), &types).map(&ty)
    }

    #[test]
    fn keyword_types() {
        assert_eq!(map(TypeRef::special(SpecialType::Boolean)), Some(VariantType::Bool));
        assert_eq!(map(TypeRef::special(SpecialType::Char)), Some(VariantType::Int));
        assert_eq!(map(TypeRef::special(SpecialType::UInt64)), Some(VariantType::Int));
        assert_eq!(map(TypeRef::special(SpecialType::Single)), Some(VariantType::Float));
        assert_eq!(map(TypeRef::special(SpecialType::Double)), Some(VariantType::Float));
        assert_eq!(map(TypeRef::special(SpecialType::String)), Some(VariantType::String));
        assert_eq!(map(TypeRef::special(SpecialType::String).nullable()), Some(VariantType::String));
        assert_eq!(map(TypeRef::special(SpecialType::Object)), None);
        assert_eq!(map(TypeRef::special(SpecialType::Int32).nullable()), None);
        assert_eq!(map(TypeRef::void()), None);
    }

    #[test]
    fn named_types() {
        assert_eq!(map(TypeRef::named("Godot.Vector2")), Some(VariantType::Vector2));
        assert_eq!(map(TypeRef::named("Godot.Color")), Some(VariantType::Color));
        assert_eq!(map(TypeRef::named("Godot.Variant")), Some(VariantType::Nil));
        assert_eq!(map(TypeRef::named("Godot.StringName")), Some(VariantType::StringName));
        assert_eq!(map(TypeRef::named("Godot.NodePath")), Some(VariantType::NodePath));
        assert_eq!(map(TypeRef::named("Godot.Collections.Array")), Some(VariantType::Array));
        assert_eq!(
            map(TypeRef::named("Godot.Collections.Dictionary")),
            Some(VariantType::Dictionary)
        );
        assert_eq!(map(TypeRef::named("Godot.Camera2D").nullable()), Some(VariantType::Object));
        assert_eq!(map(TypeRef::named("Game.Player")), Some(VariantType::Object));
        assert_eq!(map(TypeRef::named("Game.Mode")), Some(VariantType::Int));
    }

    #[test]
    fn unmapped_named_types() {
        assert_eq!(map(TypeRef::named("Game.Stats")), None);
        assert_eq!(map(TypeRef::named("Game.Plain")), None);
        assert_eq!(map(TypeRef::named("Game.Missing")), None);
        assert_eq!(map(TypeRef::named("System.IDisposable")), None);
        assert_eq!(map(TypeRef::named("Godot.Vector2").nullable()), None);
    }

    #[test]
    fn arrays() {
        let arr = |ty| map(TypeRef::array_of(ty));
        assert_eq!(arr(TypeRef::special(SpecialType::Byte)), Some(VariantType::PackedByteArray));
        assert_eq!(arr(TypeRef::special(SpecialType::Int32)), Some(VariantType::PackedInt32Array));
        assert_eq!(arr(TypeRef::special(SpecialType::Int64)), Some(VariantType::PackedInt64Array));
        assert_eq!(arr(TypeRef::special(SpecialType::Single)), Some(VariantType::PackedFloat32Array));
        assert_eq!(arr(TypeRef::special(SpecialType::Double)), Some(VariantType::PackedFloat64Array));
        assert_eq!(arr(TypeRef::special(SpecialType::String)), Some(VariantType::PackedStringArray));
        assert_eq!(arr(TypeRef::named("Godot.Color")), Some(VariantType::PackedColorArray));
        assert_eq!(arr(TypeRef::named("Godot.Vector3")), Some(VariantType::PackedVector3Array));
        assert_eq!(arr(TypeRef::named("Godot.Rid")), Some(VariantType::Array));
        assert_eq!(arr(TypeRef::named("Godot.StringName")), Some(VariantType::Array));
        assert_eq!(arr(TypeRef::named("Game.Player")), Some(VariantType::Array));
        assert_eq!(arr(TypeRef::special(SpecialType::Int16)), None);
        assert_eq!(arr(TypeRef::named("Game.Stats")), None);
        assert_eq!(arr(TypeRef::named("Godot.Basis")), None);
        assert_eq!(map(TypeRef::array(TypeRef::special(SpecialType::Int32), 2)), None);
        assert_eq!(map(TypeRef::array_of(TypeRef::array_of(TypeRef::special(SpecialType::Int32)))), None);
    }
}
