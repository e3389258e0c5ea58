//! SymbolTable - the host-populated view of a compilation.
//!
//! The host registers every type it knows about: classes declared in the
//! compilation unit ([`TypeOrigin::Source`]) and the referenced framework and
//! library types ([`TypeOrigin::Metadata`]). The generator only reads it.
//!
//! # Storage Model
//!
//! - **Types**: stored by `QualifiedName` (primary key)
//! - **Hash index**: `TypeHash -> QualifiedName` for handle lookups
//! - **Order**: registration order, so iteration is deterministic
//!
//! # Example
//!
//! ```
//! use nodehat_core::{FrameworkNames, SymbolTable, TypeEntry, QualifiedName};
//!
//! let mut table = SymbolTable::with_engine_types(&FrameworkNames::default());
//! table
//!     .register_type(TypeEntry::source_class("Game.Player").with_base("Godot.Node"))
//!     .unwrap();
//!
//! assert!(table.contains(&QualifiedName::from("Godot.Node")));
//! assert_eq!(table.source_classes().count(), 1);
//! ```

use rustc_hash::FxHashMap;

use crate::{
    AttributeData, FrameworkNames, QualifiedName, RegistrationError, TypeEntry, TypeHash, TypeKind,
};

/// Engine value types seeded by [`SymbolTable::with_engine_types`].
const ENGINE_STRUCTS: &[&str] = &[
    "Aabb",
    "Basis",
    "Callable",
    "Color",
    "Plane",
    "Projection",
    "Quaternion",
    "Rect2",
    "Rect2I",
    "Rid",
    "Signal",
    "Transform2D",
    "Transform3D",
    "Variant",
    "Vector2",
    "Vector2I",
    "Vector3",
    "Vector3I",
    "Vector4",
    "Vector4I",
];

/// Engine classes seeded below the root object, as `(name, base)`.
const ENGINE_CLASSES: &[(&str, &str)] = &[
    ("RefCounted", "GodotObject"),
    ("Resource", "RefCounted"),
    ("Node", "GodotObject"),
    ("CanvasItem", "Node"),
    ("Node2D", "CanvasItem"),
    ("Camera2D", "Node2D"),
    ("Sprite2D", "Node2D"),
    ("Node3D", "Node"),
    ("Control", "CanvasItem"),
    ("Label", "Control"),
    ("Timer", "Node"),
];

const RUNTIME_ASSEMBLY: &str = "System.Runtime";

/// Type storage for one compilation.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    /// Types stored by qualified name (PRIMARY storage).
    types: FxHashMap<QualifiedName, TypeEntry>,
    /// Reverse index: hash -> name.
    by_hash: FxHashMap<TypeHash, QualifiedName>,
    /// Registration order.
    order: Vec<QualifiedName>,
}

impl SymbolTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-populated with the engine and framework types named
    /// by `names`: the runtime object and disposable types, the engine object
    /// hierarchy, value types, string-name and node-path classes, the engine
    /// collections, the tool attribute and every marker attribute.
    pub fn with_engine_types(names: &FrameworkNames) -> Self {
        let mut table = Self::new();
        let engine = names.engine_assembly.as_str();

        table.seed(TypeEntry::metadata("System.Object", TypeKind::Class, RUNTIME_ASSEMBLY));
        table.seed(
            TypeEntry::metadata("System.Attribute", TypeKind::Class, RUNTIME_ASSEMBLY)
                .with_base("System.Object"),
        );
        table.seed(TypeEntry::metadata(
            names.disposable_interface.clone(),
            TypeKind::Interface,
            RUNTIME_ASSEMBLY,
        ));

        table.seed(
            TypeEntry::metadata(names.object_class.clone(), TypeKind::Class, engine)
                .with_base("System.Object")
                .with_interface(names.disposable_interface.clone()),
        );
        for (name, base) in ENGINE_CLASSES {
            let base = if *base == "GodotObject" {
                names.object_class.clone()
            } else {
                names.engine_type(base)
            };
            let name = if *name == "Node" {
                names.node_class.clone()
            } else {
                names.engine_type(name)
            };
            table.seed(TypeEntry::metadata(name, TypeKind::Class, engine).with_base(base));
        }
        for name in ENGINE_STRUCTS {
            table.seed(TypeEntry::metadata(
                names.engine_type(name),
                TypeKind::Struct,
                engine,
            ));
        }
        for name in ["StringName", "NodePath"] {
            table.seed(
                TypeEntry::metadata(names.engine_type(name), TypeKind::Class, engine)
                    .with_base("System.Object")
                    .with_interface(names.disposable_interface.clone()),
            );
        }
        for name in ["Array", "Dictionary"] {
            table.seed(
                TypeEntry::metadata(names.collections_type(name), TypeKind::Class, engine)
                    .with_base("System.Object")
                    .with_interface(names.disposable_interface.clone()),
            );
        }
        table.seed(
            TypeEntry::metadata(names.tool_attribute.clone(), TypeKind::Class, engine)
                .with_base("System.Attribute"),
        );

        let markers = &names.attributes_assembly;
        for marker in [
            &names.on_enter_tree,
            &names.on_exit_tree,
            &names.on_ready,
            &names.auto_dispose,
            &names.scene_unique_name,
            &names.godot_ignore,
        ] {
            table.seed(
                TypeEntry::metadata(marker.clone(), TypeKind::Class, markers.as_str())
                    .with_base("System.Attribute"),
            );
        }
        table.seed(TypeEntry::metadata(
            names.accessibility_enum.clone(),
            TypeKind::Enum,
            markers.as_str(),
        ));

        table
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::DuplicateType`] if a type with the same
    /// qualified name is already registered.
    pub fn register_type(&mut self, entry: TypeEntry) -> Result<TypeHash, RegistrationError> {
        if self.types.contains_key(&entry.name) {
            return Err(RegistrationError::DuplicateType(entry.name.to_string()));
        }
        let hash = entry.type_hash;
        self.insert(entry);
        Ok(hash)
    }

    /// Insert or replace. Seeding is idempotent even when two framework
    /// names are configured to the same type.
    fn seed(&mut self, entry: TypeEntry) {
        if let Some(existing) = self.types.get_mut(&entry.name) {
            *existing = entry;
        } else {
            self.insert(entry);
        }
    }

    fn insert(&mut self, entry: TypeEntry) {
        self.by_hash.insert(entry.type_hash, entry.name.clone());
        self.order.push(entry.name.clone());
        self.types.insert(entry.name.clone(), entry);
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get a type by qualified name.
    pub fn get(&self, name: &QualifiedName) -> Option<&TypeEntry> {
        self.types.get(name)
    }

    /// Get a type by hash.
    pub fn get_by_hash(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.by_hash.get(&hash).and_then(|name| self.types.get(name))
    }

    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.types.contains_key(name)
    }

    /// Iterate over all types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeEntry> {
        self.order.iter().filter_map(|name| self.types.get(name))
    }

    /// Classes declared in the compilation unit, in registration order.
    pub fn source_classes(&self) -> impl Iterator<Item = &TypeEntry> {
        self.iter()
            .filter(|e| e.origin == crate::TypeOrigin::Source && e.is_class())
    }

    /// Resolve the attribute class of an attribute application.
    pub fn attribute_class(&self, attribute: &AttributeData) -> Option<&TypeEntry> {
        self.get_by_hash(attribute.class_hash)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
