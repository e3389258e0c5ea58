//! Type and capability queries over the symbol table.
//!
//! The [`Oracle`] answers the handful of questions the classifier needs:
//! resolve a required framework type, walk a class's base chain, and test
//! class derivation and interface implementation. [`FrameworkTypes`] holds
//! the handles resolved once per run.

use nodehat_core::{
    FrameworkNames, QualifiedName, ResolutionError, SymbolTable, TypeEntry, TypeHash, TypeRef,
};
use rustc_hash::FxHashSet;

/// Read-only query layer over a [`SymbolTable`].
#[derive(Debug, Clone, Copy)]
pub struct Oracle<'a> {
    table: &'a SymbolTable,
}

impl<'a> Oracle<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Resolve a type that must exist for generation to make sense.
    ///
    /// # Errors
    ///
    /// [`ResolutionError::MissingType`] when the name is not registered.
    pub fn resolve_required_type(&self, name: &QualifiedName) -> Result<TypeHash, ResolutionError> {
        self.table
            .get(name)
            .map(|entry| entry.type_hash)
            .ok_or_else(|| ResolutionError::MissingType {
                name: name.to_string(),
            })
    }

    /// The type itself followed by each base class up to the root.
    ///
    /// Stops at the first base that is not registered, and at a repeated type
    /// so a malformed table cannot loop.
    pub fn this_and_base_types(&self, name: &QualifiedName) -> BaseChain<'a> {
        BaseChain {
            table: self.table,
            next: self.table.get(name),
            seen: FxHashSet::default(),
        }
    }

    /// Check if `ancestor` appears anywhere in the base chain of `ty`,
    /// including `ty` itself.
    pub fn extends_class(&self, ty: &QualifiedName, ancestor: TypeHash) -> bool {
        self.this_and_base_types(ty)
            .any(|entry| entry.type_hash == ancestor)
    }

    /// Check if `ty` is `iface` or implements it, directly, through a base
    /// class, or through an inherited interface.
    pub fn implements_interface(&self, ty: &QualifiedName, iface: TypeHash) -> bool {
        let mut pending: Vec<&TypeEntry> = self.this_and_base_types(ty).collect();
        let mut seen = FxHashSet::default();
        while let Some(entry) = pending.pop() {
            if entry.type_hash == iface {
                return true;
            }
            if !seen.insert(entry.type_hash) {
                continue;
            }
            pending.extend(entry.interfaces.iter().filter_map(|i| self.table.get(i)));
        }
        false
    }

    /// Declared-type form of [`implements_interface`](Self::implements_interface).
    ///
    /// Keyword types and arrays never satisfy a named interface here.
    pub fn type_implements(&self, ty: &TypeRef, iface: TypeHash) -> bool {
        ty.as_named()
            .is_some_and(|name| self.implements_interface(name, iface))
    }

    /// First type in the base chain that lives in the given assembly and
    /// namespace.
    pub fn first_base_in(
        &self,
        ty: &QualifiedName,
        assembly: &str,
        namespace: &str,
    ) -> Option<&'a TypeEntry> {
        self.this_and_base_types(ty)
            .find(|entry| entry.is_in(assembly, namespace))
    }
}

/// Iterator over a type and its base classes.
pub struct BaseChain<'a> {
    table: &'a SymbolTable,
    next: Option<&'a TypeEntry>,
    seen: FxHashSet<TypeHash>,
}

impl<'a> Iterator for BaseChain<'a> {
    type Item = &'a TypeEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.seen.insert(current.type_hash) {
            return None;
        }
        self.next = current.base.as_ref().and_then(|b| self.table.get(b));
        Some(current)
    }
}

/// Framework type handles, resolved once per run.
#[derive(Debug, Clone)]
pub struct FrameworkTypes {
    pub names: FrameworkNames,
    pub node: TypeHash,
    pub object: TypeHash,
    pub tool: TypeHash,
    pub disposable: TypeHash,
    pub on_enter_tree: TypeHash,
    pub on_exit_tree: TypeHash,
    pub on_ready: TypeHash,
    pub auto_dispose: TypeHash,
    pub scene_unique_name: TypeHash,
    pub godot_ignore: TypeHash,
}

impl FrameworkTypes {
    /// Resolve every required framework type.
    ///
    /// # Errors
    ///
    /// The first name that does not resolve aborts with
    /// [`ResolutionError::MissingType`].
    pub fn resolve(oracle: &Oracle<'_>, names: &FrameworkNames) -> Result<Self, ResolutionError> {
        let resolve = |name: &QualifiedName| oracle.resolve_required_type(name);
        Ok(Self {
            node: resolve(&names.node_class)?,
            object: resolve(&names.object_class)?,
            tool: resolve(&names.tool_attribute)?,
            disposable: resolve(&names.disposable_interface)?,
            on_enter_tree: resolve(&names.on_enter_tree)?,
            on_exit_tree: resolve(&names.on_exit_tree)?,
            on_ready: resolve(&names.on_ready)?,
            auto_dispose: resolve(&names.auto_dispose)?,
            scene_unique_name: resolve(&names.scene_unique_name)?,
            godot_ignore: resolve(&names.godot_ignore)?,
            names: names.clone(),
        })
    }
}
