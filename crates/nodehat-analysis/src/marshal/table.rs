//! Method table construction.

use std::cmp::Ordering;

use nodehat_core::{
    MemberEntry, MethodKind, QualifiedName, RefKind, TypeEntry, TypeRef, VariantType,
};
use rustc_hash::FxHashMap;
use tracing::warn;

use super::ValueTypeMapper;
use crate::{FrameworkTypes, Marker, MarkerSet, Oracle};

/// A marshalled parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct MarshalledParam {
    pub name: String,
    pub ty: TypeRef,
    pub category: VariantType,
}

/// One dispatchable method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodTableEntry {
    pub name: String,
    /// Overload suffix: empty for the first overload, then `2`, `3`, ...
    pub suffix: String,
    pub return_type: TypeRef,
    /// `None` for `void`.
    pub return_category: Option<VariantType>,
    pub params: Vec<MarshalledParam>,
    /// Added for a generated lifecycle override, not declared in source.
    pub synthetic: bool,
}

impl MethodTableEntry {
    fn new(
        name: impl Into<String>,
        return_type: TypeRef,
        return_category: Option<VariantType>,
        params: Vec<MarshalledParam>,
    ) -> Self {
        Self {
            name: name.into(),
            suffix: String::new(),
            return_type,
            return_category,
            params,
            synthetic: false,
        }
    }

    /// A zero-argument void entry for a generated override.
    pub fn synthetic(name: impl Into<String>) -> Self {
        Self {
            synthetic: true,
            ..Self::new(name, TypeRef::void(), None, Vec::new())
        }
    }

    /// Name of the method-info field, e.g. `DoThing2`.
    pub fn info_name(&self) -> String {
        format!("{}{}", self.name, self.suffix)
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }
}

/// The dispatch table of one class.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodTable {
    pub class: QualifiedName,
    /// First engine type in the class's base chain; its `MethodName` is
    /// extended by the generated one.
    pub engine_parent: Option<QualifiedName>,
    /// Entries in dispatch order.
    pub entries: Vec<MethodTableEntry>,
}

impl MethodTable {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Distinct method names, in identifier order.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.contains(&entry.name.as_str()) {
                names.push(&entry.name);
            }
        }
        names.sort_by(|a, b| compare_identifiers(a, b));
        names
    }

    /// First entry matching `name` and `arity`, as runtime dispatch picks it.
    pub fn dispatch(&self, name: &str, arity: usize) -> Option<&MethodTableEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name && e.arity() == arity)
    }
}

/// Identifier ordering used for the method table.
///
/// Symbols sort before digits and digits before letters; letters compare
/// case-insensitively. Ordinal comparison breaks ties.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    fn key(c: char) -> (u8, char) {
        let class = if c.is_ascii_digit() {
            1
        } else if c.is_alphabetic() {
            2
        } else {
            0
        };
        (class, c.to_ascii_lowercase())
    }

    a.chars()
        .map(key)
        .cmp(b.chars().map(key))
        .then_with(|| a.cmp(b))
}

/// Builds [`MethodTable`]s.
#[derive(Debug, Clone, Copy)]
pub struct MethodTableBuilder<'a> {
    oracle: Oracle<'a>,
    types: &'a FrameworkTypes,
    mapper: ValueTypeMapper<'a>,
}

impl<'a> MethodTableBuilder<'a> {
    pub fn new(oracle: Oracle<'a>, types: &'a FrameworkTypes) -> Self {
        Self {
            oracle,
            types,
            mapper: ValueTypeMapper::new(oracle, types),
        }
    }

    /// Build the table for `class`.
    ///
    /// `overrides` lists the lifecycle overrides generated for the class;
    /// each becomes a synthetic entry unless the class already declares a
    /// mappable zero-argument method with that name.
    pub fn build(&self, class: &TypeEntry, overrides: &[&str]) -> MethodTable {
        let mut entries: Vec<MethodTableEntry> = class
            .members
            .iter()
            .filter_map(|member| self.entry_for(member))
            .collect();

        for name in overrides {
            if !entries.iter().any(|e| e.name == *name && e.arity() == 0) {
                entries.push(MethodTableEntry::synthetic(*name));
            }
        }

        let mut overloads: FxHashMap<String, usize> = FxHashMap::default();
        for entry in &mut entries {
            let seen = overloads.entry(entry.name.clone()).or_default();
            *seen += 1;
            if *seen > 1 {
                entry.suffix = seen.to_string();
            }
        }
        // Stable: overloads keep their first-seen order within a name.
        entries.sort_by(|a, b| compare_identifiers(&a.name, &b.name));

        let names = &self.types.names;
        let engine_parent = self
            .oracle
            .first_base_in(&class.name, &names.engine_assembly, &names.engine_namespace)
            .map(|entry| entry.name.clone());
        if engine_parent.is_none() && !entries.is_empty() {
            warn!(class = %class.name, "no engine base type, method table skipped");
        }

        MethodTable {
            class: class.name.clone(),
            engine_parent,
            entries,
        }
    }

    /// Table entry for `member`, or `None` when it cannot be dispatched.
    pub fn entry_for(&self, member: &MemberEntry) -> Option<MethodTableEntry> {
        let method = member.as_method()?;
        if member.is_static
            || member.is_implicit
            || method.method_kind != MethodKind::Ordinary
            || method.returns_by_ref
            || method.params.iter().any(|p| p.ref_kind != RefKind::None)
            || MarkerSet::of_member(member, self.types).has(Marker::GodotIgnore)
        {
            return None;
        }

        let return_category = if method.returns_void() {
            None
        } else {
            Some(self.mapper.map(&method.return_type)?)
        };
        let params = method
            .params
            .iter()
            .map(|p| {
                self.mapper.map(&p.ty).map(|category| MarshalledParam {
                    name: p.name.clone(),
                    ty: p.ty.clone(),
                    category,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(MethodTableEntry::new(
            member.name.clone(),
            method.return_type.clone(),
            return_category,
            params,
        ))
    }
}
