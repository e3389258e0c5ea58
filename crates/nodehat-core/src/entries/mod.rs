//! Symbol table entry types.
//!
//! - [`TypeEntry`] - a class, struct, enum or interface with its members
//! - [`MemberEntry`] - a method, field or property declared on a type
//! - [`MethodEntry`], [`ParamEntry`] - method signatures
//!
//! Supporting types:
//! - [`TypeKind`], [`TypeOrigin`], [`Modifier`] - type classification
//! - [`MemberKind`], [`MethodKind`] - member classification

mod member;
mod type_entry;

pub use member::{MemberEntry, MemberKind, MethodEntry, MethodKind, ParamEntry};
pub use type_entry::{Modifier, TypeEntry, TypeKind, TypeOrigin};
