//! Shared types for the nodehat generator.
//!
//! This crate holds the host symbol model the analysis reads
//! ([`SymbolTable`], [`TypeEntry`], [`MemberEntry`], [`TypeRef`],
//! [`AttributeData`]), type identity ([`TypeHash`], [`QualifiedName`]), the
//! wire categories used for marshalling ([`VariantType`]), the diagnostic
//! catalog, and the error types.

mod attributes;
mod diagnostics;
pub mod entries;
mod error;
mod framework;
mod qualified_name;
mod special_type;
mod symbol_table;
pub mod type_hash;
mod type_ref;
mod variant_type;
mod visibility;

pub use attributes::{AttrValue, AttributeData};
pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticKind, Diagnostics};
pub use entries::{
    MemberEntry, MemberKind, MethodEntry, MethodKind, Modifier, ParamEntry, TypeEntry, TypeKind,
    TypeOrigin,
};
pub use error::{RegistrationError, ResolutionError};
pub use framework::FrameworkNames;
pub use qualified_name::QualifiedName;
pub use special_type::SpecialType;
pub use symbol_table::SymbolTable;
pub use type_hash::TypeHash;
pub use type_ref::{RefKind, TypeRef, TypeShape};
pub use variant_type::VariantType;
pub use visibility::Visibility;
