//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is the cheap, copyable handle the capability oracle hands out
//! for resolved types. It is computed from the fully qualified name, so the
//! same name always yields the same handle regardless of registration order.
//!
//! # Examples
//!
//! ```
//! use nodehat_core::TypeHash;
//!
//! let node = TypeHash::from_name("Godot.Node");
//! assert_eq!(node, TypeHash::from_name("Godot.Node"));
//! assert_ne!(node, TypeHash::from_name("Godot.Node2D"));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Domain marker for type hashes
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;
}

/// A deterministic 64-bit hash identifying a type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a fully qualified, dot separated type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_hash() {
        assert_eq!(
            TypeHash::from_name("Godot.Node"),
            TypeHash::from_name("Godot.Node")
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_ne!(
            TypeHash::from_name("Godot.Node"),
            TypeHash::from_name("godot.node")
        );
    }

    #[test]
    fn empty_hash() {
        assert!(TypeHash::EMPTY.is_empty());
        assert!(!TypeHash::from_name("int").is_empty());
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(TypeHash(0x2a).to_string(), "0x000000000000002a");
    }
}
