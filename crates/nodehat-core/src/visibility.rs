//! Declared accessibility of class members.

use std::fmt;

/// Visibility modifier for class members and generated updaters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

impl Visibility {
    /// Map an accessibility enum member name (`Internal`, `Private`, ...).
    ///
    /// Unknown names fall back to `Public`.
    pub fn from_member_name(name: &str) -> Self {
        match name {
            "Internal" => Visibility::Internal,
            "Private" => Visibility::Private,
            "Protected" => Visibility::Protected,
            _ => Visibility::Public,
        }
    }

    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Internal => write!(f, "internal"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_names_map_to_keywords() {
        assert_eq!(Visibility::from_member_name("Internal").to_string(), "internal");
        assert_eq!(Visibility::from_member_name("Private").to_string(), "private");
        assert_eq!(Visibility::from_member_name("Protected").to_string(), "protected");
        assert_eq!(Visibility::from_member_name("Public").to_string(), "public");
        assert_eq!(Visibility::from_member_name("Bogus"), Visibility::Public);
    }
}
