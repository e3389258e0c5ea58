use std::fmt;

/// Dotted qualified name for type identity in the host symbol model.
///
/// # Examples
///
/// ```
/// use nodehat_core::QualifiedName;
///
/// let node = QualifiedName::from_qualified_string("Godot.Node");
/// assert_eq!(node.simple_name(), "Node");
/// assert_eq!(node.namespace_string(), "Godot");
/// assert_eq!(node.to_string(), "Godot.Node");
///
/// let global = QualifiedName::global("Player");
/// assert!(global.is_global());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    /// Simple name (e.g., "Node", "IDisposable")
    pub name: String,
    /// Namespace path (e.g., ["Godot", "Collections"])
    /// Empty for the global namespace
    pub namespace: Vec<String>,
}

impl QualifiedName {
    /// Create a new qualified name with namespace.
    pub fn new(name: impl Into<String>, namespace: Vec<String>) -> Self {
        Self {
            name: name.into(),
            namespace,
        }
    }

    /// Create a qualified name in the global namespace.
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Vec::new(),
        }
    }

    /// Create from a dotted string (e.g., "Godot.Collections.Array").
    ///
    /// The last segment is the name, the rest is the namespace. A leading
    /// `global::` alias is stripped.
    pub fn from_qualified_string(s: &str) -> Self {
        let s = s.strip_prefix("global::").unwrap_or(s);
        let mut parts: Vec<String> = s
            .split('.')
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        match parts.pop() {
            Some(name) => Self {
                name,
                namespace: parts,
            },
            None => Self::global(""),
        }
    }

    /// Check if this is in the global namespace.
    pub fn is_global(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Get the simple (unqualified) name.
    pub fn simple_name(&self) -> &str {
        &self.name
    }

    /// Get the namespace path.
    pub fn namespace_path(&self) -> &[String] {
        &self.namespace
    }

    /// Get the namespace as a joined string.
    pub fn namespace_string(&self) -> String {
        self.namespace.join(".")
    }

    /// Check whether this name lives directly in the given dotted namespace.
    pub fn is_in_namespace(&self, namespace: &str) -> bool {
        let mut expected = namespace.split('.').filter(|p| !p.is_empty());
        let mut actual = self.namespace.iter();
        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return true,
                (Some(e), Some(a)) if e == a => {}
                _ => return false,
            }
        }
    }

    /// Compute TypeHash from this qualified name.
    pub fn to_type_hash(&self) -> crate::TypeHash {
        crate::TypeHash::from_name(&self.to_string())
    }

    /// Fully qualified form with the `global::` alias, as written in
    /// generated sources.
    pub fn global_qualified(&self) -> String {
        format!("global::{self}")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace.join("."), self.name)
        }
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        Self::from_qualified_string(s)
    }
}

impl From<String> for QualifiedName {
    fn from(s: String) -> Self {
        Self::from_qualified_string(&s)
    }
}
