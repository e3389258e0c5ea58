//! Diagnostic catalog and collection.
//!
//! Every user-facing shape problem the generator can detect has a stable code
//! in [`DiagnosticCode`]. Diagnostics are warnings: they never stop
//! generation, the nearest-effort code is still produced.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;

/// A single diagnostic reported against a class or one of its members.
///
/// # Examples
///
/// ```
/// use nodehat_core::Diagnostic;
///
/// let d = Diagnostic::method_should_have_no_params("MyNode", "OnReady", "DoThing");
/// assert_eq!(
///     d.to_string(),
///     "MyNode.DoThing: warning GH0003: MyNode.DoThing method declaration should have an empty parameter list."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// The severity level of this diagnostic
    pub kind: DiagnosticKind,
    /// Stable catalog code
    pub code: DiagnosticCode,
    /// Short summary of the rule
    pub title: String,
    /// Message with the offending names filled in
    pub message: String,
    /// Simple name of the class the diagnostic is reported on
    pub class: String,
    /// Dotted namespace of that class, empty for the global namespace
    pub namespace: String,
    /// Offending member, if the diagnostic is about one
    pub member: Option<String>,
}

/// The severity level of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    Error,
    Warning,
    Info,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Error => write!(f, "error"),
            DiagnosticKind::Warning => write!(f, "warning"),
            DiagnosticKind::Info => write!(f, "info"),
        }
    }
}

/// Stable diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticCode {
    /// Annotated class lacks the `partial` modifier.
    NodeNotPartial,
    /// Annotated class already defines the override the generator would emit.
    NodeAlreadyContainsMethod,
    /// Hook method declares parameters.
    MethodShouldHaveNoParams,
    /// Hook method returns something other than void or an allowed disposable.
    MethodShouldReturnVoid,
    /// Auto-dispose method is not private.
    MethodShouldBePrivate,
    /// Auto-dispose method does not return a disposable.
    MethodShouldReturnDisposable,
}

impl DiagnosticCode {
    /// Stable identifier, `GH0001` through `GH0006`.
    pub const fn id(self) -> &'static str {
        match self {
            DiagnosticCode::NodeNotPartial => "GH0001",
            DiagnosticCode::NodeAlreadyContainsMethod => "GH0002",
            DiagnosticCode::MethodShouldHaveNoParams => "GH0003",
            DiagnosticCode::MethodShouldReturnVoid => "GH0004",
            DiagnosticCode::MethodShouldBePrivate => "GH0005",
            DiagnosticCode::MethodShouldReturnDisposable => "GH0006",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Diagnostic {
    fn warning(
        code: DiagnosticCode,
        title: String,
        message: String,
        class: &str,
        member: Option<&str>,
    ) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            code,
            title,
            message,
            class: class.to_string(),
            namespace: String::new(),
            member: member.map(str::to_string),
        }
    }

    /// Place the reported class in `namespace`.
    ///
    /// Same-named classes in different namespaces keep separate diagnostics.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn node_not_partial(class: &str) -> Self {
        Self::warning(
            DiagnosticCode::NodeNotPartial,
            "Node class with GodotHat attributes is not partial".into(),
            format!("{class} class declaration should have partial modifier so source can be generated."),
            class,
            None,
        )
    }

    pub fn node_already_contains_method(class: &str, override_name: &str, attribute: &str) -> Self {
        Self::warning(
            DiagnosticCode::NodeAlreadyContainsMethod,
            "Node class with GodotHat attributes already implements Godot override".into(),
            format!(
                "{class} class declaration should not have a {override_name} function defined, \
                 so it can be generated instead. Use [{attribute}] attribute on an method instead, \
                 or remove the other [{attribute}] members."
            ),
            class,
            None,
        )
    }

    pub fn method_should_have_no_params(class: &str, attribute: &str, method: &str) -> Self {
        Self::warning(
            DiagnosticCode::MethodShouldHaveNoParams,
            format!("Method with attribute [{attribute}] must not take any parameters."),
            format!("{class}.{method} method declaration should have an empty parameter list."),
            class,
            Some(method),
        )
    }

    pub fn method_should_return_void(class: &str, attribute: &str, method: &str) -> Self {
        Self::warning(
            DiagnosticCode::MethodShouldReturnVoid,
            format!("Method with attribute [{attribute}] should return void."),
            format!("{class}.{method} should return void."),
            class,
            Some(method),
        )
    }

    pub fn method_should_be_private(class: &str, attribute: &str, method: &str) -> Self {
        Self::warning(
            DiagnosticCode::MethodShouldBePrivate,
            format!("Method with attribute [{attribute}] should be private."),
            format!(
                "{class}.{method} should be private. The generated Update{method} method will be public"
            ),
            class,
            Some(method),
        )
    }

    pub fn method_should_return_disposable(class: &str, attribute: &str, method: &str) -> Self {
        Self::warning(
            DiagnosticCode::MethodShouldReturnDisposable,
            format!("Method with attribute [{attribute}] should return IDisposable."),
            format!("{class}.{method} should return IDisposable (or IDisposable?)."),
            class,
            Some(method),
        )
    }
}

impl fmt::Display for Diagnostic {
    /// Formats as `Class.Member: kind CODE: message`, or `Class: kind CODE: message`
    /// for class-level diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(
                f,
                "{}.{}: {} {}: {}",
                self.class, member, self.kind, self.code, self.message
            ),
            None => write!(
                f,
                "{}: {} {}: {}",
                self.class, self.kind, self.code, self.message
            ),
        }
    }
}

/// A collection of diagnostics from one generator run.
///
/// Identical diagnostics are reported once, even when several passes detect
/// the same problem. Insertion order is preserved.
///
/// ```
/// use nodehat_core::{Diagnostic, Diagnostics};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.push(Diagnostic::node_not_partial("MyNode"));
/// diagnostics.push(Diagnostic::node_not_partial("MyNode"));
/// assert_eq!(diagnostics.count(), 1);
/// assert!(diagnostics.has_warnings());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    diagnostics: VecDeque<Diagnostic>,
    seen: FxHashSet<Diagnostic>,
    has_errors: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic. Returns `false` if an identical one was already present.
    pub fn push(&mut self, diagnostic: Diagnostic) -> bool {
        if self.seen.contains(&diagnostic) {
            return false;
        }
        if diagnostic.kind == DiagnosticKind::Error {
            self.has_errors = true;
        }
        self.seen.insert(diagnostic.clone());
        self.diagnostics.push_back(diagnostic);
        true
    }

    /// Add every diagnostic from `other`, keeping its order.
    pub fn extend(&mut self, other: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in other {
            self.push(diagnostic);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.seen.clear();
        self.has_errors = false;
    }

    /// Iterate over all diagnostics in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Warning)
    }

    /// Diagnostics carrying the given code.
    pub fn with_code(&self, code: DiagnosticCode) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Writes all diagnostics to the provided writer, one per line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the writer fails.
    pub fn emit<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(writer, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::collections::vec_deque::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}
