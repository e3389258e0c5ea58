//! Shared pieces of every generated unit.

use std::fmt::Write as _;

use nodehat_core::QualifiedName;

/// Usings of a lifecycle unit.
pub const LIFECYCLE_USINGS: &[&str] = &[
    "System",
    "System.Collections.Generic",
    "System.Collections.Immutable",
    "System.Runtime.CompilerServices",
    "Godot",
];

/// Usings of a script-methods unit.
pub const SCRIPT_METHODS_USINGS: &[&str] = &[
    "System",
    "System.Collections.Generic",
    "System.Collections.Immutable",
    "Godot.NativeInterop",
    "Godot",
];

/// Write the header comment, namespace, usings and `#nullable enable`.
///
/// The namespace line is left out for classes in the global namespace.
pub fn write_preamble(
    out: &mut String,
    generator_namespace: &str,
    generator_name: &str,
    class: &QualifiedName,
    usings: &[&str],
) {
    let _ = writeln!(out, "// Generated code via {generator_namespace}.{generator_name}");
    if !class.is_global() {
        let _ = writeln!(out, "namespace {};", class.namespace_string());
        out.push('\n');
    }
    for using in usings {
        let _ = writeln!(out, "using {using};");
    }
    out.push('\n');
    out.push_str("#nullable enable\n\n");
}

/// Hint name of a generated unit: `Test.Node.MyNode_OnReady.generated.cs`.
pub fn hint_name(class: &QualifiedName, short_name: &str) -> String {
    if class.is_global() {
        format!("{}_{short_name}.generated.cs", class.simple_name())
    } else {
        format!(
            "{}.{}_{short_name}.generated.cs",
            class.namespace_string(),
            class.simple_name()
        )
    }
}

/// Regular string literal with escapes: `"%Camera"`.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
