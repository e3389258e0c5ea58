//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Once;

use nodehat::{
    AttrValue, AttributeData, FrameworkNames, MemberEntry, MethodEntry, SymbolTable, TypeEntry,
    TypeRef,
};

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A marker attribute by short name, e.g. `OnReady`.
pub fn marker(short: &str) -> AttributeData {
    AttributeData::new(format!("GodotHat.{short}Attribute"))
}

/// `[AutoDispose(Accessibility.X)]`.
pub fn auto_dispose_with(accessibility: &str) -> AttributeData {
    marker("AutoDispose").with_arg(AttrValue::Enum {
        ty: "GodotHat.Accessibility".into(),
        member: accessibility.into(),
    })
}

pub fn disposable() -> TypeRef {
    TypeRef::named("System.IDisposable")
}

pub fn hook(name: &str, pass: &str) -> MemberEntry {
    MemberEntry::method(name, MethodEntry::void()).with_attribute(marker(pass))
}

pub fn disposing_hook(name: &str, pass: &str) -> MemberEntry {
    MemberEntry::method(name, MethodEntry::new(disposable())).with_attribute(marker(pass))
}

/// `public partial class {name} : Godot.Node`.
pub fn node(name: &str, members: Vec<MemberEntry>) -> TypeEntry {
    members.into_iter().fold(
        TypeEntry::source_class(name)
            .with_base("Godot.Node")
            .as_public_partial(),
        TypeEntry::with_member,
    )
}

/// Engine table plus `classes`, in order.
pub fn table(classes: Vec<TypeEntry>) -> SymbolTable {
    let mut table = SymbolTable::with_engine_types(&FrameworkNames::default());
    for class in classes {
        table.register_type(class).unwrap();
    }
    table
}

/// Lines of the override body, trimmed, without the leading comment.
pub fn body_calls(text: &str, override_name: &str) -> Vec<String> {
    let header = format!("public override void {override_name}()");
    let start = text
        .find(&header)
        .unwrap_or_else(|| panic!("no {override_name} in:\n{text}"));
    text[start..]
        .lines()
        .skip(2)
        .take_while(|line| line.trim() != "}")
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .map(str::to_string)
        .collect()
}
