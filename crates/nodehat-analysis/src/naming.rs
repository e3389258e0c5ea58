//! Names of generated members.
//!
//! Every generated identifier is derived from the producing member's name so
//! the same input always yields the same output.

/// Aggregate reset called from the exit-tree override.
pub const DISPOSE_ALL: &str = "__DisposeOnExitTree";

/// Nullable slot holding the resource produced by `method`.
pub fn slot_name(method: &str) -> String {
    format!("__disposable_{method}")
}

/// Reset for `method`'s slot. Auto-disposed producers get a callable name.
pub fn reset_name(method: &str, auto_disposable: bool) -> String {
    if auto_disposable {
        format!("Dispose{method}")
    } else {
        format!("__Dispose_{method}")
    }
}

/// Re-invocation entry point for an auto-disposed producer.
pub fn updater_name(method: &str) -> String {
    format!("Update{method}")
}

/// Initializer for a scene-injected field or property.
pub fn scene_init_name(member: &str) -> String {
    format!("__InitFromScene_{member}")
}
