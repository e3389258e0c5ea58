//! Well-known framework symbol names.

use crate::QualifiedName;

/// Every fully qualified name the generator resolves before processing
/// classes, plus the engine's assembly and namespace identity.
///
/// The default is the Godot / GodotHat reference set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkNames {
    /// Classes deriving from this get lifecycle generation.
    pub node_class: QualifiedName,
    /// Root of the engine object hierarchy; descendants marshal as objects.
    pub object_class: QualifiedName,
    /// Marks editor-run classes.
    pub tool_attribute: QualifiedName,
    /// The disposable-resource capability.
    pub disposable_interface: QualifiedName,
    pub engine_assembly: String,
    pub engine_namespace: String,
    pub collections_namespace: String,
    /// Assembly holding the marker attributes.
    pub attributes_assembly: String,

    // === Markers ===
    pub on_enter_tree: QualifiedName,
    pub on_exit_tree: QualifiedName,
    pub on_ready: QualifiedName,
    pub auto_dispose: QualifiedName,
    pub scene_unique_name: QualifiedName,
    /// Per-method opt-out from the method table.
    pub godot_ignore: QualifiedName,
    /// Enum used by the auto-dispose visibility argument.
    pub accessibility_enum: QualifiedName,
}

impl Default for FrameworkNames {
    fn default() -> Self {
        Self {
            node_class: "Godot.Node".into(),
            object_class: "Godot.GodotObject".into(),
            tool_attribute: "Godot.ToolAttribute".into(),
            disposable_interface: "System.IDisposable".into(),
            engine_assembly: "GodotSharp".into(),
            engine_namespace: "Godot".into(),
            collections_namespace: "Godot.Collections".into(),
            attributes_assembly: "GodotHat.Attributes".into(),
            on_enter_tree: "GodotHat.OnEnterTreeAttribute".into(),
            on_exit_tree: "GodotHat.OnExitTreeAttribute".into(),
            on_ready: "GodotHat.OnReadyAttribute".into(),
            auto_dispose: "GodotHat.AutoDisposeAttribute".into(),
            scene_unique_name: "GodotHat.SceneUniqueNameAttribute".into(),
            godot_ignore: "GodotHat.GodotIgnoreAttribute".into(),
            accessibility_enum: "GodotHat.Accessibility".into(),
        }
    }
}

impl FrameworkNames {
    /// Name of a type inside the engine namespace.
    pub fn engine_type(&self, name: &str) -> QualifiedName {
        QualifiedName::from(format!("{}.{name}", self.engine_namespace))
    }

    /// Name of a type inside the engine collections namespace.
    pub fn collections_type(&self, name: &str) -> QualifiedName {
        QualifiedName::from(format!("{}.{name}", self.collections_namespace))
    }

    /// Names that must resolve before a run can start, in resolution order.
    pub fn required_types(&self) -> [&QualifiedName; 10] {
        [
            &self.node_class,
            &self.object_class,
            &self.tool_attribute,
            &self.disposable_interface,
            &self.on_enter_tree,
            &self.on_exit_tree,
            &self.on_ready,
            &self.auto_dispose,
            &self.scene_unique_name,
            &self.godot_ignore,
        ]
    }
}
