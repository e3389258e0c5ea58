//! Recognized marker attributes.
//!
//! A member's attribute list is matched once against the resolved marker
//! handles into a [`MarkerSet`]; classification then only tests bits.

use bitflags::bitflags;
use nodehat_core::{AttributeData, MemberEntry, TypeHash};

use crate::FrameworkTypes;

/// Marker attributes the generator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    OnEnterTree,
    OnExitTree,
    OnReady,
    AutoDispose,
    SceneUniqueName,
    GodotIgnore,
}

impl Marker {
    pub const ALL: [Marker; 6] = [
        Marker::OnEnterTree,
        Marker::OnExitTree,
        Marker::OnReady,
        Marker::AutoDispose,
        Marker::SceneUniqueName,
        Marker::GodotIgnore,
    ];

    /// Attribute name as written in source, without the `Attribute` suffix.
    pub const fn short_name(self) -> &'static str {
        match self {
            Marker::OnEnterTree => "OnEnterTree",
            Marker::OnExitTree => "OnExitTree",
            Marker::OnReady => "OnReady",
            Marker::AutoDispose => "AutoDispose",
            Marker::SceneUniqueName => "SceneUniqueName",
            Marker::GodotIgnore => "GodotIgnore",
        }
    }

    pub const fn flag(self) -> MarkerSet {
        match self {
            Marker::OnEnterTree => MarkerSet::ON_ENTER_TREE,
            Marker::OnExitTree => MarkerSet::ON_EXIT_TREE,
            Marker::OnReady => MarkerSet::ON_READY,
            Marker::AutoDispose => MarkerSet::AUTO_DISPOSE,
            Marker::SceneUniqueName => MarkerSet::SCENE_UNIQUE_NAME,
            Marker::GodotIgnore => MarkerSet::GODOT_IGNORE,
        }
    }

    /// Resolved handle of this marker's attribute class.
    pub fn handle(self, types: &FrameworkTypes) -> TypeHash {
        match self {
            Marker::OnEnterTree => types.on_enter_tree,
            Marker::OnExitTree => types.on_exit_tree,
            Marker::OnReady => types.on_ready,
            Marker::AutoDispose => types.auto_dispose,
            Marker::SceneUniqueName => types.scene_unique_name,
            Marker::GodotIgnore => types.godot_ignore,
        }
    }

    /// Simple class name of the attribute, e.g. `OnReadyAttribute`.
    pub fn class_name(self, types: &FrameworkTypes) -> &str {
        let names = &types.names;
        let name = match self {
            Marker::OnEnterTree => &names.on_enter_tree,
            Marker::OnExitTree => &names.on_exit_tree,
            Marker::OnReady => &names.on_ready,
            Marker::AutoDispose => &names.auto_dispose,
            Marker::SceneUniqueName => &names.scene_unique_name,
            Marker::GodotIgnore => &names.godot_ignore,
        };
        name.simple_name()
    }
}

bitflags! {
    /// Set of markers present on one member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MarkerSet: u8 {
        const ON_ENTER_TREE = 1 << 0;
        const ON_EXIT_TREE = 1 << 1;
        const ON_READY = 1 << 2;
        const AUTO_DISPOSE = 1 << 3;
        const SCENE_UNIQUE_NAME = 1 << 4;
        const GODOT_IGNORE = 1 << 5;
    }
}

impl MarkerSet {
    /// Match an attribute list against the resolved marker handles.
    pub fn of(attributes: &[AttributeData], types: &FrameworkTypes) -> Self {
        let mut set = MarkerSet::empty();
        for attr in attributes {
            for marker in Marker::ALL {
                if attr.class_hash == marker.handle(types) {
                    set |= marker.flag();
                }
            }
        }
        set
    }

    pub fn of_member(member: &MemberEntry, types: &FrameworkTypes) -> Self {
        Self::of(&member.attributes, types)
    }

    pub fn has(self, marker: Marker) -> bool {
        self.contains(marker.flag())
    }

    /// Markers in this set, in [`Marker::ALL`] order.
    pub fn markers(self) -> impl Iterator<Item = Marker> {
        Marker::ALL.into_iter().filter(move |m| self.has(*m))
    }
}
