//! Lifecycle unit rendering.
//!
//! One unit per class per pass: the class reopened with its declared
//! modifiers, the engine override calling every hook, then the helpers.

use std::fmt::Write as _;

use nodehat_analysis::model::{Helper, HookCall, LifecycleModel};
use nodehat_analysis::{DisposalEntry, PassSpec, naming};

use crate::writer::{LIFECYCLE_USINGS, hint_name, string_literal, write_preamble};
use crate::{GeneratedSource, Renderer};

impl Renderer {
    /// Render one lifecycle pass, or `None` when the pass emits nothing.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn render_lifecycle(&self, model: &LifecycleModel) -> Option<GeneratedSource> {
        if !model.should_emit() {
            return None;
        }
        let spec = model.spec();
        let class = &model.descriptor;

        let calls: String = model
            .calls
            .iter()
            .map(|call| format!("\n        {};", call_statement(call)))
            .collect();
        let helpers: String = model
            .helpers
            .iter()
            .map(|helper| format!("\n\n    {}", helper_source(helper)))
            .collect();

        let mut text = String::new();
        write_preamble(
            &mut text,
            &self.generator_namespace,
            spec.generator_name,
            &class.name,
            LIFECYCLE_USINGS,
        );
        let _ = writeln!(text, "{} class {}", class.modifiers, class.simple_name());
        text.push_str("{\n");
        if class.is_tool {
            write_tool_override(&mut text, spec, &calls);
        } else {
            write_override(&mut text, spec, &calls);
        }
        text.push_str(&helpers);
        text.push_str("\n}\n");

        Some(GeneratedSource {
            hint_name: hint_name(&class.name, spec.short_name),
            text,
        })
    }
}

fn write_override(out: &mut String, spec: &PassSpec, calls: &str) {
    let _ = write!(
        out,
        "    public override void {name}()\n    {{\n        \
         // Generated code, to add other calls add [{short}] attributes to methods\n\
         {calls}\n    }}",
        name = spec.override_name,
        short = spec.short_name,
    );
}

fn write_tool_override(out: &mut String, spec: &PassSpec, calls: &str) {
    let name = spec.override_name;
    let _ = write!(
        out,
        "    public override void {name}()
    {{
        base.{name}();
#if TOOLS
        if (Godot.Engine.IsEditorHint())
        {{
            try
            {{
                _{name}Internal();
            }}
            catch (Exception e)
            {{
                GD.PrintErr($\"Caught exception in {{this.GetPath()}}.{name}()\", e);
            }}
        }}
        else
        {{
#endif //TOOLS
            _{name}Internal();
#if TOOLS
        }}
#endif //TOOLS
    }}

    [MethodImpl(MethodImplOptions.AggressiveInlining)]
    private void _{name}Internal()
    {{
        // Generated code, to add other calls add [{short}] attributes to methods
{calls}
    }}",
        short = spec.short_name,
    );
}

/// Statement text of a call, without the trailing semicolon.
pub fn call_statement(call: &HookCall) -> String {
    match call {
        HookCall::InitFromScene { member } => format!("{}()", naming::scene_init_name(member)),
        HookCall::Invoke { method } => format!("{method}()"),
        HookCall::Acquire { method } => format!("{} = {method}()", naming::slot_name(method)),
        HookCall::Update { method } => format!("{}()", naming::updater_name(method)),
        HookCall::DisposeAll => format!("{}()", naming::DISPOSE_ALL),
    }
}

/// Source of a helper member, indented for the class body except for its
/// first line.
pub fn helper_source(helper: &Helper) -> String {
    match helper {
        Helper::SceneInit(scene) => format!(
            "private void {init}()\n    {{\n        this.{member} = this.{lookup}<{ty}>({path});\n    }}",
            init = scene.init_name(),
            member = scene.member,
            lookup = scene.lookup(),
            ty = scene.ty.qualified(),
            path = string_literal(&scene.path),
        ),
        Helper::DisposeAll { resets } => {
            let body = resets
                .iter()
                .map(|reset| format!("        {reset}();"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("private void {}()\n    {{\n{body}\n    }}", naming::DISPOSE_ALL)
        }
        Helper::Slot(entry) => format!("private IDisposable? {};", entry.slot_name()),
        Helper::Updater(entry) => updater_source(entry),
        Helper::Reset(entry) => format!(
            "private void {reset}()\n    {{\n        {slot}?.Dispose();\n        {slot} = null;\n    }}",
            reset = entry.reset_name(),
            slot = entry.slot_name(),
        ),
    }
}

fn updater_source(entry: &DisposalEntry) -> String {
    let declarations = entry
        .params
        .iter()
        .map(|p| p.declaration())
        .collect::<Vec<_>>()
        .join(", ");
    let arguments = entry
        .params
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{vis} void {updater}({declarations})\n    {{\n        {reset}();\n        {slot} = {method}({arguments});\n    }}",
        vis = entry.updater_visibility,
        updater = naming::updater_name(&entry.method),
        reset = entry.reset_name(),
        slot = entry.slot_name(),
        method = entry.method,
    )
}
