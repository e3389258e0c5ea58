//! Script-methods unit rendering.
//!
//! Registers every method-table entry with the engine: a file-local
//! `MethodInfos` class, a nested `MethodName` class, the method list
//! accessor, and the two dispatch overrides.

use std::fmt::Write as _;

use nodehat_analysis::ClassDescriptor;
use nodehat_analysis::marshal::{MarshalledParam, MethodTable, MethodTableEntry};
use nodehat_analysis::passes::{SCRIPT_METHODS_GENERATOR_NAME, SCRIPT_METHODS_SHORT_NAME};
use nodehat_core::QualifiedName;

use crate::writer::{SCRIPT_METHODS_USINGS, hint_name, string_literal, write_preamble};
use crate::{GeneratedSource, Renderer};

const USAGE: &str = "global::Godot.PropertyUsageFlags.Storage | global::Godot.PropertyUsageFlags.Editor";

impl Renderer {
    /// Render the method table of `class`.
    ///
    /// Returns `None` for an empty table, a class that cannot be reopened,
    /// and a class without an engine parent to extend `MethodName` from.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn render_script_methods(
        &self,
        class: &ClassDescriptor,
        table: &MethodTable,
    ) -> Option<GeneratedSource> {
        if table.is_empty() || !class.is_partial {
            return None;
        }
        let engine_parent = table.engine_parent.as_ref()?;
        let name = class.simple_name();

        let mut text = String::new();
        write_preamble(
            &mut text,
            &self.generator_namespace,
            SCRIPT_METHODS_GENERATOR_NAME,
            &class.name,
            SCRIPT_METHODS_USINGS,
        );

        // ======================================================================
        // MethodInfos
        // ======================================================================

        text.push_str("file static class MethodInfos {\n");
        for entry in &table.entries {
            write_method_info(&mut text, name, entry);
        }
        text.push_str(
            "\n    public static readonly global::System.Collections.Generic.List<global::Godot.Bridge.MethodInfo> GodotMethodList = new() {\n",
        );
        for entry in &table.entries {
            let _ = writeln!(text, "        MethodInfos.{},", entry.info_name());
        }
        text.push_str("};\n}\n\n");

        // ======================================================================
        // Class reopening
        // ======================================================================

        let _ = writeln!(text, "{} class {name}", class.modifiers);
        text.push_str("{\n");
        write_method_names(&mut text, engine_parent, table);
        text.push_str(
            "
    internal new static global::System.Collections.Generic.List<global::Godot.Bridge.MethodInfo> GetGodotMethodList()
    {
        return MethodInfos.GodotMethodList;
    }
    #pragma warning restore CS0109

    protected override bool InvokeGodotClassMethod(in godot_string_name method, NativeVariantPtrArgs args, out godot_variant ret)
    {
",
        );
        for entry in &table.entries {
            write_invoke(&mut text, entry);
        }
        text.push_str(
            "
        return base.InvokeGodotClassMethod(method, args, out ret);
    }

    protected override bool HasGodotClassMethod(in godot_string_name method)
    {
",
        );
        for method in table.method_names() {
            let _ = writeln!(text, "        if (method == MethodName.{method}) return true;");
        }
        text.push_str(
            "
        return base.HasGodotClassMethod(method);
    }
}
",
        );

        Some(GeneratedSource {
            hint_name: hint_name(&class.name, SCRIPT_METHODS_SHORT_NAME),
            text,
        })
    }
}

fn write_method_info(out: &mut String, class: &str, entry: &MethodTableEntry) {
    let return_type = entry
        .return_category
        .map_or("Nil", |category| category.name());
    let _ = write!(
        out,
        "    private static readonly global::Godot.Bridge.MethodInfo {info} = new(
        name: {class}.MethodName.{name},
        returnVal: new(
            type: global::Godot.Variant.Type.{return_type},
            name: new global::Godot.StringName(),
            hint: global::Godot.PropertyHint.None,
            hintString: \"\",
            usage: {USAGE},
            exported: false),
        flags: global::Godot.MethodFlags.Normal,
",
        info = entry.info_name(),
        name = entry.name,
    );
    if entry.params.is_empty() {
        out.push_str("        arguments: new() {},\n");
    } else {
        out.push_str("        arguments: new() {\n");
        for param in &entry.params {
            write_argument_info(out, param);
        }
        out.push_str("        },\n");
    }
    out.push_str("        defaultArguments: null\n    );\n\n");
}

fn write_argument_info(out: &mut String, param: &MarshalledParam) {
    let _ = write!(
        out,
        "                new (
                    type: global::Godot.Variant.Type.{category},
                    name: new global::Godot.StringName({name}),
                    hint: global::Godot.PropertyHint.None,
                    hintString: \"\",
                    usage: {USAGE},
                    exported: false),
",
        category = param.category.name(),
        name = string_literal(&param.name),
    );
}

fn write_method_names(out: &mut String, engine_parent: &QualifiedName, table: &MethodTable) {
    out.push_str("    #pragma warning disable CS0109 // Disable warning about redundant 'new' keyword\n");
    let _ = writeln!(
        out,
        "    public new class MethodName : global::{engine_parent}.MethodName"
    );
    out.push_str("    {\n");
    for method in table.method_names() {
        let _ = writeln!(
            out,
            "        public new static readonly global::Godot.StringName {method} = {};",
            string_literal(method)
        );
    }
    out.push_str("    }\n");
}

fn write_invoke(out: &mut String, entry: &MethodTableEntry) {
    let _ = write!(
        out,
        "        if (method == MethodName.{name} && args.Count == {arity})\n        {{\n",
        name = entry.name,
        arity = entry.arity(),
    );
    let arguments = entry
        .params
        .iter()
        .enumerate()
        .map(|(index, param)| {
            format!(
                "\n                // {name}\n                global::Godot.NativeInterop.VariantUtils.ConvertTo<{ty}>(args[{index}])",
                name = param.name,
                ty = param.ty.global_qualified(),
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    if entry.returns_void() {
        let _ = writeln!(out, "            {}({arguments});", entry.name);
        out.push_str("            ret = default;\n");
    } else {
        let _ = writeln!(out, "            var callRet = {}({arguments});", entry.name);
        let _ = writeln!(
            out,
            "            ret = global::Godot.NativeInterop.VariantUtils.CreateFrom<{}>(callRet);",
            entry.return_type.global_qualified()
        );
    }
    out.push_str("            return true;\n        }\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{analyze, attr, disposable, node};
    use nodehat_core::{MemberEntry, MethodEntry, SpecialType, TypeRef};
    use pretty_assertions::assert_eq;

    fn render(members: Vec<MemberEntry>) -> Option<GeneratedSource> {
        let analysis = analyze(node(members));
        let table = analysis.method_table.as_ref()?;
        Renderer::default().render_script_methods(&analysis.ready.descriptor, table)
    }

    #[test]
    fn registers_declared_and_synthetic_methods() {
        let source = render(vec![
            MemberEntry::method("DoThing", MethodEntry::new(disposable())).with_attribute(attr("OnReady")),
            MemberEntry::method("DoThing2", MethodEntry::void()).as_public(),
            MemberEntry::method(
                "DoThing3",
                MethodEntry::void().with_param("arg", TypeRef::special(SpecialType::String)),
            )
            .as_public(),
            MemberEntry::method("DoThingIgnored", MethodEntry::void())
                .as_public()
                .with_attribute(attr("GodotIgnore")),
        ])
        .unwrap();

        assert_eq!(source.hint_name, "Test.Node.MyNode_ScriptMethods.generated.cs");
        assert_eq!(
            source.text,
            "// Generated code via GodotHat.SourceGenerators.ScriptMethodsGenerator
namespace Test.Node;

using System;
using System.Collections.Generic;
using System.Collections.Immutable;
using Godot.NativeInterop;
using Godot;

#nullable enable

file static class MethodInfos {
    private static readonly global::Godot.Bridge.MethodInfo _ExitTree = new(
        name: MyNode.MethodName._ExitTree,
        returnVal: new(
            type: global::Godot.Variant.Type.Nil,
            name: new global::Godot.StringName(),
            hint: global::Godot.PropertyHint.None,
            hintString: \"\",
            usage: global::Godot.PropertyUsageFlags.Storage | global::Godot.PropertyUsageFlags.Editor,
            exported: false),
        flags: global::Godot.MethodFlags.Normal,
        arguments: new() {},
        defaultArguments: null
    );

    private static readonly global::Godot.Bridge.MethodInfo _Ready = new(
        name: MyNode.MethodName._Ready,
        returnVal: new(
            type: global::Godot.Variant.Type.Nil,
            name: new global::Godot.StringName(),
            hint: global::Godot.PropertyHint.None,
            hintString: \"\",
            usage: global::Godot.PropertyUsageFlags.Storage | global::Godot.PropertyUsageFlags.Editor,
            exported: false),
        flags: global::Godot.MethodFlags.Normal,
        arguments: new() {},
        defaultArguments: null
    );

    private static readonly global::Godot.Bridge.MethodInfo DoThing2 = new(
        name: MyNode.MethodName.DoThing2,
        returnVal: new(
            type: global::Godot.Variant.Type.Nil,
            name: new global::Godot.StringName(),
            hint: global::Godot.PropertyHint.None,
            hintString: \"\",
            usage: global::Godot.PropertyUsageFlags.Storage | global::Godot.PropertyUsageFlags.Editor,
            exported: false),
        flags: global::Godot.MethodFlags.Normal,
        arguments: new() {},
        defaultArguments: null
    );

    private static readonly global::Godot.Bridge.MethodInfo DoThing3 = new(
        name: MyNode.MethodName.DoThing3,
        returnVal: new(
            type: global::Godot.Variant.Type.Nil,
            name: new global::Godot.StringName(),
            hint: global::Godot.PropertyHint.None,
            hintString: \"\",
            usage: global::Godot.PropertyUsageFlags.Storage | global::Godot.PropertyUsageFlags.Editor,
            exported: false),
        flags: global::Godot.MethodFlags.Normal,
        arguments: new() {
                new (
                    type: global::Godot.Variant.Type.String,
                    name: new global::Godot.StringName(\"arg\"),
                    hint: global::Godot.PropertyHint.None,
                    hintString: \"\",
                    usage: global::Godot.PropertyUsageFlags.Storage | global::Godot.PropertyUsageFlags.Editor,
                    exported: false),
        },
        defaultArguments: null
    );


    public static readonly global::System.Collections.Generic.List<global::Godot.Bridge.MethodInfo> GodotMethodList = new() {
        MethodInfos._ExitTree,
        MethodInfos._Ready,
        MethodInfos.DoThing2,
        MethodInfos.DoThing3,
};
}

public partial class MyNode
{
    #pragma warning disable CS0109 // Disable warning about redundant 'new' keyword
    public new class MethodName : global::Godot.Node.MethodName
    {
        public new static readonly global::Godot.StringName _ExitTree = \"_ExitTree\";
        public new static readonly global::Godot.StringName _Ready = \"_Ready\";
        public new static readonly global::Godot.StringName DoThing2 = \"DoThing2\";
        public new static readonly global::Godot.StringName DoThing3 = \"DoThing3\";
    }

    internal new static global::System.Collections.Generic.List<global::Godot.Bridge.MethodInfo> GetGodotMethodList()
    {
        return MethodInfos.GodotMethodList;
    }
    #pragma warning restore CS0109

    protected override bool InvokeGodotClassMethod(in godot_string_name method, NativeVariantPtrArgs args, out godot_variant ret)
    {
        if (method == MethodName._ExitTree && args.Count == 0)
        {
            _ExitTree();
            ret = default;
            return true;
        }
        if (method == MethodName._Ready && args.Count == 0)
        {
            _Ready();
            ret = default;
            return true;
        }
        if (method == MethodName.DoThing2 && args.Count == 0)
        {
            DoThing2();
            ret = default;
            return true;
        }
        if (method == MethodName.DoThing3 && args.Count == 1)
        {
            DoThing3(
                // arg
                global::Godot.NativeInterop.VariantUtils.ConvertTo<global::System.String>(args[0]));
            ret = default;
            return true;
        }

        return base.InvokeGodotClassMethod(method, args, out ret);
    }

    protected override bool HasGodotClassMethod(in godot_string_name method)
    {
        if (method == MethodName._ExitTree) return true;
        if (method == MethodName._Ready) return true;
        if (method == MethodName.DoThing2) return true;
        if (method == MethodName.DoThing3) return true;

        return base.HasGodotClassMethod(method);
    }
}
"
        );
    }

    #[test]
    fn non_void_and_overloads() {
        let int = || TypeRef::special(SpecialType::Int32);
        let text = render(vec![
            MemberEntry::method("Add", MethodEntry::new(int()).with_param("a", int()).with_param("b", int())),
            MemberEntry::method("Add", MethodEntry::new(int()).with_param("a", int())),
        ])
        .unwrap()
        .text;
        assert!(text.contains("    private static readonly global::Godot.Bridge.MethodInfo Add2 = new(\n        name: MyNode.MethodName.Add,\n        returnVal: new(\n            type: global::Godot.Variant.Type.Int,"));
        assert!(text.contains(
            "        if (method == MethodName.Add && args.Count == 2)
        {
            var callRet = Add(
                // a
                global::Godot.NativeInterop.VariantUtils.ConvertTo<global::System.Int32>(args[0]),
                // b
                global::Godot.NativeInterop.VariantUtils.ConvertTo<global::System.Int32>(args[1]));
            ret = global::Godot.NativeInterop.VariantUtils.CreateFrom<global::System.Int32>(callRet);
            return true;
        }
"
        ));
        assert_eq!(text.matches("public new static readonly global::Godot.StringName Add =").count(), 1);
        assert_eq!(text.matches("if (method == MethodName.Add) return true;").count(), 1);
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert!(render(vec![MemberEntry::method("Get", MethodEntry::new(disposable()))]).is_none());
    }
}
