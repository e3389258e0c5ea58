//! Benchmarks for a full generation run.
//!
//! - Size-based: 1 to 1000 annotated node classes
//! - Feature-specific: lifecycle only, method tables only
//! - Scheduling: sequential against the rayon pool
//!
//! ```bash
//! cargo bench --bench generation_benchmarks
//! ```

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use nodehat::{
    AttrValue, AttributeData, FrameworkNames, Generator, GeneratorConfig, MemberEntry, MethodEntry,
    PassSet, SpecialType, SymbolTable, TypeEntry, TypeRef,
};
use std::hint::black_box;

fn marker(short: &str) -> AttributeData {
    AttributeData::new(format!("GodotHat.{short}Attribute"))
}

/// A node class using every marker plus a few marshalled overloads.
fn actor(index: usize) -> TypeEntry {
    let disposable = TypeRef::named("System.IDisposable");
    TypeEntry::source_class(format!("Game.Actors.Actor{index}"))
        .with_base("Godot.Node2D")
        .as_public_partial()
        .with_member(
            MemberEntry::field("Sprite", TypeRef::named("Godot.Sprite2D"))
                .with_attribute(marker("SceneUniqueName")),
        )
        .with_member(
            MemberEntry::property("Hud", TypeRef::named("Godot.Control").nullable())
                .with_attribute(
                    marker("SceneUniqueName").with_arg(AttrValue::Str("Ui/Hud".into())),
                ),
        )
        .with_member(
            MemberEntry::method("Subscribe", MethodEntry::new(disposable.clone()))
                .with_attribute(marker("OnEnterTree")),
        )
        .with_member(MemberEntry::method("Setup", MethodEntry::void()).with_attribute(marker("OnReady")))
        .with_member(
            MemberEntry::method(
                "Watch",
                MethodEntry::new(disposable).with_param("speed", TypeRef::special(SpecialType::Single)),
            )
            .with_attribute(marker("AutoDispose")),
        )
        .with_member(MemberEntry::method("Teardown", MethodEntry::void()).with_attribute(marker("OnExitTree")))
        .with_member(
            MemberEntry::method(
                "Hit",
                MethodEntry::void().with_param("damage", TypeRef::special(SpecialType::Int32)),
            )
            .as_public(),
        )
        .with_member(
            MemberEntry::method(
                "Hit",
                MethodEntry::void()
                    .with_param("damage", TypeRef::special(SpecialType::Int32))
                    .with_param("source", TypeRef::named("Godot.Node")),
            )
            .as_public(),
        )
        .with_member(
            MemberEntry::method(
                "Heal",
                MethodEntry::new(TypeRef::special(SpecialType::Int32))
                    .with_param("amount", TypeRef::special(SpecialType::Int32)),
            )
            .as_public(),
        )
}

fn table(classes: usize) -> SymbolTable {
    let mut table = SymbolTable::with_engine_types(&FrameworkNames::default());
    for index in 0..classes {
        if let Err(err) = table.register_type(actor(index)) {
            panic!("{err}");
        }
    }
    table
}

fn bench_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("size");
    let generator = Generator::default();

    for classes in [1usize, 10, 100, 1000] {
        let table = table(classes);
        group.throughput(Throughput::Elements(classes as u64));
        group.bench_function(format!("classes_{classes}"), |b| {
            b.iter(|| generator.run(black_box(&table)))
        });
    }

    group.finish();
}

fn bench_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("features");
    let table = table(100);

    let lifecycle = Generator::new(GeneratorConfig::new().with_passes(PassSet::LIFECYCLE));
    group.bench_function("lifecycle_only", |b| {
        b.iter(|| lifecycle.run(black_box(&table)))
    });

    let methods = Generator::new(GeneratorConfig::new().with_passes(PassSet::SCRIPT_METHODS));
    group.bench_function("script_methods_only", |b| {
        b.iter(|| methods.run(black_box(&table)))
    });

    group.finish();
}

fn bench_scheduling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduling");
    let table = table(1000);

    let sequential = Generator::default();
    group.bench_function("sequential", |b| b.iter(|| sequential.run(black_box(&table))));

    let parallel = Generator::new(GeneratorConfig::new().with_parallel(true));
    group.bench_function("parallel", |b| b.iter(|| parallel.run(black_box(&table))));

    group.finish();
}

criterion_group!(benches, bench_sizes, bench_features, bench_scheduling);
criterion_main!(benches);
