mod fixtures;

use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_tag_core::GraphQLTag;
use libgraphql_tag_core::TagOptions;
use libgraphql_tag_core::normalize;

fn quiet_tag() -> GraphQLTag {
    GraphQLTag::new().with_options(TagOptions {
        warn_on_fragment_conflict: false,
        ..TagOptions::default()
    })
}

// ─── Group 1: Cache Misses ─────────────────────────────────

fn uncached_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncached_parse");

    group.bench_function("simple_query", |b| {
        let tag = quiet_tag();
        b.iter(|| {
            tag.reset_caches();
            black_box(tag.parse(fixtures::SIMPLE_QUERY, &[]))
        })
    });

    let many_ops = fixtures::many_operations_with_fragment(50);
    group.throughput(Throughput::Bytes(many_ops.len() as u64));
    group.bench_function("many_operations_50", |b| {
        let tag = quiet_tag();
        b.iter(|| {
            tag.reset_caches();
            black_box(tag.parse(&many_ops, &[]))
        })
    });

    group.finish();
}

// ─── Group 2: Cache Hits ───────────────────────────────────

fn cached_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_parse");

    group.bench_function("simple_query", |b| {
        let tag = quiet_tag();
        tag.parse(fixtures::SIMPLE_QUERY, &[]).unwrap();
        b.iter(|| black_box(tag.parse(fixtures::SIMPLE_QUERY, &[])))
    });

    let many_ops = fixtures::many_operations_with_fragment(50);
    let reformatted = fixtures::reformatted(&many_ops);
    group.throughput(Throughput::Bytes(reformatted.len() as u64));
    group.bench_function("many_operations_50 (reformatted)", |b| {
        let tag = quiet_tag();
        tag.parse(&many_ops, &[]).unwrap();
        b.iter(|| black_box(tag.parse(&reformatted, &[])))
    });

    group.finish();
}

// ─── Group 3: Normalization Only ───────────────────────────

fn normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let many_ops = fixtures::many_operations_with_fragment(50);
    group.throughput(Throughput::Bytes(many_ops.len() as u64));
    group.bench_function("many_operations_50", |b| {
        b.iter(|| black_box(normalize(&many_ops)))
    });

    group.finish();
}

// ─── Group 4: Interpolation ────────────────────────────────

fn interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");

    group.bench_function("query_with_two_fragments", |b| {
        let tag = quiet_tag();
        let name_fields =
            tag.parse("fragment NameFields on User { first last }", &[]).unwrap();
        let user_fields = tag.parse(
            "fragment UserFields on User { id ...NameFields }",
            &[&*name_fields],
        ).unwrap();
        b.iter(|| {
            black_box(tag.parse(
                "query Me { me { ...UserFields } }",
                &[&*user_fields, &*name_fields],
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    uncached_parse,
    cached_parse,
    normalization,
    interpolation,
);
criterion_main!(benches);
