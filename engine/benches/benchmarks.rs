//! Performance benchmarks for roster-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roster_engine::{
    decode, encode,
    skill::{skill_defaults, skill_rules, skill_table, SKILL_RULES},
    QueryParams, Skill, ViewState,
};

fn create_skills(n: u64) -> Vec<Skill> {
    (0..n)
        .map(|i| Skill::with_id(i, 1, format!("Skill {}", (i * 7919) % n)))
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let defaults = skill_defaults();
    let query = QueryParams::parse("tab=skills&page=3&itemsPerPage=25&filter=nurse&sortBy=0&asc=false");

    group.bench_function("parse_and_decode", |b| {
        b.iter(|| {
            let query = QueryParams::parse(black_box(
                "tab=skills&page=3&itemsPerPage=25&filter=nurse&sortBy=0&asc=false",
            ));
            decode(&query, &defaults)
        })
    });

    group.bench_function("encode", |b| {
        let state = ViewState::default().with_filter(Some("nurse")).with_page(4);
        b.iter(|| encode(black_box(&state), black_box(&query)).to_query_string())
    });

    group.finish();
}

fn bench_table_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_view");
    let table = skill_table();

    for size in [100u64, 1_000, 10_000] {
        let skills = create_skills(size);

        group.bench_with_input(BenchmarkId::new("sorted", size), &skills, |b, skills| {
            let query = QueryParams::parse("page=2&itemsPerPage=50&sortBy=0&asc=false");
            b.iter(|| table.view(black_box(skills), &query).slice.items.len())
        });

        group.bench_with_input(BenchmarkId::new("filtered", size), &skills, |b, skills| {
            let query = QueryParams::parse("filter=skill 1&sortBy=-1");
            b.iter(|| table.view(black_box(skills), &query).slice.total_filtered_count)
        });
    }

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");
    let skills = create_skills(10_000);
    let rules = skill_rules(&skills);
    let candidate = Skill::with_id(20_000, 1, "Unused name");

    group.bench_function("evaluate_10k", |b| {
        b.iter(|| rules.evaluate(black_box(&candidate), SKILL_RULES).is_valid())
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_table_view, bench_validation);
criterion_main!(benches);
