use base120_core::Limit;
use base120_recommend::RecommendEngine;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_fixtures::sample_catalog;

fn bench_recommend(c: &mut Criterion) {
    let engine = RecommendEngine::new();
    let catalog = sample_catalog();

    c.bench_function("recommend_short_problem", |b| {
        b.iter(|| {
            engine.recommend(
                black_box("our team is stuck on a complex architecture decision"),
                black_box(&catalog),
                Limit::default(),
            )
        })
    });

    let long_problem = "we need to break down this complex system and improve the feedback loops "
        .repeat(100);
    c.bench_function("recommend_long_problem", |b| {
        b.iter(|| engine.recommend(black_box(&long_problem), black_box(&catalog), Limit::default()))
    });

    c.bench_function("recommend_no_overlap", |b| {
        b.iter(|| engine.recommend(black_box("xyzzy plugh"), black_box(&catalog), Limit::default()))
    });
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
