use criterion::{Criterion, criterion_group, criterion_main};
use feature_matrix_engine::parsing::{find_links, replace_links};
use std::hint::black_box;
mod common;

fn bench_find_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_links");
    group.sample_size(20);

    let content = common::generate_comment_text(100);
    group.bench_function("comments", |b| {
        b.iter(|| {
            let result = find_links(black_box(&content));
            black_box(result);
        });
    });

    let unclosed = common::generate_unclosed_brackets(1_000);
    group.bench_function("unclosed_brackets", |b| {
        b.iter(|| {
            let result = find_links(black_box(&unclosed));
            black_box(result);
        });
    });

    group.finish();
}

fn bench_replace_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_links");
    group.sample_size(20);

    let content = common::generate_comment_text(100);
    group.bench_function("plain", |b| {
        b.iter(|| {
            let result = replace_links(black_box(&content), |t, u| format!("{t} ({u})"));
            black_box(result);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_find_links, bench_replace_links);
criterion_main!(benches);
