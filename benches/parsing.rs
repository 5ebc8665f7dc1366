//! Benchmarks for command parsing.

use bitmap_editor::editor::Command;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_parse_point(c: &mut Criterion) {
    c.bench_function("parse_point", |b| {
        b.iter(|| Command::parse(black_box("L 12 34 A")).unwrap())
    });
}

fn bench_parse_rejected(c: &mut Criterion) {
    c.bench_function("parse_wrong_type", |b| {
        b.iter(|| Command::parse(black_box("H 10 5 A A")).unwrap_err())
    });
}

criterion_group!(benches, bench_parse_point, bench_parse_rejected);
criterion_main!(benches);
