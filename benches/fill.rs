//! Benchmarks for grid fills.

use bitmap_editor::bitmap::{Color, Grid};
use bitmap_editor::editor::Editor;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_full_fill(c: &mut Criterion) {
    let mut grid = Grid::new(250, 250).unwrap();
    let color = Color::new('Z').unwrap();
    c.bench_function("fill_250x250", |b| {
        b.iter(|| grid.set_region(black_box(1), 250, 1, black_box(250), color))
    });
}

fn bench_show(c: &mut Criterion) {
    let mut editor = Editor::new();
    editor.execute("I 250 250").unwrap();
    editor.execute("V 125 1 250 X").unwrap();
    c.bench_function("show_250x250", |b| b.iter(|| editor.execute(black_box("S"))));
}

criterion_group!(benches, bench_full_fill, bench_show);
criterion_main!(benches);
