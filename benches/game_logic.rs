use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{spawn_figure, Field, GameState, SimpleRng};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(10, 20, 12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            state.tick(black_box(None));
        })
    });
}

fn bench_find_filled_row(c: &mut Criterion) {
    let mut field = Field::new(50, 50);
    // Worst case: every row almost full, nothing to find.
    for y in 1..field.rows() - 1 {
        for x in 2..field.cols() - 4 {
            field.set(x, y, 2);
        }
    }

    c.bench_function("find_filled_row_none", |b| {
        b.iter(|| black_box(&field).find_filled_row())
    });
}

fn bench_clear_row(c: &mut Criterion) {
    let mut field = Field::new(50, 50);
    for x in 2..field.cols() - 2 {
        field.set(x, 25, 2);
    }

    c.bench_function("clear_row_rebuild", |b| {
        b.iter(|| black_box(&field).clear_row(25))
    });
}

fn bench_spawn_figure(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_figure", |b| {
        b.iter(|| spawn_figure(&mut rng, black_box(50)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_find_filled_row,
    bench_clear_row,
    bench_spawn_figure
);
criterion_main!(benches);
