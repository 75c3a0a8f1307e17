//! Benchmarks for the cube model and the layer solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rubiks::{optimize, Cube, DefinedMove, Move, Solver};

fn scrambled(seed: u64) -> Cube {
    let mut cube = Cube::new(3);
    cube.shuffle_with(&mut fastrand::Rng::with_seed(seed), 20);
    cube
}

/// Benchmark a single slice move on a 3x3x3 cube.
fn bench_apply_move(c: &mut Criterion) {
    let mut cube = Cube::new(3);
    let mv = DefinedMove::at(Move::Pitch, 2);

    c.bench_function("apply_move", |b| b.iter(|| cube.apply_move(black_box(mv))));
}

/// Benchmark a whole-cube move, which turns every slice.
fn bench_apply_whole_cube_move(c: &mut Criterion) {
    let mut cube = Cube::new(3);
    let mv = DefinedMove::whole(Move::DoubleRoll);

    c.bench_function("apply_whole_cube_move", |b| {
        b.iter(|| cube.apply_move(black_box(mv)))
    });
}

/// Benchmark a 20 move scramble.
fn bench_shuffle(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(1);
    let mut cube = Cube::new(3);

    c.bench_function("shuffle_20", |b| {
        b.iter(|| cube.shuffle_with(&mut rng, black_box(20)))
    });
}

/// Benchmark a complete solve of a scrambled cube.
fn bench_solve(c: &mut Criterion) {
    let cube = scrambled(7);

    c.bench_function("solve", |b| {
        b.iter(|| Solver::new(black_box(&cube)).solve())
    });
}

/// Benchmark the complete solve on several scrambles, optimized or not.
fn bench_solve_many(c: &mut Criterion) {
    let cubes: Vec<Cube> = (0..10).map(scrambled).collect();
    let mut group = c.benchmark_group("solve_10");
    group.sample_size(20);
    for optimized in [false, true] {
        let name = if optimized { "optimized" } else { "raw" };
        group.bench_function(name, |b| {
            b.iter(|| {
                for cube in &cubes {
                    let _ = Solver::new(black_box(cube)).with_optimizer(optimized).solve();
                }
            })
        });
    }
    group.finish();
}

/// Benchmark the peephole optimizer on a recorded path.
fn bench_optimize(c: &mut Criterion) {
    let moves: Vec<DefinedMove> = Solver::new(&scrambled(7))
        .solve()
        .map(|path| path.remaining().to_vec())
        .unwrap_or_default();

    c.bench_function("optimize", |b| b.iter(|| optimize(black_box(&moves))));
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_apply_whole_cube_move,
    bench_shuffle,
    bench_solve,
    bench_solve_many,
    bench_optimize
);
criterion_main!(benches);
