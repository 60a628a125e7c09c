use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use regina::board::Board;
use regina::solver::engine::{Resolution, SolveMode, SolverEngine};
use regina::solver::heuristics::value::AscendingValueHeuristic;
use regina::solver::heuristics::variable::MinimumRemainingValuesHeuristic;
use regina::solver::strategy::BacktrackingSearch;

/// Column-stripe regions: solvable for n >= 4, with many valid placements.
fn stripe_board(n: usize) -> Board {
    let regions: Vec<u16> = (0..n * n).map(|i| (i % n) as u16).collect();
    Board::from_regions(n, &regions).expect("stripe board is valid")
}

/// Evens-then-odds column order keeps consecutive entries at least two
/// apart, so pinning rows to it yields a uniquely solvable board.
fn spaced_columns(n: usize) -> Vec<usize> {
    let mut cols: Vec<usize> = (0..n).step_by(2).collect();
    cols.extend((1..n).step_by(2));
    cols
}

/// One background region plus n-1 single-cell regions pinning rows 0..n-1;
/// the last row is forced into the remaining column.
fn pinned_board(n: usize) -> Board {
    let cols = spaced_columns(n);
    let mut regions = vec![0u16; n * n];
    for (row, &col) in cols.iter().enumerate().take(n - 1) {
        regions[row * n + col] = (row + 1) as u16;
    }
    Board::from_regions(n, &regions).expect("pinned board is valid")
}

fn first_solution_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("first-solution");
    for n in [8, 10, 12].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let board = stripe_board(n);
            let engine = SolverEngine::with_mode(SolveMode::FirstSolution);
            b.iter(|| {
                let (resolution, _stats) = engine.solve(black_box(&board)).unwrap();
                assert!(matches!(resolution, Resolution::Solved(_)));
            });
        });
    }
    group.finish();
}

fn uniqueness_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify-unique");
    for n in [8, 10, 12].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let board = pinned_board(n);
            let engine = SolverEngine::with_mode(SolveMode::VerifyUnique);
            b.iter(|| {
                let (resolution, _stats) = engine.solve(black_box(&board)).unwrap();
                assert!(matches!(resolution, Resolution::Solved(_)));
            });
        });
    }
    group.finish();
}

fn heuristic_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristics");
    let board = stripe_board(10);

    group.bench_function("n=10, select-first", |b| {
        let engine = SolverEngine::with_mode(SolveMode::FirstSolution);
        b.iter(|| {
            let (resolution, _stats) = engine.solve(black_box(&board)).unwrap();
            assert!(matches!(resolution, Resolution::Solved(_)));
        });
    });

    group.bench_function("n=10, minimum-remaining-values", |b| {
        let strategy = BacktrackingSearch::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(AscendingValueHeuristic),
        );
        let engine = SolverEngine::with_strategy(Box::new(strategy), SolveMode::FirstSolution);
        b.iter(|| {
            let (resolution, _stats) = engine.solve(black_box(&board)).unwrap();
            assert!(matches!(resolution, Resolution::Solved(_)));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    first_solution_benchmark,
    uniqueness_benchmark,
    heuristic_benchmarks
);
criterion_main!(benches);
