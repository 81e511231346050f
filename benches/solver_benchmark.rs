use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashSet;

use strands_solver::dictionary::Dictionary;
use strands_solver::enumerator::{candidates_over_grid, words_from_cell};
use strands_solver::solver::solve_tiling;
use strands_solver::{Cell, CellSet, Grid, MAX_ATTEMPTS, MAX_WORD_LEN, MIN_WORD_LEN};

const WORDS: &[&str] = &[
    "sear", "seat", "sate", "rate", "rats", "tare", "tars", "earn", "east", "eats", "nest",
    "nets", "neat", "near", "teas", "tale", "tales", "stale", "stare", "snare", "antler",
    "antlers", "learns", "eastern", "lantern", "relate", "related", "sealant", "arrest",
    "arrests", "steal", "slate", "later", "alert", "alter", "least", "leans", "renal",
];

fn get_example_grid() -> Grid {
    Grid::from_str("sear atne rles tean").unwrap()
}

fn get_dictionary() -> Dictionary {
    Dictionary::from_lines(WORDS.iter().copied())
}

fn benchmark_enumerate_one_cell(c: &mut Criterion) {
    let grid = get_example_grid();
    let dict = get_dictionary();
    let occupied = CellSet::for_grid(&grid);
    let blacklist = HashSet::new();

    c.bench_function("enumerate from one cell", |b| {
        b.iter(|| {
            words_from_cell(
                black_box(&grid),
                black_box(&dict),
                Cell::new(0, 0),
                &occupied,
                &blacklist,
                MIN_WORD_LEN,
                MAX_WORD_LEN,
            )
        })
    });
}

fn benchmark_collect_pool(c: &mut Criterion) {
    let grid = get_example_grid();
    let dict = get_dictionary();
    let occupied = CellSet::for_grid(&grid);
    let blacklist = HashSet::new();

    c.bench_function("collect candidates over grid", |b| {
        b.iter(|| {
            candidates_over_grid(
                black_box(&grid),
                black_box(&dict),
                &occupied,
                &blacklist,
                MIN_WORD_LEN,
                MAX_WORD_LEN,
            )
        })
    });
}

fn benchmark_solve(c: &mut Criterion) {
    let grid = get_example_grid();
    let dict = get_dictionary();
    let pool = candidates_over_grid(
        &grid,
        &dict,
        &CellSet::for_grid(&grid),
        &HashSet::new(),
        MIN_WORD_LEN,
        MAX_WORD_LEN,
    );

    c.bench_function("tiling solver", |b| {
        b.iter(|| {
            solve_tiling(
                black_box(&grid),
                black_box(&pool),
                &[],
                |_, _, _| {},
                || false,
                MAX_ATTEMPTS,
            )
        })
    });
}

criterion_group!(
    benches,
    benchmark_enumerate_one_cell,
    benchmark_collect_pool,
    benchmark_solve
);
criterion_main!(benches);
