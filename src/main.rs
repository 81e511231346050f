use env_logger::Env;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::env;

use strands_solver::dictionary::Dictionary;
use strands_solver::enumerator::candidates_over_grid;
use strands_solver::solver::solve_tiling;
use strands_solver::{CellSet, Grid, MAX_ATTEMPTS, MAX_WORD_LEN, MIN_WORD_LEN};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: strands_solver [grid string] [dictionary path]");
        eprintln!("  grid string: one token per row, e.g. \"pirer ganem dotol\"");
        return;
    }

    let grid = match Grid::from_str(&args[1]) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid grid! Error: {}", e);
            return;
        }
    };
    let dict = match Dictionary::from_file(&args[2]) {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("Could not read dictionary: {}", e);
            return;
        }
    };
    if dict.is_empty() {
        warn!("Dictionary is empty; no words can be found");
    }
    debug!("\nGRID:\n{}", grid);

    let occupied = CellSet::for_grid(&grid);
    let blacklist = HashSet::new();
    let pool = candidates_over_grid(
        &grid,
        &dict,
        &occupied,
        &blacklist,
        MIN_WORD_LEN,
        MAX_WORD_LEN,
    );
    info!("{} candidate words collected", pool.len());

    let progress = |attempts: u64, placed: usize, coverage: f32| {
        info!("attempts: {attempts} | words placed: {placed} | best coverage: {coverage:.1}%");
    };
    let placement = match solve_tiling(&grid, &pool, &[], progress, || false, MAX_ATTEMPTS) {
        Some(placement) => placement,
        None => {
            eprintln!("No solution found.");
            return;
        }
    };

    println!("\nGRID:\n{}", grid);
    let covered: usize = placement.iter().map(|c| c.path.len()).sum();
    println!("SOLUTION ({}/{} cells):", covered, grid.cell_count());
    for candidate in &placement {
        let cells: Vec<String> = candidate.path.iter().map(|c| c.to_string()).collect();
        println!("  {:<15} {}", candidate.word, cells.join(" "));
    }
}
