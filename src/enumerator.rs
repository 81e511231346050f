//! Depth-first word enumeration over the grid.
//!
//! From a start cell we grow a simple 8-connected path one neighbor at a
//! time. A branch survives only while its letters are still a prefix of some
//! dictionary word--that single check is what keeps the walk tractable on a
//! 20x20 grid against a 370k-word dictionary.

use log::debug;
use rustc_hash::FxHashMap;
use std::collections::HashSet;

use crate::dictionary::Dictionary;
use crate::{Candidate, Cell, CellSet, Grid};

/// Neighbor offsets in their fixed visit order. Result ordering and path
/// tie-breaks depend on it, so don't reshuffle.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Enumerates every dictionary word reachable from `start` by a simple
/// 8-connected path avoiding `occupied`, paired with one path spelling it.
///
/// Each word appears once, carrying the longest qualifying path seen (first
/// such path under the fixed neighbor order on ties). Results are sorted by
/// word length descending, ties in discovery order.
///
/// An out-of-bounds or occupied `start` yields an empty list.
pub fn words_from_cell(
    grid: &Grid,
    dict: &Dictionary,
    start: Cell,
    occupied: &CellSet,
    blacklist: &HashSet<String>,
    min_len: usize,
    max_len: usize,
) -> Vec<Candidate> {
    if !grid.in_bounds(start) || occupied.contains(start) || dict.is_empty() {
        return Vec::new();
    }

    let mut walk = _Walk {
        grid,
        dict,
        occupied,
        blacklist,
        min_len,
        max_len,
        word: String::new(),
        path: Vec::new(),
        visited: CellSet::for_grid(grid),
        found: Vec::new(),
        index: FxHashMap::default(),
    };
    walk.step(start);

    let mut found = walk.found;
    // longest first; equal lengths keep their discovery order
    found.sort_by(|a, b| b.word.len().cmp(&a.word.len()));
    found
}

/// Runs [`words_from_cell`] from every cell in row-major order and
/// concatenates the results into one candidate pool.
///
/// Candidates discovered from different start cells are not deduplicated
/// against each other; the solver's disjointness check copes with repeats.
pub fn candidates_over_grid(
    grid: &Grid,
    dict: &Dictionary,
    occupied: &CellSet,
    blacklist: &HashSet<String>,
    min_len: usize,
    max_len: usize,
) -> Vec<Candidate> {
    let mut pool = Vec::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            pool.extend(words_from_cell(
                grid,
                dict,
                Cell::new(row, col),
                occupied,
                blacklist,
                min_len,
                max_len,
            ));
        }
    }
    debug!("Collected {} candidates over the whole grid", pool.len());
    pool
}

/// One in-flight depth-first walk. `word`, `path` and `visited` always
/// describe the same cells; `found`/`index` accumulate results.
struct _Walk<'a> {
    grid: &'a Grid,
    dict: &'a Dictionary,
    occupied: &'a CellSet,
    blacklist: &'a HashSet<String>,
    min_len: usize,
    max_len: usize,
    word: String,
    path: Vec<Cell>,
    visited: CellSet,
    found: Vec<Candidate>,
    index: FxHashMap<String, usize>,
}

impl _Walk<'_> {
    fn step(&mut self, cell: Cell) {
        self.word.push(self.grid.letter(cell));
        self.path.push(cell);
        self.visited.insert(cell);

        if self.word.len() >= self.min_len
            && !self.blacklist.contains(&self.word)
            && self.dict.contains(&self.word)
        {
            self.record();
        }

        // max_len caps the path outright; the prefix test kills dead branches
        if self.word.len() < self.max_len && self.dict.has_prefix(&self.word) {
            for (d_row, d_col) in NEIGHBOR_OFFSETS {
                if let Some(next) = self.grid.neighbor(cell, d_row, d_col) {
                    if self.occupied.contains(next) || self.visited.contains(next) {
                        continue;
                    }
                    self.step(next);
                }
            }
        }

        self.visited.remove(cell);
        self.path.pop();
        self.word.pop();
    }

    /// keep one path per word, preferring the longest one seen
    fn record(&mut self) {
        match self.index.get(&self.word) {
            Some(&i) => {
                if self.path.len() > self.found[i].path.len() {
                    self.found[i].path = self.path.clone();
                }
            }
            None => {
                self.index.insert(self.word.clone(), self.found.len());
                self.found
                    .push(Candidate::new(self.word.clone(), self.path.clone()));
            }
        }
    }
}
