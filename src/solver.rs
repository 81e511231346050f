//! Backtracking tiling search over a prioritized candidate pool.
//!
//! Candidates are tried longest-word-first (corner and edge cells break
//! ties), and the walk keeps a running best-coverage placement so a budget
//! or cancellation exit still hands back something useful.

use log::{debug, info};

use crate::{Candidate, CellSet, Grid, Placement, PROGRESS_INTERVAL};

/// Why a search frame stopped. Only `Exhausted` lets the parent frame keep
/// trying siblings; the other variants unwind the whole stack.
enum _Outcome {
    Success,
    Exhausted,
    Cancelled,
    OutOfBudget,
}

/// Searches for a disjoint subset of `pool` whose paths, together with
/// `committed`, cover every grid cell.
///
/// `committed` words are kept as a prefix of the result and their cells are
/// treated as occupied from the start; pool entries overlapping them are
/// simply never placed. `progress` and `cancel` are polled every
/// [`PROGRESS_INTERVAL`] attempts; reported coverage percentages never
/// decrease within one call.
///
/// Returns the complete placement if one is found, otherwise the best
/// partial placement that beats `committed`, otherwise `committed` itself;
/// `None` only when nothing was found and `committed` was empty.
pub fn solve_tiling<P, C>(
    grid: &Grid,
    pool: &[Candidate],
    committed: &[Candidate],
    progress: P,
    cancel: C,
    max_attempts: u64,
) -> Option<Placement>
where
    P: FnMut(u64, usize, f32),
    C: FnMut() -> bool,
{
    let total = grid.cell_count();

    let mut occupied = CellSet::for_grid(grid);
    for candidate in committed {
        occupied.extend_path(&candidate.path);
    }
    let committed_cells = occupied.len();

    if committed_cells == total {
        debug!("Committed words already cover the grid");
        return Some(committed.to_vec());
    }

    // longest words first, then paths touching the hardest-to-cover cells.
    // the order is fixed for the whole solve.
    let mut ordered: Vec<&Candidate> = pool.iter().collect();
    ordered.sort_by_key(|candidate| _priority(grid, candidate));

    let mut search = _Search {
        total,
        pool: ordered,
        occupied,
        placement: committed.to_vec(),
        best: committed.to_vec(),
        best_cells: committed_cells,
        attempts: 0,
        max_attempts,
        progress,
        cancel,
    };

    match search.run(0) {
        _Outcome::Success => {
            info!("Complete tiling found after {} attempts", search.attempts);
            Some(search.placement)
        }
        outcome => {
            match outcome {
                _Outcome::Cancelled => debug!("Cancelled after {} attempts", search.attempts),
                _Outcome::OutOfBudget => debug!("Budget spent: {} attempts", search.attempts),
                _ => debug!("Pool exhausted after {} attempts", search.attempts),
            }
            if search.best_cells > committed_cells {
                info!(
                    "Best partial placement covers {}/{} cells",
                    search.best_cells, total
                );
                Some(search.best)
            } else if !committed.is_empty() {
                Some(committed.to_vec())
            } else {
                None
            }
        }
    }
}

/// ascending sort key: longer words first, then corner cells, then edges
fn _priority(grid: &Grid, candidate: &Candidate) -> i64 {
    let position: i64 = candidate
        .path
        .iter()
        .map(|&cell| {
            if grid.is_corner(cell) {
                4
            } else if grid.is_edge(cell) {
                2
            } else {
                1
            }
        })
        .sum();
    -(candidate.word.len() as i64) * 1000 - position
}

struct _Search<'a, P, C> {
    total: usize,
    pool: Vec<&'a Candidate>,
    occupied: CellSet,
    placement: Placement,
    // deep copy of the highest-coverage placement reached so far; the live
    // `placement` above is mutated on every backtrack
    best: Placement,
    best_cells: usize,
    attempts: u64,
    max_attempts: u64,
    progress: P,
    cancel: C,
}

impl<P, C> _Search<'_, P, C>
where
    P: FnMut(u64, usize, f32),
    C: FnMut() -> bool,
{
    fn run(&mut self, from: usize) -> _Outcome {
        self.attempts += 1;

        if self.occupied.len() > self.best_cells {
            self.best = self.placement.clone();
            self.best_cells = self.occupied.len();
        }

        if self.attempts % PROGRESS_INTERVAL == 0 {
            let coverage = 100.0 * self.best_cells as f32 / self.total as f32;
            (self.progress)(self.attempts, self.best.len(), coverage);
            if (self.cancel)() {
                return _Outcome::Cancelled;
            }
        }

        if self.occupied.len() == self.total {
            return _Outcome::Success;
        }
        if self.attempts > self.max_attempts {
            return _Outcome::OutOfBudget;
        }

        // trying pool entries only from `from` onward means each subset is
        // visited once, in one order
        for j in from..self.pool.len() {
            let candidate = self.pool[j];
            if !self.occupied.is_disjoint(&candidate.path) {
                continue;
            }

            self.occupied.extend_path(&candidate.path);
            self.placement.push(candidate.clone());

            let outcome = self.run(j + 1);
            if let _Outcome::Success = outcome {
                return _Outcome::Success;
            }

            self.placement.pop();
            self.occupied.retract_path(&candidate.path);

            match outcome {
                _Outcome::Exhausted => {}
                other => return other,
            }
        }

        _Outcome::Exhausted
    }
}
