pub mod dictionary;
pub mod enumerator;
pub mod solver;

use std::fmt;
use thiserror::Error;

/// Smallest word length the enumerator will report.
pub const MIN_WORD_LEN: usize = 4;
/// Longest path the enumerator will walk before giving up on a branch.
pub const MAX_WORD_LEN: usize = 15;
/// Default backtracking budget for the tiling solver.
pub const MAX_ATTEMPTS: u64 = 100_000;
/// Attempts between progress reports / cancellation polls in the solver.
pub const PROGRESS_INTERVAL: u64 = 1000;
/// Largest grid dimension accepted on either axis.
pub const MAX_DIM: usize = 20;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid must have between 1 and 20 rows, got {0}")]
    BadRowCount(usize),
    #[error("grid rows must have between 1 and 20 letters, got {0}")]
    BadColCount(usize),
    #[error("row {row} has {got} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("cell ({row},{col}) holds {found:?}, expected a letter A-Z")]
    NotALetter { row: usize, col: usize, found: char },
}

type Result<T> = std::result::Result<T, GridError>;

/// A single grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A dictionary word together with one grid path that spells it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub word: String,
    pub path: Vec<Cell>,
}

impl Candidate {
    pub fn new(word: impl Into<String>, path: Vec<Cell>) -> Self {
        Candidate {
            word: word.into(),
            path,
        }
    }
}

/// An ordered list of candidates whose paths are pairwise cell-disjoint.
pub type Placement = Vec<Candidate>;

/// Top-level representation of a puzzle grid.
/// Does not contain the answer to the puzzle--merely its letters.
///
/// Immutable once constructed; edits replace the whole grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    // row-major ASCII uppercase letters
    letters: Vec<u8>,
}

impl Grid {
    /// constructs the Grid from a whitespace-separated string, one token per row
    pub fn from_str(rows_str: &str) -> Result<Self> {
        let row_strs: Vec<&str> = rows_str.split_whitespace().collect();

        // sanity check the dimensions before touching any letters
        if row_strs.is_empty() || row_strs.len() > MAX_DIM {
            return Err(GridError::BadRowCount(row_strs.len()));
        }
        let cols = row_strs[0].chars().count();
        if cols == 0 || cols > MAX_DIM {
            return Err(GridError::BadColCount(cols));
        }

        let rows = row_strs.len();
        let mut letters = Vec::with_capacity(rows * cols);
        for (row, row_str) in row_strs.iter().enumerate() {
            let got = row_str.chars().count();
            if got != cols {
                return Err(GridError::RaggedRow {
                    row,
                    got,
                    expected: cols,
                });
            }
            for (col, ch) in row_str.chars().enumerate() {
                let upper = ch.to_ascii_uppercase();
                if !upper.is_ascii_uppercase() {
                    return Err(GridError::NotALetter { row, col, found: ch });
                }
                letters.push(upper as u8);
            }
        }

        Ok(Grid {
            rows,
            cols,
            letters,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// the letter at a cell; the cell must be in bounds
    pub fn letter(&self, cell: Cell) -> char {
        self.letters[cell.row * self.cols + cell.col] as char
    }

    /// the cell one step away in the given direction, if it's still on the grid
    pub fn neighbor(&self, cell: Cell, d_row: i32, d_col: i32) -> Option<Cell> {
        let row = cell.row.checked_add_signed(d_row as isize)?;
        let col = cell.col.checked_add_signed(d_col as isize)?;
        if row < self.rows && col < self.cols {
            Some(Cell::new(row, col))
        } else {
            None
        }
    }

    /// the word spelled by walking the given cells in order
    pub fn spell(&self, path: &[Cell]) -> String {
        path.iter().map(|&cell| self.letter(cell)).collect()
    }

    pub fn is_corner(&self, cell: Cell) -> bool {
        (cell.row == 0 || cell.row == self.rows - 1)
            && (cell.col == 0 || cell.col == self.cols - 1)
    }

    /// true for any cell on the outer ring, corners included
    pub fn is_edge(&self, cell: Cell) -> bool {
        cell.row == 0 || cell.row == self.rows - 1 || cell.col == 0 || cell.col == self.cols - 1
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            let start = row * self.cols;
            for &letter in &self.letters[start..start + self.cols] {
                write!(f, "{}", letter as char)?;
            }
        }
        Ok(())
    }
}

/// Set of grid cells, packed as a bitmask over row-major cell indices.
///
/// Used both as the occupancy mask for already-placed words and as the
/// visited set during path enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSet {
    bits: Vec<u64>,
    cols: usize,
    len: usize,
}

impl CellSet {
    /// an empty set sized for the given grid
    pub fn for_grid(grid: &Grid) -> Self {
        let words = grid.cell_count().div_ceil(64);
        CellSet {
            bits: vec![0; words],
            cols: grid.cols(),
            len: 0,
        }
    }

    fn slot(&self, cell: Cell) -> (usize, u64) {
        let idx = cell.row * self.cols + cell.col;
        (idx / 64, 1u64 << (idx % 64))
    }

    pub fn contains(&self, cell: Cell) -> bool {
        let (word, mask) = self.slot(cell);
        self.bits[word] & mask != 0
    }

    /// returns false if the cell was already present
    pub fn insert(&mut self, cell: Cell) -> bool {
        let (word, mask) = self.slot(cell);
        if self.bits[word] & mask != 0 {
            return false;
        }
        self.bits[word] |= mask;
        self.len += 1;
        true
    }

    /// returns false if the cell wasn't present
    pub fn remove(&mut self, cell: Cell) -> bool {
        let (word, mask) = self.slot(cell);
        if self.bits[word] & mask == 0 {
            return false;
        }
        self.bits[word] &= !mask;
        self.len -= 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// true iff none of the path's cells are in the set
    pub fn is_disjoint(&self, path: &[Cell]) -> bool {
        path.iter().all(|&cell| !self.contains(cell))
    }

    pub fn extend_path(&mut self, path: &[Cell]) {
        for &cell in path {
            self.insert(cell);
        }
    }

    pub fn retract_path(&mut self, path: &[Cell]) {
        for &cell in path {
            self.remove(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let grid = Grid::from_str("cats rate").unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.letter(Cell::new(0, 0)), 'C');
        assert_eq!(grid.letter(Cell::new(1, 3)), 'E');
        assert_eq!(grid.to_string(), "CATS\nRATE");
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert_eq!(Grid::from_str(""), Err(GridError::BadRowCount(0)));
        assert_eq!(
            Grid::from_str("ab abc"),
            Err(GridError::RaggedRow {
                row: 1,
                got: 3,
                expected: 2
            })
        );
        assert_eq!(
            Grid::from_str("a2"),
            Err(GridError::NotALetter {
                row: 0,
                col: 1,
                found: '2'
            })
        );
        let too_tall = vec!["a"; 21].join(" ");
        assert_eq!(Grid::from_str(&too_tall), Err(GridError::BadRowCount(21)));
        let too_wide = "a".repeat(21);
        assert_eq!(Grid::from_str(&too_wide), Err(GridError::BadColCount(21)));
    }

    #[test]
    fn test_neighbor_bounds() {
        let grid = Grid::from_str("ab cd").unwrap();

        assert_eq!(grid.neighbor(Cell::new(0, 0), 1, 1), Some(Cell::new(1, 1)));
        assert_eq!(grid.neighbor(Cell::new(0, 0), -1, 0), None);
        assert_eq!(grid.neighbor(Cell::new(1, 1), 0, 1), None);
    }

    #[test]
    fn test_corner_and_edge() {
        let grid = Grid::from_str("abc def ghi").unwrap();

        assert!(grid.is_corner(Cell::new(0, 0)));
        assert!(grid.is_corner(Cell::new(2, 2)));
        assert!(!grid.is_corner(Cell::new(0, 1)));
        assert!(grid.is_edge(Cell::new(0, 1)));
        assert!(grid.is_edge(Cell::new(1, 0)));
        assert!(!grid.is_edge(Cell::new(1, 1)));
    }

    #[test]
    fn test_spell() {
        let grid = Grid::from_str("ca ts").unwrap();
        let path = vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(1, 1),
        ];

        assert_eq!(grid.spell(&path), "CATS");
    }

    #[test]
    fn test_cell_set() {
        let grid = Grid::from_str("abc def").unwrap();
        let mut set = CellSet::for_grid(&grid);

        assert!(set.is_empty());
        assert!(set.insert(Cell::new(0, 2)));
        assert!(!set.insert(Cell::new(0, 2)));
        assert!(set.contains(Cell::new(0, 2)));
        assert_eq!(set.len(), 1);

        let path = [Cell::new(1, 0), Cell::new(1, 1)];
        assert!(set.is_disjoint(&path));
        set.extend_path(&path);
        assert!(!set.is_disjoint(&path));
        assert_eq!(set.len(), 3);

        set.retract_path(&path);
        assert!(set.remove(Cell::new(0, 2)));
        assert!(!set.remove(Cell::new(0, 2)));
        assert!(set.is_empty());
    }
}
