//! Built-in seed patterns and placement onto the grid.

use tracing::debug;

use crate::error::Result;
use crate::state::{Cell, Engine};

/// A named shape given as `(row, col)` offsets from its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO];

impl Pattern {
    /// Look up a built-in pattern by name, ignoring case.
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl Engine {
    /// Activate every cell of `pattern` offset by `(origin_row, origin_col)`.
    ///
    /// All target cells are checked before any is written, so a pattern that
    /// does not fit fails with `OutOfBounds` and leaves the grid unchanged.
    pub fn place_pattern(&mut self, pattern: &Pattern, origin_row: i32, origin_col: i32) -> Result<()> {
        let indices = pattern
            .cells
            .iter()
            .map(|&(dr, dc)| self.checked_index(origin_row + dr, origin_col + dc))
            .collect::<Result<Vec<usize>>>()?;

        for idx in indices {
            if !self.cells[idx].alive {
                self.put(idx, Cell::FRESH);
            }
        }

        debug!(
            pattern = pattern.name,
            origin_row, origin_col, "pattern placed"
        );
        Ok(())
    }
}
