//! Core state structures: cells, variants and the engine that owns the grid.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Display/sound variant of an alive cell.
///
/// Derived from how many consecutive generations the cell has been alive.
/// It never feeds back into the birth/survival rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Alive for one generation (newly born or just placed).
    Fresh,
    /// Alive for two consecutive generations.
    Maturing,
    /// Alive for three or more consecutive generations.
    Established,
}

impl Variant {
    /// Map an alive-streak to its variant. `streak` must be at least 1.
    #[inline]
    pub fn from_streak(streak: u32) -> Self {
        match streak {
            0 | 1 => Variant::Fresh,
            2 => Variant::Maturing,
            _ => Variant::Established,
        }
    }

    /// Flattened integer code used at external boundaries (1, 2 or 3).
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Variant::Fresh => 1,
            Variant::Maturing => 2,
            Variant::Established => 3,
        }
    }
}

/// A single grid cell: liveness plus the consecutive-alive streak.
///
/// Invariant: `alive == (streak > 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub streak: u32,
}

impl Cell {
    pub const DEAD: Cell = Cell {
        alive: false,
        streak: 0,
    };

    pub const FRESH: Cell = Cell {
        alive: true,
        streak: 1,
    };

    /// Variant of this cell, or `None` if dead.
    #[inline]
    pub fn variant(self) -> Option<Variant> {
        if self.alive {
            Some(Variant::from_streak(self.streak))
        } else {
            None
        }
    }

    /// Flattened state: 0 for dead, otherwise the variant code.
    #[inline]
    pub fn code(self) -> u8 {
        self.variant().map_or(0, Variant::code)
    }
}

/// An alive cell as reported to renderers and audio drivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveCell {
    pub row: i32,
    pub col: i32,
    pub variant: Variant,
}

/// The automaton engine. Owns a fixed `rows x columns` grid.
///
/// Created with [`Engine::new`] or [`Engine::from_config`], then mutated in
/// place. Not internally synchronized: wrap it in a mutex if more than one
/// thread needs it.
pub struct Engine {
    pub(crate) rows: i32,
    pub(crate) columns: i32,
    pub(crate) cells: Vec<Cell>, // row-major
    pub(crate) population: usize,
    pub(crate) generation: u64,
    pub(crate) density: f64,
    pub(crate) rng: StdRng,
}

impl Engine {
    /// Get the linear index for a coordinate. Caller checks bounds.
    #[inline]
    pub(crate) fn index(&self, row: i32, col: i32) -> usize {
        row as usize * self.columns as usize + col as usize
    }

    /// Count alive neighbors using the Moore neighborhood (8 neighbors, no wrap).
    pub(crate) fn count_neighbors(&self, row: i32, col: i32) -> u8 {
        let mut count = 0;

        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let nr = row + dr;
                let nc = col + dc;

                if nr >= 0 && nr < self.rows && nc >= 0 && nc < self.columns {
                    let idx = self.index(nr, nc);
                    count += self.cells[idx].alive as u8;
                }
            }
        }

        count
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("population", &self.population)
            .field("generation", &self.generation)
            .field("density", &self.density)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_streak() {
        assert_eq!(Variant::from_streak(1), Variant::Fresh);
        assert_eq!(Variant::from_streak(2), Variant::Maturing);
        assert_eq!(Variant::from_streak(3), Variant::Established);
        assert_eq!(Variant::from_streak(u32::MAX), Variant::Established);
    }

    #[test]
    fn test_variant_codes_are_distinct() {
        assert_eq!(Variant::Fresh.code(), 1);
        assert_eq!(Variant::Maturing.code(), 2);
        assert_eq!(Variant::Established.code(), 3);
    }

    #[test]
    fn test_cell_code() {
        assert_eq!(Cell::DEAD.code(), 0);
        assert_eq!(Cell::FRESH.code(), 1);
        assert_eq!(
            Cell {
                alive: true,
                streak: 7
            }
            .code(),
            3
        );
        assert_eq!(Cell::DEAD.variant(), None);
    }
}
