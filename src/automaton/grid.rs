//! Grid construction, bounds checks and size queries.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::{clamp_probability, EngineConfig, DEFAULT_DENSITY};
use crate::error::{EngineError, Result};
use crate::state::{Cell, Engine};

impl Engine {
    /// Create a grid of `rows * columns` dead cells.
    ///
    /// Fails with `InvalidDimension` if either dimension is not positive.
    pub fn new(rows: i32, columns: i32) -> Result<Self> {
        Self::build(rows, columns, DEFAULT_DENSITY, StdRng::from_entropy())
    }

    /// Create an engine from a config. A fixed `seed` makes `randomize()`
    /// reproducible.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::build(config.rows, config.columns, config.density, rng)
    }

    fn build(rows: i32, columns: i32, density: f64, rng: StdRng) -> Result<Self> {
        if rows <= 0 || columns <= 0 {
            return Err(EngineError::InvalidDimension { rows, columns });
        }

        let size = rows as usize * columns as usize;
        debug!(rows, columns, "creating grid");

        Ok(Engine {
            rows,
            columns,
            cells: vec![Cell::DEAD; size],
            population: 0,
            generation: 0,
            density: clamp_probability(density),
            rng,
        })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Total number of cells, `rows * columns`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Generations advanced since creation or the last clear/randomize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of alive cells. O(1).
    pub fn active_count(&self) -> usize {
        self.population
    }

    /// True when no cell is alive. O(1).
    pub fn is_empty(&self) -> bool {
        self.population == 0
    }

    /// Probability used by `randomize()`.
    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn set_density(&mut self, density: f64) {
        self.density = clamp_probability(density);
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.columns
    }

    /// Resolve a coordinate to its linear index or fail with `OutOfBounds`.
    #[inline]
    pub(crate) fn checked_index(&self, row: i32, col: i32) -> Result<usize> {
        if self.in_bounds(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }
}
