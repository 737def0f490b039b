//! Cell mutation and queries: toggle, activate, deactivate, clear, randomize.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::clamp_probability;
use crate::error::Result;
use crate::state::{ActiveCell, Cell, Engine, Variant};

impl Engine {
    /// Write a cell and keep the population counter in sync.
    #[inline]
    pub(crate) fn put(&mut self, idx: usize, cell: Cell) {
        let was_alive = self.cells[idx].alive;
        self.cells[idx] = cell;
        match (was_alive, cell.alive) {
            (false, true) => self.population += 1,
            (true, false) => self.population -= 1,
            _ => {}
        }
    }

    /// Flip a cell between dead and alive (variant 1).
    ///
    /// Killing a cell resets its streak to 0.
    pub fn toggle_cell(&mut self, row: i32, col: i32) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        let next = if self.cells[idx].alive {
            Cell::DEAD
        } else {
            Cell::FRESH
        };
        trace!(row, col, alive = next.alive, "toggle");
        self.put(idx, next);
        Ok(())
    }

    /// Force a cell alive. An already-alive cell keeps its streak and variant.
    pub fn activate_cell(&mut self, row: i32, col: i32) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        if !self.cells[idx].alive {
            trace!(row, col, "activate");
            self.put(idx, Cell::FRESH);
        }
        Ok(())
    }

    /// Force a cell dead, resetting its streak.
    pub fn deactivate_cell(&mut self, row: i32, col: i32) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        if self.cells[idx].alive {
            trace!(row, col, "deactivate");
            self.put(idx, Cell::DEAD);
        }
        Ok(())
    }

    /// Whether the cell is alive.
    pub fn get_cell(&self, row: i32, col: i32) -> Result<bool> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx].alive)
    }

    /// The cell's variant, or `None` if it is dead.
    pub fn variant(&self, row: i32, col: i32) -> Result<Option<Variant>> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx].variant())
    }

    /// Consecutive generations the cell has been alive (0 when dead).
    pub fn streak(&self, row: i32, col: i32) -> Result<u32> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx].streak)
    }

    /// Every alive cell in row-major order.
    pub fn active_cells(&self) -> Vec<ActiveCell> {
        let mut out = Vec::with_capacity(self.population);
        let columns = self.columns as usize;

        for (idx, cell) in self.cells.iter().enumerate() {
            if let Some(variant) = cell.variant() {
                out.push(ActiveCell {
                    row: (idx / columns) as i32,
                    col: (idx % columns) as i32,
                    variant,
                });
            }
        }

        out
    }

    /// Kill every cell and reset streaks and the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::DEAD);
        self.population = 0;
        self.generation = 0;
        debug!("grid cleared");
    }

    /// Re-seed every cell from the engine's own RNG at the configured density.
    pub fn randomize(&mut self) {
        let density = self.density;
        // Detach the RNG so it can be borrowed alongside the grid.
        let mut rng = std::mem::replace(&mut self.rng, StdRng::seed_from_u64(0));
        self.randomize_with(density, &mut rng);
        self.rng = rng;
    }

    /// Re-seed every cell from a fresh RNG seeded with `seed`.
    pub fn randomize_seeded(&mut self, probability: f64, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.randomize_with(probability, &mut rng);
    }

    /// Independently make each cell alive (variant 1, streak 1) with
    /// `probability`, dead otherwise. The probability is clamped to `[0, 1]`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) {
        let p = clamp_probability(probability);
        let mut population = 0;

        for cell in self.cells.iter_mut() {
            *cell = if rng.gen_bool(p) {
                population += 1;
                Cell::FRESH
            } else {
                Cell::DEAD
            };
        }

        self.population = population;
        self.generation = 0;
        debug!(probability = p, population, "grid randomized");
    }
}
