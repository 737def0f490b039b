//! Generation stepping with the B3/S23 rule.

use rayon::prelude::*;
use tracing::debug;

use crate::state::{Cell, Engine};

/// Grids with at least this many cells compute the next generation on the
/// rayon pool. Smaller grids step on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 64 * 64;

/// Transition for one cell given its current state and live neighbor count.
///
/// B3/S23 rules:
/// - Birth: a dead cell with exactly 3 neighbors becomes alive (streak 1)
/// - Survival: a live cell with 2 or 3 neighbors survives (streak + 1)
/// - Everything else is or becomes dead (streak 0)
#[inline]
pub fn next_cell(cell: Cell, neighbors: u8) -> Cell {
    match (cell.alive, neighbors) {
        (true, 2) | (true, 3) => Cell {
            alive: true,
            streak: cell.streak.saturating_add(1),
        },
        (false, 3) => Cell::FRESH,
        _ => Cell::DEAD,
    }
}

impl Engine {
    /// Advance the automaton by one generation.
    ///
    /// All neighbor counts are read from the current grid and written into a
    /// fresh buffer, which then replaces the grid in one assignment.
    pub fn advance(&mut self) {
        let columns = self.columns as usize;
        let this = &*self;

        let step = |idx: usize| {
            let row = (idx / columns) as i32;
            let col = (idx % columns) as i32;
            next_cell(this.cells[idx], this.count_neighbors(row, col))
        };

        let next_cells: Vec<Cell> = if self.cells.len() >= PARALLEL_THRESHOLD {
            (0..self.cells.len()).into_par_iter().map(step).collect()
        } else {
            (0..self.cells.len()).map(step).collect()
        };

        let mut births = 0usize;
        let mut deaths = 0usize;
        for (old, new) in self.cells.iter().zip(&next_cells) {
            match (old.alive, new.alive) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
        }

        self.population = self.population + births - deaths;
        self.cells = next_cells;
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.population,
            births,
            deaths,
            "advanced"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Variant;

    fn engine_with(rows: i32, columns: i32, alive: &[(i32, i32)]) -> Engine {
        let mut engine = Engine::new(rows, columns).unwrap();
        for &(r, c) in alive {
            engine.activate_cell(r, c).unwrap();
        }
        engine
    }

    fn coords(engine: &Engine) -> Vec<(i32, i32)> {
        engine.active_cells().iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn test_next_cell_rule() {
        let old = Cell {
            alive: true,
            streak: 2,
        };
        assert_eq!(next_cell(old, 1), Cell::DEAD);
        assert_eq!(next_cell(old, 2).streak, 3);
        assert_eq!(next_cell(old, 3).streak, 3);
        assert_eq!(next_cell(old, 4), Cell::DEAD);

        assert_eq!(next_cell(Cell::DEAD, 2), Cell::DEAD);
        assert_eq!(next_cell(Cell::DEAD, 3), Cell::FRESH);
        assert_eq!(next_cell(Cell::DEAD, 4), Cell::DEAD);
    }

    #[test]
    fn test_streak_saturates() {
        let old = Cell {
            alive: true,
            streak: u32::MAX,
        };
        assert_eq!(next_cell(old, 2).streak, u32::MAX);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut engine = Engine::new(6, 6).unwrap();
        engine.advance();
        assert!(engine.is_empty());
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut engine = engine_with(5, 5, &[(2, 2)]);
        engine.advance();
        assert!(engine.is_empty());
    }

    #[test]
    fn test_block_is_stable_and_ages() {
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut engine = engine_with(4, 4, &block);

        engine.advance();
        assert_eq!(coords(&engine), block.to_vec());
        assert!(engine
            .active_cells()
            .iter()
            .all(|c| c.variant == Variant::Maturing));

        for _ in 0..10 {
            engine.advance();
        }
        assert_eq!(coords(&engine), block.to_vec());
        assert!(engine
            .active_cells()
            .iter()
            .all(|c| c.variant == Variant::Established));
    }

    #[test]
    fn test_blinker_oscillates() {
        let row = [(5, 4), (5, 5), (5, 6)];
        let mut engine = engine_with(8, 8, &row);

        engine.advance();
        assert_eq!(coords(&engine), vec![(4, 5), (5, 5), (6, 5)]);
        // Center survives, the tips are newborns
        assert_eq!(engine.variant(5, 5).unwrap(), Some(Variant::Maturing));
        assert_eq!(engine.variant(4, 5).unwrap(), Some(Variant::Fresh));

        engine.advance();
        assert_eq!(coords(&engine), row.to_vec());
        assert_eq!(engine.active_count(), 3);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // On a torus the birth at column -1 would wrap to column 4.
        let mut engine = engine_with(5, 5, &[(1, 0), (2, 0), (3, 0)]);
        engine.advance();
        assert_eq!(coords(&engine), vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut big = Engine::new(80, 80).unwrap();
        big.randomize_seeded(0.4, 7);

        // Sequential reference built from the same seed on the per-cell rule.
        let mut reference: Vec<Cell> = Vec::with_capacity(big.cell_count());
        for r in 0..80 {
            for c in 0..80 {
                let idx = big.index(r, c);
                reference.push(next_cell(big.cells[idx], big.count_neighbors(r, c)));
            }
        }

        big.advance();
        assert_eq!(big.cells, reference);
        assert_eq!(
            big.active_count(),
            reference.iter().filter(|c| c.alive).count()
        );
    }
}
