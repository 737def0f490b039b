//! Region extraction and import operations.

use tracing::debug;

use crate::state::{Cell, Engine};

/// A half-open rectangle `[min_row, max_row) x [min_col, max_col)`, clamped
/// to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rect {
    min_row: i32,
    min_col: i32,
    max_row: i32,
    max_col: i32,
}

impl Rect {
    fn len(&self) -> usize {
        (self.max_row - self.min_row) as usize * (self.max_col - self.min_col) as usize
    }
}

impl Engine {
    /// Clamp coordinates to grid bounds. `None` for an empty or inverted region.
    fn clamp_region(&self, min_row: i32, min_col: i32, max_row: i32, max_col: i32) -> Option<Rect> {
        let rect = Rect {
            min_row: min_row.clamp(0, self.rows),
            min_col: min_col.clamp(0, self.columns),
            max_row: max_row.clamp(0, self.rows),
            max_col: max_col.clamp(0, self.columns),
        };

        if rect.min_row >= rect.max_row || rect.min_col >= rect.max_col {
            None
        } else {
            Some(rect)
        }
    }

    /// Extract a rectangular region into a flat buffer of cell codes
    /// (0 dead, 1/2/3 variant).
    ///
    /// # Layout
    /// Row-major (row changes slowest), matching [`Engine::import_region`].
    ///
    /// # Returns
    /// Number of bytes written, or 0 if the clamped region is empty or
    /// `out_buf` is too small.
    pub fn extract_region(
        &self,
        min_row: i32,
        min_col: i32,
        max_row: i32,
        max_col: i32,
        out_buf: &mut [u8],
    ) -> usize {
        let rect = match self.clamp_region(min_row, min_col, max_row, max_col) {
            Some(rect) => rect,
            None => return 0,
        };

        if out_buf.len() < rect.len() {
            return 0;
        }

        let mut offset = 0;
        for row in rect.min_row..rect.max_row {
            for col in rect.min_col..rect.max_col {
                out_buf[offset] = self.cells[self.index(row, col)].code();
                offset += 1;
            }
        }

        offset
    }

    /// Import a rectangular region from a flat buffer.
    ///
    /// Non-zero bytes make the cell alive (keeping the streak of cells that
    /// already are), zero bytes kill it.
    ///
    /// # Returns
    /// Number of bytes read, or 0 if the clamped region is empty or `in_buf`
    /// is too short. Nothing is written in that case.
    pub fn import_region(
        &mut self,
        min_row: i32,
        min_col: i32,
        max_row: i32,
        max_col: i32,
        in_buf: &[u8],
    ) -> usize {
        let rect = match self.clamp_region(min_row, min_col, max_row, max_col) {
            Some(rect) => rect,
            None => return 0,
        };

        if in_buf.len() < rect.len() {
            return 0;
        }

        let mut offset = 0;
        for row in rect.min_row..rect.max_row {
            for col in rect.min_col..rect.max_col {
                let idx = self.index(row, col);
                let current = self.cells[idx];
                let next = match (in_buf[offset] != 0, current.alive) {
                    (true, true) => current,
                    (true, false) => Cell::FRESH,
                    (false, _) => Cell::DEAD,
                };
                self.put(idx, next);
                offset += 1;
            }
        }

        debug!(bytes = offset, population = self.population, "region imported");
        offset
    }
}
