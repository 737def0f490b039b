//! Paint strokes: the press-and-drag editing gesture, expressed in cell
//! coordinates.
//!
//! A stroke starts by toggling the pressed cell. If that made the cell alive
//! the rest of the drag paints, otherwise it erases. Revisiting the cell the
//! stroke is already on does nothing, so a drag that stays inside one cell
//! does not reset that cell's age.

use crate::error::Result;
use crate::state::Engine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeMode {
    Paint,
    Erase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    mode: StrokeMode,
    cursor: (i32, i32),
}

impl Stroke {
    /// Toggle the pressed cell and pick the stroke mode from its new state.
    pub fn begin(engine: &mut Engine, row: i32, col: i32) -> Result<Self> {
        engine.toggle_cell(row, col)?;
        let mode = if engine.get_cell(row, col)? {
            StrokeMode::Paint
        } else {
            StrokeMode::Erase
        };

        Ok(Stroke {
            mode,
            cursor: (row, col),
        })
    }

    /// Move the stroke onto `(row, col)`.
    ///
    /// Returns `true` if the grid was touched, `false` when `(row, col)` is
    /// the cell the stroke is already on. On `OutOfBounds` the cursor stays put.
    pub fn extend(&mut self, engine: &mut Engine, row: i32, col: i32) -> Result<bool> {
        if self.cursor == (row, col) {
            return Ok(false);
        }

        match self.mode {
            StrokeMode::Paint => engine.activate_cell(row, col)?,
            StrokeMode::Erase => engine.deactivate_cell(row, col)?,
        }
        self.cursor = (row, col);
        Ok(true)
    }

    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_stroke() {
        let mut engine = Engine::new(4, 4).unwrap();
        let mut stroke = Stroke::begin(&mut engine, 0, 0).unwrap();
        assert_eq!(stroke.mode(), StrokeMode::Paint);

        assert!(stroke.extend(&mut engine, 0, 1).unwrap());
        assert!(stroke.extend(&mut engine, 0, 2).unwrap());
        assert!(!stroke.extend(&mut engine, 0, 2).unwrap());
        assert_eq!(engine.active_count(), 3);
    }

    #[test]
    fn test_erase_stroke() {
        let mut engine = Engine::new(4, 4).unwrap();
        for c in 0..4 {
            engine.activate_cell(1, c).unwrap();
        }

        let mut stroke = Stroke::begin(&mut engine, 1, 0).unwrap();
        assert_eq!(stroke.mode(), StrokeMode::Erase);
        stroke.extend(&mut engine, 1, 1).unwrap();
        stroke.extend(&mut engine, 2, 1).unwrap(); // already dead, stays dead

        assert_eq!(engine.active_count(), 2);
        assert!(engine.get_cell(1, 2).unwrap());
    }

    #[test]
    fn test_revisiting_cell_keeps_age() {
        let mut engine = Engine::new(4, 4).unwrap();
        engine.place_pattern(&crate::patterns::BLOCK, 1, 1).unwrap();
        engine.advance();

        let mut stroke = Stroke::begin(&mut engine, 0, 0).unwrap();
        stroke.extend(&mut engine, 1, 1).unwrap();
        assert_eq!(engine.streak(1, 1).unwrap(), 2);
    }

    #[test]
    fn test_out_of_bounds_keeps_cursor() {
        let mut engine = Engine::new(4, 4).unwrap();
        let mut stroke = Stroke::begin(&mut engine, 3, 3).unwrap();
        assert!(stroke.extend(&mut engine, 3, 4).is_err());
        assert_eq!(stroke.cursor(), (3, 3));
        assert!(Stroke::begin(&mut engine, -1, 0).is_err());
    }
}
