//! Sonification mapping: columns are time slots, rows are pitches.
//!
//! Pitches walk a C major pentatonic scale upward from the bottom row, five
//! rows per octave starting at octave 4. Producing sound is left to the
//! audio driver; this module only says which notes a board holds.

use std::fmt;

use crate::state::{ActiveCell, Engine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    D,
    F,
    G,
    A,
}

/// One octave of the scale.
pub const SCALE: [NoteName; 5] = [NoteName::C, NoteName::D, NoteName::F, NoteName::G, NoteName::A];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub name: NoteName,
    pub octave: u32,
}

impl Pitch {
    /// Pitch for `row` on a board of `rows` rows. Lower rows sound lower.
    pub fn for_row(row: i32, rows: i32) -> Self {
        let height = (rows - row).max(0) as usize;
        Pitch {
            name: SCALE[height % SCALE.len()],
            octave: (height / SCALE.len()) as u32 + 4,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.name, self.octave)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    pub pitch: Pitch,
    pub cell: ActiveCell,
}

/// Notes grouped by column. Slot `i` plays on beat `i` of a bar of
/// `columns` beats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    slots: Vec<Vec<Note>>,
}

impl Score {
    /// Build a score from active cells of a `rows x columns` board. Cells
    /// outside the board are skipped.
    pub fn new(rows: i32, columns: i32, cells: &[ActiveCell]) -> Self {
        let mut slots = vec![Vec::new(); columns.max(0) as usize];

        for &cell in cells {
            if cell.row < 0 || cell.row >= rows || cell.col < 0 || cell.col >= columns {
                continue;
            }
            slots[cell.col as usize].push(Note {
                pitch: Pitch::for_row(cell.row, rows),
                cell,
            });
        }

        Score { slots }
    }

    pub fn from_engine(engine: &Engine) -> Self {
        Self::new(engine.rows(), engine.columns(), &engine.active_cells())
    }

    /// Notes for one column, top row first. Empty for unknown columns.
    pub fn slot(&self, column: usize) -> &[Note] {
        self.slots.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of slots (the board's column count).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    pub fn note_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}
