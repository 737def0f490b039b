//! Tonal Automata - Sonified Cellular Automaton Engine
//!
//! A fixed-size Game of Life grid whose live cells carry an age-derived
//! variant, for hosts that paint and play the board. The engine is
//! pull-based: the host toggles cells, calls [`Engine::advance`] on its own
//! cadence, and reads [`Engine::active_cells`] after every change.
//!
//! ```
//! use tonal_automata::{patterns, Engine};
//!
//! let mut engine = Engine::new(8, 8)?;
//! engine.place_pattern(&patterns::BLINKER, 5, 4)?;
//! engine.advance();
//! assert!(engine.get_cell(4, 5)?);
//! # Ok::<(), tonal_automata::EngineError>(())
//! ```
//!
//! A C ABI over an opaque engine handle lives in [`ffi`].

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod palette;
pub mod patterns;
pub mod score;
pub mod state;
pub mod stroke;


pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use patterns::Pattern;
pub use score::{Note, Pitch, Score};
pub use state::{ActiveCell, Cell, Engine, Variant};
pub use stroke::{Stroke, StrokeMode};
