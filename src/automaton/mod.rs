//! Core automaton logic and grid operations.
//!
//! Each submodule adds an `impl Engine` block: construction and bounds in
//! `grid`, cell edits and queries in `cells`, generation stepping in
//! `stepping`, rectangular import/export in `region`.
//! The FFI layer in `ffi/` calls these methods.

pub mod cells;
pub mod grid;
pub mod region;
pub mod stepping;

pub use stepping::{next_cell, PARALLEL_THRESHOLD};
