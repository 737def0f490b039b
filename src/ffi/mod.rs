//! C FFI layer for embedding hosts.
//!
//! This module exports C ABI functions over an opaque `Engine` handle.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `Engine`'s methods. These functions are thin wrappers
//! that handle null checks, pointer safety, and flattening results into
//! integer status codes and buffers.

pub mod grid;
pub mod lifecycle;
pub mod region;

use crate::error::EngineError;

/// Operation succeeded.
pub const TA_OK: i32 = 0;
/// Null engine handle or buffer.
pub const TA_ERR_NULL: i32 = 1;
/// Coordinate outside the grid.
pub const TA_ERR_OUT_OF_BOUNDS: i32 = 2;
/// Non-positive grid dimension.
pub const TA_ERR_INVALID_DIMENSION: i32 = 3;

/// Map an engine result onto a status code.
pub(crate) fn status(result: crate::Result<()>) -> i32 {
    match result {
        Ok(()) => TA_OK,
        Err(err) => error_code(err),
    }
}

pub(crate) fn error_code(err: EngineError) -> i32 {
    match err {
        EngineError::OutOfBounds { .. } => TA_ERR_OUT_OF_BOUNDS,
        EngineError::InvalidDimension { .. } => TA_ERR_INVALID_DIMENSION,
    }
}

pub use grid::{
    ta_activate_cell, ta_active_count, ta_advance, ta_clear, ta_deactivate_cell, ta_get_cell,
    ta_randomize, ta_toggle_cell,
};
pub use lifecycle::{ta_create, ta_destroy, ta_get_generation};
pub use region::{ta_active_cells, ta_extract_region, ta_import_region};
