//! Cell access, mutation, and stepping.

use super::{error_code, status, TA_ERR_NULL, TA_OK};
use crate::state::Engine;

/// Flips a cell between dead and alive (variant 1).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// `TA_OK`, `TA_ERR_NULL`, or `TA_ERR_OUT_OF_BOUNDS` (grid untouched).
#[no_mangle]
pub unsafe extern "C" fn ta_toggle_cell(ptr: *mut Engine, row: i32, col: i32) -> i32 {
    if ptr.is_null() {
        return TA_ERR_NULL;
    }
    status((*ptr).toggle_cell(row, col))
}

/// Forces a cell alive, keeping the age of an already-alive cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn ta_activate_cell(ptr: *mut Engine, row: i32, col: i32) -> i32 {
    if ptr.is_null() {
        return TA_ERR_NULL;
    }
    status((*ptr).activate_cell(row, col))
}

/// Forces a cell dead.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn ta_deactivate_cell(ptr: *mut Engine, row: i32, col: i32) -> i32 {
    if ptr.is_null() {
        return TA_ERR_NULL;
    }
    status((*ptr).deactivate_cell(row, col))
}

/// Gets the liveness of a cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 1 if alive, 0 if dead, or the negated error code
/// (`-TA_ERR_NULL`, `-TA_ERR_OUT_OF_BOUNDS`).
#[no_mangle]
pub unsafe extern "C" fn ta_get_cell(ptr: *const Engine, row: i32, col: i32) -> i32 {
    if ptr.is_null() {
        return -TA_ERR_NULL;
    }
    match (*ptr).get_cell(row, col) {
        Ok(alive) => alive as i32,
        Err(err) => -error_code(err),
    }
}

/// Advances the automaton by one generation (B3/S23, no wrap).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn ta_advance(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return TA_ERR_NULL;
    }
    (*ptr).advance();
    TA_OK
}

/// Kills every cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn ta_clear(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return TA_ERR_NULL;
    }
    (*ptr).clear();
    TA_OK
}

/// Re-seeds every cell alive with `probability` from an RNG seeded with `seed`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn ta_randomize(ptr: *mut Engine, probability: f64, seed: u64) -> i32 {
    if ptr.is_null() {
        return TA_ERR_NULL;
    }
    (*ptr).randomize_seeded(probability, seed);
    TA_OK
}

/// Number of alive cells, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn ta_active_count(ptr: *const Engine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).active_count() as u64
}
