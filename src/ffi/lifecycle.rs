//! Engine creation, destruction, and generation queries.

use tracing::warn;

use crate::state::Engine;

/// Creates a new engine with a `rows x columns` grid of dead cells.
///
/// # Returns
/// A pointer to a new Engine, or null if either dimension is not positive.
///
/// # Safety
/// The returned pointer must eventually be freed with `ta_destroy()`.
#[no_mangle]
pub extern "C" fn ta_create(rows: i32, columns: i32) -> *mut Engine {
    match Engine::new(rows, columns) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(err) => {
            warn!(%err, "ta_create rejected dimensions");
            std::ptr::null_mut()
        }
    }
}

/// Destroys an engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ta_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ta_destroy(ptr: *mut Engine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ta_get_generation(ptr: *const Engine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
