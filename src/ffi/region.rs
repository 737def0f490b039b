//! Active-cell export and region extraction/import FFI functions.

use crate::state::Engine;

/// Writes every alive cell as a `(row, col, variant)` triple of `u32`s.
///
/// # Layout
/// Triples in row-major cell order; `variant` is 1, 2 or 3.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out_buf` must point to at least `capacity * 3` writable `u32`s
///
/// # Returns
/// Number of triples written (at most `capacity`), or 0 on null input.
/// Compare with `ta_active_count` to detect truncation.
#[no_mangle]
pub unsafe extern "C" fn ta_active_cells(
    ptr: *const Engine,
    out_buf: *mut u32,
    capacity: usize,
) -> usize {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let engine = &*ptr;
    let out = std::slice::from_raw_parts_mut(out_buf, capacity * 3);

    let mut written = 0;
    for (cell, chunk) in engine.active_cells().iter().zip(out.chunks_exact_mut(3)) {
        chunk[0] = cell.row as u32;
        chunk[1] = cell.col as u32;
        chunk[2] = cell.variant.code() as u32;
        written += 1;
    }

    written
}

/// Extracts a rectangular region of cell codes into a flat output buffer.
///
/// # Layout
/// Row-major over `[min_row, max_row) x [min_col, max_col)`, clamped to the
/// grid. Codes: 0 dead, 1/2/3 variant. Matches `ta_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out_buf` must point to at least `buf_len` writable bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn ta_extract_region(
    ptr: *const Engine,
    out_buf: *mut u8,
    buf_len: usize,
    min_row: i32,
    min_col: i32,
    max_row: i32,
    max_col: i32,
) -> usize {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let engine = &*ptr;
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, buf_len);
    engine.extract_region(min_row, min_col, max_row, max_col, buf_slice)
}

/// Imports a rectangular region of cells from a flat buffer.
///
/// # Layout
/// Same as `ta_extract_region`. Non-zero bytes become alive, zero bytes dead.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `in_buf` must point to at least `buf_len` readable bytes
///
/// # Returns
/// Number of bytes read, or 0 on error (grid untouched).
#[no_mangle]
pub unsafe extern "C" fn ta_import_region(
    ptr: *mut Engine,
    in_buf: *const u8,
    buf_len: usize,
    min_row: i32,
    min_col: i32,
    max_row: i32,
    max_col: i32,
) -> usize {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let engine = &mut *ptr;
    let buf_slice = std::slice::from_raw_parts(in_buf, buf_len);
    engine.import_region(min_row, min_col, max_row, max_col, buf_slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::grid::{ta_activate_cell, ta_advance, ta_get_cell};
    use crate::ffi::lifecycle::{ta_create, ta_destroy};
    use std::ptr;

    #[test]
    fn test_active_cells() {
        unsafe {
            let engine = ta_create(4, 4);
            ta_activate_cell(engine, 3, 1);
            ta_activate_cell(engine, 0, 2);

            let mut buffer = vec![0u32; 6];
            let count = ta_active_cells(engine, buffer.as_mut_ptr(), 2);

            assert_eq!(count, 2);
            assert_eq!(buffer, vec![0, 2, 1, 3, 1, 1]);

            ta_destroy(engine);
        }
    }

    #[test]
    fn test_active_cells_truncates_to_capacity() {
        unsafe {
            let engine = ta_create(4, 4);
            for col in 0..4 {
                ta_activate_cell(engine, 1, col);
            }

            let mut buffer = vec![0u32; 3];
            assert_eq!(ta_active_cells(engine, buffer.as_mut_ptr(), 1), 1);
            assert_eq!(buffer, vec![1, 0, 1]);

            ta_destroy(engine);
        }
    }

    #[test]
    fn test_extract_region() {
        unsafe {
            let engine = ta_create(4, 4);
            for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
                ta_activate_cell(engine, r, c);
            }
            ta_advance(engine);

            let mut buffer = vec![0u8; 4];
            let bytes = ta_extract_region(engine, buffer.as_mut_ptr(), buffer.len(), 0, 0, 2, 2);

            assert_eq!(bytes, 4);
            assert_eq!(buffer, vec![2, 2, 2, 2]);

            ta_destroy(engine);
        }
    }

    #[test]
    fn test_import_region() {
        unsafe {
            let engine = ta_create(4, 4);

            let buffer = vec![1u8, 0, 0, 1];
            let bytes = ta_import_region(engine, buffer.as_ptr(), buffer.len(), 2, 2, 4, 4);

            assert_eq!(bytes, 4);
            assert_eq!(ta_get_cell(engine, 2, 2), 1);
            assert_eq!(ta_get_cell(engine, 2, 3), 0);
            assert_eq!(ta_get_cell(engine, 3, 3), 1);

            ta_destroy(engine);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let engine = ta_create(4, 4);
            let mut bytes = vec![0u8; 16];
            let mut words = vec![0u32; 3];

            assert_eq!(ta_active_cells(ptr::null(), words.as_mut_ptr(), 1), 0);
            assert_eq!(ta_active_cells(engine, ptr::null_mut(), 1), 0);
            assert_eq!(
                ta_extract_region(ptr::null(), bytes.as_mut_ptr(), 16, 0, 0, 4, 4),
                0
            );
            assert_eq!(ta_extract_region(engine, ptr::null_mut(), 16, 0, 0, 4, 4), 0);
            assert_eq!(
                ta_import_region(ptr::null_mut(), bytes.as_ptr(), 16, 0, 0, 4, 4),
                0
            );
            assert_eq!(ta_import_region(engine, ptr::null(), 16, 0, 0, 4, 4), 0);

            ta_destroy(engine);
        }
    }
}
