#![allow(unsafe_code)]
//! Buffer marshaling between Rust values and C buffers.

use std::slice;

/// Collapse a size query and a fill call into one owned buffer.
///
/// No allocation happens when `size` is absent. A zero size still calls
/// `fill` with an empty buffer so the library can report an error code.
pub(crate) fn query_fill<T: Copy + Default>(
    size: Option<usize>,
    fill: impl FnOnce(&mut [T]) -> bool,
) -> Option<Vec<T>> {
    let size = size?;
    let mut buf = vec![T::default(); size];
    fill(&mut buf).then_some(buf)
}

/// Decode library text. toxcore does not validate UTF-8, so invalid
/// sequences are replaced rather than rejected.
pub(crate) fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Borrow a pointer and length pair handed to a callback.
///
/// # Safety
///
/// Unless `ptr` is null or `len` is zero, `ptr` must be valid for `len`
/// bytes for the returned lifetime.
pub(crate) unsafe fn borrow_bytes<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
    if ptr.is_null() || len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(ptr, len) }
    }
}

/// Copy a fixed-size array out of a callback pointer, `None` if null.
///
/// # Safety
///
/// A non-null `ptr` must be valid for `N` bytes.
pub(crate) unsafe fn read_array<const N: usize>(ptr: *const u8) -> Option<[u8; N]> {
    if ptr.is_null() {
        return None;
    }
    let mut out = [0_u8; N];
    out.copy_from_slice(unsafe { slice::from_raw_parts(ptr, N) });
    Some(out)
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn absent_size_skips_fill() {
        let mut called = false;
        let out: Option<Vec<u8>> = query_fill(None, |_| {
            called = true;
            true
        });
        assert!(out.is_none());
        assert!(!called);
    }

    #[test]
    fn zero_size_yields_empty_value() {
        let out: Option<Vec<u32>> = query_fill(Some(0), |buf| buf.is_empty());
        assert_eq!(out, Some(Vec::new()));
    }

    #[test]
    fn fill_failure_discards_buffer() {
        let out: Option<Vec<u8>> = query_fill(Some(4), |_| false);
        assert!(out.is_none());
    }

    #[test]
    fn fill_writes_exact_size() {
        let out = query_fill(Some(3), |buf: &mut [u8]| {
            buf.copy_from_slice(b"abc");
            true
        });
        assert_eq!(out.as_deref(), Some(&b"abc"[..]));
    }

    #[test]
    fn null_pointer_borrows_empty() {
        let bytes = unsafe { borrow_bytes(ptr::null(), 10) };
        assert!(bytes.is_empty());
        assert!(unsafe { read_array::<4>(ptr::null()) }.is_none());
    }

    #[test]
    fn lossy_text_keeps_valid_prefix() {
        assert_eq!(decode_text(b"hi\xff"), "hi\u{fffd}");
    }
}
