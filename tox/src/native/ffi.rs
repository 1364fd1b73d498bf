#![allow(unsafe_code)]
//! Ownership of library allocations and the small conversions every
//! native call needs.

use std::ffi::CString;
use std::fmt;
use std::ptr::{self, NonNull};

use crate::code::ErrorCode;

/// Owns one library allocation (`Tox*`, `Tox_Options*`) and hands it back to
/// its release function exactly once.
pub struct OwnedHandle<T> {
    raw: NonNull<T>,
    release: unsafe extern "C" fn(*mut T),
}

// Neither toxcore object is bound to the thread that allocated it.
unsafe impl<T> Send for OwnedHandle<T> {}

impl<T> OwnedHandle<T> {
    /// Take ownership of `raw`, or `None` when the allocation failed.
    pub(crate) fn new(raw: *mut T, release: unsafe extern "C" fn(*mut T)) -> Option<Self> {
        Some(Self {
            raw: NonNull::new(raw)?,
            release,
        })
    }

    #[inline]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.raw.as_ptr().cast_const()
    }

    #[inline]
    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.as_ptr()
    }
}

impl<T> Drop for OwnedHandle<T> {
    fn drop(&mut self) {
        unsafe { (self.release)(self.raw.as_ptr()) };
    }
}

impl<T> fmt::Debug for OwnedHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OwnedHandle").field(&self.raw).finish()
    }
}

/// Run a call that writes a raw error code, and store it typed in `error`.
pub(crate) fn with_code<E: ErrorCode, R>(error: &mut E, op: impl FnOnce(*mut u32) -> R) -> R {
    let mut raw = E::OK.raw();
    let value = op(&raw mut raw);
    *error = E::from_raw(raw);
    value
}

/// Convert `&str` to `CString`. `None` if it contains NUL.
pub(crate) fn to_c_string(s: &str) -> Option<CString> {
    CString::new(s).ok()
}

/// Pointer to an optional fixed-size value, null if absent.
pub(crate) fn opt_ptr<T: AsRef<[u8]>>(value: Option<&T>) -> *const u8 {
    value.map_or(ptr::null(), |v| v.as_ref().as_ptr())
}
