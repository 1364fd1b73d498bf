//! Length checks applied before any buffer crosses the boundary.

use std::panic::Location;

use crate::types::FixedBytes;

/// How a size is compared against its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Clamp {
    AtMost,
    Exactly,
    AtLeast,
}

impl Clamp {
    const fn holds(self, size: usize, limit: usize) -> bool {
        match self {
            Self::AtMost => size <= limit,
            Self::Exactly => size == limit,
            Self::AtLeast => size >= limit,
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::AtMost => "<=",
            Self::Exactly => "==",
            Self::AtLeast => ">=",
        }
    }
}

/// Check `size` against `limit`. On failure, log the caller and both sizes.
#[track_caller]
#[must_use]
pub(crate) fn clamp(field: &'static str, size: usize, kind: Clamp, limit: usize) -> bool {
    if kind.holds(size, limit) {
        return true;
    }
    let location = Location::caller();
    tracing::warn!(
        target: "tox::guard",
        field,
        size,
        limit,
        check = kind.symbol(),
        %location,
        "argument rejected before boundary call"
    );
    false
}

#[track_caller]
#[must_use]
pub(crate) fn at_most(field: &'static str, size: usize, limit: usize) -> bool {
    clamp(field, size, Clamp::AtMost, limit)
}

#[track_caller]
#[must_use]
pub(crate) fn exactly(field: &'static str, size: usize, limit: usize) -> bool {
    clamp(field, size, Clamp::Exactly, limit)
}

#[track_caller]
#[must_use]
pub(crate) fn at_least(field: &'static str, size: usize, limit: usize) -> bool {
    clamp(field, size, Clamp::AtLeast, limit)
}

/// Check that `bytes` has exactly the length of `K`, then convert.
#[track_caller]
pub(crate) fn exact<K: FixedBytes>(field: &'static str, bytes: &[u8]) -> Option<K> {
    if exactly(field, bytes.len(), K::LEN) {
        K::from_slice(bytes)
    } else {
        None
    }
}
