//! Boundary call normalization.
//!
//! Every fallible toxcore entry point reports through an error-code
//! out-parameter. These helpers run one call with a fresh code, log a
//! non-success code once, and shape the result for the caller.

use crate::code::ErrorCode;

/// Run `op` with a code initialised to `E::OK`; return the value and the code.
///
/// Nothing is logged here, so callers with benign codes decide for themselves.
pub(crate) fn invoke<E: ErrorCode, R>(op: impl FnOnce(&mut E) -> R) -> (R, E) {
    let mut code = E::OK;
    let value = op(&mut code);
    (value, code)
}

/// Run `op`, log a non-success code, and return the value regardless.
pub(crate) fn call<E: ErrorCode, R>(name: &'static str, op: impl FnOnce(&mut E) -> R) -> R {
    let (value, code) = invoke(op);
    if !code.is_ok() {
        report(name, code);
    }
    value
}

/// Run `op`, log a non-success code, and return the value only on success.
pub(crate) fn call_variant<E: ErrorCode, R>(
    name: &'static str,
    op: impl FnOnce(&mut E) -> R,
) -> Option<R> {
    let (value, code) = invoke(op);
    if code.is_ok() {
        Some(value)
    } else {
        report(name, code);
        None
    }
}

/// Emit the diagnostic for a failed boundary call.
pub(crate) fn report<E: ErrorCode>(name: &'static str, code: E) {
    tracing::warn!(
        target: "tox::call",
        op = name,
        code = %code,
        raw = code.raw(),
        "boundary call failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{ErrFriendAdd, ErrSetInfo};

    #[test]
    fn value_is_returned_even_on_failure() {
        let value = call("tox_friend_add", |err: &mut ErrFriendAdd| {
            *err = ErrFriendAdd::AlreadySent;
            u32::MAX
        });
        assert_eq!(value, u32::MAX);
    }

    #[test]
    fn variant_is_absent_on_failure() {
        let value = call_variant("tox_self_set_name", |err: &mut ErrSetInfo| {
            *err = ErrSetInfo::TooLong;
            true
        });
        assert_eq!(value, None);
    }

    #[test]
    fn variant_is_present_on_success() {
        let value = call_variant("tox_friend_add", |_: &mut ErrFriendAdd| 7_u32);
        assert_eq!(value, Some(7));
    }

    #[test]
    fn invoke_starts_from_ok() {
        let (seen, code) = invoke(|err: &mut ErrSetInfo| *err);
        assert_eq!(seen, ErrSetInfo::Ok);
        assert_eq!(code, ErrSetInfo::Ok);
    }
}
