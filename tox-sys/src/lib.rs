//! Raw FFI bindings to `libtoxcore`, the Tox peer-to-peer messaging library.
//!
//! All types and functions mirror the public C API in `tox/tox.h` (toxcore
//! 0.2 series) and are **generated** by [`bindgen`](https://docs.rs/bindgen).
//! Do not edit manually.
//!
//! # Build
//!
//! The build script (`build.rs`):
//! 1. Uses a local c-toxcore build when `TOXCORE_DIR` is set, otherwise the
//!    system library search path.
//! 2. Optionally runs `bindgen` on `tox.h` (feature `regenerate`).
//! 3. Emits linker directives for `libtoxcore` (feature `link`, default).
//!
//! Enums are exposed as `c_uint` type aliases plus constants, exactly as C
//! sees them. Typed views live in the safe `tox` crate.

// sys crate: unsafe FFI, non-idiomatic generated code
#![no_std]
#![allow(
    unsafe_code,
    missing_docs,
    non_camel_case_types,
    non_upper_case_globals,
    non_snake_case,
    clippy::missing_safety_doc,
    clippy::upper_case_acronyms
)]

// When the `regenerate` feature is enabled, use freshly generated bindings.
// Otherwise, use the pre-generated bindings committed in the repository.
#[cfg(feature = "regenerate")]
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
#[cfg(not(feature = "regenerate"))]
include!("bindings.rs");
