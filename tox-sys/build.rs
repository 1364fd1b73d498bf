//! Build script for tox-sys.
//!
//! 1. Locates `libtoxcore` (a local build directory or the system search path).
//! 2. Optionally runs `bindgen` to regenerate Rust bindings (feature `regenerate`).
//! 3. Configures the linker for `libtoxcore` and its system dependencies
//!    (feature `link`, on by default).
//!
//! # Environment variables
//!
//! - `TOXCORE_DIR`: Path to a local c-toxcore build or install prefix. The
//!   library is searched in `{dir}`, `{dir}/lib` and `{dir}/build`; the header
//!   in `{dir}/include/tox/tox.h`, `{dir}/toxcore/tox.h` or `{dir}/tox.h`.
//!   When unset, the system linker search path and `/usr/include` are used.
//!
//! - `TOXCORE_STATIC`: When set (any value), link `libtoxcore.a` statically
//!   and pull in libsodium explicitly.
//!
//! - `TOX_UPDATE_BINDINGS`: When set (any value) alongside the `regenerate`
//!   feature, the freshly generated `bindings.rs` is copied back to
//!   `src/bindings.rs` so it can be committed to the repository.

use std::env;
#[cfg(feature = "regenerate")]
use std::path::Path;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=TOXCORE_DIR");
    println!("cargo:rerun-if-env-changed=TOXCORE_STATIC");
    println!("cargo:rerun-if-env-changed=TOX_UPDATE_BINDINGS");
    println!("cargo:rerun-if-env-changed=DOCS_RS");

    // docs.rs builds run in a network-isolated sandbox without libtoxcore;
    // the declarations still compile for documentation.
    if env::var("DOCS_RS").is_ok() {
        return;
    }

    let target = env::var("TARGET").expect("TARGET not set");
    let toxcore_dir = env::var("TOXCORE_DIR").ok().map(PathBuf::from);

    #[cfg(feature = "regenerate")]
    {
        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
        let header = find_header(toxcore_dir.as_deref());
        println!("cargo:rerun-if-changed={}", header.display());
        generate_bindings(&header, toxcore_dir.as_deref(), &out_dir);
    }

    if env::var("CARGO_FEATURE_LINK").is_err() {
        return;
    }

    if let Some(dir) = &toxcore_dir {
        println!("cargo:warning=Using local toxcore directory: {}", dir.display());
        for sub in ["", "lib", "build"] {
            let candidate = if sub.is_empty() { dir.clone() } else { dir.join(sub) };
            if candidate.is_dir() {
                println!("cargo:rustc-link-search=native={}", candidate.display());
            }
        }
    }

    link_native_lib(env::var("TOXCORE_STATIC").is_ok());
    link_system_libs(&target);
}

/// Emit `cargo:rustc-link-lib` for toxcore itself.
fn link_native_lib(statik: bool) {
    if statik {
        println!("cargo:rustc-link-lib=static=toxcore");
        println!("cargo:rustc-link-lib=dylib=sodium");
    } else {
        println!("cargo:rustc-link-lib=dylib=toxcore");
    }
}

/// Link platform-specific system libraries required by a static toxcore.
fn link_system_libs(target: &str) {
    if target.contains("linux") {
        for lib in ["pthread", "m"] {
            println!("cargo:rustc-link-lib=dylib={lib}");
        }
    } else if target.contains("windows") {
        for lib in ["ws2_32", "iphlpapi"] {
            println!("cargo:rustc-link-lib=dylib={lib}");
        }
    }
}

/// Locate `tox.h` relative to `TOXCORE_DIR`, falling back to the system include dir.
#[cfg(feature = "regenerate")]
fn find_header(dir: Option<&Path>) -> PathBuf {
    let mut candidates = Vec::new();
    if let Some(dir) = dir {
        candidates.push(dir.join("include").join("tox").join("tox.h"));
        candidates.push(dir.join("toxcore").join("tox.h"));
        candidates.push(dir.join("tox.h"));
    }
    candidates.push(PathBuf::from("/usr/local/include/tox/tox.h"));
    candidates.push(PathBuf::from("/usr/include/tox/tox.h"));
    for c in &candidates {
        if c.exists() {
            return c.clone();
        }
    }
    panic!("Cannot find tox.h (TOXCORE_DIR={dir:?})\nSearched: {candidates:?}");
}

/// Run `bindgen` on `tox.h` to produce `$OUT_DIR/bindings.rs`.
///
/// toxcore's enums are emitted as constified `c_uint` typedefs: the library
/// writes error codes through out-pointers and may grow new values, so they
/// must never be materialized as Rust enums on this side of the boundary.
#[cfg(feature = "regenerate")]
fn generate_bindings(header: &Path, dir: Option<&Path>, out_dir: &Path) {
    let mut builder = bindgen::Builder::default()
        .header(header.to_str().expect("path is not valid UTF-8"))
        .use_core()
        .allowlist_function("tox_.*")
        .allowlist_type("Tox.*|TOX_.*|tox_.*_cb")
        .allowlist_var("TOX_.*")
        .blocklist_function("tox_events_.*|tox_group_.*")
        .default_enum_style(bindgen::EnumVariation::Consts)
        .prepend_enum_name(false)
        .derive_debug(true)
        .derive_default(true)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()));
    if let Some(dir) = dir {
        builder = builder.clang_arg(format!("-I{}", dir.join("include").display()));
    }
    let bindings = builder
        .generate()
        .expect("bindgen failed to generate bindings from tox.h");

    let out_file = out_dir.join("bindings.rs");
    bindings
        .write_to_file(&out_file)
        .expect("Failed to write bindings.rs");

    if env::var("TOX_UPDATE_BINDINGS").is_ok() {
        let manifest_dir =
            PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
        let committed = manifest_dir.join("src").join("bindings.rs");
        std::fs::copy(&out_file, &committed).expect("Failed to copy bindings.rs to src/");
        println!(
            "cargo:warning=Updated committed bindings: {}",
            committed.display()
        );
    }
}
