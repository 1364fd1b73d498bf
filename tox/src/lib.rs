#![doc = include_str!("../README.md")]

pub mod boundary;
pub mod bridge;
pub mod code;
pub mod error;
pub mod options;
pub mod roster;
pub mod session;
pub mod types;

mod call;
mod guard;
mod marshal;

#[cfg(feature = "native")]
pub mod native;

// Re-export core public API at crate root.
pub use boundary::Boundary;
pub use bridge::{Event, EventBridge, EventKind, ListenerId, Trampolines};
pub use code::ErrorCode;
pub use error::{Error, Result};
pub use options::{Options, Proxy};
pub use roster::{Friend, Group, Profile};
pub use session::{Session, State};
pub use types::{
    Address, ConferenceType, Connection, FileControl, FileId, FileKind, Hash, MessageType,
    ProxyType, PublicKey, SecretKey, UserStatus,
};

#[cfg(feature = "native")]
pub use native::{NativeSession, NativeTox};
