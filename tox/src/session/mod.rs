//! The session: one library instance plus its event bridge.
//!
//! Every operation follows the same shape: guard the arguments, require a
//! live instance, make one boundary call through the normalizer, and hand
//! back `bool` for success-only operations or `Option` for values. Failures
//! are logged, never returned as codes.

mod conference;
mod file;
mod friend;
mod handle;
mod packet;

use std::ffi::c_void;
use std::fmt;
use std::ptr;
use std::time::Duration;

use tox_sys as sys;

pub use handle::State;
use handle::SessionHandle;

use crate::boundary::Boundary;
use crate::bridge::{Event, EventBridge, EventKind, ListenerId, Trampolines};
use crate::call;
use crate::code::{ErrBootstrap, ErrGetPort, ErrNew, ErrSetInfo, ErrorCode};
use crate::error::{Error, Result};
use crate::guard;
use crate::marshal::{decode_text, query_fill};
use crate::options::Options;
use crate::types::{
    Address, Connection, Hash, MAX_HOSTNAME_LENGTH, MAX_NAME_LENGTH, MAX_STATUS_MESSAGE_LENGTH,
    PublicKey, SecretKey, UserStatus,
};

/// A toxcore instance with typed operations and events.
///
/// Not thread-safe: every call, including [`iterate`](Self::iterate), must be
/// made from the thread that owns the session. Callbacks fire synchronously
/// inside `iterate`.
pub struct Session<B: Boundary> {
    // Declared first: the instance must go before the bridge it points at.
    handle: SessionHandle<B::Handle>,
    bridge: Box<EventBridge>,
    api: B,
    create_code: ErrNew,
    interval: Duration,
}

impl<B: Boundary> Session<B> {
    /// Create a session, loading `savedata` when given.
    ///
    /// Never fails outright: if the library refuses, the session is
    /// [`State::Uninitialized`] and [`construction_error`](Self::construction_error)
    /// holds the code. Partially readable save data yields a live session and
    /// a warning.
    pub fn new(api: B, options: &Options, savedata: Option<&[u8]>) -> Self {
        let (created, code) = call::invoke(|err| api.create(options, savedata, err));
        let mut session = Self {
            handle: SessionHandle::Uninitialized,
            bridge: Box::new(EventBridge::new()),
            api,
            create_code: code,
            interval: Duration::ZERO,
        };
        match (created, code) {
            (Some(tox), ErrNew::Ok) => session.go_live(tox),
            (Some(tox), ErrNew::LoadBadFormat) => {
                tracing::warn!(
                    target: "tox::session",
                    code = %code,
                    "save data only partially loaded; continuing with what was recovered"
                );
                session.go_live(tox);
            }
            (None, ErrNew::Ok) => {
                session.create_code = ErrNew::Null;
                call::report("tox_new", session.create_code);
            }
            (_, code) => call::report("tox_new", code),
        }
        session
    }

    /// Like [`new`](Self::new), but a session that did not go live is an error.
    ///
    /// # Errors
    ///
    /// [`Error::New`] with the library's code.
    pub fn open(api: B, options: &Options, savedata: Option<&[u8]>) -> Result<Self> {
        let session = Self::new(api, options, savedata);
        match session.construction_error() {
            Some(code) if !session.is_live() => Err(Error::New(code)),
            _ => Ok(session),
        }
    }

    fn go_live(&mut self, mut tox: B::Handle) {
        self.api.register_callbacks(&mut tox, &Trampolines::BRIDGE);
        self.interval = Duration::from_millis(u64::from(self.api.iteration_interval(&tox)));
        self.handle = SessionHandle::Live(tox);
        tracing::debug!(target: "tox::session", interval = ?self.interval, "session live");
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.handle.state()
    }

    /// Whether operations reach the library.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.handle.state(), State::Live)
    }

    /// The non-success code from construction, if any. Also set for a live
    /// session created from partially readable save data.
    #[must_use]
    pub fn construction_error(&self) -> Option<ErrNew> {
        (!self.create_code.is_ok()).then_some(self.create_code)
    }

    /// Release the library instance. Idempotent; the session stays inert.
    pub fn destroy(&mut self) {
        if self.handle.destroy() {
            tracing::debug!(target: "tox::session", "session destroyed");
        }
    }

    /// The backend this session calls into.
    #[must_use]
    pub const fn boundary(&self) -> &B {
        &self.api
    }

    /// Listener and subscription registry.
    pub fn events(&mut self) -> &mut EventBridge {
        &mut self.bridge
    }

    /// Shorthand for [`EventBridge::on`].
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&Event) + Send + 'static,
    ) -> ListenerId {
        self.bridge.on(kind, listener)
    }

    /// Run one processing step. Returns the delay before the next one.
    ///
    /// All pending callbacks are delivered to listeners before this returns.
    pub fn iterate(&mut self) -> Option<Duration> {
        let user_data = ptr::from_mut::<EventBridge>(&mut self.bridge).cast::<c_void>();
        let Some(tox) = self.handle.get_mut() else {
            self.skipped("tox_iterate");
            return None;
        };
        self.api.iterate(tox, user_data);
        let interval = Duration::from_millis(u64::from(self.api.iteration_interval(tox)));
        self.interval = interval;
        Some(interval)
    }

    /// Delay requested after the last processing step.
    #[must_use]
    pub const fn iteration_interval(&self) -> Duration {
        self.interval
    }

    /// Library version as `(major, minor, patch)`.
    #[must_use]
    pub fn version(&self) -> (u32, u32, u32) {
        self.api.version()
    }

    /// Whether the running library is compatible with these bindings.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.api.is_compatible(
            sys::TOX_VERSION_MAJOR,
            sys::TOX_VERSION_MINOR,
            sys::TOX_VERSION_PATCH,
        )
    }

    /// SHA-256 of `data`.
    #[must_use]
    pub fn hash(&self, data: &[u8]) -> Option<Hash> {
        self.api.hash(data)
    }

    /// Serialized instance state for a later [`new`](Self::new).
    #[must_use]
    pub fn save_data(&self) -> Option<Vec<u8>> {
        let (api, tox) = self.live("tox_get_savedata")?;
        query_fill(Some(api.savedata_size(tox)), |buf| api.savedata(tox, buf))
    }

    /// Contact a DHT node.
    #[must_use]
    pub fn bootstrap(&mut self, host: &str, port: u16, public_key: impl AsRef<[u8]>) -> bool {
        self.connect_node("tox_bootstrap", host, port, public_key.as_ref(), false)
    }

    /// Add a TCP relay.
    #[must_use]
    pub fn add_tcp_relay(&mut self, host: &str, port: u16, public_key: impl AsRef<[u8]>) -> bool {
        self.connect_node("tox_add_tcp_relay", host, port, public_key.as_ref(), true)
    }

    fn connect_node(
        &mut self,
        op: &'static str,
        host: &str,
        port: u16,
        public_key: &[u8],
        relay: bool,
    ) -> bool {
        if !guard::at_most("host", host.len(), MAX_HOSTNAME_LENGTH) {
            return false;
        }
        let Some(key) = guard::exact::<PublicKey>("public_key", public_key) else {
            return false;
        };
        let Some((api, tox)) = self.live_mut(op) else {
            return false;
        };
        call::call(op, |err: &mut ErrBootstrap| {
            if relay {
                api.add_tcp_relay(tox, host, port, &key, err)
            } else {
                api.bootstrap(tox, host, port, &key, err)
            }
        })
    }

    /// Own network reachability.
    #[must_use]
    pub fn connection_status(&self) -> Option<Connection> {
        let (api, tox) = self.live("tox_self_get_connection_status")?;
        Connection::from_ffi(api.connection_status(tox))
    }

    /// Own shareable address.
    #[must_use]
    pub fn address(&self) -> Option<Address> {
        let (api, tox) = self.live("tox_self_get_address")?;
        Some(api.self_address(tox))
    }

    /// Own nospam value.
    #[must_use]
    pub fn nospam(&self) -> Option<u32> {
        let (api, tox) = self.live("tox_self_get_nospam")?;
        Some(api.self_nospam(tox))
    }

    /// Change the nospam value, invalidating the previous address.
    #[must_use]
    pub fn set_nospam(&mut self, nospam: u32) -> bool {
        let Some((api, tox)) = self.live_mut("tox_self_set_nospam") else {
            return false;
        };
        api.set_self_nospam(tox, nospam);
        true
    }

    /// Own long-term public key.
    #[must_use]
    pub fn public_key(&self) -> Option<PublicKey> {
        let (api, tox) = self.live("tox_self_get_public_key")?;
        Some(api.self_public_key(tox))
    }

    /// Own long-term secret key.
    #[must_use]
    pub fn secret_key(&self) -> Option<SecretKey> {
        let (api, tox) = self.live("tox_self_get_secret_key")?;
        Some(api.self_secret_key(tox))
    }

    /// Temporary DHT public key.
    #[must_use]
    pub fn dht_id(&self) -> Option<PublicKey> {
        let (api, tox) = self.live("tox_self_get_dht_id")?;
        Some(api.self_dht_id(tox))
    }

    /// Own nickname.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        let (api, tox) = self.live("tox_self_get_name")?;
        let raw = query_fill(Some(api.self_name_size(tox)), |buf| api.self_name(tox, buf))?;
        Some(decode_text(&raw))
    }

    /// Set own nickname, at most 128 bytes.
    #[must_use]
    pub fn set_name(&mut self, name: &str) -> bool {
        if !guard::at_most("name", name.len(), MAX_NAME_LENGTH) {
            return false;
        }
        let Some((api, tox)) = self.live_mut("tox_self_set_name") else {
            return false;
        };
        call::call("tox_self_set_name", |err: &mut ErrSetInfo| {
            api.set_self_name(tox, name.as_bytes(), err)
        })
    }

    /// Own status message.
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        let (api, tox) = self.live("tox_self_get_status_message")?;
        let raw = query_fill(Some(api.self_status_message_size(tox)), |buf| {
            api.self_status_message(tox, buf)
        })?;
        Some(decode_text(&raw))
    }

    /// Set own status message, at most 1007 bytes.
    #[must_use]
    pub fn set_status_message(&mut self, message: &str) -> bool {
        if !guard::at_most("status_message", message.len(), MAX_STATUS_MESSAGE_LENGTH) {
            return false;
        }
        let Some((api, tox)) = self.live_mut("tox_self_set_status_message") else {
            return false;
        };
        call::call("tox_self_set_status_message", |err: &mut ErrSetInfo| {
            api.set_self_status_message(tox, message.as_bytes(), err)
        })
    }

    /// Own presence.
    #[must_use]
    pub fn status(&self) -> Option<UserStatus> {
        let (api, tox) = self.live("tox_self_get_status")?;
        UserStatus::from_ffi(api.self_status(tox))
    }

    /// Set own presence.
    #[must_use]
    pub fn set_status(&mut self, status: UserStatus) -> bool {
        let Some((api, tox)) = self.live_mut("tox_self_set_status") else {
            return false;
        };
        api.set_self_status(tox, status);
        true
    }

    /// Bound UDP port.
    #[must_use]
    pub fn udp_port(&self) -> Option<u16> {
        let (api, tox) = self.live("tox_self_get_udp_port")?;
        call::call_variant("tox_self_get_udp_port", |err: &mut ErrGetPort| {
            api.self_udp_port(tox, err)
        })
    }

    /// Bound TCP relay port.
    #[must_use]
    pub fn tcp_port(&self) -> Option<u16> {
        let (api, tox) = self.live("tox_self_get_tcp_port")?;
        call::call_variant("tox_self_get_tcp_port", |err: &mut ErrGetPort| {
            api.self_tcp_port(tox, err)
        })
    }

    /// Backend and instance, or `None` with a debug trace when not live.
    fn live(&self, op: &'static str) -> Option<(&B, &B::Handle)> {
        match self.handle.get() {
            Some(tox) => Some((&self.api, tox)),
            None => {
                self.skipped(op);
                None
            }
        }
    }

    fn live_mut(&mut self, op: &'static str) -> Option<(&B, &mut B::Handle)> {
        if !self.is_live() {
            self.skipped(op);
        }
        self.handle.get_mut().map(|tox| (&self.api, tox))
    }

    fn skipped(&self, op: &'static str) {
        tracing::debug!(
            target: "tox::session",
            op,
            state = ?self.handle.state(),
            "session not live; call skipped"
        );
    }
}

impl<B: Boundary> Drop for Session<B> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<B: Boundary> fmt::Debug for Session<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state())
            .field("create_code", &self.create_code)
            .field("interval", &self.interval)
            .field("bridge", &self.bridge)
            .finish_non_exhaustive()
    }
}
