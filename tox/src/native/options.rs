#![allow(unsafe_code)]
//! The opaque `Tox_Options` handle.

use std::borrow::Cow;
use std::ffi::{CStr, CString, c_char, c_void};
use std::marker::PhantomData;

use tox_sys as sys;

use super::ffi::{OwnedHandle, to_c_string, with_code};
use crate::code::{ErrNew, ErrOptionsNew};
use crate::options::{Options, Proxy};
use crate::types::MAX_HOSTNAME_LENGTH;

/// Library options built from [`Options`], valid while `'a` borrows the
/// save data handed to `tox_new`.
///
/// Immutable once built; dropped right after `tox_new` returns.
pub(crate) struct RawOptions<'a> {
    handle: OwnedHandle<sys::Tox_Options>,
    // toxcore stores the host pointer, not a copy.
    proxy_host: Option<CString>,
    savedata: PhantomData<&'a [u8]>,
}

impl<'a> RawOptions<'a> {
    /// Allocate options with toxcore's defaults and the log bridge installed.
    ///
    /// # Panics
    ///
    /// If the library cannot allocate the options struct.
    pub(crate) fn new() -> Self {
        let mut code = ErrOptionsNew::Ok;
        let ptr = with_code(&mut code, |e| unsafe { sys::tox_options_new(e) });
        let handle = OwnedHandle::new(ptr, sys::tox_options_free)
            .expect("tox_options_new: out of memory");
        let mut options = Self {
            handle,
            proxy_host: None,
            savedata: PhantomData,
        };
        options.install_log();
        options
    }

    /// Build library options from settings and optional save data.
    pub(crate) fn build(settings: &Options, savedata: Option<&'a [u8]>) -> Result<Self, ErrNew> {
        let mut options = Self::new();
        let raw = options.handle.as_mut_ptr();
        unsafe {
            sys::tox_options_set_ipv6_enabled(raw, settings.ipv6);
            sys::tox_options_set_udp_enabled(raw, settings.udp);
            sys::tox_options_set_local_discovery_enabled(raw, settings.local_discovery);
            sys::tox_options_set_hole_punching_enabled(raw, settings.hole_punching);
            sys::tox_options_set_start_port(raw, settings.start_port);
            sys::tox_options_set_end_port(raw, settings.end_port);
            sys::tox_options_set_tcp_port(raw, settings.tcp_port);
        }
        if let Some(proxy) = &settings.proxy {
            options.set_proxy(proxy)?;
        }
        if let Some(data) = savedata.filter(|d| !d.is_empty()) {
            unsafe {
                sys::tox_options_set_savedata_type(raw, sys::TOX_SAVEDATA_TYPE_TOX_SAVE);
                sys::tox_options_set_savedata_data(raw, data.as_ptr(), data.len());
            }
        }
        Ok(options)
    }

    fn set_proxy(&mut self, proxy: &Proxy) -> Result<(), ErrNew> {
        if proxy.host.len() > MAX_HOSTNAME_LENGTH {
            return Err(ErrNew::ProxyBadHost);
        }
        let host = to_c_string(&proxy.host).ok_or(ErrNew::ProxyBadHost)?;
        let raw = self.handle.as_mut_ptr();
        unsafe {
            sys::tox_options_set_proxy_type(raw, proxy.kind.to_ffi());
            sys::tox_options_set_proxy_host(raw, host.as_ptr());
            sys::tox_options_set_proxy_port(raw, proxy.port);
        }
        self.proxy_host = Some(host);
        Ok(())
    }

    fn install_log(&mut self) {
        unsafe { sys::tox_options_set_log_callback(self.handle.as_mut_ptr(), Some(forward_log)) };
    }

    pub(crate) const fn as_ptr(&self) -> *const sys::Tox_Options {
        self.handle.as_ptr()
    }
}

impl std::fmt::Debug for RawOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawOptions")
            .field("handle", &self.handle)
            .field("proxy_host", &self.proxy_host)
            .finish()
    }
}

unsafe fn lossy<'s>(ptr: *const c_char) -> Cow<'s, str> {
    if ptr.is_null() {
        Cow::Borrowed("")
    } else {
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy()
    }
}

/// toxcore's internal log, routed to `tracing` under the `toxcore` target.
unsafe extern "C" fn forward_log(
    _tox: *mut sys::Tox,
    level: sys::TOX_LOG_LEVEL,
    file: *const c_char,
    line: u32,
    func: *const c_char,
    message: *const c_char,
    _user_data: *mut c_void,
) {
    let (file, func, message) = unsafe { (lossy(file), lossy(func), lossy(message)) };
    match level {
        sys::TOX_LOG_LEVEL_TRACE => {
            tracing::trace!(target: "toxcore", %file, line, %func, "{message}");
        }
        sys::TOX_LOG_LEVEL_DEBUG => {
            tracing::debug!(target: "toxcore", %file, line, %func, "{message}");
        }
        sys::TOX_LOG_LEVEL_INFO => {
            tracing::info!(target: "toxcore", %file, line, %func, "{message}");
        }
        sys::TOX_LOG_LEVEL_WARNING => {
            tracing::warn!(target: "toxcore", %file, line, %func, "{message}");
        }
        _ => tracing::error!(target: "toxcore", %file, line, %func, "{message}"),
    }
}
