//! Session settings.
//!
//! [`Options`] is a plain value. The native backend turns it into toxcore's
//! opaque options handle at construction time.

use crate::types::ProxyType;

/// Proxy used for all outbound TCP connections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proxy {
    /// Protocol.
    pub kind: ProxyType,
    /// Host name or IP address, at most 255 bytes.
    pub host: String,
    /// Port.
    pub port: u16,
}

/// Network settings for a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Use IPv6 (dual-stack) sockets.
    pub ipv6: bool,
    /// Use UDP. Disable to force TCP relays, e.g. behind a proxy.
    pub udp: bool,
    /// Discover peers on the local network.
    pub local_discovery: bool,
    /// Attempt UDP hole punching.
    pub hole_punching: bool,
    /// Outbound proxy, if any.
    pub proxy: Option<Proxy>,
    /// First UDP port to try binding. `0` lets toxcore choose.
    pub start_port: u16,
    /// Last UDP port to try binding.
    pub end_port: u16,
    /// Port for the local TCP relay server. `0` disables it.
    pub tcp_port: u16,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ipv6: true,
            udp: true,
            local_discovery: true,
            hole_punching: true,
            proxy: None,
            start_port: 0,
            end_port: 0,
            tcp_port: 0,
        }
    }
}

impl Options {
    /// Restore every setting to toxcore's default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Route traffic through `proxy`. UDP is turned off as toxcore requires.
    #[must_use]
    pub fn with_proxy(mut self, proxy: Proxy) -> Self {
        self.udp = false;
        self.proxy = Some(proxy);
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reset_restores_defaults() {
        let mut options = Options {
            ipv6: false,
            start_port: 33445,
            end_port: 33545,
            ..Options::default()
        };
        options.reset();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn proxy_disables_udp() {
        let options = Options::default().with_proxy(Proxy {
            kind: ProxyType::Socks5,
            host: "127.0.0.1".into(),
            port: 9050,
        });
        assert!(!options.udp);
        assert_eq!(options.proxy.map(|p| p.port), Some(9050));
    }
}
