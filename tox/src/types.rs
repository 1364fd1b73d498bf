//! Library types: enumerations, key material and protocol limits.

use std::fmt;
use std::str::FromStr;

use tox_sys as sys;

use crate::error::Error;

/// Size of a long-term public key.
pub const PUBLIC_KEY_SIZE: usize = sys::TOX_PUBLIC_KEY_SIZE as usize;
/// Size of a long-term secret key.
pub const SECRET_KEY_SIZE: usize = sys::TOX_SECRET_KEY_SIZE as usize;
/// Size of a full address: public key, nospam and checksum.
pub const ADDRESS_SIZE: usize = sys::TOX_ADDRESS_SIZE as usize;
/// Maximum length of a nickname or conference title.
pub const MAX_NAME_LENGTH: usize = sys::TOX_MAX_NAME_LENGTH as usize;
/// Maximum length of a status message.
pub const MAX_STATUS_MESSAGE_LENGTH: usize = sys::TOX_MAX_STATUS_MESSAGE_LENGTH as usize;
/// Maximum length of a friend request message.
pub const MAX_FRIEND_REQUEST_LENGTH: usize = sys::TOX_MAX_FRIEND_REQUEST_LENGTH as usize;
/// Maximum length of a chat message.
pub const MAX_MESSAGE_LENGTH: usize = sys::TOX_MAX_MESSAGE_LENGTH as usize;
/// Maximum length of a custom packet, including its id byte.
pub const MAX_CUSTOM_PACKET_SIZE: usize = sys::TOX_MAX_CUSTOM_PACKET_SIZE as usize;
/// Size of a file id.
pub const FILE_ID_LENGTH: usize = sys::TOX_FILE_ID_LENGTH as usize;
/// Maximum length of a file name.
pub const MAX_FILENAME_LENGTH: usize = sys::TOX_MAX_FILENAME_LENGTH as usize;
/// Maximum length of a bootstrap host name.
pub const MAX_HOSTNAME_LENGTH: usize = sys::TOX_MAX_HOSTNAME_LENGTH as usize;
/// Size of a `tox_hash` digest.
pub const HASH_LENGTH: usize = sys::TOX_HASH_LENGTH as usize;

macro_rules! ffi_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident {
        $($(#[$vm:meta])* $variant:ident = $val:path),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name { $($(#[$vm])* $variant),* }

        impl $name {
            /// Convert from the library value. Returns `None` for unknown values.
            #[must_use]
            pub fn from_ffi(v: u32) -> Option<Self> {
                match v {
                    $(v if v == $val => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The library value.
            #[must_use]
            pub const fn to_ffi(self) -> u32 {
                match self { $(Self::$variant => $val),* }
            }
        }
    };
}

ffi_enum! {
    /// Network reachability of a session or friend.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Connection {
        /// Offline.
        None = sys::TOX_CONNECTION_NONE,
        /// Reachable through a TCP relay.
        Tcp = sys::TOX_CONNECTION_TCP,
        /// Reachable directly over UDP.
        Udp = sys::TOX_CONNECTION_UDP,
    }
}

impl Connection {
    /// Whether any transport is up.
    #[must_use]
    pub const fn is_online(self) -> bool {
        !matches!(self, Self::None)
    }
}

ffi_enum! {
    /// User presence.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum UserStatus {
        /// Available.
        Online = sys::TOX_USER_STATUS_NONE,
        /// Away from keyboard.
        Away = sys::TOX_USER_STATUS_AWAY,
        /// Do not disturb.
        Busy = sys::TOX_USER_STATUS_BUSY,
    }
}

ffi_enum! {
    /// Chat message flavour.
    pub enum MessageType {
        /// Plain text.
        Normal = sys::TOX_MESSAGE_TYPE_NORMAL,
        /// `/me`-style action.
        Action = sys::TOX_MESSAGE_TYPE_ACTION,
    }
}

ffi_enum! {
    /// File transfer control command.
    pub enum FileControl {
        /// Start or continue a transfer.
        Resume = sys::TOX_FILE_CONTROL_RESUME,
        /// Pause a transfer.
        Pause = sys::TOX_FILE_CONTROL_PAUSE,
        /// Abort a transfer.
        Cancel = sys::TOX_FILE_CONTROL_CANCEL,
    }
}

ffi_enum! {
    /// Well-known file kinds. Other values are application defined.
    pub enum FileKind {
        /// Arbitrary data.
        Data = sys::TOX_FILE_KIND_DATA,
        /// Avatar image; the file id is its hash.
        Avatar = sys::TOX_FILE_KIND_AVATAR,
    }
}

ffi_enum! {
    /// Conference flavour.
    pub enum ConferenceType {
        /// Text only.
        Text = sys::TOX_CONFERENCE_TYPE_TEXT,
        /// Audio/video.
        Av = sys::TOX_CONFERENCE_TYPE_AV,
    }
}

ffi_enum! {
    /// Proxy protocol.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum ProxyType {
        /// HTTP CONNECT proxy.
        Http = sys::TOX_PROXY_TYPE_HTTP,
        /// SOCKS5 proxy.
        Socks5 = sys::TOX_PROXY_TYPE_SOCKS5,
    }
}

/// Fixed-length byte strings that cross the boundary by value.
pub(crate) trait FixedBytes: Sized {
    const LEN: usize;

    fn from_slice(bytes: &[u8]) -> Option<Self>;
}

macro_rules! key_type {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Length in bytes.
            pub const LEN: usize = $len;

            /// Wrap raw bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Borrow the raw bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Upper-case hex, the form Tox clients display.
            #[must_use]
            pub fn to_hex(&self) -> String {
                hex::encode_upper(self.0)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = Error;

            fn try_from(bytes: &[u8]) -> Result<Self, Error> {
                <[u8; $len]>::try_from(bytes).map(Self).map_err(|_| {
                    Error::InvalidKey(format!(
                        "{} must be {} bytes, got {}",
                        stringify!($name),
                        $len,
                        bytes.len()
                    ))
                })
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Error> {
                Self::try_from(hex::decode(s.trim())?.as_slice())
            }
        }

        impl FixedBytes for $name {
            const LEN: usize = $len;

            fn from_slice(bytes: &[u8]) -> Option<Self> {
                <[u8; $len]>::try_from(bytes).ok().map(Self)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

key_type! {
    /// Long-term public key identifying a peer.
    PublicKey, PUBLIC_KEY_SIZE
}

key_type! {
    /// Long-term secret key. `Debug` never prints it.
    SecretKey, SECRET_KEY_SIZE
}

key_type! {
    /// Shareable address: public key, nospam and checksum.
    Address, ADDRESS_SIZE
}

key_type! {
    /// Identifier of a file transfer, stable across resumes.
    FileId, FILE_ID_LENGTH
}

key_type! {
    /// SHA-256 digest from `tox_hash`.
    Hash, HASH_LENGTH
}

impl Address {
    /// The public key this address embeds.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        let mut key = [0_u8; PUBLIC_KEY_SIZE];
        key.copy_from_slice(&self.0[..PUBLIC_KEY_SIZE]);
        PublicKey(key)
    }

    /// The nospam value this address embeds.
    #[must_use]
    pub fn nospam(&self) -> u32 {
        let mut raw = [0_u8; 4];
        raw.copy_from_slice(&self.0[PUBLIC_KEY_SIZE..PUBLIC_KEY_SIZE + 4]);
        u32::from_be_bytes(raw)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "76518406F6A9F2217E8DC487CC783C25CC16A15EB36FF32E335A235342C48A39";

    #[test]
    fn public_key_hex_round_trip() {
        let key: PublicKey = KEY_HEX.parse().unwrap();
        assert_eq!(key.to_string(), KEY_HEX);
        assert_eq!(key.as_bytes()[0], 0x76);
    }

    #[test]
    fn lowercase_hex_is_accepted() {
        let key: PublicKey = KEY_HEX.to_lowercase().parse().unwrap();
        assert_eq!(key.to_hex(), KEY_HEX);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = PublicKey::try_from(&[0_u8; 31][..]).unwrap_err();
        assert!(err.to_string().contains("32 bytes, got 31"));
        assert!("abcd".parse::<Address>().is_err());
    }

    #[test]
    fn address_splits_into_key_and_nospam() {
        let mut raw = [0_u8; ADDRESS_SIZE];
        raw[..PUBLIC_KEY_SIZE].fill(0xAB);
        raw[PUBLIC_KEY_SIZE..PUBLIC_KEY_SIZE + 4].copy_from_slice(&0x0102_0304_u32.to_be_bytes());
        let address = Address::from_bytes(raw);
        assert_eq!(address.public_key().as_bytes(), &[0xAB; PUBLIC_KEY_SIZE]);
        assert_eq!(address.nospam(), 0x0102_0304);
    }

    #[test]
    fn secret_key_debug_is_redacted() {
        let key = SecretKey::from_bytes([7; SECRET_KEY_SIZE]);
        assert_eq!(format!("{key:?}"), "SecretKey(..)");
    }

    #[test]
    fn enums_map_library_values() {
        assert_eq!(Connection::from_ffi(sys::TOX_CONNECTION_UDP), Some(Connection::Udp));
        assert_eq!(UserStatus::from_ffi(99), None);
        assert_eq!(MessageType::Action.to_ffi(), sys::TOX_MESSAGE_TYPE_ACTION);
        assert!(!Connection::None.is_online());
    }
}
