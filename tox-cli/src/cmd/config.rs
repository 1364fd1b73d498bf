//! Profile storage: one directory per profile under the platform data dir.
//!
//! ```text
//! <data_dir>/tox-cli/
//!   .default            name of the default profile
//!   <name>/profile.toml network settings, bootstrap nodes, behaviour
//!   <name>/savedata.tox opaque toxcore state
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tox::{Options, PublicKey};

use crate::error::{CliError, Result, io_at};

const CONFIG_FILE: &str = "profile.toml";
const SAVEDATA_FILE: &str = "savedata.tox";
const DEFAULT_MARKER: &str = ".default";

/// Root of all profiles.
#[derive(Debug, Clone)]
pub struct Store {
    base: PathBuf,
}

impl Store {
    /// Profiles under the platform data directory.
    pub fn system() -> Self {
        Self::at(
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tox-cli"),
        )
    }

    /// Profiles under `base`.
    pub fn at(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory of one profile.
    pub fn profile_dir(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.profile_dir(name).join(CONFIG_FILE).is_file()
    }

    /// The default profile name, `"default"` when unset.
    pub fn default_profile(&self) -> String {
        fs::read_to_string(self.base.join(DEFAULT_MARKER))
            .ok()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "default".into())
    }

    pub fn has_default(&self) -> bool {
        self.base.join(DEFAULT_MARKER).is_file()
    }

    /// Persist the default profile name.
    pub fn set_default(&self, name: &str) -> Result<()> {
        fs::create_dir_all(&self.base).map_err(io_at(&self.base))?;
        let marker = self.base.join(DEFAULT_MARKER);
        fs::write(&marker, name).map_err(io_at(marker))
    }

    /// Names of all profiles with a config, sorted.
    pub fn profiles(&self) -> Result<Vec<String>> {
        if !self.base.exists() {
            return Ok(Vec::new());
        }
        let mut names: Vec<String> = fs::read_dir(&self.base)
            .map_err(io_at(&self.base))?
            .filter_map(std::result::Result::ok)
            .filter(|e| e.path().join(CONFIG_FILE).is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }

    /// Delete a profile directory. Returns whether it existed.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let dir = self.profile_dir(name);
        if !dir.exists() {
            return Ok(false);
        }
        fs::remove_dir_all(&dir).map_err(io_at(dir))?;
        Ok(true)
    }

    /// Load `profile.toml`.
    pub fn load_config(&self, name: &str) -> Result<ProfileConfig> {
        let path = self.profile_dir(name).join(CONFIG_FILE);
        let text = fs::read_to_string(&path).map_err(io_at(&path))?;
        toml::from_str(&text).map_err(|source| CliError::ConfigParse { path, source })
    }

    /// Write `profile.toml`, creating the profile directory.
    pub fn save_config(&self, name: &str, config: &ProfileConfig) -> Result<()> {
        let dir = self.profile_dir(name);
        fs::create_dir_all(&dir).map_err(io_at(&dir))?;
        let text = toml::to_string_pretty(config)?;
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, text).map_err(io_at(path))
    }

    /// Saved toxcore state, if any.
    pub fn load_savedata(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.profile_dir(name).join(SAVEDATA_FILE);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_at(path)(e)),
        }
    }

    /// Replace the saved toxcore state. Written to a temporary file first so
    /// an interrupted write never truncates the previous state.
    pub fn save_savedata(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let dir = self.profile_dir(name);
        fs::create_dir_all(&dir).map_err(io_at(&dir))?;
        let path = dir.join(SAVEDATA_FILE);
        let tmp = dir.join(format!("{SAVEDATA_FILE}.tmp"));
        fs::write(&tmp, data).map_err(io_at(&tmp))?;
        fs::rename(&tmp, &path).map_err(io_at(&path))?;
        Ok(path)
    }
}

/// Reject names that would escape the store.
pub fn validate_name(name: &str) -> Result<()> {
    let ok = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if ok {
        Ok(())
    } else {
        Err(CliError::Profile(format!(
            "invalid profile name '{name}' (letters, digits, '-', '_', '.')"
        )))
    }
}

/// Per-profile settings stored as `profile.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Nickname set on the session at startup, if any.
    pub name: Option<String>,
    /// Accept every friend request without asking.
    pub auto_accept: bool,
    /// Session network settings.
    pub network: Options,
    /// DHT nodes contacted at startup.
    pub nodes: Vec<Node>,
}

/// A bootstrap node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub host: String,
    pub port: u16,
    pub public_key: PublicKey,
    /// Also use the node as a TCP relay.
    #[serde(default)]
    pub tcp: bool,
}

impl FromStr for Node {
    type Err = String;

    /// `host:port:public_key`, with an optional `+tcp` suffix.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (spec, tcp) = s
            .strip_suffix("+tcp")
            .map_or((s, false), |rest| (rest, true));
        let mut parts = spec.rsplitn(3, ':');
        let (Some(key), Some(port), Some(host)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("expected host:port:public_key, got '{s}'"));
        };
        if host.is_empty() {
            return Err(format!("missing host in '{s}'"));
        }
        let port = port
            .parse()
            .map_err(|e| format!("invalid port '{port}': {e}"))?;
        let public_key = key
            .parse()
            .map_err(|e| format!("invalid public key: {e}"))?;
        Ok(Self {
            host: host.to_owned(),
            port,
            public_key,
            tcp,
        })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.host, self.port, self.public_key)?;
        if self.tcp {
            f.write_str("+tcp")?;
        }
        Ok(())
    }
}
