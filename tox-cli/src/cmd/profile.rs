//! Profile management commands: new, list, remove, default.

use tox::{NativeSession, NativeTox, Options, Session};

use super::NewArgs;
use super::config::{self, ProfileConfig, Store};
use crate::error::{CliError, Result};

/// Create a profile: a fresh identity, its save data, and `profile.toml`.
pub fn create(store: &Store, args: &NewArgs) -> Result<()> {
    config::validate_name(&args.name)?;
    if store.exists(&args.name) {
        return Err(CliError::Profile(format!(
            "profile '{}' already exists",
            args.name
        )));
    }

    let config = ProfileConfig {
        name: args.nick.clone(),
        auto_accept: args.auto_accept,
        network: Options {
            udp: !args.no_udp,
            ipv6: !args.no_ipv6,
            ..Options::default()
        },
        nodes: args.nodes.clone(),
    };

    let mut session = Session::open(NativeTox, &config.network, None)?;
    if let Some(nick) = &config.name
        && !session.set_name(nick)
    {
        tracing::warn!(nick = %nick, "nickname not set");
    }
    let address = session.address();
    save(store, &args.name, &session)?;
    store.save_config(&args.name, &config)?;

    if !store.has_default() {
        store.set_default(&args.name)?;
    }

    println!("Profile '{}' created.", args.name);
    if let Some(address) = address {
        println!("  Address: {address}");
    }
    println!("  Nodes:   {}", config.nodes.len());
    Ok(())
}

/// Open a profile's session from its save data.
pub fn open(store: &Store, name: &str) -> Result<(ProfileConfig, NativeSession)> {
    config::validate_name(name)?;
    if !store.exists(name) {
        return Err(CliError::Profile(format!("profile '{name}' does not exist")));
    }
    let config = store.load_config(name)?;
    let savedata = store.load_savedata(name)?;
    let session = Session::open(NativeTox, &config.network, savedata.as_deref())?;
    if let Some(code) = session.construction_error() {
        tracing::warn!(profile = name, %code, "save data only partially loaded");
    }
    Ok((config, session))
}

/// Write the session's state to the profile.
pub fn save(store: &Store, name: &str, session: &NativeSession) -> Result<()> {
    config::validate_name(name)?;
    let data = session
        .save_data()
        .ok_or_else(|| CliError::Profile("session returned no save data".into()))?;
    let path = store.save_savedata(name, &data)?;
    tracing::debug!(profile = name, path = %path.display(), bytes = data.len(), "saved");
    Ok(())
}

/// List all saved profiles.
pub fn list(store: &Store) -> Result<()> {
    let names = store.profiles()?;
    if names.is_empty() {
        println!("No profiles found.");
        return Ok(());
    }

    let default = store.default_profile();
    for name in &names {
        let star = if *name == default { " *" } else { "" };
        match store.load_config(name) {
            Ok(cfg) => {
                let nick = cfg.name.as_deref().unwrap_or("-");
                println!(
                    "  {name:<16} {nick:<16} [{} node(s)]{star}",
                    cfg.nodes.len()
                );
            }
            Err(e) => println!("  {name:<16} [{e}]{star}"),
        }
    }
    println!("\n  * = default");
    Ok(())
}

/// Remove a single profile directory.
pub fn remove(store: &Store, name: &str) -> Result<()> {
    config::validate_name(name)?;
    if store.remove(name)? {
        println!("Removed profile '{name}'.");
    } else {
        println!("Profile '{name}' does not exist.");
    }
    Ok(())
}

/// Show or set the default profile.
pub fn default(store: &Store, name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            config::validate_name(name)?;
            if !store.exists(name) {
                return Err(CliError::Profile(format!("profile '{name}' does not exist")));
            }
            store.set_default(name)?;
            println!("Default profile set to '{name}'.");
        }
        None => println!("{}", store.default_profile()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// A store plus a sibling profile directory reachable only through `..`.
    fn store_with_outside_profile() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::at(dir.path().join("tox-cli"));
        store.save_config("home", &ProfileConfig::default()).unwrap();
        let outside = dir.path().join("outside");
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("profile.toml"), "").unwrap();
        (dir, store)
    }

    #[rstest]
    #[case("../outside")]
    #[case("..")]
    #[case("a/b")]
    fn open_rejects_names_outside_the_store(#[case] name: &str) {
        let (_dir, store) = store_with_outside_profile();
        assert!(matches!(
            open(&store, name),
            Err(CliError::Profile(msg)) if msg.contains("invalid")
        ));
    }

    #[test]
    fn default_rejects_names_outside_the_store() {
        let (_dir, store) = store_with_outside_profile();
        store.set_default("home").unwrap();

        assert!(matches!(
            default(&store, Some("../outside")),
            Err(CliError::Profile(msg)) if msg.contains("invalid")
        ));
        assert_eq!(store.default_profile(), "home");
    }

    #[test]
    fn default_accepts_an_existing_profile() {
        let (_dir, store) = store_with_outside_profile();
        default(&store, Some("home")).unwrap();
        assert_eq!(store.default_profile(), "home");
    }
}
