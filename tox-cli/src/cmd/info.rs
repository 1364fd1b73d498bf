//! Identity inspection: `info`.

use super::config::Store;
use super::profile;
use crate::error::Result;

/// Show a profile's identity, ports and friends.
pub fn info(store: &Store, name: &str) -> Result<()> {
    let (config, session) = profile::open(store, name)?;
    let (major, minor, patch) = session.version();

    println!("Profile:       {name}");
    println!(
        "toxcore:       {major}.{minor}.{patch}{}",
        if session.is_compatible() { "" } else { " (incompatible)" }
    );
    if let Some(address) = session.address() {
        println!("Address:       {address}");
    }
    if let Some(key) = session.public_key() {
        println!("Public key:    {key}");
    }
    if let Some(dht) = session.dht_id() {
        println!("DHT id:        {dht}");
    }
    if let Some(nospam) = session.nospam() {
        println!("Nospam:        {nospam:08X}");
    }
    println!("Name:          {}", session.name().unwrap_or_default());
    println!("Status:        {}", session.status_message().unwrap_or_default());
    match session.udp_port() {
        Some(port) => println!("UDP port:      {port}"),
        None => println!("UDP port:      not bound"),
    }
    if let Some(port) = session.tcp_port() {
        println!("TCP port:      {port}");
    }
    println!(
        "Save data:     {}",
        store.profile_dir(name).join("savedata.tox").display()
    );
    println!("Auto-accept:   {}", config.auto_accept);

    println!("\nNodes ({}):", config.nodes.len());
    for node in &config.nodes {
        println!("  {node}");
    }

    let friends = session.friend_list().unwrap_or_default();
    println!("\nFriends ({}):", friends.len());
    for friend in friends {
        let key = session
            .friend_public_key(friend)
            .map(|k| k.to_hex())
            .unwrap_or_default();
        let name = session.friend_name(friend).unwrap_or_default();
        let seen = session
            .friend_last_online(friend)
            .map_or_else(|| "never".to_owned(), |t| format!("{t} (unix)"));
        println!("  {friend:>3}  {name:<16} {key}  last online {seen}");
    }
    Ok(())
}
