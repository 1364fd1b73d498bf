//! CLI argument definitions and subcommand routing.

pub mod config;
pub mod info;
pub mod profile;

use clap::{Parser, Subcommand};

use self::config::Node;

/// Headless Tox client.
///
/// Profiles keep the toxcore save data and network settings in the platform
/// data directory. `run` starts a session and reads commands from stdin.
#[derive(Parser)]
#[command(name = "tox", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a new profile with a fresh identity.
    New(NewArgs),
    /// List all saved profiles.
    #[command(alias = "ls")]
    List,
    /// Remove a profile and its save data.
    #[command(alias = "rm")]
    Remove {
        /// Profile name to remove.
        name: String,
    },
    /// Show or set the default profile.
    Default {
        /// Profile name to set as default. Omit to show current.
        name: Option<String>,
    },
    /// Show identity, ports and friends of a profile.
    Info {
        /// Profile to inspect (uses default if omitted).
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Go online and read commands from stdin.
    Run {
        /// Profile to run (uses default if omitted).
        #[arg(short, long)]
        profile: Option<String>,
    },
}

/// Arguments for the `new` subcommand.
#[derive(clap::Args)]
pub struct NewArgs {
    /// Profile name.
    pub name: String,

    /// Nickname to publish.
    #[arg(long)]
    pub nick: Option<String>,

    /// Bootstrap node as `host:port:public_key`, `+tcp` to also relay.
    /// Repeatable.
    #[arg(long = "node", value_name = "NODE")]
    pub nodes: Vec<Node>,

    /// Accept every incoming friend request.
    #[arg(long)]
    pub auto_accept: bool,

    /// Disable UDP (TCP relays only).
    #[arg(long)]
    pub no_udp: bool,

    /// Disable IPv6.
    #[arg(long)]
    pub no_ipv6: bool,
}
