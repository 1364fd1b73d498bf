//! tox-cli: headless Tox client.
//!
//! Architecture: **main thread = terminal only**, **worker thread = all FFI**.
//! Commands read from stdin reach the worker through [`worker::Cmd`]; the
//! worker answers with printable [`worker::Note`]s.

#![allow(
    missing_docs,
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

mod cmd;
mod error;
mod logging;
mod worker;

use std::io::{self, BufRead};
use std::{process, thread};

use clap::Parser;

use crate::cmd::config::Store;
use crate::cmd::{Cli, Command, info, profile};
use crate::error::Result;
use crate::worker::{Cmd, Note};

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(e) = dispatch(cli.command, &Store::system()) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn dispatch(command: Command, store: &Store) -> Result<()> {
    match command {
        Command::New(args) => profile::create(store, &args),
        Command::List => profile::list(store),
        Command::Remove { name } => profile::remove(store, &name),
        Command::Default { name } => profile::default(store, name.as_deref()),
        Command::Info { profile } => {
            info::info(store, &profile.unwrap_or_else(|| store.default_profile()))
        }
        Command::Run { profile } => run(store, profile.unwrap_or_else(|| store.default_profile())),
    }
}

/// Go online with `name` until stdin closes or `quit` is entered.
fn run(store: &Store, name: String) -> Result<()> {
    tracing::info!(profile = %name, "starting");
    let worker = worker::spawn(store.clone(), name)?;

    let commands = worker.commands.clone();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match worker::parse(&line) {
                Ok(Some(cmd)) => {
                    if commands.send(cmd).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(msg) => eprintln!("{msg}"),
            }
        }
        let _ = commands.send(Cmd::Quit);
    });

    println!("type `help` for commands");
    for note in &worker.notes {
        match note {
            Note::Line(text) => println!("{text}"),
            Note::Failed(text) => eprintln!("error: {text}"),
        }
    }
    worker.join()
}
