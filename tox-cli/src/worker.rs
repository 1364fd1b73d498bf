//! Worker thread: owns the session and makes every toxcore call.
//!
//! The main thread forwards [`Cmd`]s parsed from stdin; the worker runs the
//! `iterate` loop, sleeping on the command channel for the interval toxcore
//! asks for, and sends printable [`Note`]s back.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tox::{Address, Connection, Event, MessageType, NativeTox, Profile, PublicKey, UserStatus};

use crate::cmd::config::{ProfileConfig, Store};
use crate::cmd::profile;
use crate::error::{CliError, Result};

const DEFAULT_REQUEST: &str = "Hello, let's be friends.";
const REBOOTSTRAP: Duration = Duration::from_secs(20);

/// A request from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Send a friend request.
    Add { address: Address, message: String },
    /// Accept a request by public key.
    Accept(PublicKey),
    /// Message a friend.
    Msg { friend: u32, kind: MessageType, text: String },
    /// Change own nickname.
    Name(String),
    /// Change own presence.
    Status(UserStatus),
    /// Print the friend list.
    Friends,
    /// Write save data now.
    Save,
    /// Save and stop.
    Quit,
}

/// Output for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    /// Something to print.
    Line(String),
    /// A command failed.
    Failed(String),
}

pub const HELP: &str = "\
commands:
  add <address> [message]   send a friend request
  accept <public_key>       accept a friend request
  msg <friend> <text>       send a message (/me <text> for an action)
  name <nick>               change nickname
  status online|away|busy   change presence
  friends                   list friends
  save                      write save data
  quit                      save and exit";

/// Parse one stdin line. Blank lines yield `None`.
pub fn parse(line: &str) -> std::result::Result<Option<Cmd>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let cmd = match word {
        "add" => {
            let (address, message) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let address = address.parse().map_err(|e| format!("bad address: {e}"))?;
            let message = match message.trim() {
                "" => DEFAULT_REQUEST.to_owned(),
                m => m.to_owned(),
            };
            Cmd::Add { address, message }
        }
        "accept" => Cmd::Accept(rest.parse().map_err(|e| format!("bad public key: {e}"))?),
        "msg" => {
            let (friend, text) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: msg <friend> <text>")?;
            let friend = friend
                .parse()
                .map_err(|_| format!("bad friend number '{friend}'"))?;
            let text = text.trim();
            let (kind, text) = text
                .strip_prefix("/me ")
                .map_or((MessageType::Normal, text), |t| (MessageType::Action, t));
            Cmd::Msg {
                friend,
                kind,
                text: text.to_owned(),
            }
        }
        "name" => Cmd::Name(rest.to_owned()),
        "status" => Cmd::Status(match rest {
            "online" => UserStatus::Online,
            "away" => UserStatus::Away,
            "busy" => UserStatus::Busy,
            other => return Err(format!("unknown status '{other}' (online, away, busy)")),
        }),
        "friends" => Cmd::Friends,
        "save" => Cmd::Save,
        "quit" | "exit" => Cmd::Quit,
        "help" => return Err(HELP.to_owned()),
        other => return Err(format!("unknown command '{other}' (try help)")),
    };
    Ok(Some(cmd))
}

/// Channels to a running worker.
#[derive(Debug)]
pub struct Handle {
    pub commands: mpsc::Sender<Cmd>,
    pub notes: mpsc::Receiver<Note>,
    thread: JoinHandle<Result<()>>,
}

impl Handle {
    /// Wait for the worker to stop and surface its error.
    pub fn join(self) -> Result<()> {
        self.thread.join().map_err(|_| CliError::Worker)?
    }
}

/// Start the worker for profile `name`. The session is opened on the worker
/// thread and never leaves it.
///
/// # Errors
///
/// Returns an error if the thread cannot be spawned.
pub fn spawn(store: Store, name: String) -> Result<Handle> {
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (note_tx, note_rx) = mpsc::channel();
    let thread = thread::Builder::new()
        .name("tox-worker".into())
        .spawn(move || {
            let (config, session) = profile::open(&store, &name)?;
            let mut worker = Worker {
                profile: Profile::new(session),
                store,
                name,
                config,
                tx: note_tx,
                online: false,
                last_bootstrap: None,
            };
            worker.run(&cmd_rx)
        })
        .map_err(CliError::Spawn)?;
    Ok(Handle {
        commands: cmd_tx,
        notes: note_rx,
        thread,
    })
}

struct Worker {
    profile: Profile<NativeTox>,
    store: Store,
    name: String,
    config: ProfileConfig,
    tx: mpsc::Sender<Note>,
    online: bool,
    last_bootstrap: Option<Instant>,
}

impl Worker {
    fn run(&mut self, rx: &mpsc::Receiver<Cmd>) -> Result<()> {
        if let Some(nick) = self.config.name.clone()
            && self.profile.session().name().as_deref() != Some(nick.as_str())
            && !self.profile.session_mut().set_name(&nick)
        {
            self.failed(format!("could not set nickname '{nick}'"));
        }
        if let Some(address) = self.profile.session().address() {
            self.line(format!("address: {address}"));
        }
        self.bootstrap();

        loop {
            for event in self.profile.iterate() {
                self.on_event(&event);
            }
            if !self.online
                && self.last_bootstrap.is_some_and(|t| t.elapsed() >= REBOOTSTRAP)
            {
                self.bootstrap();
            }

            let wait = self.profile.session().iteration_interval();
            match rx.recv_timeout(wait) {
                Ok(Cmd::Quit) | Err(RecvTimeoutError::Disconnected) => break,
                Ok(cmd) => self.dispatch(cmd),
                Err(RecvTimeoutError::Timeout) => {}
            }
        }

        profile::save(&self.store, &self.name, self.profile.session())?;
        self.line("saved; bye".to_owned());
        Ok(())
    }

    fn bootstrap(&mut self) {
        self.last_bootstrap = Some(Instant::now());
        if self.config.nodes.is_empty() {
            tracing::warn!(profile = %self.name, "no bootstrap nodes configured");
            return;
        }
        let session = self.profile.session_mut();
        let mut reached = 0_usize;
        for node in &self.config.nodes {
            let mut ok = session.bootstrap(&node.host, node.port, node.public_key);
            if node.tcp {
                ok &= session.add_tcp_relay(&node.host, node.port, node.public_key);
            }
            if ok {
                reached += 1;
            }
        }
        tracing::info!(reached, total = self.config.nodes.len(), "bootstrap requested");
    }

    fn dispatch(&mut self, cmd: Cmd) {
        tracing::debug!(?cmd, "command");
        match cmd {
            Cmd::Add { address, message } => match self.profile.add_friend(address, &message) {
                Some(friend) => self.line(format!("request sent; friend #{friend}")),
                None => self.failed("friend request failed".into()),
            },
            Cmd::Accept(key) => match self.profile.add_friend_norequest(key) {
                Some(friend) => self.line(format!("accepted; friend #{friend}")),
                None => self.failed("accept failed".into()),
            },
            Cmd::Msg { friend, kind, text } => {
                if self
                    .profile
                    .session_mut()
                    .friend_send_message(friend, kind, &text)
                    .is_none()
                {
                    self.failed(format!("message to #{friend} not sent"));
                }
            }
            Cmd::Name(nick) => {
                if self.profile.session_mut().set_name(&nick) {
                    self.config.name = Some(nick);
                } else {
                    self.failed("nickname rejected".into());
                }
            }
            Cmd::Status(status) => {
                if !self.profile.session_mut().set_status(status) {
                    self.failed("status not set".into());
                }
            }
            Cmd::Friends => self.list_friends(),
            Cmd::Save => match profile::save(&self.store, &self.name, self.profile.session()) {
                Ok(()) => self.line("saved".into()),
                Err(e) => self.failed(e.to_string()),
            },
            Cmd::Quit => {}
        }
    }

    fn on_event(&mut self, event: &Event) {
        match event {
            Event::SelfConnectionStatus(connection) => {
                self.online = connection.is_online();
                self.line(match connection {
                    Connection::None => "offline".into(),
                    Connection::Tcp => "online (tcp)".into(),
                    Connection::Udp => "online (udp)".into(),
                });
            }
            Event::FriendRequest { public_key, message } => {
                if self.config.auto_accept {
                    match self.profile.add_friend_norequest(public_key) {
                        Some(friend) => self.line(format!("accepted {public_key} as #{friend}")),
                        None => self.failed(format!("could not accept {public_key}")),
                    }
                } else {
                    self.line(format!(
                        "friend request from {public_key}: {message}\n  (accept {public_key})"
                    ));
                }
            }
            Event::FriendMessage { friend, kind, text } => {
                let who = self.display(*friend);
                self.line(match kind {
                    MessageType::Normal => format!("<{who}> {text}"),
                    MessageType::Action => format!("* {who} {text}"),
                });
                self.profile.mark_read(*friend);
            }
            Event::FriendConnectionStatus { friend, connection } => {
                let who = self.display(*friend);
                let state = if connection.is_online() { "online" } else { "offline" };
                self.line(format!("{who} is {state}"));
            }
            Event::FriendName { friend, name } => {
                self.line(format!("#{friend} is now known as {name}"));
            }
            Event::ConferenceInvite { friend, kind, .. } => {
                let who = self.display(*friend);
                self.line(format!("{who} invited you to a {kind:?} conference"));
            }
            other => tracing::trace!(event = ?other, "unhandled event"),
        }
    }

    fn list_friends(&self) {
        let mut lines = Vec::new();
        for friend in self.profile.friends() {
            let state = if friend.connection.is_online() {
                format!("{:?}", friend.status).to_lowercase()
            } else {
                "offline".to_owned()
            };
            lines.push(format!(
                "  #{:<3} {:<20} {state:<8} {}",
                friend.number,
                friend.display_name(),
                friend.status_message
            ));
        }
        if lines.is_empty() {
            self.line("no friends yet".into());
        } else {
            self.line(lines.join("\n"));
        }
    }

    fn display(&self, friend: u32) -> String {
        self.profile
            .friend(friend)
            .map_or_else(|| format!("#{friend}"), tox::Friend::display_name)
    }

    fn line(&self, text: String) {
        let _ = self.tx.send(Note::Line(text));
    }

    fn failed(&self, text: String) {
        let _ = self.tx.send(Note::Failed(text));
    }
}
