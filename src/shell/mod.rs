// Remote shell capability
//
// A session reaches a shell only through these traits. Whether a shell is
// reachable at all is decided by the host and handed to the session as a
// `ShellCapability`.

mod error;
pub mod pty;

pub use error::ShellError;
pub use pty::PtyShell;

use crate::surface::TermSize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Sender half the channel posts its events to
pub type ChannelEvents = mpsc::UnboundedSender<ChannelEvent>;

/// What to spawn on the remote side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnSpec {
    pub program: String,
    pub args: Vec<String>,
    pub environment: Vec<(String, String)>,
    pub workdir: Option<PathBuf>,
    /// Initial pty window size
    pub size: TermSize,
    /// Allocate a pseudo-terminal (interactive shells need one)
    pub pty: bool,
}

impl SpawnSpec {
    /// Interactive login shell on a pty
    pub fn login_shell(program: impl Into<String>, size: TermSize) -> Self {
        Self {
            program: program.into(),
            args: vec!["-l".to_string()],
            environment: Vec::new(),
            workdir: None,
            size,
            pty: true,
        }
    }
}

/// Events delivered by an open channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// Raw output bytes from the remote side
    Output(Vec<u8>),
    /// The remote side went away. Sent at most once.
    Closed(ChannelClosed),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelClosed {
    pub exit_status: Option<u32>,
    /// Human-readable failure reason, if any
    pub message: Option<String>,
}

/// Opens duplex channels to a shell
pub trait RemoteShell: Send + Sync {
    fn open(&self, spec: SpawnSpec, events: ChannelEvents)
        -> Result<Box<dyn ShellChannel>, ShellError>;
}

/// One open duplex channel
pub trait ShellChannel: Send {
    /// Queue bytes for the remote side. Never blocks; order is preserved.
    fn send(&mut self, data: &[u8]) -> Result<(), ShellError>;

    /// Out-of-band window size change
    fn control_resize(&mut self, size: TermSize) -> Result<(), ShellError>;

    /// Close the channel. Safe to call more than once.
    fn close(&mut self);

    fn is_closed(&self) -> bool;
}

/// Whether the host can reach a shell
#[derive(Clone)]
pub enum ShellCapability {
    Remote(Arc<dyn RemoteShell>),
    Unavailable,
}

impl ShellCapability {
    pub fn is_available(&self) -> bool {
        matches!(self, ShellCapability::Remote(_))
    }
}

impl std::fmt::Debug for ShellCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellCapability::Remote(_) => f.write_str("ShellCapability::Remote"),
            ShellCapability::Unavailable => f.write_str("ShellCapability::Unavailable"),
        }
    }
}
