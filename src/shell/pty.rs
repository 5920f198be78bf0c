// PtyShell - local interactive shell over a pseudo-terminal
//
// Blocking pty I/O runs on two threads per channel: the reader posts output
// chunks (and finally the close event) to the session's event sender, the
// writer drains an unbounded queue so `send` never blocks.

use super::{ChannelClosed, ChannelEvent, ChannelEvents, RemoteShell, ShellChannel, ShellError, SpawnSpec};
use crate::surface::TermSize;
use portable_pty::{native_pty_system, Child, ChildKiller, CommandBuilder, MasterPty, PtySize};
use std::io::{ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Spawns the configured shell locally
#[derive(Debug, Default, Clone)]
pub struct PtyShell;

impl PtyShell {
    pub fn new() -> Self {
        Self
    }
}

impl RemoteShell for PtyShell {
    fn open(
        &self,
        spec: SpawnSpec,
        events: ChannelEvents,
    ) -> Result<Box<dyn ShellChannel>, ShellError> {
        if !spec.pty {
            return Err(ShellError::PtyRequired);
        }
        if spec.program.trim().is_empty() {
            return Err(ShellError::EmptyProgram);
        }
        if spec.size.is_empty() {
            return Err(ShellError::InvalidSize {
                rows: spec.size.rows,
                cols: spec.size.cols,
            });
        }

        let pair = native_pty_system()
            .openpty(to_pty_size(spec.size))
            .map_err(ShellError::spawn)?;

        let mut command = CommandBuilder::new(&spec.program);
        for arg in &spec.args {
            command.arg(arg);
        }
        for (key, value) in &spec.environment {
            command.env(key, value);
        }
        if let Some(workdir) = &spec.workdir {
            command.cwd(workdir);
        }

        let mut child = pair.slave.spawn_command(command).map_err(ShellError::spawn)?;
        drop(pair.slave);

        let io = pair
            .master
            .try_clone_reader()
            .and_then(|reader| Ok((reader, pair.master.take_writer()?)));
        let (reader, writer) = match io {
            Ok(io) => io,
            Err(error) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ShellError::spawn(error));
            }
        };

        tracing::info!(
            program = %spec.program,
            rows = spec.size.rows,
            cols = spec.size.cols,
            "Shell spawned on pty"
        );

        let closed = Arc::new(AtomicBool::new(false));
        let killer = child.clone_killer();
        let (stdin_tx, stdin_rx) = mpsc::unbounded_channel();

        spawn_write_loop(writer, stdin_rx);
        spawn_read_loop(reader, child, events, Arc::clone(&closed));

        Ok(Box::new(PtyChannel {
            master: pair.master,
            stdin_tx: Some(stdin_tx),
            killer,
            closed,
        }))
    }
}

struct PtyChannel {
    master: Box<dyn MasterPty + Send>,
    stdin_tx: Option<mpsc::UnboundedSender<Vec<u8>>>,
    killer: Box<dyn ChildKiller + Send + Sync>,
    closed: Arc<AtomicBool>,
}

impl ShellChannel for PtyChannel {
    fn send(&mut self, data: &[u8]) -> Result<(), ShellError> {
        if self.is_closed() {
            return Err(ShellError::Closed);
        }
        let tx = self.stdin_tx.as_ref().ok_or(ShellError::Closed)?;
        tx.send(data.to_vec()).map_err(|_| ShellError::Closed)
    }

    fn control_resize(&mut self, size: TermSize) -> Result<(), ShellError> {
        if self.is_closed() {
            return Err(ShellError::Closed);
        }
        if size.is_empty() {
            return Err(ShellError::InvalidSize {
                rows: size.rows,
                cols: size.cols,
            });
        }
        self.master
            .resize(to_pty_size(size))
            .map_err(|e| ShellError::Resize(e.to_string()))
    }

    fn close(&mut self) {
        // Dropping the sender ends the writer thread
        self.stdin_tx = None;
        if !self.closed.swap(true, Ordering::SeqCst) {
            if let Err(e) = self.killer.kill() {
                tracing::debug!(error = %e, "Shell already gone at close");
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Drop for PtyChannel {
    fn drop(&mut self) {
        self.close();
    }
}

fn to_pty_size(size: TermSize) -> PtySize {
    PtySize {
        rows: size.rows,
        cols: size.cols,
        pixel_width: 0,
        pixel_height: 0,
    }
}

fn spawn_write_loop(
    mut writer: Box<dyn Write + Send>,
    mut stdin_rx: mpsc::UnboundedReceiver<Vec<u8>>,
) {
    std::thread::spawn(move || {
        while let Some(input) = stdin_rx.blocking_recv() {
            if input.is_empty() {
                continue;
            }
            if writer.write_all(&input).is_err() || writer.flush().is_err() {
                break;
            }
        }
    });
}

fn spawn_read_loop(
    mut reader: Box<dyn Read + Send>,
    mut child: Box<dyn Child + Send + Sync>,
    events: ChannelEvents,
    closed: Arc<AtomicBool>,
) {
    std::thread::spawn(move || {
        let mut buffer = [0_u8; READ_CHUNK_SIZE];
        let mut read_error = None;
        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => {
                    if events.send(ChannelEvent::Output(buffer[..read].to_vec())).is_err() {
                        // Receiver gone, nobody left to tell
                        closed.store(true, Ordering::SeqCst);
                        let _ = child.kill();
                        let _ = child.wait();
                        return;
                    }
                }
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                // Linux reports EIO on the master once the child side is gone
                Err(error) => {
                    if error.raw_os_error() != Some(5) {
                        read_error = Some(error.to_string());
                    }
                    break;
                }
            }
        }

        let closed_by_us = closed.swap(true, Ordering::SeqCst);
        let notice = match child.wait() {
            Ok(status) => ChannelClosed {
                exit_status: Some(status.exit_code()),
                message: read_error,
            },
            Err(error) => ChannelClosed {
                exit_status: None,
                message: Some(read_error.unwrap_or_else(|| error.to_string())),
            },
        };
        tracing::info!(
            exit_status = ?notice.exit_status,
            closed_by_us,
            "Shell channel ended"
        );
        let _ = events.send(ChannelEvent::Closed(notice));
    });
}
