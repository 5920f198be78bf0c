// Async input handler for TUI - non-blocking keyboard polling

use crossterm::event::Event;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long one poll waits before checking whether the receiver is gone
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Spawn a blocking task that polls crossterm and forwards every event.
///
/// The task ends when the receiver is dropped or the terminal stops
/// producing events.
pub fn spawn_input_task() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        if tx.is_closed() {
            break;
        }
        match crossterm::event::poll(POLL_INTERVAL) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read terminal event");
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Failed to poll terminal events");
                break;
            }
        }
    });

    rx
}
