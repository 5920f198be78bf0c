// Teaching terminal TUI
//
// Full-screen ratatui front-end: a live shell in the terminal pane, the
// tooltip row under it, and the command palette with its explanation panel.
// One task owns the session and multiplexes keyboard events, shell channel
// events and the session's next timer deadline.

mod app;
mod async_input;
mod info_widget;
pub mod keys;
mod palette_widget;
mod terminal_widget;

pub use app::{App, AppLayout, Focus};
pub use async_input::spawn_input_task;
pub use info_widget::{InfoWidget, TooltipWidget};
pub use palette_widget::PaletteWidget;
pub use terminal_widget::TerminalWidget;

use anyhow::{Context, Result};
use crossterm::event::Event;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::session::Session;
use crate::shell::{ChannelEvent, ShellCapability};
use crate::surface::VtSurface;

/// Current instant on tokio's clock (pausable in tests)
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}

/// Mount a session sized to the terminal pane of a `screen`-sized frame
pub fn mount(
    config: &Config,
    capability: ShellCapability,
    screen: Rect,
) -> Result<(App, mpsc::UnboundedReceiver<ChannelEvent>)> {
    let size = AppLayout::new(screen).terminal_size();
    let surface = VtSurface::new(size, config.scrollback)
        .context("Failed to create terminal surface")?;

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut session = Session::new(capability, config.session_options());
    session.open(surface, events_tx);
    tracing::info!(
        state = ?session.state(),
        rows = size.rows,
        cols = size.cols,
        "Session mounted"
    );

    Ok((App::new(session, config.colors.clone()), events_rx))
}

/// Drive `app` until the user quits or the input stream ends
pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut input: mpsc::UnboundedReceiver<Event>,
    mut channel_events: mpsc::UnboundedReceiver<ChannelEvent>,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("Failed to draw frame")?;

        if app.should_quit() {
            break;
        }

        let deadline = app.session().next_deadline();
        tokio::select! {
            event = input.recv() => match event {
                Some(event) => {
                    let size = terminal.size().context("Failed to query terminal size")?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    app.handle_event(event, screen, now());
                }
                None => {
                    tracing::info!("Input stream closed");
                    break;
                }
            },
            Some(event) = channel_events.recv() => app.handle_channel(event, now()),
            _ = wait_until(deadline) => app.session_mut().fire_due(now()),
        }
    }

    app.session_mut().teardown();
    Ok(())
}

/// Run the interactive front-end on the real terminal
pub async fn run(config: &Config, capability: ShellCapability) -> Result<()> {
    crossterm::terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;

    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result: Result<()> = async {
        let size = terminal.size()?;
        let (mut app, channel_events) =
            mount(config, capability, Rect::new(0, 0, size.width, size.height))?;
        run_loop(&mut terminal, &mut app, spawn_input_task(), channel_events).await
    }
    .await;

    // Restore terminal
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}
