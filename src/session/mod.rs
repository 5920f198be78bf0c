// Terminal session - binds one surface to one shell channel
//
// The session is a single-owner state machine. Hosts feed it events and the
// current instant, and drive its timers via `next_deadline` / `fire_due`.

pub mod timers;
mod tooltip;
mod tracker;

pub use timers::{TimerId, TimerKind, Timers};
pub use tooltip::{Tooltip, TooltipAnchor};
pub use tracker::{extract_input, first_token, LineTracker, Observation};

use crate::catalog::{self, CatalogEntry};
use crate::shell::{
    ChannelClosed, ChannelEvent, ChannelEvents, ShellCapability, ShellChannel, SpawnSpec,
};
use crate::surface::{TermSize, TerminalSurface};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Ctrl-E (end of line) then Ctrl-U (kill to line start): clears the whole
/// readline input line
pub const CLEAR_LINE: &[u8] = b"\x05\x15";

pub const DEMO_BANNER: &str = "指令提示終端機已就緒（示範模式）\r\n\
(demo) 無法連線到 shell，改用示範模式：可以瀏覽指令說明，但不會執行任何指令。\r\n";

pub const CLOSED_NOTICE: &str = "[連線已關閉] connection closed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, no surface bound yet
    Unmounted,
    /// Surface bound and shell channel open
    Live,
    /// Surface bound, no shell capability
    Demo,
    /// Channel ended or never opened; surface still shows the notice
    Inert,
    TornDown,
}

/// Inputs a session reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Bytes produced by the user's keyboard
    Keystroke(Vec<u8>),
    Channel(ChannelEvent),
    /// The surface geometry changed
    SurfaceResized(TermSize),
    /// The surface's container changed; the surface refits itself
    WindowResized(TermSize),
    CursorMoved,
    Scrolled,
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub program: String,
    pub args: Vec<String>,
    pub environment: Vec<(String, String)>,
    pub workdir: Option<PathBuf>,
    pub debounce: Duration,
    pub insert_delay: Duration,
    pub prompt_markers: Vec<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            program: "/bin/sh".to_string(),
            args: vec!["-l".to_string()],
            environment: Vec::new(),
            workdir: None,
            debounce: Duration::from_millis(30),
            insert_delay: Duration::from_millis(50),
            prompt_markers: vec!["$ ".to_string(), "# ".to_string(), "% ".to_string()],
        }
    }
}

pub struct Session<S: TerminalSurface> {
    state: SessionState,
    capability: ShellCapability,
    options: SessionOptions,
    surface: Option<S>,
    channel: Option<Box<dyn ShellChannel>>,
    tracker: LineTracker,
    tooltip: Option<Tooltip>,
    selected: Option<&'static CatalogEntry>,
    hints: Vec<&'static str>,
    pending_insert: Option<String>,
    timers: Timers,
}

impl<S: TerminalSurface> Session<S> {
    pub fn new(capability: ShellCapability, options: SessionOptions) -> Self {
        let tracker = LineTracker::new(options.prompt_markers.clone());
        Self {
            state: SessionState::Unmounted,
            capability,
            options,
            surface: None,
            channel: None,
            tracker,
            tooltip: None,
            selected: None,
            hints: Vec::new(),
            pending_insert: None,
            timers: Timers::new(),
        }
    }

    /// Bind the surface and, when a shell is reachable, open the channel.
    ///
    /// Opening twice, or after teardown, is ignored.
    pub fn open(&mut self, mut surface: S, events: ChannelEvents) {
        if self.state != SessionState::Unmounted {
            tracing::debug!(state = ?self.state, "Ignoring open on a mounted session");
            return;
        }

        let shell = match &self.capability {
            ShellCapability::Remote(shell) => shell.clone(),
            ShellCapability::Unavailable => {
                tracing::info!("No shell capability, mounting in demo mode");
                surface.write(DEMO_BANNER.as_bytes());
                self.surface = Some(surface);
                self.state = SessionState::Demo;
                return;
            }
        };

        let spec = SpawnSpec {
            program: self.options.program.clone(),
            args: self.options.args.clone(),
            environment: self.options.environment.clone(),
            workdir: self.options.workdir.clone(),
            size: surface.size(),
            pty: true,
        };

        match shell.open(spec, events) {
            Ok(channel) => {
                tracing::info!(program = %self.options.program, "Session live");
                self.channel = Some(channel);
                self.state = SessionState::Live;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open shell channel");
                let notice = format!("{}\r\n[錯誤] {}\r\n", CLOSED_NOTICE, e);
                surface.write(notice.as_bytes());
                self.state = SessionState::Inert;
            }
        }
        self.surface = Some(surface);
    }

    /// Feed one event. Ignored unless the surface is mounted.
    pub fn handle(&mut self, event: SessionEvent, now: Instant) {
        if !self.is_mounted() {
            tracing::trace!(state = ?self.state, ?event, "Dropping event");
            return;
        }

        match event {
            SessionEvent::Keystroke(bytes) => self.on_keystroke(&bytes, now),
            SessionEvent::Channel(ChannelEvent::Output(bytes)) => self.on_output(&bytes, now),
            SessionEvent::Channel(ChannelEvent::Closed(closed)) => self.on_closed(closed),
            SessionEvent::SurfaceResized(size) => {
                self.relay_resize(size);
                self.schedule_read(now);
            }
            SessionEvent::WindowResized(container) => {
                let fitted = self.surface.as_mut().and_then(|s| s.fit(container));
                if let Some(size) = fitted {
                    self.relay_resize(size);
                    self.schedule_read(now);
                }
            }
            SessionEvent::CursorMoved | SessionEvent::Scrolled => self.schedule_read(now),
        }
    }

    /// Scroll the surface view; a view that moved re-reads the input line
    pub fn scroll_view(&mut self, lines: i32, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        let scrolled = self
            .surface
            .as_mut()
            .map(|s| s.scroll(lines).scrolled)
            .unwrap_or(false);
        if scrolled {
            self.schedule_read(now);
        }
    }

    /// Replace the shell's input line with `command`, without submitting it
    pub fn insert_template(&mut self, command: &str, now: Instant) {
        match self.state {
            SessionState::Demo => {
                self.selected = first_token(command).and_then(catalog::lookup);
                return;
            }
            SessionState::Live => {}
            _ => return,
        }

        self.send(CLEAR_LINE);
        self.pending_insert = Some(command.to_string());
        self.timers
            .arm(TimerKind::Insert, now + self.options.insert_delay);
        // A read now would see the cleared line and undo the optimistic update
        self.timers.cancel(TimerKind::Debounce);

        let observation = self.tracker.observe_input(command);
        self.apply(observation);
        if let Some(surface) = self.surface.as_mut() {
            surface.focus();
        }
    }

    /// Earliest armed deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Run every timer due at `now`
    pub fn fire_due(&mut self, now: Instant) {
        if !self.is_mounted() {
            return;
        }

        for (kind, id) in self.timers.take_due(now) {
            tracing::trace!(?kind, ?id, "Timer fired");
            match kind {
                TimerKind::Debounce => self.recompute(),
                TimerKind::Insert => {
                    if let Some(command) = self.pending_insert.take() {
                        self.send(command.as_bytes());
                        self.schedule_read(now);
                    }
                }
            }
        }
    }

    /// Close the channel, dispose the surface, cancel every timer.
    ///
    /// Safe before `open` and safe to repeat.
    pub fn teardown(&mut self) {
        if self.state == SessionState::TornDown {
            return;
        }
        if let Some(mut channel) = self.channel.take() {
            channel.close();
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.dispose();
        }
        self.timers.clear();
        self.pending_insert = None;
        self.tooltip = None;
        self.hints.clear();
        self.state = SessionState::TornDown;
        tracing::debug!("Session torn down");
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Entry for the explanation panel
    pub fn selected(&self) -> Option<&'static CatalogEntry> {
        self.selected
    }

    /// Catalog names the current first token is a prefix of
    pub fn completion_hints(&self) -> &[&'static str] {
        &self.hints
    }

    pub fn last_line(&self) -> &str {
        self.tracker.last_line()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn has_pending_insert(&self) -> bool {
        self.pending_insert.is_some()
    }

    fn is_mounted(&self) -> bool {
        matches!(
            self.state,
            SessionState::Live | SessionState::Demo | SessionState::Inert
        )
    }

    fn on_keystroke(&mut self, bytes: &[u8], now: Instant) {
        if self.state != SessionState::Live {
            return;
        }
        let submit = is_submit(bytes);
        if submit && self.pending_insert.take().is_some() {
            // The user submitted the cleared line; the template must not
            // land on the next prompt
            self.timers.cancel(TimerKind::Insert);
            tracing::debug!("Submit during template insertion, dropping the template");
        }
        self.send(bytes);

        if submit {
            self.tooltip = None;
            self.hints.clear();
            self.tracker.reset();
            self.timers.cancel(TimerKind::Debounce);
        } else {
            self.schedule_read(now);
        }
    }

    fn on_output(&mut self, bytes: &[u8], now: Instant) {
        if self.state != SessionState::Live {
            return;
        }
        let activity = match self.surface.as_mut() {
            Some(surface) => surface.write(bytes),
            None => return,
        };
        if activity.any() {
            self.schedule_read(now);
        }
    }

    fn on_closed(&mut self, closed: ChannelClosed) {
        if self.state != SessionState::Live {
            return;
        }

        let mut notice = format!("\r\n{}\r\n", CLOSED_NOTICE);
        match closed.message.as_deref().map(str::trim) {
            Some(message) if !message.is_empty() => {
                tracing::warn!(%message, exit_status = ?closed.exit_status, "Shell channel failed");
                notice.push_str(&format!("[錯誤] {}\r\n", message));
            }
            _ => match closed.exit_status {
                Some(status) if status != 0 => {
                    // Output already explains the failure; nothing rendered
                    tracing::warn!(exit_status = status, "Shell exited non-zero without a message");
                }
                _ => tracing::info!(exit_status = ?closed.exit_status, "Shell exited"),
            },
        }

        if let Some(surface) = self.surface.as_mut() {
            surface.write(notice.as_bytes());
        }
        if let Some(mut channel) = self.channel.take() {
            channel.close();
        }
        self.timers.clear();
        self.pending_insert = None;
        self.tooltip = None;
        self.hints.clear();
        self.state = SessionState::Inert;
    }

    fn send(&mut self, bytes: &[u8]) {
        if let Some(channel) = self.channel.as_mut() {
            if let Err(e) = channel.send(bytes) {
                tracing::warn!(error = %e, len = bytes.len(), "Shell send failed");
            }
        }
    }

    fn relay_resize(&mut self, size: TermSize) {
        if let Some(channel) = self.channel.as_mut() {
            if let Err(e) = channel.control_resize(size) {
                tracing::warn!(error = %e, rows = size.rows, cols = size.cols, "Pty resize failed");
            }
        }
    }

    fn schedule_read(&mut self, now: Instant) {
        // While a template is pending the line is known to be cleared; the
        // insert timer re-arms the read once the template is written
        if self.state != SessionState::Live || self.pending_insert.is_some() {
            return;
        }
        self.timers
            .arm(TimerKind::Debounce, now + self.options.debounce);
    }

    fn recompute(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        match surface.current_line_text() {
            Ok(line) => {
                let observation = self.tracker.observe_cursor_line(&line);
                self.apply(observation);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Could not read the cursor line");
                self.tracker.reset();
                self.tooltip = None;
                self.selected = None;
                self.hints.clear();
            }
        }
    }

    fn apply(&mut self, observation: Observation) {
        let Observation::Changed(line) = observation else {
            return;
        };

        let token = first_token(&line);
        match token.and_then(catalog::lookup) {
            Some(entry) => {
                let height = self
                    .surface
                    .as_ref()
                    .map(|s| s.rendered_height())
                    .unwrap_or(0);
                self.tooltip = Some(Tooltip {
                    entry,
                    anchor: TooltipAnchor::below(height),
                });
                self.selected = Some(entry);
                self.hints.clear();
            }
            None => {
                self.tooltip = None;
                self.selected = None;
                self.hints = token.map(catalog::match_prefix).unwrap_or_default();
            }
        }
    }
}

impl<S: TerminalSurface> Drop for Session<S> {
    fn drop(&mut self) {
        if let Some(mut channel) = self.channel.take() {
            channel.close();
        }
    }
}

fn is_submit(bytes: &[u8]) -> bool {
    bytes.iter().any(|b| *b == b'\r' || *b == b'\n')
}
