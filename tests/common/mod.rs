// Shared test doubles: an in-memory shell and surface backed by one line model
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use teachterm::session::{Session, SessionOptions, CLEAR_LINE};
use teachterm::shell::{
    ChannelEvents, RemoteShell, ShellCapability, ShellChannel, ShellError, SpawnSpec,
};
use teachterm::surface::{SurfaceActivity, SurfaceError, TermSize, TerminalSurface};

pub const PROMPT: &str = "user@host:~$ ";

/// Everything the doubles observed, shared between shell and surface
#[derive(Debug, Default)]
pub struct Recorder {
    /// Readline-style input line the fake shell holds
    pub input_line: String,
    /// Every `send` call, in order
    pub sends: Vec<Vec<u8>>,
    pub resizes: Vec<TermSize>,
    pub specs: Vec<SpawnSpec>,
    pub close_calls: usize,
    /// Every `write` into the surface, in order
    pub writes: Vec<Vec<u8>>,
    pub focused: bool,
    pub disposed: bool,
    pub reads: usize,
    pub fail_reads: bool,
}

impl Recorder {
    pub fn sent_bytes(&self) -> Vec<u8> {
        self.sends.concat()
    }

    pub fn written_text(&self) -> String {
        String::from_utf8_lossy(&self.writes.concat()).into_owned()
    }

    fn apply_input(&mut self, data: &[u8]) {
        let mut rest = data;
        while !rest.is_empty() {
            if rest.starts_with(CLEAR_LINE) {
                self.input_line.clear();
                rest = &rest[CLEAR_LINE.len()..];
                continue;
            }
            match rest[0] {
                b'\r' | b'\n' => self.input_line.clear(),
                0x7f => {
                    self.input_line.pop();
                }
                b if b >= 0x20 => self.input_line.push(b as char),
                _ => {}
            }
            rest = &rest[1..];
        }
    }
}

pub type Shared = Arc<Mutex<Recorder>>;

pub struct MockShell {
    pub recorder: Shared,
    pub fail_open: bool,
}

impl RemoteShell for MockShell {
    fn open(
        &self,
        spec: SpawnSpec,
        _events: ChannelEvents,
    ) -> Result<Box<dyn ShellChannel>, ShellError> {
        self.recorder.lock().unwrap().specs.push(spec);
        if self.fail_open {
            return Err(ShellError::Spawn("permission denied".to_string()));
        }
        Ok(Box::new(MockChannel {
            recorder: self.recorder.clone(),
            closed: false,
        }))
    }
}

pub struct MockChannel {
    recorder: Shared,
    closed: bool,
}

impl ShellChannel for MockChannel {
    fn send(&mut self, data: &[u8]) -> Result<(), ShellError> {
        if self.closed {
            return Err(ShellError::Closed);
        }
        let mut recorder = self.recorder.lock().unwrap();
        recorder.sends.push(data.to_vec());
        recorder.apply_input(data);
        Ok(())
    }

    fn control_resize(&mut self, size: TermSize) -> Result<(), ShellError> {
        self.recorder.lock().unwrap().resizes.push(size);
        Ok(())
    }

    fn close(&mut self) {
        self.recorder.lock().unwrap().close_calls += 1;
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Surface whose cursor line is the prompt followed by the shell's input line
pub struct MockSurface {
    recorder: Shared,
    size: TermSize,
}

impl MockSurface {
    pub fn new(recorder: Shared) -> Self {
        Self {
            recorder,
            size: TermSize::new(24, 80),
        }
    }
}

impl TerminalSurface for MockSurface {
    fn write(&mut self, bytes: &[u8]) -> SurfaceActivity {
        let mut recorder = self.recorder.lock().unwrap();
        if recorder.disposed {
            return SurfaceActivity::default();
        }
        recorder.writes.push(bytes.to_vec());
        SurfaceActivity {
            cursor_moved: !bytes.is_empty(),
            scrolled: false,
        }
    }

    fn size(&self) -> TermSize {
        self.size
    }

    fn current_line_text(&mut self) -> Result<String, SurfaceError> {
        let mut recorder = self.recorder.lock().unwrap();
        recorder.reads += 1;
        if recorder.disposed {
            return Err(SurfaceError::Disposed);
        }
        if recorder.fail_reads {
            return Err(SurfaceError::CursorOutOfBounds { row: 99, rows: 24 });
        }
        Ok(format!("{}{}", PROMPT, recorder.input_line)
            .trim_end()
            .to_string())
    }

    fn fit(&mut self, container: TermSize) -> Option<TermSize> {
        if container == self.size || container.is_empty() {
            return None;
        }
        self.size = container;
        Some(container)
    }

    fn scroll(&mut self, lines: i32) -> SurfaceActivity {
        SurfaceActivity {
            cursor_moved: false,
            scrolled: lines != 0,
        }
    }

    fn focus(&mut self) {
        self.recorder.lock().unwrap().focused = true;
    }

    fn is_focused(&self) -> bool {
        self.recorder.lock().unwrap().focused
    }

    fn dispose(&mut self) {
        self.recorder.lock().unwrap().disposed = true;
    }

    fn rendered_height(&self) -> u16 {
        self.size.rows
    }
}

/// Test clock: a fixed origin plus explicit advances
pub struct Clock {
    now: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn advance(&mut self, millis: u64) -> Instant {
        self.now += Duration::from_millis(millis);
        self.now
    }
}

pub struct Harness {
    pub session: Session<MockSurface>,
    pub recorder: Shared,
    pub clock: Clock,
}

impl Harness {
    /// Session opened against a working mock shell
    pub fn live() -> Self {
        Self::build(ShellKind::Working, true)
    }

    pub fn demo() -> Self {
        Self::build(ShellKind::Unavailable, true)
    }

    pub fn failing() -> Self {
        Self::build(ShellKind::FailsToOpen, true)
    }

    /// Session that has not been opened yet
    pub fn unmounted() -> Self {
        Self::build(ShellKind::Working, false)
    }

    fn build(kind: ShellKind, open: bool) -> Self {
        let recorder: Shared = Arc::default();
        let capability = match kind {
            ShellKind::Unavailable => ShellCapability::Unavailable,
            ShellKind::Working | ShellKind::FailsToOpen => {
                ShellCapability::Remote(Arc::new(MockShell {
                    recorder: recorder.clone(),
                    fail_open: kind == ShellKind::FailsToOpen,
                }))
            }
        };

        let mut harness = Self {
            session: Session::new(capability, SessionOptions::default()),
            recorder,
            clock: Clock::new(),
        };
        if open {
            harness.open();
        }
        harness
    }

    pub fn open(&mut self) {
        let (events, _rx) = tokio::sync::mpsc::unbounded_channel();
        let surface = MockSurface::new(self.recorder.clone());
        self.session.open(surface, events);
    }

    pub fn recorder(&self) -> std::sync::MutexGuard<'_, Recorder> {
        self.recorder.lock().unwrap()
    }

    /// Advance the clock by `millis` and fire whatever became due
    pub fn settle(&mut self, millis: u64) {
        let now = self.clock.advance(millis);
        self.session.fire_due(now);
    }

    /// Run timers until none remain
    pub fn settle_all(&mut self) {
        while let Some(deadline) = self.session.next_deadline() {
            let now = self.clock.now();
            if deadline > now {
                self.clock.advance((deadline - now).as_millis() as u64 + 1);
            }
            self.session.fire_due(self.clock.now());
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ShellKind {
    Working,
    Unavailable,
    FailsToOpen,
}
