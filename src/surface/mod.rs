// Terminal surface - the emulator a session renders into
//
// The session only talks to the `TerminalSurface` trait. `VtSurface` is the
// shipped implementation; tests use in-memory doubles.

pub mod vt;

pub use vt::VtSurface;

use thiserror::Error;

/// Terminal geometry in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermSize {
    pub rows: u16,
    pub cols: u16,
}

impl TermSize {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// What a write or scroll did to the view
///
/// The tracker re-reads the input line when the cursor moved or the view
/// scrolled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceActivity {
    pub cursor_moved: bool,
    pub scrolled: bool,
}

impl SurfaceActivity {
    pub fn any(&self) -> bool {
        self.cursor_moved || self.scrolled
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("terminal surface requires non-zero rows and columns (got {rows}x{cols})")]
    ZeroSize { rows: u16, cols: u16 },

    #[error("terminal surface has been disposed")]
    Disposed,

    #[error("cursor row {row} is outside the {rows}-row buffer")]
    CursorOutOfBounds { row: u16, rows: u16 },
}

/// Terminal emulator surface bound to one session
pub trait TerminalSurface {
    /// Render bytes verbatim
    fn write(&mut self, bytes: &[u8]) -> SurfaceActivity;

    fn size(&self) -> TermSize;

    /// Text of the row holding the cursor, trailing blanks removed
    fn current_line_text(&mut self) -> Result<String, SurfaceError>;

    /// Fit the surface to its container. Returns the new geometry when it
    /// changed.
    fn fit(&mut self, container: TermSize) -> Option<TermSize>;

    /// Scroll the view by `lines` (positive = back into history)
    fn scroll(&mut self, lines: i32) -> SurfaceActivity;

    fn focus(&mut self);

    fn is_focused(&self) -> bool;

    /// Release the emulator. Writes after disposal are ignored.
    fn dispose(&mut self);

    /// Height of the rendered surface in rows, used to anchor the tooltip
    /// directly below it
    fn rendered_height(&self) -> u16;
}
