// VtSurface - vt100 parser backed terminal surface with scrollback

use super::{SurfaceActivity, SurfaceError, TermSize, TerminalSurface};

pub struct VtSurface {
    parser: vt100::Parser,
    focused: bool,
    disposed: bool,
}

impl VtSurface {
    pub fn new(size: TermSize, scrollback: usize) -> Result<Self, SurfaceError> {
        if size.is_empty() {
            return Err(SurfaceError::ZeroSize {
                rows: size.rows,
                cols: size.cols,
            });
        }

        Ok(Self {
            parser: vt100::Parser::new(size.rows, size.cols, scrollback),
            focused: false,
            disposed: false,
        })
    }

    /// Screen state for rendering
    pub fn screen(&self) -> &vt100::Screen {
        self.parser.screen()
    }

    /// Rows currently scrolled back into history (0 = live view)
    pub fn scrollback_offset(&self) -> usize {
        self.parser.screen().scrollback()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn cursor(&self) -> (u16, u16) {
        self.parser.screen().cursor_position()
    }
}

impl TerminalSurface for VtSurface {
    fn write(&mut self, bytes: &[u8]) -> SurfaceActivity {
        if self.disposed || bytes.is_empty() {
            return SurfaceActivity::default();
        }

        let before = self.cursor();
        let offset_before = self.scrollback_offset();
        self.parser.process(bytes);

        SurfaceActivity {
            cursor_moved: self.cursor() != before,
            scrolled: self.scrollback_offset() != offset_before,
        }
    }

    fn size(&self) -> TermSize {
        let (rows, cols) = self.parser.screen().size();
        TermSize { rows, cols }
    }

    fn current_line_text(&mut self) -> Result<String, SurfaceError> {
        if self.disposed {
            return Err(SurfaceError::Disposed);
        }

        // Visible rows follow the scrollback offset; the cursor lives on the
        // live grid, so read with the view pinned to the bottom.
        let offset = self.scrollback_offset();
        let screen = self.parser.screen_mut();
        screen.set_scrollback(0);
        let (row, _) = screen.cursor_position();
        let (rows, cols) = screen.size();
        let line = screen.rows(0, cols).nth(usize::from(row));
        screen.set_scrollback(offset);

        line.map(|l| l.trim_end().to_string())
            .ok_or(SurfaceError::CursorOutOfBounds { row, rows })
    }

    fn fit(&mut self, container: TermSize) -> Option<TermSize> {
        if self.disposed || container.is_empty() || container == self.size() {
            return None;
        }

        self.parser
            .screen_mut()
            .set_size(container.rows, container.cols);
        Some(self.size())
    }

    fn scroll(&mut self, lines: i32) -> SurfaceActivity {
        if self.disposed || lines == 0 {
            return SurfaceActivity::default();
        }

        let before = self.scrollback_offset();
        let target = if lines > 0 {
            before.saturating_add(lines.unsigned_abs() as usize)
        } else {
            before.saturating_sub(lines.unsigned_abs() as usize)
        };
        // vt100 clamps the offset to the available history
        self.parser.screen_mut().set_scrollback(target);

        SurfaceActivity {
            cursor_moved: false,
            scrolled: self.scrollback_offset() != before,
        }
    }

    fn focus(&mut self) {
        if !self.disposed {
            self.focused = true;
        }
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.focused = false;
    }

    fn rendered_height(&self) -> u16 {
        self.size().rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(rows: u16, cols: u16) -> VtSurface {
        VtSurface::new(TermSize::new(rows, cols), 64).unwrap()
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = VtSurface::new(TermSize::new(0, 80), 10).err();
        assert_eq!(err, Some(SurfaceError::ZeroSize { rows: 0, cols: 80 }));
    }

    #[test]
    fn test_current_line_follows_cursor() {
        let mut s = surface(4, 40);
        s.write(b"first line\r\nuser@host:~$ ls -la");
        assert_eq!(s.current_line_text().unwrap(), "user@host:~$ ls -la");
    }

    #[test]
    fn test_current_line_after_clear_sequence() {
        let mut s = surface(4, 40);
        s.write(b"$ abc\r\x1b[2K$ z");
        assert_eq!(s.current_line_text().unwrap(), "$ z");
    }

    #[test]
    fn test_write_reports_cursor_movement() {
        let mut s = surface(4, 40);
        assert!(s.write(b"x").cursor_moved);
        assert!(!s.write(b"").cursor_moved);
        // SGR only, cursor stays put
        assert!(!s.write(b"\x1b[1m").cursor_moved);
    }

    #[test]
    fn test_fit_reports_only_changes() {
        let mut s = surface(24, 80);
        assert_eq!(s.fit(TermSize::new(24, 80)), None);
        assert_eq!(s.fit(TermSize::new(0, 80)), None);
        assert_eq!(s.fit(TermSize::new(40, 120)), Some(TermSize::new(40, 120)));
        assert_eq!(s.size(), TermSize::new(40, 120));
        assert_eq!(s.rendered_height(), 40);
    }

    #[test]
    fn test_scroll_is_clamped_to_history() {
        let mut s = surface(2, 20);
        assert!(!s.scroll(5).scrolled);

        for i in 0..10 {
            s.write(format!("line-{i}\r\n").as_bytes());
        }
        assert!(s.scroll(3).scrolled);
        assert_eq!(s.scrollback_offset(), 3);
        assert!(s.scroll(-10).scrolled);
        assert_eq!(s.scrollback_offset(), 0);
    }

    #[test]
    fn test_current_line_ignores_scrollback_view() {
        let mut s = surface(2, 20);
        for i in 0..10 {
            s.write(format!("line-{i}\r\n").as_bytes());
        }
        s.write(b"$ pwd");
        s.scroll(4);
        assert_eq!(s.current_line_text().unwrap(), "$ pwd");
        assert_eq!(s.scrollback_offset(), 4);
    }

    #[test]
    fn test_dispose_ignores_writes() {
        let mut s = surface(4, 20);
        s.write(b"before");
        s.focus();
        s.dispose();

        assert!(!s.write(b"after").any());
        assert!(!s.is_focused());
        assert_eq!(s.current_line_text(), Err(SurfaceError::Disposed));
        s.focus();
        assert!(!s.is_focused());
    }
}
