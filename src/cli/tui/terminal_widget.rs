// Terminal Widget - draws a vt100 screen into the terminal pane

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Renders the visible rows of a vt100 screen (scrollback offset included)
pub struct TerminalWidget<'a> {
    screen: &'a vt100::Screen,
}

impl<'a> TerminalWidget<'a> {
    pub fn new(screen: &'a vt100::Screen) -> Self {
        Self { screen }
    }
}

fn to_color(color: vt100::Color) -> Color {
    match color {
        vt100::Color::Default => Color::Reset,
        vt100::Color::Idx(idx) => Color::Indexed(idx),
        vt100::Color::Rgb(r, g, b) => Color::Rgb(r, g, b),
    }
}

fn cell_style(cell: &vt100::Cell) -> Style {
    let mut style = Style::default()
        .fg(to_color(cell.fgcolor()))
        .bg(to_color(cell.bgcolor()));
    if cell.bold() {
        style = style.add_modifier(Modifier::BOLD);
    }
    if cell.italic() {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if cell.underline() {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if cell.inverse() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

impl<'a> Widget for TerminalWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (rows, cols) = self.screen.size();
        let height = rows.min(area.height);
        let width = cols.min(area.width);

        for row in 0..height {
            for col in 0..width {
                let Some(cell) = self.screen.cell(row, col) else {
                    continue;
                };
                if cell.is_wide_continuation() {
                    continue;
                }
                let contents = cell.contents();
                let symbol: &str = if contents.is_empty() { " " } else { &contents };
                buf.set_string(area.x + col, area.y + row, symbol, cell_style(cell));
            }
        }
    }
}

/// Cursor cell inside `area`, when it should be shown
pub fn cursor_position(screen: &vt100::Screen, area: Rect) -> Option<(u16, u16)> {
    if screen.hide_cursor() || screen.scrollback() > 0 {
        return None;
    }
    let (row, col) = screen.cursor_position();
    if row >= area.height || col >= area.width {
        return None;
    }
    Some((area.x + col, area.y + row))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_with(bytes: &[u8]) -> vt100::Parser {
        let mut parser = vt100::Parser::new(3, 10, 0);
        parser.process(bytes);
        parser
    }

    #[test]
    fn test_renders_text_and_colors() {
        let parser = screen_with(b"\x1b[31mred\x1b[0m ok");
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        TerminalWidget::new(parser.screen()).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "r");
        assert_eq!(buf[(0, 0)].fg, Color::Indexed(1));
        assert_eq!(buf[(4, 0)].symbol(), "o");
        assert_eq!(buf[(4, 0)].fg, Color::Reset);
    }

    #[test]
    fn test_clips_to_area() {
        let parser = screen_with(b"0123456789");
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        TerminalWidget::new(parser.screen()).render(area, &mut buf);

        assert_eq!(buf[(3, 0)].symbol(), "3");
    }

    #[test]
    fn test_cursor_position_offsets_area() {
        let parser = screen_with(b"ab");
        let area = Rect::new(2, 5, 10, 3);
        assert_eq!(cursor_position(parser.screen(), area), Some((4, 5)));

        let hidden = screen_with(b"ab\x1b[?25l");
        assert_eq!(cursor_position(hidden.screen(), area), None);
    }
}
