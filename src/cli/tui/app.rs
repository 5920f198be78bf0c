// App state - focus, palette selection and key routing around one session
//
// Everything here is synchronous and IO-free; the host loop in `mod.rs`
// owns the terminal and the event sources.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

use super::info_widget::{InfoWidget, TooltipWidget};
use super::keys::key_to_pty_bytes;
use super::palette_widget::PaletteWidget;
use super::terminal_widget::{cursor_position, TerminalWidget};
use crate::catalog::{self, CatalogEntry, CategoryFilter};
use crate::config::DangerColors;
use crate::session::{Session, SessionEvent, SessionState};
use crate::shell::ChannelEvent;
use crate::surface::{TermSize, TerminalSurface, VtSurface};

/// Height of the palette / explanation row
const BOTTOM_HEIGHT: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Terminal,
    Palette,
}

/// Screen regions, computed the same way for drawing and for resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub terminal: Rect,
    pub tooltip: Rect,
    pub palette: Rect,
    pub info: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // Title
                Constraint::Min(3),                // Terminal pane
                Constraint::Length(1),             // Tooltip
                Constraint::Length(BOTTOM_HEIGHT), // Palette + explanation
                Constraint::Length(1),             // Key hints
            ])
            .split(area);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[3]);

        Self {
            title: rows[0],
            terminal: rows[1],
            tooltip: rows[2],
            palette: bottom[0],
            info: bottom[1],
            status: rows[4],
        }
    }

    /// Cells available to the emulator (pane minus its border)
    pub fn terminal_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.terminal)
    }

    pub fn terminal_size(&self) -> TermSize {
        let inner = self.terminal_inner();
        TermSize::new(inner.height.max(1), inner.width.max(1))
    }
}

pub struct App {
    session: Session<VtSurface>,
    colors: DangerColors,
    focus: Focus,
    category: CategoryFilter,
    palette_index: usize,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session<VtSurface>, colors: DangerColors) -> Self {
        Self {
            session,
            colors,
            focus: Focus::Terminal,
            category: CategoryFilter::All,
            palette_index: 0,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session<VtSurface> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<VtSurface> {
        &mut self.session
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn palette_entries(&self) -> Vec<&'static CatalogEntry> {
        catalog::filter(self.category)
    }

    pub fn highlighted(&self) -> Option<&'static CatalogEntry> {
        self.palette_entries().get(self.palette_index).copied()
    }

    /// Palette highlight while browsing, else what the user is typing
    pub fn info_entry(&self) -> Option<&'static CatalogEntry> {
        match self.focus {
            Focus::Palette => self.highlighted(),
            Focus::Terminal => self.session.selected(),
        }
    }

    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event, screen: Rect, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Resize(cols, rows) => {
                self.handle_resize(Rect::new(screen.x, screen.y, cols, rows), now)
            }
            Event::Paste(text) if self.focus == Focus::Terminal => {
                self.session
                    .handle(SessionEvent::Keystroke(text.into_bytes()), now);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::F(10), _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::F(2), _) => {
                self.toggle_focus();
                return;
            }
            (KeyCode::F(3), _) => {
                self.category = self.category.next();
                self.palette_index = 0;
                return;
            }
            (KeyCode::PageUp, KeyModifiers::SHIFT) => {
                let lines = self.half_page();
                self.session.scroll_view(lines, now);
                return;
            }
            (KeyCode::PageDown, KeyModifiers::SHIFT) => {
                let lines = self.half_page();
                self.session.scroll_view(-lines, now);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Terminal => {
                if let Some(bytes) = key_to_pty_bytes(key.code, key.modifiers) {
                    self.session.handle(SessionEvent::Keystroke(bytes), now);
                }
            }
            Focus::Palette => self.handle_palette_key(key, now),
        }
    }

    pub fn handle_channel(&mut self, event: ChannelEvent, now: Instant) {
        self.session.handle(SessionEvent::Channel(event), now);
    }

    /// The whole screen changed size; refit the terminal pane
    pub fn handle_resize(&mut self, screen: Rect, now: Instant) {
        let size = AppLayout::new(screen).terminal_size();
        self.session.handle(SessionEvent::WindowResized(size), now);
    }

    fn handle_palette_key(&mut self, key: KeyEvent, now: Instant) {
        let count = self.palette_entries().len();
        match key.code {
            KeyCode::Up => {
                self.palette_index = self.palette_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.palette_index + 1 < count {
                    self.palette_index += 1;
                }
            }
            KeyCode::Home => self.palette_index = 0,
            KeyCode::End => self.palette_index = count.saturating_sub(1),
            KeyCode::Tab => {
                self.category = self.category.next();
                self.palette_index = 0;
            }
            KeyCode::Enter => {
                if let Some(entry) = self.highlighted() {
                    tracing::debug!(command = entry.name, "Inserting template from palette");
                    self.session.insert_template(entry.template, now);
                }
                self.focus_terminal();
            }
            KeyCode::Esc => self.focus_terminal(),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        match self.focus {
            Focus::Terminal => self.focus = Focus::Palette,
            Focus::Palette => self.focus_terminal(),
        }
    }

    fn focus_terminal(&mut self) {
        self.focus = Focus::Terminal;
        if let Some(surface) = self.session.surface_mut() {
            surface.focus();
        }
    }

    fn half_page(&self) -> i32 {
        let rows = self
            .session
            .surface()
            .map(|s| s.screen().size().0)
            .unwrap_or(2);
        i32::from((rows / 2).max(1))
    }

    fn status_text(&self) -> (String, &'static str) {
        let state = match self.session.state() {
            SessionState::Live => "● 已連線",
            SessionState::Demo => "◌ 示範模式",
            SessionState::Inert => "○ 連線已關閉",
            SessionState::Unmounted | SessionState::TornDown => "",
        };
        let keys = match self.focus {
            Focus::Terminal => {
                "F2 指令清單 · F3 切換分類 · Shift+PgUp/PgDn 捲動 · F10 離開".to_string()
            }
            Focus::Palette => {
                "↑/↓ 選擇 · Enter 插入指令 · Esc 返回終端 · F3 切換分類 · F10 離開".to_string()
            }
        };
        (keys, state)
    }

    pub fn draw(&self, frame: &mut Frame) {
        let layout = AppLayout::new(frame.area());
        let accent = self.colors.ui.accent.to_color();

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                " teachterm ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("指令教學終端機"),
        ]));
        frame.render_widget(title, layout.title);

        let pane_border = if self.focus == Focus::Terminal {
            accent
        } else {
            self.colors.ui.border.to_color()
        };
        let pane = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pane_border))
            .title(" 終端機 ");
        let inner = layout.terminal_inner();
        frame.render_widget(pane, layout.terminal);

        if let Some(surface) = self.session.surface() {
            frame.render_widget(TerminalWidget::new(surface.screen()), inner);
            if self.focus == Focus::Terminal && !surface.is_disposed() {
                if let Some(position) = cursor_position(surface.screen(), inner) {
                    frame.set_cursor_position(position);
                }
            }
        }

        // Tooltip anchor is relative to the pane's inner area; it lands on
        // the row just below the pane border
        let tooltip_area = match self.session.tooltip() {
            Some(tooltip) => {
                let y = inner.y + tooltip.anchor.row + 1;
                if y < layout.tooltip.y + layout.tooltip.height && y >= layout.tooltip.y {
                    Rect::new(inner.x + tooltip.anchor.column, y, inner.width, 1)
                } else {
                    layout.tooltip
                }
            }
            None => layout.tooltip,
        };
        frame.render_widget(
            TooltipWidget::new(
                self.session.tooltip(),
                self.session.completion_hints(),
                &self.colors,
            ),
            tooltip_area,
        );

        let entries = self.palette_entries();
        frame.render_widget(
            PaletteWidget::new(
                &entries,
                self.category,
                self.palette_index,
                self.focus == Focus::Palette,
                &self.colors,
            ),
            layout.palette,
        );
        frame.render_widget(InfoWidget::new(self.info_entry(), &self.colors), layout.info);

        let (keys, state) = self.status_text();
        let status = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", state), Style::default().fg(accent)),
            Span::styled(keys, Style::default().fg(self.colors.ui.hint.to_color())),
        ]));
        frame.render_widget(status, layout.status);
    }
}
