// Info widgets - explanation panel and the tooltip row under the terminal

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::catalog::CatalogEntry;
use crate::config::DangerColors;
use crate::session::Tooltip;

const EMPTY_HINT: &str = "輸入指令，或按 F2 從指令清單選擇，這裡會顯示說明。";

/// Danger badge, description, template and detail for one entry
pub struct InfoWidget<'a> {
    entry: Option<&'static CatalogEntry>,
    colors: &'a DangerColors,
}

impl<'a> InfoWidget<'a> {
    pub fn new(entry: Option<&'static CatalogEntry>, colors: &'a DangerColors) -> Self {
        Self { entry, colors }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let Some(entry) = self.entry else {
            return vec![Line::from(Span::styled(
                EMPTY_HINT,
                Style::default().fg(self.colors.ui.hint.to_color()),
            ))];
        };

        let danger_style = Style::default()
            .fg(self.colors.for_level(entry.danger))
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(entry.danger.badge(), danger_style),
                Span::raw("  "),
                Span::styled(
                    entry.danger.description(),
                    Style::default().fg(self.colors.ui.hint.to_color()),
                ),
            ]),
            Line::from(Span::styled(
                entry.summary,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("範本："),
                Span::styled(
                    entry.template,
                    Style::default().fg(self.colors.ui.accent.to_color()),
                ),
            ]),
            Line::default(),
        ];
        lines.extend(entry.detail.lines().map(|l| Line::from(l.to_string())));
        lines
    }
}

impl<'a> Widget for InfoWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.entry {
            Some(entry) => format!(" 說明 ─ {} ", entry.name),
            None => " 說明 ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.ui.border.to_color()))
            .title(title);

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// One row: the tooltip when visible, else completion candidates
pub struct TooltipWidget<'a> {
    tooltip: Option<&'a Tooltip>,
    hints: &'a [&'static str],
    colors: &'a DangerColors,
}

impl<'a> TooltipWidget<'a> {
    pub fn new(
        tooltip: Option<&'a Tooltip>,
        hints: &'a [&'static str],
        colors: &'a DangerColors,
    ) -> Self {
        Self {
            tooltip,
            hints,
            colors,
        }
    }
}

impl<'a> Widget for TooltipWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if let Some(tooltip) = self.tooltip {
            let entry = tooltip.entry;
            Line::from(vec![
                Span::styled(
                    entry.danger.badge(),
                    Style::default()
                        .fg(self.colors.for_level(entry.danger))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(entry.summary),
            ])
        } else if !self.hints.is_empty() {
            Line::from(Span::styled(
                format!("可能的補齊選項：{}", self.hints.join("  ")),
                Style::default().fg(self.colors.ui.hint.to_color()),
            ))
        } else {
            return;
        };

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::session::TooltipAnchor;

    /// Buffer contents with blanks removed (wide glyphs pad their neighbours)
    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
        }
        text.replace(' ', "")
    }

    #[test]
    fn test_info_shows_badge_template_and_detail() {
        let colors = DangerColors::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        InfoWidget::new(catalog::lookup("rm"), &colors).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("高危險度"));
        assert!(text.contains("rmtest.txt"));
        assert!(text.contains("基本用法"));
    }

    #[test]
    fn test_info_without_entry_shows_hint() {
        let colors = DangerColors::default();
        let area = Rect::new(0, 0, 80, 4);
        let mut buf = Buffer::empty(area);
        InfoWidget::new(None, &colors).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("F2"));
    }

    #[test]
    fn test_tooltip_row() {
        let colors = DangerColors::default();
        let tooltip = Tooltip {
            entry: catalog::lookup("ls").unwrap(),
            anchor: TooltipAnchor::below(10),
        };
        let area = Rect::new(0, 0, 60, 1);

        let mut buf = Buffer::empty(area);
        TooltipWidget::new(Some(&tooltip), &[], &colors).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("低危險度"));
        assert!(text.contains("列出目錄內容"));

        let mut buf = Buffer::empty(area);
        TooltipWidget::new(None, &["chmod", "chown"], &colors).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("chmodchown"));

        let mut buf = Buffer::empty(area);
        TooltipWidget::new(None, &[], &colors).render(area, &mut buf);
        assert_eq!(buffer_text(&buf), "");
    }
}
