// Palette Widget - category selector and command list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::catalog::{CatalogEntry, CategoryFilter};
use crate::config::DangerColors;

pub struct PaletteWidget<'a> {
    entries: &'a [&'static CatalogEntry],
    category: CategoryFilter,
    selected: usize,
    focused: bool,
    colors: &'a DangerColors,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(
        entries: &'a [&'static CatalogEntry],
        category: CategoryFilter,
        selected: usize,
        focused: bool,
        colors: &'a DangerColors,
    ) -> Self {
        Self {
            entries,
            category,
            selected,
            focused,
            colors,
        }
    }
}

impl<'a> Widget for PaletteWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.colors.ui.accent.to_color()
        } else {
            self.colors.ui.border.to_color()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" 指令清單 ─ {} (F3) ", self.category.label()));

        let name_width = self.entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.danger.icon()),
                        Style::default().fg(self.colors.for_level(entry.danger)),
                    ),
                    Span::styled(
                        format!("{:<width$}  ", entry.name, width = name_width),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(entry.template),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default()
                .fg(self.colors.ui.accent.to_color())
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("› ");

        let mut state = ListState::default();
        if !self.entries.is_empty() {
            state.select(Some(self.selected.min(self.entries.len() - 1)));
        }
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, Category};

    fn row_text(buf: &Buffer, y: u16) -> String {
        let row: String = (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect();
        row.replace(' ', "")
    }

    #[test]
    fn test_lists_filtered_entries_with_selection() {
        let entries = catalog::filter(CategoryFilter::Only(Category::Permission));
        let colors = DangerColors::default();
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);

        PaletteWidget::new(
            &entries,
            CategoryFilter::Only(Category::Permission),
            1,
            true,
            &colors,
        )
        .render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("權限設定"));
        assert!(row_text(&buf, 1).contains("chmod755script.sh"));
        let selected = row_text(&buf, 2);
        assert!(selected.contains("›"));
        assert!(selected.contains("chown"));
    }
}
