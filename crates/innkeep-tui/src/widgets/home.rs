//! Home screen widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use innkeep_app::store::BookingStore;

use crate::theme::{icons::IconSet, styles};

/// Landing screen: store summary and key hints.
pub struct HomeScreen<'a> {
    store: &'a BookingStore,
    icons: IconSet,
}

impl<'a> HomeScreen<'a> {
    pub fn new(store: &'a BookingStore, icons: IconSet) -> Self {
        Self { store, icons }
    }
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" innkeep ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let count_line = match self.store.len() {
            0 => Line::from(Span::styled(
                "No bookings yet",
                styles::text_muted(),
            )),
            1 => Line::from(Span::styled("1 booking", styles::text_primary())),
            n => Line::from(Span::styled(
                format!("{n} bookings"),
                styles::text_primary(),
            )),
        };

        let mut lines = vec![Line::default(), count_line];

        if let Some(entry) = self.store.last() {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", self.icons.bullet()), styles::text_muted()),
                Span::styled(format!("last: {} ", entry.name()), styles::text_secondary()),
                Span::styled(entry.date_range_label(), styles::text_muted()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("a", styles::keybinding()),
            Span::styled(" add booking   ", styles::text_secondary()),
            Span::styled("q", styles::keybinding()),
            Span::styled(" quit", styles::text_secondary()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_empty_store_hint() {
        let store = BookingStore::new();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);

        HomeScreen::new(&store, IconSet::new(true)).render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(content.contains("No bookings yet"));
        assert!(content.contains("add booking"));
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }
}
