//! Booking entry form widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use innkeep_app::draft::BookingDraft;
use innkeep_app::state::FormField;

use crate::theme::{icons::IconSet, palette, styles};

const RANGE_PLACEHOLDER: &str = "dd.mm.yyyy - dd.mm.yyyy";

/// The add-booking form: name field, read-only date-range field, save button.
pub struct BookingForm<'a> {
    draft: &'a BookingDraft,
    focus: FormField,
    icons: IconSet,
}

impl<'a> BookingForm<'a> {
    pub fn new(draft: &'a BookingDraft, focus: FormField, icons: IconSet) -> Self {
        Self {
            draft,
            focus,
            icons,
        }
    }

    fn focus_marker(&self, field: FormField) -> Span<'static> {
        if self.focus == field {
            Span::styled(format!("{} ", self.icons.focus()), styles::accent_bold())
        } else {
            Span::raw("  ")
        }
    }

    fn label_style(&self, field: FormField) -> Style {
        if self.focus == field {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        }
    }
}

impl Widget for BookingForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(true).title(" Add Booking Entry ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Name field; the label turns red after a failed submission until
        // the next attempt re-validates it.
        let name_label_style = if self.draft.name_invalid {
            styles::field_invalid()
        } else {
            self.label_style(FormField::Name)
        };
        let mut name_value = vec![Span::raw("  "), Span::styled(
            self.draft.name.clone(),
            styles::text_primary(),
        )];
        if self.focus == FormField::Name {
            name_value.push(Span::styled("▏", Style::default().fg(palette::ACCENT)));
        }

        // Date-range field: empty until both dates are chosen.
        let range_label = self.draft.range_label();
        let range_value = if range_label.is_empty() {
            Span::styled(RANGE_PLACEHOLDER, styles::text_muted())
        } else {
            Span::styled(range_label, styles::text_primary())
        };

        let lines = vec![
            Line::default(),
            Line::from(vec![
                self.focus_marker(FormField::Name),
                Span::styled("Name", name_label_style),
            ]),
            Line::from(name_value),
            Line::default(),
            Line::from(vec![
                self.focus_marker(FormField::DateRange),
                Span::styled(
                    FormField::DateRange.label(),
                    self.label_style(FormField::DateRange),
                ),
            ]),
            Line::from(vec![Span::raw("  "), range_value]),
            Line::default(),
            Line::from(vec![
                self.focus_marker(FormField::Save),
                Span::styled("[ Save ]", self.label_style(FormField::Save)),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("tab", styles::keybinding()),
                Span::styled(" next field   ", styles::text_muted()),
                Span::styled("enter", styles::keybinding()),
                Span::styled(" activate   ", styles::text_muted()),
                Span::styled("ctrl+s", styles::keybinding()),
                Span::styled(" save   ", styles::text_muted()),
                Span::styled("esc", styles::keybinding()),
                Span::styled(" back", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_empty_draft_shows_placeholder() {
        let draft = BookingDraft::new();
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);

        BookingForm::new(&draft, FormField::Name, IconSet::new(true)).render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(content.contains("Add Booking Entry"));
        assert!(content.contains(RANGE_PLACEHOLDER));
    }

    #[test]
    fn test_complete_range_shows_dates() {
        use chrono::NaiveDate;

        let mut draft = BookingDraft::new();
        draft.set_range(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
        );
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);

        BookingForm::new(&draft, FormField::DateRange, IconSet::new(true)).render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(content.contains("01.06.2024 - 05.06.2024"));
        assert!(!content.contains(RANGE_PLACEHOLDER));
    }
}
