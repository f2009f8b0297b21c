//! Date-range dialog widget
//!
//! Renders the two-phase date picker as a centered modal: a month calendar
//! around the cursor, the current selection, and phase-dependent controls.

use chrono::{Datelike, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use innkeep_app::date_dialog::DateRangeDialogState;
use innkeep_core::format_date;

use crate::theme::{icons::IconSet, palette, styles};

use super::modal::{centered_rect, dim_background};

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 15;

/// Modal two-phase date-range picker.
pub struct DateRangeDialog<'a> {
    state: &'a DateRangeDialogState,
    icons: IconSet,
}

impl<'a> DateRangeDialog<'a> {
    pub fn new(state: &'a DateRangeDialogState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn day_style(&self, day: NaiveDate) -> Style {
        if day == self.state.cursor {
            return Style::default()
                .fg(palette::DEEPEST_BG)
                .bg(palette::DAY_CURSOR)
                .add_modifier(Modifier::BOLD);
        }
        if Some(day) == self.state.start_date || Some(day) == self.state.end_date {
            return Style::default()
                .fg(palette::DAY_SELECTED)
                .add_modifier(Modifier::BOLD);
        }
        if let (Some(start), Some(end)) = (self.state.start_date, self.state.end_date) {
            if start <= day && day <= end {
                return Style::default().fg(palette::DAY_IN_RANGE);
            }
        }
        styles::text_primary()
    }

    fn endpoint_span(&self, label: &str, date: Option<NaiveDate>) -> Vec<Span<'static>> {
        let value = match date {
            Some(d) => Span::styled(format_date(d), styles::text_primary()),
            None => Span::styled("—".to_string(), styles::text_muted()),
        };
        vec![
            Span::styled(format!("{label} "), styles::text_secondary()),
            value,
            Span::raw("   "),
        ]
    }
}

impl Widget for DateRangeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let dialog_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        Clear.render(dialog_area, buf);

        let block = styles::panel_block(true)
            .title(format!(" {} ", self.state.phase.title()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![
            Line::from(Span::styled(
                self.state.cursor.format("%B %Y").to_string(),
                styles::accent_bold(),
            ))
            .centered(),
            Line::from(Span::styled(
                "Mo Tu We Th Fr Sa Su",
                styles::text_muted(),
            ))
            .centered(),
        ];

        lines.extend(self.calendar_lines());

        let mut summary = Vec::new();
        summary.push(Span::styled(
            format!("{} ", self.icons.picked()),
            styles::text_muted(),
        ));
        summary.extend(self.endpoint_span("Start", self.state.start_date));
        summary.extend(self.endpoint_span("End", self.state.end_date));

        lines.push(Line::default());
        lines.push(Line::from(summary));
        lines.push(Line::from(vec![
            Span::styled("space", styles::keybinding()),
            Span::styled(" pick   ", styles::text_muted()),
            Span::styled("enter", styles::keybinding()),
            Span::styled(
                format!(" {}   ", self.state.phase.confirm_label()),
                styles::text_muted(),
            ),
            Span::styled("esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}

impl DateRangeDialog<'_> {
    /// Month grid around the cursor, Monday-first.
    fn calendar_lines(&self) -> Vec<Line<'static>> {
        let cursor = self.state.cursor;
        let first = cursor.with_day(1).unwrap_or(cursor);
        let lead = first.weekday().num_days_from_monday();
        let length = month_length(cursor);

        let mut lines = Vec::new();
        let mut cells: Vec<Span<'static>> = Vec::new();
        let mut col = 0;

        for _ in 0..lead {
            cells.push(Span::raw("   "));
            col += 1;
        }

        for day_number in 1..=length {
            if let Some(day) = NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), day_number) {
                cells.push(Span::styled(
                    format!("{day_number:>2}"),
                    self.day_style(day),
                ));
                cells.push(Span::raw(" "));
            }

            col += 1;
            if col == 7 {
                lines.push(Line::from(std::mem::take(&mut cells)).centered());
                col = 0;
            }
        }
        if !cells.is_empty() {
            lines.push(Line::from(cells).centered());
        }

        lines
    }
}

/// Number of days in the cursor's month.
fn month_length(date: NaiveDate) -> u32 {
    (28..=31)
        .rev()
        .find(|&d| NaiveDate::from_ymd_opt(date.year(), date.month(), d).is_some())
        .unwrap_or(28)
}
