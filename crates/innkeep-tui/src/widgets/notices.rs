//! Transient notice overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use innkeep_core::NoticeQueue;

use crate::theme::styles;

/// Most recent notices are shown here before the tick expires them.
pub const MAX_VISIBLE_NOTICES: usize = 3;

/// Bottom-anchored overlay that drains the notice queue visually.
pub struct NoticeBar<'a> {
    notices: &'a NoticeQueue,
}

impl<'a> NoticeBar<'a> {
    pub fn new(notices: &'a NoticeQueue) -> Self {
        Self { notices }
    }

    /// Rows needed for the currently live notices (0 when there are none).
    pub fn required_height(&self) -> u16 {
        self.notices.len().min(MAX_VISIBLE_NOTICES) as u16
    }
}

impl Widget for NoticeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.notices.is_empty() || area.height == 0 {
            return;
        }

        let visible: Vec<_> = self
            .notices
            .iter()
            .rev()
            .take(MAX_VISIBLE_NOTICES)
            .collect();

        // Oldest of the visible notices on top
        let lines: Vec<Line> = visible
            .into_iter()
            .rev()
            .map(|notice| {
                Line::from(Span::styled(
                    notice.message.clone(),
                    styles::notice(notice.level),
                ))
                .right_aligned()
            })
            .collect();

        Clear.render(area, buf);
        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_core::Notice;

    #[test]
    fn test_required_height_caps_at_max() {
        let mut notices = NoticeQueue::new();
        assert_eq!(NoticeBar::new(&notices).required_height(), 0);

        for i in 0..5 {
            notices.push(Notice::info(format!("n{i}")));
        }
        assert_eq!(
            NoticeBar::new(&notices).required_height(),
            MAX_VISIBLE_NOTICES as u16
        );
    }

    #[test]
    fn test_renders_latest_notice() {
        let mut notices = NoticeQueue::new();
        notices.push(Notice::warning("Name cannot be empty"));

        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        NoticeBar::new(&notices).render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Name cannot be empty"));
    }
}
