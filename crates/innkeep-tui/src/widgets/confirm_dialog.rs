//! Discard confirmation dialog widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::{palette, styles};

use super::modal::{centered_rect, dim_background};

/// Small centered modal asking whether to discard a dirty draft.
pub struct ConfirmDiscardDialog;

impl ConfirmDiscardDialog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfirmDiscardDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ConfirmDiscardDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let dialog_area = centered_rect(36, 6, area);
        Clear.render(dialog_area, buf);

        let block = styles::panel_block(true)
            .title(" Discard draft? ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(
                "The entered booking will be lost.",
                styles::text_secondary(),
            ))
            .centered(),
            Line::default(),
            Line::from(vec![
                Span::styled("y", styles::keybinding()),
                Span::styled(" discard   ", styles::text_muted()),
                Span::styled("n", styles::keybinding()),
                Span::styled(" keep editing", styles::text_muted()),
            ])
            .centered(),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_prompt_and_keys() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);

        ConfirmDiscardDialog::new().render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Discard draft?"));
        assert!(content.contains("keep editing"));
    }
}
