//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use innkeep_app::state::{AppState, UiMode};

use crate::theme::{icons::IconSet, palette};
use crate::widgets::{
    BookingForm, ConfirmDiscardDialog, DateRangeDialog, HomeScreen, NoticeBar,
};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering - never modifies state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.ascii_icons);

    match state.ui_mode {
        UiMode::Home => {
            frame.render_widget(HomeScreen::new(&state.store, icons), area);
        }

        UiMode::AddBooking | UiMode::DateRangeDialog | UiMode::ConfirmDiscard => {
            // The form stays visible underneath any modal
            if let Some(draft) = state.draft.as_ref() {
                frame.render_widget(BookingForm::new(draft, state.form_focus, icons), area);
            }

            if state.ui_mode == UiMode::DateRangeDialog {
                if let Some(dialog) = state.date_dialog.as_ref() {
                    frame.render_widget(DateRangeDialog::new(dialog, icons), area);
                }
            }

            if state.ui_mode == UiMode::ConfirmDiscard {
                frame.render_widget(ConfirmDiscardDialog::new(), area);
            }
        }
    }

    render_notices(frame, state, area);
}

/// Overlay live notices in the bottom-right corner.
fn render_notices(frame: &mut Frame, state: &AppState, area: Rect) {
    let bar = NoticeBar::new(&state.notices);
    let height = bar.required_height();
    if height == 0 {
        return;
    }

    let notice_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height + 1),
        width: area.width,
        height,
    };
    frame.render_widget(bar, notice_area);
}
