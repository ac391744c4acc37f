use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_EIGHT};

use crate::state::LoadingState;
use crate::ui::theme;

/// Profile save status: spinner while saving, a check mark once done,
/// nothing before the first save.
pub fn render_loading_indicator(f: &mut Frame, area: Rect, save: &LoadingState) {
    match save {
        LoadingState::NotStarted => {}
        LoadingState::Loading(throbber_state) => {
            let throbber = Throbber::default()
                .label("Salvando...")
                .style(theme::warning_style())
                .throbber_set(BRAILLE_EIGHT);
            f.render_stateful_widget(throbber, area, &mut throbber_state.clone());
        }
        LoadingState::Loaded => {
            let done = Line::styled("✓ Salvo", Style::default().fg(theme::COLOR_POSITIVE));
            f.render_widget(done.right_aligned(), area);
        }
    }
}
