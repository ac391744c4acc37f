use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::state::FormState;
use crate::ui::{layouts, theme};

use super::form;

/// Popup holding the create-sign or create-user form
pub fn render_create_form(f: &mut Frame, title: &str, subtitle: &str, form_state: &FormState) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        title,
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    f.render_widget(
        Paragraph::new(subtitle).style(theme::help_text_style()),
        chunks[0],
    );
    form::render_form(f, chunks[1], form_state, "Salvar");
}
