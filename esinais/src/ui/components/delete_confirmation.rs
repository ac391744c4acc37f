use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::{AppState, DeleteTarget};
use crate::ui::{layouts, theme};
use esinais_data::CollectionId;

pub fn render_delete_confirmation(f: &mut Frame, state: &AppState, target: &DeleteTarget) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        " Confirmar exclusão ",
        theme::danger_border_style(),
    );

    let [question, note, _, keys] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .areas(inner);

    f.render_widget(
        Paragraph::new(question_for(state, target))
            .style(theme::warning_style().bold())
            .centered()
            .wrap(Wrap { trim: true }),
        question,
    );
    f.render_widget(
        Paragraph::new("Esta ação não pode ser desfeita.")
            .style(theme::help_text_style())
            .centered(),
        note,
    );
    f.render_widget(Paragraph::new(key_line()).centered(), keys);
}

fn key_line() -> Line<'static> {
    Line::from(vec![
        Span::from("[y] Excluir").fg(theme::COLOR_NEGATIVE).bold(),
        Span::raw("   "),
        Span::from("[n] Cancelar").fg(theme::COLOR_POSITIVE).bold(),
        Span::raw("   "),
        Span::styled("[Esc]", theme::help_text_style()),
    ])
}

/// Names the record while it still exists
fn question_for(state: &AppState, target: &DeleteTarget) -> String {
    let store = &state.store;
    let name = match target.collection {
        CollectionId::Signs => store.signs.get(target.id).map(|s| s.name.as_str()),
        CollectionId::RecentSubmissions => store
            .recent_submissions
            .get(target.id)
            .map(|s| s.sign.as_str()),
        CollectionId::Users => store.users.get(target.id).map(|u| u.name.as_str()),
    };

    name.map_or_else(
        || "Tem certeza que deseja excluir este item?".to_string(),
        |name| format!("Tem certeza que deseja excluir \"{name}\"?"),
    )
}
