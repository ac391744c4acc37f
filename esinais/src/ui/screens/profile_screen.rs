use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::ui::{
    components::{form, loading_indicator},
    layouts, theme,
};
use esinais_data::UserRole;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.profile;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(6)])
        .split(area);

    let (title_area, indicator_area) = layouts::title_with_indicator(chunks[0], 16);
    let hint = if profile.editing {
        "Enter ou Ctrl+S salva, Esc cancela"
    } else {
        "e edita o perfil"
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, theme::help_text_style())),
        title_area,
    );
    loading_indicator::render_loading_indicator(f, indicator_area, &profile.save);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Informações do perfil ");
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    if profile.editing {
        form::render_form(f, inner, &profile.form, "Salvar alterações");
        return;
    }

    let field = |label: &'static str, value: String| {
        [
            Line::from(Span::styled(label, theme::header_style())),
            Line::from(value),
            Line::from(""),
        ]
    };

    let lines: Vec<Line> = [
        field("Nome completo", profile.name.clone()),
        field("Email", profile.email.clone()),
        field("Perfil", UserRole::Admin.label().to_string()),
        field("Senha", "••••••••".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
