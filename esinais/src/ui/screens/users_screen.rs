use ratatui::{
    layout::{Constraint, Rect},
    style::Stylize,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::state::{AppState, FilterScope, ROLE_TABS};
use crate::ui::{components::empty_state, theme};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let criteria = &state.users.criteria;
    let labels = ROLE_TABS.map(|role| role.map(|role| role.label()).unwrap_or("Todos"));
    let active = ROLE_TABS
        .iter()
        .position(|role| *role == criteria.role)
        .unwrap_or(0);

    let area = super::render_tabs(f, area, &labels, active);
    let area = super::search_area(f, area, state, FilterScope::Users);

    let rows = state.visible_users();
    if rows.is_empty() {
        let filtered = !criteria.is_empty();
        empty_state::render_empty_state(
            f,
            area,
            "Usuários",
            "Nenhum usuário encontrado",
            empty_state::filter_hint(filtered),
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Nome"),
        Cell::from("Email"),
        Cell::from("Perfil"),
        Cell::from("Status"),
        Cell::from("Cadastro"),
    ])
    .style(theme::header_style())
    .underlined();

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|user| {
            Row::new(vec![
                Cell::from(user.name.clone()),
                Cell::from(user.email.clone()),
                Cell::from(user.role.label()),
                Cell::from(super::status_span(
                    user.status.label(),
                    theme::user_status_color(user.status),
                )),
                Cell::from(user.registered_date.clone()),
            ])
        })
        .collect();

    let mut title = format!("Usuários ({})", rows.len());
    if let Some(status) = criteria.status {
        title = format!("Usuários ({}: {})", status.label(), rows.len());
    }
    if !criteria.registered.is_empty() {
        title.push_str(&format!(", cadastro: {}", criteria.registered));
    }

    let table = Table::new(
        table_rows,
        [
            Constraint::Percentage(24),
            Constraint::Percentage(30),
            Constraint::Percentage(16),
            Constraint::Length(12),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.users.table_state.borrow_mut());
}
