use ratatui::{
    layout::{Constraint, Rect},
    style::Stylize,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::state::{AppState, FilterScope};
use crate::ui::{components::empty_state, theme};
use esinais_data::StatusTab;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let criteria = &state.signs.criteria;
    let labels = StatusTab::ALL.map(|tab| tab.label());
    let active = StatusTab::ALL
        .iter()
        .position(|tab| *tab == criteria.tab)
        .unwrap_or(0);

    let area = super::render_tabs(f, area, &labels, active);
    let area = super::search_area(f, area, state, FilterScope::Signs);

    let rows = state.visible_signs();
    if rows.is_empty() {
        let filtered = !criteria.is_empty();
        empty_state::render_empty_state(
            f,
            area,
            "Sinais",
            "Nenhum sinal encontrado",
            empty_state::filter_hint(filtered).or(Some("n cadastra um novo sinal")),
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Sinal"),
        Cell::from("Categoria"),
        Cell::from("Enviado por"),
        Cell::from("Data"),
        Cell::from("Status"),
    ])
    .style(theme::header_style())
    .underlined();

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|sign| {
            Row::new(vec![
                Cell::from(sign.name.clone()),
                Cell::from(sign.category.clone()),
                Cell::from(sign.submitted_by.clone()),
                Cell::from(sign.submitted_date.clone()),
                Cell::from(super::status_span(
                    sign.status.label(),
                    theme::sign_status_color(sign.status),
                )),
            ])
        })
        .collect();

    let title = match &criteria.category {
        Some(category) => format!("Sinais ({}: {})", category, rows.len()),
        None => format!("Sinais ({})", rows.len()),
    };

    let table = Table::new(
        table_rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Length(10),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.signs.table_state.borrow_mut());
}
