use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::state::{AppState, FilterScope};
use crate::ui::{components::empty_state, theme, utils};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(theme::STAT_CARD_HEIGHT), Constraint::Min(5)])
        .split(area);

    render_stat_cards(f, chunks[0], state);

    let table_area = super::search_area(f, chunks[1], state, FilterScope::Overview);
    render_table(f, table_area, state);
}

fn render_stat_cards(f: &mut Frame, area: Rect, state: &AppState) {
    let stats = state.dashboard_stats();
    let cards = [
        ("Total de sinais", stats.total_signs, theme::COLOR_BRAND),
        ("Aprovados", stats.approved, theme::COLOR_POSITIVE),
        ("Pendentes", stats.pending, theme::COLOR_PENDING),
        ("Recusados", stats.rejected, theme::COLOR_NEGATIVE),
        ("Usuários", stats.users, theme::COLOR_BORDER_INFO),
    ];

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for (cell, (label, value, color)) in cells.iter().zip(cards) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                utils::format_thousands(value),
                Style::default().fg(color),
            )),
            Line::from(Span::styled(label, theme::help_text_style())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(card, *cell);
    }
}

fn render_table(f: &mut Frame, area: Rect, state: &AppState) {
    let rows = state.visible_overview();
    let criteria = &state.overview.criteria;

    if rows.is_empty() {
        let filtered = !criteria.is_empty();
        let message = if filtered {
            "Nenhum envio corresponde aos filtros"
        } else {
            "Nenhum envio recente"
        };
        empty_state::render_empty_state(
            f,
            area,
            "Envios recentes",
            message,
            empty_state::filter_hint(filtered),
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Sinal"),
        Cell::from("Enviado por"),
        Cell::from("Data"),
        Cell::from("Intérprete"),
        Cell::from("Status"),
    ])
    .style(theme::header_style())
    .underlined();

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|submission| {
            Row::new(vec![
                Cell::from(submission.sign.clone()),
                Cell::from(submission.submitted_by.clone()),
                Cell::from(submission.submitted_date.clone()),
                Cell::from(utils::or_placeholder(submission.interpreter.as_deref()).to_string()),
                Cell::from(super::status_span(
                    submission.status.label(),
                    theme::sign_status_color(submission.status),
                )),
            ])
        })
        .collect();

    let title = match criteria.status {
        Some(status) => format!("Envios recentes ({}: {})", status.label(), rows.len()),
        None => "Envios recentes".to_string(),
    };

    let table = Table::new(
        table_rows,
        [
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Length(10),
            Constraint::Percentage(22),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.overview.table_state.borrow_mut());
}
