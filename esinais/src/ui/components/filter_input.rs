//! Shared search input component for the dashboard tables.

use ratatui::prelude::Rect;
use ratatui::{
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render the search input with the current query.
///
/// Shown while typing and whenever a query is applied, so the active text
/// filter stays visible.
pub fn render_filter_input(f: &mut Frame, area: Rect, query: &str, editing: bool) {
    let (title, style) = if editing {
        ("Buscar (Enter: aplicar, Esc: limpar)", theme::warning_style())
    } else {
        ("Busca (/ editar, Esc: limpar)", theme::help_text_style())
    };

    let input = Paragraph::new(query)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(input, area);
}
