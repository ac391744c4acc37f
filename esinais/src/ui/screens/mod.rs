pub mod about_screen;
pub mod contribute_screen;
pub mod overview_screen;
pub mod profile_screen;
pub mod signs_screen;
pub mod translator_screen;
pub mod users_screen;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, FilterScope};
use crate::ui::{components::filter_input, layouts, theme};

/// Show the search input above a table while typing or while a query is
/// applied. Returns the area left for the table.
pub(crate) fn search_area(f: &mut Frame, area: Rect, state: &AppState, scope: FilterScope) -> Rect {
    let query = state.search_query(scope);
    let searching = state.is_searching(scope);

    if searching || !query.is_empty() {
        let (filter_area, content_area) = layouts::content_with_filter(area);
        filter_input::render_filter_input(f, filter_area, query, searching);
        content_area
    } else {
        area
    }
}

/// One-line tab strip, returns the area below it
pub(crate) fn render_tabs(f: &mut Frame, area: Rect, labels: &[&str], active: usize) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(theme::TABS_HEIGHT), Constraint::Min(3)])
        .split(area);

    let mut spans = Vec::new();
    for (index, label) in labels.iter().enumerate() {
        let style = if index == active {
            theme::active_tab_style()
        } else {
            theme::help_text_style()
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::styled("│", Style::default().fg(theme::COLOR_MUTED)));
    }
    spans.pop();

    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    chunks[1]
}

/// Status cell colored by the record's status
pub(crate) fn status_span(label: &'static str, color: ratatui::style::Color) -> Span<'static> {
    Span::styled(format!("● {}", label), Style::default().fg(color))
}
