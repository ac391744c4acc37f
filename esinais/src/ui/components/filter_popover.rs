use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::state::{
    AppState, FilterScope, CATEGORY_OPTIONS, OVERVIEW_STATUS_OPTIONS, USER_STATUS_OPTIONS,
};
use crate::ui::{layouts, theme};

const POPOVER_WIDTH: u16 = 34;

/// Option labels for a scope, "Todos" standing in for no filter
fn option_labels(scope: FilterScope) -> Vec<&'static str> {
    match scope {
        FilterScope::Overview => OVERVIEW_STATUS_OPTIONS
            .iter()
            .map(|option| option.map(|status| status.label()).unwrap_or("Todos"))
            .collect(),
        FilterScope::Signs => CATEGORY_OPTIONS
            .iter()
            .map(|option| option.unwrap_or("Todas"))
            .collect(),
        FilterScope::Users => USER_STATUS_OPTIONS
            .iter()
            .map(|option| option.map(|status| status.label()).unwrap_or("Todos"))
            .collect(),
    }
}

fn heading(scope: FilterScope) -> &'static str {
    match scope {
        FilterScope::Overview | FilterScope::Users => " Filtrar por status ",
        FilterScope::Signs => " Filtrar por categoria ",
    }
}

pub fn render_filter_popover(f: &mut Frame, state: &AppState, scope: FilterScope) {
    let labels = option_labels(scope);
    let extra = if scope == FilterScope::Users { 4 } else { 0 };
    let height = labels.len() as u16 + 3 + extra;
    let area = layouts::top_right_popup(POPOVER_WIDTH, height, f.area());
    let inner = super::popup::render_frame_at(f, area, heading(scope), theme::accent_border_style());

    let (cursor, date_focused) = match scope {
        FilterScope::Overview => (state.overview.popover_cursor, false),
        FilterScope::Signs => (state.signs.popover_cursor, false),
        FilterScope::Users => (state.users.popover_cursor, state.users.popover_date_focused),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(labels.len() as u16),
            Constraint::Length(extra),
            Constraint::Min(0),
        ])
        .split(inner);

    let items: Vec<ListItem> = labels
        .into_iter()
        .map(|label| ListItem::new(Line::from(label)))
        .collect();
    let mut list = List::new(items).highlight_symbol("● ");
    if !date_focused {
        list = list.highlight_style(theme::selection_style());
    }
    let mut list_state = ListState::default().with_selected(Some(cursor));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    if scope == FilterScope::Users {
        render_date_field(f, chunks[1], &state.users.criteria.registered, date_focused);
    }

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "↑↓ escolher  Tab data  Esc fechar",
            theme::help_text_style(),
        ))),
        chunks[2],
    );
}

fn render_date_field(f: &mut Frame, area: Rect, value: &str, focused: bool) {
    let text = if value.is_empty() && !focused {
        Span::styled("dd-mm-aaaa", theme::help_text_style())
    } else if focused {
        Span::raw(format!("{}_", value))
    } else {
        Span::raw(value.to_string())
    };

    let border = if focused {
        ratatui::style::Style::default().fg(theme::COLOR_INPUT_FOCUSED)
    } else {
        ratatui::style::Style::default()
    };

    let field = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Data de cadastro "),
    );
    let field_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1).min(3),
        ..area
    };
    f.render_widget(field, field_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_labels_lead_with_no_filter() {
        assert_eq!(option_labels(FilterScope::Signs)[0], "Todas");
        assert_eq!(option_labels(FilterScope::Users)[0], "Todos");
        assert_eq!(option_labels(FilterScope::Overview).len(), 4);
    }
}
