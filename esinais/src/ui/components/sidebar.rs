use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::state::{AppState, DashboardView};
use crate::ui::{layouts, theme};

fn icon(view: DashboardView) -> &'static str {
    match view {
        DashboardView::Overview => "▦",
        DashboardView::Signs => "✋",
        DashboardView::Users => "👥",
        DashboardView::Profile => "☺",
    }
}

fn entries(state: &AppState, collapsed: bool) -> Vec<ListItem<'static>> {
    DashboardView::SIDEBAR
        .iter()
        .enumerate()
        .map(|(index, view)| {
            let style = if *view == state.view.dashboard_view {
                theme::active_tab_style()
            } else {
                Style::default()
            };
            let text = if collapsed {
                icon(*view).to_string()
            } else {
                format!("{} {}  {}", index + 1, icon(*view), view.label())
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect()
}

/// Inline sidebar next to the dashboard content
pub fn render_sidebar(f: &mut Frame, area: Rect, state: &AppState) {
    let collapsed = state.view.sidebar_collapsed;
    let title = if collapsed { "" } else { " e-Sinais " };

    let list = List::new(entries(state, collapsed)).block(
        Block::default()
            .borders(Borders::RIGHT)
            .title(Span::styled(title, theme::title_style())),
    );
    f.render_widget(list, area);
}

/// Drawer shown over the content, used on narrow terminals
pub fn render_sidebar_drawer(f: &mut Frame, state: &AppState) {
    let (_, content, _) = layouts::screen_layout(f.area());
    let area = Rect {
        width: (theme::SIDEBAR_WIDTH + 4).min(content.width),
        ..content
    };
    let inner = super::popup::render_frame_at(f, area, " Menu ", theme::accent_border_style());

    let list = List::new(entries(state, false))
        .highlight_style(theme::selection_style())
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(Some(state.sidebar_cursor));
    f.render_stateful_widget(list, inner, &mut list_state);
}
