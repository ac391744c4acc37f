use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::state::AppState;
use crate::ui::{layouts, theme};

const PANEL_WIDTH: u16 = 52;

/// Dropdown under the header bell
pub fn render_notifications_panel(f: &mut Frame, state: &AppState) {
    let unread = state.store.unread_notifications();
    let height = (state.store.notifications.len() as u16 * 3 + 3).max(5);
    let area = layouts::top_right_popup(PANEL_WIDTH, height, f.area());

    let title = format!(" Notificações ({} não lidas) ", unread);
    let inner = super::popup::render_frame_at(f, area, &title, theme::info_border_style());

    let items: Vec<ListItem> = state
        .store
        .notifications
        .iter()
        .map(|notification| {
            let marker = if notification.read { "  " } else { "● " };
            let title_style = if notification.read {
                theme::help_text_style()
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        marker,
                        Style::default().fg(theme::notification_color(notification.kind)),
                    ),
                    Span::styled(notification.title.clone(), title_style),
                    Span::styled(
                        format!("  {}", notification.time_label),
                        theme::help_text_style(),
                    ),
                ]),
                Line::from(format!("  {}", notification.message)),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items).highlight_style(theme::selection_style());
    let mut list_state = ListState::default().with_selected(Some(state.notifications_cursor));
    f.render_stateful_widget(list, inner, &mut list_state);

    let hint_area = ratatui::layout::Rect {
        y: area.bottom().saturating_sub(1),
        height: 1,
        ..inner
    };
    f.render_widget(
        Span::styled(" Enter marcar como lida  a marcar todas ", theme::help_text_style()),
        hint_area,
    );
}
