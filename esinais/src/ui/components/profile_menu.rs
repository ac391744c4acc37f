use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::state::{AppState, PROFILE_MENU_ITEMS};
use crate::ui::{layouts, theme};

pub fn render_profile_menu(f: &mut Frame, state: &AppState) {
    let area = layouts::top_right_popup(28, PROFILE_MENU_ITEMS.len() as u16 + 4, f.area());
    let inner = super::popup::render_frame_at(f, area, "", theme::accent_border_style());

    let mut items = vec![ListItem::new(Line::from(Span::styled(
        state.profile.email.clone(),
        theme::help_text_style(),
    )))];
    items.extend(PROFILE_MENU_ITEMS.iter().enumerate().map(|(index, label)| {
        // Last entry logs out
        let style = if index + 1 == PROFILE_MENU_ITEMS.len() {
            Style::default().fg(theme::COLOR_NEGATIVE)
        } else {
            Style::default()
        };
        ListItem::new(Line::from(Span::styled(*label, style)))
    }));

    let list = List::new(items).highlight_style(theme::selection_style());
    // Offset by the email line
    let mut list_state = ListState::default().with_selected(Some(state.profile_menu_cursor + 1));
    f.render_stateful_widget(list, inner, &mut list_state);
}
