use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, TopLevelView};
use crate::ui::{layouts, theme};

const PUBLIC_TABS: [TopLevelView; 3] = [
    TopLevelView::Translator,
    TopLevelView::About,
    TopLevelView::Contribute,
];

/// Brand plus numbered navigation for the public screens
pub fn render_public_header(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled("e-Sinais", theme::title_style()), Span::raw("   ")];
    for (index, view) in PUBLIC_TABS.iter().enumerate() {
        let style = if *view == state.view.top_level {
            theme::active_tab_style()
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{} {}", index + 1, view.label()), style));
        spans.push(Span::raw("   "));
    }

    let (nav_area, login_area) = layouts::title_with_indicator(area, 12);
    f.render_widget(Paragraph::new(Line::from(spans)), nav_area);
    f.render_widget(
        Paragraph::new(Span::styled("L Entrar", theme::help_text_style()))
            .alignment(Alignment::Right),
        login_area,
    );
}

/// Current dashboard view, notification bell and profile name
pub fn render_dashboard_header(f: &mut Frame, area: Rect, state: &AppState) {
    let unread = state.store.unread_notifications();
    let bell = if unread > 0 {
        Span::styled(
            format!("🔔 {}", unread),
            Style::default().fg(theme::COLOR_NEGATIVE),
        )
    } else {
        Span::styled("🔔", theme::help_text_style())
    };

    let right = Line::from(vec![
        bell,
        Span::raw("   "),
        Span::styled(state.profile.name.clone(), theme::header_style()),
    ]);
    let right_width = right.width() as u16 + 1;

    let (title_area, right_area) = layouts::title_with_indicator(area, right_width);
    f.render_widget(
        Paragraph::new(Span::styled(
            state.view.dashboard_view.label(),
            theme::title_style(),
        )),
        title_area,
    );
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), right_area);
}
