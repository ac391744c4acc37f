use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AuthForm, AuthMode};
use crate::ui::{layouts, theme};

use super::form;

pub fn render_auth_modal(f: &mut Frame, auth: &AuthForm) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        " e-Sinais ",
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1),
            Constraint::Min(form::form_height(&auth.form)),
            Constraint::Length(1), // Mode switches
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(auth.mode.title()).style(theme::title_style()),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(auth.mode.subtitle()).style(theme::help_text_style()),
        chunks[1],
    );

    form::render_form(f, chunks[3], &auth.form, auth.mode.submit_label());

    f.render_widget(Paragraph::new(mode_switches(auth.mode)), chunks[4]);
}

fn mode_switches(mode: AuthMode) -> Line<'static> {
    let mut spans = vec![Span::styled("Ctrl+P mostrar senha", theme::help_text_style())];
    let switches = [
        (AuthMode::Login, "Ctrl+L entrar"),
        (AuthMode::Register, "Ctrl+N criar conta"),
        (AuthMode::ForgotPassword, "Ctrl+F esqueci a senha"),
    ];
    for (target, label) in switches {
        if target != mode {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label, theme::help_text_style()));
        }
    }
    Line::from(spans)
}
