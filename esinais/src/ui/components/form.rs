//! Shared renderer for the keyboard-driven forms.

use ratatui::prelude::Rect;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::forms::{FieldValue, FormState};
use crate::ui::theme;

/// Lines needed to draw `form` with its error line and submit button
pub fn form_height(form: &FormState) -> u16 {
    form.fields.len() as u16 * 2 + 4
}

/// Render every field as `label` over its value, then the error and the
/// submit hint. The focused field is highlighted; choice fields show arrows.
pub fn render_form(f: &mut Frame, area: Rect, form: &FormState, submit_label: &str) {
    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .collect();
    constraints.extend([
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Error
        Constraint::Length(1), // Submit
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, field) in form.fields.iter().enumerate() {
        let focused = index == form.focused;
        let required = if field.required { " *" } else { "" };

        let label = Line::from(vec![
            Span::styled(field.label, theme::help_text_style()),
            Span::styled(required, Style::default().fg(theme::COLOR_NEGATIVE)),
        ]);
        f.render_widget(Paragraph::new(label), chunks[index * 2]);

        let value = form.display_value(index);
        let text = match &field.value {
            FieldValue::Choice { .. } if focused => format!("◀ {} ▶", value),
            FieldValue::ReadOnly(_) => format!("{} (somente leitura)", value),
            _ if focused => format!("{}▏", value),
            _ => value,
        };
        let style = if focused {
            theme::form_field_focused_style()
        } else if matches!(field.value, FieldValue::ReadOnly(_)) {
            Style::default().fg(theme::COLOR_MUTED)
        } else {
            theme::form_field_style()
        };
        f.render_widget(
            Paragraph::new(format!(" {}", text)).style(style),
            chunks[index * 2 + 1],
        );
    }

    let base = form.fields.len() * 2;

    if let Some(error) = &form.error {
        f.render_widget(
            Paragraph::new(error.as_str()).style(theme::error_style()),
            chunks[base + 1],
        );
    }

    let submit = Line::from(vec![
        Span::styled(
            format!("[Enter] {}", submit_label),
            Style::default()
                .fg(theme::COLOR_BRAND)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Tab/↑↓ campos  ←→ opções  Esc fechar", theme::help_text_style()),
    ]);
    f.render_widget(Paragraph::new(submit), chunks[base + 2]);
}
