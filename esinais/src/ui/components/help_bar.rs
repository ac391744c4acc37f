use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// A key and what it does, e.g. `("/", "buscar")`
pub type Hint = (&'static str, &'static str);

pub const HELP_HINT: Hint = ("?", "ajuda");
pub const QUIT_HINT: Hint = ("q", "sair");

/// Bottom bar listing the keys that matter on the current screen
pub fn render_help_bar(f: &mut Frame, area: Rect, hints: &[Hint]) {
    f.render_widget(
        Paragraph::new(hint_line(hints))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn hint_line(hints: &[Hint]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (index, (key, action)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  │  ", theme::help_text_style()));
        }
        spans.push(Span::styled(*key, theme::header_style()));
        spans.push(Span::styled(format!(" {}", action), theme::help_text_style()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_separates_entries() {
        let line = hint_line(&[("/", "buscar"), HELP_HINT]);
        assert_eq!(line.to_string(), "/ buscar  │  ? ajuda");
    }
}
