use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Placeholder drawn instead of a table with no rows, either because the
/// collection is empty or because the filters match nothing.
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: Option<&str>,
) {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(message.to_string(), theme::warning_style())),
    ];
    lines.extend(hint.into_iter().flat_map(|hint| {
        [
            Line::default(),
            Line::from(Span::styled(hint.to_string(), theme::help_text_style())),
        ]
    }));

    f.render_widget(
        Paragraph::new(lines)
            .centered()
            .block(Block::bordered().title(title.to_string())),
        area,
    );
}

/// Hint shown under an empty filtered table
pub fn filter_hint(filtered: bool) -> Option<&'static str> {
    filtered.then_some("Esc limpa a busca, f ajusta os filtros")
}
