use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::{layouts, theme, utils};
use esinais_data::TranslationItem;

/// Cards for `items`, scrolled so the row holding `selected` stays visible.
pub fn render_card_grid(
    f: &mut Frame,
    area: Rect,
    items: &[TranslationItem],
    selected: usize,
    columns: usize,
) {
    let cells = layouts::grid(area, columns, theme::CARD_HEIGHT);
    if cells.is_empty() {
        return;
    }

    let visible_rows = cells.len() / columns;
    let first = first_visible(selected, columns, visible_rows);

    for (cell, (index, item)) in cells.iter().zip(items.iter().enumerate().skip(first)) {
        render_card(f, *cell, item, index == selected);
    }
}

/// Index of the first card drawn when `selected` must be on screen
fn first_visible(selected: usize, columns: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    let row = selected / columns;
    row.saturating_sub(visible_rows - 1) * columns
}

fn render_card(f: &mut Frame, area: Rect, item: &TranslationItem, selected: bool) {
    let border_style = if selected {
        Style::default().fg(theme::COLOR_BRAND)
    } else {
        Style::default().fg(theme::COLOR_MUTED)
    };
    let width = area.width.saturating_sub(2) as usize;

    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            utils::truncate(&item.word, width),
            if selected {
                theme::title_style()
            } else {
                Style::default()
            },
        )),
        Line::from(Span::styled(
            utils::truncate(&item.context, width),
            theme::help_text_style(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visible_scrolls_by_rows() {
        assert_eq!(first_visible(0, 4, 2), 0);
        assert_eq!(first_visible(7, 4, 2), 0);
        assert_eq!(first_visible(9, 4, 2), 4);
        assert_eq!(first_visible(9, 4, 0), 0);
    }
}
