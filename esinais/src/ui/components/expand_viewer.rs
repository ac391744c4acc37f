use ratatui::{text::Line, widgets::Paragraph, Frame};

use crate::state::{AppState, CARD_COLUMNS};
use crate::ui::{layouts, theme};

/// Full-screen card grid for the whole translation collection
pub fn render_expand_viewer(f: &mut Frame, state: &AppState) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::FULL,
        " Todos os sinais ",
        theme::accent_border_style(),
    );

    let (grid_area, hint_area) = {
        let mut grid_area = inner;
        grid_area.height = inner.height.saturating_sub(1);
        let hint_area = ratatui::layout::Rect {
            y: inner.bottom().saturating_sub(1),
            height: 1.min(inner.height),
            ..inner
        };
        (grid_area, hint_area)
    };

    super::card_grid::render_card_grid(
        f,
        grid_area,
        state.store.translations.as_slice(),
        state.translator.selected,
        CARD_COLUMNS,
    );

    f.render_widget(
        Paragraph::new(Line::from(
            "hjkl mover  Enter detalhes  x imagem  Esc fechar",
        ))
        .style(theme::help_text_style()),
        hint_area,
    );
}
