use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{AppState, CARD_COLUMNS, INPUT_WARNING_CHARS, TRANSLATOR_PLACEHOLDER};
use crate::ui::{components::card_grid, theme, utils};

const INPUT_HEIGHT: u16 = 6;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(theme::CARD_HEIGHT + 2),
        ])
        .split(area);

    render_input(f, chunks[0], state);
    render_counter(f, chunks[1], state);
    render_cards(f, chunks[2], state);
}

fn render_input(f: &mut Frame, area: Rect, state: &AppState) {
    let translator = &state.translator;

    let (title, border_style) = if translator.editing {
        (
            " Português (Esc: concluir) ",
            Style::default().fg(theme::COLOR_INPUT_FOCUSED),
        )
    } else {
        (" Português (i: digitar, c: limpar) ", Style::default())
    };

    let text = if translator.input.is_empty() {
        Span::styled(TRANSLATOR_PLACEHOLDER, theme::help_text_style())
    } else if translator.editing {
        Span::raw(format!("{}_", translator.input))
    } else {
        Span::raw(translator.input.as_str())
    };

    let input = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(input, area);
}

fn render_counter(f: &mut Frame, area: Rect, state: &AppState) {
    let count = state.translator.char_count();
    let style = if count > INPUT_WARNING_CHARS {
        theme::error_style()
    } else {
        theme::help_text_style()
    };

    f.render_widget(
        Paragraph::new(Span::styled(
            utils::char_counter(count, state.max_input_chars),
            style,
        ))
        .alignment(Alignment::Right),
        area,
    );
}

fn render_cards(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Libras (Enter: detalhes, x: imagem, E: expandir) ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    card_grid::render_card_grid(
        f,
        inner,
        state.store.translations.as_slice(),
        state.translator.selected,
        CARD_COLUMNS,
    );
}
