use itertools::Itertools;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::state::AppState;
use crate::ui::{layouts, theme, utils};
use esinais_data::TranslationItem;

pub fn render_details_modal(f: &mut Frame, state: &AppState) {
    let Some(item) = state.details_item() else {
        return;
    };

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        &format!(" {} ", item.word),
        theme::accent_border_style(),
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner);

    render_item(f, columns[0], item);
    render_related(f, columns[1], state);
}

fn render_item(f: &mut Frame, area: ratatui::layout::Rect, item: &TranslationItem) {
    let field = |label: &'static str, value: &str| -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(label, theme::header_style())),
            Line::from(value.to_string()),
            Line::from(""),
        ]
    };

    let regionalisms = if item.regionalisms.is_empty() {
        utils::or_placeholder(None).to_string()
    } else {
        item.regionalisms.iter().join(", ")
    };

    let mut lines = vec![
        Line::from(Span::styled(item.word.clone(), theme::title_style())),
        Line::from(Span::styled(item.context.clone(), theme::help_text_style())),
        Line::from(""),
    ];
    lines.extend(field(
        "Classificação Gramatical",
        utils::or_placeholder(item.grammar_class.as_deref()),
    ));
    lines.extend(field(
        "Definição",
        utils::or_placeholder(item.definition.as_deref()),
    ));
    lines.extend(field(
        "Exemplo de Uso",
        utils::or_placeholder(item.example.as_deref()),
    ));
    lines.extend(field("Regionalismos", &regionalisms));
    lines.push(Line::from(Span::styled(
        "x imagem do sinal  Esc fechar",
        theme::help_text_style(),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_related(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let items: Vec<ListItem> = state
        .related_items()
        .into_iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(item.word.clone()),
                Span::styled(format!("  {}", item.context), theme::help_text_style()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .title(" Sinais relacionados (Enter abre) "),
        )
        .highlight_style(theme::selection_style().add_modifier(Modifier::BOLD))
        .highlight_symbol("▸ ")
        .style(Style::default());

    let mut list_state = ListState::default().with_selected(Some(state.translator.related_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}
