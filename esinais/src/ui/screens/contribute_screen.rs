use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::{layouts, theme, utils};

struct Contributor {
    name: &'static str,
    count: usize,
    role: &'static str,
}

const TOP_CONTRIBUTORS: [Contributor; 3] = [
    Contributor { name: "Maria da Silva", count: 1290, role: "Super Colaborador" },
    Contributor { name: "João Oliveira", count: 1150, role: "Intérprete" },
    Contributor { name: "Ana Costa", count: 980, role: "Estudante" },
];

const WAYS_TO_HELP: [(&str, &str); 3] = [
    ("Gravar Sinais", "Grave vídeos curtos de sinais em Libras."),
    ("Validar Sinais", "Revise vídeos enviados por outros usuários."),
    ("Sugerir Palavras", "Sugira novas expressões para a plataforma."),
];

fn medal(rank: usize) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        _ => "🥉",
    }
}

pub fn render(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(6)])
        .split(area);

    let ranking = Block::default()
        .borders(Borders::ALL)
        .title(" Maiores colaboradores ");
    let inner = ranking.inner(chunks[0]);
    f.render_widget(ranking, chunks[0]);

    // Podium order: second, first, third
    let podium = [1, 0, 2];
    for (cell, index) in layouts::grid(inner, 3, 5).iter().zip(podium) {
        let contributor = &TOP_CONTRIBUTORS[index];
        let name_style = if index == 0 {
            theme::title_style()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        f.render_widget(
            Paragraph::new(vec![
                Line::from(medal(index + 1)),
                Line::from(Span::styled(contributor.name, name_style)),
                Line::from(Span::styled(contributor.role, theme::help_text_style())),
                Line::from(format!("{} sinais", utils::format_thousands(contributor.count))),
            ])
            .alignment(Alignment::Center),
            *cell,
        );
    }

    let options = Block::default()
        .borders(Borders::ALL)
        .title(" Como você pode ajudar ");
    let lines: Vec<Line> = WAYS_TO_HELP
        .iter()
        .flat_map(|(title, description)| {
            [
                Line::from(Span::styled(*title, theme::header_style())),
                Line::from(Span::styled(*description, theme::help_text_style())),
                Line::from(""),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(options), chunks[1]);
}
