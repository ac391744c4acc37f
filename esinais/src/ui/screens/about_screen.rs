use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::{layouts, theme};

const FEATURES: [(&str, &str); 6] = [
    ("Tradutor", "Tradução de palavras e frases para libras"),
    ("Cadastro colaborativo", "Cadastre sinais via webcam ou upload de arquivos"),
    ("Imagem associativa", "Imagens associadas aos sinais para facilitar compreensão"),
    ("Homônimos e sinônimos", "Tratamento da tradução de acordo com a Libras"),
    ("Ranking", "Ranqueamento para usuários que cadastram sinais"),
    ("Responsivo", "Interface intuitiva e adaptável a diferentes dispositivos"),
];

pub fn render(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Com o e-Sinais você consegue traduzir palavras e textos do português para sinais em Libras",
            theme::title_style(),
        ))
        .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Funcionalidades que ajudam seu aprendizado ");
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    for (cell, (title, description)) in layouts::grid(inner, 2, 3).iter().zip(FEATURES) {
        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(title, theme::header_style())),
                Line::from(Span::styled(description, theme::help_text_style())),
            ])
            .wrap(Wrap { trim: true }),
            *cell,
        );
    }

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Projeto", theme::header_style())),
            Line::from("Visite o projeto no repositório do GitHub"),
        ])
        .block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );
}
