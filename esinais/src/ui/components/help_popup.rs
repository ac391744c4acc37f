use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::state::{AppState, DashboardView, TopLevelView};
use crate::ui::{layouts, theme};

pub fn render_help_popup(f: &mut Frame, state: &AppState) {
    let help_items = get_help_items(state);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Ajuda (? ou Esc para fechar) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    f.render_widget(List::new(items), inner);
}

fn get_help_items(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match state.view.top_level {
        TopLevelView::Translator => {
            items.push(("i", "Digitar o texto a traduzir"));
            items.push(("Esc/Enter", "Sair da digitação"));
            items.push(("c", "Limpar o texto"));
            items.push(("hjkl/setas", "Mover entre os sinais"));
            items.push(("Enter", "Detalhes do sinal"));
            items.push(("x", "Ver imagem do sinal"));
            items.push(("E", "Expandir todos os sinais"));
        }
        TopLevelView::About | TopLevelView::Contribute => {}
        TopLevelView::Dashboard => match state.view.dashboard_view {
            DashboardView::Profile => {
                items.push(("e", "Editar perfil"));
                items.push(("Enter/Ctrl+S", "Salvar alterações"));
                items.push(("Esc", "Cancelar edição"));
                items.push(("Ctrl+P", "Mostrar ou ocultar senhas"));
            }
            view => {
                items.push(("↑/k ↓/j", "Mover seleção"));
                items.push(("gg / G", "Primeira / última linha"));
                items.push(("/", "Buscar"));
                items.push(("f", "Filtros"));
                items.push(("d", "Excluir item selecionado"));
                match view {
                    DashboardView::Overview => items.push(("n", "Notificações")),
                    _ => {
                        items.push(("Tab/Shift+Tab", "Trocar aba"));
                        items.push(("n", "Novo cadastro"));
                    }
                }
            }
        },
    }

    items.push(("", ""));
    if state.view.logged_in {
        items.push(("1-4", "Dashboard, Sinais, Usuários, Perfil"));
        items.push(("go gs gu gp", "Ir para uma seção"));
        items.push(("m", "Menu do perfil"));
        items.push(("N", "Notificações"));
        items.push(("b / B", "Recolher barra lateral / abrir menu"));
    } else {
        items.push(("1-3", "Tradutor, Sobre, Contribua"));
        items.push(("gt ga gc", "Ir para uma página"));
        items.push(("L", "Entrar ou cadastrar"));
    }
    items.push(("t", "Alternar tema escuro"));
    items.push(("?", "Mostrar ou ocultar esta ajuda"));
    items.push(("q", "Sair"));

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_help_items_follow_login_state() {
        let mut state = AppState::seeded(&Settings::default()).unwrap();
        assert!(get_help_items(&state).contains(&("L", "Entrar ou cadastrar")));

        state.view.login();
        assert!(get_help_items(&state).contains(&("m", "Menu do perfil")));
        assert!(!get_help_items(&state).contains(&("L", "Entrar ou cadastrar")));
    }
}
