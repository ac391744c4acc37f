pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::state::{AppState, DashboardView, OverlayKind, TopLevelView};
use components::*;
use ratatui::{layout::Rect, widgets::Block, Frame};

/// Pure render dispatcher - routes to the current screen, then draws the
/// open overlays bottom to top. Never mutates state.
pub fn render_app(f: &mut Frame, state: &AppState) {
    f.render_widget(Block::default().style(theme::base_style(state.dark_mode)), f.area());

    match state.view.top_level {
        TopLevelView::Dashboard => render_dashboard(f, state),
        view => render_public(f, state, view),
    }

    for kind in state.view.visible_overlays() {
        render_overlay(f, state, kind);
    }

    // Render help popup on top if visible
    if state.help_visible {
        help_popup::render_help_popup(f, state);
    }
}

fn render_public(f: &mut Frame, state: &AppState, view: TopLevelView) {
    let (header_area, content_area, help_area) = layouts::screen_layout(f.area());
    header::render_public_header(f, header_area, state);

    let hints: &[help_bar::Hint] = match view {
        TopLevelView::Translator if state.translator.editing => {
            &[("Esc/Enter", "concluir"), ("Backspace", "apagar")]
        }
        TopLevelView::Translator => &[
            ("i", "digitar"),
            ("hjkl", "mover"),
            ("Enter", "detalhes"),
            help_bar::HELP_HINT,
            help_bar::QUIT_HINT,
        ],
        _ => &[
            ("1-3", "navegar"),
            ("L", "entrar"),
            help_bar::HELP_HINT,
            help_bar::QUIT_HINT,
        ],
    };

    match view {
        TopLevelView::Translator => screens::translator_screen::render(f, content_area, state),
        TopLevelView::About => screens::about_screen::render(f, content_area),
        TopLevelView::Contribute => screens::contribute_screen::render(f, content_area),
        TopLevelView::Dashboard => {}
    }

    help_bar::render_help_bar(f, help_area, hints);
}

/// Inline sidebar unless the terminal is narrow; collapsing shrinks it to
/// icons.
fn sidebar_width(state: &AppState, area: Rect) -> Option<u16> {
    if area.width < theme::NARROW_WIDTH {
        None
    } else if state.view.sidebar_collapsed {
        Some(theme::SIDEBAR_COLLAPSED_WIDTH)
    } else {
        Some(theme::SIDEBAR_WIDTH)
    }
}

fn render_dashboard(f: &mut Frame, state: &AppState) {
    let (header_area, main_area, help_area) = match sidebar_width(state, f.area()) {
        Some(width) => {
            let (header_area, sidebar_area, main_area, help_area) =
                layouts::screen_layout_with_sidebar(f.area(), width);
            sidebar::render_sidebar(f, sidebar_area, state);
            (header_area, main_area, help_area)
        }
        None => layouts::screen_layout(f.area()),
    };

    header::render_dashboard_header(f, header_area, state);

    match state.view.dashboard_view {
        DashboardView::Overview => screens::overview_screen::render(f, main_area, state),
        DashboardView::Signs => screens::signs_screen::render(f, main_area, state),
        DashboardView::Users => screens::users_screen::render(f, main_area, state),
        DashboardView::Profile => screens::profile_screen::render(f, main_area, state),
    }

    let hints: &[help_bar::Hint] = match state.current_scope() {
        Some(scope) if state.is_searching(scope) => &[("Enter", "aplicar"), ("Esc", "limpar")],
        Some(_) => &[
            ("/", "buscar"),
            ("f", "filtros"),
            ("d", "excluir"),
            ("m", "menu"),
            help_bar::HELP_HINT,
        ],
        None => &[("e", "editar"), ("m", "menu"), help_bar::HELP_HINT],
    };
    help_bar::render_help_bar(f, help_area, hints);
}

fn render_overlay(f: &mut Frame, state: &AppState, kind: OverlayKind) {
    match kind {
        OverlayKind::Auth => auth_modal::render_auth_modal(f, &state.auth),
        OverlayKind::ImageViewer => {
            if let Some(viewer) = &state.view.image_viewer {
                image_viewer::render_image_viewer(f, viewer);
            }
        }
        OverlayKind::ExpandViewer => expand_viewer::render_expand_viewer(f, state),
        OverlayKind::Details => details_modal::render_details_modal(f, state),
        OverlayKind::DeleteConfirmation => {
            if let Some(target) = &state.view.delete_target {
                delete_confirmation::render_delete_confirmation(f, state, target);
            }
        }
        OverlayKind::Notifications => notifications_panel::render_notifications_panel(f, state),
        OverlayKind::FilterPopover(scope) => {
            filter_popover::render_filter_popover(f, state, scope)
        }
        OverlayKind::Sidebar => sidebar::render_sidebar_drawer(f, state),
        OverlayKind::ProfileMenu => profile_menu::render_profile_menu(f, state),
        OverlayKind::CreateSign => create_form::render_create_form(
            f,
            " Cadastrar sinal ",
            "Preencha os campos obrigatórios (*)",
            &state.sign_form,
        ),
        OverlayKind::CreateUser => create_form::render_create_form(
            f,
            " Cadastrar usuário ",
            "Todos os campos são obrigatórios",
            &state.user_form,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::state::{FilterScope, Overlay};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_text(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_app(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn seeded() -> AppState {
        AppState::seeded(&Settings::default()).unwrap()
    }

    #[test]
    fn test_translator_shows_cards_and_counter() {
        let state = seeded();
        let text = render_to_text(&state, 120, 40);

        assert!(text.contains("MANGA"));
        assert!(text.contains("/ 5.000"));
        assert!(text.contains("Tradutor"));
    }

    #[test]
    fn test_dashboard_renders_every_view() {
        let mut state = seeded();
        state.view.login();

        for view in [
            DashboardView::Overview,
            DashboardView::Signs,
            DashboardView::Users,
            DashboardView::Profile,
        ] {
            state.view.navigate_dashboard(view);
            let text = render_to_text(&state, 120, 40);
            assert!(text.contains(&state.profile.name), "{:?}", view);
        }
    }

    #[test]
    fn test_narrow_dashboard_hides_inline_sidebar() {
        let mut state = seeded();
        state.view.login();

        let wide = render_to_text(&state, 120, 40);
        let narrow = render_to_text(&state, 60, 40);

        assert!(wide.contains("e-Sinais"));
        assert!(!narrow.contains("e-Sinais"));
    }

    #[test]
    fn test_every_overlay_renders() {
        let mut state = seeded();
        state.view.login();
        state.view.open_overlay(Overlay::Notifications);
        state.view.open_overlay(Overlay::ProfileMenu);
        state.view.open_overlay(Overlay::Sidebar);
        state
            .view
            .open_overlay(Overlay::FilterPopover(FilterScope::Overview));
        state.view.open_overlay(Overlay::CreateSign);
        state.view.open_overlay(Overlay::CreateUser);
        state.help_visible = true;

        let text = render_to_text(&state, 120, 40);
        assert!(text.contains("Ajuda"));

        // Tiny terminals must not panic
        render_to_text(&state, 10, 5);
    }

    #[test]
    fn test_public_overlays_render() {
        let mut state = seeded();
        state.view.open_overlay(Overlay::ExpandViewer);
        let id = state.store.translations.as_slice()[0].id;
        state.view.show_details(id, &state.store.translations);
        state
            .view
            .open_overlay(Overlay::ImageViewer(Some("assets/manga-sign.png".to_string())));

        let text = render_to_text(&state, 120, 40);
        assert!(text.contains("manga-sign.png"));
        render_to_text(&state, 20, 8);

        state.view.close_overlay(OverlayKind::ImageViewer);
        let text = render_to_text(&state, 120, 40);
        assert!(text.contains("Sinais relacionados"));
    }
}
