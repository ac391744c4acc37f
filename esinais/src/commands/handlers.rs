use crate::events::{AppCommand, GridMove};
use crate::input::{Key, KeyEvent};
use crate::state::*;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 1: help popup covers everything
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 2: the topmost overlay owns the keyboard
    if let Some(kind) = state.view.topmost_overlay() {
        return handle_overlay_keys(kind, event, state);
    }

    // Priority 3: text entry on the current screen
    if let Some(scope) = state.current_scope() {
        if state.is_searching(scope) {
            return match key {
                Key::Enter => Some(AppCommand::ExitSearchMode),
                Key::Esc => Some(AppCommand::ClearSearch),
                Key::Backspace => Some(AppCommand::DeleteSearchChar),
                Key::Char(c) => Some(AppCommand::AppendSearchChar(c)),
                _ => None,
            };
        }
    }

    if state.translator.editing && state.view.top_level == TopLevelView::Translator {
        return match key {
            Key::Esc | Key::Enter => Some(AppCommand::ExitInputMode),
            Key::Backspace => Some(AppCommand::DeleteInputChar),
            Key::Char(c) => Some(AppCommand::AppendInputChar(c)),
            _ => None,
        };
    }

    if state.profile_editing() {
        return handle_profile_form_keys(event);
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return handle_pending_sequence(pending, key, state);
    }

    match key {
        Key::Char('?') => return Some(AppCommand::ToggleHelp),
        Key::Char('q') => return Some(AppCommand::Quit),
        Key::Char('g') => return Some(AppCommand::SetPendingKey('g')),
        Key::Char('t') => return Some(AppCommand::ToggleDarkMode),
        _ => {}
    }

    if state.view.top_level == TopLevelView::Dashboard {
        handle_dashboard_keys(key, state)
    } else {
        handle_public_keys(key, state)
    }
}

fn handle_pending_sequence(pending: char, key: Key, state: &AppState) -> Option<AppCommand> {
    let logged_in = state.view.logged_in;

    match (pending, key) {
        // 'g' followed by 'g' -> navigate to top
        ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),

        ('g', Key::Char('t')) if !logged_in => {
            Some(AppCommand::NavigateTo(TopLevelView::Translator))
        }
        ('g', Key::Char('a')) if !logged_in => Some(AppCommand::NavigateTo(TopLevelView::About)),
        ('g', Key::Char('c')) if !logged_in => {
            Some(AppCommand::NavigateTo(TopLevelView::Contribute))
        }

        ('g', Key::Char('o')) if logged_in => {
            Some(AppCommand::NavigateDashboard(DashboardView::Overview))
        }
        ('g', Key::Char('s')) if logged_in => {
            Some(AppCommand::NavigateDashboard(DashboardView::Signs))
        }
        ('g', Key::Char('u')) if logged_in => {
            Some(AppCommand::NavigateDashboard(DashboardView::Users))
        }
        ('g', Key::Char('p')) if logged_in => {
            Some(AppCommand::NavigateDashboard(DashboardView::Profile))
        }

        // Any other key clears the pending key
        _ => Some(AppCommand::ClearPendingKey),
    }
}

/// Translator, About and Contribute
fn handle_public_keys(key: Key, state: &AppState) -> Option<AppCommand> {
    match (state.view.top_level, key) {
        (_, Key::Char('1')) => Some(AppCommand::NavigateTo(TopLevelView::Translator)),
        (_, Key::Char('2')) => Some(AppCommand::NavigateTo(TopLevelView::About)),
        (_, Key::Char('3')) => Some(AppCommand::NavigateTo(TopLevelView::Contribute)),
        (_, Key::Char('L')) => Some(AppCommand::OpenOverlay(Overlay::Auth)),

        (TopLevelView::Translator, Key::Char('i')) => Some(AppCommand::EnterInputMode),
        (TopLevelView::Translator, Key::Char('c')) => Some(AppCommand::ClearInput),
        (TopLevelView::Translator, Key::Char('E')) => {
            Some(AppCommand::OpenOverlay(Overlay::ExpandViewer))
        }
        (TopLevelView::Translator, Key::Char('G') | Key::End) => {
            Some(AppCommand::NavigateToBottom)
        }
        (TopLevelView::Translator, Key::Home) => Some(AppCommand::NavigateToTop),
        (TopLevelView::Translator, Key::Enter) => state
            .selected_translation()
            .map(|item| AppCommand::ShowDetails(item.id)),
        (TopLevelView::Translator, Key::Char('x')) => state
            .selected_translation()
            .map(|item| AppCommand::OpenOverlay(Overlay::ImageViewer(item.image.clone()))),
        (TopLevelView::Translator, key) => grid_move(key).map(AppCommand::MoveCard),

        _ => None,
    }
}

fn handle_dashboard_keys(key: Key, state: &AppState) -> Option<AppCommand> {
    match key {
        Key::Char('1') => return Some(AppCommand::NavigateDashboard(DashboardView::Overview)),
        Key::Char('2') => return Some(AppCommand::NavigateDashboard(DashboardView::Signs)),
        Key::Char('3') => return Some(AppCommand::NavigateDashboard(DashboardView::Users)),
        Key::Char('4') => return Some(AppCommand::NavigateDashboard(DashboardView::Profile)),
        Key::Char('m') => return Some(AppCommand::OpenOverlay(Overlay::ProfileMenu)),
        Key::Char('N') => return Some(AppCommand::OpenOverlay(Overlay::Notifications)),
        Key::Char('b') => return Some(AppCommand::ToggleSidebarCollapsed),
        Key::Char('B') => return Some(AppCommand::OpenOverlay(Overlay::Sidebar)),
        _ => {}
    }

    let Some(scope) = state.current_scope() else {
        // Profile view
        return match key {
            Key::Char('e') => Some(AppCommand::EditProfile),
            _ => None,
        };
    };

    match (scope, key) {
        (_, Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (_, Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (_, Key::Char('G') | Key::End) => Some(AppCommand::NavigateToBottom),
        (_, Key::Home) => Some(AppCommand::NavigateToTop),
        (_, Key::Char('/')) => Some(AppCommand::EnterSearchMode),
        (_, Key::Char('f')) => Some(AppCommand::OpenOverlay(Overlay::FilterPopover(scope))),
        (_, Key::Char('d')) => state
            .selected_delete_target(scope)
            .map(AppCommand::RequestDelete),
        (_, Key::Esc) if !state.search_query(scope).is_empty() => Some(AppCommand::ClearSearch),

        (FilterScope::Overview, Key::Char('n')) => {
            Some(AppCommand::OpenOverlay(Overlay::Notifications))
        }

        (FilterScope::Signs | FilterScope::Users, Key::Tab) => Some(AppCommand::NextTab),
        (FilterScope::Signs | FilterScope::Users, Key::BackTab) => Some(AppCommand::PreviousTab),
        (FilterScope::Signs, Key::Char('n')) => Some(AppCommand::OpenOverlay(Overlay::CreateSign)),
        (FilterScope::Users, Key::Char('n')) => Some(AppCommand::OpenOverlay(Overlay::CreateUser)),

        _ => None,
    }
}

fn handle_overlay_keys(kind: OverlayKind, event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    match kind {
        OverlayKind::DeleteConfirmation => match key {
            Key::Char('y') | Key::Char('Y') | Key::Enter => Some(AppCommand::ConfirmDelete),
            Key::Char('n') | Key::Char('N') | Key::Esc => Some(AppCommand::CancelDelete),
            _ => None,
        },

        OverlayKind::CreateSign | OverlayKind::CreateUser | OverlayKind::Auth => {
            handle_form_overlay_keys(kind, event)
        }

        OverlayKind::Details => match key {
            Key::Esc => Some(AppCommand::CloseOverlay(kind)),
            Key::Up | Key::Char('k') => Some(AppCommand::MoveOverlayCursor { down: false }),
            Key::Down | Key::Char('j') => Some(AppCommand::MoveOverlayCursor { down: true }),
            Key::Enter => state
                .related_items()
                .get(state.translator.related_cursor)
                .map(|item| AppCommand::ShowDetails(item.id)),
            Key::Char('x') => state
                .details_item()
                .map(|item| AppCommand::OpenOverlay(Overlay::ImageViewer(item.image.clone()))),
            _ => None,
        },

        OverlayKind::ImageViewer => match key {
            Key::Esc => Some(AppCommand::CloseOverlay(kind)),
            Key::Char('+') | Key::Char('=') => Some(AppCommand::ZoomIn),
            Key::Char('-') => Some(AppCommand::ZoomOut),
            Key::Char('0') => Some(AppCommand::ResetZoom),
            _ => None,
        },

        OverlayKind::ExpandViewer => match key {
            Key::Esc => Some(AppCommand::CloseOverlay(kind)),
            Key::Enter => state
                .selected_translation()
                .map(|item| AppCommand::ShowDetails(item.id)),
            Key::Char('x') => state
                .selected_translation()
                .map(|item| AppCommand::OpenOverlay(Overlay::ImageViewer(item.image.clone()))),
            key => grid_move(key).map(AppCommand::MoveCard),
        },

        OverlayKind::Notifications => match key {
            Key::Esc => Some(AppCommand::CloseOverlay(kind)),
            Key::Up | Key::Char('k') => Some(AppCommand::MoveOverlayCursor { down: false }),
            Key::Down | Key::Char('j') => Some(AppCommand::MoveOverlayCursor { down: true }),
            Key::Enter => state
                .store
                .notifications
                .as_slice()
                .get(state.notifications_cursor)
                .map(|notification| AppCommand::MarkNotificationRead(notification.id)),
            Key::Char('a') => Some(AppCommand::MarkAllNotificationsRead),
            _ => None,
        },

        OverlayKind::FilterPopover(scope) => {
            let date_focused = scope == FilterScope::Users && state.users.popover_date_focused;
            match key {
                Key::Esc | Key::Enter => Some(AppCommand::CloseOverlay(kind)),
                Key::Tab if scope == FilterScope::Users => Some(AppCommand::ToggleDateFilterFocus),
                Key::Backspace if date_focused => Some(AppCommand::DeleteDateFilterChar),
                Key::Char(c) if date_focused => Some(AppCommand::AppendDateFilterChar(c)),
                Key::Char('f') => Some(AppCommand::CloseOverlay(kind)),
                Key::Up | Key::Char('k') => Some(AppCommand::MoveOverlayCursor { down: false }),
                Key::Down | Key::Char('j') => Some(AppCommand::MoveOverlayCursor { down: true }),
                _ => None,
            }
        }

        OverlayKind::ProfileMenu => match key {
            Key::Esc | Key::Char('m') => Some(AppCommand::CloseOverlay(kind)),
            Key::Up | Key::Char('k') => Some(AppCommand::MoveOverlayCursor { down: false }),
            Key::Down | Key::Char('j') => Some(AppCommand::MoveOverlayCursor { down: true }),
            Key::Enter => match state.profile_menu_cursor {
                2 => Some(AppCommand::Logout),
                index => Some(AppCommand::ChooseProfileMenuItem(index)),
            },
            _ => None,
        },

        OverlayKind::Sidebar => match key {
            Key::Esc | Key::Char('B') => Some(AppCommand::CloseOverlay(kind)),
            Key::Up | Key::Char('k') => Some(AppCommand::MoveOverlayCursor { down: false }),
            Key::Down | Key::Char('j') => Some(AppCommand::MoveOverlayCursor { down: true }),
            Key::Enter => DashboardView::SIDEBAR
                .get(state.sidebar_cursor)
                .map(|view| AppCommand::NavigateDashboard(*view)),
            _ => None,
        },
    }
}

fn handle_form_overlay_keys(kind: OverlayKind, event: KeyEvent) -> Option<AppCommand> {
    if event.modifiers.ctrl {
        return match (kind, event.key) {
            (_, Key::Char('p')) => Some(AppCommand::TogglePasswordVisibility),
            (OverlayKind::Auth, Key::Char('l')) => Some(AppCommand::SwitchAuthMode(AuthMode::Login)),
            (OverlayKind::Auth, Key::Char('n')) => {
                Some(AppCommand::SwitchAuthMode(AuthMode::Register))
            }
            (OverlayKind::Auth, Key::Char('f')) => {
                Some(AppCommand::SwitchAuthMode(AuthMode::ForgotPassword))
            }
            _ => None,
        };
    }

    match event.key {
        Key::Esc => Some(AppCommand::CloseOverlay(kind)),
        Key::Enter => Some(AppCommand::SubmitForm),
        key => form_edit_command(key),
    }
}

fn handle_profile_form_keys(event: KeyEvent) -> Option<AppCommand> {
    if event.modifiers.ctrl {
        return match event.key {
            Key::Char('p') => Some(AppCommand::TogglePasswordVisibility),
            Key::Char('s') => Some(AppCommand::SaveProfile),
            _ => None,
        };
    }

    match event.key {
        Key::Esc => Some(AppCommand::CancelProfileEdit),
        Key::Enter => Some(AppCommand::SaveProfile),
        key => form_edit_command(key),
    }
}

/// Keys shared by every form: focus movement, typing and choice cycling
fn form_edit_command(key: Key) -> Option<AppCommand> {
    match key {
        Key::Tab | Key::Down => Some(AppCommand::FormNextField),
        Key::BackTab | Key::Up => Some(AppCommand::FormPreviousField),
        Key::Left => Some(AppCommand::FormCycleChoice { forward: false }),
        Key::Right => Some(AppCommand::FormCycleChoice { forward: true }),
        Key::Backspace => Some(AppCommand::FormDeleteChar),
        Key::Char(c) => Some(AppCommand::FormAppendChar(c)),
        _ => None,
    }
}

fn grid_move(key: Key) -> Option<GridMove> {
    match key {
        Key::Left | Key::Char('h') => Some(GridMove::Left),
        Key::Right | Key::Char('l') => Some(GridMove::Right),
        Key::Up | Key::Char('k') => Some(GridMove::Up),
        Key::Down | Key::Char('j') => Some(GridMove::Down),
        _ => None,
    }
}
