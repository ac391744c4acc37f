use crate::background::{profile_saver::ProfileSaver, BackgroundTaskManager, PROFILE_SAVE_TASK};
use crate::events::AppCommand;
use crate::state::validators::{self, today};
use crate::state::*;
use throbber_widgets_tui::ThrobberState;

/// Execute a command, spawning background tasks where the command needs one
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    profile_saver: &ProfileSaver,
) {
    match command {
        AppCommand::SaveProfile => {
            if let Some((generation, name, email)) = begin_profile_save(state) {
                let profile_saver = profile_saver.clone();
                let future = async move {
                    profile_saver.save(generation, name, email).await;
                };
                task_manager.spawn_task(PROFILE_SAVE_TASK, future);
            }
            state.pending_key = None;
        }

        AppCommand::Logout => {
            task_manager.cancel(PROFILE_SAVE_TASK);
            execute_command_sync(AppCommand::Logout, state);
        }

        command => execute_command_sync(command, state),
    }
}

/// Execute a command by updating state only (no background tasks)
///
/// Used for every command without side effects, and by the testing module.
/// `SaveProfile` only marks the profile busy here; tests inject the
/// completion event by hand.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::SetPendingKey(c) => state.pending_key = Some(c),
        AppCommand::ClearPendingKey => state.pending_key = None,
        AppCommand::ToggleDarkMode => state.dark_mode = !state.dark_mode,
        AppCommand::ToggleSidebarCollapsed => {
            state.view.sidebar_collapsed = !state.view.sidebar_collapsed
        }

        // Table selection
        AppCommand::SelectNext => {
            if let Some(scope) = state.current_scope() {
                state.table(scope).select_next(state.visible_len(scope));
            }
        }
        AppCommand::SelectPrevious => {
            if let Some(scope) = state.current_scope() {
                state.table(scope).select_prev(state.visible_len(scope));
            }
        }
        AppCommand::NavigateToTop => match state.current_scope() {
            Some(scope) => state.table(scope).select_first(state.visible_len(scope)),
            None => state.translator.selected = 0,
        },
        AppCommand::NavigateToBottom => match state.current_scope() {
            Some(scope) => state.table(scope).select_last(state.visible_len(scope)),
            None => state.translator.selected = state.store.translations.len().saturating_sub(1),
        },

        // Navigation
        AppCommand::NavigateTo(view) => {
            state.view.navigate_to(view);
            state.translator.editing = false;
        }
        AppCommand::NavigateDashboard(view) => {
            if !state.view.logged_in {
                tracing::debug!("Ignoring dashboard navigation while logged out");
            } else {
                state.view.navigate_dashboard(view);
                if view != DashboardView::Profile {
                    cancel_profile_edit(state);
                }
            }
        }

        // Translator
        AppCommand::EnterInputMode => state.translator.editing = true,
        AppCommand::ExitInputMode => state.translator.editing = false,
        AppCommand::AppendInputChar(c) => {
            if state.translator.char_count() < state.max_input_chars {
                state.translator.input.push(c);
            }
        }
        AppCommand::DeleteInputChar => {
            state.translator.input.pop();
        }
        AppCommand::ClearInput => state.translator.input.clear(),
        AppCommand::MoveCard(direction) => {
            let len = state.store.translations.len();
            state.translator.move_selection(direction, len);
        }

        // Overlays
        AppCommand::OpenOverlay(overlay) => open_overlay(state, overlay),
        AppCommand::CloseOverlay(kind) => {
            state.view.close_overlay(kind);
            if kind == OverlayKind::Auth {
                state.auth.form.clear_secrets();
            }
        }
        AppCommand::ShowDetails(id) => {
            if state.view.show_details(id, &state.store.translations) {
                state.translator.related_cursor = 0;
            }
        }
        AppCommand::ZoomIn => {
            if let Some(viewer) = state.view.image_viewer.as_mut() {
                viewer.zoom_in();
            }
        }
        AppCommand::ZoomOut => {
            if let Some(viewer) = state.view.image_viewer.as_mut() {
                viewer.zoom_out();
            }
        }
        AppCommand::ResetZoom => {
            if let Some(viewer) = state.view.image_viewer.as_mut() {
                viewer.reset_zoom();
            }
        }
        AppCommand::MoveOverlayCursor { down } => move_overlay_cursor(state, down),

        // Forms
        AppCommand::FormNextField => {
            if let Some(form) = state.active_form_mut() {
                form.focus_next();
            }
        }
        AppCommand::FormPreviousField => {
            if let Some(form) = state.active_form_mut() {
                form.focus_previous();
            }
        }
        AppCommand::FormAppendChar(c) => {
            if let Some(form) = state.active_form_mut() {
                form.push_char(c);
            }
        }
        AppCommand::FormDeleteChar => {
            if let Some(form) = state.active_form_mut() {
                form.pop_char();
            }
        }
        AppCommand::FormCycleChoice { forward } => {
            if let Some(form) = state.active_form_mut() {
                form.cycle_choice(forward);
            }
        }
        AppCommand::TogglePasswordVisibility => {
            if let Some(form) = state.active_form_mut() {
                form.reveal_secrets = !form.reveal_secrets;
            }
        }
        AppCommand::SwitchAuthMode(mode) => {
            if state.view.auth_open {
                state.auth.switch_mode(mode);
            }
        }
        AppCommand::SubmitForm => submit_form(state),

        // Search mode
        AppCommand::EnterSearchMode => {
            if let Some(scope) = state.current_scope() {
                set_searching(state, scope, true);
            }
        }
        AppCommand::ExitSearchMode => {
            if let Some(scope) = state.current_scope() {
                set_searching(state, scope, false);
            }
        }
        AppCommand::AppendSearchChar(c) => {
            if let Some(scope) = state.current_scope() {
                edit_query(state, scope, |query| query.push(c));
            }
        }
        AppCommand::DeleteSearchChar => {
            if let Some(scope) = state.current_scope() {
                edit_query(state, scope, |query| {
                    query.pop();
                });
            }
        }
        AppCommand::ClearSearch => {
            if let Some(scope) = state.current_scope() {
                edit_query(state, scope, String::clear);
                set_searching(state, scope, false);
            }
        }

        // Registered-date field of the users popover
        AppCommand::ToggleDateFilterFocus => {
            state.users.popover_date_focused = !state.users.popover_date_focused
        }
        AppCommand::AppendDateFilterChar(c) => {
            state.users.criteria.registered.push(c);
            state.reset_table_selections();
        }
        AppCommand::DeleteDateFilterChar => {
            state.users.criteria.registered.pop();
            state.reset_table_selections();
        }

        // Tabs
        AppCommand::NextTab => step_tab(state, true),
        AppCommand::PreviousTab => step_tab(state, false),

        // Deletion
        AppCommand::RequestDelete(target) => state.view.request_delete(target),
        AppCommand::ConfirmDelete => {
            state.view.confirm_delete(&mut state.store);
            state.clamp_table_selections();
        }
        AppCommand::CancelDelete => state.view.cancel_delete(),

        // Notifications
        AppCommand::MarkNotificationRead(id) => {
            state.store.mark_notification_read(id);
        }
        AppCommand::MarkAllNotificationsRead => {
            let changed = state.store.mark_all_notifications_read();
            tracing::info!("Marked {} notifications read", changed);
        }

        // Profile
        AppCommand::ChooseProfileMenuItem(index) => {
            state.view.close_overlay(OverlayKind::ProfileMenu);
            match index {
                0 => execute_command_sync(
                    AppCommand::NavigateDashboard(DashboardView::Profile),
                    state,
                ),
                1 => open_overlay(state, Overlay::Notifications),
                _ => execute_command_sync(AppCommand::Logout, state),
            }
        }
        AppCommand::EditProfile => {
            if !state.profile.save.is_loading() {
                state.profile.form = FormState::profile(&state.profile.name, &state.profile.email);
                state.profile.editing = true;
            }
        }
        AppCommand::CancelProfileEdit => cancel_profile_edit(state),
        AppCommand::SaveProfile => {
            begin_profile_save(state);
        }
        AppCommand::Logout => logout(state),
    }

    // Clear pending key after any command except SetPendingKey
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }
}

fn open_overlay(state: &mut AppState, overlay: Overlay) {
    match &overlay {
        Overlay::Auth => {
            if state.view.logged_in {
                return;
            }
            // Fields start empty every time the modal opens
            state.auth = AuthForm::default();
        }
        Overlay::CreateSign => state.sign_form.reset(),
        Overlay::CreateUser => state.user_form.reset(),
        Overlay::Notifications => state.notifications_cursor = 0,
        Overlay::ProfileMenu => state.profile_menu_cursor = 0,
        Overlay::Sidebar => {
            state.sidebar_cursor = DashboardView::SIDEBAR
                .iter()
                .position(|view| *view == state.view.dashboard_view)
                .unwrap_or(0);
        }
        Overlay::FilterPopover(scope) => sync_popover_cursor(state, *scope),
        Overlay::ImageViewer(_) | Overlay::ExpandViewer | Overlay::DeleteConfirmation(_) => {}
    }

    state.view.open_overlay(overlay);
}

/// Point the popover cursor at the option currently applied
fn sync_popover_cursor(state: &mut AppState, scope: FilterScope) {
    match scope {
        FilterScope::Overview => {
            let status = state.overview.criteria.status;
            state.overview.popover_cursor = OVERVIEW_STATUS_OPTIONS
                .iter()
                .position(|option| *option == status)
                .unwrap_or(0);
        }
        FilterScope::Signs => {
            let category = state.signs.criteria.category.as_deref();
            state.signs.popover_cursor = CATEGORY_OPTIONS
                .iter()
                .position(|option| *option == category)
                .unwrap_or(0);
        }
        FilterScope::Users => {
            let status = state.users.criteria.status;
            state.users.popover_cursor = USER_STATUS_OPTIONS
                .iter()
                .position(|option| *option == status)
                .unwrap_or(0);
            state.users.popover_date_focused = false;
        }
    }
}

fn step(cursor: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        0
    } else if down {
        (cursor + 1) % len
    } else {
        (cursor + len - 1) % len
    }
}

fn move_overlay_cursor(state: &mut AppState, down: bool) {
    match state.view.topmost_overlay() {
        Some(OverlayKind::Details) => {
            let len = state.related_items().len();
            state.translator.related_cursor = step(state.translator.related_cursor, len, down);
        }
        Some(OverlayKind::Notifications) => {
            let len = state.store.notifications.len();
            state.notifications_cursor = step(state.notifications_cursor, len, down);
        }
        Some(OverlayKind::ProfileMenu) => {
            state.profile_menu_cursor =
                step(state.profile_menu_cursor, PROFILE_MENU_ITEMS.len(), down);
        }
        Some(OverlayKind::Sidebar) => {
            state.sidebar_cursor = step(state.sidebar_cursor, DashboardView::SIDEBAR.len(), down);
        }
        Some(OverlayKind::FilterPopover(scope)) => {
            // Moving the cursor applies the option immediately
            match scope {
                FilterScope::Overview => {
                    let cursor =
                        step(state.overview.popover_cursor, OVERVIEW_STATUS_OPTIONS.len(), down);
                    state.overview.popover_cursor = cursor;
                    state.overview.criteria.status = OVERVIEW_STATUS_OPTIONS[cursor];
                }
                FilterScope::Signs => {
                    let cursor =
                        step(state.signs.popover_cursor, CATEGORY_OPTIONS.len(), down);
                    state.signs.popover_cursor = cursor;
                    state.signs.criteria.category = CATEGORY_OPTIONS[cursor].map(str::to_string);
                }
                FilterScope::Users => {
                    let cursor =
                        step(state.users.popover_cursor, USER_STATUS_OPTIONS.len(), down);
                    state.users.popover_cursor = cursor;
                    state.users.criteria.status = USER_STATUS_OPTIONS[cursor];
                }
            }
            state.reset_table_selections();
        }
        _ => {}
    }
}

fn set_searching(state: &mut AppState, scope: FilterScope, searching: bool) {
    match scope {
        FilterScope::Overview => state.overview.searching = searching,
        FilterScope::Signs => state.signs.searching = searching,
        FilterScope::Users => state.users.searching = searching,
    }
}

fn edit_query(state: &mut AppState, scope: FilterScope, edit: impl FnOnce(&mut String)) {
    match scope {
        FilterScope::Overview => edit(state.overview.criteria.query_mut()),
        FilterScope::Signs => edit(state.signs.criteria.query_mut()),
        FilterScope::Users => edit(state.users.criteria.query_mut()),
    }
    let len = state.visible_len(scope);
    state.table(scope).reset_selection(len);
}

fn step_tab(state: &mut AppState, forward: bool) {
    match state.current_scope() {
        Some(FilterScope::Signs) => {
            let tab = state.signs.criteria.tab;
            state.signs.criteria.tab = if forward { tab.next() } else { tab.previous() };
        }
        Some(FilterScope::Users) => {
            let current = ROLE_TABS
                .iter()
                .position(|role| *role == state.users.criteria.role)
                .unwrap_or(0);
            state.users.criteria.role = ROLE_TABS[step(current, ROLE_TABS.len(), forward)];
        }
        _ => return,
    }
    state.reset_table_selections();
}

/// Submit whichever overlay form is on top
fn submit_form(state: &mut AppState) {
    if state.view.create_sign_open {
        match validators::build_sign(&state.sign_form, &state.profile.name, &today()) {
            Ok(draft) => {
                state.store.append_record(draft);
                state.view.close_overlay(OverlayKind::CreateSign);
                state.sign_form.reset();
                state.clamp_table_selections();
            }
            Err(e) => {
                tracing::debug!("Create sign rejected: {}", e);
                state.sign_form.error = Some(e.to_string());
            }
        }
    } else if state.view.create_user_open {
        match validators::build_user(&state.user_form, &today()) {
            Ok(draft) => {
                state.store.append_record(draft);
                state.view.close_overlay(OverlayKind::CreateUser);
                state.user_form.reset();
                state.clamp_table_selections();
            }
            Err(e) => {
                tracing::debug!("Create user rejected: {}", e);
                state.user_form.error = Some(e.to_string());
            }
        }
    } else if state.view.auth_open {
        submit_auth(state);
    }
}

fn submit_auth(state: &mut AppState) {
    match state.auth.mode {
        AuthMode::Login => match validators::validate_login(&state.auth.form) {
            Ok(()) => {
                state.auth = AuthForm::default();
                state.translator.editing = false;
                state.view.login();
                state.reset_table_selections();
            }
            Err(e) => state.auth.form.error = Some(e.to_string()),
        },
        // Accepted without a backend; back to the login form
        AuthMode::Register | AuthMode::ForgotPassword => {
            tracing::info!("{:?} submitted", state.auth.mode);
            state.auth.switch_mode(AuthMode::Login);
        }
    }
}

/// Validate the profile form and mark the save busy. Returns the values to
/// persist, or None when nothing should be spawned.
fn begin_profile_save(state: &mut AppState) -> Option<(u64, String, String)> {
    if !state.profile_editing() || state.profile.save.is_loading() {
        return None;
    }

    match validators::validate_profile(&state.profile.form) {
        Ok((name, email)) => {
            state.profile.save = LoadingState::Loading(ThrobberState::default());
            state.profile.save_generation += 1;
            state.profile.editing = false;
            state.profile.form.clear_secrets();
            state.profile.form.reveal_secrets = false;
            Some((state.profile.save_generation, name, email))
        }
        Err(e) => {
            state.profile.form.error = Some(e.to_string());
            None
        }
    }
}

fn cancel_profile_edit(state: &mut AppState) {
    state.profile.editing = false;
    state.profile.form = FormState::profile(&state.profile.name, &state.profile.email);
}

fn logout(state: &mut AppState) {
    state.view.logout();
    state.profile.save = LoadingState::NotStarted;
    cancel_profile_edit(state);
    state.auth = AuthForm::default();
    for scope in [FilterScope::Overview, FilterScope::Signs, FilterScope::Users] {
        set_searching(state, scope, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::GridMove;
    use crate::settings::Settings;
    use esinais_data::{CollectionId, RecordId, SignStatus};

    fn logged_in(view: DashboardView) -> AppState {
        let mut state = AppState::seeded(&Settings::default()).unwrap();
        state.view.login();
        state.view.navigate_dashboard(view);
        state
    }

    #[test]
    fn test_pending_key_cleared_by_other_commands() {
        let mut state = AppState::seeded(&Settings::default()).unwrap();
        execute_command_sync(AppCommand::SetPendingKey('g'), &mut state);
        assert_eq!(state.pending_key, Some('g'));

        execute_command_sync(AppCommand::ToggleDarkMode, &mut state);
        assert_eq!(state.pending_key, None);
        assert!(state.dark_mode);
    }

    #[test]
    fn test_input_capped_at_max_chars() {
        let settings = Settings {
            max_input_chars: 3,
            ..Default::default()
        };
        let mut state = AppState::seeded(&settings).unwrap();
        execute_command_sync(AppCommand::ClearInput, &mut state);
        for c in "abcd".chars() {
            execute_command_sync(AppCommand::AppendInputChar(c), &mut state);
        }
        assert_eq!(state.translator.input, "abc");
    }

    #[test]
    fn test_card_grid_moves() {
        let mut state = AppState::seeded(&Settings::default()).unwrap();
        execute_command_sync(AppCommand::MoveCard(GridMove::Down), &mut state);
        assert_eq!(state.translator.selected, CARD_COLUMNS);
        execute_command_sync(AppCommand::MoveCard(GridMove::Left), &mut state);
        assert_eq!(state.translator.selected, CARD_COLUMNS - 1);
        execute_command_sync(AppCommand::NavigateToBottom, &mut state);
        assert_eq!(state.translator.selected, 9);
    }

    #[test]
    fn test_confirm_delete_clamps_selection() {
        let mut state = logged_in(DashboardView::Signs);
        state.signs.table_state.borrow_mut().select(Some(9));

        execute_command_sync(
            AppCommand::RequestDelete(DeleteTarget::new(CollectionId::Signs, RecordId::new(10))),
            &mut state,
        );
        execute_command_sync(AppCommand::ConfirmDelete, &mut state);

        assert_eq!(state.store.signs.len(), 9);
        assert_eq!(state.signs.selected(), Some(8));
        assert!(state.view.delete_target.is_none());
    }

    #[test]
    fn test_popover_cursor_applies_filter() {
        let mut state = logged_in(DashboardView::Overview);
        execute_command_sync(
            AppCommand::OpenOverlay(Overlay::FilterPopover(FilterScope::Overview)),
            &mut state,
        );
        execute_command_sync(AppCommand::MoveOverlayCursor { down: true }, &mut state);

        assert_eq!(
            state.overview.criteria.status,
            Some(SignStatus::Approved)
        );
        assert_eq!(state.visible_overview().len(), 4);
    }

    #[test]
    fn test_reopening_popover_keeps_cursor_on_applied_option() {
        let mut state = logged_in(DashboardView::Signs);
        state.signs.criteria.category = Some("Saúde".to_string());

        execute_command_sync(
            AppCommand::OpenOverlay(Overlay::FilterPopover(FilterScope::Signs)),
            &mut state,
        );
        assert_eq!(state.signs.popover_cursor, 2);
    }

    #[test]
    fn test_popover_cursor_wraps_to_last_option() {
        let mut state = logged_in(DashboardView::Signs);
        execute_command_sync(
            AppCommand::OpenOverlay(Overlay::FilterPopover(FilterScope::Signs)),
            &mut state,
        );
        execute_command_sync(AppCommand::MoveOverlayCursor { down: false }, &mut state);

        assert_eq!(state.signs.popover_cursor, CATEGORY_OPTIONS.len() - 1);
        assert_eq!(state.signs.criteria.category.as_deref(), Some("Educação"));

        execute_command_sync(AppCommand::MoveOverlayCursor { down: true }, &mut state);
        assert_eq!(state.signs.popover_cursor, 0);
        assert_eq!(state.signs.criteria.category, None);
    }

    #[test]
    fn test_user_role_tabs_cycle() {
        let mut state = logged_in(DashboardView::Users);
        execute_command_sync(AppCommand::NextTab, &mut state);
        assert_eq!(state.users.criteria.role, Some(esinais_data::UserRole::Admin));
        assert_eq!(state.visible_users().len(), 2);

        execute_command_sync(AppCommand::PreviousTab, &mut state);
        execute_command_sync(AppCommand::PreviousTab, &mut state);
        assert_eq!(
            state.users.criteria.role,
            Some(esinais_data::UserRole::Standard)
        );
    }

    #[test]
    fn test_create_sign_error_keeps_form_open() {
        let mut state = logged_in(DashboardView::Signs);
        execute_command_sync(AppCommand::OpenOverlay(Overlay::CreateSign), &mut state);
        execute_command_sync(AppCommand::SubmitForm, &mut state);

        assert!(state.view.create_sign_open);
        assert_eq!(state.sign_form.error.as_deref(), Some("Nome é obrigatório"));
        assert_eq!(state.store.signs.len(), 10);
    }

    #[test]
    fn test_save_profile_requires_edit_mode() {
        let mut state = logged_in(DashboardView::Profile);
        execute_command_sync(AppCommand::SaveProfile, &mut state);
        assert_eq!(state.profile.save, LoadingState::NotStarted);

        execute_command_sync(AppCommand::EditProfile, &mut state);
        execute_command_sync(AppCommand::SaveProfile, &mut state);
        assert!(state.profile.save.is_loading());
        assert!(!state.profile.editing);
        assert_eq!(state.profile.save_generation, 1);
    }

    #[test]
    fn test_logout_resets_view() {
        let mut state = logged_in(DashboardView::Users);
        state.users.searching = true;
        execute_command_sync(AppCommand::Logout, &mut state);

        assert_eq!(state.view, ViewState::default());
        assert!(!state.users.searching);
    }
}
