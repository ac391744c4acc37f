use esinais::events::{AppCommand, DataEvent};
use esinais::input::{Key, KeyEvent};
use esinais::state::{AuthMode, DashboardView, LoadingState, OverlayKind, TopLevelView};
use esinais::testing::TestApp;
use esinais::Settings;
use esinais_data::{RecordId, SignStatus, UserStatus};

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    app.assert_not_quit();
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_q_is_text_while_typing() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('i'));
    app.send_key(Key::Char('c'));
    app.type_text("quero");
    app.assert_not_quit();

    app.send_key(Key::Esc);
    assert!(app.state().translator.input.ends_with("quero"));
    assert!(!app.state().translator.editing);
}

#[test]
fn test_unbound_keys_produce_no_command() {
    let mut app = TestApp::new();

    app.send_keys(&[Key::Unbound, Key::Char('z')]);
    assert!(app.executed_commands().is_empty());

    app.send_keys(&[Key::Char('g'), Key::Char('z')]);
    assert_eq!(
        app.executed_commands(),
        &[AppCommand::SetPendingKey('g'), AppCommand::ClearPendingKey]
    );
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();

    assert!(!app.state().help_visible);
    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    // Keys other than ? and Esc are swallowed
    app.send_key(Key::Char('2'));
    app.assert_top_level(TopLevelView::Translator);

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_public_navigation() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('2'));
    app.assert_top_level(TopLevelView::About);

    app.send_keys(&[Key::Char('g'), Key::Char('c')]);
    app.assert_top_level(TopLevelView::Contribute);
    assert_eq!(app.state().pending_key, None);

    app.send_key(Key::Char('1'));
    app.assert_top_level(TopLevelView::Translator);
}

#[test]
fn test_translator_input_is_capped() {
    let settings = Settings {
        max_input_chars: 25,
        ..Settings::default()
    };
    let mut app = TestApp::with_settings(&settings);

    app.send_key(Key::Char('i'));
    app.type_text(" abacaxi abacaxi abacaxi");

    assert_eq!(app.state().translator.char_count(), 25);
}

#[test]
fn test_details_retarget_from_related_list() {
    let mut app = TestApp::new();

    app.send_key(Key::Enter);
    assert_eq!(app.state().view.details(), Some(RecordId::new(1)));

    app.send_key(Key::Char('j'));
    app.send_key(Key::Enter);

    assert_eq!(app.state().view.details(), Some(RecordId::new(3)));
    assert_eq!(app.state().view.topmost_overlay(), Some(OverlayKind::Details));

    app.send_key(Key::Esc);
    assert_eq!(app.state().view.topmost_overlay(), None);
}

#[test]
fn test_image_viewer_from_details_stacks_on_top() {
    let mut app = TestApp::new();

    app.send_key(Key::Enter);
    app.send_key(Key::Char('x'));
    assert_eq!(
        app.state().view.topmost_overlay(),
        Some(OverlayKind::ImageViewer)
    );

    app.send_keys(&[Key::Char('+'), Key::Char('+')]);
    assert_eq!(app.state().view.image_viewer.as_ref().unwrap().zoom, 2.0);

    app.send_key(Key::Esc);
    assert_eq!(app.state().view.topmost_overlay(), Some(OverlayKind::Details));
}

#[test]
fn test_login_requires_both_fields() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('L'));
    app.type_text("admin@esinais.com");
    app.send_key(Key::Enter);

    app.assert_top_level(TopLevelView::Translator);
    assert!(app.state().auth.form.error.is_some());
    assert!(app.state().view.auth_open);
}

#[test]
fn test_register_returns_to_login_mode() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('L'));
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('n')));
    assert_eq!(app.state().auth.mode, AuthMode::Register);

    app.type_text("Nova Pessoa");
    app.send_key(Key::Enter);

    assert_eq!(app.state().auth.mode, AuthMode::Login);
    assert!(!app.state().view.logged_in);
}

#[test]
fn test_logged_in_navigation_is_pinned_to_dashboard() {
    let mut app = TestApp::logged_in();
    app.assert_dashboard_view(DashboardView::Overview);

    app.send_key(Key::Char('2'));
    app.assert_top_level(TopLevelView::Dashboard);
    app.assert_dashboard_view(DashboardView::Signs);

    app.send_keys(&[Key::Char('g'), Key::Char('a')]);
    app.assert_top_level(TopLevelView::Dashboard);

    app.send_keys(&[Key::Char('g'), Key::Char('u')]);
    app.assert_dashboard_view(DashboardView::Users);
}

#[test]
fn test_logout_from_profile_menu_resets_navigation() {
    let mut app = TestApp::logged_in();
    app.send_key(Key::Char('3'));
    app.send_key(Key::Char('/'));
    app.type_text("costa");
    app.send_key(Key::Enter);

    app.send_key(Key::Char('m'));
    app.send_keys(&[Key::Char('j'), Key::Char('j'), Key::Enter]);

    app.assert_top_level(TopLevelView::Translator);
    assert!(!app.state().view.logged_in);
    assert_eq!(app.state().view.topmost_overlay(), None);

    // Dashboard views start over on the next login
    app.send_key(Key::Char('L'));
    app.type_text("admin@esinais.com");
    app.send_key(Key::Tab);
    app.type_text("senha");
    app.send_key(Key::Enter);
    app.assert_dashboard_view(DashboardView::Overview);
}

#[test]
fn test_signs_status_tab() {
    let mut app = TestApp::logged_in();
    app.send_key(Key::Char('2'));

    app.send_keys(&[Key::Tab, Key::Tab]);

    let visible = app.state().visible_signs();
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|sign| sign.status == SignStatus::Pending));
}

#[test]
fn test_user_search_is_case_insensitive() {
    let mut app = TestApp::logged_in();
    app.send_key(Key::Char('3'));

    app.send_key(Key::Char('/'));
    app.type_text("MARIA");
    app.send_key(Key::Enter);

    let visible = app.state().visible_users();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Maria da Silva");

    // Esc outside search mode clears the applied query
    app.send_key(Key::Esc);
    assert_eq!(app.state().visible_users().len(), 10);
}

#[test]
fn test_user_status_popover_applies_on_move() {
    let mut app = TestApp::logged_in();
    app.send_key(Key::Char('3'));

    app.send_key(Key::Char('f'));
    app.send_keys(&[Key::Char('j'), Key::Char('j')]);

    assert_eq!(app.state().users.criteria.status, Some(UserStatus::Inactive));
    assert_eq!(app.state().visible_users().len(), 2);

    app.send_key(Key::Tab);
    app.type_text("-04-");
    app.send_key(Key::Esc);

    // Paulo Santos is the only inactive user registered in April
    let visible = app.state().visible_users();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Paulo Santos");
}

#[test]
fn test_delete_cancel_then_confirm() {
    let mut app = TestApp::logged_in();
    app.send_key(Key::Char('2'));

    app.send_key(Key::Char('d'));
    assert_eq!(
        app.state().view.topmost_overlay(),
        Some(OverlayKind::DeleteConfirmation)
    );
    app.send_key(Key::Char('n'));
    assert_eq!(app.state().store.signs.len(), 10);

    app.send_key(Key::Char('G'));
    app.send_key(Key::Char('d'));
    app.send_key(Key::Char('y'));

    assert_eq!(app.state().store.signs.len(), 9);
    assert!(!app.state().store.signs.contains(RecordId::new(10)));
    // Selection follows the shorter table
    assert_eq!(app.state().signs.table_state.borrow().selected(), Some(8));
}

#[test]
fn test_create_sign_appends_pending_record() {
    let mut app = TestApp::logged_in();
    app.send_key(Key::Char('2'));
    app.send_key(Key::Char('n'));

    // Required fields missing
    app.send_key(Key::Enter);
    assert!(app.state().sign_form.error.is_some());

    app.type_text("Abacaxi");
    app.send_keys(&[Key::Tab, Key::Right]); // Substantivo
    app.send_keys(&[Key::Tab, Key::Right]); // Universal
    app.send_keys(&[Key::Tab, Key::Tab, Key::Tab, Key::Tab, Key::Right]); // Por arquivo
    app.send_key(Key::Enter);

    let state = app.state();
    assert!(!state.view.create_sign_open);
    assert_eq!(state.store.signs.len(), 11);

    let created = state.store.signs.as_slice().last().unwrap();
    assert_eq!(created.id, RecordId::new(11));
    assert_eq!(created.name, "Abacaxi");
    assert_eq!(created.status, SignStatus::Pending);
    assert_eq!(created.category, "Geral");
    assert_eq!(created.submitted_by, "João Admin");
    assert_eq!(
        created.submitted_date,
        chrono::Local::now().format("%d-%m-%Y").to_string()
    );
}

#[test]
fn test_create_user_rejects_bad_email() {
    let mut app = TestApp::logged_in();
    app.send_key(Key::Char('3'));
    app.send_key(Key::Char('n'));

    app.type_text("Bruna Reis");
    app.send_key(Key::Tab);
    app.type_text("bruna.reis");
    app.send_key(Key::Tab);
    app.type_text("segredo");
    app.send_keys(&[Key::Tab, Key::Right]);
    app.send_key(Key::Enter);

    assert!(app.state().view.create_user_open);
    assert_eq!(app.state().store.users.len(), 10);

    app.send_keys(&[Key::Up, Key::Up]);
    app.type_text("@email.com");
    app.send_key(Key::Enter);

    assert!(!app.state().view.create_user_open);
    let created = app.state().store.users.as_slice().last().unwrap();
    assert_eq!(created.email, "bruna.reis@email.com");
    assert_eq!(created.status, UserStatus::Active);
}

#[test]
fn test_mark_all_notifications_is_idempotent() {
    let mut app = TestApp::logged_in();
    assert_eq!(app.state().store.unread_notifications(), 2);

    app.send_key(Key::Char('N'));
    app.send_key(Key::Enter);
    assert_eq!(app.state().store.unread_notifications(), 1);

    app.send_key(Key::Char('a'));
    app.send_key(Key::Char('a'));
    assert_eq!(app.state().store.unread_notifications(), 0);
    assert_eq!(app.state().store.notifications.len(), 4);
}

#[test]
fn test_profile_save_applies_on_completion() {
    let mut app = TestApp::logged_in();
    app.send_key(Key::Char('4'));
    app.send_key(Key::Char('e'));
    assert!(app.state().profile.editing);

    app.type_text(" Silva");
    app.send_key(Key::Enter);
    assert!(app.state().profile.save.is_loading());
    assert!(!app.state().profile.editing);

    let generation = app.state().profile.save_generation;
    app.send_data_event(DataEvent::ProfileSaved {
        generation,
        name: "João Admin Silva".to_string(),
        email: "admin@esinais.com".to_string(),
    });

    assert_eq!(app.state().profile.name, "João Admin Silva");
    assert_eq!(app.state().profile.save, LoadingState::Loaded);
}

#[test]
fn test_profile_password_mismatch_blocks_save() {
    let mut app = TestApp::logged_in();
    app.send_key(Key::Char('4'));
    app.send_key(Key::Char('e'));

    // Read-only role is skipped on the way to the current password
    app.send_keys(&[Key::Tab, Key::Tab]);
    app.type_text("antiga");
    app.send_key(Key::Tab);
    app.type_text("nova123");
    app.send_key(Key::Tab);
    app.type_text("nova124");
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('s')));

    assert!(app.state().profile.editing);
    assert!(app.state().profile.form.error.is_some());
    assert_eq!(app.state().profile.save, LoadingState::NotStarted);
}

#[test]
fn test_stale_profile_save_after_logout_is_ignored() {
    let mut app = TestApp::logged_in();
    app.send_key(Key::Char('4'));
    app.send_key(Key::Char('e'));
    app.send_key(Key::Enter);
    let generation = app.state().profile.save_generation;

    app.send_key(Key::Char('m'));
    app.send_keys(&[Key::Char('j'), Key::Char('j'), Key::Enter]);

    app.send_data_event(DataEvent::ProfileSaved {
        generation,
        name: "Outra Pessoa".to_string(),
        email: "outra@esinais.com".to_string(),
    });
    assert_eq!(app.state().profile.name, "João Admin");
}

#[test]
fn test_save_from_previous_session_does_not_complete_new_save() {
    let mut app = TestApp::logged_in();
    app.send_keys(&[Key::Char('4'), Key::Char('e'), Key::Enter]);
    let first = app.state().profile.save_generation;

    // Log out and back in, then start another save
    app.send_key(Key::Char('m'));
    app.send_keys(&[Key::Char('j'), Key::Char('j'), Key::Enter]);
    app.send_key(Key::Char('L'));
    app.type_text("admin@esinais.com");
    app.send_key(Key::Tab);
    app.type_text("senha");
    app.send_key(Key::Enter);
    app.send_keys(&[Key::Char('4'), Key::Char('e')]);
    app.type_text(" Filho");
    app.send_key(Key::Enter);
    let second = app.state().profile.save_generation;
    assert_ne!(first, second);

    app.send_data_event(DataEvent::ProfileSaved {
        generation: first,
        name: "Nome Antigo".to_string(),
        email: "admin@esinais.com".to_string(),
    });
    assert_eq!(app.state().profile.name, "João Admin");
    assert!(app.state().profile.save.is_loading());

    app.send_data_event(DataEvent::ProfileSaved {
        generation: second,
        name: "João Admin Filho".to_string(),
        email: "admin@esinais.com".to_string(),
    });
    assert_eq!(app.state().profile.name, "João Admin Filho");
    assert_eq!(app.state().profile.save, LoadingState::Loaded);
}
