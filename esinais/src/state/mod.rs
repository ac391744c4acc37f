pub mod forms;
pub mod navigator;
pub mod reducer;
pub mod validators;

pub use forms::{AuthForm, AuthMode, FormState};
pub use navigator::{
    DashboardView, DeleteTarget, FilterScope, ImageViewer, Overlay, OverlayKind, TopLevelView,
    ViewState,
};

use crate::events::GridMove;
use crate::settings::Settings;
use esinais_data::{
    filter, CollectionId, OverviewCriteria, RecentSubmission, RecordStore, SeedError,
    SignCriteria, SignRecord, SignStatus, TranslationItem, UserCriteria, UserRecord, UserRole,
    UserStatus,
};
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;

/// Progress of the simulated profile save
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

/// Cards per row in the translator grid
pub const CARD_COLUMNS: usize = 4;

pub const TRANSLATOR_PLACEHOLDER: &str = "Manga Manga Manga...";

/// Input counter turns red past this many characters
pub const INPUT_WARNING_CHARS: usize = 4000;

pub const CATEGORY_OPTIONS: [Option<&str>; 4] =
    [None, Some("Tecnologia"), Some("Saúde"), Some("Educação")];

pub const OVERVIEW_STATUS_OPTIONS: [Option<SignStatus>; 4] = [
    None,
    Some(SignStatus::Approved),
    Some(SignStatus::Pending),
    Some(SignStatus::Rejected),
];

pub const USER_STATUS_OPTIONS: [Option<UserStatus>; 4] = [
    None,
    Some(UserStatus::Active),
    Some(UserStatus::Inactive),
    Some(UserStatus::Blocked),
];

/// Role tabs above the users table
pub const ROLE_TABS: [Option<UserRole>; 4] = [
    None,
    Some(UserRole::Admin),
    Some(UserRole::Interpreter),
    Some(UserRole::Standard),
];

pub const PROFILE_MENU_ITEMS: [&str; 3] = ["Perfil", "Notificações", "Sair"];

#[derive(Debug, Clone)]
pub struct TranslatorState {
    pub input: String,
    pub editing: bool,
    /// Index into the card grid
    pub selected: usize,
    /// Index into the details modal's related list
    pub related_cursor: usize,
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self {
            input: TRANSLATOR_PLACEHOLDER.to_string(),
            editing: false,
            selected: 0,
            related_cursor: 0,
        }
    }
}

impl TranslatorState {
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Move the card selection within a grid of `len` cards.
    pub fn move_selection(&mut self, direction: GridMove, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1);
        self.selected = match direction {
            GridMove::Left => current.saturating_sub(1),
            GridMove::Right => (current + 1).min(len - 1),
            GridMove::Up => current.checked_sub(CARD_COLUMNS).unwrap_or(current),
            GridMove::Down if current + CARD_COLUMNS < len => current + CARD_COLUMNS,
            GridMove::Down => current,
        };
    }
}

/// Search text shared by every dashboard table's criteria
pub trait Searchable {
    fn query(&self) -> &str;
    fn query_mut(&mut self) -> &mut String;
}

impl Searchable for OverviewCriteria {
    fn query(&self) -> &str {
        &self.query
    }

    fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }
}

impl Searchable for SignCriteria {
    fn query(&self) -> &str {
        &self.query
    }

    fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }
}

impl Searchable for UserCriteria {
    fn query(&self) -> &str {
        &self.query
    }

    fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }
}

/// A filtered dashboard table
#[derive(Default, Debug, Clone)]
pub struct TableView<C> {
    pub criteria: C,
    pub searching: bool,
    pub table_state: RefCell<TableState>,
    pub popover_cursor: usize,
    /// Users popover only: typing goes to the registered-date field
    pub popover_date_focused: bool,
}

pub type OverviewState = TableView<OverviewCriteria>;
pub type SignsState = TableView<SignCriteria>;
pub type UsersState = TableView<UserCriteria>;

pub trait Scrollable {
    fn table_state(&self) -> &RefCell<TableState>;

    fn selected(&self) -> Option<usize> {
        self.table_state().borrow().selected()
    }

    fn select_prev(&self, num_items: usize) {
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            match table_state.selected() {
                Some(0) | None => table_state.select(Some(num_items - 1)),
                Some(index) => table_state.select(Some(index.min(num_items) - 1)),
            }
        }
    }

    fn select_next(&self, num_items: usize) {
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            match table_state.selected() {
                Some(index) if index + 1 < num_items => table_state.select(Some(index + 1)),
                _ => table_state.select(Some(0)),
            }
        }
    }

    fn select_first(&self, num_items: usize) {
        self.reset_selection(num_items);
    }

    fn select_last(&self, num_items: usize) {
        let index = num_items.checked_sub(1);
        self.table_state().borrow_mut().select(index);
    }

    /// First row, or nothing when the table is empty
    fn reset_selection(&self, num_items: usize) {
        let index = if num_items > 0 { Some(0) } else { None };
        self.table_state().borrow_mut().select(index);
    }

    /// Keep the selection inside the table after rows disappear.
    fn clamp_selection(&self, num_items: usize) {
        let mut table_state = self.table_state().borrow_mut();
        match (table_state.selected(), num_items) {
            (_, 0) => table_state.select(None),
            (Some(index), len) if index >= len => table_state.select(Some(len - 1)),
            (None, _) => table_state.select(Some(0)),
            _ => {}
        }
    }
}

impl<C> Scrollable for TableView<C> {
    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

#[derive(Debug, Clone)]
pub struct ProfileState {
    pub name: String,
    pub email: String,
    pub form: FormState,
    pub editing: bool,
    pub save: LoadingState,
    /// Bumped by every save that starts; only its completion is applied
    pub save_generation: u64,
}

impl ProfileState {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            form: FormState::profile(name, email),
            editing: false,
            save: LoadingState::default(),
            save_generation: 0,
        }
    }
}

/// Counters shown on the overview cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_signs: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    pub users: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub view: ViewState,

    // Screens
    pub translator: TranslatorState,
    pub overview: OverviewState,
    pub signs: SignsState,
    pub users: UsersState,
    pub profile: ProfileState,

    // Overlay contents
    pub auth: AuthForm,
    pub sign_form: FormState,
    pub user_form: FormState,
    pub notifications_cursor: usize,
    pub profile_menu_cursor: usize,
    pub sidebar_cursor: usize,

    // Preferences
    pub dark_mode: bool,
    pub max_input_chars: usize,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: RecordStore, settings: &Settings) -> Self {
        let state = Self {
            store,
            view: ViewState::new(),

            translator: TranslatorState::default(),
            overview: OverviewState::default(),
            signs: SignsState::default(),
            users: UsersState::default(),
            profile: ProfileState::new(&settings.profile_name, &settings.profile_email),

            auth: AuthForm::default(),
            sign_form: FormState::create_sign(),
            user_form: FormState::create_user(),
            notifications_cursor: 0,
            profile_menu_cursor: 0,
            sidebar_cursor: 0,

            dark_mode: settings.dark_mode,
            max_input_chars: settings.max_input_chars,

            help_visible: false,
            pending_key: None,

            should_quit: false,
        };
        state.reset_table_selections();
        state
    }

    /// State backed by the bundled seed document
    pub fn seeded(settings: &Settings) -> Result<Self, SeedError> {
        Ok(Self::new(RecordStore::seeded()?, settings))
    }

    pub fn visible_overview(&self) -> Vec<&RecentSubmission> {
        filter(
            self.store.recent_submissions.as_slice(),
            &self.overview.criteria,
        )
    }

    pub fn visible_signs(&self) -> Vec<&SignRecord> {
        filter(self.store.signs.as_slice(), &self.signs.criteria)
    }

    pub fn visible_users(&self) -> Vec<&UserRecord> {
        filter(self.store.users.as_slice(), &self.users.criteria)
    }

    /// Row count of the table behind a filter scope
    pub fn visible_len(&self, scope: FilterScope) -> usize {
        match scope {
            FilterScope::Overview => self.visible_overview().len(),
            FilterScope::Signs => self.visible_signs().len(),
            FilterScope::Users => self.visible_users().len(),
        }
    }

    pub fn table(&self, scope: FilterScope) -> &dyn Scrollable {
        match scope {
            FilterScope::Overview => &self.overview,
            FilterScope::Signs => &self.signs,
            FilterScope::Users => &self.users,
        }
    }

    pub fn search_query(&self, scope: FilterScope) -> &str {
        match scope {
            FilterScope::Overview => self.overview.criteria.query(),
            FilterScope::Signs => self.signs.criteria.query(),
            FilterScope::Users => self.users.criteria.query(),
        }
    }

    pub fn is_searching(&self, scope: FilterScope) -> bool {
        match scope {
            FilterScope::Overview => self.overview.searching,
            FilterScope::Signs => self.signs.searching,
            FilterScope::Users => self.users.searching,
        }
    }

    /// Dashboard table currently on screen
    pub fn current_scope(&self) -> Option<FilterScope> {
        self.view.current_filter_scope()
    }

    /// Delete target for the highlighted row of a dashboard table
    pub fn selected_delete_target(&self, scope: FilterScope) -> Option<DeleteTarget> {
        let index = self.table(scope).selected()?;
        match scope {
            FilterScope::Overview => self
                .visible_overview()
                .get(index)
                .map(|row| DeleteTarget::new(CollectionId::RecentSubmissions, row.id)),
            FilterScope::Signs => self
                .visible_signs()
                .get(index)
                .map(|sign| DeleteTarget::new(CollectionId::Signs, sign.id)),
            FilterScope::Users => self
                .visible_users()
                .get(index)
                .map(|user| DeleteTarget::new(CollectionId::Users, user.id)),
        }
    }

    /// Re-anchor every table selection to its current row count.
    pub fn clamp_table_selections(&self) {
        self.overview
            .clamp_selection(self.visible_len(FilterScope::Overview));
        self.signs.clamp_selection(self.visible_len(FilterScope::Signs));
        self.users.clamp_selection(self.visible_len(FilterScope::Users));
    }

    pub fn reset_table_selections(&self) {
        self.overview
            .reset_selection(self.visible_len(FilterScope::Overview));
        self.signs.reset_selection(self.visible_len(FilterScope::Signs));
        self.users.reset_selection(self.visible_len(FilterScope::Users));
    }

    pub fn selected_translation(&self) -> Option<&TranslationItem> {
        self.store.translations.as_slice().get(self.translator.selected)
    }

    pub fn details_item(&self) -> Option<&TranslationItem> {
        self.view
            .details()
            .and_then(|id| self.store.translations.get(id))
    }

    /// Every translation other than the one in the details modal
    pub fn related_items(&self) -> Vec<&TranslationItem> {
        self.store
            .translations
            .iter()
            .filter(|item| Some(item.id) != self.view.details())
            .collect()
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        let count = |status: SignStatus| {
            self.store
                .signs
                .iter()
                .filter(|sign| sign.status == status)
                .count()
        };

        DashboardStats {
            total_signs: self.store.signs.len(),
            approved: count(SignStatus::Approved),
            pending: count(SignStatus::Pending),
            rejected: count(SignStatus::Rejected),
            users: self.store.users.len(),
        }
    }

    /// The form receiving keystrokes, topmost first
    pub fn active_form(&self) -> Option<&FormState> {
        if self.view.create_sign_open {
            Some(&self.sign_form)
        } else if self.view.create_user_open {
            Some(&self.user_form)
        } else if self.view.auth_open {
            Some(&self.auth.form)
        } else if self.profile_editing() {
            Some(&self.profile.form)
        } else {
            None
        }
    }

    pub fn active_form_mut(&mut self) -> Option<&mut FormState> {
        if self.view.create_sign_open {
            Some(&mut self.sign_form)
        } else if self.view.create_user_open {
            Some(&mut self.user_form)
        } else if self.view.auth_open {
            Some(&mut self.auth.form)
        } else if self.profile_editing() {
            Some(&mut self.profile.form)
        } else {
            None
        }
    }

    pub fn profile_editing(&self) -> bool {
        self.profile.editing
            && self.view.top_level == TopLevelView::Dashboard
            && self.view.dashboard_view == DashboardView::Profile
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.profile.save {
            LoadingState::Loading(ref mut throbber_state) => Some(throbber_state),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esinais_data::RecordId;

    fn state() -> AppState {
        AppState::seeded(&Settings::default()).unwrap()
    }

    #[test]
    fn test_new_state_selects_first_rows() {
        let state = state();
        assert_eq!(state.signs.selected(), Some(0));
        assert_eq!(state.translator.input, TRANSLATOR_PLACEHOLDER);
        assert_eq!(state.profile.name, "João Admin");
    }

    #[test]
    fn test_dashboard_stats_follow_store() {
        let mut state = state();
        let stats = state.dashboard_stats();
        assert_eq!(
            stats,
            DashboardStats {
                total_signs: 10,
                approved: 5,
                pending: 3,
                rejected: 2,
                users: 10,
            }
        );

        state
            .store
            .delete_record(CollectionId::Signs, RecordId::new(3));
        assert_eq!(state.dashboard_stats().pending, 2);
        assert_eq!(state.dashboard_stats().total_signs, 9);
    }

    #[test]
    fn test_selected_delete_target_uses_filtered_rows() {
        let mut state = state();
        state.signs.criteria.tab = esinais_data::StatusTab::Pending;
        state.signs.table_state.borrow_mut().select(Some(1));

        assert_eq!(
            state.selected_delete_target(FilterScope::Signs),
            Some(DeleteTarget::new(CollectionId::Signs, RecordId::new(6)))
        );
    }

    #[test]
    fn test_selection_wraps() {
        let state = state();
        state.users.select_prev(10);
        assert_eq!(state.users.selected(), Some(9));
        state.users.select_next(10);
        assert_eq!(state.users.selected(), Some(0));
    }

    #[test]
    fn test_clamp_after_rows_disappear() {
        let mut state = state();
        state.signs.table_state.borrow_mut().select(Some(9));
        state
            .store
            .delete_record(CollectionId::Signs, RecordId::new(10));

        state.clamp_table_selections();
        assert_eq!(state.signs.selected(), Some(8));
    }

    #[test]
    fn test_related_items_exclude_current() {
        let mut state = state();
        assert!(state
            .view
            .show_details(RecordId::new(4), &state.store.translations));

        let related = state.related_items();
        assert_eq!(related.len(), 9);
        assert!(related.iter().all(|item| item.id != RecordId::new(4)));
        assert_eq!(state.details_item().unwrap().context, "ROUPA");
    }

    #[test]
    fn test_active_form_priority() {
        let mut state = state();
        assert!(state.active_form().is_none());

        state.view.open_overlay(Overlay::Auth);
        state.view.open_overlay(Overlay::CreateUser);
        assert!(state.active_form().unwrap().has_field(forms::labels::ROLE));

        state.view.close_overlay(OverlayKind::CreateUser);
        assert!(!state.active_form().unwrap().has_field(forms::labels::ROLE));
    }
}
