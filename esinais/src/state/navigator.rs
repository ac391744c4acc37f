//! Which screen is showing and which overlays are open.
//!
//! [`ViewState`] is mutated only through the named operations below. Every
//! operation is total: opening something already open, closing something
//! already closed or confirming a stale delete leaves the state consistent.

use esinais_data::{Collection, CollectionId, RecordId, RecordStore, TranslationItem};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopLevelView {
    #[default]
    Translator,
    About,
    Contribute,
    Dashboard,
}

impl TopLevelView {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Translator => "Tradutor",
            Self::About => "Sobre",
            Self::Contribute => "Contribua",
            Self::Dashboard => "Dashboard",
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardView {
    #[default]
    Overview,
    Signs,
    Users,
    Profile,
}

impl DashboardView {
    /// Entries shown in the sidebar, in order
    pub const SIDEBAR: [DashboardView; 3] = [Self::Overview, Self::Signs, Self::Users];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Signs => "Sinais",
            Self::Users => "Usuários",
            Self::Profile => "Perfil",
        }
    }

    pub fn filter_scope(&self) -> Option<FilterScope> {
        match self {
            Self::Overview => Some(FilterScope::Overview),
            Self::Signs => Some(FilterScope::Signs),
            Self::Users => Some(FilterScope::Users),
            Self::Profile => None,
        }
    }
}

/// Dashboard tables that own a filter popover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterScope {
    Overview,
    Signs,
    Users,
}

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 5.0;
pub const ZOOM_STEP: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageViewer {
    /// None renders the placeholder
    pub image: Option<String>,
    pub zoom: f32,
}

impl ImageViewer {
    pub fn new(image: Option<String>) -> Self {
        Self { image, zoom: 1.0 }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

/// Record awaiting delete confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTarget {
    pub collection: CollectionId,
    pub id: RecordId,
}

impl DeleteTarget {
    pub fn new(collection: CollectionId, id: RecordId) -> Self {
        Self { collection, id }
    }
}

/// An overlay together with the payload it opens with. The details modal
/// is opened through [`ViewState::show_details`], which checks its id.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Auth,
    ImageViewer(Option<String>),
    ExpandViewer,
    DeleteConfirmation(DeleteTarget),
    Notifications,
    FilterPopover(FilterScope),
    Sidebar,
    ProfileMenu,
    CreateSign,
    CreateUser,
}

impl Overlay {
    pub fn kind(&self) -> OverlayKind {
        match self {
            Self::Auth => OverlayKind::Auth,
            Self::ImageViewer(_) => OverlayKind::ImageViewer,
            Self::ExpandViewer => OverlayKind::ExpandViewer,
            Self::DeleteConfirmation(_) => OverlayKind::DeleteConfirmation,
            Self::Notifications => OverlayKind::Notifications,
            Self::FilterPopover(scope) => OverlayKind::FilterPopover(*scope),
            Self::Sidebar => OverlayKind::Sidebar,
            Self::ProfileMenu => OverlayKind::ProfileMenu,
            Self::CreateSign => OverlayKind::CreateSign,
            Self::CreateUser => OverlayKind::CreateUser,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Auth,
    ImageViewer,
    ExpandViewer,
    Details,
    DeleteConfirmation,
    Notifications,
    FilterPopover(FilterScope),
    Sidebar,
    ProfileMenu,
    CreateSign,
    CreateUser,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPopovers {
    pub overview: bool,
    pub signs: bool,
    pub users: bool,
}

impl FilterPopovers {
    pub fn is_open(&self, scope: FilterScope) -> bool {
        match scope {
            FilterScope::Overview => self.overview,
            FilterScope::Signs => self.signs,
            FilterScope::Users => self.users,
        }
    }

    fn set(&mut self, scope: FilterScope, open: bool) {
        match scope {
            FilterScope::Overview => self.overview = open,
            FilterScope::Signs => self.signs = open,
            FilterScope::Users => self.users = open,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub top_level: TopLevelView,
    pub dashboard_view: DashboardView,
    pub logged_in: bool,

    pub auth_open: bool,
    pub image_viewer: Option<ImageViewer>,
    pub expand_viewer: bool,
    details: Option<RecordId>,
    pub delete_target: Option<DeleteTarget>,
    pub notifications_open: bool,
    pub filter_popovers: FilterPopovers,
    /// Sidebar drawn as an overlay on narrow terminals
    pub sidebar_open: bool,
    pub sidebar_collapsed: bool,
    pub profile_menu_open: bool,
    pub create_sign_open: bool,
    pub create_user_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the top-level screen. Pinned to the dashboard while logged in,
    /// and the dashboard itself is only reachable through [`Self::login`].
    pub fn navigate_to(&mut self, view: TopLevelView) {
        if self.logged_in {
            tracing::debug!("Ignoring navigation to {:?} while logged in", view);
            return;
        }
        if view == TopLevelView::Dashboard {
            tracing::debug!("Dashboard requires login");
            return;
        }

        tracing::debug!("Navigating {:?} -> {:?}", self.top_level, view);
        self.top_level = view;
    }

    pub fn navigate_dashboard(&mut self, view: DashboardView) {
        tracing::debug!("Dashboard view {:?} -> {:?}", self.dashboard_view, view);
        self.dashboard_view = view;
        self.sidebar_open = false;
    }

    pub fn open_overlay(&mut self, overlay: Overlay) {
        tracing::debug!("Opening overlay {:?}", overlay);
        match overlay {
            Overlay::Auth => self.auth_open = true,
            Overlay::ImageViewer(image) => self.image_viewer = Some(ImageViewer::new(image)),
            Overlay::ExpandViewer => self.expand_viewer = true,
            Overlay::DeleteConfirmation(target) => self.delete_target = Some(target),
            Overlay::Notifications => self.notifications_open = true,
            Overlay::FilterPopover(scope) => self.filter_popovers.set(scope, true),
            Overlay::Sidebar => self.sidebar_open = true,
            Overlay::ProfileMenu => self.profile_menu_open = true,
            Overlay::CreateSign => self.create_sign_open = true,
            Overlay::CreateUser => self.create_user_open = true,
        }
    }

    pub fn close_overlay(&mut self, kind: OverlayKind) {
        tracing::debug!("Closing overlay {:?}", kind);
        match kind {
            OverlayKind::Auth => self.auth_open = false,
            OverlayKind::ImageViewer => self.image_viewer = None,
            OverlayKind::ExpandViewer => self.expand_viewer = false,
            OverlayKind::Details => self.details = None,
            OverlayKind::DeleteConfirmation => self.delete_target = None,
            OverlayKind::Notifications => self.notifications_open = false,
            OverlayKind::FilterPopover(scope) => self.filter_popovers.set(scope, false),
            OverlayKind::Sidebar => self.sidebar_open = false,
            OverlayKind::ProfileMenu => self.profile_menu_open = false,
            OverlayKind::CreateSign => self.create_sign_open = false,
            OverlayKind::CreateUser => self.create_user_open = false,
        }
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Auth => self.auth_open,
            OverlayKind::ImageViewer => self.image_viewer.is_some(),
            OverlayKind::ExpandViewer => self.expand_viewer,
            OverlayKind::Details => self.details.is_some(),
            OverlayKind::DeleteConfirmation => self.delete_target.is_some(),
            OverlayKind::Notifications => self.notifications_open,
            OverlayKind::FilterPopover(scope) => self.filter_popovers.is_open(scope),
            OverlayKind::Sidebar => self.sidebar_open,
            OverlayKind::ProfileMenu => self.profile_menu_open,
            OverlayKind::CreateSign => self.create_sign_open,
            OverlayKind::CreateUser => self.create_user_open,
        }
    }

    /// Overlays in drawing order, bottom first. Filter popovers of other
    /// dashboard views stay open but hidden.
    pub fn visible_overlays(&self) -> Vec<OverlayKind> {
        let mut stack = vec![OverlayKind::Sidebar, OverlayKind::ProfileMenu];
        if let Some(scope) = self.current_filter_scope() {
            stack.push(OverlayKind::FilterPopover(scope));
        }
        stack.extend([
            OverlayKind::Notifications,
            OverlayKind::Auth,
            OverlayKind::ExpandViewer,
            OverlayKind::Details,
            OverlayKind::ImageViewer,
            OverlayKind::CreateUser,
            OverlayKind::CreateSign,
            OverlayKind::DeleteConfirmation,
        ]);
        stack.retain(|kind| self.is_open(*kind));
        stack
    }

    /// The overlay that receives input and is closed by Esc
    pub fn topmost_overlay(&self) -> Option<OverlayKind> {
        self.visible_overlays().last().copied()
    }

    /// Point the details modal at `id` if that translation exists.
    pub fn show_details(&mut self, id: RecordId, items: &Collection<TranslationItem>) -> bool {
        if !items.contains(id) {
            tracing::warn!("Ignoring details for missing translation {}", id);
            return false;
        }
        tracing::debug!("Showing details of translation {}", id);
        self.details = Some(id);
        true
    }

    /// Translation shown in the details modal; always one that existed when
    /// it was opened
    pub fn details(&self) -> Option<RecordId> {
        self.details
    }

    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.open_overlay(Overlay::DeleteConfirmation(target));
    }

    /// Delete the pending target from `store` and close the confirmation.
    /// Returns whether a record was removed.
    pub fn confirm_delete(&mut self, store: &mut RecordStore) -> bool {
        match self.delete_target.take() {
            Some(target) => store.delete_record(target.collection, target.id),
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.close_overlay(OverlayKind::DeleteConfirmation);
    }

    pub fn login(&mut self) {
        tracing::info!("Logged in");
        self.logged_in = true;
        self.top_level = TopLevelView::Dashboard;
        self.dashboard_view = DashboardView::Overview;

        self.auth_open = false;
        self.image_viewer = None;
        self.expand_viewer = false;
        self.details = None;
    }

    pub fn logout(&mut self) {
        tracing::info!("Logged out");
        *self = Self::default();
    }

    pub fn current_filter_scope(&self) -> Option<FilterScope> {
        if self.top_level == TopLevelView::Dashboard {
            self.dashboard_view.filter_scope()
        } else {
            None
        }
    }
}
