use crate::state::{AuthMode, DashboardView, DeleteTarget, Overlay, OverlayKind, TopLevelView};
use esinais_data::RecordId;

/// Direction of a move in the translator card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
}

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Selection in the current table or list
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Navigation
    NavigateTo(TopLevelView),
    NavigateDashboard(DashboardView),

    // Translator
    EnterInputMode,
    ExitInputMode,
    AppendInputChar(char),
    DeleteInputChar,
    ClearInput,
    MoveCard(GridMove),

    // Overlays
    OpenOverlay(Overlay),
    CloseOverlay(OverlayKind),
    ShowDetails(RecordId),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Cursor of the list inside the topmost overlay
    MoveOverlayCursor {
        down: bool,
    },

    // Forms (auth, create sign, create user, profile)
    FormNextField,
    FormPreviousField,
    FormAppendChar(char),
    FormDeleteChar,
    FormCycleChoice {
        forward: bool,
    },
    SubmitForm,
    TogglePasswordVisibility,
    SwitchAuthMode(AuthMode),

    // Search mode
    EnterSearchMode,
    ExitSearchMode,
    AppendSearchChar(char),
    DeleteSearchChar,
    ClearSearch,

    // Filter popover
    ToggleDateFilterFocus,
    AppendDateFilterChar(char),
    DeleteDateFilterChar,

    // Tabs
    NextTab,
    PreviousTab,

    // Deletion
    RequestDelete(DeleteTarget),
    ConfirmDelete,
    CancelDelete,

    // Notifications
    MarkNotificationRead(RecordId),
    MarkAllNotificationsRead,

    // Profile
    ChooseProfileMenuItem(usize),
    EditProfile,
    CancelProfileEdit,
    SaveProfile,
    Logout,

    // View toggles
    ToggleSidebarCollapsed,
    ToggleDarkMode,
    ToggleHelp,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone, PartialEq)]
pub enum DataEvent {
    /// The simulated profile save finished. `generation` identifies the
    /// save that produced it.
    ProfileSaved {
        generation: u64,
        name: String,
        email: String,
    },
}
