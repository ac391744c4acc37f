//! Palette, sizes and shared styles for every screen.

use esinais_data::{NotificationKind, SignStatus, UserStatus};
use ratatui::style::{Color, Modifier, Style};

// Palette

/// Titles, the active navigation entry and the selected card
pub const COLOR_BRAND: Color = Color::Indexed(99);
pub const COLOR_POSITIVE: Color = Color::Green;
pub const COLOR_NEGATIVE: Color = Color::Red;
pub const COLOR_PENDING: Color = Color::Yellow;
pub const COLOR_MUTED: Color = Color::DarkGray;
pub const COLOR_SELECTION_BG: Color = Color::Indexed(237);
pub const COLOR_HEADER: Color = Color::Indexed(141);
pub const COLOR_HELP_TEXT: Color = Color::Gray;
pub const COLOR_BORDER_DANGER: Color = COLOR_NEGATIVE;
pub const COLOR_BORDER_INFO: Color = Color::Blue;
pub const COLOR_BORDER_ACCENT: Color = COLOR_BRAND;
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;
pub const COLOR_FORM_FIELD_BG: Color = Color::Indexed(237);

pub const COLOR_LIGHT_BG: Color = Color::Reset;
pub const COLOR_DARK_BG: Color = Color::Indexed(234);
pub const COLOR_DARK_FG: Color = Color::Indexed(252);

// Sizes

pub const SCREEN_MARGIN: u16 = 1;
pub const TITLE_HEIGHT: u16 = 1;
pub const HELP_BAR_HEIGHT: u16 = 3;
/// Bordered one-line search input
pub const FILTER_INPUT_HEIGHT: u16 = 3;
pub const TABLE_COLUMN_SPACING: u16 = 2;
pub const SIDEBAR_WIDTH: u16 = 20;
/// Icons only
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;
/// Below this the dashboard sidebar becomes a drawer
pub const NARROW_WIDTH: u16 = 80;
pub const STAT_CARD_HEIGHT: u16 = 4;
pub const CARD_HEIGHT: u16 = 4;
pub const TABS_HEIGHT: u16 = 1;

fn bold(color: Color) -> Style {
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}

/// Whole-frame style. Dark mode only swaps this palette, widgets keep
/// their own colors.
pub fn base_style(dark_mode: bool) -> Style {
    if dark_mode {
        Style::new().bg(COLOR_DARK_BG).fg(COLOR_DARK_FG)
    } else {
        Style::new().bg(COLOR_LIGHT_BG)
    }
}

pub fn selection_style() -> Style {
    Style::new()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    bold(COLOR_HEADER)
}

pub fn help_text_style() -> Style {
    Style::new().fg(COLOR_HELP_TEXT)
}

pub fn title_style() -> Style {
    bold(COLOR_BRAND)
}

pub fn warning_style() -> Style {
    Style::new().fg(COLOR_PENDING)
}

pub fn form_field_focused_style() -> Style {
    Style::new()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn form_field_style() -> Style {
    Style::new()
}

/// Validation messages and the translator counter past its warning mark
pub fn error_style() -> Style {
    bold(COLOR_NEGATIVE)
}

pub fn active_tab_style() -> Style {
    bold(COLOR_BRAND).add_modifier(Modifier::UNDERLINED)
}

pub fn danger_border_style() -> Style {
    bold(COLOR_BORDER_DANGER)
}

pub fn info_border_style() -> Style {
    bold(COLOR_BORDER_INFO)
}

pub fn accent_border_style() -> Style {
    Style::new().fg(COLOR_BORDER_ACCENT)
}

pub fn sign_status_color(status: SignStatus) -> Color {
    match status {
        SignStatus::Approved => COLOR_POSITIVE,
        SignStatus::Pending => COLOR_PENDING,
        SignStatus::Rejected => COLOR_NEGATIVE,
    }
}

pub fn user_status_color(status: UserStatus) -> Color {
    match status {
        UserStatus::Active => COLOR_POSITIVE,
        UserStatus::Inactive => COLOR_MUTED,
        UserStatus::Blocked => COLOR_NEGATIVE,
    }
}

pub fn notification_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => COLOR_POSITIVE,
        NotificationKind::Warning => COLOR_PENDING,
        NotificationKind::Info => COLOR_BORDER_INFO,
    }
}
