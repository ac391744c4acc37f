//! Area splits shared by the screens: header, body and help bar, the
//! search row above tables, popups and the card grid.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

use super::theme::{FILTER_INPUT_HEIGHT, HELP_BAR_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT};

/// `(header, body, help_bar)` inside the screen margin
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, help] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Min(6),
        Constraint::Length(HELP_BAR_HEIGHT),
    ])
    .margin(SCREEN_MARGIN)
    .areas(area);

    (header, body, help)
}

/// `(search_input, table)`
pub fn content_with_filter(area: Rect) -> (Rect, Rect) {
    let [filter, content] =
        Layout::vertical([Constraint::Length(FILTER_INPUT_HEIGHT), Constraint::Min(3)]).areas(area);
    (filter, content)
}

/// `(text, indicator)` with the indicator pinned to the right edge
pub fn title_with_indicator(area: Rect, indicator_width: u16) -> (Rect, Rect) {
    let [text, indicator] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(indicator_width)]).areas(area);
    (text, indicator)
}

/// Rectangle of `percent_x` by `percent_y` of `area`, centered in it.
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Fixed-size rectangle in the top-right corner of `area`, below the header.
/// Clamped to the parent so small terminals never overflow.
pub fn top_right_popup(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height.saturating_sub(TITLE_HEIGHT + SCREEN_MARGIN));

    Rect {
        x: area.x + area.width - width,
        y: area.y + TITLE_HEIGHT + SCREEN_MARGIN,
        width,
        height,
    }
}

/// `(header, sidebar, main, help_bar)`
pub fn screen_layout_with_sidebar(area: Rect, sidebar_width: u16) -> (Rect, Rect, Rect, Rect) {
    let (header, body, help) = screen_layout(area);
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(20)]).areas(body);

    (header, sidebar, main, help)
}

/// Split an area into `columns` equal cells per row of `row_height`,
/// returning only as many rows as fit.
pub fn grid(area: Rect, columns: usize, row_height: u16) -> Vec<Rect> {
    if columns == 0 || row_height == 0 {
        return Vec::new();
    }

    let rows = (area.height / row_height) as usize;
    if rows == 0 {
        return Vec::new();
    }
    let columns_layout = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]);
    Layout::vertical(vec![Constraint::Length(row_height); rows])
        .split(area)
        .iter()
        .flat_map(|row| columns_layout.split(*row).to_vec())
        .collect()
}

/// `(width %, height %)` for [`centered_popup`]
pub mod popup_sizes {
    /// Confirmations
    pub const SMALL: (u16, u16) = (50, 30);
    /// Forms
    pub const MEDIUM: (u16, u16) = (60, 60);
    /// Details, help and create forms
    pub const LARGE: (u16, u16) = (80, 80);
    /// Expand viewer
    pub const FULL: (u16, u16) = (100, 100);
}
