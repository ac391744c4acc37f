//! Frames shared by every modal, dropdown and drawer.

use ratatui::prelude::Rect;
use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, Clear},
    Frame,
};

use crate::ui::layouts;

/// Centered modal taking `size` percent of `parent_area`. Returns the inner
/// area to draw into.
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: (u16, u16),
    title: &str,
    border_style: Style,
) -> Rect {
    let (percent_x, percent_y) = size;
    render_frame_at(
        f,
        layouts::centered_popup(percent_x, percent_y, parent_area),
        title,
        border_style,
    )
}

/// Wipe `area` and draw a bordered, titled frame over it.
pub fn render_frame_at(f: &mut Frame, area: Rect, title: &str, border_style: Style) -> Rect {
    let block = Block::bordered()
        .title(Line::from(title.to_string()).centered())
        .border_style(border_style);
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);
    inner
}
