use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::ImageViewer;
use crate::ui::{layouts, theme};

/// Images are opaque references, so the viewer draws a frame scaled by
/// the zoom level with the reference underneath.
pub fn render_image_viewer(f: &mut Frame, viewer: &ImageViewer) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Visualizar imagem ",
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let frame = scaled(chunks[0], viewer.zoom);
    let picture = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BRAND));
    f.render_widget(picture, frame);

    let label = viewer
        .image
        .as_deref()
        .unwrap_or("Imagem indisponível");
    f.render_widget(
        Paragraph::new(Line::from(label)).alignment(Alignment::Center),
        chunks[1],
    );

    let controls = Paragraph::new(format!(
        "Zoom {}%   + aproximar   - afastar   0 redefinir   Esc fechar",
        viewer.zoom_percent()
    ))
    .style(theme::help_text_style())
    .alignment(Alignment::Center);
    f.render_widget(controls, chunks[2]);
}

/// Centered rect covering `zoom / max zoom` of the area, at least 3x3
fn scaled(area: Rect, zoom: f32) -> Rect {
    let fraction = (zoom / crate::state::navigator::ZOOM_MAX).clamp(0.0, 1.0);
    let width = ((area.width as f32 * fraction) as u16).max(3).min(area.width);
    let height = ((area.height as f32 * fraction) as u16).max(3).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_grows_with_zoom() {
        let area = Rect::new(0, 0, 100, 50);
        let small = scaled(area, 0.5);
        let large = scaled(area, 5.0);

        assert_eq!(small.width, 10);
        assert_eq!(large, area);
        assert_eq!(small.x, 45);
    }
}
