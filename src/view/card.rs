//! Card shell - chrome shared by every card

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Padding},
    Frame,
};

use crate::model::CardGeometry;

/// Clamp a card's geometry to the terminal area.
///
/// Returns `None` when the card lies entirely outside the screen (e.g.
/// dragged past the edge on a shrunken terminal), in which case nothing
/// is drawn for it this frame.
pub fn card_area(geometry: CardGeometry, bounds: Rect) -> Option<Rect> {
    let max = f64::from(u16::MAX);
    let x = geometry.x.round().clamp(0.0, max) as u16;
    let y = geometry.y.round().clamp(0.0, max) as u16;
    let width = geometry.width.round().clamp(0.0, max) as u16;
    let height = geometry.height.round().clamp(0.0, max) as u16;

    let area = Rect::new(x, y, width, height).intersection(bounds);
    (area.width > 0 && area.height > 0).then_some(area)
}

/// Bordered shell every card renders into. Cards overlap freely, so the
/// area is cleared first to keep the topmost card opaque.
pub fn card_block<'a>(frame: &mut Frame, area: Rect, title: &'a str) -> Block<'a> {
    frame.render_widget(Clear, area);
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1))
}
