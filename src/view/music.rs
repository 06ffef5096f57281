//! Music card contents - title, progress bar, transport hints

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::model::PlaybackInfo;
use super::card::card_block;

pub fn render_music_card(frame: &mut Frame, area: Rect, playback: &PlaybackInfo) {
    let block = card_block(frame, area, "Music");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Track title
            Constraint::Length(1), // Progress bar
            Constraint::Length(1), // Transport hints
        ])
        .split(inner);

    let status_icon = if playback.playing { "▶" } else { "⏸" };
    let title_line = format!(
        "{} {}  ({}/{})",
        status_icon, playback.title, playback.track_number, playback.track_count
    );
    frame.render_widget(
        Paragraph::new(title_line).style(Style::default().fg(Color::White)),
        chunks[0],
    );

    let ratio = (playback.progress / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format!("{:.0}%", playback.progress));
    frame.render_widget(gauge, chunks[1]);

    frame.render_widget(
        Paragraph::new("⏮ p   ⏯ space   ⏭ n")
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        chunks[2],
    );
}
