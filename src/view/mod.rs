//! View module - UI rendering
//!
//! All rendering for the dashboard using ratatui. Cards draw at the
//! absolute geometry handed to them; nothing here mutates state.
//!
//! - `card`: Card shell (chrome + geometry-to-area conversion)
//! - `cards`: Greeting, clock and calendar card contents
//! - `music`: Music card contents (title, progress, transport hints)

mod card;
mod cards;
mod music;

use ratatui::Frame;

use crate::model::{CardGeometry, CardKey, PlaybackInfo};

pub struct AppView;

impl AppView {
    /// Render every card at its displayed geometry, in render order
    /// (later entries draw on top).
    pub fn render(frame: &mut Frame, placed: &[(CardKey, CardGeometry)], playback: &PlaybackInfo) {
        for &(key, geometry) in placed {
            let Some(area) = card::card_area(geometry, frame.area()) else {
                continue;
            };
            match key {
                CardKey::Hi => cards::render_hi_card(frame, area),
                CardKey::Clock => cards::render_clock_card(frame, area),
                CardKey::Calendar => cards::render_calendar_card(frame, area),
                CardKey::Music => music::render_music_card(frame, area, playback),
            }
        }
    }
}
