//! Playback state and the view-facing playback info

/// Shown when the current index has no track behind it.
pub const TITLE_PLACEHOLDER: &str = "No track playing";

/// State owned exclusively by the player controller.
///
/// Mutated only through the controller's command API; the view reads
/// snapshots via [`PlaybackInfo`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackState {
    /// Index into the playlist, always in `[0, playlist.len())`.
    pub current_index: usize,
    pub playing: bool,
    /// Percentage of the current track played, in `[0, 100]`.
    pub progress: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: 0,
            playing: false,
            progress: 0.0,
        }
    }
}

/// Playback progress as a percentage of track duration.
///
/// An unknown duration (zero, negative, or not yet reported while metadata
/// loads) yields 0 rather than an error.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    let percent = current_time / duration * 100.0;
    if !percent.is_finite() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Snapshot handed to the view for rendering the music card.
#[derive(Clone, Debug)]
pub struct PlaybackInfo {
    /// Display title, already falling back to [`TITLE_PLACEHOLDER`].
    pub title: String,
    pub playing: bool,
    pub progress: f64,
    /// 1-based position within the playlist.
    pub track_number: usize,
    pub track_count: usize,
}
