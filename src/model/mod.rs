//! Model module - Dashboard state and data types
//!
//! This module contains the data structures shared between the controller
//! and the view. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (card identity)
//! - `geometry`: Anchor point and resolved card geometry
//! - `playlist`: Track and playlist data
//! - `playback`: Playback state and the view-facing playback info

mod types;
mod geometry;
mod playlist;
mod playback;

// Re-export all public types for convenient access
pub use types::CardKey;

pub use geometry::{Anchor, CardGeometry};

pub use playlist::{Playlist, Track};

pub use playback::{progress_percent, PlaybackInfo, PlaybackState, TITLE_PLACEHOLDER};
