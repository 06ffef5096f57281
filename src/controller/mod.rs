//! Controller module - commands and event handling
//!
//! This module owns every mutation of dashboard state. It is organized
//! into submodules by responsibility:
//!
//! - `player`: Playback commands and media-handle reconciliation
//! - `input`: Key event handling
//! - `drag`: Pointer-driven card repositioning

mod drag;
mod input;
mod player;

pub use drag::{DragConfig, DragLayer};
pub use player::PlayerController;
