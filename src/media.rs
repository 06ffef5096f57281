//! Media handle boundary
//!
//! The dashboard never decodes audio itself; it drives a narrow handle
//! owned by the host media subsystem. `play` is the only fallible
//! operation and its failure must be catchable without propagating;
//! the player controller logs it and carries on.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

/// Position of the underlying media element, in seconds.
///
/// `duration` may be 0 or NaN before metadata has loaded; consumers must
/// treat that as "unknown", not as an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaPosition {
    pub current_time: f64,
    pub duration: f64,
}

/// Capability consumed from the host media subsystem.
#[async_trait]
pub trait MediaHandle: Send + Sync {
    /// Point the element at a new source. An empty string clears the
    /// source and must not fail.
    fn set_source(&self, url: &str);

    /// Request playback start. May fail later for reasons outside the
    /// dashboard's control (network, permission, codec).
    async fn play(&self) -> Result<()>;

    fn pause(&self);

    fn position(&self) -> MediaPosition;
}

/// Handle for environments without a media subsystem: accepts every
/// command, reports no progress. Keeps the dashboard usable (and the
/// transport state machine observable) when audio output is unavailable.
#[derive(Default)]
pub struct NullMediaHandle {
    source: Mutex<String>,
}

impl NullMediaHandle {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MediaHandle for NullMediaHandle {
    fn set_source(&self, url: &str) {
        tracing::trace!(url, "null media handle: set source");
        if let Ok(mut source) = self.source.lock() {
            *source = url.to_string();
        }
    }

    async fn play(&self) -> Result<()> {
        tracing::trace!("null media handle: play");
        Ok(())
    }

    fn pause(&self) {
        tracing::trace!("null media handle: pause");
    }

    fn position(&self) -> MediaPosition {
        MediaPosition::default()
    }
}
