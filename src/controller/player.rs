//! Playback commands and media-handle reconciliation

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::media::MediaHandle;
use crate::model::{
    progress_percent, PlaybackInfo, PlaybackState, Playlist, TITLE_PLACEHOLDER,
};

/// The playback state machine for the music card.
///
/// Commands mutate [`PlaybackState`] synchronously, then reconcile the
/// media handle against the new state before returning, so no two
/// reconciliations interleave on different indices: the handle is always
/// driven to the latest committed state.
#[derive(Clone)]
pub struct PlayerController {
    playlist: Arc<Playlist>,
    state: Arc<Mutex<PlaybackState>>,
    media: Arc<dyn MediaHandle>,
    should_quit: Arc<Mutex<bool>>,
}

impl PlayerController {
    pub fn new(playlist: Playlist, media: Arc<dyn MediaHandle>) -> Self {
        Self {
            playlist: Arc::new(playlist),
            state: Arc::new(Mutex::new(PlaybackState::default())),
            media,
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    /// Flip between playing and paused at the current index.
    pub async fn toggle_play(&self) {
        let state = {
            let mut state = self.state.lock().await;
            state.playing = !state.playing;
            *state
        };
        tracing::debug!(playing = state.playing, index = state.current_index, "Toggled playback");
        self.reconcile(state).await;
    }

    /// Advance to the next track, wrapping at the end. Advancing always
    /// resumes playback.
    pub async fn next(&self) {
        let state = {
            let mut state = self.state.lock().await;
            state.current_index = self.playlist.next_index(state.current_index);
            state.playing = true;
            *state
        };
        tracing::debug!(index = state.current_index, "Skipped to next track");
        self.reconcile(state).await;
    }

    /// Step back to the previous track, wrapping at the start. Also
    /// resumes playback.
    pub async fn prev(&self) {
        let state = {
            let mut state = self.state.lock().await;
            state.current_index = self.playlist.prev_index(state.current_index);
            state.playing = true;
            *state
        };
        tracing::debug!(index = state.current_index, "Skipped to previous track");
        self.reconcile(state).await;
    }

    /// The current track finished: auto-advance, same effect as [`next`].
    ///
    /// [`next`]: Self::next
    pub async fn on_track_ended(&self) {
        tracing::debug!("Track ended, auto-advancing");
        self.next().await;
    }

    /// Progress report from the media subsystem, best-effort cadence.
    /// An unknown duration resets progress to 0.
    pub async fn on_progress_tick(&self, current_time: f64, duration: f64) {
        let progress = progress_percent(current_time, duration);
        self.state.lock().await.progress = progress;
    }

    /// Read the media handle's position, update progress and detect the
    /// end of the current track. The handle only exposes reads, so track
    /// end is derived here rather than delivered as a callback.
    pub async fn poll_media(&self) {
        let position = self.media.position();
        self.on_progress_tick(position.current_time, position.duration).await;

        let playing = self.state.lock().await.playing;
        let ended = playing
            && position.duration.is_finite()
            && position.duration > 0.0
            && position.current_time >= position.duration;
        if ended {
            self.on_track_ended().await;
        }
    }

    /// Snapshot for rendering the music card.
    pub async fn playback_info(&self) -> PlaybackInfo {
        let state = *self.state.lock().await;
        let title = self
            .playlist
            .track(state.current_index)
            .filter(|track| !track.title.is_empty())
            .map(|track| track.title.clone())
            .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());

        PlaybackInfo {
            title,
            playing: state.playing,
            progress: state.progress,
            track_number: state.current_index + 1,
            track_count: self.playlist.len(),
        }
    }

    /// Release the media element on shutdown.
    pub async fn shutdown(&self) {
        self.media.pause();
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn request_quit(&self) {
        *self.should_quit.lock().await = true;
    }

    /// Drive the media handle to match a committed state: set the source
    /// for the current index (empty when the track is missing, which the
    /// handle must accept), then start or pause playback.
    ///
    /// Invariant: a failed play request leaves `playing` set. The state
    /// machine is optimistic about the physical element rather than
    /// rolling back, and the UI shows the intent, not the device.
    async fn reconcile(&self, state: PlaybackState) {
        let url = self
            .playlist
            .track(state.current_index)
            .map(|track| track.source_url.as_str())
            .unwrap_or("");
        self.media.set_source(url);

        if state.playing {
            if let Err(e) = self.media.play().await {
                tracing::debug!(error = %e, index = state.current_index, "Media start failed");
            }
        } else {
            self.media.pause();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaPosition;
    use crate::model::Track;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    #[derive(Debug, PartialEq)]
    enum MediaCall {
        SetSource(String),
        Play,
        Pause,
    }

    #[derive(Default)]
    struct RecordingMediaHandle {
        calls: StdMutex<Vec<MediaCall>>,
        fail_play: bool,
        position: StdMutex<MediaPosition>,
    }

    impl RecordingMediaHandle {
        fn failing() -> Self {
            Self { fail_play: true, ..Self::default() }
        }

        fn calls(&self) -> Vec<MediaCall> {
            self.calls.lock().unwrap().drain(..).collect()
        }

        fn set_position(&self, current_time: f64, duration: f64) {
            *self.position.lock().unwrap() = MediaPosition { current_time, duration };
        }
    }

    #[async_trait]
    impl MediaHandle for RecordingMediaHandle {
        fn set_source(&self, url: &str) {
            self.calls.lock().unwrap().push(MediaCall::SetSource(url.to_string()));
        }

        async fn play(&self) -> Result<()> {
            self.calls.lock().unwrap().push(MediaCall::Play);
            if self.fail_play {
                Err(anyhow!("playback start rejected"))
            } else {
                Ok(())
            }
        }

        fn pause(&self) {
            self.calls.lock().unwrap().push(MediaCall::Pause);
        }

        fn position(&self) -> MediaPosition {
            *self.position.lock().unwrap()
        }
    }

    fn controller_with(
        titles: &[&str],
        media: Arc<RecordingMediaHandle>,
    ) -> PlayerController {
        let tracks = titles
            .iter()
            .map(|t| Track::new(*t, format!("http://example.com/{t}.mp3")))
            .collect();
        PlayerController::new(Playlist::new(tracks).unwrap(), media)
    }

    async fn state_of(controller: &PlayerController) -> PlaybackState {
        *controller.state.lock().await
    }

    #[tokio::test]
    async fn toggle_play_starts_from_paused() {
        let media = Arc::new(RecordingMediaHandle::default());
        let controller = controller_with(&["a"], media.clone());

        controller.toggle_play().await;

        let state = state_of(&controller).await;
        assert!(state.playing);
        assert_eq!(state.current_index, 0);
        assert_eq!(
            media.calls(),
            vec![MediaCall::SetSource("http://example.com/a.mp3".into()), MediaCall::Play]
        );
    }

    #[tokio::test]
    async fn toggle_play_twice_pauses_again() {
        let media = Arc::new(RecordingMediaHandle::default());
        let controller = controller_with(&["a"], media.clone());

        controller.toggle_play().await;
        controller.toggle_play().await;

        let state = state_of(&controller).await;
        assert!(!state.playing);
        assert_eq!(state.current_index, 0);
        assert_eq!(media.calls().last(), Some(&MediaCall::Pause));
    }

    #[tokio::test]
    async fn play_failure_leaves_playing_set() {
        let media = Arc::new(RecordingMediaHandle::failing());
        let controller = controller_with(&["a"], media.clone());

        controller.toggle_play().await;

        // Optimistic invariant: the flag survives the failed start.
        assert!(state_of(&controller).await.playing);
        assert!(media.calls().contains(&MediaCall::Play));
    }

    #[tokio::test]
    async fn next_cycles_through_playlist_and_keeps_playing() {
        let media = Arc::new(RecordingMediaHandle::default());
        let controller = controller_with(&["a", "b", "c"], media.clone());

        let mut seen = Vec::new();
        for _ in 0..3 {
            controller.next().await;
            let state = state_of(&controller).await;
            assert!(state.playing);
            seen.push(state.current_index);
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[tokio::test]
    async fn prev_is_inverse_of_next() {
        let media = Arc::new(RecordingMediaHandle::default());
        let controller = controller_with(&["a", "b", "c"], media);

        for _ in 0..3 {
            let before = state_of(&controller).await.current_index;
            controller.next().await;
            controller.prev().await;
            assert_eq!(state_of(&controller).await.current_index, before);
            controller.next().await;
        }
    }

    #[tokio::test]
    async fn prev_from_start_wraps_to_end() {
        let media = Arc::new(RecordingMediaHandle::default());
        let controller = controller_with(&["a", "b", "c"], media);

        controller.prev().await;
        let state = state_of(&controller).await;
        assert_eq!(state.current_index, 2);
        assert!(state.playing);
    }

    #[tokio::test]
    async fn track_ended_behaves_like_next() {
        let media = Arc::new(RecordingMediaHandle::default());
        let ended = controller_with(&["a", "b", "c"], media.clone());
        let skipped = controller_with(&["a", "b", "c"], Arc::new(RecordingMediaHandle::default()));

        ended.on_track_ended().await;
        skipped.next().await;

        let a = state_of(&ended).await;
        let b = state_of(&skipped).await;
        assert_eq!(a.current_index, b.current_index);
        assert_eq!(a.playing, b.playing);
    }

    #[tokio::test]
    async fn track_ended_wraps_from_last_track() {
        let media = Arc::new(RecordingMediaHandle::default());
        let controller = controller_with(&["a", "b", "c"], media);

        controller.next().await;
        controller.next().await;
        assert_eq!(state_of(&controller).await.current_index, 2);

        controller.on_track_ended().await;
        let state = state_of(&controller).await;
        assert_eq!(state.current_index, 0);
        assert!(state.playing);
    }

    #[tokio::test]
    async fn progress_tick_updates_state() {
        let media = Arc::new(RecordingMediaHandle::default());
        let controller = controller_with(&["a"], media);

        controller.on_progress_tick(50.0, 100.0).await;
        assert_eq!(state_of(&controller).await.progress, 50.0);

        controller.on_progress_tick(150.0, 100.0).await;
        assert_eq!(state_of(&controller).await.progress, 100.0);

        controller.on_progress_tick(10.0, 0.0).await;
        assert_eq!(state_of(&controller).await.progress, 0.0);
    }

    #[tokio::test]
    async fn poll_media_advances_on_track_end() {
        let media = Arc::new(RecordingMediaHandle::default());
        let controller = controller_with(&["a", "b"], media.clone());

        controller.toggle_play().await;
        media.set_position(180.0, 180.0);
        controller.poll_media().await;

        let state = state_of(&controller).await;
        assert_eq!(state.current_index, 1);
        assert!(state.playing);
    }

    #[tokio::test]
    async fn poll_media_ignores_end_while_paused() {
        let media = Arc::new(RecordingMediaHandle::default());
        let controller = controller_with(&["a", "b"], media.clone());

        media.set_position(180.0, 180.0);
        controller.poll_media().await;

        assert_eq!(state_of(&controller).await.current_index, 0);
    }

    #[tokio::test]
    async fn playback_info_falls_back_on_empty_title() {
        let media = Arc::new(RecordingMediaHandle::default());
        let controller = controller_with(&[""], media);

        let info = controller.playback_info().await;
        assert_eq!(info.title, TITLE_PLACEHOLDER);
        assert_eq!(info.track_number, 1);
        assert_eq!(info.track_count, 1);
    }
}
