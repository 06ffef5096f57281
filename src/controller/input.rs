//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::PlayerController;

impl PlayerController {
    pub async fn handle_key_event(&self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char(' ') => self.toggle_play().await,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => self.next().await,
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Left => self.prev().await,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.request_quit().await,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::NullMediaHandle;
    use crate::model::{Playlist, Track};
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;

    fn controller() -> PlayerController {
        let playlist = Playlist::new(vec![
            Track::new("a", "http://example.com/a.mp3"),
            Track::new("b", "http://example.com/b.mp3"),
        ])
        .unwrap();
        PlayerController::new(playlist, Arc::new(NullMediaHandle::new()))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn space_toggles_playback() {
        let c = controller();
        c.handle_key_event(press(KeyCode::Char(' '))).await;
        assert!(c.playback_info().await.playing);
    }

    #[tokio::test]
    async fn arrows_move_through_playlist() {
        let c = controller();
        c.handle_key_event(press(KeyCode::Right)).await;
        assert_eq!(c.playback_info().await.track_number, 2);
        c.handle_key_event(press(KeyCode::Left)).await;
        assert_eq!(c.playback_info().await.track_number, 1);
    }

    #[tokio::test]
    async fn q_requests_quit() {
        let c = controller();
        assert!(!c.should_quit().await);
        c.handle_key_event(press(KeyCode::Char('q'))).await;
        assert!(c.should_quit().await);
    }

    #[tokio::test]
    async fn release_events_are_ignored() {
        let c = controller();
        let mut key = press(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;
        c.handle_key_event(key).await;
        assert!(!c.playback_info().await.playing);
    }
}
