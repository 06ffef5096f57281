mod config;
mod controller;
mod layout;
mod logging;
mod media;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Config;
use controller::{DragLayer, PlayerController};
use media::{MediaHandle, NullMediaHandle};
use model::{Anchor, CardGeometry, CardKey, Playlist};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== homedeck starting ===");

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Config unreadable, using defaults");
        Config::default()
    });

    let playlist = Playlist::new(config.tracks.clone())?;
    let media: Arc<dyn MediaHandle> = Arc::new(NullMediaHandle::new());
    let controller = PlayerController::new(playlist, media);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &config, &controller).await;

    // Release the media element before leaving the screen
    controller.shutdown().await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("homedeck shutting down");
    Ok(())
}

/// Resolve every card for the current terminal size, in render order,
/// letting session drag overrides replace resolver placement per card.
fn place_cards(
    config: &Config,
    drag: &DragLayer,
    width: u16,
    height: u16,
) -> Vec<(CardKey, CardGeometry)> {
    let anchor = Anchor::from_terminal_size(width, height);
    config
        .cards
        .render_order()
        .into_iter()
        .map(|key| {
            let resolved = layout::card_geometry(key, anchor, &config.cards);
            (key, drag.positioned(key, resolved))
        })
        .collect()
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    controller: &PlayerController,
) -> io::Result<()> {
    let mut drag = DragLayer::default();

    loop {
        // Re-resolved every frame, so anchor changes (terminal resize)
        // take effect without any explicit invalidation.
        let size = terminal.size()?;
        let placed = place_cards(config, &drag, size.width, size.height);
        let playback = controller.playback_info().await;

        terminal.draw(|f| AppView::render(f, &placed, &playback))?;

        // Handle input with a short poll time for smooth clock updates,
        // shorter still while a card is being dragged
        let poll_timeout = if drag.is_dragging() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(50)
        };
        if event::poll(poll_timeout)? {
            match event::read()? {
                Event::Key(key) => controller.handle_key_event(key).await,
                Event::Mouse(mouse) => drag.handle_mouse(mouse, &placed),
                _ => {}
            }
        }

        controller.poll_media().await;

        if controller.should_quit().await {
            break;
        }
    }

    Ok(())
}
