//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use ratewatch_app::config::Settings;
use ratewatch_app::feed::RateFeed;
use ratewatch_app::handler::{self, UpdateAction};
use ratewatch_app::message::Message;
use ratewatch_app::signals;
use ratewatch_app::state::AppState;
use ratewatch_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application until quit
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings.clone());

    // Unified message channel (feed, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Signal handler sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let mut feed = RateFeed::new(&settings.feed);
    if settings.feed.enabled {
        if let Err(e) = feed.start(msg_tx.clone()) {
            warn!("Failed to start rate feed: {}", e);
        }
    } else {
        info!("Rate feed disabled; board stays empty until a snapshot arrives");
    }

    let result = run_loop(&mut term, &mut state, msg_rx, &mut feed);

    feed.stop();

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    feed: &mut RateFeed,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (feed snapshots, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            apply(state, msg, feed);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            apply(state, message, feed);
        }
    }

    Ok(())
}

/// Run one update and execute the requested effect
fn apply(state: &mut AppState, msg: Message, feed: &mut RateFeed) {
    match handler::update(state, msg) {
        UpdateAction::None => {}
        UpdateAction::Refresh => feed.refresh(),
    }
}
