//! OS signal handling
//!
//! SIGINT/SIGTERM are translated into [`Message::Quit`] so the main loop can
//! restore the terminal before exiting.

use tokio::sync::mpsc;

use ratewatch_core::prelude::*;

use crate::message::Message;

/// Spawn a task that forwards termination signals as `Message::Quit`
pub fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        wait_for_signal().await;
        info!("termination signal received");
        let _ = msg_tx.send(Message::Quit).await;
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sig) => sig,
        Err(e) => {
            warn!("failed to install SIGTERM handler: {}", e);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
