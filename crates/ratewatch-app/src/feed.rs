//! Built-in rate feed
//!
//! Stand-in for a market-data client: emits a full board snapshot on a fixed
//! cadence (hourly by default), jittering a seeded pair table. The runner can
//! also request an immediate snapshot via [`RateFeed::refresh`].

use std::time::Duration;

use chrono::Local;
use rand::Rng;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use ratewatch_core::prelude::*;
use ratewatch_core::{CurrencyPair, Rate};

use crate::config::FeedSettings;
use crate::message::Message;

/// Reference quotes the feed jitters around
const SEED_RATES: &[(&str, &str, f64)] = &[
    ("EUR", "USD", 1.0832),
    ("GBP", "USD", 1.2704),
    ("USD", "JPY", 149.37),
    ("USD", "CHF", 0.8841),
    ("AUD", "USD", 0.6559),
    ("USD", "CAD", 1.3612),
];

/// Maximum relative deviation per snapshot
const JITTER_FRACTION: f64 = 0.002;

/// Periodic snapshot emitter.
///
/// Owns the background task plus the channels used to poke and stop it.
pub struct RateFeed {
    interval: Duration,
    refresh_tx: Option<mpsc::Sender<()>>,
    shutdown_tx: Option<watch::Sender<bool>>,
    handle: Option<JoinHandle<()>>,
}

impl RateFeed {
    pub fn new(settings: &FeedSettings) -> Self {
        Self {
            // A zero interval would make tokio's interval spin
            interval: Duration::from_secs(settings.interval_secs.max(1)),
            refresh_tx: None,
            shutdown_tx: None,
            handle: None,
        }
    }

    /// Spawn the feed task. The first snapshot is emitted immediately.
    pub fn start(&mut self, msg_tx: mpsc::Sender<Message>) -> Result<()> {
        if self.handle.is_some() {
            return Err(Error::feed("feed already running"));
        }

        let (refresh_tx, refresh_rx) = mpsc::channel::<()>(4);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let interval = self.interval;
        let handle = tokio::spawn(run_feed(interval, msg_tx, refresh_rx, shutdown_rx));

        info!("Rate feed started (interval: {:?})", interval);
        self.refresh_tx = Some(refresh_tx);
        self.shutdown_tx = Some(shutdown_tx);
        self.handle = Some(handle);
        Ok(())
    }

    /// Ask the running feed for an immediate snapshot
    pub fn refresh(&self) {
        match &self.refresh_tx {
            Some(tx) => {
                // A full queue already has a pending refresh
                let _ = tx.try_send(());
            }
            None => debug!("refresh requested but feed is not running"),
        }
    }

    /// Stop the feed task
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(true);
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.refresh_tx = None;
    }
}

impl Drop for RateFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_feed(
    interval: Duration,
    msg_tx: mpsc::Sender<Message>,
    mut refresh_rx: mpsc::Receiver<()>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if !emit_snapshot(&msg_tx).await {
                    break;
                }
            }
            Some(()) = refresh_rx.recv() => {
                if !emit_snapshot(&msg_tx).await {
                    break;
                }
            }
            _ = shutdown_rx.changed() => break,
        }
    }

    debug!("rate feed task exiting");
}

/// Send one snapshot; false when the receiving side is gone
async fn emit_snapshot(msg_tx: &mpsc::Sender<Message>) -> bool {
    let rates = sample_snapshot();
    debug!(count = rates.len(), "emitting rate snapshot");
    msg_tx
        .send(Message::RatesUpdated {
            rates,
            at: Local::now(),
        })
        .await
        .is_ok()
}

fn sample_snapshot() -> Vec<Rate> {
    let mut rng = rand::thread_rng();
    SEED_RATES
        .iter()
        .map(|(base, quote, value)| {
            let jitter = rng.gen_range(-JITTER_FRACTION..=JITTER_FRACTION);
            Rate::new(CurrencyPair::new(*base, *quote), value * (1.0 + jitter))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    fn fast_settings() -> FeedSettings {
        FeedSettings {
            enabled: true,
            interval_secs: 1,
        }
    }

    #[test]
    fn test_sample_snapshot_covers_all_seed_pairs() {
        let rates = sample_snapshot();

        assert_eq!(rates.len(), SEED_RATES.len());
        for (base, quote, _) in SEED_RATES {
            assert!(
                rates
                    .iter()
                    .any(|r| r.pair.base == *base && r.pair.quote == *quote),
                "missing {base}/{quote}"
            );
        }
    }

    #[test]
    fn test_sample_snapshot_jitter_stays_in_bounds() {
        for _ in 0..50 {
            for (rate, (_, _, seed)) in sample_snapshot().iter().zip(SEED_RATES) {
                let deviation = (rate.value - seed).abs() / seed;
                assert!(deviation <= JITTER_FRACTION + f64::EPSILON);
                assert!(rate.value > 0.0);
            }
        }
    }

    #[tokio::test]
    async fn test_feed_emits_initial_snapshot() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let mut feed = RateFeed::new(&fast_settings());
        feed.start(msg_tx).unwrap();

        let msg = timeout(Duration::from_secs(2), msg_rx.recv())
            .await
            .expect("no snapshot within 2s")
            .expect("channel closed");

        match msg {
            Message::RatesUpdated { rates, .. } => assert_eq!(rates.len(), SEED_RATES.len()),
            other => panic!("unexpected message: {other:?}"),
        }

        feed.stop();
    }

    #[tokio::test]
    async fn test_refresh_triggers_extra_snapshot() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let mut feed = RateFeed::new(&FeedSettings {
            enabled: true,
            interval_secs: 3600,
        });
        feed.start(msg_tx).unwrap();

        // Initial tick
        timeout(Duration::from_secs(2), msg_rx.recv())
            .await
            .expect("no initial snapshot")
            .expect("channel closed");

        feed.refresh();
        let msg = timeout(Duration::from_secs(2), msg_rx.recv())
            .await
            .expect("no refresh snapshot")
            .expect("channel closed");
        assert!(matches!(msg, Message::RatesUpdated { .. }));

        feed.stop();
    }

    #[tokio::test]
    async fn test_start_twice_is_an_error() {
        let (msg_tx, _msg_rx) = mpsc::channel(8);
        let mut feed = RateFeed::new(&fast_settings());

        feed.start(msg_tx.clone()).unwrap();
        let err = feed.start(msg_tx).unwrap_err();

        assert!(matches!(err, Error::Feed { .. }));
        feed.stop();
    }

    #[tokio::test]
    async fn test_stop_ends_the_task() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let mut feed = RateFeed::new(&fast_settings());
        feed.start(msg_tx).unwrap();
        feed.stop();

        // Once the task is gone the channel drains to None
        let drained = timeout(Duration::from_secs(2), async {
            while msg_rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok(), "channel never closed after stop");
    }
}
