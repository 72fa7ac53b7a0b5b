//! # Recommendation Scheduler
//!
//! Owns the runtime-mutable schedule (`SchedulerConfig`) and the background timer that
//! periodically posts a recommendation to the configured channel.
//!
//! - `ScheduleSettings` is the shared handle given to the router and the timer. Every access
//!   copies values in or out under the lock and never performs I/O while holding it.
//! - Changing the interval enqueues a restart request on a single-slot channel. A burst of
//!   changes collapses into one pending restart and the sender never blocks.
//! - `RecommendationTicker` is the single consumer: it selects over tick, restart and shutdown.

use anyhow::{Result, bail};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{Mutex, mpsc, watch};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::application::orchestrator::Recommender;
use crate::domain::traits::ChatProvider;
use crate::infrastructure::webhook::WebhookNotifier;
use crate::strings::{logs, messages};

/// Runtime configuration of the periodic delivery. `destination == None` means Idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub destination: Option<String>,
    pub keyword: String,
    pub interval: Duration,
}

impl SchedulerConfig {
    pub fn new(keyword: impl Into<String>, interval: Duration) -> Self {
        Self {
            destination: None,
            keyword: keyword.into(),
            interval,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.destination.is_some()
    }
}

/// Shared handle over the schedule. Cheap to clone.
#[derive(Clone)]
pub struct ScheduleSettings {
    inner: Arc<Mutex<SchedulerConfig>>,
    restart_tx: mpsc::Sender<()>,
}

impl ScheduleSettings {
    /// Returns the handle and the restart receiver consumed by `RecommendationTicker`.
    pub fn new(initial: SchedulerConfig) -> (Self, mpsc::Receiver<()>) {
        let (restart_tx, restart_rx) = mpsc::channel(1);
        let settings = Self {
            inner: Arc::new(Mutex::new(initial)),
            restart_tx,
        };
        (settings, restart_rx)
    }

    pub async fn snapshot(&self) -> SchedulerConfig {
        self.inner.lock().await.clone()
    }

    /// Arms periodic delivery for `channel_id`. Takes effect on the next tick.
    pub async fn set_destination(&self, channel_id: &str) {
        self.inner.lock().await.destination = Some(channel_id.to_string());
    }

    pub async fn set_keyword(&self, keyword: &str) {
        self.inner.lock().await.keyword = keyword.to_string();
    }

    /// Updates the interval and asks the timer to restart with it.
    pub async fn set_interval(&self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            bail!("Interval must be greater than zero");
        }
        self.inner.lock().await.interval = interval;
        self.request_restart();
        Ok(())
    }

    fn request_restart(&self) {
        match self.restart_tx.try_send(()) {
            Ok(()) => {}
            Err(TrySendError::Full(())) => {
                tracing::debug!("Timer restart already pending");
            }
            Err(TrySendError::Closed(())) => {
                tracing::debug!("Timer is not running, restart request dropped");
            }
        }
    }
}

/// Background loop delivering scheduled recommendations.
pub struct RecommendationTicker {
    settings: ScheduleSettings,
    restart_rx: mpsc::Receiver<()>,
    recommender: Arc<Recommender>,
    chat: Arc<dyn ChatProvider>,
    webhook: Option<Arc<WebhookNotifier>>,
}

impl RecommendationTicker {
    pub fn new(
        settings: ScheduleSettings,
        restart_rx: mpsc::Receiver<()>,
        recommender: Arc<Recommender>,
        chat: Arc<dyn ChatProvider>,
        webhook: Option<Arc<WebhookNotifier>>,
    ) -> Self {
        Self {
            settings,
            restart_rx,
            recommender,
            chat,
            webhook,
        }
    }

    /// Runs until `shutdown` flips to `true` (or its sender is dropped).
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        if *shutdown.borrow() {
            return;
        }

        let mut timer = self.arm().await;

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    // A delivery in flight is abandoned when shutdown arrives.
                    tokio::select! {
                        () = self.tick() => {}
                        _ = shutdown.changed() => break,
                    }
                }
                Some(()) = self.restart_rx.recv() => {
                    timer = self.arm().await;
                    tracing::info!("{}", logs::TIMER_RESTARTED);
                }
                _ = shutdown.changed() => {
                    break;
                }
            }
        }

        tracing::info!("{}", logs::TIMER_STOPPED);
    }

    /// Fresh timer whose first tick is one full interval from now.
    async fn arm(&self) -> Interval {
        let period = self.settings.snapshot().await.interval;
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let next_at = chrono::Duration::from_std(period)
            .ok()
            .and_then(|d| chrono::Local::now().checked_add_signed(d))
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        tracing::info!(
            "{}",
            logs::timer_armed(&messages::describe_interval(period), &next_at)
        );

        timer
    }

    /// One delivery attempt. Remote failures are reported to the channel, never propagated.
    pub async fn tick(&self) {
        let SchedulerConfig {
            destination,
            keyword,
            ..
        } = self.settings.snapshot().await;

        let Some(channel_id) = destination else {
            tracing::warn!("{}", logs::NO_DESTINATION);
            return;
        };

        let (message, succeeded) = match self.recommender.resolve(&keyword).await {
            Ok(text) => (messages::scheduled_recommendation(&text), true),
            Err(e) => {
                tracing::error!("Scheduled recommendation for '{}' failed: {}", keyword, e);
                (messages::scheduled_failure(&e), false)
            }
        };

        if let Err(e) = self.chat.send_message(&channel_id, &message).await {
            tracing::error!("{}", logs::send_failed(&channel_id, &e));
        }

        if succeeded && let Some(webhook) = &self.webhook {
            if let Err(e) = webhook.notify(&message).await {
                tracing::warn!("Webhook mirror failed: {:#}", e);
            }
        }
    }
}
