use std::{sync::Arc, time::Duration};

use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::{
    config::MAX_REFRESH_INTERVAL,
    dashboard::{Action, Dashboard, Effect, FetchTicket},
    provider::WeatherProvider,
};

/// Runs a [`Dashboard`] against a live provider.
///
/// Fetches and timer ticks run as tokio tasks and report back through a
/// channel; the caller pulls them with [`Session::next_action`] and feeds
/// them to [`Session::dispatch`], so all state changes happen on one task.
#[derive(Debug)]
pub struct Session {
    dashboard: Dashboard,
    provider: Arc<dyn WeatherProvider>,
    refresh_period: Duration,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
    timer: Option<JoinHandle<()>>,
}

impl Session {
    /// `refresh_period` is capped at [`MAX_REFRESH_INTERVAL`].
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        dashboard: Dashboard,
        refresh_period: Duration,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            dashboard,
            provider,
            refresh_period: refresh_period.min(MAX_REFRESH_INTERVAL),
            tx,
            rx,
            timer: None,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn has_live_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Applies `action` and starts whatever work it calls for.
    pub fn dispatch(&mut self, action: Action) {
        for effect in self.dashboard.update(action) {
            match effect {
                Effect::Fetch(ticket) => self.spawn_fetch(ticket),
                Effect::StartRefreshTimer { generation } => self.start_timer(generation),
                Effect::StopRefreshTimer => self.stop_timer(),
            }
        }
    }

    /// Waits for the next completed fetch or refresh tick.
    pub async fn next_action(&mut self) -> Option<Action> {
        self.rx.recv().await
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();

        tracing::debug!(seq = ticket.seq, city = %ticket.request.city, "starting lookup");
        tokio::spawn(async move {
            let outcome = provider.get_weather(&ticket.request).await;
            // The receiver is gone only when the session has been dropped.
            let _ = tx.send(Action::FetchCompleted { seq: ticket.seq, outcome });
        });
    }

    fn start_timer(&mut self, generation: u64) {
        self.stop_timer();

        let tx = self.tx.clone();
        let period = self.refresh_period;
        let Some(first_tick) = Instant::now().checked_add(period) else {
            tracing::warn!(
                generation,
                ?period,
                "refresh period out of range, auto-refresh not started"
            );
            return;
        };

        tracing::info!(generation, period_secs = period.as_secs(), "auto-refresh enabled");
        self.timer = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(first_tick, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(Action::RefreshTick { generation }).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            tracing::info!("auto-refresh stopped");
            handle.abort();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop_timer();
    }
}
