//! Poll scheduler.
//!
//! A single background task owns the interval timer and runs every poll
//! inline, so polls never overlap. Manual refresh requests that arrive while
//! a poll is in flight collapse into one follow-up poll.
//!
//! Each cycle: token lookup -> quota fetch -> engine. Upstream failures skip
//! the engine and publish an error state instead.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use quota_widget_types::DashboardState;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::engine::EngineTables;
use crate::error::{AppError, AppResult};
use crate::modules::quota::QuotaSource;
use crate::modules::token_extraction::TokenProvider;

/// Latest published state plus whether a poll is running right now.
#[derive(Debug, Clone, PartialEq)]
pub struct PollSnapshot {
    pub state: DashboardState,
    pub refreshing: bool,
}

pub struct Poller {
    tokens: Arc<dyn TokenProvider>,
    source: Arc<dyn QuotaSource>,
    tables: Arc<EngineTables>,
    interval: Duration,
}

impl Poller {
    pub fn new(
        tokens: Arc<dyn TokenProvider>,
        source: Arc<dyn QuotaSource>,
        tables: EngineTables,
        interval: Duration,
    ) -> Self {
        Self { tokens, source, tables: Arc::new(tables), interval }
    }

    /// Run one full cycle and return the resulting state.
    pub async fn poll_once(&self) -> DashboardState {
        let token = match self.load_token().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                tracing::info!("[Poller] No access token available");
                return DashboardState::error(AppError::NoToken.display_message());
            },
            Err(e) => {
                tracing::warn!("[Poller] Token lookup failed: {}", e);
                return DashboardState::error(AppError::NoToken.display_message());
            },
        };

        match self.source.fetch_models(&token).await {
            Ok(payload) => {
                let now = Utc::now();
                let (items, layout) = self.tables.render(&payload, now);
                tracing::info!(
                    "[Poller] Refreshed: {} models, {} cards",
                    payload.len(),
                    items.iter().filter(|i| !i.is_list()).count()
                );
                DashboardState::Ready { items, layout, updated_at: now }
            },
            Err(e) => {
                tracing::warn!("[Poller] Quota fetch failed: {}", e);
                DashboardState::error(e.display_message())
            },
        }
    }

    /// SQLite work happens off the async runtime.
    async fn load_token(&self) -> AppResult<Option<String>> {
        let tokens = Arc::clone(&self.tokens);
        tokio::task::spawn_blocking(move || tokens.load_token())
            .await
            .map_err(|e| AppError::Unknown(format!("token lookup task failed: {}", e)))?
    }

    /// Start polling in the background. The first poll runs immediately.
    pub fn spawn(self) -> PollHandle {
        let (tx, rx) =
            watch::channel(PollSnapshot { state: DashboardState::Loading, refreshing: false });
        let refresh = Arc::new(Notify::new());
        let task = tokio::spawn(self.run(tx, Arc::clone(&refresh)));
        PollHandle { refresh, state: rx, task }
    }

    async fn run(self, tx: watch::Sender<PollSnapshot>, refresh: Arc<Notify>) {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!("[Poller] Started, interval {}s", self.interval.as_secs());

        loop {
            tokio::select! {
                _ = ticker.tick() => {},
                () = refresh.notified() => {
                    tracing::debug!("[Poller] Manual refresh");
                    ticker.reset();
                },
                () = tx.closed() => {
                    tracing::info!("[Poller] No subscribers left, stopping");
                    break;
                },
            }

            tx.send_modify(|snapshot| snapshot.refreshing = true);
            let state = self.poll_once().await;
            tx.send_replace(PollSnapshot { state, refreshing: false });
        }
    }
}

/// Control side of a running [`Poller`].
pub struct PollHandle {
    refresh: Arc<Notify>,
    state: watch::Receiver<PollSnapshot>,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Ask for a poll now. Coalesced with any request already pending.
    pub fn refresh_now(&self) {
        self.refresh.notify_one();
    }

    pub fn subscribe(&self) -> watch::Receiver<PollSnapshot> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> PollSnapshot {
        self.state.borrow().clone()
    }

    pub fn shutdown(self) {
        self.task.abort();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quota_widget_types::{QuotaPayload, RawModelQuota, Remaining, ViewModel};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedToken(Option<&'static str>);

    impl TokenProvider for FixedToken {
        fn load_token(&self) -> AppResult<Option<String>> {
            Ok(self.0.map(str::to_string))
        }
    }

    #[derive(Default)]
    struct FakeSource {
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        fail_status: Option<u16>,
        first_call_gate: Option<Notify>,
    }

    impl FakeSource {
        fn gated() -> Self {
            Self { first_call_gate: Some(Notify::new()), ..Self::default() }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuotaSource for FakeSource {
        async fn fetch_models(&self, access_token: &str) -> AppResult<QuotaPayload> {
            assert_eq!(access_token, "ya29.test");
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(running, Ordering::SeqCst);

            if call == 1 {
                if let Some(gate) = &self.first_call_gate {
                    gate.notified().await;
                }
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if let Some(status) = self.fail_status {
                return Err(AppError::Http { status, body: String::new() });
            }
            let mut payload = QuotaPayload::new();
            payload.insert("gemini-3-flash".to_string(), RawModelQuota::new(Some(0.3), None));
            Ok(payload)
        }
    }

    fn poller(tokens: Option<&'static str>, source: Arc<FakeSource>) -> Poller {
        Poller::new(
            Arc::new(FixedToken(tokens)),
            source,
            EngineTables::default(),
            Duration::from_secs(3600),
        )
    }

    async fn wait_for(mut condition: impl FnMut() -> bool) {
        for _ in 0..1000 {
            if condition() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("condition not reached in time");
    }

    #[tokio::test]
    async fn test_poll_once_ready() {
        let source = Arc::new(FakeSource::default());
        let state = poller(Some("ya29.test"), source.clone()).poll_once().await;

        match state {
            DashboardState::Ready { items, layout, .. } => {
                assert_eq!(items.len(), 1);
                assert_eq!(layout.rects.len(), 1);
                match &items[0] {
                    ViewModel::Group(card) => {
                        assert_eq!(card.title, "Gemini 3 Flash");
                        assert_eq!(card.remaining, Remaining::Fraction(0.3));
                    },
                    other => panic!("expected card, got {:?}", other),
                }
            },
            other => panic!("expected ready, got {:?}", other),
        }
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_token_skips_fetch() {
        let source = Arc::new(FakeSource::default());
        let state = poller(None, source.clone()).poll_once().await;

        assert_eq!(state, DashboardState::error("Login required"));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_http_failure_becomes_error_state() {
        let source = Arc::new(FakeSource { fail_status: Some(500), ..FakeSource::default() });
        let state = poller(Some("ya29.test"), source).poll_once().await;
        assert_eq!(state, DashboardState::error("Error 500"));
    }

    #[tokio::test]
    async fn test_refresh_requests_during_poll_are_coalesced() {
        let source = Arc::new(FakeSource::gated());
        let handle = poller(Some("ya29.test"), source.clone()).spawn();

        wait_for(|| source.calls() == 1).await;
        assert!(handle.snapshot().refreshing);

        handle.refresh_now();
        handle.refresh_now();
        handle.refresh_now();
        if let Some(gate) = &source.first_call_gate {
            gate.notify_one();
        }

        wait_for(|| source.calls() == 2 && !handle.snapshot().refreshing).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(source.calls(), 2);
        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
        assert!(handle.snapshot().state.is_ready());
        handle.shutdown();
    }
}
