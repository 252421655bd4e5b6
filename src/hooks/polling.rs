//! Account-bound periodic refresh.
//!
//! A [`PollingHook`] is either idle or polling one account. While polling,
//! every period it spawns a refresh. Failed refreshes are logged and the
//! next tick retries. Refreshes already in flight when the hook is unbound
//! still run to completion and dispatch.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, warn};

use crate::{error::Result, icon::constants::DEFAULT_POLL_INTERVAL};

/// One read-transform-dispatch cycle for an account.
#[async_trait]
pub trait Refresh: Send + Sync + 'static {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn refresh(&self, account: &str) -> Result<()>;
}

/// Observable state of a [`PollingHook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollingState {
    Idle,
    Polling { account: String },
}

struct ActivePoll {
    account: String,
    // Cancels the timer task when dropped.
    _guard: DropGuard,
}

/// Periodic refresh bound to at most one account.
///
/// Dropping the hook stops its timer.
pub struct PollingHook<R: Refresh> {
    refresher: Arc<R>,
    period: Duration,
    active: Option<ActivePoll>,
}

impl<R: Refresh> PollingHook<R> {
    /// Hook with the default period.
    pub fn new(refresher: R) -> Self {
        Self::with_period(refresher, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_period(refresher: R, period: Duration) -> Self {
        Self { refresher: Arc::new(refresher), period, active: None }
    }

    pub fn refresher(&self) -> &R {
        &self.refresher
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> PollingState {
        match &self.active {
            Some(active) => PollingState::Polling { account: active.account.clone() },
            None => PollingState::Idle,
        }
    }

    /// Bind to `account`, or unbind with `None`.
    ///
    /// Binding the account already polled is a no-op; binding another one
    /// restarts the timer. Must be called inside a tokio runtime.
    pub fn bind(&mut self, account: Option<&str>) {
        let Some(account) = account else {
            self.unbind();
            return;
        };

        if self.active.as_ref().is_some_and(|active| active.account == account) {
            return;
        }

        self.unbind();

        let token = CancellationToken::new();
        tokio::spawn(run_timer(
            self.refresher.clone(),
            account.to_string(),
            self.period,
            token.clone(),
        ));

        info!(
            hook = self.refresher.name(),
            account = %account,
            period_ms = self.period.as_millis() as u64,
            "Polling started"
        );
        self.active = Some(ActivePoll { account: account.to_string(), _guard: token.drop_guard() });
    }

    /// Stop polling. No-op when idle.
    pub fn unbind(&mut self) {
        if let Some(active) = self.active.take() {
            info!(hook = self.refresher.name(), account = %active.account, "Polling stopped");
        }
    }
}

impl<R: Refresh> std::fmt::Debug for PollingHook<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollingHook")
            .field("hook", &self.refresher.name())
            .field("period", &self.period)
            .field("state", &self.state())
            .finish()
    }
}

async fn run_timer<R: Refresh>(
    refresher: Arc<R>,
    account: String,
    period: Duration,
    token: CancellationToken,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                let refresher = refresher.clone();
                let account = account.clone();
                tokio::spawn(async move {
                    debug!(hook = refresher.name(), account = %account, "Refresh");
                    if let Err(e) = refresher.refresh(&account).await {
                        warn!(
                            hook = refresher.name(),
                            account = %account,
                            error = %e,
                            "Refresh failed, retrying next tick"
                        );
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl Recorder {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Refresh for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        async fn refresh(&self, account: &str) -> Result<()> {
            self.calls.lock().unwrap().push(account.to_string());
            if self.fail {
                return Err(AppError::RemoteCall("boom".to_string()));
            }
            Ok(())
        }
    }

    fn hook(fail: bool) -> PollingHook<Recorder> {
        PollingHook::with_period(
            Recorder { fail, ..Default::default() },
            Duration::from_millis(100),
        )
    }

    #[test]
    fn test_starts_idle() {
        let hook = hook(false);
        assert_eq!(hook.state(), PollingState::Idle);
        assert_eq!(PollingHook::new(Recorder::default()).period(), DEFAULT_POLL_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let mut hook = hook(false);
        hook.bind(Some("a1"));

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert!(hook.refresher().calls().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(hook.refresher().calls(), vec!["a1"]);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(hook.refresher().calls().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbind_stops_ticks() {
        let mut hook = hook(false);
        hook.bind(Some("a1"));
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(hook.refresher().calls().len(), 1);

        hook.bind(None);
        assert_eq!(hook.state(), PollingState::Idle);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(hook.refresher().calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rebind_same_account_is_noop() {
        let mut hook = hook(false);
        hook.bind(Some("a1"));
        tokio::time::sleep(Duration::from_millis(60)).await;
        hook.bind(Some("a1"));

        // Timer was not restarted, so the tick at 100ms still lands.
        tokio::time::sleep(Duration::from_millis(41)).await;
        assert_eq!(hook.refresher().calls(), vec!["a1"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rebind_other_account_restarts() {
        let mut hook = hook(false);
        hook.bind(Some("a1"));
        tokio::time::sleep(Duration::from_millis(60)).await;
        hook.bind(Some("a2"));
        assert_eq!(hook.state(), PollingState::Polling { account: "a2".to_string() });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(hook.refresher().calls().is_empty());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(hook.refresher().calls(), vec!["a2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_are_skipped() {
        let mut hook = hook(true);
        hook.bind(Some("a1"));

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(hook.refresher().calls().len(), 3);
        assert!(matches!(hook.state(), PollingState::Polling { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let recorder = {
            let mut hook = hook(false);
            hook.bind(Some("a1"));
            hook.refresher.clone()
        };

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(recorder.calls().is_empty());
    }
}
