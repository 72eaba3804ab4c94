//! Live auto-refresh during likely game windows.
//!
//! A background task ticks on a fixed cadence (first tick immediately) and,
//! when the context's league is remote-backed and the wall clock falls in a
//! game window, runs one refresh attempt against the host-supplied target.
//! Attempts run to completion on the timer task itself, so a tick that
//! arrives mid-attempt is skipped rather than piling up a second in-flight
//! refresh. Failed attempts are logged and never stop the ticking.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use std::time::Duration;
use tokio::{
    select,
    sync::oneshot,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use crate::core::{LeagueContext, PreviewsError};

/// Default poll cadence: 2 minutes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(2 * 60);

/// One weekday's polling window, hour bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRule {
    pub weekday: Weekday,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl WindowRule {
    pub const fn new(weekday: Weekday, start_hour: u32, end_hour: u32) -> Self {
        Self {
            weekday,
            start_hour,
            end_hour,
        }
    }
}

/// The set of wall-clock windows during which live games are plausible,
/// evaluated in a fixed civil timezone.
///
/// The exact hour boundaries are policy, not law; the default table leans
/// broad so a refresh is never missed while games are on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowPolicy {
    pub rules: Vec<WindowRule>,
    pub timezone: Tz,
}

impl Default for WindowPolicy {
    /// Thu/Fri from noon (Thursday night and international games), all of
    /// Sunday's slate from the early international kickoffs, and Monday
    /// night. America/Detroit.
    fn default() -> Self {
        Self {
            rules: vec![
                WindowRule::new(Weekday::Thu, 12, 23),
                WindowRule::new(Weekday::Fri, 12, 23),
                WindowRule::new(Weekday::Sun, 5, 23),
                WindowRule::new(Weekday::Mon, 12, 23),
            ],
            timezone: chrono_tz::America::Detroit,
        }
    }
}

impl WindowPolicy {
    /// Is `now` inside any window?
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.contains_zoned(now.with_timezone(&self.timezone))
    }

    /// Same check against an already-zoned instant (handy for tests).
    pub fn contains_zoned(&self, now: DateTime<Tz>) -> bool {
        let (weekday, hour) = (now.weekday(), now.hour());
        self.rules
            .iter()
            .any(|r| r.weekday == weekday && (r.start_hour..=r.end_hour).contains(&hour))
    }
}

/// What a refresh attempt actually does, supplied by the host application.
pub trait RefreshTarget: Send + Sync + 'static {
    /// Re-fetch the current league's live data (standings, scores).
    fn reload_current_league(
        &self,
    ) -> impl core::future::Future<Output = Result<(), PreviewsError>> + Send;

    /// Whether the previews view is the one currently displayed.
    fn previews_visible(&self) -> bool;

    /// Reload the previews page (only called when it is visible).
    fn load_previews(&self) -> impl core::future::Future<Output = Result<(), PreviewsError>> + Send;
}

/// Builder for the auto-refresh task.
pub struct Scheduler {
    ctx: LeagueContext,
    policy: WindowPolicy,
    interval: Duration,
}

impl Scheduler {
    pub fn new(ctx: LeagueContext) -> Self {
        Self {
            ctx,
            policy: WindowPolicy::default(),
            interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Use a non-default window policy.
    #[must_use]
    pub fn policy(mut self, policy: WindowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Poll cadence. Default: 2 minutes.
    #[must_use]
    pub fn interval(mut self, dur: Duration) -> Self {
        self.interval = dur;
        self
    }

    /// Spawn the refresh task. The first tick fires immediately.
    pub fn start<T: RefreshTarget>(self, target: T) -> SchedulerHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let Scheduler {
            ctx,
            policy,
            interval: cadence,
        } = self;

        let join = tokio::spawn(async move {
            let mut ticker = interval(cadence);
            // A tick landing while an attempt is still running is dropped,
            // coalescing overlap into at most one in-flight refresh.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                select! {
                    _ = ticker.tick() => {
                        if !eligible(&ctx) || !policy.contains(Utc::now()) {
                            continue;
                        }
                        match refresh_once(&target).await {
                            Ok(()) => tracing::info!("live data refreshed"),
                            Err(e) => tracing::warn!(error = %e, "refresh attempt failed"),
                        }
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        SchedulerHandle {
            join,
            stop_tx: Some(stop_tx),
        }
    }
}

fn eligible(ctx: &LeagueContext) -> bool {
    !ctx.league_id.is_empty() && !ctx.manual
}

async fn refresh_once<T: RefreshTarget>(target: &T) -> Result<(), PreviewsError> {
    target.reload_current_league().await?;
    if target.previews_visible() {
        target.load_previews().await?;
    }
    Ok(())
}

/// Handle for a running refresh task.
pub struct SchedulerHandle {
    join: JoinHandle<()>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl SchedulerHandle {
    /// Politely ask the task to stop and wait for it to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.join.await;
    }

    /// Immediately abort the background task.
    pub fn abort(self) {
        self.join.abort();
    }
}
