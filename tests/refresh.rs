use chrono::{TimeZone, Weekday};
use sleeper_previews::{
    LeagueContext, PreviewsError, RefreshTarget, Scheduler, WindowPolicy, WindowRule,
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

/* ---------------- window predicate ---------------- */

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<chrono_tz::Tz> {
    chrono_tz::America::Detroit
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
}

#[test]
fn thursday_window_opens_exactly_at_noon() {
    let policy = WindowPolicy::default();
    // 2025-09-04 is a Thursday.
    assert!(!policy.contains_zoned(at(2025, 9, 4, 11, 59)));
    assert!(policy.contains_zoned(at(2025, 9, 4, 12, 0)));
    assert!(policy.contains_zoned(at(2025, 9, 4, 23, 59)));
}

#[test]
fn sunday_slate_runs_from_early_morning() {
    let policy = WindowPolicy::default();
    // 2025-09-07 is a Sunday.
    assert!(!policy.contains_zoned(at(2025, 9, 7, 4, 59)));
    assert!(policy.contains_zoned(at(2025, 9, 7, 5, 0)));
    assert!(policy.contains_zoned(at(2025, 9, 7, 13, 30)));
    assert!(policy.contains_zoned(at(2025, 9, 7, 23, 30)));
}

#[test]
fn friday_and_monday_are_afternoon_windows() {
    let policy = WindowPolicy::default();
    // 2025-09-05 Friday, 2025-09-08 Monday.
    assert!(policy.contains_zoned(at(2025, 9, 5, 12, 0)));
    assert!(policy.contains_zoned(at(2025, 9, 8, 20, 15)));
    assert!(!policy.contains_zoned(at(2025, 9, 8, 8, 0)));
}

#[test]
fn off_days_are_never_in_window() {
    let policy = WindowPolicy::default();
    // 2025-09-09 Tuesday, 2025-09-10 Wednesday, 2025-09-06 Saturday.
    assert!(!policy.contains_zoned(at(2025, 9, 9, 20, 0)));
    assert!(!policy.contains_zoned(at(2025, 9, 10, 20, 0)));
    assert!(!policy.contains_zoned(at(2025, 9, 6, 13, 0)));
}

#[test]
fn custom_rules_override_the_default_table() {
    let policy = WindowPolicy {
        rules: vec![WindowRule::new(Weekday::Wed, 0, 6)],
        ..WindowPolicy::default()
    };
    assert!(policy.contains_zoned(at(2025, 9, 10, 3, 0)));
    assert!(!policy.contains_zoned(at(2025, 9, 10, 7, 0)));
    assert!(!policy.contains_zoned(at(2025, 9, 7, 13, 0)));
}

/* ---------------- scheduler loop ---------------- */

fn always_open() -> WindowPolicy {
    let all = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    WindowPolicy {
        rules: all.iter().map(|&d| WindowRule::new(d, 0, 23)).collect(),
        ..WindowPolicy::default()
    }
}

struct CountingTarget {
    reloads: Arc<AtomicUsize>,
    preview_loads: Arc<AtomicUsize>,
    visible: bool,
    fail_reload: bool,
}

impl CountingTarget {
    fn new(visible: bool, fail_reload: bool) -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let reloads = Arc::new(AtomicUsize::new(0));
        let preview_loads = Arc::new(AtomicUsize::new(0));
        (
            Self {
                reloads: reloads.clone(),
                preview_loads: preview_loads.clone(),
                visible,
                fail_reload,
            },
            reloads,
            preview_loads,
        )
    }
}

impl RefreshTarget for CountingTarget {
    fn reload_current_league(
        &self,
    ) -> impl core::future::Future<Output = Result<(), PreviewsError>> + Send {
        let count = self.reloads.clone();
        let fail = self.fail_reload;
        async move {
            count.fetch_add(1, Ordering::SeqCst);
            if fail {
                Err(PreviewsError::Data("simulated outage".into()))
            } else {
                Ok(())
            }
        }
    }

    fn previews_visible(&self) -> bool {
        self.visible
    }

    fn load_previews(
        &self,
    ) -> impl core::future::Future<Output = Result<(), PreviewsError>> + Send {
        let count = self.preview_loads.clone();
        async move {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }
}

fn ctx() -> LeagueContext {
    LeagueContext::new(2025, "L1")
}

#[tokio::test]
async fn first_tick_fires_immediately_and_refreshes_the_visible_previews() {
    let (target, reloads, preview_loads) = CountingTarget::new(true, false);

    let handle = Scheduler::new(ctx())
        .policy(always_open())
        .interval(Duration::from_millis(20))
        .start(target);

    tokio::time::sleep(Duration::from_millis(90)).await;
    handle.stop().await;

    assert!(reloads.load(Ordering::SeqCst) >= 2, "expected immediate tick plus cadence ticks");
    assert!(preview_loads.load(Ordering::SeqCst) >= 2);
}

#[tokio::test]
async fn hidden_previews_view_only_reloads_league_data() {
    let (target, reloads, preview_loads) = CountingTarget::new(false, false);

    let handle = Scheduler::new(ctx())
        .policy(always_open())
        .interval(Duration::from_millis(20))
        .start(target);

    tokio::time::sleep(Duration::from_millis(70)).await;
    handle.stop().await;

    assert!(reloads.load(Ordering::SeqCst) >= 1);
    assert_eq!(preview_loads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn manual_league_never_refreshes() {
    let (target, reloads, _) = CountingTarget::new(true, false);

    let handle = Scheduler::new(ctx().manual(true))
        .policy(always_open())
        .interval(Duration::from_millis(10))
        .start(target);

    tokio::time::sleep(Duration::from_millis(60)).await;
    handle.stop().await;

    assert_eq!(reloads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn closed_window_suppresses_refreshes() {
    let (target, reloads, _) = CountingTarget::new(true, false);

    let closed = WindowPolicy {
        rules: Vec::new(),
        ..WindowPolicy::default()
    };
    let handle = Scheduler::new(ctx())
        .policy(closed)
        .interval(Duration::from_millis(10))
        .start(target);

    tokio::time::sleep(Duration::from_millis(60)).await;
    handle.stop().await;

    assert_eq!(reloads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_attempts_do_not_stop_the_ticking() {
    let (target, reloads, preview_loads) = CountingTarget::new(true, true);

    let handle = Scheduler::new(ctx())
        .policy(always_open())
        .interval(Duration::from_millis(20))
        .start(target);

    tokio::time::sleep(Duration::from_millis(90)).await;
    handle.stop().await;

    // Every attempt fails at the reload step, yet ticking continues and the
    // previews load is never reached.
    assert!(reloads.load(Ordering::SeqCst) >= 2);
    assert_eq!(preview_loads.load(Ordering::SeqCst), 0);
}
