//! sleeper-previews: data layer for a Sleeper league dashboard.
//!
//! Resolves the latest weekly preview file published in a GitHub repo,
//! imports its text into a durable key-value store, assembles everything the
//! previews page needs, and re-polls during likely game windows.

pub mod core;
pub mod import;
pub mod league;
pub mod page;
pub mod refresh;
pub mod resolve;
pub mod spec;
pub mod store;
pub mod transport;

pub use crate::core::client::{PreviewsClient, PreviewsClientBuilder};
pub use crate::core::error::PreviewsError;
pub use crate::core::models::{LeagueContext, RepoSource};
pub use import::{ImportOutcome, import_weekly_previews, normalize_weekly_payload};
pub use league::{LeagueUser, Matchup, Roster, RosterCache, group_matchups};
pub use page::{CurrentWeekSource, PageOptions, PreviewsPage, load_previews_page};
pub use refresh::{RefreshTarget, Scheduler, SchedulerHandle, WindowPolicy, WindowRule};
pub use resolve::resolve_latest_week;
pub use spec::RemoteSpec;
pub use store::{MemoryStore, PreviewStore, preview_key};

/// Install a plain fmt subscriber honoring `RUST_LOG`. For binaries and
/// examples; the library itself only emits `tracing` events.
#[cfg(feature = "subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
