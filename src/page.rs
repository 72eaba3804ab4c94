//! Previews page orchestration.
//!
//! Determines the week to show, fetches the league data for it, imports the
//! weekly preview text best-effort, and hands back one assembled value.
//! Rendering is the caller's job; any error out of here is meant to be shown
//! inline (`PreviewsError` is `Display`), never left unhandled.

use std::collections::BTreeMap;

use crate::{
    core::{LeagueContext, PreviewsClient, PreviewsError, RepoSource},
    import::{ImportOutcome, import_weekly_previews},
    league::{self, LeagueUser, Matchup, Roster, RosterCache},
    resolve::resolve_latest_week,
    store::{PreviewStore, preview_key},
};

/// Supplies the dashboard's notion of the current week, used as the last
/// resort when no published preview file can be found.
///
/// Implemented by the host application; boxed-future form so it stays object
/// safe and can be handed in as `&dyn CurrentWeekSource`.
pub trait CurrentWeekSource: Send + Sync {
    fn current_week(
        &self,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Option<u32>> + Send + '_>>;
}

/// Per-load configuration for the page orchestrator.
#[derive(Default)]
pub struct PageOptions<'a> {
    /// Repository publishing the weekly preview files.
    pub source: RepoSource,
    /// Fallback week source when neither the listing nor the week-01 probe
    /// finds anything.
    pub current_week: Option<&'a dyn CurrentWeekSource>,
}

/// Everything the previews page needs, assembled.
#[derive(Debug)]
pub struct PreviewsPage {
    pub week: u32,
    /// Matchups grouped by shared matchup id.
    pub matchups: BTreeMap<u64, Vec<Matchup>>,
    pub rosters: Vec<Roster>,
    pub users: Vec<LeagueUser>,
    /// Imported preview text per matchup id, read back from the store.
    pub previews: BTreeMap<u64, String>,
    /// What the best-effort import accomplished for this load.
    pub import: ImportOutcome,
}

/// Load the previews page for the given context.
///
/// Week determination order: latest published week, then an explicit week-01
/// probe on both directory layouts, then the caller's current-week fallback.
/// If all three come up empty this fails with
/// [`PreviewsError::WeekResolution`]. A failed preview import does not abort
/// the load.
pub async fn load_previews_page(
    client: &PreviewsClient,
    store: &dyn PreviewStore,
    cache: &RosterCache,
    ctx: &LeagueContext,
    opts: &PageOptions<'_>,
) -> Result<PreviewsPage, PreviewsError> {
    let week = determine_week(client, ctx, opts).await?;

    let matchups_fut = league::fetch_matchups(client, &ctx.league_id, week);
    let rosters_fut = async {
        match cache.rosters().await {
            Some(rosters) => Ok(rosters),
            None => league::fetch_rosters(client, &ctx.league_id).await,
        }
    };
    let users_fut = async {
        match cache.users().await {
            Some(users) => Ok(users),
            None => league::fetch_users(client, &ctx.league_id).await,
        }
    };

    let (matchups, rosters, users) = tokio::try_join!(matchups_fut, rosters_fut, users_fut)?;
    cache.put_rosters(rosters.clone()).await;
    cache.put_users(users.clone()).await;

    let matchups = league::group_matchups(matchups);

    let import = import_weekly_previews(client, store, &opts.source, ctx, week).await;

    let mut previews = BTreeMap::new();
    for id in matchups.keys() {
        if let Some(text) = store.get(&preview_key(&ctx.league_id, week, &id.to_string())) {
            previews.insert(*id, text);
        }
    }

    Ok(PreviewsPage {
        week,
        matchups,
        rosters,
        users,
        previews,
        import,
    })
}

async fn determine_week(
    client: &PreviewsClient,
    ctx: &LeagueContext,
    opts: &PageOptions<'_>,
) -> Result<u32, PreviewsError> {
    match resolve_latest_week(client, &opts.source, ctx.season).await {
        Ok(Some(week)) => return Ok(week),
        Ok(None) => {}
        Err(e) => {
            tracing::debug!(error = %e, "latest-week resolution failed");
        }
    }

    if probe_week_one(client, &opts.source, ctx.season).await {
        return Ok(1);
    }

    if let Some(source) = opts.current_week
        && let Some(week) = source.current_week().await
    {
        return Ok(week);
    }

    Err(PreviewsError::WeekResolution)
}

/// Plain existence check for `week-01.json` on both directory layouts, used
/// when the listing endpoint is unavailable but the files themselves might
/// not be.
async fn probe_week_one(client: &PreviewsClient, source: &RepoSource, season: u16) -> bool {
    let paths = [
        format!("previews/{season}/week-01.json"),
        format!("data/previews/{season}/week-01.json"),
    ];
    for path in &paths {
        let Ok(url) = client.base_raw().join(&format!(
            "{}/{}/{}/{path}",
            source.owner, source.repo, source.git_ref
        )) else {
            continue;
        };
        match client.get_no_store(url, None).await {
            Ok(resp) if resp.status().is_success() => return true,
            _ => {}
        }
    }
    false
}
