//! Weekly payload import.
//!
//! Builds the ordered spec fallback list for a (season, week), fetches each
//! candidate through the dual-transport chain, and persists the first
//! payload that parses. All failures along the way are swallowed; the caller
//! only learns whether previews ended up available.

mod normalize;

pub use normalize::normalize_weekly_payload;

use crate::{
    core::{LeagueContext, PreviewsClient, RepoSource},
    spec::RemoteSpec,
    store::{PreviewStore, preview_key},
    transport::fetch_spec_text,
};

/// Spec templates in priority order: new layout before legacy, zero-padded
/// week before unpadded.
const SPEC_TEMPLATES: [&str; 4] = [
    "{owner}/{repo}@{ref}:previews/{season}/week-{week2}.json",
    "{owner}/{repo}@{ref}:data/previews/{season}/week-{week2}.json",
    "{owner}/{repo}@{ref}:previews/{season}/week-{week}.json",
    "{owner}/{repo}@{ref}:data/previews/{season}/week-{week}.json",
];

/// What an import attempt accomplished. Never an error: "no previews
/// available" is an expected outcome, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Pre-cutoff season or manually-managed league; nothing was fetched.
    Skipped,
    /// A payload was fetched and persisted. `entries` may be zero when a
    /// nested payload had no branch for the requested week.
    Imported { entries: usize },
    /// Every candidate spec failed to fetch or parse.
    Unavailable,
}

/// Render the candidate spec strings for a (season, week), in try-order.
pub fn spec_candidates(source: &RepoSource, season: u16, week: u32) -> Vec<String> {
    let week_str = week.to_string();
    let week2 = format!("{week:02}");
    SPEC_TEMPLATES
        .iter()
        .map(|template| {
            template
                .replace("{owner}", &source.owner)
                .replace("{repo}", &source.repo)
                .replace("{ref}", &source.git_ref)
                .replace("{season}", &season.to_string())
                .replace("{week2}", &week2)
                .replace("{week}", &week_str)
        })
        .collect()
}

/// Import the weekly previews for `week` into `store`.
///
/// Manual leagues and pre-cutoff seasons are a no-op success: remote data
/// must never override a manually curated league. Otherwise the candidate
/// specs are tried in order and the first one that fetches *and* normalizes
/// wins; later candidates are not tried even if it yielded zero entries.
pub async fn import_weekly_previews(
    client: &PreviewsClient,
    store: &dyn PreviewStore,
    source: &RepoSource,
    ctx: &LeagueContext,
    week: u32,
) -> ImportOutcome {
    if !ctx.remote_eligible() {
        return ImportOutcome::Skipped;
    }

    for candidate in spec_candidates(source, ctx.season, week) {
        let Some(spec) = RemoteSpec::parse(&candidate) else {
            continue;
        };
        let text = match fetch_spec_text(client, &spec).await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(spec = %spec, error = %e, "preview spec fetch failed");
                continue;
            }
        };
        let Some(entries) = normalize_weekly_payload(&text, week) else {
            tracing::debug!(spec = %spec, "preview payload had an unusable shape");
            continue;
        };

        for (entity_id, blurb) in &entries {
            store.set(&preview_key(&ctx.league_id, week, entity_id), blurb);
        }
        tracing::debug!(spec = %spec, entries = entries.len(), "imported weekly previews");
        return ImportOutcome::Imported {
            entries: entries.len(),
        };
    }

    ImportOutcome::Unavailable
}
