//! Latest-week resolution.
//!
//! Lists the season's preview directories (current and legacy layouts) and
//! returns the highest `week-N.json` present. The index is rebuilt on every
//! call so newly published weeks show up without a restart.

use serde::Deserialize;
use std::collections::BTreeSet;

use crate::core::{
    PreviewsClient, PreviewsError, RepoSource,
    client::LISTING_MEDIA_TYPE,
    models::CUTOFF_SEASON,
    net,
};

#[derive(Deserialize)]
struct DirEntry {
    name: String,
}

/// Resolve the latest published preview week for `season`.
///
/// Seasons before the cutoff return `Ok(None)` without any network call.
/// A directory that fails to list is skipped; the result is the maximum week
/// across whatever listed successfully, or `None` if nothing matched.
pub async fn resolve_latest_week(
    client: &PreviewsClient,
    source: &RepoSource,
    season: u16,
) -> Result<Option<u32>, PreviewsError> {
    if season < CUTOFF_SEASON {
        return Ok(None);
    }

    let dirs = [
        format!("previews/{season}"),
        format!("data/previews/{season}"),
    ];

    let mut weeks: BTreeSet<u32> = BTreeSet::new();
    for dir in &dirs {
        match list_dir(client, source, dir).await {
            Ok(entries) => {
                weeks.extend(entries.iter().filter_map(|e| week_file_number(&e.name)));
            }
            Err(e) => {
                // Partial listing is fine; one unreachable directory must not
                // sink the whole resolution.
                tracing::debug!(dir = %dir, error = %e, "skipping unlistable preview directory");
            }
        }
    }

    Ok(weeks.last().copied())
}

async fn list_dir(
    client: &PreviewsClient,
    source: &RepoSource,
    dir: &str,
) -> Result<Vec<DirEntry>, PreviewsError> {
    let mut url = client.base_content_api().join(&format!(
        "repos/{}/{}/contents/{}",
        source.owner, source.repo, dir
    ))?;
    url.query_pairs_mut().append_pair("ref", &source.git_ref);

    let resp = client.get_no_store(url, Some(LISTING_MEDIA_TYPE)).await?;
    if !resp.status().is_success() {
        return Err(PreviewsError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    let body = net::get_text(resp).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Extract `N` from a `week-N.json` filename (ASCII case-insensitive).
fn week_file_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    let digits = lower.strip_prefix("week-")?.strip_suffix(".json")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
