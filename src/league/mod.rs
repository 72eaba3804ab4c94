//! League API consumption: matchups, rosters, and users.
//!
//! These are the dashboard's external data endpoints; every request goes out
//! no-store with a cache-busting query parameter via the client.

mod model;

pub use model::{LeagueUser, Matchup, Roster};

use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::core::{PreviewsClient, PreviewsError};

/// Fetch the matchups for one week.
pub async fn fetch_matchups(
    client: &PreviewsClient,
    league_id: &str,
    week: u32,
) -> Result<Vec<Matchup>, PreviewsError> {
    client
        .get_league_json(&format!("league/{league_id}/matchups/{week}"))
        .await
}

/// Fetch the league's rosters.
pub async fn fetch_rosters(
    client: &PreviewsClient,
    league_id: &str,
) -> Result<Vec<Roster>, PreviewsError> {
    client
        .get_league_json(&format!("league/{league_id}/rosters"))
        .await
}

/// Fetch the league's members.
pub async fn fetch_users(
    client: &PreviewsClient,
    league_id: &str,
) -> Result<Vec<LeagueUser>, PreviewsError> {
    client
        .get_league_json(&format!("league/{league_id}/users"))
        .await
}

/// Group matchups by their shared matchup id. Bye-week entries (no id) are
/// dropped; they have no opponent to preview.
pub fn group_matchups(matchups: Vec<Matchup>) -> BTreeMap<u64, Vec<Matchup>> {
    let mut groups: BTreeMap<u64, Vec<Matchup>> = BTreeMap::new();
    for m in matchups {
        if let Some(id) = m.matchup_id {
            groups.entry(id).or_default().push(m);
        }
    }
    groups
}

/// Shared cache for rosters and users, which change rarely within a session.
/// The page loader fills it on first load and reuses it afterwards.
#[derive(Debug, Default)]
pub struct RosterCache {
    rosters: RwLock<Vec<Roster>>,
    users: RwLock<Vec<LeagueUser>>,
}

impl RosterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn rosters(&self) -> Option<Vec<Roster>> {
        let guard = self.rosters.read().await;
        if guard.is_empty() {
            None
        } else {
            Some(guard.clone())
        }
    }

    pub async fn users(&self) -> Option<Vec<LeagueUser>> {
        let guard = self.users.read().await;
        if guard.is_empty() {
            None
        } else {
            Some(guard.clone())
        }
    }

    pub async fn put_rosters(&self, rosters: Vec<Roster>) {
        *self.rosters.write().await = rosters;
    }

    pub async fn put_users(&self, users: Vec<LeagueUser>) {
        *self.users.write().await = users;
    }
}
