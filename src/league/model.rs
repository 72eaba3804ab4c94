use serde::{Deserialize, Serialize};

/// One roster's side of a weekly matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    /// Shared across the rosters facing each other; `None` on bye weeks.
    #[serde(default)]
    pub matchup_id: Option<u64>,
    pub roster_id: u64,
    #[serde(default)]
    pub points: Option<f64>,
}

/// A league roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: u64,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// A league member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueUser {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
