use serde::{Deserialize, Serialize};

/// Seasons below this year have no remote preview data; every resolver and
/// importer short-circuits without a network call.
pub const CUTOFF_SEASON: u16 = 2025;

/// Location of the repository that publishes weekly preview files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSource {
    /// Repository owner (user or org).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch or tag to read from.
    pub git_ref: String,
}

impl RepoSource {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        git_ref: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            git_ref: git_ref.into(),
        }
    }
}

impl Default for RepoSource {
    fn default() -> Self {
        Self::new("c00p92", "ageffl", crate::spec::DEFAULT_REF)
    }
}

/// The league/season state the dashboard is currently showing.
///
/// Passed explicitly into the page loader and scheduler so neither reads
/// ambient global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueContext {
    /// Season year, e.g. 2025.
    pub season: u16,
    /// Sleeper league id for that season.
    pub league_id: String,
    /// Manually-managed leagues are not backed by the remote provider and
    /// never receive remote preview imports or live refreshes.
    pub manual: bool,
}

impl LeagueContext {
    pub fn new(season: u16, league_id: impl Into<String>) -> Self {
        Self {
            season,
            league_id: league_id.into(),
            manual: false,
        }
    }

    /// Mark this league as manually managed.
    #[must_use]
    pub fn manual(mut self, yes: bool) -> Self {
        self.manual = yes;
        self
    }

    /// Whether remote preview data may exist for this context at all.
    pub fn remote_eligible(&self) -> bool {
        self.season >= CUTOFF_SEASON && !self.manual
    }
}
