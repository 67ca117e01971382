//! Explicit team registry.
//!
//! The registry is plain data passed into the pipeline at construction.
//! Adding a team means adding one entry; nothing else changes.

use serde::{Deserialize, Serialize};

/// Opaque team selector key, e.g. "manutd" or "lakers".
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub struct TeamId(String);

impl TeamId {
    /// Create a new team id.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TeamId {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// One configured team: selector key plus the identifiers the match source
/// and prompt compiler need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TeamEntry {
    /// Selector key used on the command line
    key: TeamId,
    /// Display name used in prompts and reports
    name: String,
    /// Name the sports API uses for this team (may differ from display name)
    api_name: String,
    /// TheSportsDB permanent numeric team id
    sports_db_id: String,
    /// Sport discipline, e.g. "football" or "basketball"
    sport: String,
    /// Competition name, e.g. "Premier League"
    league: String,
}

impl TeamEntry {
    /// Create a new team entry.
    pub fn new(
        key: impl Into<TeamId>,
        name: impl Into<String>,
        api_name: impl Into<String>,
        sports_db_id: impl Into<String>,
        sport: impl Into<String>,
        league: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            api_name: api_name.into(),
            sports_db_id: sports_db_id.into(),
            sport: sport.into(),
            league: league.into(),
        }
    }
}

/// Ordered collection of configured teams.
///
/// # Examples
///
/// ```
/// use backpage_core::{TeamId, TeamRegistry};
///
/// let registry = TeamRegistry::default_teams();
/// assert!(registry.get(&TeamId::from("lakers")).is_some());
/// assert!(registry.get(&TeamId::from("poolparty")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamRegistry {
    teams: Vec<TeamEntry>,
}

impl TeamRegistry {
    /// Build a registry from a list of entries.
    pub fn new(teams: Vec<TeamEntry>) -> Self {
        Self { teams }
    }

    /// The stock registry: Manchester United and the LA Lakers.
    pub fn default_teams() -> Self {
        Self::new(vec![
            TeamEntry::new(
                "manutd",
                "Manchester United",
                "Manchester United",
                "133612",
                "football",
                "Premier League",
            ),
            TeamEntry::new(
                "lakers",
                "Los Angeles Lakers",
                "Los Angeles Lakers",
                "134867",
                "basketball",
                "NBA",
            ),
        ])
    }

    /// Look up an entry by selector key.
    pub fn get(&self, key: &TeamId) -> Option<&TeamEntry> {
        self.teams.iter().find(|entry| entry.key() == key)
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TeamEntry> {
        self.teams.iter()
    }

    /// All selector keys in registration order.
    pub fn keys(&self) -> Vec<TeamId> {
        self.teams.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of configured teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
