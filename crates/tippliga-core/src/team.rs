use serde::{Deserialize, Serialize};

/// Unique identifier for a team.
pub type TeamId = u64;

/// A club taking part in the league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Full name, e.g. "FC Bayern München".
    pub name: String,
    /// Short form, e.g. "FC Bayern".
    pub shortname: String,
    /// Three-letter code, e.g. "FCB".
    pub abbreviation: String,
}
