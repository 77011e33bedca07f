use serde::{Deserialize, Serialize};

use crate::team::TeamId;

/// Unique identifier for a squad player.
pub type PlayerId = u64;

/// A squad member of a league team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub name: String,
}
