use serde::{Deserialize, Serialize};

/// Unique identifier for a registered user.
pub type UserId = u64;

/// A participant in the prediction league.
///
/// Accounts, sessions, and API keys live in the host application; the
/// core only needs an identity to attach bets and points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}
