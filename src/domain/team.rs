use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::player::Player;

/// A user's football team.
///
/// Budgets and valuations are integer currency units. `total_value` is a
/// derived aggregate over the roster and is reconciled lazily on read, so a
/// stored value may briefly lag the roster it summarizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub country: String,
    pub budget: i64,
    pub total_value: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Denormalized team snapshot served by `GetMyTeam` and stored in the cache.
///
/// Players are ordered by position, then last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamWithPlayers {
    pub team: Team,
    pub players: Vec<Player>,
}
