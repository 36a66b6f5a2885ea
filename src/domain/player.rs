use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Field position of a player.
///
/// The variant order matches the `player_position` enum declaration in
/// Postgres, so `ORDER BY position` and the derived `Ord` agree on roster
/// ordering (goalkeepers first, attackers last).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "player_position", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Goalkeeper => write!(f, "goalkeeper"),
            Position::Defender => write!(f, "defender"),
            Position::Midfielder => write!(f, "midfielder"),
            Position::Attacker => write!(f, "attacker"),
        }
    }
}

/// A squad member. Belongs to exactly one team at any instant; team
/// reassignment is the only mutation of `team_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: Uuid,
    pub team_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub age: i32,
    pub position: Position,
    pub market_value: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
