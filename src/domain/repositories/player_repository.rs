use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::player::{Player, Position};

/// Persistence port for players.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn create(
        &self,
        team_id: Uuid,
        first_name: &str,
        last_name: &str,
        country: &str,
        age: i32,
        position: Position,
        market_value: i64,
    ) -> Result<Player>;

    /// Find a player by its ID.
    async fn get_by_id(&self, id: Uuid) -> Result<Player>;

    /// Full roster of a team, ordered by position then last name.
    async fn get_by_team_id(&self, team_id: Uuid) -> Result<Vec<Player>>;

    /// Partial update: only supplied fields are written.
    async fn update(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        country: Option<&str>,
    ) -> Result<Player>;

    /// Overwrite a player's market value.
    async fn update_market_value(&self, id: Uuid, market_value: i64) -> Result<()>;

    /// Reassign a player to a new owning team.
    async fn transfer_to_team(&self, player_id: Uuid, new_team_id: Uuid) -> Result<()>;
}
