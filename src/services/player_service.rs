use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::player::Player;
use crate::domain::repositories::{PlayerRepository, TeamCache};

/// Player detail updates.
pub struct PlayerService {
    players: Arc<dyn PlayerRepository>,
    cache: Arc<dyn TeamCache>,
}

impl PlayerService {
    pub fn new(players: Arc<dyn PlayerRepository>, cache: Arc<dyn TeamCache>) -> Self {
        Self { players, cache }
    }

    /// Partial update of a player's editable details; only supplied fields
    /// are written. Invalidates the acting user's cached team snapshot, since
    /// the roster it holds embeds the player.
    pub async fn update_player(
        &self,
        user_id: Uuid,
        player_id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        country: Option<&str>,
    ) -> Result<Player> {
        tracing::info!(%user_id, %player_id, "updating player");

        let player = self.players.get_by_id(player_id).await.map_err(|err| {
            tracing::error!(%player_id, error = %err, "failed to get player");
            err
        })?;

        let updated = self
            .players
            .update(player.id, first_name, last_name, country)
            .await
            .map_err(|err| {
                tracing::error!(%player_id, error = %err, "failed to update player");
                err
            })?;

        if let Err(err) = self.cache.invalidate(user_id).await {
            tracing::warn!(%user_id, error = %err, "failed to invalidate team cache");
        }

        Ok(updated)
    }
}
