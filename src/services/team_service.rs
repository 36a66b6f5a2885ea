use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::repositories::{PlayerRepository, TeamCache, TeamRepository};
use crate::domain::team::{Team, TeamWithPlayers};

/// Team reads and updates, fronted by the read-through snapshot cache.
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
    cache: Arc<dyn TeamCache>,
    cache_ttl: Duration,
}

impl TeamService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        players: Arc<dyn PlayerRepository>,
        cache: Arc<dyn TeamCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            teams,
            players,
            cache,
            cache_ttl,
        }
    }

    /// Returns the acting user's team with its ordered roster.
    ///
    /// Served from cache when warm; otherwise loads from the store,
    /// reconciles the stored total value against the roster sum, and
    /// repopulates the cache. Cache failures never fail the read, and the
    /// returned snapshot always carries the recomputed total value even when
    /// persisting the correction failed.
    pub async fn get_my_team(&self, user_id: Uuid) -> Result<TeamWithPlayers> {
        tracing::info!(%user_id, "getting team");

        match self.cache.get(user_id).await {
            Ok(Some(snapshot)) => {
                tracing::debug!(%user_id, "team retrieved from cache");
                return Ok(snapshot);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "failed to read cached team");
            }
        }

        let mut team = self.teams.get_by_user_id(user_id).await.map_err(|err| {
            tracing::error!(%user_id, error = %err, "failed to get team");
            err
        })?;

        let players = self.players.get_by_team_id(team.id).await.map_err(|err| {
            tracing::error!(team_id = %team.id, error = %err, "failed to get players");
            err
        })?;

        let total_value: i64 = players.iter().map(|p| p.market_value).sum();

        if team.total_value != total_value {
            if let Err(err) = self.teams.update_total_value(team.id, total_value).await {
                tracing::warn!(team_id = %team.id, error = %err, "failed to update team total value");
            }
            // The caller sees the recomputed aggregate either way.
            team.total_value = total_value;
        }

        let snapshot = TeamWithPlayers { team, players };

        if let Err(err) = self.cache.set(user_id, &snapshot, self.cache_ttl).await {
            tracing::warn!(%user_id, error = %err, "failed to cache team");
        }

        Ok(snapshot)
    }

    /// Partial update of the acting user's team; only supplied fields are
    /// written. Invalidates the cached snapshot so the next read reflects the
    /// change.
    pub async fn update_team(
        &self,
        user_id: Uuid,
        name: Option<&str>,
        country: Option<&str>,
    ) -> Result<Team> {
        tracing::info!(%user_id, "updating team");

        let existing = self.teams.get_by_user_id(user_id).await.map_err(|err| {
            tracing::error!(%user_id, error = %err, "failed to get team");
            err
        })?;

        let team = self
            .teams
            .update(existing.id, name, country)
            .await
            .map_err(|err| {
                tracing::error!(team_id = %existing.id, error = %err, "failed to update team");
                err
            })?;

        if let Err(err) = self.cache.invalidate(user_id).await {
            tracing::warn!(%user_id, error = %err, "failed to invalidate team cache");
        }

        Ok(team)
    }
}
