use std::time::Duration;

use async_trait::async_trait;
use redis::Client;
use uuid::Uuid;

use crate::domain::errors::{AppError, Result};
use crate::domain::repositories::TeamCache;
use crate::domain::team::TeamWithPlayers;

/// Redis-backed team snapshot cache.
///
/// Snapshots are stored as JSON under `team_cache:<user_id>` with a TTL set
/// on write. Callers treat every error from here as a miss or no-op.
pub struct RedisTeamCache {
    client: Client,
}

impl RedisTeamCache {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn key(user_id: Uuid) -> String {
        format!("team_cache:{user_id}")
    }
}

#[async_trait]
impl TeamCache for RedisTeamCache {
    async fn get(&self, user_id: Uuid) -> Result<Option<TeamWithPlayers>> {
        let mut conn = self
            .client
            .get_async_connection()
            .await
            .map_err(|e| AppError::cache("team_cache.get", e))?;

        let data: Option<String> = redis::cmd("GET")
            .arg(Self::key(user_id))
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::cache("team_cache.get", e))?;

        let Some(data) = data else {
            tracing::debug!(%user_id, "team not found in cache");
            return Ok(None);
        };

        let snapshot = serde_json::from_str(&data)
            .map_err(|e| AppError::snapshot_encoding("team_cache.get", e))?;

        tracing::debug!(%user_id, "team retrieved from cache");

        Ok(Some(snapshot))
    }

    async fn set(&self, user_id: Uuid, snapshot: &TeamWithPlayers, ttl: Duration) -> Result<()> {
        let data = serde_json::to_string(snapshot)
            .map_err(|e| AppError::snapshot_encoding("team_cache.set", e))?;

        let mut conn = self
            .client
            .get_async_connection()
            .await
            .map_err(|e| AppError::cache("team_cache.set", e))?;

        redis::cmd("SET")
            .arg(Self::key(user_id))
            .arg(data)
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| AppError::cache("team_cache.set", e))?;

        tracing::debug!(%user_id, "team cached");

        Ok(())
    }

    async fn invalidate(&self, user_id: Uuid) -> Result<()> {
        let mut conn = self
            .client
            .get_async_connection()
            .await
            .map_err(|e| AppError::cache("team_cache.invalidate", e))?;

        redis::cmd("DEL")
            .arg(Self::key(user_id))
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| AppError::cache("team_cache.invalidate", e))?;

        tracing::debug!(%user_id, "team cache invalidated");

        Ok(())
    }
}
