use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::team::TeamWithPlayers;

/// Read-through cache for team snapshots, keyed by the owning user.
///
/// Strictly a performance layer: every caller must produce the same answer
/// with the cache entirely unavailable. `get` distinguishes an absent entry
/// (`Ok(None)`) from a cache failure (`Err`).
#[async_trait]
pub trait TeamCache: Send + Sync {
    async fn get(&self, user_id: Uuid) -> Result<Option<TeamWithPlayers>>;

    async fn set(&self, user_id: Uuid, snapshot: &TeamWithPlayers, ttl: Duration) -> Result<()>;

    async fn invalidate(&self, user_id: Uuid) -> Result<()>;
}
