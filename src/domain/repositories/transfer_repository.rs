use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::transfer::Transfer;

/// Persistence port for transfer listings.
#[async_trait]
pub trait TransferRepository: Send + Sync {
    /// Create an active listing for a player at the given asking price.
    async fn create(
        &self,
        player_id: Uuid,
        seller_team_id: Uuid,
        asking_price: i64,
    ) -> Result<Transfer>;

    /// Find a transfer by its ID.
    async fn get_by_id(&self, id: Uuid) -> Result<Transfer>;

    /// All active transfers, most recently created first.
    async fn get_active(&self) -> Result<Vec<Transfer>>;

    /// The active transfer for a player, if one exists.
    async fn get_active_by_player_id(&self, player_id: Uuid) -> Result<Option<Transfer>>;

    /// Mark a transfer completed and record the buyer.
    ///
    /// The update is conditional on the row still being `active`; when zero
    /// rows are affected (another buyer won the race, or the listing was
    /// cancelled) this returns `TransferNotActive`.
    async fn complete(&self, id: Uuid, buyer_team_id: Uuid) -> Result<()>;

    /// Mark a transfer cancelled. Same conditional rule as [`Self::complete`].
    async fn cancel(&self, id: Uuid) -> Result<()>;
}
