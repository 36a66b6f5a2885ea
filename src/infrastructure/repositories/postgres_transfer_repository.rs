use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::{AppError, Result};
use crate::domain::repositories::TransferRepository;
use crate::domain::transfer::Transfer;

const TRANSFER_COLUMNS: &str =
    "id, player_id, seller_team_id, buyer_team_id, asking_price, status, created_at, completed_at";

/// PostgreSQL implementation of [`TransferRepository`].
///
/// Terminal transitions (`complete`, `cancel`) are conditional updates on
/// `status = 'active'`; a zero-rows-affected outcome maps to
/// `TransferNotActive`, which is what resolves the concurrent-buyer race.
pub struct PostgresTransferRepository {
    pool: PgPool,
}

impl PostgresTransferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransferRepository for PostgresTransferRepository {
    async fn create(
        &self,
        player_id: Uuid,
        seller_team_id: Uuid,
        asking_price: i64,
    ) -> Result<Transfer> {
        sqlx::query_as::<_, Transfer>(&format!(
            "INSERT INTO transfers (player_id, seller_team_id, asking_price, status)
             VALUES ($1, $2, $3, 'active')
             RETURNING {TRANSFER_COLUMNS}"
        ))
        .bind(player_id)
        .bind(seller_team_id)
        .bind(asking_price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::storage("transfers.create", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Transfer> {
        sqlx::query_as::<_, Transfer>(&format!(
            "SELECT {TRANSFER_COLUMNS} FROM transfers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::storage("transfers.get_by_id", e))?
        .ok_or(AppError::TransferNotFound)
    }

    async fn get_active(&self) -> Result<Vec<Transfer>> {
        sqlx::query_as::<_, Transfer>(&format!(
            "SELECT {TRANSFER_COLUMNS} FROM transfers
             WHERE status = 'active'
             ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::storage("transfers.get_active", e))
    }

    async fn get_active_by_player_id(&self, player_id: Uuid) -> Result<Option<Transfer>> {
        sqlx::query_as::<_, Transfer>(&format!(
            "SELECT {TRANSFER_COLUMNS} FROM transfers
             WHERE player_id = $1 AND status = 'active'"
        ))
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::storage("transfers.get_active_by_player_id", e))
    }

    async fn complete(&self, id: Uuid, buyer_team_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE transfers
             SET buyer_team_id = $2, status = 'completed', completed_at = NOW()
             WHERE id = $1 AND status = 'active'",
        )
        .bind(id)
        .bind(buyer_team_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage("transfers.complete", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::TransferNotActive);
        }

        Ok(())
    }

    async fn cancel(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE transfers SET status = 'cancelled' WHERE id = $1 AND status = 'active'",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage("transfers.cancel", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::TransferNotActive);
        }

        Ok(())
    }
}
