use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::{AppError, Result};
use crate::domain::player::{Player, Position};
use crate::domain::repositories::PlayerRepository;

const PLAYER_COLUMNS: &str =
    "id, team_id, first_name, last_name, country, age, position, market_value, created_at, updated_at";

/// PostgreSQL implementation of [`PlayerRepository`].
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn create(
        &self,
        team_id: Uuid,
        first_name: &str,
        last_name: &str,
        country: &str,
        age: i32,
        position: Position,
        market_value: i64,
    ) -> Result<Player> {
        sqlx::query_as::<_, Player>(&format!(
            "INSERT INTO players (team_id, first_name, last_name, country, age, position, market_value)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {PLAYER_COLUMNS}"
        ))
        .bind(team_id)
        .bind(first_name)
        .bind(last_name)
        .bind(country)
        .bind(age)
        .bind(position)
        .bind(market_value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::storage("players.create", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Player> {
        sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::storage("players.get_by_id", e))?
        .ok_or(AppError::PlayerNotFound)
    }

    async fn get_by_team_id(&self, team_id: Uuid) -> Result<Vec<Player>> {
        sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players
             WHERE team_id = $1
             ORDER BY position, last_name"
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::storage("players.get_by_team_id", e))
    }

    async fn update(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        country: Option<&str>,
    ) -> Result<Player> {
        sqlx::query_as::<_, Player>(&format!(
            "UPDATE players
             SET first_name = COALESCE($2, first_name),
                 last_name = COALESCE($3, last_name),
                 country = COALESCE($4, country),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {PLAYER_COLUMNS}"
        ))
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(country)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::storage("players.update", e))?
        .ok_or(AppError::PlayerNotFound)
    }

    async fn update_market_value(&self, id: Uuid, market_value: i64) -> Result<()> {
        let result =
            sqlx::query("UPDATE players SET market_value = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(market_value)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::storage("players.update_market_value", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::PlayerNotFound);
        }

        Ok(())
    }

    async fn transfer_to_team(&self, player_id: Uuid, new_team_id: Uuid) -> Result<()> {
        let result =
            sqlx::query("UPDATE players SET team_id = $2, updated_at = NOW() WHERE id = $1")
                .bind(player_id)
                .bind(new_team_id)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::storage("players.transfer_to_team", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::PlayerNotFound);
        }

        Ok(())
    }
}
