use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::{AppError, Result};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

const TEAM_COLUMNS: &str = "id, user_id, name, country, budget, total_value, created_at, updated_at";

/// PostgreSQL implementation of [`TeamRepository`].
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, user_id: Uuid, name: &str, country: &str, budget: i64) -> Result<Team> {
        sqlx::query_as::<_, Team>(&format!(
            "INSERT INTO teams (user_id, name, country, budget)
             VALUES ($1, $2, $3, $4)
             RETURNING {TEAM_COLUMNS}"
        ))
        .bind(user_id)
        .bind(name)
        .bind(country)
        .bind(budget)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::storage("teams.create", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Team> {
        sqlx::query_as::<_, Team>(&format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::storage("teams.get_by_id", e))?
            .ok_or(AppError::TeamNotFound)
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Team> {
        sqlx::query_as::<_, Team>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::storage("teams.get_by_user_id", e))?
        .ok_or(AppError::TeamNotFound)
    }

    async fn update(&self, id: Uuid, name: Option<&str>, country: Option<&str>) -> Result<Team> {
        sqlx::query_as::<_, Team>(&format!(
            "UPDATE teams
             SET name = COALESCE($2, name),
                 country = COALESCE($3, country),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {TEAM_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(country)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::storage("teams.update", e))?
        .ok_or(AppError::TeamNotFound)
    }

    async fn update_budget(&self, id: Uuid, budget: i64) -> Result<()> {
        let result = sqlx::query("UPDATE teams SET budget = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(budget)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::storage("teams.update_budget", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::TeamNotFound);
        }

        Ok(())
    }

    async fn update_total_value(&self, id: Uuid, total_value: i64) -> Result<()> {
        let result =
            sqlx::query("UPDATE teams SET total_value = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(total_value)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::storage("teams.update_total_value", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::TeamNotFound);
        }

        Ok(())
    }
}
