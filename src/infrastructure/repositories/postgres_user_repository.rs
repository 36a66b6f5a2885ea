use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::{AppError, Result};
use crate::domain::repositories::UserRepository;
use crate::domain::user::User;

const USER_COLUMNS: &str = "id, email, password_hash, created_at, updated_at";

/// PostgreSQL implementation of [`UserRepository`].
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, email: &str, password_hash: &str) -> Result<User> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password_hash)
             VALUES ($1, $2)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                AppError::UserAlreadyExists
            }
            _ => AppError::storage("users.create", e),
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::storage("users.get_by_id", e))?
            .ok_or(AppError::UserNotFound)
    }

    async fn get_by_email(&self, email: &str) -> Result<User> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::storage("users.get_by_email", e))?
        .ok_or(AppError::UserNotFound)
    }
}
