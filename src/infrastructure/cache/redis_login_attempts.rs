use std::time::Duration;

use async_trait::async_trait;
use redis::Client;

use crate::domain::errors::{AppError, Result};
use crate::domain::repositories::LoginAttemptStore;

/// Redis-backed failed-login counter.
///
/// Each increment refreshes the key's TTL, so the counter clears itself once
/// the window passes without further failures.
pub struct RedisLoginAttempts {
    client: Client,
    ttl: Duration,
}

impl RedisLoginAttempts {
    pub fn new(client: Client, ttl: Duration) -> Self {
        Self { client, ttl }
    }

    fn key(email: &str) -> String {
        format!("login_attempts:{email}")
    }
}

#[async_trait]
impl LoginAttemptStore for RedisLoginAttempts {
    async fn increment(&self, email: &str) -> Result<u32> {
        let mut conn = self
            .client
            .get_async_connection()
            .await
            .map_err(|e| AppError::cache("login_attempts.increment", e))?;

        let key = Self::key(email);

        let (count,): (u32,) = redis::pipe()
            .atomic()
            .cmd("INCR")
            .arg(&key)
            .cmd("EXPIRE")
            .arg(&key)
            .arg(self.ttl.as_secs().max(1))
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::cache("login_attempts.increment", e))?;

        Ok(count)
    }

    async fn get(&self, email: &str) -> Result<u32> {
        let mut conn = self
            .client
            .get_async_connection()
            .await
            .map_err(|e| AppError::cache("login_attempts.get", e))?;

        let count: Option<u32> = redis::cmd("GET")
            .arg(Self::key(email))
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::cache("login_attempts.get", e))?;

        Ok(count.unwrap_or(0))
    }

    async fn reset(&self, email: &str) -> Result<()> {
        let mut conn = self
            .client
            .get_async_connection()
            .await
            .map_err(|e| AppError::cache("login_attempts.reset", e))?;

        redis::cmd("DEL")
            .arg(Self::key(email))
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| AppError::cache("login_attempts.reset", e))?;

        Ok(())
    }
}
