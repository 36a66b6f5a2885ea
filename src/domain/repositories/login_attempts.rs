use async_trait::async_trait;

use crate::domain::errors::Result;

/// TTL-expiring counter of failed login attempts per email.
///
/// Used by the authentication flow to cap repeated failed logins; the counter
/// expires on its own after the configured window.
#[async_trait]
pub trait LoginAttemptStore: Send + Sync {
    /// Bump the counter and return the new count.
    async fn increment(&self, email: &str) -> Result<u32>;

    /// Current count, zero when the key is absent or expired.
    async fn get(&self, email: &str) -> Result<u32>;

    /// Clear the counter.
    async fn reset(&self, email: &str) -> Result<()>;
}
