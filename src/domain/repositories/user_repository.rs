use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::user::User;

/// Persistence port for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user with an already-hashed password.
    async fn create(&self, email: &str, password_hash: &str) -> Result<User>;

    /// Find a user by ID.
    async fn get_by_id(&self, id: Uuid) -> Result<User>;

    /// Find a user by email address.
    async fn get_by_email(&self, email: &str) -> Result<User>;
}
