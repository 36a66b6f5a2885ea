use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::team::Team;

/// Persistence port for teams.
///
/// Keyed lookups return `TeamNotFound` on a miss; any other database failure
/// surfaces as `Storage` with operation context.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Create a team for a user with the given starting budget.
    async fn create(&self, user_id: Uuid, name: &str, country: &str, budget: i64) -> Result<Team>;

    /// Find a team by its ID.
    async fn get_by_id(&self, id: Uuid) -> Result<Team>;

    /// Find the team owned by a user.
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Team>;

    /// Partial update: only supplied fields are written.
    async fn update(&self, id: Uuid, name: Option<&str>, country: Option<&str>) -> Result<Team>;

    /// Overwrite a team's budget.
    async fn update_budget(&self, id: Uuid, budget: i64) -> Result<()>;

    /// Overwrite a team's derived total value.
    async fn update_total_value(&self, id: Uuid, total_value: i64) -> Result<()>;
}
