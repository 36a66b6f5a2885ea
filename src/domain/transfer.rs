use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::player::Player;
use super::team::Team;

/// Lifecycle status of a transfer listing.
///
/// # Status Transitions
/// ```text
/// Active -> Completed
///      `--> Cancelled
/// ```
/// Completed and Cancelled are terminal and never transition further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transfer_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    /// Listing is open for purchase
    Active,
    /// A buyer completed the purchase
    Completed,
    /// The listing was withdrawn
    Cancelled,
}

impl TransferStatus {
    /// Checks whether a transition from this status to `next` is legal.
    pub fn can_transition_to(&self, next: TransferStatus) -> bool {
        use TransferStatus::*;
        matches!((self, next), (Active, Completed) | (Active, Cancelled))
    }
}

impl std::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferStatus::Active => write!(f, "active"),
            TransferStatus::Completed => write!(f, "completed"),
            TransferStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A player listed on the transfer market.
///
/// At most one active transfer exists per player. `buyer_team_id` and
/// `completed_at` are set only when the transfer completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Transfer {
    pub id: Uuid,
    pub player_id: Uuid,
    pub seller_team_id: Uuid,
    pub buyer_team_id: Option<Uuid>,
    pub asking_price: i64,
    pub status: TransferStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// One row of the transfer market listing: the transfer with its player and
/// seller team resolved.
#[derive(Debug, Clone, Serialize)]
pub struct TransferListItem {
    pub transfer: Transfer,
    pub player: Player,
    pub seller_team: Team,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_can_complete() {
        assert!(TransferStatus::Active.can_transition_to(TransferStatus::Completed));
    }

    #[test]
    fn active_can_cancel() {
        assert!(TransferStatus::Active.can_transition_to(TransferStatus::Cancelled));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(!TransferStatus::Completed.can_transition_to(TransferStatus::Active));
        assert!(!TransferStatus::Completed.can_transition_to(TransferStatus::Cancelled));
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(!TransferStatus::Cancelled.can_transition_to(TransferStatus::Active));
        assert!(!TransferStatus::Cancelled.can_transition_to(TransferStatus::Completed));
    }

    #[test]
    fn status_display() {
        assert_eq!(TransferStatus::Active.to_string(), "active");
        assert_eq!(TransferStatus::Completed.to_string(), "completed");
        assert_eq!(TransferStatus::Cancelled.to_string(), "cancelled");
    }
}
