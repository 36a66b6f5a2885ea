use thiserror::Error;

/// Application error taxonomy shared by services and repositories.
///
/// Business and state errors are returned verbatim so the API layer can
/// translate them into user-facing responses; storage and cache failures are
/// wrapped with the operation that produced them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("user already exists")]
    UserAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    #[error("team not found")]
    TeamNotFound,

    #[error("player not found")]
    PlayerNotFound,

    #[error("transfer not found")]
    TransferNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("too many login attempts")]
    TooManyAttempts,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("player already listed for transfer")]
    PlayerAlreadyListed,

    #[error("cannot buy your own player")]
    CannotBuyOwnPlayer,

    #[error("transfer is not active")]
    TransferNotActive,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("{op}: database error: {source}")]
    Storage {
        op: &'static str,
        source: sqlx::Error,
    },

    #[error("{op}: cache error: {source}")]
    Cache {
        op: &'static str,
        source: redis::RedisError,
    },

    #[error("{op}: snapshot encoding error: {source}")]
    SnapshotEncoding {
        op: &'static str,
        source: serde_json::Error,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn storage(op: &'static str, source: sqlx::Error) -> Self {
        Self::Storage { op, source }
    }

    pub fn cache(op: &'static str, source: redis::RedisError) -> Self {
        Self::Cache { op, source }
    }

    pub fn snapshot_encoding(op: &'static str, source: serde_json::Error) -> Self {
        Self::SnapshotEncoding { op, source }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
