// Repository implementations (data access layer)
// Adapters that implement the domain repository ports

pub mod postgres_player_repository;
pub mod postgres_team_repository;
pub mod postgres_transfer_repository;
pub mod postgres_user_repository;

pub use postgres_player_repository::PostgresPlayerRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_transfer_repository::PostgresTransferRepository;
pub use postgres_user_repository::PostgresUserRepository;
