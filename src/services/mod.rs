// Service layer: the team economy workflows
// Services talk to storage and cache exclusively through the domain ports

pub mod appreciation;
pub mod auth_service;
pub mod player_service;
pub mod team_service;
pub mod transfer_service;

pub use appreciation::{AppreciationRng, SeededAppreciation};
pub use auth_service::AuthService;
pub use player_service::PlayerService;
pub use team_service::TeamService;
pub use transfer_service::TransferService;
