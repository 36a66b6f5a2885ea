use std::sync::Arc;

use crate::services::{AuthService, PlayerService, TeamService, TransferService};

/// Shared handler state: the wired service layer.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub teams: Arc<TeamService>,
    pub players: Arc<PlayerService>,
    pub transfers: Arc<TransferService>,
}
