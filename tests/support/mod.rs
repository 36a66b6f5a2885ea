//! In-memory implementations of the domain ports, used to exercise the
//! service workflows without Postgres or Redis. Failure injection flags make
//! the degraded paths testable.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use soccer_manager_api::domain::errors::{AppError, Result};
use soccer_manager_api::domain::player::{Player, Position};
use soccer_manager_api::domain::repositories::{
    LoginAttemptStore, PlayerRepository, TeamCache, TeamRepository, TransferRepository,
    UserRepository,
};
use soccer_manager_api::domain::team::{Team, TeamWithPlayers};
use soccer_manager_api::domain::transfer::{Transfer, TransferStatus};
use soccer_manager_api::domain::user::User;

fn injected(op: &str) -> AppError {
    AppError::Internal(format!("injected failure: {op}"))
}

// ===== fixtures =====

pub fn make_team(user_id: Uuid, name: &str, budget: i64, total_value: i64) -> Team {
    Team {
        id: Uuid::new_v4(),
        user_id,
        name: name.to_string(),
        country: "England".to_string(),
        budget,
        total_value,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn make_player(team_id: Uuid, last_name: &str, position: Position, market_value: i64) -> Player {
    Player {
        id: Uuid::new_v4(),
        team_id,
        first_name: "Test".to_string(),
        last_name: last_name.to_string(),
        country: "England".to_string(),
        age: 24,
        position,
        market_value,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn make_active_transfer(player_id: Uuid, seller_team_id: Uuid, asking_price: i64) -> Transfer {
    Transfer {
        id: Uuid::new_v4(),
        player_id,
        seller_team_id,
        buyer_team_id: None,
        asking_price,
        status: TransferStatus::Active,
        created_at: Utc::now(),
        completed_at: None,
    }
}

// ===== teams =====

#[derive(Default)]
pub struct InMemoryTeams {
    teams: Mutex<HashMap<Uuid, Team>>,
    pub fail_update_total_value: AtomicBool,
}

impl InMemoryTeams {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert(&self, team: Team) {
        self.teams.lock().unwrap().insert(team.id, team);
    }

    pub fn snapshot(&self, id: Uuid) -> Team {
        self.teams.lock().unwrap().get(&id).cloned().expect("team seeded")
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeams {
    async fn create(&self, user_id: Uuid, name: &str, country: &str, budget: i64) -> Result<Team> {
        let team = Team {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            country: country.to_string(),
            budget,
            total_value: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.insert(team.clone());
        Ok(team)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Team> {
        self.teams
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(AppError::TeamNotFound)
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Team> {
        self.teams
            .lock()
            .unwrap()
            .values()
            .find(|t| t.user_id == user_id)
            .cloned()
            .ok_or(AppError::TeamNotFound)
    }

    async fn update(&self, id: Uuid, name: Option<&str>, country: Option<&str>) -> Result<Team> {
        let mut teams = self.teams.lock().unwrap();
        let team = teams.get_mut(&id).ok_or(AppError::TeamNotFound)?;
        if let Some(name) = name {
            team.name = name.to_string();
        }
        if let Some(country) = country {
            team.country = country.to_string();
        }
        team.updated_at = Utc::now();
        Ok(team.clone())
    }

    async fn update_budget(&self, id: Uuid, budget: i64) -> Result<()> {
        let mut teams = self.teams.lock().unwrap();
        let team = teams.get_mut(&id).ok_or(AppError::TeamNotFound)?;
        team.budget = budget;
        Ok(())
    }

    async fn update_total_value(&self, id: Uuid, total_value: i64) -> Result<()> {
        if self.fail_update_total_value.load(Ordering::SeqCst) {
            return Err(injected("teams.update_total_value"));
        }
        let mut teams = self.teams.lock().unwrap();
        let team = teams.get_mut(&id).ok_or(AppError::TeamNotFound)?;
        team.total_value = total_value;
        Ok(())
    }
}

// ===== players =====

#[derive(Default)]
pub struct InMemoryPlayers {
    players: Mutex<HashMap<Uuid, Player>>,
    /// Player IDs whose lookups fail, for degraded-listing tests.
    pub missing: Mutex<Vec<Uuid>>,
}

impl InMemoryPlayers {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert(&self, player: Player) {
        self.players.lock().unwrap().insert(player.id, player);
    }

    pub fn snapshot(&self, id: Uuid) -> Player {
        self.players
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .expect("player seeded")
    }

    pub fn mark_missing(&self, id: Uuid) {
        self.missing.lock().unwrap().push(id);
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayers {
    async fn create(
        &self,
        team_id: Uuid,
        first_name: &str,
        last_name: &str,
        country: &str,
        age: i32,
        position: Position,
        market_value: i64,
    ) -> Result<Player> {
        let player = Player {
            id: Uuid::new_v4(),
            team_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            country: country.to_string(),
            age,
            position,
            market_value,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.insert(player.clone());
        Ok(player)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Player> {
        if self.missing.lock().unwrap().contains(&id) {
            return Err(AppError::PlayerNotFound);
        }
        self.players
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(AppError::PlayerNotFound)
    }

    async fn get_by_team_id(&self, team_id: Uuid) -> Result<Vec<Player>> {
        let mut roster: Vec<Player> = self
            .players
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.team_id == team_id)
            .cloned()
            .collect();
        roster.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.last_name.cmp(&b.last_name))
        });
        Ok(roster)
    }

    async fn update(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        country: Option<&str>,
    ) -> Result<Player> {
        let mut players = self.players.lock().unwrap();
        let player = players.get_mut(&id).ok_or(AppError::PlayerNotFound)?;
        if let Some(first_name) = first_name {
            player.first_name = first_name.to_string();
        }
        if let Some(last_name) = last_name {
            player.last_name = last_name.to_string();
        }
        if let Some(country) = country {
            player.country = country.to_string();
        }
        player.updated_at = Utc::now();
        Ok(player.clone())
    }

    async fn update_market_value(&self, id: Uuid, market_value: i64) -> Result<()> {
        let mut players = self.players.lock().unwrap();
        let player = players.get_mut(&id).ok_or(AppError::PlayerNotFound)?;
        player.market_value = market_value;
        Ok(())
    }

    async fn transfer_to_team(&self, player_id: Uuid, new_team_id: Uuid) -> Result<()> {
        let mut players = self.players.lock().unwrap();
        let player = players.get_mut(&player_id).ok_or(AppError::PlayerNotFound)?;
        player.team_id = new_team_id;
        Ok(())
    }
}

// ===== transfers =====

#[derive(Default)]
pub struct InMemoryTransfers {
    transfers: Mutex<HashMap<Uuid, Transfer>>,
}

impl InMemoryTransfers {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert(&self, transfer: Transfer) {
        self.transfers.lock().unwrap().insert(transfer.id, transfer);
    }

    pub fn snapshot(&self, id: Uuid) -> Transfer {
        self.transfers
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .expect("transfer seeded")
    }
}

#[async_trait]
impl TransferRepository for InMemoryTransfers {
    async fn create(
        &self,
        player_id: Uuid,
        seller_team_id: Uuid,
        asking_price: i64,
    ) -> Result<Transfer> {
        let transfer = make_active_transfer(player_id, seller_team_id, asking_price);
        self.insert(transfer.clone());
        Ok(transfer)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Transfer> {
        self.transfers
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(AppError::TransferNotFound)
    }

    async fn get_active(&self) -> Result<Vec<Transfer>> {
        let mut active: Vec<Transfer> = self
            .transfers
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.status == TransferStatus::Active)
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active)
    }

    async fn get_active_by_player_id(&self, player_id: Uuid) -> Result<Option<Transfer>> {
        Ok(self
            .transfers
            .lock()
            .unwrap()
            .values()
            .find(|t| t.player_id == player_id && t.status == TransferStatus::Active)
            .cloned())
    }

    // Mirrors the conditional UPDATE ... WHERE status = 'active': a missing
    // or already-terminal row affects zero rows and maps to TransferNotActive.
    async fn complete(&self, id: Uuid, buyer_team_id: Uuid) -> Result<()> {
        let mut transfers = self.transfers.lock().unwrap();
        match transfers.get_mut(&id) {
            Some(t) if t.status == TransferStatus::Active => {
                t.status = TransferStatus::Completed;
                t.buyer_team_id = Some(buyer_team_id);
                t.completed_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(AppError::TransferNotActive),
        }
    }

    async fn cancel(&self, id: Uuid) -> Result<()> {
        let mut transfers = self.transfers.lock().unwrap();
        match transfers.get_mut(&id) {
            Some(t) if t.status == TransferStatus::Active => {
                t.status = TransferStatus::Cancelled;
                Ok(())
            }
            _ => Err(AppError::TransferNotActive),
        }
    }
}

// ===== users =====

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUsers {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, email: &str, password_hash: &str) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == email) {
            return Err(AppError::UserAlreadyExists);
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User> {
        self.users
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(AppError::UserNotFound)
    }

    async fn get_by_email(&self, email: &str) -> Result<User> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(AppError::UserNotFound)
    }
}

// ===== team cache =====

#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<Uuid, TeamWithPlayers>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl InMemoryCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn contains(&self, user_id: Uuid) -> bool {
        self.entries.lock().unwrap().contains_key(&user_id)
    }

    pub fn put(&self, user_id: Uuid, snapshot: TeamWithPlayers) {
        self.entries.lock().unwrap().insert(user_id, snapshot);
    }
}

#[async_trait]
impl TeamCache for InMemoryCache {
    async fn get(&self, user_id: Uuid) -> Result<Option<TeamWithPlayers>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(injected("team_cache.get"));
        }
        Ok(self.entries.lock().unwrap().get(&user_id).cloned())
    }

    async fn set(&self, user_id: Uuid, snapshot: &TeamWithPlayers, _ttl: Duration) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(injected("team_cache.set"));
        }
        self.entries.lock().unwrap().insert(user_id, snapshot.clone());
        Ok(())
    }

    async fn invalidate(&self, user_id: Uuid) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(injected("team_cache.invalidate"));
        }
        self.entries.lock().unwrap().remove(&user_id);
        Ok(())
    }
}

// ===== login attempts =====

#[derive(Default)]
pub struct InMemoryLoginAttempts {
    counts: Mutex<HashMap<String, u32>>,
}

impl InMemoryLoginAttempts {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl LoginAttemptStore for InMemoryLoginAttempts {
    async fn increment(&self, email: &str) -> Result<u32> {
        let mut counts = self.counts.lock().unwrap();
        let count = counts.entry(email.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn get(&self, email: &str) -> Result<u32> {
        Ok(*self.counts.lock().unwrap().get(email).unwrap_or(&0))
    }

    async fn reset(&self, email: &str) -> Result<()> {
        self.counts.lock().unwrap().remove(email);
        Ok(())
    }
}
