use std::sync::Arc;

use rand::Rng;
use uuid::Uuid;

use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, verify_password};
use crate::config::Config;
use crate::domain::errors::{AppError, Result};
use crate::domain::player::Position;
use crate::domain::repositories::{
    LoginAttemptStore, PlayerRepository, TeamRepository, UserRepository,
};

const INITIAL_BUDGET: i64 = 5_000_000;
const INITIAL_PLAYER_VALUE: i64 = 1_000_000;

const FIRST_NAMES: &[&str] = &[
    "Oliver", "Jack", "Harry", "George", "Noah", "Charlie", "Leo", "Oscar", "Jacob", "Liam",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez",
    "Hernandez",
];
const COUNTRIES: &[&str] = &[
    "England",
    "Spain",
    "Germany",
    "France",
    "Italy",
    "Brazil",
    "Argentina",
    "Portugal",
    "Netherlands",
    "Belgium",
];

/// Registration and login. Registration seeds the user's team and its fixed
/// initial squad; login is capped by the attempt limiter.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
    login_attempts: Arc<dyn LoginAttemptStore>,
    config: Arc<Config>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        teams: Arc<dyn TeamRepository>,
        players: Arc<dyn PlayerRepository>,
        login_attempts: Arc<dyn LoginAttemptStore>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            users,
            teams,
            players,
            login_attempts,
            config,
        }
    }

    /// Creates the user, their team with the starting budget, and the initial
    /// 20-player squad (3 goalkeepers, 6 defenders, 6 midfielders, 5
    /// attackers, each at the nominal market value). Returns a bearer token.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        team_name: &str,
        country: &str,
    ) -> Result<String> {
        tracing::info!(email, "registering new user");

        if self.users.get_by_email(email).await.is_ok() {
            return Err(AppError::UserAlreadyExists);
        }

        let password_hash = hash_password(password)?;

        let user = self.users.create(email, &password_hash).await.map_err(|err| {
            tracing::error!(email, error = %err, "failed to create user");
            err
        })?;

        let team = self
            .teams
            .create(user.id, team_name, country, INITIAL_BUDGET)
            .await
            .map_err(|err| {
                tracing::error!(user_id = %user.id, error = %err, "failed to create team");
                err
            })?;

        let squad_size = self.create_initial_squad(team.id).await.map_err(|err| {
            tracing::error!(team_id = %team.id, error = %err, "failed to create initial squad");
            err
        })?;

        let total_value = squad_size as i64 * INITIAL_PLAYER_VALUE;

        self.teams
            .update_total_value(team.id, total_value)
            .await
            .map_err(|err| {
                tracing::error!(team_id = %team.id, error = %err, "failed to update team total value");
                err
            })?;

        let token = create_token(user.id, &self.config.jwt_secret)?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(token)
    }

    /// Verifies credentials and returns a bearer token. Failed attempts per
    /// email are counted with a TTL; at the configured cap the login is
    /// rejected outright until the counter expires.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        tracing::info!(email, "user login attempt");

        let attempts = self.login_attempts.get(email).await.map_err(|err| {
            tracing::error!(email, error = %err, "failed to get login attempts");
            err
        })?;

        if attempts >= self.config.max_login_attempts {
            tracing::warn!(email, attempts, "too many login attempts");
            return Err(AppError::TooManyAttempts);
        }

        let user = match self.users.get_by_email(email).await {
            Ok(user) => user,
            Err(_) => {
                tracing::warn!(email, "user not found");
                self.count_failed_attempt(email).await;
                return Err(AppError::InvalidCredentials);
            }
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::warn!(email, "invalid password");
            self.count_failed_attempt(email).await;
            return Err(AppError::InvalidCredentials);
        }

        if let Err(err) = self.login_attempts.reset(email).await {
            tracing::error!(email, error = %err, "failed to reset login attempts");
        }

        let token = create_token(user.id, &self.config.jwt_secret)?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(token)
    }

    async fn count_failed_attempt(&self, email: &str) {
        if let Err(err) = self.login_attempts.increment(email).await {
            tracing::error!(email, error = %err, "failed to increment login attempts");
        }
    }

    async fn create_initial_squad(&self, team_id: Uuid) -> Result<usize> {
        let squad = generate_squad();

        for (first_name, last_name, country, age, position) in &squad {
            self.players
                .create(
                    team_id,
                    first_name,
                    last_name,
                    country,
                    *age,
                    *position,
                    INITIAL_PLAYER_VALUE,
                )
                .await?;
        }

        Ok(squad.len())
    }
}

/// Fixed squad shape: 3 goalkeepers, 6 defenders, 6 midfielders, 5 attackers.
fn generate_squad() -> Vec<(&'static str, &'static str, &'static str, i32, Position)> {
    let shape = [
        (Position::Goalkeeper, 3),
        (Position::Defender, 6),
        (Position::Midfielder, 6),
        (Position::Attacker, 5),
    ];

    let mut rng = rand::thread_rng();
    let mut squad = Vec::with_capacity(20);

    for (position, count) in shape {
        for _ in 0..count {
            let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let country = COUNTRIES[rng.gen_range(0..COUNTRIES.len())];
            let age = rng.gen_range(18..=40);
            squad.push((first_name, last_name, country, age, position));
        }
    }

    squad
}
