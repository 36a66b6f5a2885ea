use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use soccer_manager_api::api::handlers::{auth as auth_handlers, players, teams, transfers};
use soccer_manager_api::api::AppState;
use soccer_manager_api::config::Config;
use soccer_manager_api::infrastructure::cache::{RedisLoginAttempts, RedisTeamCache};
use soccer_manager_api::infrastructure::repositories::{
    PostgresPlayerRepository, PostgresTeamRepository, PostgresTransferRepository,
    PostgresUserRepository,
};
use soccer_manager_api::services::{
    AuthService, PlayerService, SeededAppreciation, TeamService, TransferService,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Arc::new(Config::from_env());

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connected successfully");

    let redis_client =
        redis::Client::open(config.redis_url.clone()).expect("Failed to create redis client");

    // Wire adapters behind the domain ports
    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let team_repo = Arc::new(PostgresTeamRepository::new(pool.clone()));
    let player_repo = Arc::new(PostgresPlayerRepository::new(pool.clone()));
    let transfer_repo = Arc::new(PostgresTransferRepository::new(pool.clone()));
    let team_cache = Arc::new(RedisTeamCache::new(redis_client.clone()));
    let login_attempts = Arc::new(RedisLoginAttempts::new(
        redis_client,
        config.login_attempt_ttl,
    ));
    let appreciation = Arc::new(SeededAppreciation::from_entropy());

    let state = AppState {
        auth: Arc::new(AuthService::new(
            users,
            team_repo.clone(),
            player_repo.clone(),
            login_attempts,
            config.clone(),
        )),
        teams: Arc::new(TeamService::new(
            team_repo.clone(),
            player_repo.clone(),
            team_cache.clone(),
            config.team_cache_ttl,
        )),
        players: Arc::new(PlayerService::new(player_repo.clone(), team_cache.clone())),
        transfers: Arc::new(TransferService::new(
            transfer_repo,
            player_repo,
            team_repo,
            team_cache,
            appreciation,
        )),
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(auth_handlers::health_check))
        // Auth routes
        .route("/api/auth/register", post(auth_handlers::register))
        .route("/api/auth/login", post(auth_handlers::login))
        // Team routes
        .route("/api/team", get(teams::get_my_team).patch(teams::update_team))
        // Player routes
        .route("/api/players/:id", patch(players::update_player))
        .route("/api/players/:id/list", post(transfers::list_player))
        // Transfer market routes
        .route("/api/transfers", get(transfers::get_transfer_list))
        .route("/api/transfers/:id/buy", post(transfers::buy_player))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state);

    // Start server
    tracing::info!("Server listening on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
