// Redis adapters for the cache and login-attempt ports

pub mod redis_login_attempts;
pub mod redis_team_cache;

pub use redis_login_attempts::RedisLoginAttempts;
pub use redis_team_cache::RedisTeamCache;
