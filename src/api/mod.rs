// API layer module (adapters for controllers)
// Translates HTTP requests into service calls and domain errors into responses

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

pub use state::AppState;
