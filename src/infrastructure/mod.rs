// Infrastructure layer module
// Database and cache adapters behind the domain ports

pub mod cache;
pub mod repositories;
