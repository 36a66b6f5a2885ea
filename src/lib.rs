//! Soccer Manager API Library
//!
//! This library provides the core functionality for the soccer manager
//! service: the team economy engine (team snapshots, player updates, and the
//! transfer market), its domain ports, and the infrastructure adapters that
//! back them.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
