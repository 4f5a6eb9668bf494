//! SQLite persistence for tracks and play history.
//!
//! This module provides:
//! - Database initialization, pragmas and schema
//! - Repository layer implementing the trending data providers

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::Repository;
