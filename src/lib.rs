//! anythink-seeds: sample data for the anythink marketplace
//!
//! This library seeds, clears and counts the users, items and comments of
//! the marketplace database. The binary wraps it in a one-shot seeding mode
//! and an interactive menu.
//!
//! ### Modules
//!
//! - `config`: Layered configuration (defaults, config file, CLI/env)
//! - `db`: Database connection management
//! - `models`: Users, items and comments
//! - `repo`: Repository layer for database operations
//! - `operations`: Seed, clear and count
//! - `menu`: The interactive operator menu
//! - `util`: Integer ranges and random strings

pub mod config;

/// Database connection module
pub mod db;

pub mod errors;

pub mod menu;

/// Data models module
pub mod models;

pub mod operations;

/// Repository module for database operations
pub mod repo;

/// Database schema module
pub mod schema;

pub mod util;

#[cfg(test)]
mod test_utils;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub use errors::SeedError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Runs the embedded migrations
///
/// This function creates the `users`, `items` and `comments` tables if they
/// do not exist yet.
///
/// ### Arguments
///
/// * `conn` - A mutable reference to a SQLite connection
pub fn run_migrations(conn: &mut diesel::SqliteConnection) -> anyhow::Result<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    Ok(())
}
