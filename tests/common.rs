/// Common test utilities for anythink-seeds integration tests
///
/// This file contains shared setup for the integration tests: a file-backed
/// SQLite database in a temporary directory with the migrations applied, and
/// a configuration that seeds quickly.

use anythink_seeds::{config::Config, db::{init_pool, DbPool}, run_migrations};
use tempfile::TempDir;

/// A migrated database that lives as long as the returned directory
///
/// ### Returns
///
/// The temporary directory holding the database file, the pool, and the
/// database URL for handing to the binary
pub fn create_test_db() -> (TempDir, DbPool, String) {
    let dir = tempfile::tempdir().unwrap();
    let database_url = dir.path().join("anythink.db").to_string_lossy().to_string();

    let pool = init_pool(&database_url).unwrap();
    {
        let conn = &mut pool.get().unwrap();
        run_migrations(conn).unwrap();
    }

    (dir, pool, database_url)
}

/// Configuration with the default seed size and no waiting
#[allow(dead_code)]
pub fn fast_config(database_url: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        seed_count: 100,
        max_user_attempts: 10,
        retry_backoff_ms: 0,
        prompt_delay_ms: 0,
    }
}
