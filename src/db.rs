use anyhow::{Result, anyhow};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Opens the single database connection used for the lifetime of the process
///
/// The pool is capped at one connection so that at most one query is ever in
/// flight.
pub fn init_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| anyhow!("Failed to connect to {}: {}", database_url, e))
}
