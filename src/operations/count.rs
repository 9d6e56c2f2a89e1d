use std::fmt;

use tracing::info;

use crate::db::DbPool;
use crate::errors::SeedError;
use crate::repo;

/// Sizes of the three collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountReport {
    pub users: i64,
    pub items: i64,
    pub comments: i64,
}

impl fmt::Display for CountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Totals")?;
        writeln!(f)?;
        writeln!(f, "    users: {}", self.users)?;
        writeln!(f, "    items: {}", self.items)?;
        writeln!(f, "    comments: {}", self.comments)?;
        writeln!(f)
    }
}

/// Counts users, items and comments
///
/// The three counts are independent queries; writes from elsewhere between
/// them are not excluded.
pub fn count_docs(pool: &DbPool) -> Result<CountReport, SeedError> {
    info!("counting documents...");

    let comments = repo::count_comments(pool)?;
    let items = repo::count_items(pool)?;
    let users = repo::count_users(pool)?;

    Ok(CountReport { users, items, comments })
}
