use tracing::info;

use crate::db::DbPool;
use crate::errors::SeedError;
use crate::repo;

/// Title of the item that survives a clear
pub const RESERVED_ITEM_TITLE: &str = "My first item";

/// Username of the user that survives a clear
pub const RESERVED_USERNAME: &str = "felipeam";

/// How many records a clear removed from each collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearReport {
    pub comments: usize,
    pub items: usize,
    pub users: usize,
}

/// Empties the database except for the reserved item and user
///
/// Comments have no exemption, so comments on the reserved item are
/// deleted too.
pub fn clear_db(pool: &DbPool) -> Result<ClearReport, SeedError> {
    info!("clearing db...");

    let report = ClearReport {
        comments: repo::delete_all_comments(pool)?,
        items: repo::delete_items_except(pool, RESERVED_ITEM_TITLE)?,
        users: repo::delete_users_except(pool, RESERVED_USERNAME)?,
    };

    info!(
        comments = report.comments,
        items = report.items,
        users = report.users,
        "db cleared successfully!"
    );
    Ok(report)
}
