use crate::db::DbPool;
use crate::models::Item;
use crate::schema::items;
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Saves an item to the database
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `item` - The item to insert
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database insert operation fails
pub fn insert_item(pool: &DbPool, item: &Item) -> Result<()> {
    let conn = &mut pool.get()?;

    diesel::insert_into(items::table)
        .values(item)
        .execute(conn)
        .map_err(|e| anyhow!("Failed to insert item {}: {}", item.get_id(), e))?;

    Ok(())
}

/// Retrieves an item by its ID
pub fn get_item(pool: &DbPool, item_id: &str) -> Result<Option<Item>> {
    let conn = &mut pool.get()?;

    let result = items::table
        .find(item_id)
        .select(Item::as_select())
        .first(conn)
        .optional()
        .map_err(|e| anyhow!("Failed to get item: {}", e))?;

    Ok(result)
}

/// Lists all items in the database
pub fn list_items(pool: &DbPool) -> Result<Vec<Item>> {
    let conn = &mut pool.get()?;

    let result = items::table
        .select(Item::as_select())
        .load(conn)?;

    Ok(result)
}

/// Lists the items sold by a user
pub fn get_items_by_seller(pool: &DbPool, seller_id: &str) -> Result<Vec<Item>> {
    let conn = &mut pool.get()?;

    let result = items::table
        .filter(items::seller.eq(seller_id))
        .select(Item::as_select())
        .load(conn)?;

    Ok(result)
}

/// Counts the items in the database
pub fn count_items(pool: &DbPool) -> Result<i64> {
    let conn = &mut pool.get()?;

    let total: i64 = items::table
        .count()
        .get_result(conn)
        .map_err(|e| anyhow!("Failed to count items: {}", e))?;

    Ok(total)
}

/// Deletes every item whose title differs from `keep_title`
///
/// ### Returns
///
/// The number of items deleted
pub fn delete_items_except(pool: &DbPool, keep_title: &str) -> Result<usize> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(items::table.filter(items::title.ne(keep_title)))
        .execute(conn)
        .map_err(|e| anyhow!("Failed to delete items: {}", e))?;

    Ok(deleted)
}
