use crate::db::DbPool;
use crate::models::User;
use crate::schema::users;
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Saves a user to the database
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `user` - The user to insert, with its password already set
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The username or email is already taken
/// - The database insert operation fails
pub fn insert_user(pool: &DbPool, user: &User) -> Result<()> {
    let conn = &mut pool.get()?;

    diesel::insert_into(users::table)
        .values(user)
        .execute(conn)
        .map_err(|e| anyhow!("Failed to insert user {}: {}", user.get_id(), e))?;

    Ok(())
}

/// Retrieves a user by its ID
///
/// ### Returns
///
/// A Result containing the User, or None if no user has that ID
pub fn get_user(pool: &DbPool, user_id: &str) -> Result<Option<User>> {
    let conn = &mut pool.get()?;

    let result = users::table
        .find(user_id)
        .select(User::as_select())
        .first(conn)
        .optional()
        .map_err(|e| anyhow!("Failed to get user: {}", e))?;

    Ok(result)
}

/// Lists all users in the database
pub fn list_users(pool: &DbPool) -> Result<Vec<User>> {
    let conn = &mut pool.get()?;

    let result = users::table
        .select(User::as_select())
        .load(conn)?;

    Ok(result)
}

/// Counts the users in the database
pub fn count_users(pool: &DbPool) -> Result<i64> {
    let conn = &mut pool.get()?;

    let total: i64 = users::table
        .count()
        .get_result(conn)
        .map_err(|e| anyhow!("Failed to count users: {}", e))?;

    Ok(total)
}

/// Deletes every user except the one with the given username
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `keep_username` - The username of the user that survives
///
/// ### Returns
///
/// The number of users deleted
pub fn delete_users_except(pool: &DbPool, keep_username: &str) -> Result<usize> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(users::table.filter(users::username.ne(keep_username)))
        .execute(conn)
        .map_err(|e| anyhow!("Failed to delete users: {}", e))?;

    Ok(deleted)
}
