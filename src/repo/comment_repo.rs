use crate::db::DbPool;
use crate::models::Comment;
use crate::schema::comments;
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Saves a comment to the database
pub fn insert_comment(pool: &DbPool, comment: &Comment) -> Result<()> {
    let conn = &mut pool.get()?;

    diesel::insert_into(comments::table)
        .values(comment)
        .execute(conn)
        .map_err(|e| anyhow!("Failed to insert comment {}: {}", comment.get_id(), e))?;

    Ok(())
}

/// Retrieves a comment by its ID
pub fn get_comment(pool: &DbPool, comment_id: &str) -> Result<Option<Comment>> {
    let conn = &mut pool.get()?;

    let result = comments::table
        .find(comment_id)
        .select(Comment::as_select())
        .first(conn)
        .optional()
        .map_err(|e| anyhow!("Failed to get comment: {}", e))?;

    Ok(result)
}

/// Lists all comments in the database
pub fn list_comments(pool: &DbPool) -> Result<Vec<Comment>> {
    let conn = &mut pool.get()?;

    let result = comments::table
        .select(Comment::as_select())
        .load(conn)?;

    Ok(result)
}

/// Counts the comments in the database
pub fn count_comments(pool: &DbPool) -> Result<i64> {
    let conn = &mut pool.get()?;

    let total: i64 = comments::table
        .count()
        .get_result(conn)
        .map_err(|e| anyhow!("Failed to count comments: {}", e))?;

    Ok(total)
}

/// Deletes every comment
///
/// ### Returns
///
/// The number of comments deleted
pub fn delete_all_comments(pool: &DbPool) -> Result<usize> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(comments::table)
        .execute(conn)
        .map_err(|e| anyhow!("Failed to delete comments: {}", e))?;

    Ok(deleted)
}
