/// Repository module
///
/// This module provides the data access layer for the seeder. It contains
/// the insert, lookup, count and bulk delete calls for users, items and
/// comments. Every function takes the pool explicitly and checks out the
/// single connection only for the duration of one statement.

mod user_repo;
mod item_repo;
mod comment_repo;

// Re-export all repository functions
pub use user_repo::*;
pub use item_repo::*;
pub use comment_repo::*;
