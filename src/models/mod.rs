/// Data models module
///
/// This module defines the three record types the seeder writes: users, the
/// items they sell, and the comments left on those items. Each struct maps
/// directly to a table in the database.

mod string_list;
pub use string_list::StringList;

mod user;
pub use user::User;

mod item;
pub use item::Item;

mod comment;
pub use comment::Comment;
