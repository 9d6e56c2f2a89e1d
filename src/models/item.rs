use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StringList;

/// Represents an item offered for sale by a user
///
/// This struct maps directly to the `items` table in the database. The tag
/// list and the ids of the comments left on the item are stored as JSON
/// arrays.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Item {
    /// Unique identifier for the item (UUID v4 as string)
    id: String,

    /// The ID of the user selling the item
    seller: String,

    /// The title of the item
    title: String,

    /// Free-form description
    description: String,

    /// Tags attached to the item
    tag_list: StringList,

    /// IDs of the comments left on the item
    comment_ids: StringList,

    /// When this item was created
    created_at: NaiveDateTime,
}

impl Item {
    /// Creates a new item with no comments
    ///
    /// This method automatically generates a UUID v4 for the ID and sets
    /// the created_at timestamp to the current time.
    ///
    /// ### Arguments
    ///
    /// * `seller` - The ID of the owning user
    /// * `title` - The title of the item
    /// * `description` - The description of the item
    /// * `tag_list` - Tags attached to the item
    ///
    /// ### Returns
    ///
    /// A new `Item` instance
    pub fn new(seller: String, title: String, description: String, tag_list: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            seller,
            title,
            description,
            tag_list: StringList(tag_list),
            comment_ids: StringList::default(),
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Records a comment as belonging to this item
    ///
    /// ### Arguments
    ///
    /// * `comment_id` - The ID of the comment
    pub fn add_comment(&mut self, comment_id: String) {
        self.comment_ids.0.push(comment_id);
    }

    /// Gets the item's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the ID of the user selling the item
    pub fn get_seller(&self) -> String {
        self.seller.clone()
    }

    /// Gets the item's title
    pub fn get_title(&self) -> String {
        self.title.clone()
    }

    /// Gets the item's description
    pub fn get_description(&self) -> String {
        self.description.clone()
    }

    /// Gets the item's tags
    pub fn get_tag_list(&self) -> &[String] {
        &self.tag_list.0
    }

    /// Gets the IDs of the comments on the item
    pub fn get_comment_ids(&self) -> &[String] {
        &self.comment_ids.0
    }

    /// Gets the item's creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
