use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a comment left by a user
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Comment {
    /// Unique identifier for the comment (UUID v4 as string)
    id: String,

    /// The ID of the user who wrote the comment
    seller: String,

    /// The comment text
    body: String,

    /// When this comment was created
    created_at: NaiveDateTime,
}

impl Comment {
    /// Creates a new comment
    ///
    /// ### Arguments
    ///
    /// * `seller` - The ID of the authoring user
    /// * `body` - The comment text
    pub fn new(seller: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            seller,
            body,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    pub fn get_seller(&self) -> String {
        self.seller.clone()
    }

    pub fn get_body(&self) -> String {
        self.body.clone()
    }

    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
