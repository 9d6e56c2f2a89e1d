use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SeedError;

/// Represents a user account of the marketplace
///
/// This struct maps directly to the `users` table. The password is never
/// stored in clear; `password_hash` holds an Argon2 PHC string.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    /// Unique identifier for the user (UUID v4 as string)
    id: String,

    /// The login name, unique across users
    username: String,

    /// The contact address, unique across users
    email: String,

    /// Argon2 hash of the password
    #[serde(skip_serializing)]
    password_hash: String,

    /// When this user was created
    created_at: NaiveDateTime,
}

impl User {
    /// Creates a new user without a password
    ///
    /// Call [`User::set_password`] before saving it.
    ///
    /// ### Arguments
    ///
    /// * `username` - The login name
    /// * `email` - The contact address
    ///
    /// ### Returns
    ///
    /// A new `User` with a fresh UUID and an empty password hash
    pub fn new(username: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash: String::new(),
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Hashes `password` with a fresh salt and stores the result
    ///
    /// ### Errors
    ///
    /// Returns `SeedError::PasswordHash` if Argon2 rejects the input
    pub fn set_password(&mut self, password: &str) -> Result<(), SeedError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| SeedError::PasswordHash(e.to_string()))?;
        self.password_hash = hash.to_string();
        Ok(())
    }

    /// Checks a candidate password against the stored hash
    ///
    /// Returns false when no password has been set.
    pub fn valid_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Gets the user's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the user's username
    pub fn get_username(&self) -> String {
        self.username.clone()
    }

    /// Gets the user's email
    pub fn get_email(&self) -> String {
        self.email.clone()
    }

    /// Gets the stored password hash
    pub fn get_password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Gets the user's creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
