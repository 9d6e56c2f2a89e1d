use thiserror::Error;

/// Errors produced by the seeding operations
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
    #[error("Invalid range: {start} is greater than {end}")]
    InvalidRange { start: i64, end: i64 },
    #[error("Range {start}..={end} is longer than {max} values")]
    RangeTooLong { start: i64, end: i64, max: u64 },
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
    #[error("Failed to insert user {id}: {reason}")]
    UserInsert { id: String, reason: String },
    #[error("Gave up creating user {index} after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        index: usize,
        attempts: u32,
        last_error: String,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
