use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::db::DbPool;
use crate::errors::SeedError;
use crate::models::{Comment, Item, User};
use crate::repo;
use crate::util::random_string;

/// Domain used for every seeded email address
pub const EMAIL_DOMAIN: &str = "anythink.com";

/// Upper bound on the wait between two user attempts
pub const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// How often and how patiently user creation is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl RetryPolicy {
    /// Creates a policy; `max_attempts` below one is raised to one
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_user_attempts, config.retry_backoff())
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait after the `attempt`-th failure (1-based): doubles each time, capped at [`MAX_BACKOFF`]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.saturating_sub(1).min(16);
        self.backoff.saturating_mul(factor).min(MAX_BACKOFF)
    }
}

/// What a seed run created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    /// Items whose comment was also saved
    pub items: usize,
    pub comments: usize,
    /// User candidates that failed to save and were replaced
    pub failed_attempts: u32,
    /// Saved users whose item or comment could not be saved
    pub failed_items: usize,
}

/// Builds a fresh candidate user with a random 4-character password
///
/// The username is `user` followed by the password and the email is the
/// username at [`EMAIL_DOMAIN`].
pub fn generate_user() -> Result<User, SeedError> {
    let password = random_string();
    let username = format!("user{}", password);
    let email = format!("{}@{}", username, EMAIL_DOMAIN);

    let mut user = User::new(username, email);
    user.set_password(&password)?;
    Ok(user)
}

/// Saves user number `index`, replacing the candidate after every failure
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `policy` - Bounds the number of candidates and the wait between them
/// * `index` - Position of the user in the seed run, for logging
/// * `candidate` - Produces a new candidate user on every call
///
/// ### Returns
///
/// The saved user and the number of candidates that failed before it
///
/// ### Errors
///
/// Returns `SeedError::RetriesExhausted` once `policy.max_attempts()`
/// candidates have failed
pub async fn create_user_with_retry<F>(
    pool: &DbPool,
    policy: &RetryPolicy,
    index: usize,
    mut candidate: F,
) -> Result<(User, u32), SeedError>
where
    F: FnMut() -> Result<User, SeedError>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;

        let result = candidate().and_then(|user| {
            repo::insert_user(pool, &user)
                .map(|()| user.clone())
                .map_err(|e| SeedError::UserInsert {
                    id: user.get_id(),
                    reason: e.to_string(),
                })
        });

        match result {
            Ok(user) => {
                info!("User {} created successfully!", index);
                return Ok((user, attempt - 1));
            }
            Err(e) => {
                warn!(index, attempt, "error for user: {}", e);
                if attempt >= policy.max_attempts() {
                    return Err(SeedError::RetriesExhausted {
                        index,
                        attempts: attempt,
                        last_error: e.to_string(),
                    });
                }
                tokio::time::sleep(policy.delay_for(attempt)).await;
            }
        }
    }
}

/// Creates one item and one comment owned by `user_id`
///
/// The item is saved before the comment. The item lists the comment's id and
/// the comment body names the item.
pub fn seed_user_item(pool: &DbPool, user_id: &str) -> Result<(Item, Comment), SeedError> {
    info!("\tcreating item and comment for user {}", user_id);

    let mut item = Item::new(
        user_id.to_string(),
        format!("Item from user {}", user_id),
        "Fake description".to_string(),
        vec!["test".to_string(), "development".to_string(), user_id.to_string()],
    );
    let comment = Comment::new(user_id.to_string(), format!("Comment for item {}", item.get_id()));
    item.add_comment(comment.get_id());

    repo::insert_item(pool, &item)?;
    info!("\tItem created successfully! {}", item.get_id());

    repo::insert_comment(pool, &comment)?;
    info!("\tComment created successfully! {}", comment.get_id());

    Ok((item, comment))
}

/// Populates `config.seed_count` users, each with one item and one comment
///
/// A failed item or comment is logged and counted in
/// [`SeedReport::failed_items`]; seeding moves on to the next user.
///
/// ### Errors
///
/// Fails only when a user cannot be saved within the retry policy.
pub async fn seed_users(pool: &DbPool, config: &Config) -> Result<SeedReport, SeedError> {
    let policy = RetryPolicy::from_config(config);
    let mut report = SeedReport::default();

    for i in 0..config.seed_count {
        info!("creating user {} ...", i);

        let (user, failed) = create_user_with_retry(pool, &policy, i, generate_user).await?;
        report.users += 1;
        report.failed_attempts += failed;

        match seed_user_item(pool, &user.get_id()) {
            Ok(_) => {
                report.items += 1;
                report.comments += 1;
            }
            Err(e) => {
                error!(user = %user.get_id(), "error creating item for user: {}", e);
                report.failed_items += 1;
            }
        }
    }

    debug!(?report, "seed run finished");
    Ok(report)
}
