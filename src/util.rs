use rand::Rng;

use crate::errors::SeedError;

/// Length of the strings produced by [`random_string`]
pub const DEFAULT_RANDOM_STRING_LEN: usize = 4;

/// Characters a random string may contain: ASCII 48-57, 65-90 and 97-122
pub const ALLOWED_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Longest sequence [`range`] will materialise
pub const MAX_RANGE_LEN: u64 = 1 << 20;

/// Returns every integer from `start` to `end`, both inclusive
///
/// The whole sequence is allocated up front, so its length is capped at
/// [`MAX_RANGE_LEN`].
///
/// ### Errors
///
/// Returns `SeedError::InvalidRange` if `start > end`, and
/// `SeedError::RangeTooLong` if the range holds more than [`MAX_RANGE_LEN`] values
pub fn range(start: i64, end: i64) -> Result<Vec<i64>, SeedError> {
    if start > end {
        return Err(SeedError::InvalidRange { start, end });
    }
    if end.abs_diff(start) >= MAX_RANGE_LEN {
        return Err(SeedError::RangeTooLong { start, end, max: MAX_RANGE_LEN });
    }
    Ok((start..=end).collect())
}

/// Returns a random alphanumeric string of [`DEFAULT_RANDOM_STRING_LEN`] characters
pub fn random_string() -> String {
    random_string_of_len(DEFAULT_RANDOM_STRING_LEN)
}

/// Returns a random alphanumeric string of `size` characters
pub fn random_string_of_len(size: usize) -> String {
    random_string_with(&mut rand::rng(), size)
}

/// Draws `size` characters uniformly, with replacement, from [`ALLOWED_CHARS`]
pub fn random_string_with<R: Rng>(rng: &mut R, size: usize) -> String {
    (0..size)
        .map(|_| ALLOWED_CHARS[rng.random_range(0..ALLOWED_CHARS.len())] as char)
        .collect()
}
