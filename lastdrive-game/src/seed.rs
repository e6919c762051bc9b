//! Seed sources: wall-clock entropy for normal play, parsed tokens for
//! reproducible drives.
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("unrecognized seed token: {token}")]
    Invalid { token: String },
}

/// Seed derived from the wall clock. Two runs almost never share one.
#[must_use]
pub fn entropy_seed() -> u64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let raw = elapsed.as_secs().rotate_left(32) ^ u64::from(elapsed.subsec_nanos());
    raw.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Parse a seed token: decimal, negative decimal (absolute value) or `0x` hex.
///
/// # Errors
///
/// Returns [`SeedError::Invalid`] when the token is none of those forms.
pub fn parse_seed(token: &str) -> Result<u64, SeedError> {
    let trimmed = token.trim();
    let invalid = || SeedError::Invalid {
        token: trimmed.to_string(),
    };

    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        let digits: String = hex.chars().filter(|c| *c != '_').collect();
        return u64::from_str_radix(&digits, 16).map_err(|_| invalid());
    }

    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }

    trimmed
        .parse::<i64>()
        .map(i64::unsigned_abs)
        .map_err(|_| invalid())
}
