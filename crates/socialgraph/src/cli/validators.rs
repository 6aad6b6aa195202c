//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.
//! The graph compares ids exactly, so normalization happens here.

use crate::domain::UserId;
use crate::error::Error;

/// Maximum length of a user id
pub const MAX_USER_ID_LENGTH: usize = 32;

/// Maximum length of a display name
pub const MAX_NAME_LENGTH: usize = 100;

/// Validate and normalize a user id.
///
/// Ids are trimmed and upper-cased, so `ana` and ` ANA ` name the same user.
/// They must be non-empty, contain no whitespace, and fit in
/// [`MAX_USER_ID_LENGTH`] characters.
pub fn validate_user_id(s: &str) -> Result<String, String> {
    let id: UserId = s.trim().parse().map_err(|e: Error| e.to_string())?;
    let s = id.as_str();

    if s.chars().count() > MAX_USER_ID_LENGTH {
        return Err(format!(
            "User id cannot exceed {MAX_USER_ID_LENGTH} characters"
        ));
    }

    if s.chars().any(char::is_control) {
        return Err("User id cannot contain control characters".to_string());
    }

    Ok(s.to_uppercase())
}

/// Validate a display name.
///
/// Names are trimmed, must be non-empty, single-line, and at most
/// [`MAX_NAME_LENGTH`] characters.
pub fn validate_name(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if s.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Name cannot exceed {MAX_NAME_LENGTH} characters, got {}",
            s.chars().count()
        ));
    }

    if s.chars().any(char::is_control) {
        return Err("Name cannot contain control characters".to_string());
    }

    Ok(s.to_string())
}
