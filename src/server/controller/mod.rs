//! HTTP request handlers, access control, and DTO conversion.

pub mod auth;
pub mod item;
pub mod log;
pub mod queue;
pub mod raider;
pub mod team;
pub mod user;

use crate::server::error::AppError;

/// Checks a request field against inclusive character-length bounds.
pub(crate) fn check_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::Validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}
