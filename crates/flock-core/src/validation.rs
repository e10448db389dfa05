//! Input validation policy shared by the identity and graph components.
//!
//! Field-level shape checks live here; uniqueness and existence checks belong
//! to the components because they require the store.

use crate::{CoreError, Result};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 30;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;
pub const EMAIL_MAX_LENGTH: usize = 255;

/// Usernames are 3-30 characters, start with an ASCII letter, and contain
/// only ASCII letters, digits, and underscores.
#[track_caller]
pub fn validate_username(username: &str) -> Result<()> {
    if username.len() < USERNAME_MIN_LENGTH || username.len() > USERNAME_MAX_LENGTH {
        return Err(CoreError::validation(
            format!("username must be {USERNAME_MIN_LENGTH}-{USERNAME_MAX_LENGTH} characters"),
            Some("username"),
        ));
    }
    let mut chars = username.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_with_letter || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CoreError::validation(
            "username must start with a letter and contain only letters, digits, and underscores",
            Some("username"),
        ));
    }
    Ok(())
}

/// Basic shape check only: one `@`, a non-empty local part, and a dotted
/// domain. Deliverability is out of scope.
#[track_caller]
pub fn validate_email(email: &str) -> Result<()> {
    if email.len() > EMAIL_MAX_LENGTH {
        return Err(CoreError::validation(
            format!("email must be at most {EMAIL_MAX_LENGTH} characters"),
            Some("email"),
        ));
    }
    let shape_ok = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !shape_ok || email.contains(char::is_whitespace) {
        return Err(CoreError::validation(
            "email address is not valid",
            Some("email"),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < PASSWORD_MIN_LENGTH {
        return Err(CoreError::validation(
            format!("password must be at least {PASSWORD_MIN_LENGTH} characters"),
            Some("password"),
        ));
    }
    if password.len() > PASSWORD_MAX_LENGTH {
        return Err(CoreError::validation(
            format!("password must be at most {PASSWORD_MAX_LENGTH} characters"),
            Some("password"),
        ));
    }
    Ok(())
}

/// Bios may be empty; only the configured length cap applies.
#[track_caller]
pub fn validate_bio(bio: &str, max_length: usize) -> Result<()> {
    if bio.chars().count() > max_length {
        return Err(CoreError::validation(
            format!("bio must be at most {max_length} characters"),
            Some("bio"),
        ));
    }
    Ok(())
}

/// Returns the trimmed query, rejecting queries that trim to nothing.
#[track_caller]
pub fn validate_search_query(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(
            "search query cannot be empty",
            Some("q"),
        ));
    }
    Ok(trimmed)
}
