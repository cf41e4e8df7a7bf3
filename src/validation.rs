//! Input validation for boards, posts and users.

use thiserror::Error;

/// Maximum board URL length.
pub const MAX_BOARD_URL_LENGTH: usize = 64;

/// Maximum length for board and post titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length for post content (in characters).
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Maximum user name length (in characters).
pub const MAX_NAME_LENGTH: usize = 20;

/// Maximum email length.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Board URL is empty.
    #[error("board url cannot be empty")]
    BoardUrlEmpty,

    /// Board URL is too long.
    #[error("board url must be at most {} characters", MAX_BOARD_URL_LENGTH)]
    BoardUrlTooLong,

    /// Board URL contains characters other than letters, digits, '-' and '_'.
    #[error("board url can only contain letters, digits, hyphens and underscores")]
    BoardUrlInvalidChars,

    /// Title is empty.
    #[error("title cannot be empty")]
    TitleEmpty,

    /// Title is too long.
    #[error("title must be at most {} characters", MAX_TITLE_LENGTH)]
    TitleTooLong,

    /// Content is empty.
    #[error("content cannot be empty")]
    ContentEmpty,

    /// Content is too long.
    #[error("content must be at most {} characters", MAX_CONTENT_LENGTH)]
    ContentTooLong,

    /// Name is empty.
    #[error("name cannot be empty")]
    NameEmpty,

    /// Name is too long.
    #[error("name must be at most {} characters", MAX_NAME_LENGTH)]
    NameTooLong,

    /// Email is too long.
    #[error("email must be at most {} characters", MAX_EMAIL_LENGTH)]
    EmailTooLong,

    /// Email format is invalid.
    #[error("invalid email format")]
    EmailInvalidFormat,
}

/// Validate a board URL slug.
///
/// Requirements:
/// - Not empty (after trimming whitespace)
/// - Characters: ASCII letters, digits, hyphen (-) and underscore (_)
///
/// # Examples
///
/// ```
/// use boardview::validation::validate_board_url;
///
/// assert!(validate_board_url("my-board_2").is_ok());
/// assert!(validate_board_url("my board!").is_err());
/// assert!(validate_board_url("").is_err());
/// ```
pub fn validate_board_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::BoardUrlEmpty);
    }
    if url.len() > MAX_BOARD_URL_LENGTH {
        return Err(ValidationError::BoardUrlTooLong);
    }
    if !url
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::BoardUrlInvalidChars);
    }
    Ok(())
}

/// Validate a board or post title.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleEmpty);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

/// Validate post content.
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::ContentEmpty);
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(ValidationError::ContentTooLong);
    }
    Ok(())
}

/// Validate a user's display name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// Validate an email address.
///
/// Basic validation:
/// - Exactly one @ with non-empty local and domain parts
/// - Domain contains a dot that is neither first nor last
/// - No whitespace
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::EmailTooLong);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::EmailInvalidFormat);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::EmailInvalidFormat);
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::EmailInvalidFormat);
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::EmailInvalidFormat);
    }
    Ok(())
}
