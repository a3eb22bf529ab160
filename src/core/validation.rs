//! Field validation for the waitlist form
//!
//! Mirrors the constraints the browser enforces through `required`,
//! `maxlength` and `type="email"`, so the form state machine never accepts
//! input the native UI would have blocked.

use thiserror::Error;

/// Maximum length of the email field (matches the input's `maxlength`)
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Maximum length of the name field (matches the input's `maxlength`)
pub const MAX_NAME_LENGTH: usize = 100;

/// Longest DNS label allowed in the email domain
const MAX_DOMAIN_LABEL_LENGTH: usize = 63;

/// Reasons a waitlist submission is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    #[error("Name is required")]
    BlankName,

    #[error("Email is required")]
    BlankEmail,

    #[error("Name is too long ({actual} chars, max {max})")]
    NameTooLong { max: usize, actual: usize },

    #[error("Email is too long ({actual} chars, max {max})")]
    EmailTooLong { max: usize, actual: usize },

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Waitlist form was already submitted")]
    AlreadySubmitted,
}

/// Validates a name field value, returning the trimmed name
pub fn validate_name(value: &str) -> Result<String, WaitlistError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WaitlistError::BlankName);
    }

    let actual = trimmed.chars().count();
    if actual > MAX_NAME_LENGTH {
        return Err(WaitlistError::NameTooLong {
            max: MAX_NAME_LENGTH,
            actual,
        });
    }

    Ok(trimmed.to_string())
}

/// Validates an email field value, returning the trimmed address
pub fn validate_email(value: &str) -> Result<String, WaitlistError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WaitlistError::BlankEmail);
    }

    let actual = trimmed.chars().count();
    if actual > MAX_EMAIL_LENGTH {
        return Err(WaitlistError::EmailTooLong {
            max: MAX_EMAIL_LENGTH,
            actual,
        });
    }

    if !is_valid_email(trimmed) {
        return Err(WaitlistError::InvalidEmail);
    }

    Ok(trimmed.to_string())
}

/// Checks an address against the "valid e-mail address" rule browsers apply
/// to `<input type="email">`.
///
/// The domain does not need a dot: `user@localhost` passes, as it does in
/// the browser.
pub fn is_valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && local.chars().all(is_local_part_char)
        && !domain.is_empty()
        && domain.split('.').all(is_valid_domain_label)
}

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_valid_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_DOMAIN_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("jo@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(is_valid_email("user@localhost"));
        assert!(is_valid_email("o'neil@x-y.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("no-at"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@-b.com"));
        assert!(!is_valid_email("a@b-.com"));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("élan@example.com"));
    }

    #[test]
    fn test_domain_label_length() {
        let ok = format!("a@{}.com", "d".repeat(63));
        assert!(is_valid_email(&ok));

        let too_long = format!("a@{}.com", "d".repeat(64));
        assert!(!is_valid_email(&too_long));
    }

    #[test]
    fn test_validate_email_trims() {
        assert_eq!(validate_email("  jo@example.com \n"), Ok("jo@example.com".to_string()));
    }

    #[test]
    fn test_blank_fields() {
        assert_eq!(validate_email(""), Err(WaitlistError::BlankEmail));
        assert_eq!(validate_email("   "), Err(WaitlistError::BlankEmail));
        assert_eq!(validate_name(""), Err(WaitlistError::BlankName));
        assert_eq!(validate_name("\t "), Err(WaitlistError::BlankName));
    }

    #[test]
    fn test_email_length_limit() {
        let local = "a".repeat(MAX_EMAIL_LENGTH - "@b.com".len());
        let at_limit = format!("{local}@b.com");
        assert!(validate_email(&at_limit).is_ok());

        let over_limit = format!("a{at_limit}");
        assert_eq!(
            validate_email(&over_limit),
            Err(WaitlistError::EmailTooLong {
                max: MAX_EMAIL_LENGTH,
                actual: MAX_EMAIL_LENGTH + 1,
            })
        );
    }

    #[test]
    fn test_name_length_counts_chars() {
        let at_limit = "é".repeat(MAX_NAME_LENGTH);
        assert!(validate_name(&at_limit).is_ok());

        let over_limit = "é".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            validate_name(&over_limit),
            Err(WaitlistError::NameTooLong {
                max: MAX_NAME_LENGTH,
                actual: MAX_NAME_LENGTH + 1,
            })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(WaitlistError::BlankEmail.to_string(), "Email is required");
        assert_eq!(
            WaitlistError::NameTooLong { max: 100, actual: 120 }.to_string(),
            "Name is too long (120 chars, max 100)"
        );
    }
}
