//! # Validation Module
//!
//! Field validators applied to records before they are written.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser forms                                                │
//! │  ├── Required markers, input types                                     │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Collection::save (Rust)                                      │
//! │  └── Record::validate → THIS MODULE, run on the MERGED record          │
//! │                                                                         │
//! │  There is no Layer 3: the key-value blob has no constraints.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use anchor_core::validation::{validate_email, validate_name};
//!
//! assert!(validate_name("name", "Harbor Woodworks").is_ok());
//! assert!(validate_email("jo@example.com").is_ok());
//! assert!(validate_email("not-an-email").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted display name or title.
pub const MAX_NAME_LENGTH: usize = 200;

/// Longest accepted SKU.
pub const MAX_SKU_LENGTH: usize = 50;

/// Longest single timesheet entry, in hours.
pub const MAX_ENTRY_HOURS: f64 = 24.0;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required display string (client name, order title, ...).
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LENGTH`] characters
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates an e-mail address.
///
/// ## Rules
/// - Exactly one `@`
/// - Non-empty local part and a domain containing a dot
/// - No whitespace
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid("must contain exactly one '@'")),
    };

    if local.is_empty() {
        return Err(invalid("missing name before '@'"));
    }

    if domain.is_empty() {
        return Err(invalid("missing domain after '@'"));
    }

    Ok(())
}

/// Validates an optional e-mail: absent or blank is fine.
pub fn validate_optional_email(email: Option<&str>) -> ValidationResult<()> {
    match email {
        Some(email) if !email.trim().is_empty() => validate_email(email),
        _ => Ok(()),
    }
}

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - 1 to [`MAX_SKU_LENGTH`] characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > MAX_SKU_LENGTH {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LENGTH,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a count (stock, line quantity) is not negative.
pub fn validate_quantity(field: &str, qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates that an amount is not negative. Zero is allowed.
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a timesheet duration: `0 < hours <= 24`.
pub fn validate_hours(hours: f64) -> ValidationResult<()> {
    if !hours.is_finite() || hours <= 0.0 || hours > MAX_ENTRY_HOURS {
        return Err(ValidationError::OutOfRange {
            field: "hours".to_string(),
            min: "0".to_string(),
            max: MAX_ENTRY_HOURS.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Dana Whitfield").is_ok());
        assert_eq!(
            validate_name("name", "   "),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(matches!(
            validate_name("title", &"x".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("dana@harborwood.co").is_ok());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("dana@localhost").is_ok());
        assert!(validate_email("dana@").is_err());
        assert!(validate_email("dana @example.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_optional_email_allows_blank() {
        assert!(validate_optional_email(None).is_ok());
        assert!(validate_optional_email(Some("  ")).is_ok());
        assert!(validate_optional_email(Some("nope")).is_err());
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("WAL-BLANK_12").is_ok());
        assert!(validate_sku("").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_numeric_validators() {
        assert!(validate_quantity("quantity", 0).is_ok());
        assert!(validate_quantity("quantity", -1).is_err());
        assert!(validate_amount("amount", Money::zero()).is_ok());
        assert!(validate_amount("amount", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_hours() {
        assert!(validate_hours(7.5).is_ok());
        assert!(validate_hours(24.0).is_ok());
        assert!(validate_hours(0.0).is_err());
        assert!(validate_hours(24.5).is_err());
        assert!(validate_hours(f64::NAN).is_err());
    }
}
