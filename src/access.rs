//! Login gate — a single fixed access code guarding the conversation screen.
//!
//! Explicitly a soft gate, not a security boundary: one cleartext string
//! comparison, no lockout, no attempt counting. See `config::ACCESS_CODE`.

use crate::config;

/// Why an access attempt was refused. Blank input and a wrong code are
/// distinguishable so the frontend can toast different messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("Please enter your access code")]
    Blank,
    #[error("Invalid access code. Please try again.")]
    Invalid,
}

/// Check an entered code against the fixed secret.
///
/// Case-sensitive exact equality. Blank (whitespace-only) input is refused
/// before comparison so the user gets a "please enter" rather than an
/// "invalid" notice.
pub fn check(code: &str) -> Result<(), AccessDenied> {
    if code.trim().is_empty() {
        return Err(AccessDenied::Blank);
    }
    if code != config::ACCESS_CODE {
        return Err(AccessDenied::Invalid);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_code_passes() {
        assert!(check("DGSK-2838").is_ok());
    }

    #[test]
    fn blank_input_fails_with_blank_reason() {
        assert_eq!(check(""), Err(AccessDenied::Blank));
        assert_eq!(check("   "), Err(AccessDenied::Blank));
    }

    #[test]
    fn wrong_code_fails_with_invalid_reason() {
        assert_eq!(check("DGSK-0000"), Err(AccessDenied::Invalid));
        assert_eq!(check("dgsk-2838"), Err(AccessDenied::Invalid), "comparison is case-sensitive");
    }

    #[test]
    fn padded_correct_code_is_not_accepted() {
        // Trim is only used for the blank check — the comparison itself is exact.
        assert_eq!(check(" DGSK-2838 "), Err(AccessDenied::Invalid));
    }

    #[test]
    fn failure_reasons_have_user_facing_messages() {
        assert_eq!(AccessDenied::Blank.to_string(), "Please enter your access code");
        assert_eq!(
            AccessDenied::Invalid.to_string(),
            "Invalid access code. Please try again."
        );
    }
}
