//! Raffle services
//!
//! Services hold the business rules and return [`ActionOutcome`]s; the
//! [`crate::actions`] facade folds them into envelopes.

mod backoffice_service;
mod participation_service;
mod raffle_service;
mod ranking_service;
mod user_service;

pub use backoffice_service::BackofficeService;
pub use participation_service::ParticipationService;
pub use raffle_service::RaffleService;
pub use ranking_service::RankingService;
pub use user_service::UserService;

use raffle_core::ranking::parse_engaged;
use raffle_core::{ActionError, ActionOutcome};

/// Trimmed, non-empty text field
pub(crate) fn require_text(field: &str, value: &str) -> ActionOutcome<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ActionError::invalid_field(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Non-negative decimal string, returned trimmed
pub(crate) fn require_amount(field: &str, value: &str) -> ActionOutcome<String> {
    let trimmed = value.trim();
    match parse_engaged(trimmed) {
        Some(amount) if amount.is_sign_negative() => {
            Err(ActionError::invalid_field(field, "must not be negative"))
        }
        Some(_) => Ok(trimmed.to_string()),
        None => Err(ActionError::invalid_field(field, "must be a decimal number")),
    }
}

/// Wallet addresses are compared case-insensitively
pub(crate) fn normalize_wallet(wallet_address: &str) -> String {
    wallet_address.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use raffle_core::ErrorKind;

    #[test]
    fn test_require_amount() {
        assert_eq!(require_amount("amount_paid", " 12.5 ").unwrap(), "12.5");
        assert_eq!(require_amount("amount_paid", "0").unwrap(), "0");
        let err = require_amount("amount_paid", "-1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("amount_paid"));
        assert!(require_amount("amount_paid", "ten").is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("title", "  Big draw ").unwrap(), "Big draw");
        assert!(require_text("title", "   ").is_err());
    }

    #[test]
    fn test_normalize_wallet() {
        assert_eq!(normalize_wallet(" 0xAbC "), "0xabc");
    }
}
