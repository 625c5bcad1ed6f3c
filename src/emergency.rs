//! Emergency escalation — offering a call to emergency services when the
//! latest assistant reply names a High-risk condition.
//!
//! The dial itself goes through the platform opener as a `tel:` URL and is
//! fire-and-forget: no result flows back into the conversation.

use crate::models::{Message, RiskLevel};

/// Whether a message warrants offering the emergency call.
///
/// True iff at least one of its conditions carries High risk.
pub fn requires_emergency(message: &Message) -> bool {
    message.highest_risk() == Some(RiskLevel::High)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;

    fn with_risks(risks: &[RiskLevel]) -> Message {
        Message::assistant(
            "reply",
            risks
                .iter()
                .enumerate()
                .map(|(i, r)| Condition { name: format!("c{i}"), risk: *r })
                .collect(),
        )
    }

    #[test]
    fn high_risk_triggers_emergency() {
        assert!(requires_emergency(&with_risks(&[
            RiskLevel::Low,
            RiskLevel::High,
        ])));
    }

    #[test]
    fn low_and_medium_do_not_trigger() {
        assert!(!requires_emergency(&with_risks(&[
            RiskLevel::Low,
            RiskLevel::Medium,
        ])));
    }

    #[test]
    fn no_conditions_do_not_trigger() {
        assert!(!requires_emergency(&with_risks(&[])));
    }
}
