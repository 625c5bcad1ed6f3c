//! Reply decoding — extracting the conditions block from a free-text reply.
//!
//! The framing has no escaping rule, so the reply is treated as a tagged
//! union {plain text, text with conditions} and parsed best-effort: a
//! malformed block must never keep the assistant's words from the user.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Condition;

/// Shortest span between the delimiters, first occurrence, across lines.
static CONDITIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)---CONDITIONS---\n(.*?)\n---END CONDITIONS---").expect("valid regex")
});

/// A decoded assistant reply: display text plus any conditions carried.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedReply {
    pub text: String,
    pub conditions: Vec<Condition>,
}

/// Decode a raw completion reply.
///
/// - No delimiter pair: the raw reply verbatim, no conditions.
/// - Delimiter pair with a valid JSON array between the markers: the
///   decoded conditions, with the whole block removed from the text and
///   the remainder trimmed.
/// - Delimiter pair with invalid JSON: no conditions, and the **entire
///   original reply unmodified** — the block is only stripped once parsing
///   succeeds, so the user still sees everything the model said.
pub fn decode_reply(raw: &str) -> DecodedReply {
    let Some(captures) = CONDITIONS_RE.captures(raw) else {
        return DecodedReply {
            text: raw.to_string(),
            conditions: Vec::new(),
        };
    };

    let span = &captures[1];
    match parse_conditions(span) {
        Ok(conditions) => {
            let text = CONDITIONS_RE.replace(raw, "").trim().to_string();
            DecodedReply { text, conditions }
        }
        Err(e) => {
            tracing::debug!(error = %e, "Conditions block present but unparsable; showing raw reply");
            DecodedReply {
                text: raw.to_string(),
                conditions: Vec::new(),
            }
        }
    }
}

/// Encode a conditions block ahead of free text, in the wire framing the
/// system instruction mandates. Used by tests and diagnostics.
pub fn encode_reply(conditions: &[Condition], text: &str) -> String {
    let json = serde_json::to_string(conditions).expect("conditions serialize");
    format!("---CONDITIONS---\n{json}\n---END CONDITIONS---\n{text}")
}

fn parse_conditions(span: &str) -> Result<Vec<Condition>, serde_json::Error> {
    // Strict shape: a JSON array of {name, risk} objects. Anything else —
    // truncated JSON, an unknown risk spelling, a bare object — fails the
    // whole block and falls back to the raw reply.
    serde_json::from_str(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;

    #[test]
    fn plain_reply_passes_through_verbatim() {
        let raw = "Drink plenty of water and rest.";
        let decoded = decode_reply(raw);
        assert_eq!(decoded.text, raw);
        assert!(decoded.conditions.is_empty());
    }

    #[test]
    fn framed_reply_decodes_and_strips() {
        let raw = "---CONDITIONS---\n[{\"name\":\"Flu\",\"risk\":\"Low\"}]\n---END CONDITIONS---\nRest and fluids.";
        let decoded = decode_reply(raw);
        assert_eq!(
            decoded.conditions,
            vec![Condition { name: "Flu".into(), risk: RiskLevel::Low }]
        );
        assert_eq!(decoded.text, "Rest and fluids.");
    }

    #[test]
    fn multiple_conditions_keep_order() {
        let raw = "---CONDITIONS---\n[{\"name\": \"Tension Headache\", \"risk\": \"Low\"}, {\"name\": \"Migraine\", \"risk\": \"Medium\"}]\n---END CONDITIONS---\nTell me more about the pain.";
        let decoded = decode_reply(raw);
        let names: Vec<&str> = decoded.conditions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Tension Headache", "Migraine"]);
        assert_eq!(decoded.text, "Tell me more about the pain.");
    }

    #[test]
    fn multiline_json_between_markers_is_accepted() {
        let raw = "---CONDITIONS---\n[\n  {\"name\": \"Flu\", \"risk\": \"Low\"}\n]\n---END CONDITIONS---\nRest up.";
        let decoded = decode_reply(raw);
        assert_eq!(decoded.conditions.len(), 1);
        assert_eq!(decoded.text, "Rest up.");
    }

    #[test]
    fn invalid_json_falls_back_to_full_raw_reply() {
        let raw = "---CONDITIONS---\n[{\"name\": \"Flu\", \"risk\":]\n---END CONDITIONS---\nRest and fluids.";
        let decoded = decode_reply(raw);
        assert!(decoded.conditions.is_empty());
        assert_eq!(decoded.text, raw, "block is not stripped when parsing fails");
    }

    #[test]
    fn unknown_risk_level_fails_the_whole_block() {
        let raw = "---CONDITIONS---\n[{\"name\":\"Flu\",\"risk\":\"Critical\"}]\n---END CONDITIONS---\nSee a doctor.";
        let decoded = decode_reply(raw);
        assert!(decoded.conditions.is_empty());
        assert_eq!(decoded.text, raw);
    }

    #[test]
    fn missing_closing_marker_is_plain_text() {
        let raw = "---CONDITIONS---\n[{\"name\":\"Flu\",\"risk\":\"Low\"}]\nRest and fluids.";
        let decoded = decode_reply(raw);
        assert!(decoded.conditions.is_empty());
        assert_eq!(decoded.text, raw);
    }

    #[test]
    fn first_block_wins_with_shortest_span() {
        let raw = "---CONDITIONS---\n[{\"name\":\"Flu\",\"risk\":\"Low\"}]\n---END CONDITIONS---\nmiddle\n---END CONDITIONS---";
        let decoded = decode_reply(raw);
        assert_eq!(decoded.conditions.len(), 1);
        assert_eq!(decoded.text, "middle\n---END CONDITIONS---");
    }

    #[test]
    fn surrounding_text_is_trimmed_after_strip() {
        let raw = "\n\n---CONDITIONS---\n[]\n---END CONDITIONS---\n\n  Stay hydrated.  \n";
        let decoded = decode_reply(raw);
        assert!(decoded.conditions.is_empty());
        assert_eq!(decoded.text, "Stay hydrated.");
    }

    #[test]
    fn empty_array_decodes_to_no_conditions_and_still_strips() {
        let raw = "---CONDITIONS---\n[]\n---END CONDITIONS---\nNothing concerning so far.";
        let decoded = decode_reply(raw);
        assert!(decoded.conditions.is_empty());
        assert_eq!(decoded.text, "Nothing concerning so far.");
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let conditions = vec![
            Condition { name: "Flu".into(), risk: RiskLevel::Low },
            Condition { name: "Pneumonia".into(), risk: RiskLevel::High },
        ];
        let raw = encode_reply(&conditions, "Please see a doctor soon.");
        let decoded = decode_reply(&raw);
        assert_eq!(decoded.conditions, conditions);
        assert_eq!(decoded.text, "Please see a doctor soon.");
    }
}
