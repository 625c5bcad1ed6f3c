use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Risk level attached to a candidate condition.
///
/// Wire spellings are exactly `"Low"` / `"Medium"` / `"High"` — both in the
/// JSON the model embeds in its replies and in what we hand the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// A candidate condition named by the assistant, with its risk level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub risk: RiskLevel,
}

/// Who authored a message. The per-request system instruction is never
/// stored in the thread, so there is no system variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One entry in the conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    /// Display text, already stripped of any conditions framing.
    pub text: String,
    /// Candidate conditions decoded from the reply. Empty on user messages
    /// and on assistant replies without a parsable conditions block.
    pub conditions: Vec<Condition>,
    pub timestamp: NaiveDateTime,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::User,
            text: text.into(),
            conditions: Vec::new(),
            timestamp: chrono::Local::now().naive_local(),
        }
    }

    pub fn assistant(text: impl Into<String>, conditions: Vec<Condition>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::Assistant,
            text: text.into(),
            conditions,
            timestamp: chrono::Local::now().naive_local(),
        }
    }

    /// Highest risk level among this message's conditions.
    pub fn highest_risk(&self) -> Option<RiskLevel> {
        self.conditions.iter().map(|c| c.risk).max()
    }
}
