use serde::{Deserialize, Serialize};

/// Gender options offered by the onboarding wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::PreferNotToSay => "Prefer not to say",
        }
    }

    /// All options, in the order the wizard presents them.
    pub fn all() -> &'static [Gender] {
        &[
            Self::Male,
            Self::Female,
            Self::Other,
            Self::PreferNotToSay,
        ]
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            "Other" => Ok(Self::Other),
            "Prefer not to say" => Ok(Self::PreferNotToSay),
            other => Err(format!("Unknown gender option: {other}")),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health profile collected by the onboarding wizard.
///
/// Frozen at wizard completion and handed to the conversation layer exactly
/// once; never mutated afterward. A new profile requires a fresh session —
/// there is no edit path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age as entered — a digits-only string, non-blank.
    pub age: String,
    pub gender: Gender,
    /// Known conditions selected from the intake catalog, insertion order.
    pub medical_history: Vec<String>,
    /// Free-text notes (medications, surgeries, allergies, ...).
    pub additional_info: String,
}

impl UserProfile {
    /// Medical history as the comma-joined string embedded in prompts.
    pub fn history_joined(&self) -> String {
        self.medical_history.join(", ")
    }
}
