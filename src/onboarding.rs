//! Onboarding wizard — the 4-step intake flow that produces a `UserProfile`.
//!
//! Steps:
//! 1. age (required, digits only)
//! 2. gender (required, fixed option set)
//! 3. medical history (optional, toggled from a fixed catalog)
//! 4. additional free-text info (optional)
//!
//! Advancing past step 4 is terminal: the wizard emits the frozen profile
//! and refuses all further operations. Going back never clears anything.

use crate::models::{Gender, UserProfile};

/// Catalog of known conditions offered at step 3.
pub const MEDICAL_CONDITIONS: &[&str] = &[
    "Diabetes",
    "Hypertension",
    "Heart Disease",
    "Asthma",
    "Allergies",
    "Depression",
    "Anxiety",
    "Arthritis",
    "Migraine",
    "COPD",
    "Kidney Disease",
    "Liver Disease",
    "Cancer History",
    "Stroke History",
];

/// Age input keeps at most this many digits.
const MAX_AGE_DIGITS: usize = 3;

/// First and last wizard steps.
pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 4;

/// Errors surfaced to the screen while stepping through the wizard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Please enter your age to continue")]
    AgeRequired,
    #[error("Please select a gender option to continue")]
    GenderRequired,
    #[error("Onboarding is already complete")]
    AlreadyCompleted,
}

/// Result of a successful `advance()`.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Moved to the given step (2..=4).
    Advanced(u8),
    /// Terminal transition from step 4 — the completed, frozen profile.
    Completed(UserProfile),
}

/// The wizard state machine. One instance per app session; consumed
/// conceptually at completion (the owning state stops presenting it).
#[derive(Debug, Clone)]
pub struct ProfileWizard {
    step: u8,
    age: String,
    gender: Option<Gender>,
    medical_history: Vec<String>,
    additional_info: String,
    completed: bool,
}

impl ProfileWizard {
    pub fn new() -> Self {
        Self {
            step: FIRST_STEP,
            age: String::new(),
            gender: None,
            medical_history: Vec::new(),
            additional_info: String::new(),
            completed: false,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn medical_history(&self) -> &[String] {
        &self.medical_history
    }

    pub fn additional_info(&self) -> &str {
        &self.additional_info
    }

    /// Set the age field. Mirrors the numeric keypad: non-digits are
    /// dropped and input is truncated to three digits.
    pub fn set_age(&mut self, value: &str) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.age = value
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(MAX_AGE_DIGITS)
            .collect();
        Ok(())
    }

    pub fn set_gender(&mut self, gender: Gender) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.gender = Some(gender);
        Ok(())
    }

    pub fn set_additional_info(&mut self, value: &str) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.additional_info = value.to_string();
        Ok(())
    }

    /// Toggle a condition in the medical history: absent → added at the
    /// end, present → removed. Step is unaffected.
    pub fn toggle_condition(&mut self, name: &str) -> Result<(), WizardError> {
        self.ensure_open()?;
        if let Some(pos) = self.medical_history.iter().position(|c| c == name) {
            self.medical_history.remove(pos);
        } else {
            self.medical_history.push(name.to_string());
        }
        Ok(())
    }

    /// Whether the current step's completion predicate holds.
    /// Steps 3 and 4 are optional and always satisfiable.
    pub fn can_advance(&self) -> bool {
        match self.step {
            1 => !self.age.trim().is_empty(),
            2 => self.gender.is_some(),
            _ => true,
        }
    }

    /// Move forward one step, or complete the wizard from step 4.
    ///
    /// Refused (with the step's validation error) when the current step's
    /// predicate does not hold; the step is unchanged in that case.
    pub fn advance(&mut self) -> Result<StepOutcome, WizardError> {
        self.ensure_open()?;
        match self.step {
            1 if self.age.trim().is_empty() => Err(WizardError::AgeRequired),
            2 if self.gender.is_none() => Err(WizardError::GenderRequired),
            LAST_STEP => {
                self.completed = true;
                Ok(StepOutcome::Completed(UserProfile {
                    age: self.age.clone(),
                    // Predicate at step 2 guarantees a selection exists.
                    gender: self.gender.expect("gender set before step 2 advance"),
                    medical_history: self.medical_history.clone(),
                    additional_info: self.additional_info.clone(),
                }))
            }
            _ => {
                self.step += 1;
                Ok(StepOutcome::Advanced(self.step))
            }
        }
    }

    /// Move back one step. A no-op at step 1. Never clears entered data.
    pub fn retreat(&mut self) -> Result<u8, WizardError> {
        self.ensure_open()?;
        if self.step > FIRST_STEP {
            self.step -= 1;
        }
        Ok(self.step)
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.completed {
            Err(WizardError::AlreadyCompleted)
        } else {
            Ok(())
        }
    }
}

impl Default for ProfileWizard {
    fn default() -> Self {
        Self::new()
    }
}
