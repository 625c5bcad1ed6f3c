//! Onboarding modal — Tauri IPC commands.
//!
//! Commands:
//! - `onboarding_state`: current step + entered values for rendering
//! - `set_onboarding_age` / `set_onboarding_gender` / `set_onboarding_info`
//! - `toggle_medical_condition`: step-3 history selection
//! - `advance_onboarding`: next step, or completion from step 4
//! - `retreat_onboarding`: previous step (data preserved)
//! - `medical_conditions` / `gender_options`: static catalogs

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::models::Gender;
use crate::onboarding::{StepOutcome, MEDICAL_CONDITIONS};
use crate::state::{AppState, StateError};

/// Wizard snapshot for the modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingView {
    pub step: u8,
    pub age: String,
    pub gender: Option<String>,
    pub medical_history: Vec<String>,
    pub additional_info: String,
    pub can_advance: bool,
}

/// Result of an `advance_onboarding` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingAdvance {
    /// True exactly once — on the terminal transition from step 4.
    pub completed: bool,
    pub step: u8,
}

#[tauri::command]
pub fn onboarding_state(state: State<'_, Arc<AppState>>) -> Result<OnboardingView, String> {
    let guard = state.lock_wizard().map_err(|e| e.to_string())?;
    let wizard = guard.as_ref().ok_or_else(|| StateError::NoWizard.to_string())?;
    Ok(OnboardingView {
        step: wizard.step(),
        age: wizard.age().to_string(),
        gender: wizard.gender().map(|g| g.as_str().to_string()),
        medical_history: wizard.medical_history().to_vec(),
        additional_info: wizard.additional_info().to_string(),
        can_advance: wizard.can_advance(),
    })
}

#[tauri::command]
pub fn set_onboarding_age(
    value: String,
    state: State<'_, Arc<AppState>>,
) -> Result<(), String> {
    with_wizard(&state, |w| w.set_age(&value).map_err(|e| e.to_string()))
}

#[tauri::command]
pub fn set_onboarding_gender(
    value: String,
    state: State<'_, Arc<AppState>>,
) -> Result<(), String> {
    let gender: Gender = value.parse()?;
    with_wizard(&state, |w| w.set_gender(gender).map_err(|e| e.to_string()))
}

#[tauri::command]
pub fn set_onboarding_info(
    value: String,
    state: State<'_, Arc<AppState>>,
) -> Result<(), String> {
    with_wizard(&state, |w| {
        w.set_additional_info(&value).map_err(|e| e.to_string())
    })
}

#[tauri::command]
pub fn toggle_medical_condition(
    name: String,
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<String>, String> {
    with_wizard(&state, |w| {
        w.toggle_condition(&name).map_err(|e| e.to_string())?;
        Ok(w.medical_history().to_vec())
    })
}

/// Advance one step. On the terminal step this freezes the profile, seeds
/// the conversation with the welcome message, and retires the wizard.
#[tauri::command]
pub fn advance_onboarding(
    state: State<'_, Arc<AppState>>,
) -> Result<OnboardingAdvance, String> {
    // The wizard lock is released before completing so the completion path
    // can retire the wizard without re-entrancy.
    let outcome = {
        let mut guard = state.lock_wizard().map_err(|e| e.to_string())?;
        let wizard = guard.as_mut().ok_or_else(|| StateError::NoWizard.to_string())?;
        wizard.advance().map_err(|e| e.to_string())?
    };

    match outcome {
        StepOutcome::Advanced(step) => Ok(OnboardingAdvance { completed: false, step }),
        StepOutcome::Completed(profile) => {
            state.complete_onboarding(profile).map_err(|e| e.to_string())?;
            Ok(OnboardingAdvance { completed: true, step: crate::onboarding::LAST_STEP })
        }
    }
}

#[tauri::command]
pub fn retreat_onboarding(state: State<'_, Arc<AppState>>) -> Result<u8, String> {
    with_wizard(&state, |w| w.retreat().map_err(|e| e.to_string()))
}

/// Catalog of selectable conditions for step 3.
#[tauri::command]
pub fn medical_conditions() -> Vec<String> {
    MEDICAL_CONDITIONS.iter().map(|c| c.to_string()).collect()
}

/// Gender options for step 2, in presentation order.
#[tauri::command]
pub fn gender_options() -> Vec<String> {
    Gender::all().iter().map(|g| g.as_str().to_string()).collect()
}

fn with_wizard<T>(
    state: &AppState,
    f: impl FnOnce(&mut crate::onboarding::ProfileWizard) -> Result<T, String>,
) -> Result<T, String> {
    let mut guard = state.lock_wizard().map_err(|e| e.to_string())?;
    let wizard = guard.as_mut().ok_or_else(|| StateError::NoWizard.to_string())?;
    f(wizard)
}
