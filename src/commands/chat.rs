//! Conversation screen — Tauri IPC commands.
//!
//! Commands:
//! - `send_message`: submit the composer draft, one completion round trip
//! - `get_messages`: full thread for rendering
//! - `set_draft` / `toggle_quick_symptom` / `composer_state`: input row
//! - `quick_symptoms`: static chip catalog
//! - `is_generating`: busy flag for disabling the send control
//! - `emergency_available` / `place_emergency_call`: High-risk escalation
//! - `start_listening` / `stop_listening`: speech input contract

use std::sync::Arc;

use tauri::State;
use tauri_plugin_shell::ShellExt;

use crate::chat::{self, ComposerView, MessageView};
use crate::completion::CompletionClient;
use crate::composer::QUICK_SYMPTOMS;
use crate::config;
use crate::emergency;
use crate::speech;
use crate::state::AppState;

/// Submit the current draft. Failures of the round trip itself are
/// absorbed into the thread as the synthetic notice; only local refusals
/// (busy, onboarding incomplete) surface as errors.
#[tauri::command]
pub fn send_message(state: State<'_, Arc<AppState>>) -> Result<(), String> {
    let client = CompletionClient::default_remote();
    chat::run_exchange(&state, &client).map_err(|e| e.to_string())
}

/// All messages in submission order.
#[tauri::command]
pub fn get_messages(state: State<'_, Arc<AppState>>) -> Result<Vec<MessageView>, String> {
    let thread = state.lock_thread().map_err(|e| e.to_string())?;
    Ok(thread.messages().iter().map(MessageView::from).collect())
}

/// Replace the draft text (typing keystrokes or an interim transcript).
#[tauri::command]
pub fn set_draft(text: String, state: State<'_, Arc<AppState>>) -> Result<(), String> {
    let mut composer = state.lock_composer().map_err(|e| e.to_string())?;
    composer.set_draft(&text);
    Ok(())
}

/// Toggle a quick-symptom chip; returns the updated input row state.
#[tauri::command]
pub fn toggle_quick_symptom(
    name: String,
    state: State<'_, Arc<AppState>>,
) -> Result<ComposerView, String> {
    let mut composer = state.lock_composer().map_err(|e| e.to_string())?;
    composer.toggle_symptom(&name);
    Ok(ComposerView {
        draft: composer.draft().to_string(),
        selected_symptoms: composer.selected().to_vec(),
    })
}

/// Current input row state.
#[tauri::command]
pub fn composer_state(state: State<'_, Arc<AppState>>) -> Result<ComposerView, String> {
    let composer = state.lock_composer().map_err(|e| e.to_string())?;
    Ok(ComposerView {
        draft: composer.draft().to_string(),
        selected_symptoms: composer.selected().to_vec(),
    })
}

/// Quick-symptom chip catalog.
#[tauri::command]
pub fn quick_symptoms() -> Vec<String> {
    QUICK_SYMPTOMS.iter().map(|s| s.to_string()).collect()
}

/// Whether a completion round trip is outstanding (send control disabled).
#[tauri::command]
pub fn is_generating(state: State<'_, Arc<AppState>>) -> bool {
    state.is_busy()
}

/// Whether the latest assistant reply warrants offering the emergency call.
#[tauri::command]
pub fn emergency_available(state: State<'_, Arc<AppState>>) -> Result<bool, String> {
    let thread = state.lock_thread().map_err(|e| e.to_string())?;
    Ok(thread
        .latest_assistant()
        .is_some_and(emergency::requires_emergency))
}

/// Place the emergency call through the platform dialer. Fire-and-forget:
/// the dialer's outcome is not consumed, only logged.
#[tauri::command]
pub fn place_emergency_call(app: tauri::AppHandle) {
    let url = config::emergency_dial_url();
    tracing::warn!(%url, "Emergency call requested");
    if let Err(e) = app.shell().open(&url, None) {
        tracing::warn!(error = %e, "Failed to open dialer");
    }
}

/// Start speech recognition. Interim transcripts replace the draft until
/// stopped; on platforms without a recognizer this returns the fixed
/// notice and leaves the draft untouched.
#[tauri::command]
pub fn start_listening(state: State<'_, Arc<AppState>>) -> Result<(), String> {
    let (tx, rx) = std::sync::mpsc::channel();
    {
        let mut recognizer = state.lock_speech().map_err(|e| e.to_string())?;
        recognizer.start(tx).map_err(|e| e.to_string())?;
    }
    let mut composer = state.lock_composer().map_err(|e| e.to_string())?;
    speech::apply_transcripts(&mut composer, rx.try_iter());
    Ok(())
}

/// Stop speech recognition. Safe to call when not listening.
#[tauri::command]
pub fn stop_listening(state: State<'_, Arc<AppState>>) -> Result<(), String> {
    let mut recognizer = state.lock_speech().map_err(|e| e.to_string())?;
    recognizer.stop();
    Ok(())
}
