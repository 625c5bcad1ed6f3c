//! Chat flow — the single submission round trip.
//!
//! One outbound call per send, guarded by the state's busy flag: a second
//! attempt while a call is outstanding is refused, not queued. All
//! transport and decode failures are absorbed here and turned into a
//! synthetic assistant notice; nothing propagates past this module except
//! the (recoverable) busy/no-profile refusals.

use serde::{Deserialize, Serialize};

use crate::completion::{build_system_instruction, decode_reply, CompletionApi};
use crate::models::{Condition, Message};
use crate::state::{AppState, StateError};

/// Synthetic assistant notice appended when the round trip fails.
pub const FAILURE_NOTICE: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again.";

/// Run one exchange: take the composer draft, append it as a user message,
/// call the completion endpoint, and append the decoded (or synthetic)
/// assistant reply.
///
/// A blank draft is a silent no-op. Transport failures resolve to the
/// fixed failure notice rather than an error — the thread always gains
/// exactly one assistant message per accepted submission. If the thread
/// was reset while the call was in flight, the resolution is discarded
/// instead of being applied to the stale store.
pub fn run_exchange(state: &AppState, api: &dyn CompletionApi) -> Result<(), StateError> {
    let profile = state.profile()?;

    // Claim the in-flight slot before touching the draft so a refused
    // submission leaves the user's text intact.
    let _guard = state.begin_send()?;

    let text = {
        let mut composer = state.lock_composer()?;
        if composer.draft().trim().is_empty() {
            return Ok(());
        }
        composer.take()
    };

    let epoch = {
        let mut thread = state.lock_thread()?;
        let epoch = thread.epoch();
        thread.append(Message::user(text.clone()));
        epoch
    };

    let system = build_system_instruction(&profile);

    // No locks held across the network call.
    let assistant = match api.complete(&system, &text) {
        Ok(raw) => {
            let decoded = decode_reply(&raw);
            Message::assistant(decoded.text, decoded.conditions)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Completion round trip failed");
            Message::assistant(FAILURE_NOTICE, Vec::new())
        }
    };

    state.lock_thread()?.append_if_epoch(epoch, assistant);
    Ok(())
}

// ═══════════════════════════════════════════
// Frontend-facing views
// ═══════════════════════════════════════════

/// Message as serialized for the frontend (string IDs and roles).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageView {
    pub id: String,
    pub role: String,
    pub text: String,
    pub conditions: Vec<Condition>,
    pub timestamp: String,
}

impl From<&Message> for MessageView {
    fn from(m: &Message) -> Self {
        MessageView {
            id: m.id.to_string(),
            role: m.role.as_str().to_string(),
            text: m.text.clone(),
            conditions: m.conditions.clone(),
            timestamp: m.timestamp.to_string(),
        }
    }
}

/// Composer snapshot for the input row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerView {
    pub draft: String,
    pub selected_symptoms: Vec<String>,
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
