//! Shared application state managed by Tauri.
//!
//! Wrapped in `Arc` at startup. Every screen-facing mutation goes through
//! a lock here; transitions are atomic from the frontend's perspective —
//! no partial update is ever visible. The only cross-component shared data
//! are the frozen profile (read-only after onboarding) and the message
//! thread (single writer: the chat command layer).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard};

use crate::composer::Composer;
use crate::conversation::ConversationThread;
use crate::models::UserProfile;
use crate::onboarding::ProfileWizard;
use crate::speech::{SpeechInput, UnsupportedSpeechInput};

/// The app's three screens, in forward navigation order. Transitions are
/// one-way; the gate → conversation hop is the only one driven by a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Login,
    Home,
    Chat,
}

/// Errors from AppState operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("A response is already being generated")]
    Busy,
    #[error("Complete onboarding before starting a conversation")]
    NoProfile,
    #[error("Onboarding is not in progress")]
    NoWizard,
}

pub struct AppState {
    screen: Mutex<Screen>,
    /// Onboarding wizard; `None` once the profile has been completed.
    wizard: Mutex<Option<ProfileWizard>>,
    /// Frozen profile, set exactly once at wizard completion.
    profile: RwLock<Option<UserProfile>>,
    thread: Mutex<ConversationThread>,
    composer: Mutex<Composer>,
    speech: Mutex<Box<dyn SpeechInput>>,
    /// Busy flag for the completion round trip. Sole mutual exclusion for
    /// submissions — a second attempt while set is refused, not queued.
    in_flight: AtomicBool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Mutex::new(Screen::Login),
            wizard: Mutex::new(Some(ProfileWizard::new())),
            profile: RwLock::new(None),
            thread: Mutex::new(ConversationThread::new()),
            composer: Mutex::new(Composer::new()),
            speech: Mutex::new(Box::new(UnsupportedSpeechInput)),
            in_flight: AtomicBool::new(false),
        }
    }

    // ── Navigation ──────────────────────────────────────────

    pub fn current_screen(&self) -> Screen {
        self.screen.lock().map(|s| *s).unwrap_or(Screen::Login)
    }

    /// Move forward to `target`. Backward transitions are ignored — the
    /// flow is one-way. Returns the screen in effect afterwards.
    pub fn advance_screen(&self, target: Screen) -> Result<Screen, StateError> {
        let mut current = self.screen.lock().map_err(|_| StateError::LockPoisoned)?;
        if target > *current {
            *current = target;
            tracing::info!(screen = ?target, "Screen advanced");
        }
        Ok(*current)
    }

    // ── Onboarding ──────────────────────────────────────────

    pub fn lock_wizard(
        &self,
    ) -> Result<MutexGuard<'_, Option<ProfileWizard>>, StateError> {
        self.wizard.lock().map_err(|_| StateError::LockPoisoned)
    }

    /// Freeze a completed profile: stores it, seeds the conversation with
    /// the welcome message, and retires the wizard so onboarding cannot be
    /// re-entered this session.
    pub fn complete_onboarding(&self, profile: UserProfile) -> Result<(), StateError> {
        {
            let mut slot = self.profile.write().map_err(|_| StateError::LockPoisoned)?;
            *slot = Some(profile.clone());
        }
        {
            let mut thread = self.lock_thread()?;
            thread.seed_welcome(&profile);
        }
        let mut wizard = self.lock_wizard()?;
        *wizard = None;
        tracing::info!("Onboarding complete, conversation seeded");
        Ok(())
    }

    // ── Profile ─────────────────────────────────────────────

    pub fn read_profile(
        &self,
    ) -> Result<RwLockReadGuard<'_, Option<UserProfile>>, StateError> {
        self.profile.read().map_err(|_| StateError::LockPoisoned)
    }

    /// Owned copy of the frozen profile, or `NoProfile` before onboarding
    /// completes.
    pub fn profile(&self) -> Result<UserProfile, StateError> {
        self.read_profile()?
            .clone()
            .ok_or(StateError::NoProfile)
    }

    pub fn has_profile(&self) -> bool {
        self.read_profile().map(|p| p.is_some()).unwrap_or(false)
    }

    // ── Conversation / composer ─────────────────────────────

    pub fn lock_thread(
        &self,
    ) -> Result<MutexGuard<'_, ConversationThread>, StateError> {
        self.thread.lock().map_err(|_| StateError::LockPoisoned)
    }

    pub fn lock_composer(&self) -> Result<MutexGuard<'_, Composer>, StateError> {
        self.composer.lock().map_err(|_| StateError::LockPoisoned)
    }

    pub fn lock_speech(
        &self,
    ) -> Result<MutexGuard<'_, Box<dyn SpeechInput>>, StateError> {
        self.speech.lock().map_err(|_| StateError::LockPoisoned)
    }

    // ── Submission busy flag ────────────────────────────────

    /// Claim the in-flight slot for one completion round trip.
    ///
    /// Refused (`Busy`) if a submission is already outstanding. The guard
    /// must be held for the whole round trip; dropping it — on success,
    /// failure, or panic unwind — releases the slot.
    pub fn begin_send(&self) -> Result<SendGuard<'_>, StateError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(StateError::Busy);
        }
        Ok(SendGuard { state: self })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII token for an in-flight completion request.
pub struct SendGuard<'a> {
    state: &'a AppState,
}

impl Drop for SendGuard<'_> {
    fn drop(&mut self) {
        self.state.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn profile() -> UserProfile {
        UserProfile {
            age: "34".into(),
            gender: Gender::Female,
            medical_history: vec![],
            additional_info: String::new(),
        }
    }

    #[test]
    fn new_state_starts_at_login_without_profile() {
        let state = AppState::new();
        assert_eq!(state.current_screen(), Screen::Login);
        assert!(!state.has_profile());
        assert!(!state.is_busy());
        assert!(state.lock_wizard().unwrap().is_some());
    }

    #[test]
    fn screen_advances_forward_only() {
        let state = AppState::new();
        assert_eq!(state.advance_screen(Screen::Home).unwrap(), Screen::Home);
        // Backward is ignored.
        assert_eq!(state.advance_screen(Screen::Login).unwrap(), Screen::Home);
        assert_eq!(state.advance_screen(Screen::Chat).unwrap(), Screen::Chat);
    }

    #[test]
    fn complete_onboarding_freezes_profile_and_seeds_thread() {
        let state = AppState::new();
        state.complete_onboarding(profile()).unwrap();

        assert!(state.has_profile());
        assert_eq!(state.profile().unwrap().age, "34");
        assert!(state.lock_wizard().unwrap().is_none(), "wizard is retired");

        let thread = state.lock_thread().unwrap();
        assert_eq!(thread.len(), 1);
        assert!(thread.messages()[0].text.contains("34"));
    }

    #[test]
    fn profile_before_onboarding_is_refused() {
        let state = AppState::new();
        assert!(matches!(state.profile(), Err(StateError::NoProfile)));
    }

    #[test]
    fn begin_send_refuses_second_submission() {
        let state = AppState::new();
        let guard = state.begin_send().unwrap();
        assert!(state.is_busy());
        assert!(matches!(state.begin_send(), Err(StateError::Busy)));
        drop(guard);
        assert!(!state.is_busy());
    }

    #[test]
    fn send_guard_releases_on_drop_even_after_refusal() {
        let state = AppState::new();
        {
            let _guard = state.begin_send().unwrap();
            let _ = state.begin_send(); // refused, must not clear the flag
            assert!(state.is_busy());
        }
        assert!(!state.is_busy());
        assert!(state.begin_send().is_ok());
    }

    #[test]
    fn state_error_messages_are_user_facing() {
        assert_eq!(
            StateError::Busy.to_string(),
            "A response is already being generated"
        );
        assert_eq!(
            StateError::NoProfile.to_string(),
            "Complete onboarding before starting a conversation"
        );
    }
}
