//! Conversation thread — the append-only message sequence rendered by the
//! chat screen.
//!
//! Messages are never edited or removed once appended, and appear in
//! submission order (each user message precedes the assistant message that
//! answers it). The thread is seeded exactly once, when the onboarding
//! profile is completed, with a synthesized welcome message — the only
//! assistant message that does not come from a network round trip.

use crate::models::{Message, UserProfile};

/// Append-only conversation store with a reset epoch.
///
/// The epoch guards against applying a late completion resolution to a
/// store that was reset while the request was in flight: callers capture
/// the epoch before the round trip and append through
/// [`ConversationThread::append_if_epoch`].
#[derive(Debug, Default)]
pub struct ConversationThread {
    messages: Vec<Message>,
    epoch: u64,
}

impl ConversationThread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Append to the end of the sequence. Existing entries are never
    /// reordered or mutated.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append only if the thread has not been reset since `epoch` was
    /// captured. Returns whether the message was applied.
    pub fn append_if_epoch(&mut self, epoch: u64, message: Message) -> bool {
        if epoch != self.epoch {
            tracing::debug!("Discarding stale completion resolution (thread was reset)");
            return false;
        }
        self.append(message);
        true
    }

    /// Reset the thread for a freshly completed profile: clears any prior
    /// content, bumps the epoch, and seeds the welcome message.
    pub fn seed_welcome(&mut self, profile: &UserProfile) {
        self.messages.clear();
        self.epoch += 1;
        self.append(Message::assistant(welcome_text(profile), Vec::new()));
    }

    /// The most recent assistant message, if any.
    pub fn latest_assistant(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == crate::models::MessageRole::Assistant)
    }
}

/// Greeting interpolating the profile's age.
fn welcome_text(profile: &UserProfile) -> String {
    format!(
        "Welcome to DiagnoAide! I see you're {} years old. I'll keep your \
         medical history in mind during our conversation. How can I help you today?",
        profile.age
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Condition, Gender, MessageRole, RiskLevel};

    fn profile() -> UserProfile {
        UserProfile {
            age: "34".into(),
            gender: Gender::Female,
            medical_history: vec![],
            additional_info: String::new(),
        }
    }

    #[test]
    fn new_thread_is_empty() {
        let thread = ConversationThread::new();
        assert!(thread.is_empty());
        assert_eq!(thread.epoch(), 0);
    }

    #[test]
    fn seeding_yields_single_assistant_welcome_with_age() {
        let mut thread = ConversationThread::new();
        thread.seed_welcome(&profile());

        assert_eq!(thread.len(), 1);
        let msg = &thread.messages()[0];
        assert_eq!(msg.role, MessageRole::Assistant);
        assert!(msg.text.contains("34"));
        assert!(msg.conditions.is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let mut thread = ConversationThread::new();
        thread.append(Message::user("first"));
        thread.append(Message::assistant("second", vec![]));
        thread.append(Message::user("third"));

        let texts: Vec<&str> = thread.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn append_if_epoch_applies_when_current() {
        let mut thread = ConversationThread::new();
        let epoch = thread.epoch();
        assert!(thread.append_if_epoch(epoch, Message::user("hello")));
        assert_eq!(thread.len(), 1);
    }

    #[test]
    fn append_if_epoch_discards_after_reset() {
        let mut thread = ConversationThread::new();
        let epoch = thread.epoch();

        // Thread reset while a request was notionally in flight.
        thread.seed_welcome(&profile());

        assert!(!thread.append_if_epoch(epoch, Message::assistant("late", vec![])));
        assert_eq!(thread.len(), 1, "only the welcome message remains");
    }

    #[test]
    fn latest_assistant_skips_trailing_user_messages() {
        let mut thread = ConversationThread::new();
        thread.append(Message::assistant(
            "reply",
            vec![Condition { name: "Flu".into(), risk: RiskLevel::Low }],
        ));
        thread.append(Message::user("follow-up"));

        let latest = thread.latest_assistant().unwrap();
        assert_eq!(latest.text, "reply");
    }

    #[test]
    fn latest_assistant_none_on_empty_thread() {
        let thread = ConversationThread::new();
        assert!(thread.latest_assistant().is_none());
    }
}
