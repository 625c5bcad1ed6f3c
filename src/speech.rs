//! Speech-to-text input contract.
//!
//! The recognizer is a platform capability, polymorphic over available /
//! unavailable. While listening, each interim transcript replaces the
//! composer draft wholesale (it is a running transcript of the whole
//! utterance, not a delta) until recognition stops. When the platform has
//! no recognizer, starting reports a notice and the draft is untouched.

use std::sync::mpsc::Sender;

/// Notice surfaced when no recognizer is available.
pub const UNAVAILABLE_NOTICE: &str = "Speech recognition is not supported on this device.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    #[error("{}", UNAVAILABLE_NOTICE)]
    Unavailable,
}

/// Platform speech recognizer seam.
pub trait SpeechInput: Send {
    fn is_available(&self) -> bool;

    /// Begin recognition. Interim transcripts are delivered through
    /// `transcript_tx`; each one is the full utterance so far and replaces
    /// the draft, not appends to it.
    fn start(&mut self, transcript_tx: Sender<String>) -> Result<(), SpeechError>;

    /// Stop recognition. Idempotent; safe to call when not listening.
    fn stop(&mut self);
}

/// Placeholder recognizer for platforms without speech support.
pub struct UnsupportedSpeechInput;

impl SpeechInput for UnsupportedSpeechInput {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&mut self, _transcript_tx: Sender<String>) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }

    fn stop(&mut self) {}
}

/// Apply drained interim transcripts to a composer draft — each replaces
/// the draft wholesale.
pub fn apply_transcripts(
    composer: &mut crate::composer::Composer,
    transcripts: impl IntoIterator<Item = String>,
) {
    for transcript in transcripts {
        composer.set_draft(&transcript);
    }
}
