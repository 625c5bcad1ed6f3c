//! Message composer — the free-text draft plus the quick-symptom selection
//! that feeds it.
//!
//! Toggling a quick symptom ON folds its label into the draft (comma-joined
//! onto whatever is already typed); toggling OFF only removes it from the
//! selection — text the user may have edited is left alone. Submitting
//! takes the draft and clears both the draft and the selection.

/// Quick-symptom chips shown above the input.
pub const QUICK_SYMPTOMS: &[&str] = &[
    "Headache",
    "Fever",
    "Cough",
    "Fatigue",
    "Nausea",
    "Dizziness",
    "Chest Pain",
    "Shortness of Breath",
];

/// Input field character limit.
const MAX_DRAFT_CHARS: usize = 500;

/// Draft + quick-symptom selection for the next user message.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    draft: String,
    selected: Vec<String>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, symptom: &str) -> bool {
        self.selected.iter().any(|s| s == symptom)
    }

    /// Replace the draft wholesale. Used for typing and for interim speech
    /// transcripts alike. Truncated at the input limit on a char boundary.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = truncate_chars(text, MAX_DRAFT_CHARS);
    }

    /// Toggle a quick symptom. Newly selected labels are folded into the
    /// draft; deselecting leaves the draft untouched.
    pub fn toggle_symptom(&mut self, symptom: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == symptom) {
            self.selected.remove(pos);
            return;
        }
        self.selected.push(symptom.to_string());
        let folded = if self.draft.is_empty() {
            symptom.to_string()
        } else {
            format!("{}, {}", self.draft, symptom)
        };
        self.draft = truncate_chars(&folded, MAX_DRAFT_CHARS);
    }

    /// Take the trimmed draft for submission, clearing the draft and the
    /// quick-symptom selection together.
    pub fn take(&mut self) -> String {
        let text = self.draft.trim().to_string();
        self.draft.clear();
        self.selected.clear();
        text
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
