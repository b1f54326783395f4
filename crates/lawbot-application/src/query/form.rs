//! Editable state of the query form.

use lawbot_core::error::Result;
use lawbot_core::query::{DocumentAttachment, Jurisdiction, Language, QuerySubmission};
use lawbot_core::user::UserProfile;
use std::path::Path;

/// What the user has typed and picked so far.
///
/// Turned into a [`QuerySubmission`] on submit; the form itself survives
/// the submission so the user can refine and resubmit.
#[derive(Debug, Clone, Default)]
pub struct QueryForm {
    question: String,
    language: Language,
    jurisdiction: Jurisdiction,
    attachment: Option<DocumentAttachment>,
    audio_response: bool,
}

impl QueryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form prefilled with the jurisdiction from the user's profile.
    pub fn for_user(user: &UserProfile) -> Self {
        Self {
            jurisdiction: Jurisdiction::from_profile(user.state.as_deref(), user.city.as_deref()),
            ..Self::default()
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    pub fn clear_question(&mut self) {
        self.question.clear();
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn jurisdiction(&self) -> &Jurisdiction {
        &self.jurisdiction
    }

    /// Selects a state; any selected city is cleared.
    pub fn select_state(&mut self, state: Option<&str>) {
        self.jurisdiction.select_state(state);
    }

    pub fn select_city(&mut self, city: &str) -> Result<()> {
        self.jurisdiction.select_city(city)
    }

    pub fn attachment(&self) -> Option<&DocumentAttachment> {
        self.attachment.as_ref()
    }

    /// Attaches a document, replacing any previous one.
    pub fn attach(&mut self, document: DocumentAttachment) {
        tracing::debug!("[QueryForm] Attached {}", document.file_name());
        self.attachment = Some(document);
    }

    /// Reads and attaches a document from disk.
    pub fn attach_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let document = DocumentAttachment::from_path(path)?;
        self.attach(document);
        Ok(())
    }

    pub fn remove_attachment(&mut self) -> Option<DocumentAttachment> {
        self.attachment.take()
    }

    pub fn audio_response(&self) -> bool {
        self.audio_response
    }

    pub fn set_audio_response(&mut self, enabled: bool) {
        self.audio_response = enabled;
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.question.trim().is_empty() || self.attachment.is_some()
    }

    pub fn to_submission(&self) -> QuerySubmission {
        QuerySubmission {
            question: self.question.clone(),
            language: self.language,
            jurisdiction: self.jurisdiction.clone(),
            attachment: self.attachment.clone(),
            audio_response: self.audio_response,
        }
    }
}
