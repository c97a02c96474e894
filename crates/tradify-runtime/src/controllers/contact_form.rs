use tradify_engine::{MailMessage, compose_contact_message, mailto_uri};
use tradify_types::{ContactDraft, ContactField};

use crate::host::Host;

pub const ACKNOWLEDGMENT: &str = "Thank you for your message!";
pub const ACKNOWLEDGMENT_DETAIL: &str = "We'll get back to you as soon as possible.";

/// What was handed to the mail client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub message: MailMessage,
    pub uri: String,
}

pub struct ContactForm {
    draft: ContactDraft,
    recipient: String,
}

impl ContactForm {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            draft: ContactDraft::default(),
            recipient: recipient.into(),
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn is_submitted(&self) -> bool {
        self.draft.submitted
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: ContactField, c: char) {
        self.draft.field_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: ContactField) {
        self.draft.field_mut(field).pop();
    }

    /// Build the mailto handoff and pass it to the host's mail handler.
    ///
    /// The form is marked submitted whether or not the handler could be
    /// launched; there is no way to learn whether the mail was sent.
    pub fn submit(&mut self, host: &mut dyn Host) -> ContactSubmission {
        let submission = self.prepare();
        if let Err(err) = host.open_external(&submission.uri) {
            tracing::warn!(error = %err, "mail client handoff failed");
        }
        self.draft.submitted = true;
        tracing::debug!(recipient = %self.recipient, "contact form submitted");
        submission
    }

    /// The submission `submit` would hand off, without side effects
    pub fn prepare(&self) -> ContactSubmission {
        let message = compose_contact_message(&self.draft);
        let uri = mailto_uri(&self.recipient, &message);
        ContactSubmission { message, uri }
    }
}
