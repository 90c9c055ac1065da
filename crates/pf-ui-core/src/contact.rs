//! Simulated contact form submission.
//!
//! `Idle → Sending` on submit, `Sending → Idle` when the simulated round trip
//! finishes. There is no failure path.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Labels;
use crate::error::UiError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactForm {
    #[default]
    Idle,
    Sending(ContactSubmission),
}

impl ContactForm {
    pub fn submit(&mut self, submission: ContactSubmission) -> Result<(), UiError> {
        if self.is_sending() {
            return Err(UiError::SubmissionInFlight);
        }
        debug!(name = %submission.name, "contact submission started");
        *self = ContactForm::Sending(submission);
        Ok(())
    }

    /// Finish the in-flight submission. `None` when nothing was sending.
    pub fn finish(&mut self) -> Option<ContactSubmission> {
        match std::mem::take(self) {
            ContactForm::Sending(submission) => {
                info!(
                    name = %submission.name,
                    email = %submission.email,
                    "contact submission completed"
                );
                Some(submission)
            }
            ContactForm::Idle => None,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, ContactForm::Sending(_))
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_sending()
    }

    pub fn submit_label<'a>(&self, labels: &'a Labels) -> &'a str {
        if self.is_sending() {
            &labels.sending
        } else {
            &labels.send
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::timeline::Timeline;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "Hello".to_owned(),
        }
    }

    #[test]
    fn submit_disables_until_finish() {
        let labels = Labels::default();
        let mut form = ContactForm::default();
        assert!(!form.submit_disabled());
        assert_eq!(form.submit_label(&labels), "Send Message");

        form.submit(filled()).unwrap();
        assert!(form.submit_disabled());
        assert_eq!(form.submit_label(&labels), "Sending...");

        assert_eq!(form.finish(), Some(filled()));
        assert!(!form.submit_disabled());
        assert_eq!(form.submit_label(&labels), "Send Message");
    }

    #[test]
    fn re_enables_exactly_once_even_with_empty_fields() {
        let config = SiteConfig::default();
        let mut form = ContactForm::default();
        let mut tl = Timeline::new();

        form.submit(ContactSubmission::default()).unwrap();
        tl.schedule(config.submit_delay_ms, ());

        assert!(tl.advance(999).is_empty());
        assert!(form.submit_disabled());

        let mut enabled = 0;
        for () in tl.advance(1) {
            if form.finish().is_some() {
                enabled += 1;
            }
        }
        assert_eq!(enabled, 1);
        assert_eq!(tl.now(), 1_000);
        assert_eq!(form.finish(), None);
    }

    #[test]
    fn second_submit_while_sending_is_rejected() {
        let mut form = ContactForm::default();
        form.submit(filled()).unwrap();

        let err = form.submit(ContactSubmission::default()).unwrap_err();
        assert_eq!(err, UiError::SubmissionInFlight);
        assert_eq!(form, ContactForm::Sending(filled()));
    }
}
