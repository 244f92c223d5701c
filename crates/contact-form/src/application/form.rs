//! ContactForm: the client-side form controller.
//!
//! Holds what the visitor typed, the per-field errors to show under each
//! input, and where the current submission stands.
//!
//! # Submission lifecycle
//!
//! ```text
//!            begin_submit()                     finish_submit(Ok)
//!  Idle ─────────────────────► Submitting ─────────────────────► Succeeded
//!   ▲  │ invalid input                  │ finish_submit(Err)        (fields cleared)
//!   │  └─► Idle + field errors          ▼
//!   └──────────────────────────── Failed(notice)
//!                                  (fields kept)
//! ```
//!
//! - While `Submitting`, [`ContactForm::is_submitting`] is `true`: the submit
//!   control is disabled and shows a busy indicator, and further
//!   `begin_submit` calls are ignored.
//! - Invalid input never reaches the network.
//! - A failure is terminal for that attempt.  The visitor resubmits by hand.

use contact_core::{validate, ContactSubmission, Field, FieldErrors};
use tracing::{debug, warn};

use super::api::{ContactApi, SubmitError};

/// User-facing notice shown after a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The relay accepted the message.
    Sent,
    /// The relay answered with an error status.
    Rejected,
    /// The relay could not be reached.
    Unreachable,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Sent => "Message envoyé avec succès !",
            Notice::Rejected => "Erreur lors de l'envoi. Réessayez plus tard.",
            Notice::Unreachable => "Erreur serveur. Réessayez plus tard.",
        }
    }
}

/// Where the form stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(Notice),
}

/// The contact form's state.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    errors: FieldErrors,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of `field`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Errors to display, one per invalid field.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// `true` while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// The success line shown under the form, if any.
    pub fn success_notice(&self) -> Option<&'static str> {
        match self.status {
            FormStatus::Succeeded => Some(Notice::Sent.message()),
            _ => None,
        }
    }

    /// The retry-later alert, if the last attempt failed.
    pub fn alert(&self) -> Option<&'static str> {
        match self.status {
            FormStatus::Failed(notice) => Some(notice.message()),
            _ => None,
        }
    }

    /// Starts a submission.
    ///
    /// Clears previous errors and notices, then validates every field.
    ///
    /// Returns the payload to send when the input is valid, and `None` when
    /// it is not (errors are stored) or when a submission is already in
    /// flight.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_submitting() {
            debug!("submit ignored: a submission is already in flight");
            return None;
        }

        self.errors.clear();
        self.status = FormStatus::Submitting;

        match validate(&self.name, &self.email, &self.message) {
            Ok(submission) => Some(submission),
            Err(errors) => {
                debug!(invalid = errors.len(), "contact form has invalid fields");
                self.errors = errors;
                self.status = FormStatus::Idle;
                None
            }
        }
    }

    /// Completes the submission started by [`ContactForm::begin_submit`].
    ///
    /// Success clears the form; failure keeps every value for resubmission.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = FormStatus::Succeeded;
            }
            Err(e) => {
                warn!("contact submission failed: {e}");
                let notice = match e {
                    SubmitError::Rejected { .. } => Notice::Rejected,
                    SubmitError::Network(_) => Notice::Unreachable,
                };
                self.status = FormStatus::Failed(notice);
            }
        }
    }

    /// Validates, sends at most one request through `api`, and records the
    /// result.
    pub async fn submit<A>(&mut self, api: &A) -> FormStatus
    where
        A: ContactApi + ?Sized,
    {
        if let Some(submission) = self.begin_submit() {
            let result = api.post_contact(&submission).await;
            self.finish_submit(result);
        }
        self.status
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::MockContactApi;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, name);
        form.set_field(Field::Email, email);
        form.set_field(Field::Message, message);
        form
    }

    fn awa() -> ContactForm {
        filled("Awa", "awa@example.com", "Bonjour, je suis intéressée.")
    }

    fn api_never_called() -> MockContactApi {
        let mut api = MockContactApi::new();
        api.expect_post_contact().times(0);
        api
    }

    #[tokio::test]
    async fn test_short_name_reports_error_without_network_call() {
        // Arrange
        let mut form = filled("A", "awa@example.com", "Bonjour");
        let api = api_never_called();

        // Act
        let status = form.submit(&api).await;

        // Assert
        assert_eq!(status, FormStatus::Idle);
        assert_eq!(form.errors().get(Field::Name), Some("Le nom est requis"));
    }

    #[tokio::test]
    async fn test_bad_email_reports_error_without_network_call() {
        let mut form = filled("Awa", "awa@", "Bonjour");
        let api = api_never_called();

        form.submit(&api).await;

        assert_eq!(form.errors().get(Field::Email), Some("Email invalide"));
    }

    #[tokio::test]
    async fn test_short_message_reports_error_without_network_call() {
        let mut form = filled("Awa", "awa@example.com", "Hi");
        let api = api_never_called();

        form.submit(&api).await;

        assert_eq!(
            form.errors().get(Field::Message),
            Some("Le message est trop court")
        );
    }

    #[tokio::test]
    async fn test_valid_form_posts_exactly_once_with_the_three_fields() {
        let mut api = MockContactApi::new();
        api.expect_post_contact()
            .withf(|s: &ContactSubmission| {
                s.name == "Awa"
                    && s.email == "awa@example.com"
                    && s.message == "Bonjour, je suis intéressée."
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut form = awa();

        let status = form.submit(&api).await;

        assert_eq!(status, FormStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_success_clears_fields_and_shows_notice() {
        let mut api = MockContactApi::new();
        api.expect_post_contact().returning(|_| Ok(()));
        let mut form = awa();

        form.submit(&api).await;

        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.success_notice(), Some("Message envoyé avec succès !"));
        assert_eq!(form.alert(), None);
    }

    #[tokio::test]
    async fn test_rejection_keeps_values_and_shows_alert() {
        let mut api = MockContactApi::new();
        api.expect_post_contact()
            .returning(|_| Err(SubmitError::Rejected { status: 500 }));
        let mut form = awa();

        let status = form.submit(&api).await;

        assert_eq!(status, FormStatus::Failed(Notice::Rejected));
        assert_eq!(form.value(Field::Name), "Awa");
        assert_eq!(form.value(Field::Email), "awa@example.com");
        assert_eq!(
            form.alert(),
            Some("Erreur lors de l'envoi. Réessayez plus tard.")
        );
        assert_eq!(form.success_notice(), None);
    }

    #[tokio::test]
    async fn test_network_failure_keeps_values_and_shows_server_alert() {
        let mut api = MockContactApi::new();
        api.expect_post_contact()
            .returning(|_| Err(SubmitError::Network("connection refused".to_string())));
        let mut form = awa();

        let status = form.submit(&api).await;

        assert_eq!(status, FormStatus::Failed(Notice::Unreachable));
        assert_eq!(form.value(Field::Message), "Bonjour, je suis intéressée.");
        assert_eq!(form.alert(), Some("Erreur serveur. Réessayez plus tard."));
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_sends_again() {
        // Arrange: first attempt fails, second succeeds
        let mut api = MockContactApi::new();
        let mut seq = mockall::Sequence::new();
        api.expect_post_contact()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(SubmitError::Rejected { status: 500 }));
        api.expect_post_contact()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let mut form = awa();

        // Act
        let first = form.submit(&api).await;
        let second = form.submit(&api).await;

        // Assert
        assert_eq!(first, FormStatus::Failed(Notice::Rejected));
        assert_eq!(second, FormStatus::Succeeded);
    }

    #[test]
    fn test_begin_submit_marks_form_busy() {
        let mut form = awa();

        let payload = form.begin_submit();

        assert!(payload.is_some());
        assert!(form.is_submitting());
        assert_eq!(form.status(), FormStatus::Submitting);
    }

    #[test]
    fn test_begin_submit_is_ignored_while_in_flight() {
        let mut form = awa();
        assert!(form.begin_submit().is_some());

        // A second click while busy does nothing.
        assert!(form.begin_submit().is_none());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_begin_submit_clears_previous_errors() {
        let mut form = filled("A", "awa@example.com", "Bonjour");
        assert!(form.begin_submit().is_none());
        assert!(!form.errors().is_empty());

        form.set_field(Field::Name, "Awa");
        assert!(form.begin_submit().is_some());

        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_begin_submit_reports_all_invalid_fields() {
        let mut form = ContactForm::new();

        assert!(form.begin_submit().is_none());

        assert_eq!(form.errors().len(), 3);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_begin_submit_clears_previous_success() {
        let mut form = awa();
        form.begin_submit();
        form.finish_submit(Ok(()));
        assert!(form.success_notice().is_some());

        // Empty form now: validation fails, success notice is gone.
        form.begin_submit();

        assert_eq!(form.success_notice(), None);
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::Sent.message(), "Message envoyé avec succès !");
        assert_eq!(
            Notice::Rejected.message(),
            "Erreur lors de l'envoi. Réessayez plus tard."
        );
        assert_eq!(
            Notice::Unreachable.message(),
            "Erreur serveur. Réessayez plus tard."
        );
    }
}
