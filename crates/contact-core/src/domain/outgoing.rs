//! Mapping from a contact submission to the email sent to the company inbox.
//!
//! ```text
//! ContactSubmission { name, email, message }
//!         │  OutgoingEmail::compose(&submission, inbox)
//!         ▼
//! From:      "name" <email>
//! To:        inbox
//! Reply-To:  email
//! Subject:   GD Consulting - Contact Form Submission from name
//! Body:      message + "From: name (email)" footer
//! ```
//!
//! Replies from the inbox therefore go straight to the visitor, not back to
//! the relay.

use super::submission::ContactSubmission;

/// Subject prefix; the submitter's name is appended.
pub const SUBJECT_PREFIX: &str = "GD Consulting - Contact Form Submission from ";

/// A fully addressed email, independent of any mail library.
///
/// Mail transports turn this into their own message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Display name in the `From` header (the submitter's name).
    pub from_name: String,
    /// Address in the `From` header (the submitter's email).
    pub from_address: String,
    /// The business inbox that receives the message.
    pub to: String,
    /// Where replies go (the submitter's email).
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    /// HTML alternative; all visitor-supplied text is escaped.
    pub html_body: String,
}

impl OutgoingEmail {
    /// Builds the email for `submission`, addressed to `inbox`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contact_core::{ContactSubmission, OutgoingEmail};
    ///
    /// let sub = ContactSubmission::new("Awa", "awa@example.com", "Bonjour !");
    /// let mail = OutgoingEmail::compose(&sub, "inbox@gd-consulting.com");
    /// assert_eq!(mail.reply_to, "awa@example.com");
    /// assert_eq!(mail.to, "inbox@gd-consulting.com");
    /// ```
    pub fn compose(submission: &ContactSubmission, inbox: &str) -> Self {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        let footer = format!("From: {name} ({email})");
        let html_footer = format!("From: {} ({})", escape_html(name), escape_html(email));

        Self {
            from_name: name.clone(),
            from_address: email.clone(),
            to: inbox.to_string(),
            reply_to: email.clone(),
            subject: format!("{SUBJECT_PREFIX}{name}"),
            text_body: format!("{message}\n\n{footer}"),
            html_body: format!("<p>{}</p><p>{html_footer}</p>", escape_html(message)),
        }
    }
}

/// Escapes the five HTML-significant characters.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
