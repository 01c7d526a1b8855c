use serde::{ Deserialize, Serialize };

/// Mailbox every contact request is addressed to.
pub const DEFAULT_CONTACT_ADDRESS: &str = "ankitkhatiwada09@gmail.com";

/// What the visitor typed into the contact form. Built on submit, turned into
/// a `mailto:` URI and dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Presence check done by the form before building a URI. The address
    /// format is not checked.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Builds the mail-composition URI for a [`ContactFormSubmission`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactIntentBuilder {
    recipient: String,
}

impl Default for ContactIntentBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_ADDRESS)
    }
}

impl ContactIntentBuilder {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self { recipient: recipient.into() }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn subject(&self, submission: &ContactFormSubmission) -> String {
        format!("Portfolio contact — {}", submission.name)
    }

    pub fn body(&self, submission: &ContactFormSubmission) -> String {
        format!("{}\n\nFrom: {} <{}>", submission.message, submission.name, submission.email)
    }

    /// `mailto:<recipient>?subject=..&body=..` with the recipient's parts, the
    /// subject and the body percent-encoded as URI components. Performs no
    /// validation.
    pub fn build(&self, submission: &ContactFormSubmission) -> String {
        let subject = self.subject(submission);
        let body = self.body(submission);
        format!(
            "mailto:{}?subject={}&body={}",
            encode_address(&self.recipient),
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

/// Encodes each side of the address, keeping the `@` separators readable.
fn encode_address(address: &str) -> String {
    address
        .split('@')
        .map(|part| urlencoding::encode(part))
        .collect::<Vec<_>>()
        .join("@")
}
