use serde::Deserialize;
use validator::Validate;

/// Raw message form fields as posted by the browser.
#[derive(Validate, Deserialize, Default, Debug, Clone)]
pub struct SubmitMessageInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

impl SubmitMessageInput {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// A validated contact message, ready for the notification sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn submit_message(input: SubmitMessageInput) -> arcalab_shared::Result<ContactMessage> {
    let input = input.trimmed();
    input.validate()?;

    tracing::debug!(subject = %input.subject, "contact message accepted");

    Ok(ContactMessage {
        name: input.name,
        email: input.email,
        subject: input.subject,
        message: input.message,
    })
}
