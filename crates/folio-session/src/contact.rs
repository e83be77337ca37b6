//! Contact form validation and the simulated submission.

use regex::Regex;
use serde::Serialize;
use std::future::Future;
use std::sync::LazyLock;
use tracing::info;

pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const SEND_FAILED_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("submission failed: {0}")]
pub struct SubmitError(pub String);

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ContactMessage {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }
}

/// Stand-in for a real form backend: waits on `delay`, then succeeds.
pub async fn simulate_submission<F>(message: &ContactMessage, delay: F) -> Result<(), SubmitError>
where
    F: Future<Output = ()>,
{
    delay.await;
    info!(name = %message.name, email = %message.email, "contact form submitted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn every_field_is_required() {
        assert_eq!(form("", "a@b.com", "hi").validate(), Err(ContactError::MissingFields));
        assert_eq!(form("A", "", "hi").validate(), Err(ContactError::MissingFields));
        assert_eq!(form("A", "a@b.com", "   ").validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn email_needs_user_domain_and_dot() {
        for bad in ["ab.com", "a@b", "a b@c.com", "a@@b.com", "@b.com"] {
            assert_eq!(form("A", bad, "hi").validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        assert!(form("A", "a@b.com", "hi").validate().is_ok());
        assert!(form("A", "first.last@sub.example.org", "hi").validate().is_ok());
    }

    #[test]
    fn error_text_matches_notification_copy() {
        assert_eq!(ContactError::MissingFields.to_string(), "Please fill in all required fields.");
        assert_eq!(ContactError::InvalidEmail.to_string(), "Please enter a valid email address.");
    }

    #[tokio::test]
    async fn simulated_submission_always_succeeds() {
        let message = form("A", "a@b.com", "hi").validate().unwrap();
        assert_eq!(simulate_submission(&message, std::future::ready(())).await, Ok(()));
    }
}
