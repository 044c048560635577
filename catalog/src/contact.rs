//! The contact form's captured values.
//!
//! Nothing is sent anywhere. A successful [`ContactForm::submit`] only hands
//! back a [`ContactSubmission`] for the caller to log.

use std::collections::BTreeMap;

use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, strum::EnumIter, strum::EnumString, strum::IntoStaticStr, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// The form control's `name`/`id` attribute.
    pub fn key(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),
    #[error("{0:?} is not an email address")]
    InvalidEmail(String),
}

/// Field values as typed so far. Every field starts out empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    values: BTreeMap<ContactField, String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            values: ContactField::iter().map(|f| (f, String::new())).collect(),
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// The value a browser would submit for `field`. Email inputs drop
    /// surrounding whitespace; text inputs and textareas keep it.
    fn submitted(&self, field: ContactField) -> &str {
        match field {
            ContactField::Email => self.get(field).trim(),
            _ => self.get(field),
        }
    }

    /// Checks that every field is filled in and the email looks like one.
    ///
    /// The form is left as is, so a rejected submission can be corrected.
    pub fn submit(&self) -> Result<ContactSubmission, ContactFormError> {
        if let Some(field) = ContactField::iter().find(|f| self.submitted(*f).is_empty()) {
            return Err(ContactFormError::Missing(field));
        }
        let email = self.submitted(ContactField::Email);
        if !looks_like_email(email) {
            return Err(ContactFormError::InvalidEmail(email.to_string()));
        }
        Ok(ContactSubmission {
            name: self.submitted(ContactField::Name).to_string(),
            email: email.to_string(),
            subject: self.submitted(ContactField::Subject).to_string(),
            message: self.submitted(ContactField::Message).to_string(),
        })
    }
}

/// Roughly the check a browser applies to `<input type="email">`: something
/// before a single `@`, a host after it, no whitespace.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

/// A complete set of contact form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Subject, "Saffron");
        form.set(ContactField::Message, "Do you ship to Lisbon?");
        form
    }

    #[test]
    fn starts_empty() {
        let form = ContactForm::new();
        for field in ContactField::iter() {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn field_keys_match_form_names() {
        assert_eq!(ContactField::from_str("subject"), Ok(ContactField::Subject));
        assert_eq!(ContactField::Email.key(), "email");
    }

    #[test]
    fn later_edits_replace_earlier_ones() {
        let mut form = filled();
        form.set(ContactField::Subject, "Cardamom");
        assert_eq!(form.get(ContactField::Subject), "Cardamom");
    }

    #[test]
    fn complete_form_submits() {
        let submission = filled().submit().unwrap();
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(
            submission.to_json(),
            r#"{"name":"Ada","email":"ada@example.com","subject":"Saffron","message":"Do you ship to Lisbon?"}"#
        );
    }

    #[test]
    fn empty_field_is_reported_in_order() {
        let mut form = filled();
        form.set(ContactField::Message, "");
        assert_eq!(form.submit(), Err(ContactFormError::Missing(ContactField::Message)));

        form.set(ContactField::Name, "");
        let err = form.submit().unwrap_err();
        assert_eq!(err, ContactFormError::Missing(ContactField::Name));
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn whitespace_only_text_is_still_captured() {
        let mut form = filled();
        form.set(ContactField::Subject, "   ");
        let submission = form.submit().unwrap();
        assert_eq!(submission.subject, "   ");
    }

    #[test]
    fn email_is_trimmed_before_checking() {
        let mut form = filled();
        form.set(ContactField::Email, "  ada@example.com ");
        assert_eq!(form.submit().unwrap().email, "ada@example.com");

        form.set(ContactField::Email, "   ");
        assert_eq!(form.submit(), Err(ContactFormError::Missing(ContactField::Email)));
    }

    #[test]
    fn email_needs_local_part_and_host() {
        for bad in ["ada", "@example.com", "ada@", "ada@@example.com", "ada@.com", "a da@example.com"] {
            let mut form = filled();
            form.set(ContactField::Email, bad);
            assert!(
                matches!(form.submit(), Err(ContactFormError::InvalidEmail(_))),
                "{bad}"
            );
        }
        let mut form = filled();
        form.set(ContactField::Email, "ada@localhost");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn rejected_submit_keeps_values() {
        let mut form = filled();
        form.set(ContactField::Email, "nope");
        let before = form.clone();
        let _ = form.submit();
        assert_eq!(form, before);
    }
}
