use crate::domain::{ContactEmail, ContactField, FieldErrors, RequiredText};

/// The four values as typed by the visitor. Missing values are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ContactFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Check every field and collect all failures; never stops at the first.
    pub fn validate(&self) -> FieldErrors {
        ContactSubmission::parse(self.clone())
            .err()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: RequiredText,
    pub email: ContactEmail,
    pub subject: RequiredText,
    pub message: RequiredText,
}

impl ContactSubmission {
    pub fn parse(data: ContactFormData) -> Result<ContactSubmission, FieldErrors> {
        let ContactFormData {
            name,
            email,
            subject,
            message,
        } = data;
        let mut errors = FieldErrors::new();
        let name = RequiredText::parse(ContactField::Name, name)
            .map_err(|e| errors.insert(ContactField::Name, e));
        let email = ContactEmail::parse(email).map_err(|e| errors.insert(ContactField::Email, e));
        let subject = RequiredText::parse(ContactField::Subject, subject)
            .map_err(|e| errors.insert(ContactField::Subject, e));
        let message = RequiredText::parse(ContactField::Message, message)
            .map_err(|e| errors.insert(ContactField::Message, e));

        match (name, email, subject, message) {
            (Ok(name), Ok(email), Ok(subject), Ok(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(errors),
        }
    }
}
