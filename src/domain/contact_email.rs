use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::ContactField;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";

/// An address that looks like `local@domain.tld`.
///
/// Only the shape is checked: something before the `@`, and a dot somewhere
/// in the whitespace-free run after it. Deliverability is not our concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<ContactEmail, &'static str> {
        if s.trim().is_empty() {
            Err(ContactField::Email.required_message())
        } else if Self::has_valid_shape(&s) {
            Ok(Self(s))
        } else {
            Err(INVALID_EMAIL_FORMAT)
        }
    }

    pub fn has_valid_shape(s: &str) -> bool {
        EMAIL_SHAPE.is_match(s)
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
