use crate::domain::ContactField;

/// Free text that must contain something other than whitespace.
///
/// The value is kept exactly as entered; trimming only decides emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText {
    pub fn parse(field: ContactField, s: String) -> Result<RequiredText, &'static str> {
        if s.trim().is_empty() {
            Err(field.required_message())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
