mod contact_email;
mod contact_field;
mod contact_submission;
mod field_errors;
mod required_text;

pub use contact_email::ContactEmail;
pub use contact_field::ContactField;
pub use contact_submission::{ContactFormData, ContactSubmission};
pub use field_errors::FieldErrors;
pub use required_text::RequiredText;
