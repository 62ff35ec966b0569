//! Client-side contact form: validate, hand off to the form service, reset.
use std::time::{Duration, Instant};

use crate::domain::{ContactField, ContactFormData, ContactSubmission, FieldErrors};
use crate::form_service::FormServiceUrl;

pub const DEFAULT_SUCCESS_STATUS: Duration = Duration::from_secs(5);

/// Opens a URL in a new browsing context.
///
/// Fire-and-forget: implementations report nothing back, and callers treat
/// the dispatch as done as soon as `open` returns.
pub trait Navigator {
    fn open(&mut self, url: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Success,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    data: ContactFormData,
    errors: FieldErrors,
    success_until: Option<Instant>,
    success_duration: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_STATUS)
    }
}

impl ContactForm {
    pub fn new(success_duration: Duration) -> Self {
        Self::with_data(ContactFormData::default(), success_duration)
    }

    pub fn with_data(data: ContactFormData, success_duration: Duration) -> Self {
        Self {
            data,
            errors: FieldErrors::new(),
            success_until: None,
            success_duration,
        }
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Editing a field dismisses its error; the other errors stay visible.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.data.set(field, value.into());
        self.errors.clear_field(field);
    }

    pub fn status_at(&self, now: Instant) -> SubmitStatus {
        match self.success_until {
            Some(deadline) if now < deadline => SubmitStatus::Success,
            _ => SubmitStatus::Idle,
        }
    }

    /// Validate and dispatch. Nothing is opened when validation fails.
    ///
    /// Success only means the navigator was asked to open the form service;
    /// whether the visitor ever reaches it is unknown.
    pub fn submit<N: Navigator>(
        &mut self,
        form_service: &FormServiceUrl,
        navigator: &mut N,
        now: Instant,
    ) -> Result<(), FieldErrors> {
        let submission = match ContactSubmission::parse(self.data.clone()) {
            Ok(submission) => submission,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(errors);
            }
        };

        let url = form_service.prefill(&submission);
        tracing::info!(%url, "dispatching contact form to the form service");
        navigator.open(&url);

        self.data = ContactFormData::default();
        self.errors = FieldErrors::new();
        self.success_until = Some(now + self.success_duration);
        Ok(())
    }
}
