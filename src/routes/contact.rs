use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::ContactEmail;
use crate::routes::error_chain_fmt;

pub const SUCCESS_MESSAGE: &str = "Message received successfully";
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Body of `POST /api/contact`, read the way a JavaScript handler would
/// destructure it: keys missing from the object, or any non-object body,
/// leave the field absent.
#[derive(Debug)]
pub struct ContactPayload {
    name: Option<Value>,
    email: Option<Value>,
    subject: Option<Value>,
    message: Option<Value>,
}

/// A payload that passed the endpoint checks.
///
/// Values are not trimmed here, so whitespace-only fields are accepted.
#[derive(Debug)]
pub struct ReceivedContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    pub fn parse(body: &[u8]) -> Result<ContactPayload, ContactError> {
        let value: Value = serde_json::from_slice(body).map_err(ContactError::MalformedPayload)?;
        if value.is_null() {
            return Err(ContactError::MalformedPayload(serde::de::Error::custom(
                "contact payload is null",
            )));
        }

        let field = |key: &str| value.get(key).cloned();
        Ok(Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        })
    }

    pub fn validate(self) -> Result<ReceivedContact, ContactError> {
        let (name, email, subject, message) = match (
            present(self.name),
            present(self.email),
            present(self.subject),
            present(self.message),
        ) {
            (Some(name), Some(email), Some(subject), Some(message)) => {
                (name, email, subject, message)
            }
            _ => return Err(ContactError::MissingField),
        };

        let email = string_form(&email);
        if !ContactEmail::has_valid_shape(&email) {
            return Err(ContactError::InvalidEmailFormat);
        }

        Ok(ReceivedContact {
            name: string_form(&name),
            email,
            subject: string_form(&subject),
            message: string_form(&message),
        })
    }
}

fn present(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}

/// `null`, `false`, `0` and `""` are falsy; everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String coercion as JavaScript performs it before a regex test.
fn string_form(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => string_form(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingField,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Failed to parse the contact payload")]
    MalformedPayload(#[source] serde_json::Error),
    /// Catch-all for fallible steps that have no variant of their own.
    #[error(transparent)]
    UnexpectedFailure(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(serde::Serialize)]
struct Acknowledgement {
    success: bool,
    message: &'static str,
}

impl ContactError {
    /// What the visitor gets to see; internal details stay in the logs.
    fn public_message(&self) -> &'static str {
        match self {
            ContactError::MissingField => "All fields are required",
            ContactError::InvalidEmailFormat => "Invalid email format",
            ContactError::MalformedPayload(_) | ContactError::UnexpectedFailure(_) => {
                GENERIC_FAILURE
            }
        }
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::MissingField | ContactError::InvalidEmailFormat => {
                StatusCode::BAD_REQUEST
            }
            ContactError::MalformedPayload(_) | ContactError::UnexpectedFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.public_message(),
        })
    }
}

/// The body is parsed by hand so that bad JSON and a missing content type
/// both end up as `MalformedPayload` instead of actix's default 400.
#[tracing::instrument(
    name = "Receiving a contact form submission",
    skip(body),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn receive_contact(body: web::Bytes) -> Result<HttpResponse, ContactError> {
    accept(&body).map_err(|e| {
        match e.status_code() {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!(error.cause_chain = ?e, "Contact form error")
            }
            _ => tracing::info!(error = %e, "Contact form submission rejected"),
        }
        e
    })?;

    Ok(HttpResponse::Ok().json(Acknowledgement {
        success: true,
        message: SUCCESS_MESSAGE,
    }))
}

fn accept(body: &[u8]) -> Result<(), ContactError> {
    let contact = ContactPayload::parse(body)?.validate()?;
    record_submission(&contact);
    Ok(())
}

/// Append-only audit line; nothing is stored anywhere else.
fn record_submission(contact: &ReceivedContact) {
    tracing::info!(
        target: "contact_audit",
        contact_name = %contact.name,
        contact_email = %contact.email,
        contact_subject = %contact.subject,
        contact_message = %contact.message,
        timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "Contact form submission"
    );
}
