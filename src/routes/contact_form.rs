use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse};
use std::time::Instant;
use uuid::Uuid;

use crate::contact_form::{ContactForm, Navigator, DEFAULT_SUCCESS_STATUS};
use crate::domain::{ContactFormData, FieldErrors};
use crate::form_service::FormServiceUrl;

/// Captures the dispatched URL so it can be answered as a redirect.
#[derive(Default)]
struct RedirectNavigator {
    location: Option<String>,
}

impl Navigator for RedirectNavigator {
    fn open(&mut self, url: &str) {
        self.location = Some(url.to_owned());
    }
}

#[derive(serde::Serialize)]
struct FormErrorsBody<'a> {
    errors: &'a FieldErrors,
}

/// Plain HTML form fallback: valid input is sent on to the form service.
#[tracing::instrument(
    name = "Dispatching a contact form",
    skip(form, form_service),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn dispatch_contact_form(
    form: web::Form<ContactFormData>,
    form_service: web::Data<FormServiceUrl>,
) -> HttpResponse {
    let mut contact_form = ContactForm::with_data(form.into_inner(), DEFAULT_SUCCESS_STATUS);
    let mut navigator = RedirectNavigator::default();

    match contact_form.submit(&form_service, &mut navigator, Instant::now()) {
        Ok(()) => match navigator.location {
            Some(location) => HttpResponse::SeeOther()
                .insert_header((LOCATION, location))
                .finish(),
            None => {
                tracing::error!("contact form was accepted but nothing was dispatched");
                HttpResponse::InternalServerError().finish()
            }
        },
        Err(errors) => {
            tracing::info!(?errors, "contact form rejected");
            HttpResponse::BadRequest().json(FormErrorsBody { errors: &errors })
        }
    }
}
