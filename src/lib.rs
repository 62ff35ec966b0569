pub mod configuration;
pub mod contact_form;
pub mod domain;
pub mod form_service;
pub mod routes;
pub mod startup;
pub mod telemetry;
