use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;

use crate::form_service::FormServiceUrl;
use crate::routes::*;

pub fn run(listener: TcpListener, form_service: FormServiceUrl) -> Result<Server, std::io::Error> {
    let form_service = web::Data::new(form_service);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/api/contact", web::post().to(receive_contact))
            .route("/contact/form", web::post().to(dispatch_contact_form))
            .app_data(form_service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
