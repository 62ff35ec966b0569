use std::net::TcpListener;

use portfolio_contact::configuration::get_configuration;
use portfolio_contact::startup::run;
use portfolio_contact::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("portfolio-contact".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().map_err(|e| {
        tracing::error!(error = %e, "failed to read configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let form_service = configuration
        .form_service
        .url()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    tracing::info!(%address, "listening for contact form submissions");

    run(listener, form_service)?.await
}
