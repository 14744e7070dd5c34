use anyhow::Result;
use status_service::application::config::Config;
use status_service::application::context::create_application_state;
use status_service::application::context::start_application;
use status_service::application::opentelemetry::OpentelemetryHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize the OpenTelemetry stack
    let _opentelemetry_handler = OpentelemetryHandler::new(config.profile())?;

    tracing::info!(
        "Starting {} with profile '{}'",
        status_service::application::APPLICATION_NAME,
        config.profile()
    );

    // Start the application
    let application_state = create_application_state(config);
    start_application(application_state).await?;

    Ok(())
}
