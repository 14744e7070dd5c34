use crate::application::config::Config;
use crate::domain::clock::StatusClock;
use crate::http::http_server::HttpServer;
use anyhow::Result;
use std::sync::Arc;

/// State shared by every request handler.
pub struct ApplicationState {
    config: Config,
    clock: StatusClock,
}

impl ApplicationState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            clock: StatusClock::new(),
        }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn clock(&self) -> &StatusClock {
        &self.clock
    }
}

pub type SharedApplicationState = Arc<ApplicationState>;

pub fn create_application_state(config: Config) -> SharedApplicationState {
    Arc::new(ApplicationState::new(config))
}

pub async fn start_application(application_state: SharedApplicationState) -> Result<()> {
    let http_server = HttpServer::new(
        application_state.config().port(),
        Arc::clone(&application_state),
    );

    // Start the different components of the application
    let handles = http_server.start();

    for handle in handles {
        handle.await??;
    }

    Ok(())
}
