use crate::application::context::SharedApplicationState;
use crate::http::fallback_controller::FallbackController;
use crate::http::greeting_controller::GreetingController;
use crate::http::health_check_controller::HealthCheckController;
use crate::http::home_controller::HomeController;
use crate::http::status_controller::StatusController;
use crate::http::user_controller::UserController;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::DefaultMakeSpan;
use tower_http::trace::TraceLayer;

pub struct HttpServer {
    port: u16,
    application_state: SharedApplicationState,
}

impl HttpServer {
    const DEFAULT_LISTENER_ADDR: [u8; 4] = [0, 0, 0, 0];

    pub fn new(port: u16, application_state: SharedApplicationState) -> Self {
        tracing::debug!("Initializing the HTTP server");

        Self {
            port,
            application_state,
        }
    }

    pub fn start(&self) -> Vec<JoinHandle<Result<()>>> {
        tracing::info!("Starting the HTTP server on port {}", self.port);

        let port = self.port;
        let application_state = Arc::clone(&self.application_state);

        vec![tokio::spawn(Self::worker_axum(port, application_state))]
    }

    /// Route table of the service.
    pub fn router(application_state: SharedApplicationState) -> Router {
        let trace_layer =
            TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().include_headers(true));

        Router::new()
            .route("/", get(HomeController::get_welcome_endpoint_handler))
            .route("/home", get(HomeController::get_home_page_endpoint_handler))
            .route(
                "/api/status",
                get(StatusController::get_status_endpoint_handler),
            )
            .route(
                "/api/web-status",
                get(StatusController::get_web_status_endpoint_handler),
            )
            .route(
                "/api/users",
                get(UserController::get_users_endpoint_handler),
            )
            .route(
                "/api/hello",
                get(GreetingController::get_hello_endpoint_handler),
            )
            .route(
                "/health",
                get(HealthCheckController::get_health_endpoint_handler),
            )
            .route(
                "/actuator/health",
                get(HealthCheckController::get_actuator_health_endpoint_handler),
            )
            .fallback(FallbackController::fallback_endpoint_handler)
            .layer(trace_layer)
            .with_state(application_state)
    }

    /// Serves the routes on an already bound listener until SIGINT or SIGTERM.
    pub async fn serve(
        listener: TcpListener,
        application_state: SharedApplicationState,
    ) -> Result<()> {
        Self::serve_with_shutdown(listener, Self::router(application_state), shutdown_signal())
            .await
    }

    /// Serves `router` until `shutdown` resolves, then lets in-flight requests finish.
    pub async fn serve_with_shutdown(
        listener: TcpListener,
        router: Router,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        tracing::info!("Starting HTTP Server on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP Server shut down gracefully");

        Ok(())
    }

    async fn worker_axum(port: u16, application_state: SharedApplicationState) -> Result<()> {
        let addr = SocketAddr::from((Self::DEFAULT_LISTENER_ADDR, port));
        let listener = TcpListener::bind(addr).await?;

        Self::serve(listener, application_state).await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for SIGINT: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
