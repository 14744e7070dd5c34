use crate::application::APPLICATION_NAME;
use crate::http::model::HealthCheckResponse;
use axum::Json;
use axum::response::IntoResponse;
use std::sync::LazyLock;

static HEALTH_CHECK_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("http_server_health_check_requests")
        .with_description("Number of health check requests")
        .build()
});

static ACTUATOR_HEALTH_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> =
    LazyLock::new(|| {
        opentelemetry::global::meter(APPLICATION_NAME)
            .u64_counter("http_server_actuator_health_requests")
            .with_description("Number of actuator health requests")
            .build()
    });

pub struct HealthCheckController;

impl HealthCheckController {
    const UP: &str = "UP";

    /// Plain-text liveness probe.
    #[allow(clippy::unused_async)]
    #[tracing::instrument(level = "debug")]
    pub async fn get_health_endpoint_handler() -> impl IntoResponse {
        tracing::debug!("Getting service liveness");

        HEALTH_CHECK_COUNTER.add(1, &[]);

        Self::UP
    }

    /// JSON readiness probe polled by the container runtime and the load tests.
    #[allow(clippy::unused_async)]
    #[tracing::instrument(level = "debug")]
    pub async fn get_actuator_health_endpoint_handler() -> impl IntoResponse {
        tracing::debug!("Getting service readiness");

        ACTUATOR_HEALTH_COUNTER.add(1, &[]);

        Json(HealthCheckResponse::up())
    }
}
