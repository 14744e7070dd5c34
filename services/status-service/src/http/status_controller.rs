use crate::application::APPLICATION_NAME;
use crate::application::context::SharedApplicationState;
use crate::http::model::StatusResponse;
use crate::http::model::WebStatusResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use std::sync::LazyLock;

static GET_STATUS_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("http_server_get_status_requests")
        .with_description("Number of get status requests")
        .build()
});

static GET_WEB_STATUS_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> =
    LazyLock::new(|| {
        opentelemetry::global::meter(APPLICATION_NAME)
            .u64_counter("http_server_get_web_status_requests")
            .with_description("Number of get web status requests")
            .build()
    });

pub struct StatusController;

impl StatusController {
    #[allow(clippy::unused_async)]
    #[tracing::instrument(skip(state))]
    pub async fn get_status_endpoint_handler(
        State(state): State<SharedApplicationState>,
    ) -> impl IntoResponse {
        tracing::info!("Getting service status");

        GET_STATUS_COUNTER.add(1, &[]);

        Json(StatusResponse::healthy(state.clock().now_millis()))
    }

    #[allow(clippy::unused_async)]
    #[tracing::instrument(skip(state))]
    pub async fn get_web_status_endpoint_handler(
        State(state): State<SharedApplicationState>,
    ) -> impl IntoResponse {
        tracing::info!("Getting web status");

        GET_WEB_STATUS_COUNTER.add(1, &[]);

        Json(WebStatusResponse::running(state.clock().now_display()))
    }
}
