use crate::application::APPLICATION_NAME;
use crate::domain::identity;
use axum::response::IntoResponse;
use std::sync::LazyLock;

static HELLO_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("http_server_hello_requests")
        .with_description("Number of hello requests")
        .build()
});

pub struct GreetingController;

impl GreetingController {
    #[allow(clippy::unused_async)]
    #[tracing::instrument]
    pub async fn get_hello_endpoint_handler() -> impl IntoResponse {
        tracing::info!("Greeting caller");

        HELLO_COUNTER.add(1, &[]);

        identity::GREETING
    }
}
