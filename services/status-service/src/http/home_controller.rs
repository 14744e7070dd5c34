use crate::application::APPLICATION_NAME;
use crate::application::context::SharedApplicationState;
use crate::http::model::HomePage;
use crate::http::model::WelcomeResponse;
use axum::Json;
use axum::extract::State;
use axum::response::Html;
use axum::response::IntoResponse;
use std::sync::LazyLock;

static WELCOME_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("http_server_welcome_requests")
        .with_description("Number of welcome requests")
        .build()
});

static HOME_PAGE_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("http_server_home_page_requests")
        .with_description("Number of home page requests")
        .build()
});

pub struct HomeController;

impl HomeController {
    #[allow(clippy::unused_async)]
    #[tracing::instrument]
    pub async fn get_welcome_endpoint_handler() -> impl IntoResponse {
        tracing::info!("Getting welcome message");

        WELCOME_COUNTER.add(1, &[]);

        Json(WelcomeResponse::new())
    }

    #[allow(clippy::unused_async)]
    #[tracing::instrument(skip(state))]
    pub async fn get_home_page_endpoint_handler(
        State(state): State<SharedApplicationState>,
    ) -> impl IntoResponse {
        tracing::info!("Rendering home page");

        HOME_PAGE_COUNTER.add(1, &[]);

        Html(HomePage::new(state.clock().now_display()).render())
    }
}
