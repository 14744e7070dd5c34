use crate::application::APPLICATION_NAME;
use crate::domain::user::SYNTHETIC_USERS;
use crate::http::model::UsersResponse;
use axum::Json;
use axum::response::IntoResponse;
use std::sync::LazyLock;

static GET_USERS_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("http_server_get_users_requests")
        .with_description("Number of get users requests")
        .build()
});

pub struct UserController;

impl UserController {
    #[allow(clippy::unused_async)]
    #[tracing::instrument]
    pub async fn get_users_endpoint_handler() -> impl IntoResponse {
        tracing::info!("Getting all the users");

        GET_USERS_COUNTER.add(1, &[]);

        Json(UsersResponse::new(&SYNTHETIC_USERS))
    }
}
