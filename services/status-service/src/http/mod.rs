pub mod fallback_controller;
pub mod greeting_controller;
pub mod health_check_controller;
pub mod home_controller;
pub mod http_server;
pub mod model;
pub mod status_controller;
pub mod user_controller;
