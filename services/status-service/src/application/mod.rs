pub mod config;
pub mod context;
pub mod opentelemetry;

pub const APPLICATION_NAME: &str = "status-service";
