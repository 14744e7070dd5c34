use crate::domain::identity;

// Health check models

#[derive(serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
enum StatusEnum {
    Up,
}

#[derive(serde::Serialize)]
pub struct HealthCheckResponse {
    status: StatusEnum,
}

impl HealthCheckResponse {
    pub const fn up() -> Self {
        Self {
            status: StatusEnum::Up,
        }
    }
}

// Service status models

#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
enum ServiceStatusEnum {
    Running,
    Healthy,
}

#[derive(serde::Serialize)]
pub struct WelcomeResponse {
    message: &'static str,
    status: ServiceStatusEnum,
    version: &'static str,
}

impl WelcomeResponse {
    pub const fn new() -> Self {
        Self {
            message: identity::WELCOME_MESSAGE,
            status: ServiceStatusEnum::Running,
            version: identity::VERSION,
        }
    }
}

#[derive(serde::Serialize)]
pub struct StatusResponse {
    status: ServiceStatusEnum,
    timestamp: i64,
    uptime: ServiceStatusEnum,
}

impl StatusResponse {
    pub const fn healthy(timestamp: i64) -> Self {
        Self {
            status: ServiceStatusEnum::Healthy,
            timestamp,
            uptime: ServiceStatusEnum::Running,
        }
    }
}

#[derive(serde::Serialize)]
pub struct WebStatusResponse {
    status: ServiceStatusEnum,
    application: &'static str,
    version: &'static str,
    timestamp: String,
    deployed_to: &'static str,
}

impl WebStatusResponse {
    pub fn running(timestamp: impl Into<String>) -> Self {
        Self {
            status: ServiceStatusEnum::Running,
            application: identity::APPLICATION,
            version: identity::VERSION,
            timestamp: timestamp.into(),
            deployed_to: identity::DEPLOYED_TO,
        }
    }
}

// User models

#[derive(serde::Serialize)]
pub struct UsersResponse {
    users: Vec<String>,
    count: usize,
}

impl UsersResponse {
    pub fn new(users: &[&str]) -> Self {
        Self {
            users: users.iter().map(ToString::to_string).collect(),
            count: users.len(),
        }
    }
}

// Page models

pub struct HomePage {
    timestamp: String,
}

impl HomePage {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
             </head>\n\
             <body>\n\
             <h1>{title}</h1>\n\
             <p>{message}</p>\n\
             <p>Version: {version}</p>\n\
             <p>Generated at: {timestamp}</p>\n\
             </body>\n\
             </html>\n",
            title = identity::HOME_TITLE,
            message = identity::HOME_MESSAGE,
            version = identity::VERSION,
            timestamp = self.timestamp,
        )
    }
}
