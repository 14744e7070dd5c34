// Identity reported by the status endpoints. These strings are part of the
// HTTP contract relied upon by the deployment checks.

pub const APPLICATION: &str = "my-java-app";
pub const VERSION: &str = "2.0.0";
pub const DEPLOYED_TO: &str = "Nexus Repository";

pub const WELCOME_MESSAGE: &str = "Welcome to My Java App!";
pub const GREETING: &str = "Hello, CI/CD World! This is a Spring Boot Web Application.";

pub const HOME_TITLE: &str = "My Java Web App";
pub const HOME_MESSAGE: &str = "Welcome to My Java Spring Boot Application!";
