use anyhow::Context as _;
use anyhow::Result;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    port: u16,
    profile: String,
}

impl Config {
    const PORT_ENV_VAR: &str = "SERVER_PORT";
    const DEFAULT_PORT: u16 = 8080;

    const PROFILE_ENV_VAR: &str = "APP_PROFILE";
    const DEFAULT_PROFILE: &str = "default";

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Unset or blank variables fall back to their defaults. A port that is
    /// not a valid `u16` is rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match non_blank(Self::PORT_ENV_VAR) {
            Some(value) => value.parse::<u16>().with_context(|| {
                format!("Invalid value '{value}' for {}", Self::PORT_ENV_VAR)
            })?,
            None => Self::DEFAULT_PORT,
        };

        let profile =
            non_blank(Self::PROFILE_ENV_VAR).unwrap_or_else(|| Self::DEFAULT_PROFILE.to_string());

        Ok(Self { port, profile })
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            profile: Self::DEFAULT_PROFILE.to_string(),
        }
    }
}
