use crate::{ConfigError, FromEnv, env_required};

/// Origins allowed to call the API from a browser
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Split a comma-separated origin list, dropping blank entries
    pub fn parse(origins: &str) -> Result<Self, ConfigError> {
        let allowed_origins: Vec<String> = origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "at least one origin is required".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl FromEnv for CorsConfig {
    /// Reads the required `CORS_ALLOWED_ORIGIN`, e.g.
    /// `http://localhost:5173,https://example.com`
    fn from_env() -> Result<Self, ConfigError> {
        Self::parse(&env_required("CORS_ALLOWED_ORIGIN")?)
    }
}
