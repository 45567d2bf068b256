use anyhow::{Context, Result};
use std::env;

pub const EXPOSE_DEBUG_VAR: &str = "SERVICE_ERRORS_EXPOSE_DEBUG";

#[derive(Debug, Clone, Default)]
pub struct ErrorConfig {
    /// Include `debug_message` and `additional_info` in public error bodies.
    /// Meant for development only.
    pub expose_debug: bool,
}

impl ErrorConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(ErrorConfig {
            expose_debug: lookup(EXPOSE_DEBUG_VAR)
                .unwrap_or_else(|| "false".to_string())
                .trim()
                .parse()
                .with_context(|| format!("{EXPOSE_DEBUG_VAR} must be true or false"))?,
        })
    }
}
