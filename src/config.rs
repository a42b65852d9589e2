use crate::error::{Result, RosterError};

/// Runtime configuration, sourced from environment variables.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub database_url: String,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/roster_development".to_string(),
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl RosterConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = db_url;
        }

        if let Ok(page_size) = std::env::var("ROSTER_DEFAULT_PAGE_SIZE") {
            config.default_page_size = page_size.parse().map_err(|e| {
                RosterError::Configuration(format!("Invalid default_page_size: {e}"))
            })?;
        }

        if let Ok(max_size) = std::env::var("ROSTER_MAX_PAGE_SIZE") {
            config.max_page_size = max_size
                .parse()
                .map_err(|e| RosterError::Configuration(format!("Invalid max_page_size: {e}")))?;
        }

        if config.default_page_size == 0 || config.default_page_size > config.max_page_size {
            return Err(RosterError::Configuration(format!(
                "default_page_size must be between 1 and {}",
                config.max_page_size
            )));
        }

        Ok(config)
    }
}
