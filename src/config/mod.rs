pub mod catalog;

use crate::error::{Error, Result};
use crate::recommend::matcher::{
    ScoringWeights, BASE_WEIGHT, MAX_RESULTS, PRIMARY_BOOST, PRIMARY_COUNT,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub ranking: ScoringWeights,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_rate_limit: u64,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog replacing the built-in recipes
    pub path: Option<PathBuf>,
}

fn env_or<T: FromStr>(name: &str, default: T) -> Result<T> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("Invalid {name} value"))),
        Err(_) => Ok(default),
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env_or("PORT", 3000)?;
        let api_rate_limit = env_or("API_RATE_LIMIT", 100)?;
        let max_request_body_size = env_or("MAX_REQUEST_BODY_SIZE", 1_048_576)?;

        let ranking = ScoringWeights {
            base_weight: env_or("BASE_WEIGHT", BASE_WEIGHT)?,
            primary_boost: env_or("PRIMARY_BOOST", PRIMARY_BOOST)?,
            primary_count: env_or("PRIMARY_COUNT", PRIMARY_COUNT)?,
            max_results: env_or("MAX_RESULTS", MAX_RESULTS)?,
        };

        let path = std::env::var("RECIPE_CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                api_rate_limit,
                max_request_body_size,
            },
            ranking,
            catalog: CatalogConfig { path },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_rate_limit == 0 {
            return Err(Error::Config("API rate limit must be non-zero".to_string()));
        }

        if self.server.max_request_body_size == 0 {
            return Err(Error::Config(
                "Request body size limit must be non-zero".to_string(),
            ));
        }

        if self.ranking.max_results == 0 {
            return Err(Error::Config("MAX_RESULTS must be non-zero".to_string()));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                api_rate_limit: 100,
                max_request_body_size: 1_048_576,
            },
            ranking: ScoringWeights::default(),
            catalog: CatalogConfig { path: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.server.port = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.ranking.max_results = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.ranking.primary_count = 0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_default_ranking_constants() {
        let settings = Settings::default();
        assert_eq!(settings.ranking.base_weight, 1);
        assert_eq!(settings.ranking.primary_boost, 2);
        assert_eq!(settings.ranking.primary_count, 2);
        assert_eq!(settings.ranking.max_results, 5);
    }
}
