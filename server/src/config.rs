//! Configuration management for the server.

use roster_engine::TenantId;
use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Tenant that receives the seeded skills
    pub default_tenant_id: TenantId,
    /// Skill names created at startup
    pub seed_skills: Vec<String>,
    /// Page size used when the URL does not carry one
    pub default_items_per_page: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_tenant_id: 1,
            seed_skills: Vec::new(),
            default_items_per_page: 10,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort)?,
            None => defaults.port,
        };

        let default_tenant_id = match lookup("DEFAULT_TENANT_ID") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidTenantId)?,
            None => defaults.default_tenant_id,
        };

        let default_items_per_page = match lookup("DEFAULT_ITEMS_PER_PAGE") {
            Some(raw) => raw
                .parse()
                .ok()
                .filter(|n: &u32| *n >= 1)
                .ok_or(ConfigError::InvalidItemsPerPage)?,
            None => defaults.default_items_per_page,
        };

        let seed_skills = lookup("SEED_SKILLS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            default_tenant_id,
            seed_skills,
            default_items_per_page,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("Invalid DEFAULT_TENANT_ID value")]
    InvalidTenantId,

    #[error("DEFAULT_ITEMS_PER_PAGE must be a positive integer")]
    InvalidItemsPerPage,
}
