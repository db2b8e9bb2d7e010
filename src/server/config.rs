// src/server/config.rs
//! Configuration file parsing for the recipe server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [storage] - Database location
//! - [pagination] - Default and maximum page sizes

use crate::db::DEFAULT_DB_PATH;
use crate::pagination::{DEFAULT_PER_PAGE, MAX_PER_PAGE, PageLimits};
use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct RecipeBoxConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageSection,

    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// HTTP bind address
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

/// Storage configuration section
#[derive(Debug, Deserialize)]
pub struct StorageSection {
    /// SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

/// Pagination configuration section
#[derive(Debug, Deserialize)]
pub struct PaginationSection {
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,

    #[serde(default = "default_max_per_page")]
    pub max_per_page: u32,
}

impl Default for PaginationSection {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
        }
    }
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_max_per_page() -> u32 {
    MAX_PER_PAGE
}

impl RecipeBoxConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: RecipeBoxConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        if self.pagination.default_per_page == 0 {
            anyhow::bail!("pagination.default_per_page must be at least 1");
        }
        if self.pagination.default_per_page > self.pagination.max_per_page {
            anyhow::bail!(
                "pagination.default_per_page ({}) must be <= pagination.max_per_page ({})",
                self.pagination.default_per_page,
                self.pagination.max_per_page
            );
        }

        Ok(())
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        Ok(ServerConfig {
            bind_addr,
            db_path: self.storage.db_path.clone(),
            page_limits: PageLimits {
                default_per_page: self.pagination.default_per_page,
                max_per_page: self.pagination.max_per_page,
            },
        })
    }
}
