//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `blog.{toml,yaml,json}` in the working directory, then `BLOG_*`
//! environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "BLOG";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub data_dir: PathBuf,
    /// Overrides `<data_dir>/blog.db`
    pub database_path: Option<PathBuf>,
    pub max_connections: u32,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::from_sources(
            Some(config::File::with_name("blog").required(false)),
            config::Environment::with_prefix(ENV_PREFIX),
        )
    }

    pub fn from_sources(
        file: Option<config::File<config::FileSourceFile, config::FileFormat>>,
        env: config::Environment,
    ) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("bind_address", "127.0.0.1:5000")?
            .set_default("data_dir", "./data")?
            .set_default("max_connections", 5)?;

        if let Some(file) = file {
            builder = builder.add_source(file);
        }

        builder
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join("blog.db"))
    }
}
