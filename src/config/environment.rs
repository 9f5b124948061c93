// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads port, host, static root, CORS, timeout, and generator policy from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration
//!
//! The whole server is driven by one immutable [`ServerConfig`] built at
//! startup and handed to the router builder. Nothing reads the environment
//! after that.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use swim_core::constants::defaults;
use swim_planner::GeneratorPolicy;
use tracing::info;

/// Default listening port when neither `HTTP_PORT` nor `PORT` is set
pub const DEFAULT_HTTP_PORT: u16 = 3000;
/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
/// Default directory for `index.html` and `styles.css`
pub const DEFAULT_STATIC_ROOT: &str = "public";
/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
/// Largest accepted request body
pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listening port
    pub http_port: u16,
    /// Bind address
    pub http_host: String,
    /// Directory holding `index.html` and `styles.css`
    pub static_root: PathBuf,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Workout generation policy
    pub generator: GeneratorPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            http_host: DEFAULT_HTTP_HOST.to_owned(),
            static_root: PathBuf::from(DEFAULT_STATIC_ROOT),
            environment: Environment::default(),
            cors: CorsConfig::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            generator: GeneratorPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but cannot be parsed, or when
    /// the generator policy is out of range.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let http_port = match var("HTTP_PORT").or_else(|| var("PORT")) {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("Invalid HTTP_PORT/PORT value: {port}"))?,
            None => DEFAULT_HTTP_PORT,
        };

        let request_timeout_secs = match var("REQUEST_TIMEOUT_SECS") {
            Some(secs) => secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid REQUEST_TIMEOUT_SECS value: {secs}"))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let max_reps_per_set = match var("SWIM_MAX_REPS_PER_SET") {
            Some(reps) => reps
                .trim()
                .parse()
                .with_context(|| format!("Invalid SWIM_MAX_REPS_PER_SET value: {reps}"))?,
            None => defaults::MAX_REPS_PER_SET,
        };
        let generator =
            GeneratorPolicy::new(max_reps_per_set).context("Invalid SWIM_MAX_REPS_PER_SET")?;

        let environment = var("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        Ok(Self {
            http_port,
            http_host: var("HTTP_HOST").unwrap_or_else(|| DEFAULT_HTTP_HOST.to_owned()),
            static_root: PathBuf::from(
                var("STATIC_ROOT").unwrap_or_else(|| DEFAULT_STATIC_ROOT.to_owned()),
            ),
            environment,
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_owned()),
            },
            request_timeout_secs,
            generator,
        })
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `host:port` string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Swim Workout Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Static Root: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Max Reps Per Set: {}",
            self.bind_address(),
            self.environment,
            self.static_root.display(),
            self.cors.allowed_origins,
            self.request_timeout_secs,
            self.generator.max_reps_per_set,
        )
    }
}
