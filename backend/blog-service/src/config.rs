/// Configuration management for Blog Service
///
/// This module handles loading configuration from environment variables.
/// A `.env` file is honoured by `main` before `Config::from_env` runs.
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Outgoing mail configuration
    pub email: EmailConfig,
    /// Blog behaviour
    pub blog: BlogConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
    /// Min idle connections kept open
    pub min_connections: u32,
    /// Seconds to wait for a pooled connection
    pub acquire_timeout_secs: u64,
}

/// SMTP settings. An empty host means no-op delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    #[serde(skip_serializing)]
    pub smtp_password: Option<String>,
    pub use_starttls: bool,
}

/// Blog behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Posts shown per listing page
    pub posts_per_page: u32,
    /// Sender address used for "share this post" emails
    pub share_from_address: String,
    /// Public scheme and host for links in outgoing mail. When unset the
    /// request's own scheme and host are used.
    pub base_url: Option<String>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_per_page: default_posts_per_page(),
            share_from_address: default_share_from_address(),
            base_url: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let production = app_env.eq_ignore_ascii_case("production");

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) if production => bail!("DATABASE_URL must be set in production"),
            Err(_) => "postgresql://localhost/blog".to_string(),
        };

        let posts_per_page = parse_env_or("BLOG_POSTS_PER_PAGE", default_posts_per_page())?;
        if posts_per_page == 0 {
            bail!("BLOG_POSTS_PER_PAGE must be at least 1");
        }

        Ok(Config {
            app: AppConfig {
                env: app_env,
                host: env::var("BLOG_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("BLOG_SERVICE_PORT", 8080)?,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: parse_env_or("DATABASE_MAX_CONNECTIONS", 10)?,
                min_connections: parse_env_or("DATABASE_MIN_CONNECTIONS", 1)?,
                acquire_timeout_secs: parse_env_or("DATABASE_ACQUIRE_TIMEOUT_SECS", 10)?,
            },
            email: EmailConfig {
                smtp_host: env::var("SMTP_HOST").unwrap_or_default(),
                smtp_port: parse_env_or("SMTP_PORT", 587)?,
                smtp_username: non_empty_env("SMTP_USERNAME"),
                smtp_password: non_empty_env("SMTP_PASSWORD"),
                use_starttls: parse_env_or("SMTP_USE_STARTTLS", true)?,
            },
            blog: BlogConfig {
                posts_per_page,
                share_from_address: env::var("SHARE_FROM_ADDRESS")
                    .unwrap_or_else(|_| default_share_from_address()),
                base_url: non_empty_env("BLOG_BASE_URL")
                    .map(|url| url.trim().trim_end_matches('/').to_string()),
            },
        })
    }
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .with_context(|| format!("Failed to parse {}='{}'", key, val)),
        Err(_) => Ok(default),
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn default_posts_per_page() -> u32 {
    2
}

fn default_share_from_address() -> String {
    "no-reply@blog.local".to_string()
}
