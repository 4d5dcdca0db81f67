// src/config.rs
use crate::application::ports::navigation::NavigationTarget;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    log_filter: String,
    routes: RouteConfig,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "info".into()
}

fn default_home_route() -> String {
    "/".into()
}

fn default_article_route_prefix() -> String {
    "/article".into()
}

impl ClientConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup("MOKKAN_CLIENT_LOG").unwrap_or_else(default_log_filter);
        let home = lookup("HOME_ROUTE").unwrap_or_else(default_home_route);
        let article_prefix =
            lookup("ARTICLE_ROUTE_PREFIX").unwrap_or_else(default_article_route_prefix);

        Ok(Self {
            log_filter,
            routes: RouteConfig::new(home, article_prefix)?,
        })
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub const fn routes(&self) -> &RouteConfig {
        &self.routes
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            routes: RouteConfig::default(),
        }
    }
}

/// Paths the navigator emits for each navigation target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteConfig {
    home: String,
    article_prefix: String,
}

impl RouteConfig {
    pub fn new(
        home: impl Into<String>,
        article_prefix: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let home = home.into();
        let article_prefix = article_prefix.into();
        for (key, value) in [("HOME_ROUTE", &home), ("ARTICLE_ROUTE_PREFIX", &article_prefix)] {
            if !value.starts_with('/') {
                return Err(ConfigError::Invalid(format!(
                    "{key} must start with '/', got {value:?}"
                )));
            }
        }
        Ok(Self {
            home,
            article_prefix: article_prefix.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn path_for(&self, target: &NavigationTarget) -> String {
        match target {
            NavigationTarget::Home => self.home.clone(),
            NavigationTarget::Article(slug) => format!("{}/{slug}", self.article_prefix),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            home: default_home_route(),
            article_prefix: default_article_route_prefix(),
        }
    }
}
