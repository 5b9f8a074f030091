//! Layered configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults, `plugmein.toml`,
//! `plugmein.<env>.toml` and `PLUGMEIN_*` env vars (nested keys split on `__`).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ranking and filter-panel knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Radius the filter panel starts at, in miles.
    pub default_radius: u32,
    /// Upper bound of the radius slider.
    pub max_radius: u32,
    pub base_score: f64,
    pub paid_boost: f64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self { default_radius: 10, max_radius: 50, base_score: 100.0, paid_boost: 10.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory of JSON catalog files. Unset means the built-in sample data.
    pub catalog_dir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub feed: FeedSettings,
    pub data: DataSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        let feed = &self.feed;
        if feed.default_radius == 0 {
            return Err(Error::InvalidConfig("feed.default_radius must be at least 1".into()));
        }
        if feed.default_radius > feed.max_radius {
            return Err(Error::InvalidConfig(format!(
                "feed.default_radius ({}) exceeds feed.max_radius ({})",
                feed.default_radius, feed.max_radius
            )));
        }
        if !feed.base_score.is_finite() || !feed.paid_boost.is_finite() {
            return Err(Error::InvalidConfig("feed score weights must be finite".into()));
        }
        Ok(())
    }

    /// Catalog directory from the settings, expanded and resolved against `base`.
    pub fn catalog_dir(&self, base: &Path) -> Option<PathBuf> {
        self.data.catalog_dir.as_deref().map(|p| resolve_with_base(base, p))
    }
}

pub struct Config {
    figment: Figment,
    env: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(&env_name)
    }

    pub fn load_for_env(env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("plugmein.toml"));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file("plugmein.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("plugmein.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("plugmein.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("PLUGMEIN_").split("__"));
        Self::from_figment(figment, env_name)
    }

    pub fn from_figment(figment: Figment, env_name: &str) -> Result<Self> {
        let config = Self { figment, env: env_name.to_string() };
        config.settings()?.validate()?;
        Ok(config)
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
