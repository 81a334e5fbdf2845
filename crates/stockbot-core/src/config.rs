//! Lightweight configuration loader and typed settings sections.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Nested keys in env vars are separated by `__` (`APP_CATALOG__BASE_URL`).

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_in(Path::new("."))
    }

    /// Load `config.toml` and its environment overlay from `dir`.
    pub fn load_in(dir: &Path) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(dir.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    /// Extract a section; absent sections and absent fields take their defaults.
    pub fn section<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if !self.figment.contains(key) {
            return Ok(T::default());
        }
        self.get(key)
    }

    pub fn catalog(&self) -> Result<CatalogSettings> {
        self.section("catalog")
    }

    pub fn matching(&self) -> Result<MatchSettings> {
        self.section("matching")
    }

    fn validate(&self) -> Result<()> {
        let matching = self.matching()?;
        if !(0.0..=1.0).contains(&matching.similarity_threshold) {
            return Err(Error::InvalidConfig(format!(
                "matching.similarity_threshold must be within [0, 1], got {}",
                matching.similarity_threshold
            )));
        }
        if self.catalog()?.timeout_secs == 0 {
            return Err(Error::InvalidConfig("catalog.timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

/// Remote catalog endpoint and cache policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub cache_ttl_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { base_url: None, timeout_secs: 10, cache_ttl_secs: 60 * 60 }
    }
}

/// Tunables for extraction, fallback search and result shaping.
///
/// `similarity_threshold` and `fallback_words` have no empirical basis yet;
/// they are exposed so they can be tuned against real traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub similarity_threshold: f64,
    pub fallback_words: usize,
    pub min_word_len: usize,
    pub max_options: usize,
    pub max_alternatives: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            fallback_words: 3,
            min_word_len: 4,
            max_options: 5,
            max_alternatives: 3,
        }
    }
}
