//! Configuration for the `folio` tool.
//!
//! [`FolioConfig`] is loaded with `confyg` from a TOML file, `FOLIO_*`
//! environment variables, and defaults.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! Environment variables such as `FOLIO_SITE_URL` override file values.

use std::path::PathBuf;

use confyg::Confygery;
use confyg::env::{self, KVMap};
use folio_api::ServerConfig;
use folio_content::{ContentRepository, ProcessingOptions};
use folio_core::{Error, Result};
use folio_search::SearchConfig;
use folio_seo::SiteConfig;
use serde::{Deserialize, Serialize};

use crate::config_handlers::{get_nested_value, set_nested_value};

/// Name used for the config directory and environment prefix.
pub const PROJECT_NAME: &str = "folio";

const ENV_PREFIX: &str = "FOLIO";

/// Config sections that `FOLIO_<SECTION>_*` variables may override.
const ENV_SECTIONS: [&str; 4] = ["content", "search", "site", "server"];

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the `folio` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Where content lives and how it is processed.
    pub content: ContentConfig,

    /// Search weights and limits.
    pub search: SearchConfig,

    /// Site identity used for SEO output.
    pub site: SiteConfig,

    /// HTTP server settings.
    pub server: ServerConfig,
}

/// Content location and processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding `blogs/` and `projects/`.
    pub root: String,

    /// Reading speed used for reading-time estimates.
    pub words_per_minute: u32,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: "content".to_string(),
            words_per_minute: ProcessingOptions::default().words_per_minute,
        }
    }
}

impl ContentConfig {
    pub fn processing_options(&self) -> ProcessingOptions {
        ProcessingOptions {
            words_per_minute: self.words_per_minute,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A config path that does not exist is not an error; defaults apply.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let file = match Self::resolve_config_path(config_path).filter(|p| p.exists()) {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Confygery::new()
                    .map_err(|e| Error::config(format!("config init: {e}")))?
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?
                    .build::<toml::Value>()
                    .map_err(|e| Error::config(format!("config build: {e}")))?
            }
            None => toml::Value::Table(toml::map::Map::new()),
        };

        let env_vars = env::scan(ENV_PREFIX, &ENV_SECTIONS.map(String::from));
        Self::from_layers(file, &env_vars)
    }

    /// Overlay `FOLIO_<SECTION>_<KEY>` values on a parsed config file.
    ///
    /// Environment values arrive as strings; each is converted to the type of
    /// the field it overrides, so `FOLIO_SERVER_PORT=8080` sets an integer.
    /// Keys of nested tables use `_` as separator (`FOLIO_SITE_AUTHOR_NAME`).
    fn from_layers(mut value: toml::Value, env_vars: &KVMap) -> Result<Self> {
        let schema = toml::Value::try_from(Self::default())
            .map_err(|e| Error::config(e.to_string()))?;

        for section in ENV_SECTIONS {
            for kv in env_vars.section(section).unwrap_or_default() {
                let path = env_key_path(&schema, section, kv.key());
                let coerced = coerce_env_value(kv.value(), get_nested_value(&schema, &path))
                    .map_err(|expected| {
                        Error::config(format!(
                            "{ENV_PREFIX}_{}_{}: expected {expected}, got {:?}",
                            section.to_uppercase(),
                            kv.key().to_uppercase(),
                            kv.value()
                        ))
                    })?;
                log::debug!("Config override from environment: {path}");
                set_nested_value(&mut value, &path, coerced)?;
            }
        }

        value
            .try_into()
            .map_err(|e| Error::config(format!("config build: {e}")))
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `FOLIO_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, ENV_PREFIX, &mut vars);
        Ok(vars)
    }

    /// A repository over the configured content root.
    pub fn repository(&self) -> ContentRepository {
        ContentRepository::from_root(&self.content.root)
            .with_options(self.content.processing_options())
    }
}

/// Dotted path for an environment key within `section`.
///
/// `author_name` under `site` resolves to `site.author.name` when `author`
/// is a table of the default config; unknown keys stay flat.
fn env_key_path(schema: &toml::Value, section: &str, key: &str) -> String {
    let mut path = section.to_string();
    let mut node = get_nested_value(schema, section);
    let mut rest = key;

    while let Some(table) = node.and_then(toml::Value::as_table) {
        if table.contains_key(rest) {
            break;
        }
        let Some((name, child)) = table.iter().find(|(name, child)| {
            child.is_table()
                && rest
                    .strip_prefix(name.as_str())
                    .is_some_and(|r| r.starts_with('_'))
        }) else {
            break;
        };
        path.push('.');
        path.push_str(name);
        rest = &rest[name.len() + 1..];
        node = Some(child);
    }

    format!("{path}.{rest}")
}

/// Convert a raw environment string to the type of the value it replaces.
///
/// Arrays are read as JSON, matching what [`FolioConfig::to_env_vars`] writes.
fn coerce_env_value(
    raw: &str,
    target: Option<&toml::Value>,
) -> std::result::Result<toml::Value, &'static str> {
    match target {
        Some(toml::Value::Integer(_)) => raw
            .trim()
            .parse()
            .map(toml::Value::Integer)
            .map_err(|_| "an integer"),
        Some(toml::Value::Float(_)) => raw
            .trim()
            .parse()
            .map(toml::Value::Float)
            .map_err(|_| "a number"),
        Some(toml::Value::Boolean(_)) => raw
            .trim()
            .parse()
            .map(toml::Value::Boolean)
            .map_err(|_| "true or false"),
        Some(toml::Value::Array(_)) => serde_json::from_str(raw).map_err(|_| "a JSON array"),
        _ => Ok(toml::Value::String(raw.to_string())),
    }
}

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Integer(i) => out.push((prefix.to_string(), i.to_string())),
        toml::Value::Float(f) => out.push((prefix.to_string(), f.to_string())),
        toml::Value::Boolean(b) => out.push((prefix.to_string(), b.to_string())),
        toml::Value::Datetime(dt) => out.push((prefix.to_string(), dt.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
