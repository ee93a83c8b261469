//! # Configuration
//!
//! Billz configuration is derived with [`confique`], which layers values from
//! environment variables, a TOML file and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `BILLZ_DEFAULT_CURRENCY`, `BILLZ_TOP_N`, etc.
//! 2. **Config file**: `billz.toml` in the config directory.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Only explicitly set keys are written to the file; `unset` removes a key so the
//! compiled default applies again.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default-currency` | `USD` | Currency for records that omit one |
//! | `demo-mode` | `false` | Enables sample-data generation at session start |
//! | `sample-count` | `50` | Invoices per generated burst |
//! | `sample-delay-ms` | `100` | Spacing between burst creations |
//! | `due-in-days` | `60` | Payment term for records without a due date |
//! | `top-n` | `3` | Entries listed per summary card |

use std::fs;
use std::path::{Path, PathBuf};

use confique::Config;
use serde::Serialize;

use crate::error::{BillzError, Result};
use crate::factory::FactoryDefaults;

pub const CONFIG_FILENAME: &str = "billz.toml";

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BillzConfig {
    /// Currency for records that omit one.
    #[config(env = "BILLZ_DEFAULT_CURRENCY", default = "USD")]
    pub default_currency: String,

    /// Whether sessions start with sample-data generation enabled.
    #[config(env = "BILLZ_DEMO_MODE", default = false)]
    pub demo_mode: bool,

    #[config(env = "BILLZ_SAMPLE_COUNT", default = 50)]
    pub sample_count: usize,

    #[config(env = "BILLZ_SAMPLE_DELAY_MS", default = 100)]
    pub sample_delay_ms: u64,

    #[config(env = "BILLZ_DUE_IN_DAYS", default = 60)]
    pub due_in_days: i64,

    #[config(env = "BILLZ_TOP_N", default = 3)]
    pub top_n: usize,
}

impl Default for BillzConfig {
    fn default() -> Self {
        Self {
            default_currency: "USD".to_string(),
            demo_mode: false,
            sample_count: 50,
            sample_delay_ms: 100,
            due_in_days: 60,
            top_n: 3,
        }
    }
}

/// Longest payment term `due-in-days` accepts, about a century.
pub const MAX_DUE_IN_DAYS: i64 = 36_500;

/// A settable configuration key, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DefaultCurrency,
    DemoMode,
    SampleCount,
    SampleDelayMs,
    DueInDays,
    TopN,
}

impl ConfigKey {
    pub const ALL: &'static [ConfigKey] = &[
        ConfigKey::DefaultCurrency,
        ConfigKey::DemoMode,
        ConfigKey::SampleCount,
        ConfigKey::SampleDelayMs,
        ConfigKey::DueInDays,
        ConfigKey::TopN,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == key)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::DefaultCurrency => "default-currency",
            ConfigKey::DemoMode => "demo-mode",
            ConfigKey::SampleCount => "sample-count",
            ConfigKey::SampleDelayMs => "sample-delay-ms",
            ConfigKey::DueInDays => "due-in-days",
            ConfigKey::TopN => "top-n",
        }
    }

    /// Key name inside `billz.toml`.
    fn file_key(&self) -> &'static str {
        match self {
            ConfigKey::DefaultCurrency => "default_currency",
            ConfigKey::DemoMode => "demo_mode",
            ConfigKey::SampleCount => "sample_count",
            ConfigKey::SampleDelayMs => "sample_delay_ms",
            ConfigKey::DueInDays => "due_in_days",
            ConfigKey::TopN => "top_n",
        }
    }

    /// Parses a command-line value into its TOML form.
    fn parse_value(&self, raw: &str) -> std::result::Result<toml::Value, String> {
        let raw = raw.trim();
        let invalid = || format!("Invalid value for {}: {}", self.as_str(), raw);
        match self {
            ConfigKey::DefaultCurrency => {
                if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                Ok(toml::Value::String(raw.to_ascii_uppercase()))
            }
            ConfigKey::DemoMode => parse_flag(raw).map(toml::Value::Boolean).ok_or_else(invalid),
            ConfigKey::SampleCount | ConfigKey::SampleDelayMs | ConfigKey::TopN => raw
                .parse::<u32>()
                .map(|n| toml::Value::Integer(n.into()))
                .map_err(|_| invalid()),
            ConfigKey::DueInDays => raw
                .parse::<i64>()
                .ok()
                .filter(|days| (0..=MAX_DUE_IN_DAYS).contains(days))
                .map(toml::Value::Integer)
                .ok_or_else(invalid),
        }
    }
}

/// Accepts the usual spellings of a boolean switch.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl BillzConfig {
    pub fn path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILENAME)
    }

    /// Loads the layered configuration. A missing file means compiled defaults.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config = Self::builder()
            .env()
            .file(Self::path(config_dir))
            .load()
            .map_err(|e| BillzError::Config(e.to_string()))?;
        tracing::debug!(?config, dir = %config_dir.display(), "loaded configuration");
        Ok(config)
    }

    /// Effective value of `key` in its command-line spelling.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match ConfigKey::parse(key)? {
            ConfigKey::DefaultCurrency => self.default_currency.clone(),
            ConfigKey::DemoMode => self.demo_mode.to_string(),
            ConfigKey::SampleCount => self.sample_count.to_string(),
            ConfigKey::SampleDelayMs => self.sample_delay_ms.to_string(),
            ConfigKey::DueInDays => self.due_in_days.to_string(),
            ConfigKey::TopN => self.top_n.to_string(),
        };
        Some(value)
    }

    /// Every key with its effective value, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        ConfigKey::ALL
            .iter()
            .filter_map(|k| self.get(k.as_str()).map(|v| (k.as_str(), v)))
            .collect()
    }

    /// Persists `key = value` and returns the reloaded configuration.
    pub fn set(config_dir: &Path, key: &str, value: &str) -> Result<Self> {
        let key = ConfigKey::parse(key)
            .ok_or_else(|| BillzError::Config(format!("Unknown config key: {key}")))?;
        let value = key.parse_value(value).map_err(BillzError::Config)?;
        let mut table = read_table(config_dir)?;
        table.insert(key.file_key().to_string(), value);
        write_table(config_dir, &table)?;
        Self::load(config_dir)
    }

    /// Removes a persisted key and returns the reloaded configuration.
    pub fn unset(config_dir: &Path, key: &str) -> Result<Self> {
        let key = ConfigKey::parse(key)
            .ok_or_else(|| BillzError::Config(format!("Unknown config key: {key}")))?;
        let mut table = read_table(config_dir)?;
        if table.remove(key.file_key()).is_some() {
            write_table(config_dir, &table)?;
        }
        Self::load(config_dir)
    }

    pub fn factory_defaults(&self) -> FactoryDefaults {
        FactoryDefaults {
            currency: self.default_currency.clone(),
            due_in_days: self.due_in_days,
        }
    }
}

fn read_table(config_dir: &Path) -> Result<toml::Table> {
    let path = BillzConfig::path(config_dir);
    if !path.exists() {
        return Ok(toml::Table::new());
    }
    let content = fs::read_to_string(&path)?;
    content
        .parse::<toml::Table>()
        .map_err(|e| BillzError::Config(format!("{}: {e}", path.display())))
}

fn write_table(config_dir: &Path, table: &toml::Table) -> Result<()> {
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    let content =
        toml::to_string_pretty(table).map_err(|e| BillzError::Config(e.to_string()))?;
    fs::write(BillzConfig::path(config_dir), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = BillzConfig::default();
        assert_eq!(config.default_currency, "USD");
        assert!(!config.demo_mode);
        assert_eq!(config.sample_count, 50);
        assert_eq!(config.sample_delay_ms, 100);
        assert_eq!(config.due_in_days, 60);
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = BillzConfig::load(temp.path()).unwrap();
        assert_eq!(config.due_in_days, BillzConfig::default().due_in_days);
    }

    #[test]
    fn test_set_persists_only_the_key() {
        let temp = tempdir().unwrap();
        let config = BillzConfig::set(temp.path(), "due-in-days", "30").unwrap();
        assert_eq!(config.due_in_days, 30);

        let content = fs::read_to_string(BillzConfig::path(temp.path())).unwrap();
        assert!(content.contains("due_in_days = 30"));
        assert!(!content.contains("top_n"));
    }

    #[test]
    fn test_set_normalizes_currency() {
        let temp = tempdir().unwrap();
        let config = BillzConfig::set(temp.path(), "default-currency", "eur").unwrap();
        assert_eq!(config.get("default-currency").as_deref(), Some("EUR"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let temp = tempdir().unwrap();
        let err = BillzConfig::set(temp.path(), "top-n", "many").unwrap_err();
        assert!(err.to_string().contains("Invalid value for top-n"));
        let err = BillzConfig::set(temp.path(), "colour", "red").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: colour"));
        assert!(!BillzConfig::path(temp.path()).exists());
    }

    #[test]
    fn test_due_in_days_is_bounded() {
        let temp = tempdir().unwrap();
        for raw in ["100000000", "-1", "36501"] {
            let err = BillzConfig::set(temp.path(), "due-in-days", raw).unwrap_err();
            assert!(err.to_string().contains("Invalid value for due-in-days"));
        }
        let config = BillzConfig::set(temp.path(), "due-in-days", "36500").unwrap();
        assert_eq!(config.due_in_days, MAX_DUE_IN_DAYS);
    }

    #[test]
    fn test_unset_restores_default() {
        let temp = tempdir().unwrap();
        BillzConfig::set(temp.path(), "demo-mode", "on").unwrap();
        BillzConfig::set(temp.path(), "top-n", "5").unwrap();
        let config = BillzConfig::unset(temp.path(), "demo-mode").unwrap();
        assert!(!config.demo_mode);
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn test_get_unknown_key() {
        assert_eq!(BillzConfig::default().get("nope"), None);
    }

    #[test]
    fn test_entries_cover_every_key() {
        let entries = BillzConfig::default().entries();
        let keys: Vec<_> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "default-currency",
                "demo-mode",
                "sample-count",
                "sample-delay-ms",
                "due-in-days",
                "top-n"
            ]
        );
    }

    #[test]
    fn test_flag_spellings() {
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_factory_defaults_follow_config() {
        let config = BillzConfig {
            default_currency: "JPY".into(),
            due_in_days: 14,
            ..Default::default()
        };
        let defaults = config.factory_defaults();
        assert_eq!(defaults.currency, "JPY");
        assert_eq!(defaults.due_in_days, 14);
    }
}
