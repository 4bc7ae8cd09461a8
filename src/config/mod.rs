use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::core::utils::{ensure_dir, PathResolver};
use crate::errors::{Result, VenueError};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Date that splits upcoming from past events; today when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            reference_date: None,
        }
    }
}

impl Config {
    pub fn currency_symbol(&self) -> String {
        match self.currency.to_ascii_uppercase().as_str() {
            "USD" | "CAD" | "AUD" => "$".into(),
            "EUR" => "€".into(),
            "GBP" => "£".into(),
            "JPY" => "¥".into(),
            other => format!("{other} "),
        }
    }

    /// `(grouping, decimal)` separators for the configured locale.
    pub fn separators(&self) -> (char, char) {
        let language = self
            .locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "pt" | "nl" => ('.', ','),
            "fr" => (' ', ','),
            _ => (',', '.'),
        }
    }

    /// Renders an amount with the currency symbol and thousands grouping.
    ///
    /// Whole amounts drop their cents, the way the dashboard shows totals.
    pub fn format_amount(&self, amount: f64) -> String {
        let (grouping, decimal) = self.separators();
        let sign = if amount < 0.0 { "-" } else { "" };
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = group_thousands(cents / 100, grouping);
        let fraction = cents % 100;
        if fraction == 0 {
            format!("{sign}{}{whole}", self.currency_symbol())
        } else {
            format!(
                "{sign}{}{whole}{decimal}{fraction:02}",
                self.currency_symbol()
            )
        }
    }

    pub fn reference_date_or(&self, fallback: NaiveDate) -> NaiveDate {
        self.reference_date.unwrap_or(fallback)
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Loads the stored configuration, or the defaults when none was saved.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data)
            .map_err(|err| VenueError::Config(format!("{}: {err}", self.path.display())))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_amount_groups_thousands() {
        let config = Config::default();
        assert_eq!(config.format_amount(1850.0), "$1,850");
        assert_eq!(config.format_amount(1234567.5), "$1,234,567.50");
        assert_eq!(config.format_amount(0.0), "$0");
        assert_eq!(config.format_amount(-42.25), "-$42.25");
    }

    #[test]
    fn locale_picks_separators() {
        let config = Config {
            locale: "de-DE".into(),
            currency: "EUR".into(),
            ..Config::default()
        };
        assert_eq!(config.format_amount(1234.5), "€1.234,50");
    }

    #[test]
    fn unknown_currency_uses_code_prefix() {
        let config = Config {
            currency: "chf".into(),
            ..Config::default()
        };
        assert_eq!(config.format_amount(500.0), "CHF 500");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().join("nested")).unwrap();
        let config = Config {
            currency: "EUR".into(),
            reference_date: NaiveDate::from_ymd_opt(2026, 2, 1),
            ..Config::default()
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        assert!(!manager.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "{ not json").unwrap();
        assert!(matches!(manager.load(), Err(VenueError::Config(_))));
    }
}
