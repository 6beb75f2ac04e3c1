//! Configuration management for landbridge
//!
//! Config stored at: ~/.config/landbridge/config.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use landbridge_domain::service::FeeTable;
use landbridge_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store directory override
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Quote recompute debounce window in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Seed the demo account and orders on start-up
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,

    /// Pricing table
    #[serde(default)]
    pub fee_table: FeeTable,
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

fn invalid(message: &str) -> landbridge_types::Error {
    ConfigError::InvalidValue(message.to_string()).into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            debounce_ms: default_debounce_ms(),
            output_format: OutputFormat::default(),
            seed_demo_data: true,
            fee_table: FeeTable::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("landbridge");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let store_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("landbridge");
        Ok(store_dir)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Reject tables the calculator cannot use, or that would let a
    /// larger or heavier package cost less
    pub fn validate(&self) -> Result<()> {
        let table = &self.fee_table;
        let bands = &table.size_bands;
        let Some(last_band) = bands.last() else {
            return Err(invalid("fee_table.size_bands is empty"));
        };
        if bands.windows(2).any(|w| w[0].max_total_cm >= w[1].max_total_cm) {
            return Err(invalid("fee_table.size_bands must be strictly ascending"));
        }
        if bands.windows(2).any(|w| w[0].base_fee >= w[1].base_fee) {
            return Err(invalid(
                "fee_table.size_bands base_fee must rise with size",
            ));
        }
        if table.overflow_base_fee <= last_band.base_fee {
            return Err(invalid(
                "fee_table.overflow_base_fee must exceed the largest band fee",
            ));
        }

        let tiers = &table.weight_tiers;
        if tiers.windows(2).any(|w| w[0].over_kg >= w[1].over_kg) {
            return Err(invalid("fee_table.weight_tiers must be strictly ascending"));
        }
        if tiers.iter().any(|t| t.surcharge == 0) {
            return Err(invalid("fee_table.weight_tiers surcharge must be positive"));
        }
        if tiers.windows(2).any(|w| w[0].surcharge >= w[1].surcharge) {
            return Err(invalid(
                "fee_table.weight_tiers surcharge must rise with weight",
            ));
        }
        Ok(())
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "LandBridge Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Store dir:      {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Debounce:       {} ms", self.debounce_ms)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Demo data:      {}", self.seed_demo_data)?;
        writeln!(f)?;
        writeln!(f, "Size bands:")?;
        for band in &self.fee_table.size_bands {
            writeln!(f, "  <= {:>3} cm    ¥{}", band.max_total_cm, band.base_fee)?;
        }
        writeln!(f, "  overflow     ¥{}", self.fee_table.overflow_base_fee)?;
        writeln!(f, "Weight tiers:")?;
        for tier in &self.fee_table.weight_tiers {
            writeln!(f, "  > {:>4} kg    +¥{}", tier.over_kg, tier.surcharge)?;
        }
        writeln!(f, "Express:        +¥{}", self.fee_table.express_surcharge)?;
        writeln!(f, "Time specified: +¥{}", self.fee_table.time_specified_surcharge)?;
        writeln!(f, "Insurance:      +¥{}", self.fee_table.insurance_fee)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landbridge_domain::service::fee_calculator::SizeBand;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"debounce_ms": 250}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.debounce(), Duration::from_millis(250));
        assert!(config.seed_demo_data);
        assert_eq!(config.fee_table, FeeTable::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            output_format: OutputFormat::Json,
            store_dir: Some(dir.path().join("store")),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output_format, OutputFormat::Json);
        assert_eq!(loaded.store_dir().unwrap(), dir.path().join("store"));
    }

    #[test]
    fn test_rejects_unsorted_bands() {
        let mut config = Config::default();
        config.fee_table.size_bands = vec![
            SizeBand {
                max_total_cm: 80,
                base_fee: 1330,
            },
            SizeBand {
                max_total_cm: 60,
                base_fee: 1100,
            },
        ];
        assert!(config.validate().is_err());
    }

    fn rejected_with(config: &Config, needle: &str) -> bool {
        match config.validate() {
            Err(landbridge_types::Error::Config(ConfigError::InvalidValue(msg))) => {
                msg.contains(needle)
            }
            _ => false,
        }
    }

    #[test]
    fn test_default_table_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_falling_base_fee() {
        let mut config = Config::default();
        config.fee_table.size_bands[6].base_fee = 500;
        assert!(rejected_with(&config, "base_fee"));
    }

    #[test]
    fn test_rejects_flat_base_fee() {
        let mut config = Config::default();
        let fee = config.fee_table.size_bands[2].base_fee;
        config.fee_table.size_bands[3].base_fee = fee;
        assert!(rejected_with(&config, "base_fee"));
    }

    #[test]
    fn test_rejects_overflow_not_above_last_band() {
        let mut config = Config::default();
        config.fee_table.overflow_base_fee = 100;
        assert!(rejected_with(&config, "overflow_base_fee"));

        let last = config.fee_table.size_bands.last().unwrap().base_fee;
        config.fee_table.overflow_base_fee = last;
        assert!(rejected_with(&config, "overflow_base_fee"));
    }

    #[test]
    fn test_rejects_zero_weight_surcharge() {
        let mut config = Config::default();
        config.fee_table.weight_tiers[3].surcharge = 0;
        assert!(rejected_with(&config, "surcharge"));
    }

    #[test]
    fn test_rejects_falling_weight_surcharge() {
        let mut config = Config::default();
        config.fee_table.weight_tiers[2].surcharge = 50;
        assert!(rejected_with(&config, "rise with weight"));
    }

    #[test]
    fn test_invalid_table_in_file_fails_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        config.fee_table.overflow_base_fee = 100;
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
