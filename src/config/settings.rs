//! User settings for FinanceFlow
//!
//! Display preferences and the daily spending goal. The goal lives here and
//! is passed into the metrics engine, never hardcoded inside it.

use serde::{Deserialize, Serialize};

use super::paths::FlowPaths;
use crate::error::FlowError;
use crate::models::Money;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Daily spending goal, in cents
    #[serde(default = "default_daily_goal")]
    pub daily_goal: Money,

    /// How many transactions the dashboard lists
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_daily_goal() -> Money {
    Money::from_units(100)
}

fn default_recent_limit() -> usize {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            daily_goal: default_daily_goal(),
            recent_limit: default_recent_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FlowPaths) -> Result<Self, FlowError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FlowError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FlowError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FlowPaths) -> Result<(), FlowError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FlowError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FlowError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the dashboard cannot work with
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.daily_goal.is_negative() {
            return Err(FlowError::Config(format!(
                "Daily goal cannot be negative: {}",
                self.daily_goal
            )));
        }
        if self.date_format.trim().is_empty() {
            return Err(FlowError::Config("Date format cannot be empty".into()));
        }
        Ok(())
    }

    /// Settings with the daily goal replaced for a single run
    pub fn with_daily_goal(mut self, goal: Money) -> Self {
        self.daily_goal = goal;
        self
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.daily_goal, Money::from_units(100));
        assert_eq!(settings.currency_symbol, "R$");
        assert_eq!(settings.recent_limit, 10);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::default().with_daily_goal(Money::from_units(80));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.daily_goal, Money::from_units(80));
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"daily_goal": 5000}"#).unwrap();
        assert_eq!(settings.daily_goal, Money::from_units(50));
        assert_eq!(settings.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_negative_goal_rejected() {
        let settings = Settings::default().with_daily_goal(Money::from_cents(-1));
        assert!(matches!(settings.validate(), Err(FlowError::Config(_))));
    }

    #[test]
    fn test_format_money() {
        let settings = Settings::default();
        assert_eq!(settings.format_money(Money::from_units(2162)), "R$ 2162.00");
    }
}
