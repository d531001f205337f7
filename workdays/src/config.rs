//! TOML configuration.
//!
//! Every field is optional; a missing file behaves like an empty one.
//!
//! ```toml
//! holidays_file = "holidays.txt"
//! today = "2024-06-01"
//!
//! [policy]
//! tail_holidays = "skip-first"   # or "exclude-anchor"
//! final_day = "checked"          # or "unchecked"
//!
//! [weekends]
//! seed = true
//! from = "2024-01-01"
//! to = "2025-12-31"
//! label = "weekend"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use wd_calc::CalculatorPolicy;
use wd_time::holiday_set::WEEKEND_LABEL;
use wd_time::{Date, FileStorage, Settings};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "workdays.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkdaysConfig {
    /// Holiday file location.
    #[serde(default = "default_holidays_file")]
    pub holidays_file: PathBuf,

    /// Reference date override, `YYYY-MM-DD`.  The local date when absent.
    #[serde(default)]
    pub today: Option<String>,

    /// Calculation switches.
    #[serde(default)]
    pub policy: CalculatorPolicy,

    /// Weekend pre-population.
    #[serde(default)]
    pub weekends: WeekendsToml,
}

/// `[weekends]` section: mark Saturdays and Sundays of a date range as
/// holidays when the holiday file is opened.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeekendsToml {
    /// Seed weekends at startup (in memory until the next save).
    #[serde(default)]
    pub seed: bool,
    /// First day of the range, `YYYY-MM-DD`.
    #[serde(default = "default_weekends_from")]
    pub from: String,
    /// Last day of the range, `YYYY-MM-DD`.
    #[serde(default = "default_weekends_to")]
    pub to: String,
    /// Label given to the seeded weekend days.
    #[serde(default = "default_weekend_label")]
    pub label: String,
}

impl Default for WeekendsToml {
    fn default() -> Self {
        Self {
            seed: false,
            from: default_weekends_from(),
            to: default_weekends_to(),
            label: default_weekend_label(),
        }
    }
}

impl Default for WorkdaysConfig {
    fn default() -> Self {
        Self {
            holidays_file: default_holidays_file(),
            today: None,
            policy: CalculatorPolicy::default(),
            weekends: WeekendsToml::default(),
        }
    }
}

fn default_holidays_file() -> PathBuf {
    PathBuf::from(FileStorage::DEFAULT_PATH)
}
fn default_weekends_from() -> String {
    "2024-01-01".to_string()
}
fn default_weekends_to() -> String {
    "2025-12-31".to_string()
}
fn default_weekend_label() -> String {
    WEEKEND_LABEL.to_string()
}

impl WorkdaysConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse TOML config")
    }

    /// Read the configuration at `path`.
    ///
    /// When `required` is false a missing file yields the defaults.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Build the calculation settings, pinning the reference date if set.
    pub fn settings(&self) -> Result<Settings> {
        match &self.today {
            Some(s) => {
                let date = Date::parse(s)
                    .with_context(|| format!("invalid `today` in config: {s}"))?;
                Ok(Settings::with_evaluation_date(date))
            }
            None => Ok(Settings::new()),
        }
    }

    /// Return the weekend range to seed, or `None` if seeding is off.
    pub fn weekend_seed(&self) -> Result<Option<(Date, Date)>> {
        if !self.weekends.seed {
            return Ok(None);
        }
        let from = Date::parse(&self.weekends.from)
            .with_context(|| format!("invalid [weekends].from: {}", self.weekends.from))?;
        let to = Date::parse(&self.weekends.to)
            .with_context(|| format!("invalid [weekends].to: {}", self.weekends.to))?;
        Ok(Some((from, to)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_calc::{FinalDayPolicy, TailHolidayPolicy};

    #[test]
    fn empty_config_is_default() {
        let cfg = WorkdaysConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, WorkdaysConfig::default());
        assert_eq!(cfg.holidays_file, PathBuf::from("holidays.txt"));
        assert_eq!(cfg.weekend_seed().unwrap(), None);
        assert!(!cfg.settings().unwrap().has_evaluation_date());
    }

    #[test]
    fn full_config() {
        let cfg = WorkdaysConfig::from_toml_str(
            r#"
            holidays_file = "/tmp/h.txt"
            today = "2024-06-01"

            [policy]
            tail_holidays = "exclude-anchor"
            final_day = "unchecked"

            [weekends]
            seed = true
            from = "2024-06-01"
            to = "2024-06-30"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.policy.tail_holidays, TailHolidayPolicy::ExcludeAnchor);
        assert_eq!(cfg.policy.final_day, FinalDayPolicy::Unchecked);
        assert_eq!(cfg.weekends.label, "weekend");
        let (from, to) = cfg.weekend_seed().unwrap().unwrap();
        assert_eq!(to - from, 29);
        assert_eq!(
            cfg.settings().unwrap().evaluation_date().unwrap(),
            Date::from_ymd(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn partial_policy_keeps_other_default() {
        let cfg = WorkdaysConfig::from_toml_str("[policy]\nfinal_day = \"unchecked\"\n").unwrap();
        assert_eq!(cfg.policy.tail_holidays, TailHolidayPolicy::SkipFirst);
        assert_eq!(cfg.policy.final_day, FinalDayPolicy::Unchecked);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(WorkdaysConfig::from_toml_str("holiday_file = \"x\"").is_err());
        assert!(WorkdaysConfig::from_toml_str("[policy]\ntail = \"skip-first\"").is_err());
        assert!(WorkdaysConfig::from_toml_str("[policy]\nfinal_day = \"maybe\"").is_err());
    }

    #[test]
    fn bad_today_is_reported() {
        let cfg = WorkdaysConfig::from_toml_str("today = \"tomorrow\"").unwrap();
        assert!(cfg.settings().is_err());
    }
}
