use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::holidays::HolidayCalendar;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Rate limiting
    pub rate_per_min: u32,

    pub log_dir: String,

    pub national_holidays: HolidayCalendar,
    pub holidays_file: Option<PathBuf>,
}

fn var_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    var_or(lookup, key, default)
        .trim()
        .parse()
        .with_context(|| format!("{} must be a valid number", key))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, applying the defaults for
    /// missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            server_addr: var_or(&lookup, "SERVER_ADDR", "127.0.0.1:8080"),
            api_prefix: var_or(&lookup, "API_PREFIX", "/api"),
            rate_per_min: parse_var(&lookup, "RATE_PER_MIN", "600")?,
            log_dir: var_or(&lookup, "LOG_DIR", "logs"),
            national_holidays: HolidayCalendar::parse_list(&var_or(&lookup, "NATIONAL_HOLIDAYS", ""))
                .context("NATIONAL_HOLIDAYS is malformed")?,
            holidays_file: lookup("HOLIDAYS_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Configured holidays, merged with the holidays file when one is set.
    pub fn holiday_calendar(&self) -> Result<HolidayCalendar> {
        match &self.holidays_file {
            Some(path) => {
                let from_file = HolidayCalendar::load_file(path)?;
                Ok(self.national_holidays.merged_with(from_file.dates().iter().copied()))
            }
            None => Ok(self.national_holidays.clone()),
        }
    }
}
