use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// National holidays excluded from business-day counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Parses a comma separated list such as `2024-01-01, 2024-12-25`.
    pub fn parse_list(list: &str) -> Result<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                NaiveDate::parse_from_str(entry, DATE_FORMAT)
                    .with_context(|| format!("invalid holiday date '{}'", entry))
            })
            .collect::<Result<HashSet<_>>>()
            .map(|dates| Self { dates })
    }

    /// Loads one date per line. Blank lines and `#` comments are skipped.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read holidays file {}", path.display()))?;

        let mut dates = HashSet::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let date = NaiveDate::parse_from_str(line, DATE_FORMAT).map_err(|e| {
                anyhow!(
                    "{}:{}: invalid holiday date '{}': {}",
                    path.display(),
                    idx + 1,
                    line,
                    e
                )
            })?;
            dates.insert(date);
        }

        Ok(Self { dates })
    }

    /// Union of this calendar with `extra`.
    pub fn merged_with<I>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut dates = self.dates.clone();
        dates.extend(extra);
        Self { dates }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.contains(date)
    }

    pub fn dates(&self) -> &HashSet<NaiveDate> {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn sorted(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<_> = self.dates.iter().copied().collect();
        dates.sort_unstable();
        dates
    }
}
