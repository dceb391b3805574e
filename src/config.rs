use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::dates::parse_date;
use crate::errors::Result;
use crate::types::{Beneficiary, OccupancyWindow};

pub const DEFAULT_UPPER_UNIT_START_DATE: &str = "01/02/2024";
pub const DEFAULT_LOWER_UNIT_START_DATE: &str = "14/02/2024";

/// persisted occupancy start defaults, stored as raw day/month/year strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub upper_unit_start_date: String,
    pub lower_unit_start_date: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upper_unit_start_date: DEFAULT_UPPER_UNIT_START_DATE.to_string(),
            lower_unit_start_date: DEFAULT_LOWER_UNIT_START_DATE.to_string(),
        }
    }
}

impl Config {
    pub fn start_date(&self, beneficiary: Beneficiary) -> &str {
        match beneficiary {
            Beneficiary::Upper => &self.upper_unit_start_date,
            Beneficiary::Lower => &self.lower_unit_start_date,
        }
    }

    /// occupancy window opening at the stored start date
    pub fn occupancy(&self, beneficiary: Beneficiary, end: Option<&str>) -> Result<OccupancyWindow> {
        OccupancyWindow::parse(self.start_date(beneficiary), end)
    }

    /// replace start dates with the supplied non-empty values
    ///
    /// Values must parse as dates. Returns whether the record changed.
    pub fn apply_start_dates(&mut self, upper: Option<&str>, lower: Option<&str>) -> Result<bool> {
        let upper = supplied(upper);
        let lower = supplied(lower);
        // validate both before touching either
        for value in [upper, lower].into_iter().flatten() {
            parse_date(value)?;
        }

        let mut changed = false;
        for (slot, value) in [
            (&mut self.upper_unit_start_date, upper),
            (&mut self.lower_unit_start_date, lower),
        ] {
            if let Some(value) = value {
                if slot.as_str() != value {
                    *slot = value.to_string();
                    changed = true;
                }
            }
        }
        Ok(changed)
    }
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// storage for the persisted defaults
pub trait ConfigStore {
    /// read the record, seeding defaults when it is absent or unreadable
    fn load(&self) -> Result<Config>;

    fn save(&self, config: &Config) -> Result<()>;
}

/// pretty-printed JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn seed(&self) -> Result<Config> {
        let config = Config::default();
        self.save(&config)?;
        Ok(config)
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "config not found, seeding defaults");
            return self.seed();
        }

        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "config unreadable, reseeding defaults");
                self.seed()
            }
        }
    }

    fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), "config saved");
        Ok(())
    }
}
