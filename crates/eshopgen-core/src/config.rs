//! # Configuration File Parser
//!
//! Reads and parses `eshopgen.toml`, the optional configuration file that
//! sets paths, seed and volumes without CLI flags. Supports:
//!
//! - `[paths]`: schema input and script output locations
//! - `[generate]`: fixed seed, pinned "today", output format
//! - `[volumes]`: row counts for customers, products, orders, inventory logs
//!
//! Example `eshopgen.toml`:
//!
//! ```toml
//! [paths]
//! schema = "database/Eshop_structure.sql"
//! output = "database/Eshop_structure_full.sql"
//!
//! [generate]
//! seed = 42
//! today = "2026-01-01"
//! format = "sql"
//!
//! [volumes]
//! customers = 1000
//! products = 500
//! orders = 5000
//! inventory_logs = 10000
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{EshopGenError, Result};
use crate::generate::plan::Volumes;
use crate::output::OutputFormat;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "eshopgen.toml";

/// Top-level eshopgen.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EshopGenConfig {
    pub paths: PathsConfig,
    pub generate: GenerateConfig,
    pub volumes: VolumesConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// DDL script to copy into the output.
    pub schema: Option<String>,
    /// Where the generated script is written.
    pub output: Option<String>,
}

/// Default generation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Fixed random seed for deterministic generation.
    pub seed: Option<u64>,
    /// Pinned "today" as `YYYY-MM-DD`.
    pub today: Option<String>,
    /// Output format: sql, json or csv.
    pub format: Option<String>,
}

/// Per-table row counts. Unset entries fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VolumesConfig {
    pub customers: Option<usize>,
    pub products: Option<usize>,
    pub orders: Option<usize>,
    pub inventory_logs: Option<usize>,
}

impl VolumesConfig {
    /// Fill unset entries from `base`.
    pub fn apply_to(&self, base: Volumes) -> Volumes {
        Volumes {
            customers: self.customers.unwrap_or(base.customers),
            products: self.products.unwrap_or(base.products),
            orders: self.orders.unwrap_or(base.orders),
            inventory_logs: self.inventory_logs.unwrap_or(base.inventory_logs),
        }
    }
}

/// Read and parse an eshopgen.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be parsed.
pub fn read_config(dir: &Path) -> Result<Option<EshopGenConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| EshopGenError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let config: EshopGenConfig = toml::from_str(&content).map_err(|e| EshopGenError::Config {
        message: format!("Failed to parse {}: {}", path.display(), e),
    })?;

    config.validate()?;
    tracing::debug!("Loaded configuration from {}", path.display());

    Ok(Some(config))
}

impl EshopGenConfig {
    /// Validate values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        self.today()?;
        self.format()?;
        Ok(())
    }

    /// The pinned "today", if configured.
    pub fn today(&self) -> Result<Option<NaiveDate>> {
        self.generate
            .today
            .as_deref()
            .map(parse_date)
            .transpose()
    }

    /// The configured output format, if any.
    pub fn format(&self) -> Result<Option<OutputFormat>> {
        self.generate
            .format
            .as_deref()
            .map(str::parse)
            .transpose()
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| EshopGenError::Config {
        message: format!("Invalid date '{}': {}. Expected YYYY-MM-DD", s, e),
    })
}
