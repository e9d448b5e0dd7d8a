pub mod csv;
pub mod json;
pub mod sql;

use std::str::FromStr;

use crate::error::EshopGenError;

/// Default location of the generated script, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "database/Eshop_structure_full.sql";

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Sql,
    Json,
    Csv,
}

impl OutputFormat {
    /// Infer the format from a file extension, defaulting to SQL.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(".json") {
            OutputFormat::Json
        } else if path.ends_with(".csv") {
            OutputFormat::Csv
        } else {
            OutputFormat::Sql
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Sql => "sql",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = EshopGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sql" => Ok(OutputFormat::Sql),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(EshopGenError::Config {
                message: format!("Unknown output format '{}'. Expected sql, json or csv", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("out/seed.json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path("seed.csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(DEFAULT_OUTPUT_PATH), OutputFormat::Sql);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
