//! # Error Types
//!
//! Defines `EshopGenError`, the unified error enum for every failure mode in
//! the eshopgen pipeline. Variants carry the path, table or setting involved
//! so a failed run can be diagnosed from the message alone.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in eshopgen operations.
#[derive(Error, Debug)]
pub enum EshopGenError {
    #[error("Schema file '{}' not found.\n  Pass --schema <path> or set [paths] schema in eshopgen.toml", path.display())]
    SchemaNotFound { path: PathBuf },

    #[error("Failed to read schema file '{}': {source}", path.display())]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot generate {table} rows: they reference {referenced}, but {referenced} has no rows.\n  Raise the {referenced} volume or set the {table} volume to 0")]
    EmptyReferencePool {
        table: &'static str,
        referenced: &'static str,
    },

    #[error("{table} row references {referenced} id {id}, which was never generated")]
    MissingReference {
        table: &'static str,
        referenced: &'static str,
        id: i64,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Output error: {message}: {source}")]
    Output {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock file error: {message}")]
    LockFile { message: String },

    #[error("Schema drift detected: {message}")]
    SchemaDrift { message: String },
}

pub type Result<T> = std::result::Result<T, EshopGenError>;
