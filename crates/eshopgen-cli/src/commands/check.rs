use std::path::Path;
use std::process;

use anyhow::{Context, Result};

use eshopgen_core::check::{check_schema, compute_ddl_hash};
use eshopgen_core::config;
use eshopgen_core::lock::{self, LOCK_FILE_NAME};
use eshopgen_core::schema::{load_schema, DEFAULT_SCHEMA_PATH};

use crate::args::{CheckArgs, CheckFormat};

/// Check the DDL against the populated tables and, if present, the lock file.
///
/// Exit codes:
///   0: DDL declares every populated column and matches the lock
///   1: mismatches or drift found (or error)
pub fn run(args: &CheckArgs) -> Result<()> {
    let config = config::read_config(Path::new("."))?.unwrap_or_default();
    let schema_path = args
        .schema
        .clone()
        .or(config.paths.schema)
        .unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string());

    let schema = load_schema(Path::new(&schema_path))?;
    let report = check_schema(&schema.scan());
    let current_hash = compute_ddl_hash(&schema.ddl);

    let lock_path = Path::new(LOCK_FILE_NAME);
    let locked_hash = if lock_path.exists() {
        Some(lock::read_lock_file(lock_path)?.ddl_hash)
    } else {
        tracing::debug!("No {} found; skipping drift check", LOCK_FILE_NAME);
        None
    };
    let drift = locked_hash.as_deref().is_some_and(|h| h != current_hash);

    match args.format {
        CheckFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "schema": schema_path,
                "report": report,
                "ddl_hash": current_hash,
                "locked_ddl_hash": locked_hash,
                "drift": drift,
            }))
            .context("Failed to serialize check report")?;
            println!("{}", json);
        }
        CheckFormat::Text => {
            println!("{}", report.summary());
            match &locked_hash {
                None => println!("No {} found; nothing to compare.", LOCK_FILE_NAME),
                Some(_) if drift => println!(
                    "DDL changed since {} was written. Run `eshopgen generate --force` to refresh it.",
                    LOCK_FILE_NAME
                ),
                Some(_) => println!("DDL matches {}.", LOCK_FILE_NAME),
            }
        }
    }

    if drift || !report.is_clean() {
        process::exit(1);
    }

    Ok(())
}
