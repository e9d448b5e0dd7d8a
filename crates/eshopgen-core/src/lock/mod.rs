//! # Lock File
//!
//! The `eshopgen.lock` file stores the seed, pinned "today", volumes and a
//! hash of the DDL so that a later `eshopgen generate --from-lock` writes a
//! byte-identical script.
//!
//! ## Lifecycle
//!
//! - every successful `generate` rewrites the lock from the plan it ran
//! - `generate --from-lock` rebuilds that plan with [`types::LockFile::plan`]
//!   and refuses to run when the DDL hash moved, unless `--force`
//! - `check` compares the hash only and never writes the file
//!
//! The file is machine-generated. On a merge conflict, keep either side
//! and rerun `eshopgen generate --force`.

pub mod types;

use std::fs;
use std::path::Path;

use self::types::LockFile;
use crate::error::{EshopGenError, Result};

/// Default lock file name.
pub const LOCK_FILE_NAME: &str = "eshopgen.lock";

/// Write a lock file to disk atomically.
///
/// The JSON goes to a hidden sibling of `path` (`.<name>.tmp`), is synced,
/// and is then renamed over `path`. A run that dies mid-write leaves the
/// previous lock file untouched, and two lock files in one directory never
/// share a temp name.
pub fn write_lock_file(lock: &LockFile, path: &Path) -> Result<()> {
    use std::io::Write;

    let mut json = serde_json::to_string_pretty(lock).map_err(|e| EshopGenError::LockFile {
        message: format!("Failed to serialize lock file: {}", e),
    })?;
    json.push('\n');

    let tmp_path = temp_path_for(path);

    let mut file = fs::File::create(&tmp_path).map_err(|e| EshopGenError::Output {
        message: format!("Failed to create temp lock file at {}", tmp_path.display()),
        source: e,
    })?;
    file.write_all(json.as_bytes())
        .map_err(|e| EshopGenError::Output {
            message: format!("Failed to write temp lock file at {}", tmp_path.display()),
            source: e,
        })?;
    file.sync_all().map_err(|e| EshopGenError::Output {
        message: "Failed to sync lock file to disk".to_string(),
        source: e,
    })?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(EshopGenError::Output {
            message: format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            ),
            source: e,
        });
    }

    tracing::debug!("Wrote lock file to {}", path.display());
    Ok(())
}

fn temp_path_for(path: &Path) -> std::path::PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| LOCK_FILE_NAME.to_string());
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    dir.join(format!(".{}.tmp", name))
}

/// Read a lock file from disk.
///
/// A missing or unreadable file is an `Output` error; content that is not a
/// lock file (hand edits, merge markers) is a `LockFile` error.
pub fn read_lock_file(path: &Path) -> Result<LockFile> {
    let content = fs::read_to_string(path).map_err(|e| EshopGenError::Output {
        message: format!("Failed to read lock file from {}", path.display()),
        source: e,
    })?;
    let lock: LockFile = serde_json::from_str(&content).map_err(|e| EshopGenError::LockFile {
        message: format!("Failed to parse lock file: {}", e),
    })?;
    Ok(lock)
}

/// Compare the lock's DDL hash with the current one.
///
/// Returns `SchemaDrift` when they differ and `force` is not set.
pub fn verify_ddl_hash(lock: &LockFile, current_hash: &str, force: bool) -> Result<()> {
    if lock.ddl_hash == current_hash {
        return Ok(());
    }
    if force {
        tracing::warn!("DDL changed since the lock file was written; continuing because of --force");
        return Ok(());
    }
    Err(EshopGenError::SchemaDrift {
        message: format!(
            "DDL hash {} does not match the lock file ({}).\n  Rerun with --force to regenerate anyway",
            short_hash(current_hash),
            short_hash(&lock.ddl_hash)
        ),
    })
}

fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::plan::{GenerationPlan, Volumes};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn make_lock(hash: &str, seed: u64) -> LockFile {
        let plan = GenerationPlan::new(
            Volumes::uniform(25),
            seed,
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        );
        LockFile::new(hash.to_string(), &plan)
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCK_FILE_NAME);

        write_lock_file(&make_lock("abc123", 42), &path).unwrap();
        let loaded = read_lock_file(&path).unwrap();

        assert_eq!(loaded.ddl_hash, "abc123");
        assert_eq!(loaded.seed, 42);
        assert_eq!(loaded.volumes, Volumes::uniform(25));
        assert_eq!(loaded.eshopgen_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_plan_round_trip() {
        let plan = make_lock("abc123", 7).plan().unwrap();
        assert_eq!(plan.seed, 7);
        assert_eq!(plan.today, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    }

    #[test]
    fn test_malformed_today_yields_no_plan() {
        let mut lock = make_lock("abc123", 7);
        lock.today = "yesterday".to_string();
        assert!(lock.plan().is_none());
    }

    #[test]
    fn test_read_nonexistent_file() {
        assert!(read_lock_file(Path::new("/nonexistent/eshopgen.lock")).is_err());
    }

    #[test]
    fn test_read_garbage_is_lock_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCK_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            read_lock_file(&path),
            Err(EshopGenError::LockFile { .. })
        ));
    }

    #[test]
    fn test_atomic_write_no_tmp_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCK_FILE_NAME);

        write_lock_file(&make_lock("abc123", 42), &path).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join(".eshopgen.lock.tmp").exists());
    }

    #[test]
    fn test_temp_name_follows_lock_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nightly.lock");

        write_lock_file(&make_lock("abc123", 42), &path).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join(".nightly.lock.tmp").exists());
        assert_eq!(
            temp_path_for(Path::new("eshopgen.lock")),
            Path::new(".").join(".eshopgen.lock.tmp")
        );
        assert!(fs::read_to_string(&path).unwrap().ends_with("}\n"));
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCK_FILE_NAME);

        write_lock_file(&make_lock("abc123", 42), &path).unwrap();
        write_lock_file(&make_lock("def456", 99), &path).unwrap();

        let loaded = read_lock_file(&path).unwrap();
        assert_eq!(loaded.ddl_hash, "def456");
        assert_eq!(loaded.seed, 99);
    }

    #[test]
    fn test_verify_ddl_hash() {
        let lock = make_lock("abc123", 1);
        assert!(verify_ddl_hash(&lock, "abc123", false).is_ok());
        assert!(verify_ddl_hash(&lock, "def456", true).is_ok());
        assert!(matches!(
            verify_ddl_hash(&lock, "def456", false),
            Err(EshopGenError::SchemaDrift { .. })
        ));
    }
}
