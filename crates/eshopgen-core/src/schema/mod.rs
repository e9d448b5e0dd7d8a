//! # Schema Loader
//!
//! Reads the DDL script that the generated inserts target. The text is copied
//! verbatim into the output script, so loading is the only step that can stop
//! a run before anything is written.

pub mod ddl;
pub mod tables;

use std::path::{Path, PathBuf};

use crate::error::{EshopGenError, Result};

/// Default location of the schema script, relative to the working directory.
pub const DEFAULT_SCHEMA_PATH: &str = "database/Eshop_structure.sql";

/// The loaded DDL text together with where it came from.
#[derive(Debug, Clone)]
pub struct SchemaSource {
    pub path: PathBuf,
    pub ddl: String,
}

impl SchemaSource {
    /// Scan the DDL for `CREATE TABLE` blocks.
    pub fn scan(&self) -> ddl::DdlSchema {
        ddl::scan_ddl(&self.ddl)
    }
}

/// Read a DDL file in full.
///
/// A missing file is reported as `SchemaNotFound`; any other I/O failure as
/// `SchemaRead`.
pub fn load_schema(path: &Path) -> Result<SchemaSource> {
    if !path.exists() {
        return Err(EshopGenError::SchemaNotFound {
            path: path.to_path_buf(),
        });
    }

    let ddl = std::fs::read_to_string(path).map_err(|e| EshopGenError::SchemaRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Loaded {} bytes of DDL from {}", ddl.len(), path.display());

    Ok(SchemaSource {
        path: path.to_path_buf(),
        ddl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_schema() {
        let err = load_schema(Path::new("/nonexistent/Eshop_structure.sql")).unwrap_err();
        assert!(matches!(err, EshopGenError::SchemaNotFound { .. }));
        assert!(format!("{}", err).contains("Eshop_structure.sql"));
    }

    #[test]
    fn test_load_schema_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.sql");
        std::fs::write(&path, "CREATE TABLE Category (category_id NUMBER);\n").unwrap();

        let source = load_schema(&path).unwrap();
        assert_eq!(source.path, path);
        assert!(source.ddl.starts_with("CREATE TABLE Category"));
        assert!(source.scan().has_table("category"));
    }
}
