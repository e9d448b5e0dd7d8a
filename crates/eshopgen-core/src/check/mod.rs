//! # Schema Check
//!
//! Compares the tables and columns eshopgen writes against what the loaded
//! DDL declares, and fingerprints the DDL so a lock file can tell when the
//! schema changed since the last run.

use serde::{Deserialize, Serialize};

use crate::schema::ddl::DdlSchema;
use crate::schema::tables::{TableDef, ALL_TABLES};

/// One mismatch between the emitted inserts and the DDL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    MissingTable { table: String },
    MissingColumn { table: String, column: String },
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::MissingTable { table } => {
                write!(f, "table {} is populated but not declared in the DDL", table)
            }
            Finding::MissingColumn { table, column } => write!(
                f,
                "column {}.{} is populated but not declared in the DDL",
                table, column
            ),
        }
    }
}

/// Result of checking the DDL against the emitted column lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    pub tables_declared: usize,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Human-readable summary for terminal output.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return format!(
                "Schema OK: all {} populated tables are declared ({} tables in DDL).",
                ALL_TABLES.len(),
                self.tables_declared
            );
        }
        let mut lines = vec![format!("{} schema mismatches:", self.findings.len())];
        lines.extend(self.findings.iter().map(|f| format!("  - {}", f)));
        lines.join("\n")
    }
}

/// Check every populated table against the scanned DDL.
///
/// A missing table yields a single finding rather than one per column.
pub fn check_schema(ddl: &DdlSchema) -> CheckReport {
    check_tables(ddl, &ALL_TABLES)
}

fn check_tables(ddl: &DdlSchema, tables: &[TableDef]) -> CheckReport {
    let mut findings = Vec::new();
    for table in tables {
        if !ddl.has_table(table.name) {
            findings.push(Finding::MissingTable {
                table: table.name.to_string(),
            });
            continue;
        }
        for column in table.columns {
            if !ddl.has_column(table.name, column) {
                findings.push(Finding::MissingColumn {
                    table: table.name.to_string(),
                    column: column.to_string(),
                });
            }
        }
    }
    CheckReport {
        tables_declared: ddl.table_count(),
        findings,
    }
}

/// SHA-256 of the DDL text, hex encoded.
///
/// Line endings are normalized first so a checkout with CRLF endings hashes
/// the same as one with LF.
pub fn compute_ddl_hash(ddl: &str) -> String {
    use sha2::{Digest, Sha256};
    let normalized = ddl.replace("\r\n", "\n");
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ddl::scan_ddl;

    const FULL_DDL: &str = r#"
CREATE TABLE Category (category_id NUMBER, category_name VARCHAR2(100), parent_id NUMBER);
CREATE TABLE Customer (customer_id NUMBER, first_name VARCHAR2(50), last_name VARCHAR2(50),
    email VARCHAR2(100), city VARCHAR2(50), registration_date DATE);
CREATE TABLE Product (product_id NUMBER, product_name VARCHAR2(100), list_price NUMBER(10,2),
    cost_price NUMBER(10,2), sku VARCHAR2(20), category_id NUMBER);
CREATE TABLE "Order" (order_id NUMBER, order_date DATE, status VARCHAR2(20), customer_id NUMBER);
CREATE TABLE Order_item (order_item_id NUMBER, quantity NUMBER, unit_price NUMBER(10,2),
    product_id NUMBER, order_id NUMBER);
CREATE TABLE Inventory_log (log_id NUMBER, change_amount NUMBER, reason VARCHAR2(20),
    log_date DATE, product_id NUMBER);
"#;

    #[test]
    fn test_complete_ddl_is_clean() {
        let report = check_schema(&scan_ddl(FULL_DDL));
        assert!(report.is_clean(), "{}", report.summary());
        assert_eq!(report.tables_declared, 6);
    }

    #[test]
    fn test_missing_table_and_column() {
        let ddl = FULL_DDL
            .replace("CREATE TABLE Inventory_log", "CREATE TABLE Stock_log")
            .replace("sku VARCHAR2(20),", "");
        let report = check_schema(&scan_ddl(&ddl));

        assert_eq!(
            report.findings,
            vec![
                Finding::MissingColumn {
                    table: "Product".to_string(),
                    column: "sku".to_string()
                },
                Finding::MissingTable {
                    table: "Inventory_log".to_string()
                },
            ]
        );
        assert!(report.summary().contains("Product.sku"));
    }

    #[test]
    fn test_hash_is_stable_across_line_endings() {
        let lf = compute_ddl_hash("CREATE TABLE a (id NUMBER);\n");
        let crlf = compute_ddl_hash("CREATE TABLE a (id NUMBER);\r\n");
        assert_eq!(lf, crlf);
        assert_eq!(lf.len(), 64);
        assert_ne!(lf, compute_ddl_hash("CREATE TABLE b (id NUMBER);\n"));
    }
}
