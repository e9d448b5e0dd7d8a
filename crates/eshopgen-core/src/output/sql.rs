//! # SQL Script Writer
//!
//! Produces the populated schema script: the loaded DDL copied verbatim,
//! `SET DEFINE OFF;` so SQL*Plus leaves `&` in names like "Audio & Video"
//! alone, one commented section of INSERTs per table, then `COMMIT;`.

use std::io::Write;

use crate::error::{EshopGenError, Result};
use crate::generate::engine::GeneratedData;
use crate::generate::value::Value;
use crate::schema::tables::TableDef;

/// Write the complete populate script.
pub fn write_script<W: Write>(writer: &mut W, ddl: &str, data: &GeneratedData) -> Result<()> {
    write_line(writer, "-- TABLE STRUCTURE")?;
    write_raw(writer, ddl)?;
    write_raw(writer, "\n\nSET DEFINE OFF;\n")?;

    for table in data.tables() {
        write_raw(writer, &format!("\n-- INSERT {}\n", table.table.section))?;
        for row in &table.rows {
            write_line(writer, &insert_statement(&table.table, row))?;
        }
        tracing::debug!("Wrote {} {} inserts", table.rows.len(), table.table.name);
    }

    write_raw(writer, "\nCOMMIT;\n")?;
    writer.flush().map_err(|e| EshopGenError::Output {
        message: "flushing SQL script".to_string(),
        source: e,
    })
}

/// Render one `INSERT INTO ... VALUES (...);` statement.
pub fn insert_statement(table: &TableDef, values: &[Value]) -> String {
    let literals: Vec<String> = values.iter().map(Value::to_sql_literal).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table.sql_name,
        table.columns.join(", "),
        literals.join(", ")
    )
}

fn write_raw<W: Write>(writer: &mut W, s: &str) -> Result<()> {
    writer
        .write_all(s.as_bytes())
        .map_err(|e| EshopGenError::Output {
            message: "writing SQL script".to_string(),
            source: e,
        })
}

fn write_line<W: Write>(writer: &mut W, s: &str) -> Result<()> {
    writeln!(writer, "{}", s).map_err(|e| EshopGenError::Output {
        message: "writing SQL script".to_string(),
        source: e,
    })
}
