use std::io::Write;

use crate::error::{EshopGenError, Result};
use crate::generate::engine::GeneratedData;
use crate::generate::value::Value;

/// Write generated data as JSON using streaming serialization.
///
/// Writes table-by-table and row-by-row instead of building the whole JSON
/// tree in memory. Tables are keyed by name in insertion order; each row is
/// an object keyed by column name.
pub fn write_json<W: Write>(writer: &mut W, data: &GeneratedData) -> Result<()> {
    let tables = data.tables();

    write_str(writer, "{\n")?;

    for (table_idx, table) in tables.iter().enumerate() {
        let table_key = json_key(table.table.name)?;
        write_str(writer, &format!("  {}: [", table_key))?;
        if !table.rows.is_empty() {
            write_str(writer, "\n")?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            write_str(writer, "    {")?;
            for (col_idx, (column, value)) in table.table.columns.iter().zip(row).enumerate() {
                write_str(
                    writer,
                    &format!("\n      {}: {}", json_key(column)?, json_value(value)?),
                )?;
                if col_idx < row.len() - 1 {
                    write_str(writer, ",")?;
                }
            }
            write_str(writer, "\n    }")?;
            if row_idx < table.rows.len() - 1 {
                write_str(writer, ",")?;
            }
            write_str(writer, "\n")?;
        }

        write_str(writer, if table.rows.is_empty() { "]" } else { "  ]" })?;
        if table_idx < tables.len() - 1 {
            write_str(writer, ",")?;
        }
        write_str(writer, "\n")?;
    }

    write_str(writer, "}\n")?;
    Ok(())
}

fn write_str<W: Write>(writer: &mut W, s: &str) -> Result<()> {
    writer
        .write_all(s.as_bytes())
        .map_err(|e| EshopGenError::Output {
            message: "writing JSON".to_string(),
            source: e,
        })
}

/// Serialize a string as an RFC 8259-compliant JSON key.
fn json_key(s: &str) -> Result<String> {
    serde_json::to_string(s).map_err(|e| EshopGenError::Output {
        message: "encoding JSON key".to_string(),
        source: e.into(),
    })
}

fn json_value(value: &Value) -> Result<String> {
    serde_json::to_string(&value_to_json(value)).map_err(|e| EshopGenError::Output {
        message: "encoding JSON value".to_string(),
        source: e.into(),
    })
}

/// Convert a Value to its JSON representation.
///
/// Money becomes a number with cent precision; dates use `YYYY-MM-DD`.
fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Int(i) => serde_json::json!(*i),
        Value::Money(m) => serde_json::json!(m.as_f64()),
        Value::Text(s) => serde_json::Value::String(s.to_string()),
        Value::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::category::generate_categories;
    use crate::generate::records::{InventoryLog, InventoryReason};
    use chrono::NaiveDate;

    #[test]
    fn test_streaming_produces_valid_json() {
        let data = GeneratedData {
            categories: generate_categories(),
            inventory_logs: vec![InventoryLog {
                id: 1,
                change_amount: -3,
                reason: InventoryReason::Sale,
                log_date: NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(),
                product_id: 17,
            }],
            ..GeneratedData::default()
        };
        let mut buf = Vec::new();
        write_json(&mut buf, &data).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["Category"].as_array().unwrap().len(), 9);
        assert_eq!(parsed["Category"][4]["category_name"], "Audio & Video");
        assert_eq!(parsed["Category"][0]["parent_id"], serde_json::Value::Null);
        assert_eq!(parsed["Customer"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["Inventory_log"][0]["log_date"], "2025-08-09");
        assert_eq!(parsed["Inventory_log"][0]["change_amount"], -3);
    }

    #[test]
    fn test_money_is_numeric() {
        let v = value_to_json(&Value::Money(crate::generate::value::Money::from_cents(123456)));
        assert_eq!(v, serde_json::json!(1234.56));
    }
}
