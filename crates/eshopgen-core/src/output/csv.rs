use std::io::Write;

use crate::error::{EshopGenError, Result};
use crate::generate::engine::{GeneratedData, TableRows};

/// Write generated data as CSV, one section per table.
/// Sections are introduced by a `# Table: <name>` comment line.
pub fn write_csv<W: Write>(writer: &mut W, data: &GeneratedData) -> Result<()> {
    for table in data.tables() {
        if table.rows.is_empty() {
            continue;
        }

        writeln!(writer, "# Table: {}", table.table.name).map_err(|e| EshopGenError::Output {
            message: format!("writing CSV header for {}", table.table.name),
            source: e,
        })?;
        write_csv_table(writer, &table)?;
        writeln!(writer).map_err(|e| EshopGenError::Output {
            message: "writing newline".to_string(),
            source: e,
        })?;
    }

    Ok(())
}

/// Write the column header and rows of a single table.
pub fn write_csv_table<W: Write>(writer: &mut W, table: &TableRows) -> Result<()> {
    let header: Vec<String> = table.table.columns.iter().map(|c| csv_escape(c)).collect();
    writeln!(writer, "{}", header.join(",")).map_err(|e| EshopGenError::Output {
        message: format!("writing CSV columns for {}", table.table.name),
        source: e,
    })?;

    for row in &table.rows {
        let values: Vec<String> = row.iter().map(|v| csv_escape(&v.to_csv_string())).collect();
        writeln!(writer, "{}", values.join(",")).map_err(|e| EshopGenError::Output {
            message: format!("writing CSV row for {}", table.table.name),
            source: e,
        })?;
    }

    Ok(())
}

/// Escape a string for CSV: quote if it contains comma, quote, or newline.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::category::generate_categories;

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("hello"), "hello");
        assert_eq!(csv_escape("hello,world"), "\"hello,world\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_empty_tables_are_skipped() {
        let data = GeneratedData {
            categories: generate_categories(),
            ..GeneratedData::default()
        };
        let mut buf = Vec::new();
        write_csv(&mut buf, &data).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.starts_with("# Table: Category\ncategory_id,category_name,parent_id\n"));
        assert!(out.contains("\n1,Electronics,\n"));
        assert!(out.contains("\n9,Office Laptops,6\n"));
        assert!(!out.contains("# Table: Customer"));
    }
}
