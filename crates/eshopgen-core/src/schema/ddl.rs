//! # DDL Scanner
//!
//! A lightweight scan of `CREATE TABLE` statements: enough to learn which
//! tables and columns a schema script declares, without parsing types,
//! defaults or constraints. Used only to warn when the emitted column lists
//! drift from the loaded schema; the DDL itself is always copied unchanged.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

static CREATE_TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\bCREATE\s+(?:GLOBAL\s+TEMPORARY\s+)?TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?((?:"[^"]+"|[\w$#]+)(?:\s*\.\s*(?:"[^"]+"|[\w$#]+))?)\s*\("#,
    )
    .unwrap()
});

/// Leading keywords of table-level clauses inside a `CREATE TABLE` body.
const CONSTRAINT_KEYWORDS: &[&str] = &[
    "CONSTRAINT",
    "PRIMARY",
    "FOREIGN",
    "UNIQUE",
    "CHECK",
    "INDEX",
    "KEY",
];

/// One table declared in the DDL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdlTable {
    /// Name as written (quotes and schema prefix removed).
    pub name: String,
    /// Column names, lowercased, in declaration order.
    pub columns: Vec<String>,
}

/// Tables found in a DDL script, keyed by lowercased name.
#[derive(Debug, Clone, Default)]
pub struct DdlSchema {
    pub tables: IndexMap<String, DdlTable>,
}

impl DdlSchema {
    pub fn table(&self, name: &str) -> Option<&DdlTable> {
        self.tables.get(&name.to_lowercase())
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.table(name).is_some()
    }

    pub fn has_column(&self, table: &str, column: &str) -> bool {
        let column = column.to_lowercase();
        self.table(table)
            .is_some_and(|t| t.columns.iter().any(|c| *c == column))
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

/// Scan DDL text for `CREATE TABLE` blocks.
///
/// Unterminated blocks (no matching close paren) are ignored.
pub fn scan_ddl(ddl: &str) -> DdlSchema {
    let text = strip_comments(ddl);

    let mut schema = DdlSchema::default();
    for caps in CREATE_TABLE_RE.captures_iter(&text) {
        let (Some(whole), Some(raw_name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(body) = balanced_body(&text[whole.end()..]) else {
            tracing::debug!("Unterminated CREATE TABLE for {}", raw_name.as_str());
            continue;
        };

        let name = table_name(raw_name.as_str());
        let columns = split_top_level(body)
            .into_iter()
            .filter_map(column_name)
            .collect();

        schema
            .tables
            .insert(name.to_lowercase(), DdlTable { name, columns });
    }
    schema
}

/// Remove `--` and `/* */` comments that sit outside string literals and
/// quoted identifiers.
///
/// Line comments keep their newline; block comments become a single space.
fn strip_comments(ddl: &str) -> String {
    let mut out = String::with_capacity(ddl.len());
    let mut chars = ddl.chars().peekable();
    let mut in_string = false;
    let mut in_ident = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\'' if !in_ident => {
                in_string = !in_string;
                out.push(ch);
            }
            '"' if !in_string => {
                in_ident = !in_ident;
                out.push(ch);
            }
            '-' if !in_string && !in_ident && chars.peek() == Some(&'-') => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if !in_string && !in_ident && chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
                out.push(' ');
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Return the text up to the parenthesis that closes an already-open one.
fn balanced_body(text: &str) -> Option<&str> {
    let mut depth = 1usize;
    let mut in_string = false;
    let mut in_ident = false;
    for (idx, ch) in text.char_indices() {
        match ch {
            '\'' if !in_ident => in_string = !in_string,
            '"' if !in_string => in_ident = !in_ident,
            '(' if !in_string && !in_ident => depth += 1,
            ')' if !in_string && !in_ident => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a table body on commas that are not nested in parentheses or quotes.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut in_ident = false;
    let mut start = 0;
    for (idx, ch) in body.char_indices() {
        match ch {
            '\'' if !in_ident => in_string = !in_string,
            '"' if !in_string => in_ident = !in_ident,
            '(' if !in_string && !in_ident => depth += 1,
            ')' if !in_string && !in_ident => depth = depth.saturating_sub(1),
            ',' if depth == 0 && !in_string && !in_ident => {
                parts.push(&body[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}

/// Extract the column name from one body element, or `None` for
/// table-level constraint clauses.
fn column_name(element: &str) -> Option<String> {
    let element = element.trim();
    if element.is_empty() {
        return None;
    }

    if let Some(rest) = element.strip_prefix('"') {
        let end = rest.find('"')?;
        return Some(rest[..end].to_lowercase());
    }

    let token: String = element
        .chars()
        .take_while(|c| c.is_alphanumeric() || matches!(c, '_' | '$' | '#'))
        .collect();
    if token.is_empty() {
        return None;
    }
    let upper = token.to_uppercase();
    if CONSTRAINT_KEYWORDS.contains(&upper.as_str()) {
        return None;
    }
    Some(token.to_lowercase())
}

/// Drop any schema prefix and identifier quotes.
fn table_name(raw: &str) -> String {
    let last = raw.rsplit('.').next().unwrap_or(raw).trim();
    last.trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
-- Category hierarchy
CREATE TABLE Category (
    category_id   NUMBER(10) PRIMARY KEY,
    category_name VARCHAR2(100) NOT NULL,
    parent_id     NUMBER(10),
    CONSTRAINT fk_category_parent FOREIGN KEY (parent_id) REFERENCES Category(category_id)
);

/* orders use a reserved word */
CREATE TABLE shop."Order" (
    order_id    NUMBER(10) PRIMARY KEY,
    order_date  DATE DEFAULT SYSDATE,
    status      VARCHAR2(20) CHECK (status IN ('Completed', 'Pending', 'Shipped', 'Cancelled')),
    customer_id NUMBER(10)
);

CREATE TABLE Product (
    product_id NUMBER(10),
    list_price NUMBER(10, 2),
    PRIMARY KEY (product_id)
);
"#;

    #[test]
    fn test_scan_finds_tables_in_order() {
        let schema = scan_ddl(SAMPLE);
        let names: Vec<&str> = schema.tables.values().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Category", "Order", "Product"]);
    }

    #[test]
    fn test_scan_skips_constraint_clauses() {
        let schema = scan_ddl(SAMPLE);
        let category = schema.table("category").unwrap();
        assert_eq!(
            category.columns,
            vec!["category_id", "category_name", "parent_id"]
        );
        let product = schema.table("PRODUCT").unwrap();
        assert_eq!(product.columns, vec!["product_id", "list_price"]);
    }

    #[test]
    fn test_scan_handles_quoted_and_qualified_names() {
        let schema = scan_ddl(SAMPLE);
        assert!(schema.has_table("Order"));
        assert!(schema.has_column("order", "STATUS"));
        assert!(schema.has_column("Order", "customer_id"));
        assert!(!schema.has_column("Order", "product_id"));
    }

    #[test]
    fn test_commented_out_table_is_ignored() {
        let ddl = "-- CREATE TABLE Ghost (id NUMBER);\nCREATE TABLE Real (id NUMBER);";
        let schema = scan_ddl(ddl);
        assert!(!schema.has_table("ghost"));
        assert!(schema.has_table("real"));
    }

    #[test]
    fn test_comment_markers_inside_literals_are_kept() {
        let ddl = "CREATE TABLE Inventory_log (\n    log_id NUMBER,\n    reason VARCHAR2(20) DEFAULT '--', change_amount NUMBER,\n    note VARCHAR2(10) DEFAULT '/*', \"odd--name\" NUMBER, -- trailing\n    log_date DATE /* inline */\n);";
        let schema = scan_ddl(ddl);
        assert_eq!(schema.table_count(), 1);
        let log = schema.table("inventory_log").unwrap();
        assert_eq!(
            log.columns,
            vec!["log_id", "reason", "change_amount", "note", "odd--name", "log_date"]
        );
    }

    #[test]
    fn test_strip_comments_keeps_line_breaks() {
        assert_eq!(
            strip_comments("a -- one\nb /* two\nlines */ c 'x--y'"),
            "a \nb   c 'x--y'"
        );
    }

    #[test]
    fn test_unterminated_table_is_ignored() {
        let schema = scan_ddl("CREATE TABLE Broken (id NUMBER(10)");
        assert_eq!(schema.table_count(), 0);
    }
}
