use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

static INSERT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^INSERT INTO (\S+) \(([^)]*)\) VALUES \((.*)\);$").expect("valid insert regex")
});

static TO_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^TO_DATE\('(\d{4}-\d{2}-\d{2})', 'YYYY-MM-DD'\)$").expect("valid date regex")
});

/// Oracle DDL for the e-shop schema, matching the columns eshopgen populates.
pub fn eshop_ddl() -> &'static str {
    r#"-- E-shop schema
CREATE TABLE Category (
    category_id NUMBER PRIMARY KEY,
    category_name VARCHAR2(100) NOT NULL,
    parent_id NUMBER,
    CONSTRAINT fk_category_parent FOREIGN KEY (parent_id) REFERENCES Category(category_id)
);

CREATE TABLE Customer (
    customer_id NUMBER PRIMARY KEY,
    first_name VARCHAR2(50) NOT NULL,
    last_name VARCHAR2(50) NOT NULL,
    email VARCHAR2(100) UNIQUE,
    city VARCHAR2(50),
    registration_date DATE
);

CREATE TABLE Product (
    product_id NUMBER PRIMARY KEY,
    product_name VARCHAR2(100) NOT NULL,
    list_price NUMBER(10, 2) NOT NULL,
    cost_price NUMBER(10, 2) NOT NULL,
    sku VARCHAR2(20),
    category_id NUMBER,
    CONSTRAINT fk_product_category FOREIGN KEY (category_id) REFERENCES Category(category_id)
);

CREATE TABLE "Order" (
    order_id NUMBER PRIMARY KEY,
    order_date DATE NOT NULL,
    status VARCHAR2(20) CHECK (status IN ('Pending', 'Shipped', 'Completed', 'Cancelled')),
    customer_id NUMBER,
    CONSTRAINT fk_order_customer FOREIGN KEY (customer_id) REFERENCES Customer(customer_id)
);

CREATE TABLE Order_item (
    order_item_id NUMBER PRIMARY KEY,
    quantity NUMBER NOT NULL,
    unit_price NUMBER(10, 2) NOT NULL,
    product_id NUMBER,
    order_id NUMBER,
    CONSTRAINT fk_item_product FOREIGN KEY (product_id) REFERENCES Product(product_id),
    CONSTRAINT fk_item_order FOREIGN KEY (order_id) REFERENCES "Order"(order_id)
);

CREATE TABLE Inventory_log (
    log_id NUMBER PRIMARY KEY,
    change_amount NUMBER NOT NULL,
    reason VARCHAR2(20),
    log_date DATE,
    product_id NUMBER,
    CONSTRAINT fk_log_product FOREIGN KEY (product_id) REFERENCES Product(product_id)
);"#
}

/// One parsed `INSERT` statement from a generated script.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertRow {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<String>,
}

impl InsertRow {
    /// Raw SQL literal for a column, e.g. `42`, `'Sofia'` or `TO_DATE(...)`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i].as_str())
    }

    pub fn int(&self, column: &str) -> i64 {
        self.get(column)
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| panic!("{}.{} is not an integer", self.table, column))
    }

    pub fn decimal(&self, column: &str) -> f64 {
        self.get(column)
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| panic!("{}.{} is not a number", self.table, column))
    }

    /// Unquoted text of a string literal.
    pub fn text(&self, column: &str) -> String {
        let raw = self
            .get(column)
            .unwrap_or_else(|| panic!("{}.{} missing", self.table, column));
        raw.trim_start_matches('\'')
            .trim_end_matches('\'')
            .replace("''", "'")
    }

    /// `YYYY-MM-DD` inside a `TO_DATE(...)` literal.
    pub fn date(&self, column: &str) -> String {
        let raw = self
            .get(column)
            .unwrap_or_else(|| panic!("{}.{} missing", self.table, column));
        TO_DATE_RE
            .captures(raw)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| panic!("{}.{} is not a TO_DATE literal: {}", self.table, column, raw))
    }
}

/// Parse every `INSERT` line in a script.
pub fn parse_inserts(sql: &str) -> Vec<InsertRow> {
    sql.lines()
        .filter_map(|line| INSERT_RE.captures(line))
        .map(|c| InsertRow {
            table: c[1].to_string(),
            columns: c[2].split(", ").map(str::to_string).collect(),
            values: split_values(&c[3]),
        })
        .collect()
}

/// Number of `INSERT` statements per table, in first-seen order.
pub fn insert_counts(sql: &str) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for row in parse_inserts(sql) {
        *counts.entry(row.table).or_insert(0) += 1;
    }
    counts
}

/// Rows for one table.
pub fn rows_for<'a>(rows: &'a [InsertRow], table: &str) -> Vec<&'a InsertRow> {
    rows.iter().filter(|r| r.table == table).collect()
}

/// Split a `VALUES (...)` list on commas outside quotes and parentheses.
fn split_values(list: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut depth = 0usize;

    for ch in list.chars() {
        match ch {
            '\'' => {
                in_quote = !in_quote;
                current.push(ch);
            }
            '(' if !in_quote => {
                depth += 1;
                current.push(ch);
            }
            ')' if !in_quote => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if !in_quote && depth == 0 => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !current.trim().is_empty() {
        values.push(current.trim().to_string());
    }
    values
}
