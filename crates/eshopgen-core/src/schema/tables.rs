//! Target tables and their fixed column order.
//!
//! Every generator emits rows whose values line up with `columns` of its
//! `TableDef`. Writers and the DDL check both read these definitions, so
//! the column lists live in exactly one place.

/// A target table in the e-commerce schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    /// Logical table name (used for JSON/CSV keys and DDL matching).
    pub name: &'static str,
    /// Identifier as written in `INSERT INTO`, quoted where it is a
    /// reserved word.
    pub sql_name: &'static str,
    /// Heading of the script section that holds this table's inserts.
    pub section: &'static str,
    pub columns: &'static [&'static str],
}

pub const CATEGORY: TableDef = TableDef {
    name: "Category",
    sql_name: "Category",
    section: "CATEGORIES",
    columns: &["category_id", "category_name", "parent_id"],
};

pub const CUSTOMER: TableDef = TableDef {
    name: "Customer",
    sql_name: "Customer",
    section: "CUSTOMERS",
    columns: &[
        "customer_id",
        "first_name",
        "last_name",
        "email",
        "city",
        "registration_date",
    ],
};

pub const PRODUCT: TableDef = TableDef {
    name: "Product",
    sql_name: "Product",
    section: "PRODUCTS",
    columns: &[
        "product_id",
        "product_name",
        "list_price",
        "cost_price",
        "sku",
        "category_id",
    ],
};

pub const ORDER: TableDef = TableDef {
    name: "Order",
    sql_name: "\"Order\"",
    section: "ORDERS",
    columns: &["order_id", "order_date", "status", "customer_id"],
};

pub const ORDER_ITEM: TableDef = TableDef {
    name: "Order_item",
    sql_name: "Order_item",
    section: "ORDER ITEMS",
    columns: &[
        "order_item_id",
        "quantity",
        "unit_price",
        "product_id",
        "order_id",
    ],
};

pub const INVENTORY_LOG: TableDef = TableDef {
    name: "Inventory_log",
    sql_name: "Inventory_log",
    section: "INVENTORY LOG",
    columns: &[
        "log_id",
        "change_amount",
        "reason",
        "log_date",
        "product_id",
    ],
};

/// All target tables in insertion order. Parents always precede children.
pub const ALL_TABLES: [TableDef; 6] = [
    CATEGORY,
    CUSTOMER,
    PRODUCT,
    ORDER,
    ORDER_ITEM,
    INVENTORY_LOG,
];
