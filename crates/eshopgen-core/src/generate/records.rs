//! Typed rows for each target table.
//!
//! Generators build these structs; writers flatten them through
//! [`Record::values`] in the column order declared by the table's `TableDef`.

use chrono::NaiveDate;

use crate::generate::value::{Money, Value};
use crate::schema::tables::{self, TableDef};

/// A generated row that knows its table and column order.
pub trait Record {
    const TABLE: TableDef;

    /// Column values in `TABLE.columns` order.
    fn values(&self) -> Vec<Value>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: &'static str,
    pub parent_id: Option<i64>,
}

impl Record for Category {
    const TABLE: TableDef = tables::CATEGORY;

    fn values(&self) -> Vec<Value> {
        vec![self.id.into(), self.name.into(), self.parent_id.into()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub registration_date: NaiveDate,
}

impl Record for Customer {
    const TABLE: TableDef = tables::CUSTOMER;

    fn values(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.first_name.clone().into(),
            self.last_name.clone().into(),
            self.email.clone().into(),
            self.city.clone().into(),
            self.registration_date.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub list_price: Money,
    pub cost_price: Money,
    pub sku: String,
    pub category_id: i64,
}

impl Record for Product {
    const TABLE: TableDef = tables::PRODUCT;

    fn values(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.name.clone().into(),
            self.list_price.into(),
            self.cost_price.into(),
            self.sku.clone().into(),
            self.category_id.into(),
        ]
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Completed,
    Pending,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Completed => "Completed",
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub customer_id: i64,
}

impl Record for Order {
    const TABLE: TableDef = tables::ORDER;

    fn values(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.order_date.into(),
            self.status.as_str().into(),
            self.customer_id.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i64,
    pub quantity: i64,
    pub unit_price: Money,
    pub product_id: i64,
    pub order_id: i64,
}

impl Record for OrderItem {
    const TABLE: TableDef = tables::ORDER_ITEM;

    fn values(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.quantity.into(),
            self.unit_price.into(),
            self.product_id.into(),
            self.order_id.into(),
        ]
    }
}

/// Why a stock level changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryReason {
    Sale,
    Restock,
    Return,
}

impl InventoryReason {
    pub const ALL: [InventoryReason; 3] = [
        InventoryReason::Sale,
        InventoryReason::Restock,
        InventoryReason::Return,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InventoryReason::Sale => "Sale",
            InventoryReason::Restock => "Restock",
            InventoryReason::Return => "Return",
        }
    }

    /// Inclusive bounds of `change_amount` for this reason.
    pub fn change_range(self) -> (i64, i64) {
        match self {
            InventoryReason::Restock => (10, 50),
            InventoryReason::Return => (1, 2),
            InventoryReason::Sale => (-10, -1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLog {
    pub id: i64,
    pub change_amount: i64,
    pub reason: InventoryReason,
    pub log_date: NaiveDate,
    pub product_id: i64,
}

impl Record for InventoryLog {
    const TABLE: TableDef = tables::INVENTORY_LOG;

    fn values(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.change_amount.into(),
            self.reason.as_str().into(),
            self.log_date.into(),
            self.product_id.into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_match_column_count() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let rows: Vec<(TableDef, Vec<Value>)> = vec![
            (
                Category::TABLE,
                Category {
                    id: 1,
                    name: "Electronics",
                    parent_id: None,
                }
                .values(),
            ),
            (
                Order::TABLE,
                Order {
                    id: 1,
                    order_date: d,
                    status: OrderStatus::Shipped,
                    customer_id: 3,
                }
                .values(),
            ),
            (
                InventoryLog::TABLE,
                InventoryLog {
                    id: 1,
                    change_amount: -4,
                    reason: InventoryReason::Sale,
                    log_date: d,
                    product_id: 9,
                }
                .values(),
            ),
        ];
        for (table, values) in rows {
            assert_eq!(table.columns.len(), values.len(), "{}", table.name);
        }
    }

    #[test]
    fn test_reason_ranges() {
        assert_eq!(InventoryReason::Restock.change_range(), (10, 50));
        assert_eq!(InventoryReason::Return.change_range(), (1, 2));
        assert_eq!(InventoryReason::Sale.change_range(), (-10, -1));
    }
}
