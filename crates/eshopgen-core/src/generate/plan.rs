use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EshopGenError, Result};

pub const DEFAULT_CUSTOMERS: usize = 1000;
pub const DEFAULT_PRODUCTS: usize = 500;
pub const DEFAULT_ORDERS: usize = 5000;
pub const DEFAULT_INVENTORY_LOGS: usize = 10000;

/// How many rows each generated table receives.
///
/// Categories are a fixed hierarchy and order items follow from orders, so
/// neither has a volume of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volumes {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub inventory_logs: usize,
}

impl Default for Volumes {
    fn default() -> Self {
        Self {
            customers: DEFAULT_CUSTOMERS,
            products: DEFAULT_PRODUCTS,
            orders: DEFAULT_ORDERS,
            inventory_logs: DEFAULT_INVENTORY_LOGS,
        }
    }
}

impl Volumes {
    /// Every table gets the same row count. Used by `preview`.
    pub fn uniform(rows: usize) -> Self {
        Self {
            customers: rows,
            products: rows,
            orders: rows,
            inventory_logs: rows,
        }
    }

    /// Reject volumes whose child rows would have nothing to reference.
    pub fn validate(&self) -> Result<()> {
        if self.orders > 0 && self.customers == 0 {
            return Err(EshopGenError::EmptyReferencePool {
                table: "Order",
                referenced: "Customer",
            });
        }
        if self.orders > 0 && self.products == 0 {
            return Err(EshopGenError::EmptyReferencePool {
                table: "Order_item",
                referenced: "Product",
            });
        }
        if self.inventory_logs > 0 && self.products == 0 {
            return Err(EshopGenError::EmptyReferencePool {
                table: "Inventory_log",
                referenced: "Product",
            });
        }
        Ok(())
    }
}

/// Everything needed to reproduce a run.
///
/// `today` is pinned when the plan is created; every date window is
/// measured from it, so replaying a plan later yields the same dates.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub volumes: Volumes,
    pub seed: u64,
    pub today: NaiveDate,
}

impl GenerationPlan {
    pub fn new(volumes: Volumes, seed: u64, today: NaiveDate) -> Self {
        Self {
            volumes,
            seed,
            today,
        }
    }
}
