//! # Inventory-Log Generator
//!
//! Independent stock adjustments over the last two years. The sign and size
//! of each change follow from its reason; logs are not reconciled against
//! orders or against each other.

use chrono::NaiveDate;
use rand::Rng;

use crate::error::{EshopGenError, Result};
use crate::generate::random::{date_between, years_before};
use crate::generate::records::{InventoryLog, InventoryReason};

/// Generate inventory logs with ids `1..=count` for products `1..=product_count`.
pub fn generate_inventory_logs(
    count: usize,
    product_count: usize,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Result<Vec<InventoryLog>> {
    if count > 0 && product_count == 0 {
        return Err(EshopGenError::EmptyReferencePool {
            table: "Inventory_log",
            referenced: "Product",
        });
    }

    let window_start = years_before(today, 2);
    let mut logs = Vec::with_capacity(count);
    for id in 1..=count as i64 {
        let product_id = rng.random_range(1..=product_count as i64);
        let log_date = date_between(rng, window_start, today);
        let reason = InventoryReason::ALL[rng.random_range(0..InventoryReason::ALL.len())];
        let (low, high) = reason.change_range();

        logs.push(InventoryLog {
            id,
            change_amount: rng.random_range(low..=high),
            reason,
            log_date,
            product_id,
        });
    }

    tracing::debug!("Generated {} inventory logs", logs.len());
    Ok(logs)
}
