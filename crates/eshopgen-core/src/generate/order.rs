//! # Order Generator
//!
//! Each order belongs to a random existing customer and is dated between
//! that customer's registration and `today`.

use chrono::NaiveDate;
use rand::Rng;

use crate::error::{EshopGenError, Result};
use crate::generate::lookup::RegistrationDates;
use crate::generate::random::{date_between, weighted_pick};
use crate::generate::records::{Order, OrderStatus};

/// Status distribution of generated orders.
pub const STATUS_WEIGHTS: [(OrderStatus, f64); 4] = [
    (OrderStatus::Completed, 0.70),
    (OrderStatus::Pending, 0.10),
    (OrderStatus::Shipped, 0.10),
    (OrderStatus::Cancelled, 0.10),
];

/// Generate orders with ids `1..=count`.
///
/// Customers are drawn from `1..=registrations.len()`.
pub fn generate_orders(
    count: usize,
    today: NaiveDate,
    rng: &mut impl Rng,
    registrations: &RegistrationDates,
) -> Result<Vec<Order>> {
    if count > 0 && registrations.is_empty() {
        return Err(EshopGenError::EmptyReferencePool {
            table: "Order",
            referenced: "Customer",
        });
    }

    let customer_count = registrations.len() as i64;
    let mut orders = Vec::with_capacity(count);
    for id in 1..=count as i64 {
        let customer_id = rng.random_range(1..=customer_count);
        let registered = registrations
            .get(customer_id)
            .ok_or(EshopGenError::MissingReference {
                table: "Order",
                referenced: "Customer",
                id: customer_id,
            })?;
        let order_date = date_between(rng, registered, today);
        let status = *weighted_pick(&STATUS_WEIGHTS, rng);

        orders.push(Order {
            id,
            order_date,
            status,
            customer_id,
        });
    }

    tracing::debug!("Generated {} orders", orders.len());
    Ok(orders)
}
