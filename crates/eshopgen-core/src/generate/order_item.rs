//! # Order-Item Generator
//!
//! One to four distinct products per order. A fixed share of orders draws
//! only from the lowest product ids (the "hot" set) to simulate demand skew.
//! Items are priced from the price book and numbered by a single sequence
//! that spans every order.

use rand::seq::index;
use rand::Rng;

use crate::error::{EshopGenError, Result};
use crate::generate::lookup::PriceBook;
use crate::generate::records::{Order, OrderItem};
use crate::generate::sequence::IdSequence;

/// Product ids `1..=HOT_PRODUCT_COUNT` form the hot set.
pub const HOT_PRODUCT_COUNT: usize = 20;

/// Probability that an order draws only from the hot set.
pub const HOT_ORDER_SHARE: f64 = 0.40;

pub const MAX_ITEMS_PER_ORDER: usize = 4;
pub const MAX_QUANTITY: i64 = 3;

/// Generate line items for every order, numbering them from `sequence`.
///
/// Products are drawn from `1..=prices.len()`. The hot set and the item
/// count are clamped to the number of products so small catalogs never
/// reference missing ids.
pub fn generate_order_items(
    orders: &[Order],
    rng: &mut impl Rng,
    prices: &PriceBook,
    sequence: &mut IdSequence,
) -> Result<Vec<OrderItem>> {
    if !orders.is_empty() && prices.is_empty() {
        return Err(EshopGenError::EmptyReferencePool {
            table: "Order_item",
            referenced: "Product",
        });
    }

    let product_count = prices.len();
    let hot_count = HOT_PRODUCT_COUNT.min(product_count);

    let mut items = Vec::with_capacity(orders.len() * 2);
    for order in orders {
        let wanted = rng.random_range(1..=MAX_ITEMS_PER_ORDER);
        let pool = if rng.random::<f64>() < HOT_ORDER_SHARE {
            hot_count
        } else {
            product_count
        };

        for idx in index::sample(rng, pool, wanted.min(pool)).iter() {
            let product_id = idx as i64 + 1;
            let price = prices
                .get(product_id)
                .ok_or(EshopGenError::MissingReference {
                    table: "Order_item",
                    referenced: "Product",
                    id: product_id,
                })?;

            items.push(OrderItem {
                id: sequence.next_id(),
                quantity: rng.random_range(1..=MAX_QUANTITY),
                unit_price: price.list_price,
                product_id,
                order_id: order.id,
            });
        }
    }

    tracing::debug!(
        "Generated {} order items for {} orders",
        items.len(),
        orders.len()
    );
    Ok(items)
}
