//! # Product Generator
//!
//! Products land in one of four leaf categories and take a brand from that
//! category's pool, so names read plausibly ("Razer Blade NOSTRUM 47" under
//! Gaming Laptops). Cost is derived from list price, which fixes the gross
//! margin between 20% and 40%.

use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;

use crate::generate::lookup::{PriceBook, ProductPrice};
use crate::generate::random::ean8;
use crate::generate::records::Product;
use crate::generate::value::Money;

/// Brand pools for the leaf categories that receive products.
pub const LEAF_CATEGORY_BRANDS: [(i64, &[&str]); 4] = [
    (4, &["iPhone", "Samsung Galaxy", "Google Pixel", "Xiaomi"]),
    (5, &["Sony Headphones", "Bose Speaker", "LG Soundbar"]),
    (8, &["Razer Blade", "MSI Katana", "Alienware x16"]),
    (9, &["MacBook Air", "Dell XPS", "Lenovo ThinkPad"]),
];

pub const MIN_LIST_PRICE: f64 = 200.0;
pub const MAX_LIST_PRICE: f64 = 2000.0;

/// Cost as a fraction of list price.
pub const MIN_COST_FACTOR: f64 = 0.6;
pub const MAX_COST_FACTOR: f64 = 0.8;

/// Generate products with ids `1..=count`, recording each product's prices.
pub fn generate_products(
    count: usize,
    rng: &mut impl Rng,
    prices: &mut PriceBook,
) -> Vec<Product> {
    let mut products = Vec::with_capacity(count);
    for id in 1..=count as i64 {
        let (category_id, brands) =
            LEAF_CATEGORY_BRANDS[rng.random_range(0..LEAF_CATEGORY_BRANDS.len())];
        let brand = brands[rng.random_range(0..brands.len())];
        let word: String = Word().fake_with_rng(rng);
        let name = format!(
            "{} {} {}",
            brand,
            word.to_uppercase(),
            rng.random_range(10..=99)
        );

        let list_price = Money::from_decimal(rng.random_range(MIN_LIST_PRICE..=MAX_LIST_PRICE));
        let cost_price = list_price.scale(rng.random_range(MIN_COST_FACTOR..=MAX_COST_FACTOR));
        let sku = ean8(rng);

        prices.record(
            id,
            ProductPrice {
                list_price,
                cost_price,
            },
        );
        products.push(Product {
            id,
            name,
            list_price,
            cost_price,
            sku,
            category_id,
        });
    }

    tracing::debug!("Generated {} products", products.len());
    products
}
