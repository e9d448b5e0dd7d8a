//! # Cross-Stage Lookups
//!
//! Facts recorded by one stage and read by a later one. The customer stage
//! fills `RegistrationDates` so orders never predate their customer; the
//! product stage fills `PriceBook` so order items copy the list price.
//! Each is written by exactly one stage and only read afterwards.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::generate::value::Money;

/// Registration date per customer id.
#[derive(Debug, Default)]
pub struct RegistrationDates {
    dates: HashMap<i64, NaiveDate>,
}

impl RegistrationDates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, customer_id: i64, date: NaiveDate) {
        self.dates.insert(customer_id, date);
    }

    pub fn get(&self, customer_id: i64) -> Option<NaiveDate> {
        self.dates.get(&customer_id).copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// List and cost price of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductPrice {
    pub list_price: Money,
    pub cost_price: Money,
}

/// Prices per product id.
#[derive(Debug, Default)]
pub struct PriceBook {
    prices: HashMap<i64, ProductPrice>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, product_id: i64, price: ProductPrice) {
        self.prices.insert(product_id, price);
    }

    pub fn get(&self, product_id: i64) -> Option<ProductPrice> {
        self.prices.get(&product_id).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
