//! # Category Hierarchy
//!
//! A fixed three-level tree. No randomness: the same nine rows are emitted on
//! every run, parents declared before their children.

use crate::generate::records::Category;

/// `(id, name, parent_id)` in insertion order.
pub const CATEGORY_TREE: [(i64, &str, Option<i64>); 9] = [
    // Level 1
    (1, "Electronics", None),
    (2, "Home Appliances", None),
    (3, "Computing", None),
    // Level 2
    (4, "Smartphones", Some(1)),
    (5, "Audio & Video", Some(1)),
    (6, "Laptops", Some(3)),
    (7, "Peripherals", Some(3)),
    // Level 3
    (8, "Gaming Laptops", Some(6)),
    (9, "Office Laptops", Some(6)),
];

pub fn generate_categories() -> Vec<Category> {
    CATEGORY_TREE
        .iter()
        .map(|&(id, name, parent_id)| Category {
            id,
            name,
            parent_id,
        })
        .collect()
}
