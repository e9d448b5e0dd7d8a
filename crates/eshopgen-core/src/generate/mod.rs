pub mod category;
pub mod customer;
pub mod engine;
pub mod inventory;
pub mod lookup;
pub mod order;
pub mod order_item;
pub mod plan;
pub mod product;
pub mod random;
pub mod records;
pub mod sequence;
pub mod value;
