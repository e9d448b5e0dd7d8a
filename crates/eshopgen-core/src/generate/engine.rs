use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::generate::category::generate_categories;
use crate::generate::customer::generate_customers;
use crate::generate::inventory::generate_inventory_logs;
use crate::generate::lookup::{PriceBook, RegistrationDates};
use crate::generate::order::generate_orders;
use crate::generate::order_item::generate_order_items;
use crate::generate::plan::GenerationPlan;
use crate::generate::product::generate_products;
use crate::generate::records::*;
use crate::generate::sequence::IdSequence;
use crate::generate::value::Value;
use crate::schema::tables::TableDef;

/// The six pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Categories,
    Customers,
    Products,
    Orders,
    OrderItems,
    InventoryLogs,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Categories,
        Stage::Customers,
        Stage::Products,
        Stage::Orders,
        Stage::OrderItems,
        Stage::InventoryLogs,
    ];

    /// Plural noun used in progress messages.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Categories => "categories",
            Stage::Customers => "customers",
            Stage::Products => "products",
            Stage::Orders => "orders",
            Stage::OrderItems => "order items",
            Stage::InventoryLogs => "inventory logs",
        }
    }
}

/// The result of running every stage.
#[derive(Debug, Default)]
pub struct GeneratedData {
    pub categories: Vec<Category>,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub inventory_logs: Vec<InventoryLog>,
}

/// One table's rows flattened to column values, ready for a writer.
#[derive(Debug)]
pub struct TableRows {
    pub table: TableDef,
    pub rows: Vec<Vec<Value>>,
}

impl GeneratedData {
    /// Every table in insertion order, rows flattened to values.
    pub fn tables(&self) -> Vec<TableRows> {
        vec![
            flatten(&self.categories),
            flatten(&self.customers),
            flatten(&self.products),
            flatten(&self.orders),
            flatten(&self.order_items),
            flatten(&self.inventory_logs),
        ]
    }

    pub fn total_rows(&self) -> usize {
        self.categories.len()
            + self.customers.len()
            + self.products.len()
            + self.orders.len()
            + self.order_items.len()
            + self.inventory_logs.len()
    }
}

fn flatten<R: Record>(records: &[R]) -> TableRows {
    TableRows {
        table: R::TABLE,
        rows: records.iter().map(R::values).collect(),
    }
}

/// Run every stage of a plan with a single seeded RNG.
///
/// Stages run strictly in order: categories, customers, products, orders,
/// order items, inventory logs. Registration dates and prices recorded by
/// earlier stages are passed by reference to the stages that need them.
/// `progress_callback` receives each stage and its row count once the stage
/// finishes.
pub fn execute_plan(
    plan: &GenerationPlan,
    progress_callback: Option<&dyn Fn(Stage, usize)>,
) -> Result<GeneratedData> {
    plan.volumes.validate()?;

    let mut rng = StdRng::seed_from_u64(plan.seed);
    let mut registrations = RegistrationDates::new();
    let mut prices = PriceBook::new();
    let mut item_ids = IdSequence::default();
    let report = |stage: Stage, rows: usize| {
        tracing::debug!("Stage {:?} finished with {} rows", stage, rows);
        if let Some(cb) = progress_callback {
            cb(stage, rows);
        }
    };

    let categories = generate_categories();
    report(Stage::Categories, categories.len());

    let customers = generate_customers(
        plan.volumes.customers,
        plan.today,
        &mut rng,
        &mut registrations,
    );
    report(Stage::Customers, customers.len());

    let products = generate_products(plan.volumes.products, &mut rng, &mut prices);
    report(Stage::Products, products.len());

    let orders = generate_orders(plan.volumes.orders, plan.today, &mut rng, &registrations)?;
    report(Stage::Orders, orders.len());

    let order_items = generate_order_items(&orders, &mut rng, &prices, &mut item_ids)?;
    report(Stage::OrderItems, order_items.len());

    let inventory_logs = generate_inventory_logs(
        plan.volumes.inventory_logs,
        products.len(),
        plan.today,
        &mut rng,
    )?;
    report(Stage::InventoryLogs, inventory_logs.len());

    Ok(GeneratedData {
        categories,
        customers,
        products,
        orders,
        order_items,
        inventory_logs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::plan::Volumes;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    fn small_plan(seed: u64) -> GenerationPlan {
        GenerationPlan::new(
            Volumes {
                customers: 20,
                products: 30,
                orders: 50,
                inventory_logs: 40,
            },
            seed,
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        )
    }

    #[test]
    fn test_row_counts() {
        let data = execute_plan(&small_plan(42), None).unwrap();
        assert_eq!(data.categories.len(), 9);
        assert_eq!(data.customers.len(), 20);
        assert_eq!(data.products.len(), 30);
        assert_eq!(data.orders.len(), 50);
        assert!((50..=200).contains(&data.order_items.len()));
        assert_eq!(data.inventory_logs.len(), 40);
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = execute_plan(&small_plan(7), None).unwrap();
        let b = execute_plan(&small_plan(7), None).unwrap();
        assert_eq!(a.customers, b.customers);
        assert_eq!(a.products, b.products);
        assert_eq!(a.order_items, b.order_items);
        assert_eq!(a.inventory_logs, b.inventory_logs);

        let c = execute_plan(&small_plan(8), None).unwrap();
        assert_ne!(a.customers, c.customers);
    }

    #[test]
    fn test_progress_reported_per_stage_in_order() {
        let seen = RefCell::new(Vec::new());
        let cb = |stage: Stage, rows: usize| seen.borrow_mut().push((stage, rows));
        let data = execute_plan(&small_plan(1), Some(&cb)).unwrap();

        let seen = seen.into_inner();
        let stages: Vec<Stage> = seen.iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
        assert_eq!(seen[4].1, data.order_items.len());
    }

    #[test]
    fn test_tables_flatten_in_insertion_order() {
        let data = execute_plan(&small_plan(3), None).unwrap();
        let tables = data.tables();
        let names: Vec<&str> = tables.iter().map(|t| t.table.name).collect();
        assert_eq!(
            names,
            vec!["Category", "Customer", "Product", "Order", "Order_item", "Inventory_log"]
        );
        let flattened: usize = tables.iter().map(|t| t.rows.len()).sum();
        assert_eq!(flattened, data.total_rows());
    }

    #[test]
    fn test_invalid_volumes_rejected_before_generation() {
        let mut plan = small_plan(1);
        plan.volumes.products = 0;
        assert!(execute_plan(&plan, None).is_err());
    }
}
