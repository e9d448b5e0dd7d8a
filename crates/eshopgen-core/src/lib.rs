pub mod check;
pub mod config;
pub mod error;
pub mod generate;
pub mod lock;
pub mod output;
pub mod schema;

// Re-export key types for convenience
pub use error::{EshopGenError, Result};
pub use generate::engine::{execute_plan, GeneratedData};
pub use generate::plan::{GenerationPlan, Volumes};
