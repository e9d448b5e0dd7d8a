use clap::{Parser, Subcommand, ValueEnum};

use eshopgen_core::output;

#[derive(Parser, Debug)]
#[command(
    name = "eshopgen",
    about = "Populate an e-commerce schema with realistic, referentially consistent INSERT scripts",
    version,
    after_help = "Examples:\n  eshopgen generate                                  # database/Eshop_structure.sql -> database/Eshop_structure_full.sql\n  eshopgen generate --seed 42 --today 2026-01-01 --orders 200\n  eshopgen generate --from-lock                      # replay the last run\n  eshopgen preview --rows 3\n  eshopgen check --schema database/Eshop_structure.sql"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the populated schema script
    Generate(GenerateArgs),

    /// Preview sample rows without writing a file
    Preview(PreviewArgs),

    /// Check the DDL against the populated tables and the lock file
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// DDL script copied to the top of the output
    #[arg(long)]
    pub schema: Option<String>,

    /// Output file path (.sql, .json, .csv)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (auto-detected from file extension if not specified)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Random seed for deterministic generation
    #[arg(long, env = "ESHOPGEN_SEED")]
    pub seed: Option<u64>,

    /// Date every time window is measured from (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub today: Option<String>,

    /// Number of customers
    #[arg(long)]
    pub customers: Option<usize>,

    /// Number of products
    #[arg(long)]
    pub products: Option<usize>,

    /// Number of orders
    #[arg(long)]
    pub orders: Option<usize>,

    /// Number of inventory log entries
    #[arg(long)]
    pub inventory_logs: Option<usize>,

    /// Regenerate from the lock file
    #[arg(long)]
    pub from_lock: bool,

    /// Force regeneration even if the DDL has changed
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Number of sample rows per table
    #[arg(long, default_value = "5")]
    pub rows: usize,

    /// Random seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Date every time window is measured from (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// DDL script to check
    #[arg(long)]
    pub schema: Option<String>,

    /// Output format for the report
    #[arg(long, default_value = "text")]
    pub format: CheckFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Sql,
    Json,
    Csv,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Sql => output::OutputFormat::Sql,
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Csv => output::OutputFormat::Csv,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CheckFormat {
    Text,
    Json,
}

impl GenerateArgs {
    /// Explicit flag first, then the configured format, then the extension.
    pub fn output_format(
        &self,
        configured: Option<output::OutputFormat>,
        path: &str,
    ) -> output::OutputFormat {
        self.format
            .map(output::OutputFormat::from)
            .or(configured)
            .unwrap_or_else(|| output::OutputFormat::from_path(path))
    }
}
