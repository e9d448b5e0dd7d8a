use anyhow::Result;
use comfy_table::Table as ComfyTable;

use eshopgen_core::config::parse_date;
use eshopgen_core::generate::engine;
use eshopgen_core::{GenerationPlan, Volumes};

use crate::args::PreviewArgs;

const MAX_CELL_WIDTH: usize = 40;

pub fn run(args: &PreviewArgs) -> Result<()> {
    let today = match &args.today {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let plan = GenerationPlan::new(Volumes::uniform(args.rows), args.seed, today);
    let data = engine::execute_plan(&plan, None)?;

    for table in data.tables() {
        if table.rows.is_empty() {
            continue;
        }

        let shown = table.rows.len().min(args.rows);
        println!("━━━ {} ({} rows) ━━━", table.table.name, shown);

        let mut t = ComfyTable::new();
        t.set_header(table.table.columns.to_vec());
        for row in table.rows.iter().take(shown) {
            t.add_row(row.iter().map(|v| truncate(v.to_string())).collect::<Vec<_>>());
        }

        println!("{}\n", t);
    }

    Ok(())
}

fn truncate(s: String) -> String {
    if s.chars().count() > MAX_CELL_WIDTH {
        let head: String = s.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_cells() {
        assert_eq!(truncate("short".to_string()), "short");
        let long = "x".repeat(60);
        let cut = truncate(long);
        assert_eq!(cut.chars().count(), MAX_CELL_WIDTH);
        assert!(cut.ends_with("..."));
    }
}
