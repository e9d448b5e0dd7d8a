use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};

use eshopgen_core::check::{check_schema, compute_ddl_hash};
use eshopgen_core::config::{self, parse_date, EshopGenConfig};
use eshopgen_core::generate::engine::{self, Stage};
use eshopgen_core::lock::types::LockFile;
use eshopgen_core::lock::{self, LOCK_FILE_NAME};
use eshopgen_core::output::{self, OutputFormat, DEFAULT_OUTPUT_PATH};
use eshopgen_core::schema::{load_schema, DEFAULT_SCHEMA_PATH};
use eshopgen_core::{GenerationPlan, Volumes};

use crate::args::GenerateArgs;

pub fn run(args: &GenerateArgs) -> Result<()> {
    run_in(Path::new("."), args)
}

/// Run `generate` with `dir` as the working directory.
///
/// eshopgen.toml and eshopgen.lock are read from `dir`; relative schema and
/// output paths are resolved against it.
fn run_in(dir: &Path, args: &GenerateArgs) -> Result<()> {
    // Load optional eshopgen.toml config
    let config = config::read_config(dir)?.unwrap_or_default();

    let schema_path = dir.join(
        args.schema
            .clone()
            .or_else(|| config.paths.schema.clone())
            .unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string()),
    );
    let output_name = args
        .output
        .clone()
        .or_else(|| config.paths.output.clone())
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
    let format = args.output_format(config.format()?, &output_name);
    let output_path = dir.join(&output_name);

    // Phase 1: Load schema. Nothing is written if this fails.
    let pb = spinner("1/3");
    pb.set_message(format!("Reading {}...", schema_path.display()));
    let schema = load_schema(&schema_path).inspect_err(|_| pb.finish_and_clear())?;

    let report = check_schema(&schema.scan());
    for finding in &report.findings {
        tracing::warn!("{}", finding);
    }
    let ddl_hash = compute_ddl_hash(&schema.ddl);
    pb.finish_with_message(format!(
        "Reading {}... ✓ {} tables declared",
        schema.path.display(),
        report.tables_declared
    ));

    // If --from-lock, load the lock file and validate the DDL hash
    let lock_path = dir.join(LOCK_FILE_NAME);
    let restored_lock = if args.from_lock {
        if !lock_path.exists() {
            bail!(
                "No {} found in {}. Run `eshopgen generate` first to create one.",
                LOCK_FILE_NAME,
                dir.display()
            );
        }
        let lf = lock::read_lock_file(&lock_path)?;
        lock::verify_ddl_hash(&lf, &ddl_hash, args.force)?;
        Some(lf)
    } else {
        None
    };

    let plan = resolve_plan(args, &config, restored_lock.as_ref())?;
    tracing::debug!(
        "Plan: seed {}, today {}, volumes {:?}",
        plan.seed,
        plan.today,
        plan.volumes
    );

    // Phase 2: Generate data
    let pb2 = spinner("2/3");
    pb2.set_message("Generating data...");
    let data = engine::execute_plan(
        &plan,
        Some(&|stage, rows| {
            pb2.suspend(|| println!("{}", stage_message(stage, rows)));
        }),
    )?;
    pb2.finish_with_message(format!("Generating data... ✓ ({} rows)", data.total_rows()));

    // Phase 3: Output
    let pb3 = spinner("3/3");
    pb3.set_message(format!(
        "Writing {} to {}...",
        format.as_str(),
        output_path.display()
    ));
    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Sql => output::sql::write_script(&mut writer, &schema.ddl, &data)?,
        OutputFormat::Json => output::json::write_json(&mut writer, &data)?,
        OutputFormat::Csv => output::csv::write_csv(&mut writer, &data)?,
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", output_path.display()))?;
    pb3.finish_with_message(format!(
        "Writing {} to {}... ✓",
        format.as_str(),
        output_path.display()
    ));

    // Write lock file (always, so the run can be replayed)
    let lock_file = LockFile::new(ddl_hash, &plan);
    lock::write_lock_file(&lock_file, &lock_path)?;
    eprintln!("Lock file written to {}", lock_path.display());

    println!("Script complete. Output: '{}'", output_name);
    Ok(())
}

/// Resolve seed, "today" and volumes.
///
/// CLI flags win, then the plan recorded in the lock file (with
/// `--from-lock`), then eshopgen.toml, then built-in defaults.
fn resolve_plan(
    args: &GenerateArgs,
    config: &EshopGenConfig,
    lock_file: Option<&LockFile>,
) -> Result<GenerationPlan> {
    let locked = lock_file
        .map(|lf| {
            lf.plan().ok_or_else(|| {
                anyhow!(
                    "{} has an invalid today value '{}'",
                    LOCK_FILE_NAME,
                    lf.today
                )
            })
        })
        .transpose()?;

    let base = match &locked {
        Some(plan) => plan.volumes,
        None => config.volumes.apply_to(Volumes::default()),
    };
    let volumes = Volumes {
        customers: args.customers.unwrap_or(base.customers),
        products: args.products.unwrap_or(base.products),
        orders: args.orders.unwrap_or(base.orders),
        inventory_logs: args.inventory_logs.unwrap_or(base.inventory_logs),
    };

    let seed = args
        .seed
        .or(locked.as_ref().map(|plan| plan.seed))
        .or(config.generate.seed)
        .unwrap_or_else(wall_clock_seed);

    let today = match (&args.today, &locked) {
        (Some(s), _) => parse_date(s)?,
        (None, Some(plan)) => plan.today,
        (None, None) => config.today()?.unwrap_or_else(local_today),
    };

    Ok(GenerationPlan::new(volumes, seed, today))
}

fn stage_message(stage: Stage, rows: usize) -> String {
    match stage {
        Stage::Categories => "Categories processed!".to_string(),
        _ => format!("Generated {} {}!", rows, stage.label()),
    }
}

fn spinner(prefix: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} [{prefix}] {msg}")
    {
        pb.set_style(style);
    }
    pb.set_prefix(prefix);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn wall_clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
