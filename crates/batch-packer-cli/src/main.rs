use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use batch_packer_core::{Catalog, PackResult, ProjectionRequest, ResultSlot, pack};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "batch-packer",
    about = "Pack dough-tray projections into fixed-capacity batches",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a projection into batches and print the breakdown
    Pack(PackArgs),
    /// Print the active catalog (types, unit weights, capacity)
    Catalog(CatalogArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    /// Requested trays as NAME=COUNT (repeatable). Malformed counts read as 0
    /// unless --strict is set.
    #[arg(short, long = "set", value_name = "NAME=COUNT", help_heading = "Input")]
    set: Vec<String>,
    /// YAML catalog file (defaults to the built-in dough catalog)
    #[arg(long, help_heading = "Input")]
    catalog: Option<PathBuf>,
    /// Override the batch capacity (oz)
    #[arg(long, help_heading = "Input")]
    capacity: Option<u32>,
    /// Fail on malformed counts instead of treating them as 0
    #[arg(long, default_value_t = false, help_heading = "Input")]
    strict: bool,
    /// Write the breakdown as CSV (one row per batch, catalog column order)
    #[arg(long, value_name = "PATH", help_heading = "Export")]
    csv: Option<PathBuf>,
    /// Write the breakdown as JSON
    #[arg(long, value_name = "PATH", help_heading = "Export")]
    json: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
struct CatalogArgs {
    /// YAML catalog file (defaults to the built-in dough catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Override the batch capacity (oz)
    #[arg(long)]
    capacity: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Catalog(args) => run_catalog(args),
    }
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog, args.capacity)?;
    let request = build_request(&args.set, args.strict)?;

    info!(
        trays = request.total_trays(),
        capacity = catalog.capacity(),
        "packing projection"
    );
    let result = pack(&request, &catalog).context("packing failed")?;

    // The slot is the export step's source of truth; the packer itself keeps
    // no state between runs.
    let slot = ResultSlot::new();
    slot.store(result);
    let result = slot
        .latest()
        .context("no result available after packing")?;

    print_breakdown(&result);

    if let Some(path) = &args.csv {
        let mut file = fs::File::create(path)
            .with_context(|| format!("create {}", path.display()))?;
        batch_packer_core::write_csv(&mut file, &result, &catalog)
            .with_context(|| format!("write CSV to {}", path.display()))?;
        info!(path = %path.display(), "wrote CSV export");
    }
    if let Some(path) = &args.json {
        let value = batch_packer_core::to_json(&result);
        let text = serde_json::to_string_pretty(&value)?;
        fs::write(path, text).with_context(|| format!("write JSON to {}", path.display()))?;
        info!(path = %path.display(), "wrote JSON export");
    }

    Ok(())
}

fn run_catalog(args: &CatalogArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog, args.capacity)?;
    println!("Capacity: {} oz", catalog.capacity());
    for item in catalog.items() {
        println!("  {}: {} oz per tray", item.name, item.unit_weight);
    }
    Ok(())
}

fn load_catalog(path: &Option<PathBuf>, capacity: Option<u32>) -> anyhow::Result<Catalog> {
    let mut catalog = match path {
        Some(p) => {
            let text =
                fs::read_to_string(p).with_context(|| format!("read catalog {}", p.display()))?;
            serde_yaml::from_str(&text)
                .with_context(|| format!("parse catalog {}", p.display()))?
        }
        None => Catalog::standard(),
    };
    if let Some(cap) = capacity {
        catalog = catalog.with_capacity(cap);
    }
    catalog.validate().context("invalid catalog")?;
    Ok(catalog)
}

/// Splits `NAME=COUNT` entries and runs intake. Lenient mode logs a warning
/// for each field that falls back to zero so fat-fingered input is visible.
fn build_request(entries: &[String], strict: bool) -> anyhow::Result<ProjectionRequest> {
    let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(entries.len());
    for entry in entries {
        let (name, raw) = entry
            .split_once('=')
            .with_context(|| format!("expected NAME=COUNT, got {entry:?}"))?;
        pairs.push((name, raw));
    }

    if strict {
        return Ok(ProjectionRequest::from_raw_strict(pairs.iter().copied())?);
    }

    for (name, raw) in pairs.iter().copied() {
        if raw.trim().parse::<u32>().is_err() {
            warn!(item = name, value = raw, "count is not a non-negative integer, using 0");
        }
    }

    Ok(ProjectionRequest::from_raw(pairs))
}

fn print_breakdown(result: &PackResult) {
    if result.batches.is_empty() {
        println!("Nothing to pack.");
        return;
    }

    for batch in &result.batches {
        println!("Batch {}", batch.index);
        for count in &batch.counts {
            if count.count > 0 {
                println!("  {}: {} trays", count.name, count.count);
            }
        }
        println!(
            "  Total Weight: {} oz ({}% of capacity, {} oz spare)",
            batch.weight, batch.utilization, batch.leftover
        );
    }
    println!("{}", result.stats().summary());
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
