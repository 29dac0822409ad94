//! glass-cut - CLI tool to lay out glass panels and quote the job.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use glass_core::{parse_stock, quote_dimensions, Catalog, OptimizerConfig, QuoteReport, Unit};

/// Lay out rectangular glass panels on stock sheets and price the cut.
#[derive(Parser, Debug)]
#[command(name = "glass-cut")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Panels as WIDTHxHEIGHT pairs separated by '-', e.g. 100x50-200x30
    dimensions: Option<String>,

    /// Stock sheet size
    #[arg(short, long, default_value = "321x225")]
    stock: String,

    /// Length unit of all dimensions (cm or mm)
    #[arg(short, long, default_value = "cm")]
    unit: String,

    /// Glass thickness in millimetres
    #[arg(short, long, default_value_t = glass_core::config::DEFAULT_THICKNESS)]
    thickness: f64,

    /// Glass type ID to price the job with
    #[arg(short, long)]
    glass: Option<u32>,

    /// Do not charge for offcut waste
    #[arg(long)]
    no_waste_charge: bool,

    /// Search time budget per sheet, in seconds
    #[arg(long, default_value_t = glass_core::config::DEFAULT_TIME_BUDGET_SECS)]
    time_budget: u64,

    /// Minimum gap left between neighbouring panels
    #[arg(long, default_value_t = glass_core::config::DEFAULT_MIN_GAP)]
    gap: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the JSON report to a file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List available glass types and exit
    #[arg(long)]
    list_glasses: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::builtin();

    if args.list_glasses {
        print_catalog(&catalog);
        return Ok(());
    }

    let dimensions = args
        .dimensions
        .as_deref()
        .context("No dimensions given (expected e.g. 100x50-200x30)")?;

    let stock = parse_stock(&args.stock)
        .with_context(|| format!("Invalid stock size '{}'", args.stock))?;
    let unit = Unit::from_str_name(&args.unit)?;
    let glass = args.glass.map(|id| catalog.find(id)).transpose()?;

    let config = OptimizerConfig::new()
        .with_time_budget(Duration::from_secs(args.time_budget))
        .with_min_gap(args.gap);

    let report = quote_dimensions(
        dimensions,
        stock,
        unit,
        args.thickness,
        config,
        glass,
        !args.no_waste_charge,
    )
    .context("Quote failed")?;

    if !report.unplaced.is_empty() {
        warn!(
            "{} panel(s) could not be placed on any sheet",
            report.unplaced.len()
        );
    }

    if let Some(path) = &args.output {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated: {}", path.display());
    }

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    for category in catalog.categories() {
        println!("{}", category.name);
        for glass in catalog.glasses_in(category.id) {
            println!(
                "  {:>3}  {:<32} {:>8.2} / m²",
                glass.id, glass.name, glass.price_per_m2
            );
        }
    }
}

fn print_summary(report: &QuoteReport) {
    println!(
        "Stock sheet: {}x{} {}",
        report.stock_width, report.stock_height, report.unit
    );

    for (idx, sheet) in report.sheets.iter().enumerate() {
        println!(
            "Sheet {}: {} panel(s), used {:.2} m², waste {:.2} m² ({:.2}%)",
            idx + 1,
            sheet.layout.len(),
            sheet.used_area_m2,
            sheet.waste_area_m2,
            sheet.waste_percentage
        );
    }

    for panel in &report.unplaced {
        println!("Unplaced: {}", panel.dimensions_string());
    }

    println!(
        "Total: {} sheet(s), {:.2} m² of glass, average waste {:.2}%",
        report.sheet_count(),
        report.total_area_m2,
        report.average_waste_percent
    );

    if let Some(price) = &report.price {
        println!(
            "Price ({}): {:.2} m² = {:.2}, waste {:.2} m² = {:.2}, total {:.2}",
            price.glass_name,
            price.area_m2,
            price.area_price,
            price.waste_area_m2,
            price.waste_price,
            price.total_price
        );
    }
}
