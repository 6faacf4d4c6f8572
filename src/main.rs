//! nest-quote - CLI tool to price Metallix AutoNest nesting reports.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tabled::{settings::Style, Table, Tabled};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nest_quote_rs::{
    build_quote, load_report, price_reports, NamePolicy, OrderTotals, PriceConfig, PricedPart,
    PricedSubNest,
};

/// Part display-name convention.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum NamePolicyArg {
    /// Full file stem with directories and extension stripped
    Basename,
    /// File stem cut at the first underscore
    Underscore,
}

impl From<NamePolicyArg> for NamePolicy {
    fn from(arg: NamePolicyArg) -> Self {
        match arg {
            NamePolicyArg::Basename => NamePolicy::Basename,
            NamePolicyArg::Underscore => NamePolicy::BeforeUnderscore,
        }
    }
}

/// Price Metallix AutoNest nesting reports for sheet-metal cutting quotes.
#[derive(Parser, Debug)]
#[command(name = "nest-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input AutoNest report files, combined into one order
    #[arg(required = true)]
    reports: Vec<PathBuf>,

    /// JSON file mapping material names to prices per kilogram
    #[arg(short, long)]
    prices: Option<PathBuf>,

    /// Cutting price per second
    #[arg(short, long)]
    cutting_price: Option<f64>,

    /// Minimum billed cutting time per sheet, in seconds
    #[arg(long)]
    min_cutting_time: Option<u64>,

    /// Part display-name convention
    #[arg(long, value_enum, default_value_t = NamePolicyArg::Basename)]
    name_policy: NamePolicyArg,

    /// Write the quote JSON document to this path
    #[arg(short, long)]
    quote: Option<PathBuf>,

    /// Output the full priced order as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Tabled)]
struct SubNestRow {
    #[tabled(rename = "Plate#")]
    plate: u32,
    #[tabled(rename = "Size X (mm)")]
    size_x: u32,
    #[tabled(rename = "Size Y (mm)")]
    size_y: u32,
    #[tabled(rename = "Material")]
    material: String,
    #[tabled(rename = "Thickness (mm)")]
    thickness: f64,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Weight (kg)")]
    weight: f64,
    #[tabled(rename = "Total Weight (kg)")]
    total_weight: String,
    #[tabled(rename = "Material Price")]
    material_price: String,
    #[tabled(rename = "Cutting Time (sec)")]
    cutting_time: u64,
    #[tabled(rename = "Cutting Price")]
    cutting_price: String,
    #[tabled(rename = "Total Price")]
    total_price: String,
}

impl From<&PricedSubNest> for SubNestRow {
    fn from(row: &PricedSubNest) -> Self {
        Self {
            plate: row.plate_number,
            size_x: row.sheet_size_x_mm,
            size_y: row.sheet_size_y_mm,
            material: row.material.clone(),
            thickness: row.thickness_mm,
            quantity: row.quantity,
            weight: row.weight_kg,
            total_weight: format!("{:.2}", row.total_weight_kg),
            material_price: format!("{:.2}", row.total_material_price),
            cutting_time: row.total_cutting_time_sec,
            cutting_price: format!("{:.2}", row.total_cutting_price),
            total_price: format!("{:.2}", row.total_price),
        }
    }
}

#[derive(Tabled)]
struct PartRow {
    #[tabled(rename = "Part Name")]
    name: String,
    #[tabled(rename = "Ordered Qty")]
    ordered: u32,
    #[tabled(rename = "Weight (kg)")]
    weight: f64,
    #[tabled(rename = "Cutting Time (sec)")]
    cutting_time: u64,
    #[tabled(rename = "Price per Part")]
    price_per_part: String,
    #[tabled(rename = "Total Price")]
    total_price: String,
}

impl From<&PricedPart> for PartRow {
    fn from(row: &PricedPart) -> Self {
        Self {
            name: row.part_name.clone(),
            ordered: row.ordered_qty,
            weight: row.weight_kg,
            cutting_time: row.cutting_time_sec,
            price_per_part: format!("{:.2}", row.price_per_part),
            total_price: format!("{:.2}", row.total_price),
        }
    }
}

fn print_table(title: &str, rows: &[impl Tabled]) {
    println!("\n{title}");
    if rows.is_empty() {
        println!("No entries");
    } else {
        let mut table = Table::new(rows);
        table.with(Style::modern_rounded());
        println!("{}", table);
    }
}

fn print_summary(totals: &OrderTotals) {
    println!("\nTotal Material Weight: {:.2} kg", totals.total_weight_kg);
    println!("Total Material Price:  {:.2}", totals.total_material_price);
    println!(
        "Total Cutting Time:    {} (HH:MM:SS) / {} seconds",
        totals.total_cutting_time_hms, totals.total_cutting_time_sec
    );
    println!("Total Cutting Price:   {:.2}", totals.total_cutting_price);
    println!("Total Price:           {:.2}", totals.total_price);
    println!("Total Price (Parts):   {:.2}", totals.total_parts_price);
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
        .init();

    // Assemble pricing configuration
    let mut config = PriceConfig::default();
    if let Some(path) = &args.prices {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read price table {}", path.display()))?;
        let prices: HashMap<String, f64> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse price table {}", path.display()))?;
        config.price_per_kg_by_material = prices;
    }
    if let Some(rate) = args.cutting_price {
        config.cutting_price_per_sec = rate;
    }
    if let Some(floor) = args.min_cutting_time {
        config.min_cutting_time_sec = floor;
    }

    info!("Processing {} report(s)", args.reports.len());

    // Read the reports up front so a bad path fails before any pricing
    let mut texts = Vec::with_capacity(args.reports.len());
    for path in &args.reports {
        let content = load_report(path)
            .with_context(|| format!("Failed to load report {}", path.display()))?;
        info!("Loaded: {}", path.display());
        texts.push(content);
    }

    let order = price_reports(&texts, &config, args.name_policy.into())?;

    info!(
        "Priced {} sub-nest(s), {} part(s)",
        order.sub_nests.len(),
        order.parts.len()
    );
    if !order.skipped_rows.is_empty() {
        warn!("{} report row(s) skipped", order.skipped_rows.len());
    }

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&order)?;
        println!("{}", json);
        return Ok(());
    }

    let sub_nest_rows: Vec<SubNestRow> = order.sub_nests.iter().map(Into::into).collect();
    let part_rows: Vec<PartRow> = order.parts.iter().map(Into::into).collect();

    print_table("Sub Nests in Order", &sub_nest_rows);
    print_table("Parts in Order", &part_rows);
    print_summary(&order.totals);

    // Quote document for the submission collaborator
    if let Some(path) = &args.quote {
        let quote = build_quote(&order.parts, &order.totals);
        let json = serde_json::to_string_pretty(&quote)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Quote written: {}", path.display());
    }

    Ok(())
}
