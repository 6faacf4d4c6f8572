//! nest-quote-rs - Core library for pricing Metallix AutoNest reports.
//!
//! This library extracts the two tables of an AutoNest nesting report
//! (sheet-level sub-nests and individual parts) from pipe-delimited text,
//! prices each row from a material price table and a per-second cutting
//! rate, and produces order totals plus a quote document for the
//! downstream quoting backend.
//!
//! # Example
//!
//! ```no_run
//! use nest_quote_rs::{price_reports, NamePolicy, PriceConfig};
//!
//! let report = std::fs::read_to_string("order.txt").unwrap();
//! let order = price_reports(&[report], &PriceConfig::default(), NamePolicy::Basename).unwrap();
//! println!("Total: {:.2}", order.totals.total_price);
//! ```

pub mod config;
pub mod duration;
pub mod error;
pub mod model;
pub mod parser;
pub mod pricing;
pub mod quote;

// Re-exports for convenience
pub use config::PriceConfig;
pub use error::{QuoteError, Result};
pub use model::{Part, SubNest};
pub use parser::{load_report, NamePolicy, ParsedReport, ReportParser};
pub use pricing::{aggregate, price_parts, price_sub_nests, OrderTotals, PricedPart, PricedSubNest};
pub use quote::{build_quote, QuoteDocument, QuoteItem, SubmissionOutcome};

use std::path::PathBuf;

use serde::Serialize;

/// A fully priced order: both row collections plus the aggregate summary.
#[derive(Debug, Default, Serialize)]
pub struct PricedOrder {
    /// Priced sub-nest rows, in report-then-in-report order.
    pub sub_nests: Vec<PricedSubNest>,
    /// Priced part rows, in report-then-in-report order.
    pub parts: Vec<PricedPart>,
    /// Order-level totals.
    pub totals: OrderTotals,
    /// Rendered messages for rows skipped during parsing.
    pub skipped_rows: Vec<String>,
}

/// Price one or more report texts as a single combined order.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Extract both tables from each report
/// 2. Combine the parsed rows into one logical order
/// 3. Price every row against the supplied configuration
/// 4. Aggregate the order totals
///
/// Pricing fails as a whole if any referenced material has no price; rows
/// that fail to parse are skipped, collected and reported, never fatal.
pub fn price_reports<S: AsRef<str>>(
    reports: &[S],
    config: &PriceConfig,
    name_policy: NamePolicy,
) -> Result<PricedOrder> {
    let parser = ReportParser::new(name_policy);
    let parsed = parser.parse_many(reports);

    for row in &parsed.skipped {
        tracing::warn!("skipped report row: {row}");
    }

    let sub_nests = price_sub_nests(&parsed.sub_nests, config)?;
    let parts = price_parts(&parsed.parts, config)?;
    let totals = aggregate(&sub_nests, &parts);

    Ok(PricedOrder {
        sub_nests,
        parts,
        totals,
        skipped_rows: parsed.skipped.iter().map(|row| row.to_string()).collect(),
    })
}

/// Price report files from disk as a single combined order.
pub fn price_report_files(
    paths: &[PathBuf],
    config: &PriceConfig,
    name_policy: NamePolicy,
) -> Result<PricedOrder> {
    let mut texts = Vec::with_capacity(paths.len());
    for path in paths {
        texts.push(load_report(path)?);
    }
    price_reports(&texts, config, name_policy)
}
