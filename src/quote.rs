//! Quote document for the downstream quoting backend.
//!
//! The core's contract ends at producing a JSON-serializable structure;
//! the actual HTTP submission is the caller's collaborator. Every numeric
//! field is a plain integer or float that encodes natively as JSON.

use serde::{Deserialize, Serialize};

use crate::pricing::{OrderTotals, PricedPart};

/// Status assigned to newly created quotes.
pub const QUOTE_STATUS_DRAFT: &str = "Draft";

/// One quoted part line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItem {
    /// Part display name.
    pub name: String,
    /// Number of parts ordered.
    pub ordered_qty: u32,
    /// Weight of one part in kilograms.
    pub weight_kg: f64,
    /// Material name.
    pub material: String,
    /// Material thickness in millimeters.
    pub thickness_mm: f64,
    /// Unit price for one part.
    pub price_per_part: f64,
}

/// The document handed to the quoting backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDocument {
    /// Quote lifecycle status.
    pub status: String,
    /// Order-level totals.
    pub totals: OrderTotals,
    /// Quoted part lines.
    pub items: Vec<QuoteItem>,
}

/// Build a quote document from priced parts and order totals.
pub fn build_quote(parts: &[PricedPart], totals: &OrderTotals) -> QuoteDocument {
    QuoteDocument {
        status: QUOTE_STATUS_DRAFT.to_string(),
        totals: totals.clone(),
        items: parts
            .iter()
            .map(|part| QuoteItem {
                name: part.part_name.clone(),
                ordered_qty: part.ordered_qty,
                weight_kg: part.weight_kg,
                material: part.material.clone(),
                thickness_mm: part.thickness_mm,
                price_per_part: part.price_per_part,
            })
            .collect(),
    }
}

/// Result reported back by the submission collaborator, passed through to
/// the user unchanged. The core never retries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    /// Whether the backend accepted the quote.
    pub success: bool,
    /// Backend-provided message, verbatim.
    pub message: String,
}
