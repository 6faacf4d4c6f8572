//! Priced row records and order totals.

use serde::{Deserialize, Serialize};

/// A sub-nest row with its derived pricing columns.
///
/// Parsed columns are copied through; derived columns are computed by the
/// pricing engine and never set anywhere else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricedSubNest {
    // === Parsed columns ===
    /// Plate number as printed in the report.
    pub plate_number: u32,
    /// Sheet size along X in millimeters.
    pub sheet_size_x_mm: u32,
    /// Sheet size along Y in millimeters.
    pub sheet_size_y_mm: u32,
    /// Material name.
    pub material: String,
    /// Material thickness in millimeters.
    pub thickness_mm: f64,
    /// Count of identical sheets.
    pub quantity: u32,
    /// Nested area of one sheet in square meters.
    pub area_m2: f64,
    /// Weight of one sheet in kilograms.
    pub weight_kg: f64,

    // === Derived columns ===
    /// Weight of all sheets: weight of one sheet times quantity.
    pub total_weight_kg: f64,
    /// Billed cutting time for one sheet in seconds, with the minimum
    /// floor applied per sheet.
    pub cutting_time_per_sheet_sec: u64,
    /// Billed cutting time for all sheets in seconds.
    pub total_cutting_time_sec: u64,
    /// Material cost for all sheets, rounded to cents.
    pub total_material_price: f64,
    /// Cutting cost for all sheets, rounded to cents.
    pub total_cutting_price: f64,
    /// Sum of the material and cutting costs.
    pub total_price: f64,
}

/// A part row with its derived pricing columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricedPart {
    /// Display name derived from the drawing file path.
    pub part_name: String,
    /// Number of parts ordered.
    pub ordered_qty: u32,
    /// Number of parts placed on sheets.
    pub placed_qty: u32,
    /// Weight of one part in kilograms.
    pub weight_kg: f64,
    /// Cutting time for one part in seconds. No minimum floor.
    pub cutting_time_sec: u64,
    /// Material inherited from the part's report.
    pub material: String,
    /// Thickness inherited from the part's report, millimeters.
    pub thickness_mm: f64,
    /// Unit price: material cost plus cutting cost for one part. Not
    /// rounded; rounding happens on the line total.
    pub price_per_part: f64,
    /// Line total: unit price times ordered quantity, rounded to cents.
    pub total_price: f64,
}

/// Order-level sums across all priced rows.
///
/// All money sums are plain sums of already-rounded per-row values; no
/// re-rounding is applied here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Total material weight across all sub-nests, kilograms.
    pub total_weight_kg: f64,
    /// Total material cost across all sub-nests.
    pub total_material_price: f64,
    /// Total billed cutting time across all sub-nests, seconds. This is
    /// the value of record; the HH:MM:SS rendering is display-only.
    pub total_cutting_time_sec: u64,
    /// Total billed cutting time rendered as HH:MM:SS.
    pub total_cutting_time_hms: String,
    /// Total cutting cost across all sub-nests.
    pub total_cutting_price: f64,
    /// Total order price: material plus cutting across all sub-nests.
    pub total_price: f64,
    /// Total of all part line totals.
    pub total_parts_price: f64,
}
