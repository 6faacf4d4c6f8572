//! Sub-nest record - one physical sheet in a nesting layout.

use serde::{Deserialize, Serialize};

/// One physical sheet/plate within a nesting job, cut as a unit.
///
/// Field values are taken verbatim from the "Sub Nests in Order" table of
/// an AutoNest report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubNest {
    /// Plate number as printed in the report. Informational only: it is
    /// not checked for uniqueness or agreement with row order.
    pub plate_number: u32,
    /// Sheet size along X in millimeters.
    pub sheet_size_x_mm: u32,
    /// Sheet size along Y in millimeters.
    pub sheet_size_y_mm: u32,
    /// Material name, e.g. "Mild Steel".
    pub material: String,
    /// Material thickness in millimeters.
    pub thickness_mm: f64,
    /// Count of identical sheets.
    pub quantity: u32,
    /// Nested area of one sheet in square meters (informational).
    pub area_m2: f64,
    /// Weight of one sheet in kilograms.
    pub weight_kg: f64,
    /// Cutting time for one sheet in seconds, as parsed from the report's
    /// HH:MM:SS column. No minimum floor applied at this stage.
    pub cutting_time_per_sheet_sec: u64,
}
