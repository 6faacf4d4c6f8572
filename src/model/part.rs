//! Part record - one distinct cut piece in the order.

use serde::{Deserialize, Serialize};

/// One distinct cut piece ordered by a customer, produced across one or
/// more sub-nests.
///
/// The report's "Parts in Order" table carries no material or thickness
/// columns; both are inherited from the sub-nest table of the same report
/// after parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    /// Display name derived from the part's drawing file path.
    pub part_name: String,
    /// Number of parts ordered.
    pub ordered_qty: u32,
    /// Number of parts placed on sheets (informational).
    pub placed_qty: u32,
    /// Weight of one part in kilograms.
    pub weight_kg: f64,
    /// Cutting time for one part, in seconds. No minimum floor applies to
    /// individual parts.
    pub cutting_time_sec: u64,
    /// Material inherited from the report's sub-nest table. Empty when the
    /// report contained no sub-nest rows.
    pub material: String,
    /// Thickness inherited from the report's sub-nest table, millimeters.
    pub thickness_mm: f64,
}
