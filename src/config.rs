//! Pricing configuration and policy constants.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Minimum billed cutting time per sheet, in seconds (15 minutes).
pub const DEFAULT_MIN_CUTTING_TIME_SEC: u64 = 900;

/// Default cutting price per second of machine time.
pub const DEFAULT_CUTTING_PRICE_PER_SEC: f64 = 0.05;

/// Default material price table (EUR per kilogram).
pub fn default_material_prices() -> HashMap<String, f64> {
    HashMap::from([
        ("Aluminum".to_string(), 1.9),
        ("Galvanized Steel".to_string(), 0.5),
        ("Mild Steel".to_string(), 0.3),
        ("Stainless Steel".to_string(), 1.7),
    ])
}

/// Pricing configuration supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceConfig {
    /// Material price table, EUR per kilogram keyed by material name.
    pub price_per_kg_by_material: HashMap<String, f64>,
    /// Cutting price per second of machine time.
    pub cutting_price_per_sec: f64,
    /// Minimum billed cutting time per sheet, in seconds.
    /// Applied to sub-nest sheets only, never to individual parts.
    pub min_cutting_time_sec: u64,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            price_per_kg_by_material: default_material_prices(),
            cutting_price_per_sec: DEFAULT_CUTTING_PRICE_PER_SEC,
            min_cutting_time_sec: DEFAULT_MIN_CUTTING_TIME_SEC,
        }
    }
}

impl PriceConfig {
    /// Create a configuration from a price table and cutting rate.
    pub fn new(price_per_kg_by_material: HashMap<String, f64>, cutting_price_per_sec: f64) -> Self {
        Self {
            price_per_kg_by_material,
            cutting_price_per_sec,
            ..Default::default()
        }
    }

    /// Look up the per-kilogram price for a material.
    pub fn price_for(&self, material: &str) -> Option<f64> {
        self.price_per_kg_by_material.get(material).copied()
    }
}

/// Round a money amount to two decimal places, half away from zero.
///
/// Applied at the point of computation: order totals are sums of
/// already-rounded per-row values, never a rounded sum.
#[inline]
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
