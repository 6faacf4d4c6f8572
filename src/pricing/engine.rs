//! Pricing engine: material validation, derived columns, aggregation.

use crate::config::{round_money, PriceConfig};
use crate::duration::{apply_minimum, format_duration};
use crate::error::{QuoteError, Result};
use crate::model::{Part, SubNest};

use super::priced::{OrderTotals, PricedPart, PricedSubNest};

/// Collect the materials referenced by `materials` that have no entry in
/// the price table, deduplicated in first-reference order.
fn missing_materials<'a>(
    materials: impl Iterator<Item = &'a str>,
    config: &PriceConfig,
) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for material in materials {
        if config.price_for(material).is_none() && !missing.iter().any(|m| m == material) {
            missing.push(material.to_string());
        }
    }
    missing
}

/// Price all sub-nest rows.
///
/// The whole call fails with [`QuoteError::MissingPrices`] naming every
/// material absent from the price table; no partial results are returned.
/// Money columns are rounded to cents as they are computed, so order
/// totals are sums of already-rounded per-row values.
pub fn price_sub_nests(rows: &[SubNest], config: &PriceConfig) -> Result<Vec<PricedSubNest>> {
    let missing = missing_materials(rows.iter().map(|r| r.material.as_str()), config);
    if !missing.is_empty() {
        return Err(QuoteError::MissingPrices { materials: missing });
    }

    let rate = config.cutting_price_per_sec;
    let priced = rows
        .iter()
        .map(|row| {
            // Validated above; every material has a price.
            let price_per_kg = config.price_for(&row.material).unwrap_or_default();

            let total_weight_kg = row.weight_kg * f64::from(row.quantity);
            // The floor applies per sheet, before multiplying by quantity.
            let per_sheet_sec =
                apply_minimum(row.cutting_time_per_sheet_sec, config.min_cutting_time_sec);
            let total_cutting_time_sec = per_sheet_sec * u64::from(row.quantity);

            let total_material_price = round_money(total_weight_kg * price_per_kg);
            let total_cutting_price = round_money(total_cutting_time_sec as f64 * rate);

            PricedSubNest {
                plate_number: row.plate_number,
                sheet_size_x_mm: row.sheet_size_x_mm,
                sheet_size_y_mm: row.sheet_size_y_mm,
                material: row.material.clone(),
                thickness_mm: row.thickness_mm,
                quantity: row.quantity,
                area_m2: row.area_m2,
                weight_kg: row.weight_kg,
                total_weight_kg,
                cutting_time_per_sheet_sec: per_sheet_sec,
                total_cutting_time_sec,
                total_material_price,
                total_cutting_price,
                // Sum of two already-rounded values; inherently two decimals.
                total_price: total_material_price + total_cutting_price,
            }
        })
        .collect();

    Ok(priced)
}

/// Price all part rows.
///
/// Materials are validated eagerly with the same batch-reporting policy
/// as sub-nests. The unit price is left unrounded; only the line total is
/// rounded to cents.
pub fn price_parts(rows: &[Part], config: &PriceConfig) -> Result<Vec<PricedPart>> {
    let missing = missing_materials(rows.iter().map(|r| r.material.as_str()), config);
    if !missing.is_empty() {
        return Err(QuoteError::MissingPrices { materials: missing });
    }

    let rate = config.cutting_price_per_sec;
    let priced = rows
        .iter()
        .map(|row| {
            let price_per_kg = config.price_for(&row.material).unwrap_or_default();
            let price_per_part =
                row.weight_kg * price_per_kg + row.cutting_time_sec as f64 * rate;

            PricedPart {
                part_name: row.part_name.clone(),
                ordered_qty: row.ordered_qty,
                placed_qty: row.placed_qty,
                weight_kg: row.weight_kg,
                cutting_time_sec: row.cutting_time_sec,
                material: row.material.clone(),
                thickness_mm: row.thickness_mm,
                price_per_part,
                total_price: round_money(price_per_part * f64::from(row.ordered_qty)),
            }
        })
        .collect();

    Ok(priced)
}

/// Sum per-row values into order totals.
///
/// Plain sums of already-computed columns; the total cutting time is also
/// rendered as HH:MM:SS for display, with the integer seconds remaining
/// the value of record.
pub fn aggregate(sub_nests: &[PricedSubNest], parts: &[PricedPart]) -> OrderTotals {
    let total_cutting_time_sec = sub_nests.iter().map(|r| r.total_cutting_time_sec).sum();

    OrderTotals {
        total_weight_kg: sub_nests.iter().map(|r| r.total_weight_kg).sum(),
        total_material_price: sub_nests.iter().map(|r| r.total_material_price).sum(),
        total_cutting_time_sec,
        total_cutting_time_hms: format_duration(total_cutting_time_sec),
        total_cutting_price: sub_nests.iter().map(|r| r.total_cutting_price).sum(),
        total_price: sub_nests.iter().map(|r| r.total_price).sum(),
        total_parts_price: parts.iter().map(|r| r.total_price).sum(),
    }
}
