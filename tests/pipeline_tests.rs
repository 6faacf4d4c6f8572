//! End-to-end tests over realistic AutoNest report fixtures.
//!
//! These tests run the whole pipeline (extraction, combining, pricing,
//! aggregation, quote building) and validate the arithmetic contracts:
//! per-sheet minimum floor before quantity, money rounded at computation
//! time, totals as sums of already-rounded row values.

use std::collections::HashMap;
use std::path::Path;

use nest_quote_rs::{
    build_quote, price_report_files, price_reports, NamePolicy, PriceConfig, PricedOrder,
    QuoteError,
};

/// Fixture directory for report files.
const FIXTURE_DIR: &str = "tests/fixtures";

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.001
}

fn fixture(name: &str) -> String {
    let path = Path::new(FIXTURE_DIR).join(name);
    std::fs::read_to_string(&path).expect("fixture should be readable")
}

fn priced(reports: &[String]) -> PricedOrder {
    price_reports(reports, &PriceConfig::default(), NamePolicy::Basename)
        .expect("pricing should succeed")
}

// ==================== Single-report pipeline ====================

#[test]
fn test_single_report_rows() {
    let order = priced(&[fixture("mild_steel.txt")]);

    assert_eq!(order.sub_nests.len(), 2);
    assert_eq!(order.parts.len(), 3);
    assert!(order.skipped_rows.is_empty());

    let first = &order.sub_nests[0];
    assert_eq!(first.plate_number, 1);
    assert_eq!(first.material, "Mild Steel");
    assert_eq!(first.quantity, 6);
    // 00:48:08 = 2888 s, above the floor.
    assert_eq!(first.cutting_time_per_sheet_sec, 2888);
    assert_eq!(first.total_cutting_time_sec, 17328);
    assert!(approx(first.total_weight_kg, 890.19));
    assert!(approx(first.total_material_price, 267.06));
    assert!(approx(first.total_cutting_price, 866.40));
    assert!(approx(first.total_price, 1133.46));

    let part = &order.parts[0];
    assert_eq!(part.part_name, "206835_4MM_12tk");
    assert_eq!(part.material, "Mild Steel");
    assert!(approx(part.thickness_mm, 4.2));
    // 6.34 * 0.3 + 26 * 0.05, unrounded.
    assert!(approx(part.price_per_part, 3.202));
    assert!(approx(part.total_price, 38.42));
}

#[test]
fn test_single_report_totals() {
    let order = priced(&[fixture("mild_steel.txt")]);
    let totals = &order.totals;

    assert!(approx(totals.total_weight_kg, 1038.555));
    assert!(approx(totals.total_material_price, 311.57));
    assert_eq!(totals.total_cutting_time_sec, 19917);
    assert_eq!(totals.total_cutting_time_hms, "05:31:57");
    assert!(approx(totals.total_cutting_price, 995.85));
    assert!(approx(totals.total_price, 1307.42));
    assert!(approx(totals.total_parts_price, 84.90));
}

#[test]
fn test_minimum_floor_applies_per_sheet() {
    let order = priced(&[fixture("stainless.txt")]);

    // 00:12:00 = 720 s is below the 900 s floor; billed per sheet at 900,
    // then multiplied by the two sheets.
    let floored = &order.sub_nests[0];
    assert_eq!(floored.cutting_time_per_sheet_sec, 900);
    assert_eq!(floored.total_cutting_time_sec, 1800);
    assert!(approx(floored.total_cutting_price, 90.00));
    assert!(approx(floored.total_material_price, 249.90));
    assert!(approx(floored.total_price, 339.90));

    // 00:20:30 = 1230 s is above the floor and billed as-is.
    let unfloored = &order.sub_nests[1];
    assert_eq!(unfloored.cutting_time_per_sheet_sec, 1230);
}

// ==================== Multi-report combining ====================

#[test]
fn test_combined_reports_concatenate() {
    let order = priced(&[fixture("mild_steel.txt"), fixture("stainless.txt")]);

    assert_eq!(order.sub_nests.len(), 4);
    assert_eq!(order.parts.len(), 6);

    // Report order first, in-report order second; plate numbers untouched.
    let plates: Vec<u32> = order.sub_nests.iter().map(|r| r.plate_number).collect();
    assert_eq!(plates, vec![1, 2, 1, 2]);
    assert_eq!(order.parts[0].material, "Mild Steel");
    assert_eq!(order.parts[3].material, "Stainless Steel");
    assert_eq!(order.parts[5].part_name, "927251026_3MM_1tk");
}

#[test]
fn test_combined_totals_sum_rounded_rows() {
    let order = priced(&[fixture("mild_steel.txt"), fixture("stainless.txt")]);
    let totals = &order.totals;

    assert!(approx(totals.total_weight_kg, 1259.055));
    assert!(approx(totals.total_material_price, 686.42));
    assert_eq!(totals.total_cutting_time_sec, 22947);
    assert_eq!(totals.total_cutting_time_hms, "06:22:27");
    assert!(approx(totals.total_cutting_price, 1147.35));
    assert!(approx(totals.total_price, 1833.77));
    assert!(approx(totals.total_parts_price, 148.30));
}

// ==================== Error handling ====================

#[test]
fn test_missing_material_price_fails_whole_order() {
    let config = PriceConfig {
        price_per_kg_by_material: HashMap::from([("Mild Steel".to_string(), 0.3)]),
        cutting_price_per_sec: 0.05,
        min_cutting_time_sec: 900,
    };
    let reports = [fixture("mild_steel.txt"), fixture("stainless.txt")];
    let err = price_reports(&reports, &config, NamePolicy::Basename).unwrap_err();
    match err {
        QuoteError::MissingPrices { materials } => {
            assert_eq!(materials, vec!["Stainless Steel".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_part_rows_are_collected_not_fatal() {
    let text = "\
|1 |2000 |1000 |Mild Steel |2.0 |1 |1.25 |16.9 |00:30:00 |
|C:\\jobs\\good_bracket.dft |2 |2 |1.10 |00:00:30 |
|C:\\jobs\\mystery_file.step |4 |4 |0.55 |00:00:10 |
";
    let order = price_reports(&[text], &PriceConfig::default(), NamePolicy::Basename).unwrap();
    assert_eq!(order.parts.len(), 1);
    assert_eq!(order.skipped_rows.len(), 1);
    assert!(order.skipped_rows[0].contains("mystery_file.step"));
}

#[test]
fn test_missing_report_file_fails() {
    let err = price_report_files(
        &["no/such/report.txt".into()],
        &PriceConfig::default(),
        NamePolicy::Basename,
    )
    .unwrap_err();
    assert!(matches!(err, QuoteError::FileNotFound { .. }));
}

// ==================== Name policy ====================

#[test]
fn test_underscore_policy_shortens_names() {
    let reports = [fixture("mild_steel.txt")];
    let order = price_reports(
        &reports,
        &PriceConfig::default(),
        NamePolicy::BeforeUnderscore,
    )
    .unwrap();
    let names: Vec<&str> = order.parts.iter().map(|p| p.part_name.as_str()).collect();
    assert_eq!(names, vec!["206835", "206815", "206820"]);
}

// ==================== Quote document ====================

#[test]
fn test_quote_document_from_combined_order() {
    let order = priced(&[fixture("mild_steel.txt"), fixture("stainless.txt")]);
    let quote = build_quote(&order.parts, &order.totals);

    assert_eq!(quote.status, "Draft");
    assert_eq!(quote.items.len(), 6);

    let item = &quote.items[3];
    assert_eq!(item.name, "927251024_3MM_8tk");
    assert_eq!(item.ordered_qty, 8);
    assert_eq!(item.material, "Stainless Steel");
    assert!(approx(item.thickness_mm, 3.0));
    assert!(approx(item.price_per_part, 4.29));

    // The document must encode as plain JSON.
    let json = serde_json::to_string(&quote).expect("quote should serialize");
    assert!(json.contains("\"status\":\"Draft\""));
    assert!(json.contains("\"total_cutting_time_sec\":22947"));
}
