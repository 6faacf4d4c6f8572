//! Per-line row patterns for the two report tables.
//!
//! The report format is not a grammar: it is a fixed set of per-line
//! shapes rendered as pipe-delimited text with arbitrary horizontal
//! whitespace around each field. Each shape is matched by one compiled
//! pattern with named capture groups.

use regex::{Captures, Regex};

use crate::duration::parse_duration;
use crate::error::{QuoteError, Result};
use crate::model::{Part, SubNest};

/// Sub-nest row: `| int | int | int | material | float | int | float | float | duration |`.
/// The material field is the only free-text field; it may contain internal
/// spaces ("Mild Steel") and is trimmed of surrounding whitespace.
const SUB_NEST_ROW: &str = r"\|\s*(?P<plate>\d+)\s*\|\s*(?P<size_x>\d+)\s*\|\s*(?P<size_y>\d+)\s*\|\s*(?P<material>[\w\s]+?)\s*\|\s*(?P<thickness>[\d.]+)\s*\|\s*(?P<quantity>\d+)\s*\|\s*(?P<area>[\d.]+)\s*\|\s*(?P<weight>[\d.]+)\s*\|\s*(?P<time>[\d:]+)\s*\|";

/// Part row: `| file-path | int | int | float | duration |`.
const PART_ROW: &str = r"\|\s*(?P<path>.+?)\s*\|\s*(?P<ordered>\d+)\s*\|\s*(?P<placed>\d+)\s*\|\s*(?P<weight>[\d.]+)\s*\|\s*(?P<time>[\d:]+)\s*\|";

/// Drawing-file stem: the run of name characters directly before a
/// case-insensitive ".dft" extension.
const PART_STEM: &str = r"(?i)(?P<stem>[\w\s-]+)\.dft";

/// Convention for reducing a part's drawing file path to a display name.
///
/// Two conventions exist in the field; the caller picks which one applies
/// to a report batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Full file stem: directories and the ".dft" extension stripped.
    #[default]
    Basename,
    /// File stem cut at the first underscore.
    BeforeUnderscore,
}

/// The compiled row patterns, built once per parser.
pub(crate) struct RowPatterns {
    pub sub_nest: Regex,
    pub part: Regex,
    pub part_stem: Regex,
}

impl RowPatterns {
    pub fn new() -> Self {
        Self {
            sub_nest: Regex::new(SUB_NEST_ROW).expect("sub-nest row pattern is valid"),
            part: Regex::new(PART_ROW).expect("part row pattern is valid"),
            part_stem: Regex::new(PART_STEM).expect("part stem pattern is valid"),
        }
    }
}

fn int_field(caps: &Captures<'_>, field: &'static str) -> Result<u32> {
    let value = &caps[field];
    value.parse().map_err(|_| QuoteError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn float_field(caps: &Captures<'_>, field: &'static str) -> Result<f64> {
    // The pattern class [\d.]+ admits strings like "1.2.3"; reject them here.
    let value = &caps[field];
    value.parse().map_err(|_| QuoteError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Decode a matched sub-nest row into a typed record.
pub(crate) fn decode_sub_nest(caps: &Captures<'_>) -> Result<SubNest> {
    Ok(SubNest {
        plate_number: int_field(caps, "plate")?,
        sheet_size_x_mm: int_field(caps, "size_x")?,
        sheet_size_y_mm: int_field(caps, "size_y")?,
        material: caps["material"].trim().to_string(),
        thickness_mm: float_field(caps, "thickness")?,
        quantity: int_field(caps, "quantity")?,
        area_m2: float_field(caps, "area")?,
        weight_kg: float_field(caps, "weight")?,
        cutting_time_per_sheet_sec: parse_duration(&caps["time"])?,
    })
}

/// Decode a matched part row into a typed record.
///
/// The material context stays empty here; the report parser fills it in
/// from the sub-nest table of the same report.
pub(crate) fn decode_part(
    caps: &Captures<'_>,
    stem: &Regex,
    policy: NamePolicy,
) -> Result<Part> {
    Ok(Part {
        part_name: part_name_from_path(&caps["path"], stem, policy)?,
        ordered_qty: int_field(caps, "ordered")?,
        placed_qty: int_field(caps, "placed")?,
        weight_kg: float_field(caps, "weight")?,
        cutting_time_sec: parse_duration(&caps["time"])?,
        ..Default::default()
    })
}

/// Reduce a drawing file path to a display name under the given policy.
pub(crate) fn part_name_from_path(path: &str, stem: &Regex, policy: NamePolicy) -> Result<String> {
    let caps = stem.captures(path).ok_or_else(|| QuoteError::PartName {
        path: path.to_string(),
    })?;
    let basename = &caps["stem"];
    let name = match policy {
        NamePolicy::Basename => basename,
        NamePolicy::BeforeUnderscore => basename.split('_').next().unwrap_or(basename),
    };
    Ok(name.to_string())
}
