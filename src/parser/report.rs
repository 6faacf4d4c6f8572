//! Report-level parsing: table extraction, multi-report combining and
//! file loading.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::row::{self, NamePolicy, RowPatterns};
use crate::error::{QuoteError, Result};
use crate::model::{Part, SubNest};

/// A parse failure for a single table row.
///
/// Row failures never abort a report: they are collected and surfaced so
/// the caller can report how many rows were skipped.
#[derive(Debug)]
pub struct SkippedRow {
    /// 1-based line number within the report the row came from.
    pub line: usize,
    /// What went wrong with the row.
    pub error: QuoteError,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// Parsed contents of one or more AutoNest reports.
#[derive(Debug, Default)]
pub struct ParsedReport {
    /// Sub-nest rows in text order.
    pub sub_nests: Vec<SubNest>,
    /// Part rows in text order.
    pub parts: Vec<Part>,
    /// Rows that matched a table shape but failed to decode.
    pub skipped: Vec<SkippedRow>,
}

impl ParsedReport {
    /// Number of rows that were skipped due to decode failures.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Append another report's rows, preserving per-report order.
    fn merge(&mut self, other: ParsedReport) {
        self.sub_nests.extend(other.sub_nests);
        self.parts.extend(other.parts);
        self.skipped.extend(other.skipped);
    }
}

/// Parser for the two row shapes of an AutoNest report.
///
/// Holds the compiled row patterns and the part-name policy; parsing is a
/// pure function of the input text.
pub struct ReportParser {
    patterns: RowPatterns,
    name_policy: NamePolicy,
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new(NamePolicy::default())
    }
}

impl ReportParser {
    /// Create a parser with the given part-name policy.
    pub fn new(name_policy: NamePolicy) -> Self {
        Self {
            patterns: RowPatterns::new(),
            name_policy,
        }
    }

    /// Scan the full report text for sub-nest rows.
    ///
    /// Lines that do not match the row shape are skipped silently: headers,
    /// separators and the parts table are expected not to match. A line
    /// that matches the shape but fails field decoding is collected as a
    /// skipped row.
    pub fn extract_sub_nests(&self, text: &str) -> (Vec<SubNest>, Vec<SkippedRow>) {
        let mut rows = Vec::new();
        let mut skipped = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let Some(caps) = self.patterns.sub_nest.captures(line) else {
                continue;
            };
            match row::decode_sub_nest(&caps) {
                Ok(nest) => rows.push(nest),
                Err(error) => {
                    debug!("sub-nest row rejected at line {}: {}", idx + 1, error);
                    skipped.push(SkippedRow {
                        line: idx + 1,
                        error,
                    });
                }
            }
        }

        (rows, skipped)
    }

    /// Scan the full report text for part rows.
    ///
    /// A row whose drawing path cannot be reduced to a display name, or
    /// whose numeric fields fail to decode, is collected as a skipped row
    /// rather than aborting the batch.
    pub fn extract_parts(&self, text: &str) -> (Vec<Part>, Vec<SkippedRow>) {
        let mut rows = Vec::new();
        let mut skipped = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let Some(caps) = self.patterns.part.captures(line) else {
                continue;
            };
            match row::decode_part(&caps, &self.patterns.part_stem, self.name_policy) {
                Ok(part) => rows.push(part),
                Err(error) => {
                    debug!("part row rejected at line {}: {}", idx + 1, error);
                    skipped.push(SkippedRow {
                        line: idx + 1,
                        error,
                    });
                }
            }
        }

        (rows, skipped)
    }

    /// Parse both tables of a single report.
    ///
    /// Parts inherit the material and thickness of the first sub-nest row
    /// of the same report; the part table itself carries neither column.
    pub fn parse(&self, text: &str) -> ParsedReport {
        let (sub_nests, mut skipped) = self.extract_sub_nests(text);
        let (mut parts, part_skips) = self.extract_parts(text);
        skipped.extend(part_skips);

        if let Some(first) = sub_nests.first() {
            for part in &mut parts {
                part.material = first.material.clone();
                part.thickness_mm = first.thickness_mm;
            }
        }

        ParsedReport {
            sub_nests,
            parts,
            skipped,
        }
    }

    /// Parse several reports into one combined order.
    ///
    /// Rows are concatenated sub-nests with sub-nests and parts with
    /// parts, preserving per-report then in-report order. Plate numbers
    /// are left untouched: no renumbering, no cross-report conflict
    /// detection.
    pub fn parse_many<S: AsRef<str>>(&self, reports: &[S]) -> ParsedReport {
        let mut combined = ParsedReport::default();
        for report in reports {
            combined.merge(self.parse(report.as_ref()));
        }
        combined
    }
}

/// Load a report file as text.
///
/// Missing files and empty (or whitespace-only) content are rejected
/// before parsing.
pub fn load_report(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(QuoteError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(content)
}
