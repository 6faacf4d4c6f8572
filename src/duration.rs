//! Duration codec for the HH:MM:SS fields used throughout AutoNest reports.

use crate::error::{QuoteError, Result};

/// Parse a colon-separated duration into seconds.
///
/// Fields are read as base-60 positional digits, so "HH:MM:SS" is the
/// common case but any number of fields is accepted ("MM:SS", plain
/// seconds, or more than three fields).
pub fn parse_duration(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(QuoteError::InvalidDuration {
            value: text.to_string(),
        });
    }

    let mut total: u64 = 0;
    for field in trimmed.split(':') {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(QuoteError::InvalidDuration {
                value: text.to_string(),
            });
        }
        let value: u64 = field.parse().map_err(|_| QuoteError::InvalidDuration {
            value: text.to_string(),
        })?;
        total = total * 60 + value;
    }

    Ok(total)
}

/// Format seconds as zero-padded "HH:MM:SS".
///
/// Hours are not capped at two digits: 360000 seconds renders as
/// "100:00:00".
pub fn format_duration(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Apply a minimum billed time floor.
#[inline]
pub fn apply_minimum(seconds: u64, floor: u64) -> u64 {
    seconds.max(floor)
}
