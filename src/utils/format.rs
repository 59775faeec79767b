//! Formatting utilities for file sizes.

use crate::config::{SIZE_UNITS, ZERO_SIZE_LABEL};

const KIB: f64 = 1024.0;

/// Format a byte count for display (e.g., "1.5 KB", "3.21 MB").
///
/// The unit is `floor(log1024(bytes))`, clamped to the unit table, and the
/// scaled value is rounded to two decimals with trailing zeros dropped.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return ZERO_SIZE_LABEL.to_string();
    }

    let scaled = bytes as f64 / KIB.powi(unit_index(bytes) as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{} {}", trim_decimal(rounded), SIZE_UNITS[unit_index(bytes)])
}

/// Integer `floor(log1024(bytes))`, clamped to the last unit.
///
/// Computed by repeated shifts so exact powers of 1024 never land one unit
/// low through floating point error.
fn unit_index(bytes: u64) -> usize {
    let mut index = 0;
    let mut remaining = bytes;
    while remaining >= 1024 && index < SIZE_UNITS.len() - 1 {
        remaining /= 1024;
        index += 1;
    }
    index
}

/// Render a float the way a number prints without a fixed precision:
/// whole values lose their fraction, others keep at most two digits.
fn trim_decimal(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
