//! Human-readable file sizes.
use serde::{Deserialize, Serialize};

use crate::locale::{
    GROUP_SEPARATOR, MAX_FRACTION_DIGITS, NumberFormat, NumberFormatOptions, PLACEHOLDER,
    number_text, to_fixed,
};

const SI_UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BINARY_UNITS: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Compact scales of the locale, largest first, down to plain bytes.
const COMPACT_SCALES: [(f64, Option<&str>); 5] = [
    (1e12, Some("трлн")),
    (1e9, Some("млрд")),
    (1e6, Some("млн")),
    (1e3, Some("тыс.")),
    (1.0, None),
];
/// Narrow byte unit of the locale.
const COMPACT_BYTE: &str = "Б";

/// Options of [`format_file_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileSizeOptions {
    /// Scale by 1000 (`kB`) instead of 1024 (`KiB`).
    pub si: bool,
    /// Decimal places of the scaled value, at most 20.
    pub dp: u32,
    /// Use the locale's compact unit formatting instead of manual scaling.
    pub use_intl: bool,
}

impl Default for FileSizeOptions {
    fn default() -> Self {
        Self {
            si: true,
            dp: 1,
            use_intl: false,
        }
    }
}

/// Formats a byte count, e.g. `1500` → `1.5 kB` or `1.5 KiB` with `si = false`.
///
/// The value is divided by the threshold until its rounded magnitude drops
/// below it or the largest unit is reached.
pub fn format_file_size(bytes: f64, options: &FileSizeOptions) -> String {
    if !bytes.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if options.use_intl {
        return compact_bytes(bytes);
    }

    let threshold = if options.si { 1000.0 } else { 1024.0 };
    if bytes.abs() < threshold {
        return format!("{} B", number_text(bytes));
    }

    let units = if options.si { &SI_UNITS } else { &BINARY_UNITS };
    let dp = options.dp.min(MAX_FRACTION_DIGITS);
    let scale = 10f64.powi(dp as i32);
    let mut value = bytes / threshold;
    let mut unit = 0;

    while (value.abs() * scale).round() / scale >= threshold && unit < units.len() - 1 {
        value /= threshold;
        unit += 1;
    }

    format!("{} {}", to_fixed(value, dp), units[unit])
}

fn compact_bytes(bytes: f64) -> String {
    let mut index = COMPACT_SCALES
        .iter()
        .position(|(scale, _)| bytes.abs() >= *scale)
        .unwrap_or(COMPACT_SCALES.len() - 1);
    let (mut value, mut digits) = compact_value(bytes, COMPACT_SCALES[index].0);

    // Rounding up to a thousand moves to the next scale.
    if value.abs() >= 1000.0 && index > 0 {
        index -= 1;
        (value, digits) = compact_value(bytes, COMPACT_SCALES[index].0);
    }

    let options = NumberFormatOptions::decimal().max_fraction_digits(digits);
    let number = NumberFormat::new(&options).format(value);
    let suffix = COMPACT_SCALES[index].1;

    match suffix {
        Some(suffix) => format!("{number}{GROUP_SEPARATOR}{suffix}{GROUP_SEPARATOR}{COMPACT_BYTE}"),
        None => format!("{number}{GROUP_SEPARATOR}{COMPACT_BYTE}"),
    }
}

/// `bytes` in units of `scale`, rounded to one decimal below ten and whole above.
fn compact_value(bytes: f64, scale: f64) -> (f64, u32) {
    let value = bytes / scale;
    let digits = if value.abs() < 10.0 { 1 } else { 0 };
    let factor = 10f64.powi(digits as i32);
    ((value * factor).round() / factor, digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_si_and_binary_units() {
        let binary = FileSizeOptions {
            si: false,
            ..FileSizeOptions::default()
        };
        assert_eq!(format_file_size(1500.0, &FileSizeOptions::default()), "1.5 kB");
        assert_eq!(format_file_size(1500.0, &binary), "1.5 KiB");
        assert_eq!(format_file_size(1_048_576.0, &binary), "1.0 MiB");
    }

    #[test]
    fn test_small_values_are_bytes() {
        assert_eq!(format_file_size(512.0, &FileSizeOptions::default()), "512 B");
        assert_eq!(format_file_size(-999.0, &FileSizeOptions::default()), "-999 B");
        assert_eq!(format_file_size(0.0, &FileSizeOptions::default()), "0 B");
    }

    #[test]
    fn test_rounding_promotes_to_next_unit() {
        // 999 950 rounds to 1000.0 kB at one decimal place.
        assert_eq!(format_file_size(999_950.0, &FileSizeOptions::default()), "1.0 MB");
    }

    #[test]
    fn test_decimal_places() {
        let options = FileSizeOptions {
            dp: 3,
            ..FileSizeOptions::default()
        };
        assert_eq!(format_file_size(1_234_567.0, &options), "1.235 MB");
    }

    #[test]
    fn test_largest_unit_is_a_ceiling() {
        assert_eq!(format_file_size(1e27, &FileSizeOptions::default()), "1000.0 YB");
    }

    #[test]
    fn test_intl_compact() {
        let options = FileSizeOptions {
            use_intl: true,
            ..FileSizeOptions::default()
        };
        assert_eq!(format_file_size(512.0, &options), "512\u{a0}Б");
        assert_eq!(format_file_size(1500.0, &options), "1,5\u{a0}тыс.\u{a0}Б");
        assert_eq!(format_file_size(25_000_000.0, &options), "25\u{a0}млн\u{a0}Б");
    }

    #[test]
    fn test_intl_compact_rounds_into_next_scale() {
        let options = FileSizeOptions {
            use_intl: true,
            ..FileSizeOptions::default()
        };
        assert_eq!(format_file_size(999_999.0, &options), "1\u{a0}млн\u{a0}Б");
        assert_eq!(format_file_size(999_500.0, &options), "1\u{a0}млн\u{a0}Б");
        assert_eq!(format_file_size(999_499.0, &options), "999\u{a0}тыс.\u{a0}Б");
        assert_eq!(format_file_size(999.7, &options), "1\u{a0}тыс.\u{a0}Б");
        assert_eq!(format_file_size(9_960.0, &options), "10\u{a0}тыс.\u{a0}Б");
    }

    #[test]
    fn test_decimal_places_are_capped() {
        let options = FileSizeOptions {
            dp: u32::MAX,
            ..FileSizeOptions::default()
        };
        assert_eq!(
            format_file_size(1500.0, &options),
            format!("1.5{} kB", "0".repeat(19))
        );
    }

    #[test]
    fn test_non_finite_is_placeholder() {
        assert_eq!(format_file_size(f64::NAN, &FileSizeOptions::default()), "—");
    }
}
