//! `ru-RU` number formatting.
//!
//! `NumberFormat` renders an `f64` the way the terminal's locale does: decimal
//! comma, digit groups of three separated by a no-break space, hyphen-minus for
//! negatives and a trailing `%` or currency symbol for the percent and currency
//! styles. Rounding is half-away-from-zero and is applied to the shortest decimal
//! representation of the value, so `1.005` rounds to `1.01` at two digits.
//!
//! Options are built with `NumberFormatOptions` and can be overlaid on top of each
//! other with [`NumberFormatOptions::merge`]; the last writer wins field by field.
use std::str::FromStr;

use lazy_static::lazy_static;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::symbol_for_code;

/// Locale tag every formatter in this crate renders for.
pub const LOCALE: &str = "ru-RU";
/// Placeholder rendered for invalid or missing input.
pub const PLACEHOLDER: &str = "—";
/// Marker appended to prices quoted in points (futures, indices).
pub const POINTS: &str = "пт.";
/// Digit group separator (no-break space).
pub const GROUP_SEPARATOR: char = '\u{a0}';

const DECIMAL_MARK: char = ',';
const NOT_A_NUMBER: &str = "не число";
const INFINITY: &str = "∞";
/// Upper bound on fraction digits; `rust_decimal` keeps at most 28.
pub(crate) const MAX_FRACTION_DIGITS: u32 = 20;

lazy_static! {
    /// Decimal separator of the locale, derived once from formatting `1.1`.
    pub static ref DECIMAL_SEPARATOR: String = decimal_separator();
}

/// Derives the locale decimal separator by formatting `1.1` and dropping the digits.
pub fn decimal_separator() -> String {
    NumberFormat::new(&NumberFormatOptions::decimal())
        .format(1.1)
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect()
}

/// Rendering style of a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberStyle {
    /// Plain decimal number.
    #[default]
    Decimal,
    /// Value multiplied by 100 with a trailing `%`.
    Percent,
    /// Value with a trailing currency symbol; needs `NumberFormatOptions::currency`.
    Currency,
}

/// When to render the sign of a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignDisplay {
    /// Only for negative values (negative zero included).
    #[default]
    Auto,
    /// Always, `+` for zero and positive values.
    Always,
    /// For non-zero values only.
    ExceptZero,
    /// Never.
    Never,
}

/// Partial formatting options. Unset fields fall back to the style defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFormatOptions {
    /// Rendering style.
    pub style: Option<NumberStyle>,
    /// ISO currency code used by the currency style.
    pub currency: Option<String>,
    /// Minimum number of fraction digits.
    pub minimum_fraction_digits: Option<u32>,
    /// Maximum number of fraction digits.
    pub maximum_fraction_digits: Option<u32>,
    /// Sign rendering policy.
    pub sign_display: Option<SignDisplay>,
    /// Whether to group integer digits.
    pub use_grouping: Option<bool>,
}

impl NumberFormatOptions {
    /// Options for the decimal style.
    pub fn decimal() -> Self {
        Self {
            style: Some(NumberStyle::Decimal),
            ..Self::default()
        }
    }

    /// Options for the percent style.
    pub fn percent() -> Self {
        Self {
            style: Some(NumberStyle::Percent),
            ..Self::default()
        }
    }

    /// Options for the currency style in the given ISO currency.
    pub fn currency(code: &str) -> Self {
        Self {
            style: Some(NumberStyle::Currency),
            currency: Some(code.to_string()),
            ..Self::default()
        }
    }

    /// Sets both fraction digit bounds.
    pub fn fraction_digits(mut self, min: u32, max: u32) -> Self {
        self.minimum_fraction_digits = Some(min);
        self.maximum_fraction_digits = Some(max);
        self
    }

    /// Fixes the number of fraction digits.
    pub fn precision(self, digits: u32) -> Self {
        self.fraction_digits(digits, digits)
    }

    /// Sets the minimum number of fraction digits.
    pub fn min_fraction_digits(mut self, min: u32) -> Self {
        self.minimum_fraction_digits = Some(min);
        self
    }

    /// Sets the maximum number of fraction digits.
    pub fn max_fraction_digits(mut self, max: u32) -> Self {
        self.maximum_fraction_digits = Some(max);
        self
    }

    /// Sets the sign rendering policy.
    pub fn sign_display(mut self, sign_display: SignDisplay) -> Self {
        self.sign_display = Some(sign_display);
        self
    }

    /// Returns `self` with every field set in `overlay` replaced by the overlay's value.
    pub fn merge(&self, overlay: &NumberFormatOptions) -> NumberFormatOptions {
        NumberFormatOptions {
            style: overlay.style.or(self.style),
            currency: overlay.currency.clone().or_else(|| self.currency.clone()),
            minimum_fraction_digits: overlay
                .minimum_fraction_digits
                .or(self.minimum_fraction_digits),
            maximum_fraction_digits: overlay
                .maximum_fraction_digits
                .or(self.maximum_fraction_digits),
            sign_display: overlay.sign_display.or(self.sign_display),
            use_grouping: overlay.use_grouping.or(self.use_grouping),
        }
    }
}

/// Resolved number formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    style: NumberStyle,
    symbol: String,
    min_fraction: u32,
    max_fraction: u32,
    sign_display: SignDisplay,
    grouping: bool,
}

impl NumberFormat {
    /// Resolves `options` against the style defaults.
    ///
    /// Defaults: decimal 0..=3 fraction digits, percent 0..=0, currency 2..=2.
    /// A currency style without a currency code falls back to decimal. When only
    /// one bound is given the other one is widened to stay consistent with it.
    pub fn new(options: &NumberFormatOptions) -> Self {
        let (style, symbol) = match (options.style.unwrap_or_default(), &options.currency) {
            (NumberStyle::Currency, Some(code)) => {
                (NumberStyle::Currency, symbol_for_code(code).to_string())
            }
            (NumberStyle::Currency, None) => (NumberStyle::Decimal, String::new()),
            (style, _) => (style, String::new()),
        };

        let (default_min, default_max) = match style {
            NumberStyle::Decimal => (0, 3),
            NumberStyle::Percent => (0, 0),
            NumberStyle::Currency => (2, 2),
        };

        let (min_fraction, max_fraction) = match (
            options.minimum_fraction_digits,
            options.maximum_fraction_digits,
        ) {
            (None, None) => (default_min, default_max),
            (Some(min), None) => (min, default_max.max(min)),
            (None, Some(max)) => (default_min.min(max), max),
            (Some(min), Some(max)) => (min, max.max(min)),
        };

        Self {
            style,
            symbol,
            min_fraction: min_fraction.min(MAX_FRACTION_DIGITS),
            max_fraction: max_fraction.min(MAX_FRACTION_DIGITS),
            sign_display: options.sign_display.unwrap_or_default(),
            grouping: options.use_grouping.unwrap_or(true),
        }
    }

    /// Formats a single value.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return NOT_A_NUMBER.to_string();
        }

        let negative = value.is_sign_negative();
        let body = if value.is_infinite() {
            INFINITY.to_string()
        } else {
            self.digits(value.abs())
        };
        let is_zero = body.chars().all(|c| !c.is_ascii_digit() || c == '0');

        let sign = match self.sign_display {
            SignDisplay::Auto => negative.then_some('-'),
            SignDisplay::Always => Some(if negative { '-' } else { '+' }),
            SignDisplay::ExceptZero if is_zero => None,
            SignDisplay::ExceptZero => Some(if negative { '-' } else { '+' }),
            SignDisplay::Never => None,
        };

        let mut out = String::with_capacity(body.len() + 4);
        if let Some(sign) = sign {
            out.push(sign);
        }
        out.push_str(&body);

        match self.style {
            NumberStyle::Decimal => {}
            NumberStyle::Percent => {
                out.push(GROUP_SEPARATOR);
                out.push('%');
            }
            NumberStyle::Currency => {
                out.push(GROUP_SEPARATOR);
                out.push_str(&self.symbol);
            }
        }
        out
    }

    fn digits(&self, abs: f64) -> String {
        let percent = self.style == NumberStyle::Percent;
        let scaled = to_decimal(abs).and_then(|d| {
            if percent {
                d.checked_mul(Decimal::from(100))
            } else {
                Some(d)
            }
        });

        let (int, frac) = match scaled {
            Some(d) => split_digits(
                &d.round_dp_with_strategy(self.max_fraction, RoundingStrategy::MidpointAwayFromZero)
                    .to_string(),
            ),
            None => {
                let v = if percent { abs * 100.0 } else { abs };
                split_digits(&format!("{:.*}", self.max_fraction as usize, v))
            }
        };

        let frac = trim_fraction(frac, self.min_fraction);
        let int = if self.grouping { group_digits(&int) } else { int };

        if frac.is_empty() {
            int
        } else {
            format!("{int}{DECIMAL_MARK}{frac}")
        }
    }
}

/// Shortest round-trip decimal representation of `value`, if it fits a `Decimal`.
pub(crate) fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_str(&value.to_string()).ok()
}

/// Number of fraction digits in the shortest representation of `value`.
pub(crate) fn fraction_digits(value: f64) -> u32 {
    value
        .to_string()
        .split_once('.')
        .map(|(_, frac)| frac.len() as u32)
        .unwrap_or(0)
}

/// Renders `value` with exactly `dp` decimals and a `.` separator, rounding the
/// exact binary value half away from zero.
pub(crate) fn to_fixed(value: f64, dp: u32) -> String {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return format!("{:.*}", dp as usize, value);
    };
    let rounded = exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let (int, mut frac) = split_digits(&rounded.abs().to_string());
    frac.truncate(dp as usize);
    while frac.len() < dp as usize {
        frac.push('0');
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{int}")
    } else {
        format!("{sign}{int}.{frac}")
    }
}

/// Plain text of a number, the way a script runtime would print it.
pub(crate) fn number_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn split_digits(text: &str) -> (String, String) {
    let text = text.trim_start_matches('-');
    match text.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.to_string()),
        None => (text.to_string(), String::new()),
    }
}

fn trim_fraction(mut frac: String, min: u32) -> String {
    let min = min as usize;
    while frac.len() > min && frac.ends_with('0') {
        frac.pop();
    }
    while frac.len() < min {
        frac.push('0');
    }
    frac
}

fn group_digits(int: &str) -> String {
    let len = int.len();
    let mut out = String::with_capacity(len + len / 3 * 2);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decimal(min: u32, max: u32) -> NumberFormat {
        NumberFormat::new(&NumberFormatOptions::decimal().fraction_digits(min, max))
    }

    #[test]
    fn test_decimal_separator_is_comma() {
        assert_eq!(decimal_separator(), ",");
        assert_eq!(DECIMAL_SEPARATOR.as_str(), ",");
    }

    #[test]
    fn test_grouping_uses_no_break_space() {
        assert_eq!(decimal(2, 2).format(1234567.891), "1\u{a0}234\u{a0}567,89");
        assert_eq!(decimal(0, 0).format(999.0), "999");
        assert_eq!(decimal(0, 0).format(1000.0), "1\u{a0}000");
    }

    #[test]
    fn test_rounding_is_half_away_from_zero_on_shortest_repr() {
        assert_eq!(decimal(2, 2).format(1.005), "1,01");
        assert_eq!(decimal(2, 2).format(-1.005), "-1,01");
        assert_eq!(decimal(0, 0).format(2.5), "3");
    }

    #[test]
    fn test_default_decimal_trims_trailing_zeros() {
        let format = NumberFormat::new(&NumberFormatOptions::decimal());
        assert_eq!(format.format(1.5), "1,5");
        assert_eq!(format.format(1.23456), "1,235");
        assert_eq!(format.format(10.0), "10");
    }

    #[test]
    fn test_percent_scales_in_decimal() {
        let format = NumberFormat::new(&NumberFormatOptions::percent().precision(2));
        assert_eq!(format.format(0.1234), "12,34\u{a0}%");
        assert_eq!(format.format(0.07), "7,00\u{a0}%");
    }

    #[test]
    fn test_sign_display() {
        let always = NumberFormat::new(
            &NumberFormatOptions::decimal()
                .precision(2)
                .sign_display(SignDisplay::Always),
        );
        assert_eq!(always.format(1.0), "+1,00");
        assert_eq!(always.format(0.0), "+0,00");
        assert_eq!(always.format(-1.0), "-1,00");

        let except_zero = NumberFormat::new(
            &NumberFormatOptions::decimal().sign_display(SignDisplay::ExceptZero),
        );
        assert_eq!(except_zero.format(0.0001), "0");
        assert_eq!(except_zero.format(2.0), "+2");
    }

    #[test]
    fn test_currency_style() {
        let format = NumberFormat::new(&NumberFormatOptions::currency("USD"));
        assert_eq!(format.format(1234.5), "1\u{a0}234,50\u{a0}$");

        let fallback = NumberFormat::new(&NumberFormatOptions {
            style: Some(NumberStyle::Currency),
            ..NumberFormatOptions::default()
        });
        assert_eq!(fallback.format(1.5), "1,5");
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = NumberFormatOptions::decimal().fraction_digits(2, 2);
        let overlay = NumberFormatOptions::default().max_fraction_digits(4);
        let merged = base.merge(&overlay);

        assert_eq!(merged.minimum_fraction_digits, Some(2));
        assert_eq!(merged.maximum_fraction_digits, Some(4));
        assert_eq!(merged.style, Some(NumberStyle::Decimal));
    }

    #[test]
    fn test_single_bound_widens_the_other() {
        let min_only = NumberFormat::new(&NumberFormatOptions::decimal().min_fraction_digits(5));
        assert_eq!(min_only.format(1.0), "1,00000");

        let max_only = NumberFormat::new(
            &NumberFormatOptions::currency("RUB").max_fraction_digits(0),
        );
        assert_eq!(max_only.format(10.4), "10\u{a0}₽");
    }

    #[test]
    fn test_non_finite_values() {
        let format = decimal(0, 2);
        assert_eq!(format.format(f64::NAN), "не число");
        assert_eq!(format.format(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        assert_eq!(to_fixed(1.5, 1), "1.5");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(-2.0, 0), "-2");
        assert_eq!(to_fixed(976.5625, 1), "976.6");
    }

    #[test]
    fn test_fraction_digits_never_use_exponent() {
        assert_eq!(fraction_digits(0.01), 2);
        assert_eq!(fraction_digits(0.0000001), 7);
        assert_eq!(fraction_digits(5.0), 0);
    }

    #[test]
    fn test_number_text() {
        assert_eq!(number_text(512.0), "512");
        assert_eq!(number_text(-0.0), "0");
        assert_eq!(number_text(1.25), "1.25");
    }
}
