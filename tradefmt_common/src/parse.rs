//! Parsing of user-typed numbers.
//!
//! Input comes from text fields: it may use a decimal comma, contain digit-group
//! spaces (including no-break spaces pasted from formatted output) or carry a
//! trailing unit. The cleaned text is read with prefix semantics, so `"1,5 %"`
//! parses as `1.5` and anything without a numeric prefix parses as `NaN`.

/// Values accepted wherever a number may arrive either parsed or as typed text.
pub trait IntoFloat {
    /// Converts the value to `f64`, `NaN` if it is not numeric.
    fn into_float(self) -> f64;
}

impl IntoFloat for f64 {
    fn into_float(self) -> f64 {
        self
    }
}

impl IntoFloat for &str {
    fn into_float(self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        parse_float_prefix(&clean_numeric(self))
    }
}

impl IntoFloat for &String {
    fn into_float(self) -> f64 {
        self.as_str().into_float()
    }
}

impl IntoFloat for String {
    fn into_float(self) -> f64 {
        self.as_str().into_float()
    }
}

impl<T: IntoFloat> IntoFloat for Option<T> {
    fn into_float(self) -> f64 {
        self.map_or(0.0, IntoFloat::into_float)
    }
}

/// Parses a number or numeric text.
///
/// Numbers pass through unchanged, empty or missing input yields `0` and
/// non-numeric text yields `NaN`; callers must check for `NaN` before display.
pub fn string_to_float(input: impl IntoFloat) -> f64 {
    input.into_float()
}

/// Normalizes typed text: the first `,` becomes `.`, whitespace and anything
/// outside printable ASCII is dropped.
pub(crate) fn clean_numeric(text: &str) -> String {
    text.replacen(',', ".", 1)
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(|c| (' '..='~').contains(c))
        .collect()
}

/// Reads the longest numeric prefix of `text`, `NaN` if there is none.
///
/// Accepts an optional sign, `Infinity`, digits with an optional fraction and an
/// optional exponent. Trailing garbage is ignored.
pub fn parse_float_prefix(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            end += 1;
            true
        }
        Some(b'+') => {
            end += 1;
            false
        }
        _ => false,
    };

    if text[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
