//! Display precision derived from instrument tick sizes.
use crate::instrument::{Instrument, InstrumentType};
use crate::locale::fraction_digits;
use crate::parse::IntoFloat;

/// Tick size used when an instrument has none and the price is below one.
pub const SMALL_PRICE_INCREMENT: f64 = 0.0001;
/// Tick size used when an instrument has none and the price is one or more.
pub const DEFAULT_PRICE_INCREMENT: f64 = 0.01;
/// Fixed precision of currency pairs.
pub const CURRENCY_PRECISION: u32 = 4;
/// Precision of an exactly zero price.
pub const ZERO_PRICE_PRECISION: u32 = 2;

/// Price argument of the precision helpers: a number, typed text or nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceInput<'a> {
    /// No price known.
    Missing,
    /// Parsed price.
    Number(f64),
    /// Price as typed.
    Text(&'a str),
}

impl PriceInput<'_> {
    /// Numeric value; missing or empty input is `0`.
    pub fn value(&self) -> f64 {
        match *self {
            PriceInput::Missing => 0.0,
            PriceInput::Number(value) => value,
            PriceInput::Text(text) => text.into_float(),
        }
    }

    /// `true` only for the number zero and the literal text `"0"`.
    pub fn is_exact_zero(&self) -> bool {
        match *self {
            PriceInput::Missing => false,
            PriceInput::Number(value) => value == 0.0,
            PriceInput::Text(text) => text == "0",
        }
    }
}

impl From<f64> for PriceInput<'_> {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

impl<'a> From<&'a str> for PriceInput<'a> {
    fn from(text: &'a str) -> Self {
        PriceInput::Text(text)
    }
}

impl From<Option<f64>> for PriceInput<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(PriceInput::Missing, PriceInput::Number)
    }
}

/// Price tick size of `instrument`, derived from the price magnitude when the
/// instrument has none (or when `always_use_price` is set). `0` without instrument.
pub fn get_instrument_min_price_increment<'a>(
    instrument: Option<&Instrument>,
    price: impl Into<PriceInput<'a>>,
    always_use_price: bool,
) -> f64 {
    let Some(instrument) = instrument else {
        return 0.0;
    };

    match instrument.min_price_increment {
        Some(increment) if increment != 0.0 && !always_use_price => increment,
        _ => {
            if price.into().value() < 1.0 {
                SMALL_PRICE_INCREMENT
            } else {
                DEFAULT_PRICE_INCREMENT
            }
        }
    }
}

/// Number of fraction digits to show for a price of `instrument`.
///
/// `0` without instrument, `4` for currency pairs, `2` for a zero price,
/// otherwise the number of fraction digits of the tick size.
pub fn get_instrument_precision<'a>(
    instrument: Option<&Instrument>,
    price: impl Into<PriceInput<'a>>,
    always_use_price: bool,
) -> u32 {
    let Some(instrument) = instrument else {
        return 0;
    };

    if instrument.is(InstrumentType::Currency) {
        return CURRENCY_PRECISION;
    }

    let price = price.into();
    if price.is_exact_zero() {
        return ZERO_PRICE_PRECISION;
    }

    fraction_digits(get_instrument_min_price_increment(
        Some(instrument),
        price,
        always_use_price,
    ))
}

/// Number of fraction digits of the quantity step, `0` when there is none.
pub fn get_instrument_quantity_precision(instrument: Option<&Instrument>) -> u32 {
    instrument
        .and_then(|instrument| instrument.min_quantity_increment)
        .map_or(0, fraction_digits)
}
