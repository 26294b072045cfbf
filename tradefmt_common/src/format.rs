//! Display formatters for prices, amounts, changes and quantities.
//!
//! Every formatter returns [`PLACEHOLDER`] instead of failing: a `NaN` value, a
//! missing instrument or an instrument without a currency all render as `—`.
use log::trace;

use crate::currency::{NOT_AVAILABLE, price_currency_symbol};
use crate::instrument::{CurrencyClass, Instrument, InstrumentType, PriceClass};
use crate::locale::{
    DECIMAL_SEPARATOR, NumberFormat, NumberFormatOptions, PLACEHOLDER, POINTS, SignDisplay,
    number_text,
};
use crate::precision::{get_instrument_precision, get_instrument_quantity_precision};

fn placeholder(what: &str) -> String {
    trace!("{} is not displayable, rendering placeholder", what);
    PLACEHOLDER.to_string()
}

fn render(value: f64, options: &NumberFormatOptions) -> String {
    NumberFormat::new(options).format(value)
}

/// Formats the price of `instrument` at the precision of its tick size.
///
/// Futures and indices are rendered in points, known currencies get their
/// locale symbol, other currencies get their code appended (nothing for `N/A`).
/// `overlay` is merged over the defaults of the two currency branches.
pub fn format_price(
    price: f64,
    instrument: Option<&Instrument>,
    overlay: &NumberFormatOptions,
) -> String {
    let Some(instrument) = instrument else {
        return placeholder("price without instrument");
    };
    if price.is_nan() {
        return placeholder("price");
    }
    let Some(class) = instrument.price_class() else {
        return placeholder("price without currency");
    };

    let precision = get_instrument_precision(Some(instrument), price, false);
    let base = NumberFormatOptions::decimal().precision(precision);

    match class {
        PriceClass::Points => format!("{} {}", render(price, &base), POINTS),
        PriceClass::Priced(CurrencyClass::Unlisted(NOT_AVAILABLE)) => {
            render(price, &base.merge(overlay))
        }
        PriceClass::Priced(CurrencyClass::Unlisted(code)) => {
            format!("{} {}", render(price, &base.merge(overlay)), code)
        }
        PriceClass::Priced(CurrencyClass::Listed(_)) => format!(
            "{} {}",
            render(price, &base.merge(overlay)),
            price_currency_symbol(Some(instrument))
        ),
    }
}

/// Formats a price without any currency marker.
///
/// Without an instrument the raw value is printed with the locale decimal
/// separator (empty for `0`, `NaN` or a missing value). With an instrument the
/// value is rendered at the instrument's precision, derived from the price
/// itself when `derive_precision_from_price` is set.
pub fn format_price_without_currency(
    price: Option<f64>,
    instrument: Option<&Instrument>,
    derive_precision_from_price: bool,
) -> String {
    let Some(instrument) = instrument else {
        return match price {
            Some(value) if value != 0.0 && !value.is_nan() => {
                number_text(value).replacen('.', DECIMAL_SEPARATOR.as_str(), 1)
            }
            _ => String::new(),
        };
    };

    let Some(price) = price.filter(|value| !value.is_nan()) else {
        return placeholder("price");
    };

    let precision = get_instrument_precision(Some(instrument), price, derive_precision_from_price);
    render(price, &NumberFormatOptions::decimal().precision(precision))
}

/// Formats a broker commission with two or three fraction digits.
pub fn format_commission(
    commission: f64,
    instrument: Option<&Instrument>,
    overlay: &NumberFormatOptions,
) -> String {
    let Some(instrument) = instrument else {
        return placeholder("commission without instrument");
    };
    if commission.is_nan() {
        return placeholder("commission");
    }

    match instrument.currency_class() {
        None => placeholder("commission without currency"),
        Some(CurrencyClass::Unlisted(code)) => {
            let options = NumberFormatOptions::decimal()
                .fraction_digits(2, 3)
                .merge(overlay);
            format!("{} {}", render(commission, &options), code)
        }
        Some(CurrencyClass::Listed(currency)) => render(
            commission,
            &NumberFormatOptions::currency(currency.code()).fraction_digits(2, 3),
        ),
    }
}

/// Formats a monetary amount in `currency`.
///
/// Futures render in points. When the instrument's currency is not a known one
/// (or there is no instrument) the amount is followed by the instrument's
/// currency code, falling back to `currency`. Otherwise the amount is rendered
/// in the currency style of `currency`, dropping a zero fraction.
pub fn format_amount(
    amount: f64,
    currency: Option<&str>,
    instrument: Option<&Instrument>,
) -> String {
    let Some(currency) = currency.filter(|code| !code.is_empty()) else {
        return placeholder("amount without currency");
    };
    if amount.is_nan() {
        return placeholder("amount");
    }

    if instrument.is_some_and(|instrument| instrument.is(InstrumentType::Future)) {
        return format!("{} {}", render(amount, &NumberFormatOptions::decimal()), POINTS);
    }

    let instrument_currency = instrument.and_then(Instrument::currency_code);
    match instrument_currency.map(CurrencyClass::of) {
        Some(CurrencyClass::Listed(_)) => render(
            amount,
            &NumberFormatOptions::currency(currency).min_fraction_digits(0),
        ),
        _ => format!(
            "{} {}",
            render(amount, &NumberFormatOptions::decimal().min_fraction_digits(0)),
            instrument_currency.unwrap_or(currency)
        ),
    }
}

/// Formats an absolute price change with two fraction digits and an explicit sign.
pub fn format_absolute_change(change: f64, instrument: Option<&Instrument>) -> String {
    if instrument.is_none() || change.is_nan() {
        return placeholder("absolute change");
    }

    render(
        change,
        &NumberFormatOptions::decimal()
            .precision(2)
            .sign_display(SignDisplay::Always),
    )
}

/// Formats a relative change (`0.05` is `+5,00 %`) with an explicit sign.
pub fn format_relative_change(change: f64) -> String {
    if change.is_nan() {
        return placeholder("relative change");
    }

    render(
        change,
        &NumberFormatOptions::percent()
            .precision(2)
            .sign_display(SignDisplay::Always),
    )
}

/// Formats a ratio as a percentage with up to three fraction digits.
pub fn format_percentage(value: f64) -> String {
    if value.is_nan() {
        return placeholder("percentage");
    }

    render(value, &NumberFormatOptions::percent().max_fraction_digits(3))
}

/// Formats a quantity at the precision of the instrument's quantity step.
pub fn format_quantity(quantity: f64, instrument: Option<&Instrument>) -> String {
    if quantity.is_nan() {
        return placeholder("quantity");
    }

    let precision = get_instrument_quantity_precision(instrument);
    render(quantity, &NumberFormatOptions::decimal().precision(precision))
}
