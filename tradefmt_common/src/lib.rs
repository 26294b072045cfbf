//!
//! `ru-RU` display formatting for a trading terminal.
//!
//! This crate aggregates:
//! - `error` — unified error type `FormatError` for the fallible edges.
//! - `result` — handy `Result<T, FormatError>` alias.
//! - `locale` — the `ru-RU` number engine (grouping, decimal comma, rounding).
//! - `parse` — lenient numeric parsing of user-typed text.
//! - `currency` — known currencies, their symbols and Russian names.
//! - `instrument` — instrument metadata and the price classes formatters dispatch on.
//! - `precision` — display precision derived from tick sizes.
//! - `format` — price, commission, amount, change, percentage and quantity formatters.
//! - `date` — date and time rendering.
//! - `file_size` — human-readable byte counts.
//! - `distance` — offsets with a unit (`%`, `+`) as typed in order settings.
//! - `translit` — keyboard-layout transliteration.
//! - `session` — US market session of an instant.
//! - `portfolio` — portfolio table model.
#![warn(missing_docs)]
pub mod currency;
pub mod date;
pub mod distance;
pub mod error;
pub mod file_size;
pub mod format;
pub mod instrument;
pub mod locale;
pub mod parse;
pub mod portfolio;
pub mod precision;
pub mod result;
pub mod session;
pub mod translit;

pub use currency::{Currency, currency_name, price_currency_symbol};
pub use date::{format_date, format_date_with_options};
pub use distance::{Distance, DistanceUnit, distance_to_string, parse_distance};
pub use error::FormatError;
pub use file_size::{FileSizeOptions, format_file_size};
pub use format::{
    format_absolute_change, format_amount, format_commission, format_percentage, format_price,
    format_price_without_currency, format_quantity, format_relative_change,
};
pub use instrument::{Instrument, InstrumentType};
pub use locale::{DECIMAL_SEPARATOR, NumberFormatOptions};
pub use parse::string_to_float;
pub use precision::{
    get_instrument_min_price_increment, get_instrument_precision,
    get_instrument_quantity_precision,
};
pub use result::Result;
pub use session::{MarketSession, get_us_market_session, is_dst};
pub use translit::{cyrillic_to_latin, latin_to_cyrillic};
