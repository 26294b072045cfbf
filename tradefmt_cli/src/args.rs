//! Command-line arguments for the formatter.
//!
//! This module defines the CLI interface using `clap`. Numeric arguments are read
//! the way the terminal reads typed input, so `1,5` and `1 500,25` are accepted.
use clap::{Parser, Subcommand, ValueEnum};
use tradefmt_common::{InstrumentType, string_to_float};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to a JSON file with the instrument descriptor.
    /// Flags below override the fields read from it.
    #[clap(long, global = true)]
    pub instrument: Option<String>,

    /// Instrument type.
    #[clap(long = "type", value_enum, global = true)]
    pub instrument_type: Option<InstrumentType>,

    /// Settlement currency code (e.g. `USD`, `RUB`, `N/A`).
    #[clap(long, global = true)]
    pub currency: Option<String>,

    /// Ticker symbol.
    #[clap(long, global = true)]
    pub symbol: Option<String>,

    /// Price tick size.
    #[clap(long, global = true, allow_hyphen_values = true, value_parser = parse_number)]
    pub min_price_increment: Option<f64>,

    /// Quantity step.
    #[clap(long, global = true, allow_hyphen_values = true, value_parser = parse_number)]
    pub min_quantity_increment: Option<f64>,

    /// Quote asset of a crypto pair.
    #[clap(long, global = true)]
    pub quote_asset: Option<String>,

    /// Formatter to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available formatters.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format a price at the instrument's precision.
    Price {
        /// Price value.
        #[clap(allow_hyphen_values = true, value_parser = parse_number)]
        value: f64,
        /// Always show the sign.
        #[clap(long)]
        sign: bool,
        /// Leave the currency marker out.
        #[clap(long)]
        without_currency: bool,
        /// Derive the precision from the price instead of the tick size.
        #[clap(long)]
        from_price: bool,
    },

    /// Format a broker commission.
    Commission {
        /// Commission value.
        #[clap(allow_hyphen_values = true, value_parser = parse_number)]
        value: f64,
    },

    /// Format a monetary amount.
    Amount {
        /// Amount value.
        #[clap(allow_hyphen_values = true, value_parser = parse_number)]
        value: f64,
        /// Amount currency; the instrument currency when omitted.
        amount_currency: Option<String>,
    },

    /// Format a quantity at the instrument's quantity step.
    Quantity {
        /// Quantity value.
        #[clap(allow_hyphen_values = true, value_parser = parse_number)]
        value: f64,
    },

    /// Format a price change with an explicit sign.
    Change {
        /// Change value; a ratio with `--relative`.
        #[clap(allow_hyphen_values = true, value_parser = parse_number)]
        value: f64,
        /// Treat the value as a ratio and render a percentage.
        #[clap(long)]
        relative: bool,
    },

    /// Format a ratio as a percentage.
    Percent {
        /// Ratio value (`0.5` is 50 %).
        #[clap(allow_hyphen_values = true, value_parser = parse_number)]
        value: f64,
    },

    /// Format a byte count.
    FileSize {
        /// Number of bytes.
        #[clap(allow_hyphen_values = true, value_parser = parse_number)]
        bytes: f64,
        /// Scale by 1024 (`KiB`) instead of 1000 (`kB`).
        #[clap(long)]
        binary: bool,
        /// Decimal places.
        #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(0..=20))]
        dp: u32,
        /// Use the locale's compact notation.
        #[clap(long)]
        intl: bool,
    },

    /// Parse a distance such as `2 %` or `3 +` and print it back normalized.
    Distance {
        /// Distance text.
        #[clap(allow_hyphen_values = true)]
        text: String,
        /// Print the parsed value as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Fix text typed in the wrong keyboard layout.
    Translit {
        /// Text to convert.
        text: String,
        /// Conversion direction.
        #[clap(long, value_enum, default_value_t = Direction::ToLatin)]
        direction: Direction,
    },

    /// Print the US market session.
    Session {
        /// RFC 3339 instant; now when omitted.
        #[clap(long)]
        at: Option<String>,
        /// Path to a JSON session table.
        #[clap(long)]
        table: Option<String>,
    },

    /// Format a date given as epoch milliseconds or ISO-8601 text.
    Date {
        /// Date value; now when omitted.
        date: Option<String>,
        /// Render in this UTC offset, in minutes, instead of the host time zone.
        #[clap(long, allow_hyphen_values = true)]
        utc_offset: Option<i32>,
        /// Render the date only (`dd.MM.yyyy`).
        #[clap(long)]
        date_only: bool,
    },

    /// Print the Russian name of a currency.
    Currency {
        /// Currency code.
        code: Option<String>,
    },

    /// Render a portfolio table from position updates.
    Portfolio {
        /// Path to a JSON array of position updates, applied in order.
        #[clap(long)]
        positions: String,
        /// Path to a JSON settings document.
        #[clap(long)]
        settings: Option<String>,
        /// Path to a JSON object of last prices keyed by symbol.
        #[clap(long)]
        prices: Option<String>,
    },
}

/// Keyboard layout conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// ЙЦУКЕН to QWERTY.
    ToLatin,
    /// QWERTY to ЙЦУКЕН.
    ToCyrillic,
}

/// Reads a number the way typed input is read, rejecting text with no numeric prefix.
fn parse_number(raw: &str) -> Result<f64, String> {
    let value = string_to_float(raw);
    if value.is_nan() {
        Err(format!("`{}` is not a number", raw))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1,5"), Ok(1.5));
        assert_eq!(parse_number("-2"), Ok(-2.0));
        assert!(parse_number("abc").is_err());
    }

    #[test]
    fn test_global_instrument_flags() {
        let args = Args::parse_from([
            "tradefmt",
            "--type",
            "stock",
            "--currency",
            "USD",
            "--min-price-increment",
            "0,01",
            "price",
            "-12,5",
        ]);

        assert_eq!(args.instrument_type, Some(InstrumentType::Stock));
        assert_eq!(args.min_price_increment, Some(0.01));
        match args.command {
            Command::Price { value, sign, .. } => {
                assert_eq!(value, -12.5);
                assert!(!sign);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_file_size_decimal_places_range() {
        let args = Args::parse_from(["tradefmt", "file-size", "1500", "--dp", "20"]);
        match args.command {
            Command::FileSize { dp, .. } => assert_eq!(dp, 20),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Args::try_parse_from(["tradefmt", "file-size", "1500", "--dp", "21"]).is_err());
        assert!(
            Args::try_parse_from(["tradefmt", "file-size", "1500", "--dp", "4000000000"]).is_err()
        );
    }

    #[test]
    fn test_translit_direction() {
        let args = Args::parse_from(["tradefmt", "translit", "sber", "--direction", "to-cyrillic"]);
        match args.command {
            Command::Translit { direction, .. } => assert_eq!(direction, Direction::ToCyrillic),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
