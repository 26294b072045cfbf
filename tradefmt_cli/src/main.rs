//! tradefmt — renders trading values the way a `ru-RU` trading terminal shows them.
//!
//! Each subcommand runs one formatter from `tradefmt_common` and prints the result
//! to stdout. The instrument the value belongs to is described either by a JSON
//! file or by flags.
//!
//! Usage example (CLI):
//! ```bash
//! tradefmt --type stock --currency USD --min-price-increment 0.01 price 1234,5
//! tradefmt file-size 1500 --binary
//! tradefmt portfolio --positions ./positions.json --prices ./prices.json
//! ```
//!
//! Diagnostics go to stderr through `env_logger`; set `RUST_LOG=debug` for details.
#![warn(missing_docs)]
mod args;
mod model;

use crate::args::{Args, Command, Direction};
use crate::model::loader::{
    load_instrument, load_positions, load_prices, load_session_table, load_settings,
};
use crate::model::table::render_table;
use chrono::{DateTime, Utc};
use clap::Parser;
use log::{debug, info};
use tradefmt_common::date::{DateInput, DateTimeOptions};
use tradefmt_common::file_size::FileSizeOptions;
use tradefmt_common::locale::SignDisplay;
use tradefmt_common::portfolio::PortfolioBook;
use tradefmt_common::session::{MarketSession, is_dst_at};
use tradefmt_common::{
    FormatError, Instrument, NumberFormatOptions, Result, currency_name, cyrillic_to_latin,
    distance_to_string, format_absolute_change, format_amount, format_commission,
    format_date_with_options, format_file_size, format_percentage, format_price,
    format_price_without_currency, format_quantity, format_relative_change, latin_to_cyrillic,
    parse_distance,
};

fn main() -> Result<(), FormatError> {
    init_logger();
    let args = Args::parse();
    let instrument = load_instrument(&args)?;

    for line in run(args.command, instrument.as_ref())? {
        println!("{}", line);
    }
    Ok(())
}

/// Runs one subcommand and returns the lines to print.
fn run(command: Command, instrument: Option<&Instrument>) -> Result<Vec<String>> {
    let line = match command {
        Command::Price {
            value,
            sign,
            without_currency,
            from_price,
        } => {
            if without_currency {
                format_price_without_currency(Some(value), instrument, from_price)
            } else {
                let mut overlay = NumberFormatOptions::default();
                if sign {
                    overlay = overlay.sign_display(SignDisplay::Always);
                }
                format_price(value, instrument, &overlay)
            }
        }
        Command::Commission { value } => {
            format_commission(value, instrument, &NumberFormatOptions::default())
        }
        Command::Amount {
            value,
            amount_currency,
        } => {
            let currency = amount_currency
                .as_deref()
                .or_else(|| instrument.and_then(Instrument::currency_code));
            format_amount(value, currency, instrument)
        }
        Command::Quantity { value } => format_quantity(value, instrument),
        Command::Change { value, relative } => {
            if relative {
                format_relative_change(value)
            } else {
                format_absolute_change(value, instrument)
            }
        }
        Command::Percent { value } => format_percentage(value),
        Command::FileSize {
            bytes,
            binary,
            dp,
            intl,
        } => format_file_size(
            bytes,
            &FileSizeOptions {
                si: !binary,
                dp,
                use_intl: intl,
            },
        ),
        Command::Distance { text, json } => {
            let distance = parse_distance(&text);
            debug!("Parsed distance: {:?}", distance);
            if json {
                serde_json::to_string(&distance)?
            } else {
                distance_to_string(&distance)
            }
        }
        Command::Translit { text, direction } => match direction {
            Direction::ToLatin => cyrillic_to_latin(&text),
            Direction::ToCyrillic => latin_to_cyrillic(&text),
        },
        Command::Session { at, table } => {
            let table = load_session_table(table.as_deref())?;
            let now = match at {
                Some(raw) => DateTime::parse_from_rfc3339(raw.trim())
                    .map_err(|e| FormatError::Format(format!("Invalid instant {}: {}", raw, e)))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            let summer = is_dst_at(&now);
            info!("Session at {} (summer time: {})", now, summer);
            MarketSession::at(now, summer, &table).to_string()
        }
        Command::Date {
            date,
            utc_offset,
            date_only,
        } => {
            let mut options = if date_only {
                DateTimeOptions::default()
            } else {
                DateTimeOptions::date_time()
            };
            options.utc_offset_minutes = utc_offset;

            let now = Utc::now();
            let input = match date.as_deref().map(str::trim) {
                None => DateInput::from(now),
                Some(text) => match text.parse::<i64>() {
                    Ok(millis) => DateInput::Millis(millis),
                    Err(_) => DateInput::Text(text),
                },
            };
            format_date_with_options(input, &options)
        }
        Command::Currency { code } => currency_name(code.as_deref()),
        Command::Portfolio {
            positions,
            settings,
            prices,
        } => {
            let settings = load_settings(settings.as_deref())?;
            let prices = load_prices(prices.as_deref())?;
            let mut book = PortfolioBook::new();
            let mut changes = 0;
            for position in load_positions(&positions)? {
                if book.apply(position) {
                    changes += 1;
                }
            }
            info!("Applied {} changes, {} positions held", changes, book.len());
            return Ok(render_table(&book, &settings, &prices));
        }
    };

    Ok(vec![line])
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
