//! Loading of the JSON documents the formatter works on.
//!
//! Paths come straight from the command line and may be wrapped in quotes.
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tradefmt_common::portfolio::{PortfolioSettings, Position};
use tradefmt_common::session::SessionTable;
use tradefmt_common::{FormatError, Instrument, Result};

use crate::args::Args;

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
pub fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}

fn open(raw: &str) -> Result<BufReader<File>> {
    let path = normalize_path(raw);
    if !is_file_exist(&path) {
        return Err(FormatError::Format(format!(
            "File not found: {}",
            path.display()
        )));
    }
    debug!("Reading {}", path.display());
    Ok(BufReader::new(File::open(path)?))
}

/// Builds the instrument from `--instrument` and the instrument flags.
///
/// Returns `None` when neither is given.
pub fn load_instrument(args: &Args) -> Result<Option<Instrument>> {
    let mut instrument = match &args.instrument {
        Some(path) => Some(Instrument::from_reader(open(path)?)?),
        None => None,
    };

    let has_flags = args.instrument_type.is_some()
        || args.currency.is_some()
        || args.symbol.is_some()
        || args.min_price_increment.is_some()
        || args.min_quantity_increment.is_some()
        || args.quote_asset.is_some();
    if has_flags {
        let target = instrument.get_or_insert_with(Instrument::default);
        if let Some(instrument_type) = args.instrument_type {
            target.instrument_type = Some(instrument_type);
        }
        if let Some(currency) = &args.currency {
            target.currency = Some(currency.clone());
        }
        if let Some(symbol) = &args.symbol {
            target.symbol = Some(symbol.clone());
        }
        if let Some(increment) = args.min_price_increment {
            target.min_price_increment = Some(increment);
        }
        if let Some(increment) = args.min_quantity_increment {
            target.min_quantity_increment = Some(increment);
        }
        if let Some(asset) = &args.quote_asset {
            target.quote_crypto_asset = Some(asset.clone());
        }
    }

    if let Some(instrument) = &instrument {
        validate(instrument)?;
        info!(
            "Instrument: {} {:?} {}",
            instrument.symbol.as_deref().unwrap_or("-"),
            instrument.instrument_type,
            instrument.currency.as_deref().unwrap_or("-")
        );
    }
    Ok(instrument)
}

fn validate(instrument: &Instrument) -> Result<()> {
    let increments = [
        ("min price increment", instrument.min_price_increment),
        ("min quantity increment", instrument.min_quantity_increment),
    ];
    for (name, increment) in increments {
        match increment {
            Some(value) if !value.is_finite() || value < 0.0 => {
                return Err(FormatError::InvalidInstrument(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Reads position updates from a JSON array.
pub fn load_positions(raw: &str) -> Result<Vec<Position>> {
    let positions: Vec<Position> = serde_json::from_reader(open(raw)?)?;
    info!("Loaded {} position updates", positions.len());
    Ok(positions)
}

/// Reads last prices keyed by symbol; empty without a path.
pub fn load_prices(raw: Option<&str>) -> Result<HashMap<String, f64>> {
    match raw {
        Some(raw) => Ok(serde_json::from_reader(open(raw)?)?),
        None => Ok(HashMap::new()),
    }
}

/// Reads table settings; defaults without a path.
pub fn load_settings(raw: Option<&str>) -> Result<PortfolioSettings> {
    match raw {
        Some(raw) => PortfolioSettings::from_reader(open(raw)?),
        None => Ok(PortfolioSettings::default()),
    }
}

/// Reads a session table; the built-in one without a path.
pub fn load_session_table(raw: Option<&str>) -> Result<SessionTable> {
    match raw {
        Some(raw) => Ok(serde_json::from_reader(open(raw)?)?),
        None => Ok(SessionTable::default()),
    }
}
