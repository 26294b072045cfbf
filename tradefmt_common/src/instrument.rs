//! Instrument descriptor and the price classes formatters dispatch on.
//!
//! An `Instrument` is the read-only metadata the trading terminal keeps for every
//! tradable asset: its type, settlement currency and tick sizes. Formatters never
//! branch on raw strings; they ask the instrument for its [`PriceClass`] or
//! [`CurrencyClass`] and match on that.
use std::io::Read;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::currency::{Currency, NOT_AVAILABLE};
use crate::result::Result;

/// Kind of a tradable asset.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InstrumentType {
    /// Share.
    Stock,
    /// Bond.
    Bond,
    /// Exchange-traded fund.
    Etf,
    /// Futures contract, priced in points.
    Future,
    /// Index, priced in points.
    Index,
    /// Currency pair.
    Currency,
    /// Crypto pair, priced in its quote asset.
    Cryptocurrency,
    /// Any type the terminal does not format specially (options, commodities, ...).
    #[serde(other)]
    Other,
}

/// Metadata of a tradable asset, as delivered by the terminal in camelCase JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Human-readable instrument name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Asset kind.
    #[serde(rename = "type", default)]
    pub instrument_type: Option<InstrumentType>,
    /// Settlement currency: ISO code or `N/A`.
    #[serde(default)]
    pub currency: Option<String>,
    /// Price tick size.
    #[serde(default)]
    pub min_price_increment: Option<f64>,
    /// Quantity step.
    #[serde(default)]
    pub min_quantity_increment: Option<f64>,
    /// Quote asset of a crypto pair (e.g. `USDT` for `BTCUSDT`).
    #[serde(default)]
    pub quote_crypto_asset: Option<String>,
}

/// Currency treatment of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyClass<'a> {
    /// One of the known currencies, formatted through the locale.
    Listed(Currency),
    /// Any other code (including `N/A`), printed verbatim after the amount.
    Unlisted(&'a str),
}

impl<'a> CurrencyClass<'a> {
    /// Classifies an ISO code.
    pub fn of(code: &'a str) -> Self {
        match Currency::from_code(code) {
            Some(currency) => CurrencyClass::Listed(currency),
            None => CurrencyClass::Unlisted(code),
        }
    }
}

/// Price treatment of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceClass<'a> {
    /// Futures and indices: quoted in points.
    Points,
    /// Everything else: quoted in the settlement currency.
    Priced(CurrencyClass<'a>),
}

impl Instrument {
    /// Creates an instrument of the given type settled in `currency`.
    pub fn new(instrument_type: InstrumentType, currency: &str) -> Self {
        Instrument {
            instrument_type: Some(instrument_type),
            currency: Some(currency.to_string()),
            ..Instrument::default()
        }
    }

    /// Sets the ticker symbol.
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    /// Sets the price tick size.
    pub fn with_min_price_increment(mut self, increment: f64) -> Self {
        self.min_price_increment = Some(increment);
        self
    }

    /// Sets the quantity step.
    pub fn with_min_quantity_increment(mut self, increment: f64) -> Self {
        self.min_quantity_increment = Some(increment);
        self
    }

    /// Sets the crypto quote asset.
    pub fn with_quote_crypto_asset(mut self, asset: &str) -> Self {
        self.quote_crypto_asset = Some(asset.to_string());
        self
    }

    /// Parses an instrument from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads an instrument from a JSON stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Returns `true` if the instrument is of type `instrument_type`.
    pub fn is(&self, instrument_type: InstrumentType) -> bool {
        self.instrument_type == Some(instrument_type)
    }

    /// Settlement currency, if present and non-empty.
    pub fn currency_code(&self) -> Option<&str> {
        self.currency.as_deref().filter(|code| !code.is_empty())
    }

    /// Returns `true` when the currency is the `N/A` sentinel.
    pub fn is_currency_unavailable(&self) -> bool {
        self.currency_code() == Some(NOT_AVAILABLE)
    }

    /// Currency treatment, `None` without a currency.
    pub fn currency_class(&self) -> Option<CurrencyClass<'_>> {
        self.currency_code().map(CurrencyClass::of)
    }

    /// Price treatment, `None` without a currency.
    pub fn price_class(&self) -> Option<PriceClass<'_>> {
        let class = self.currency_class()?;
        match self.instrument_type {
            Some(InstrumentType::Future | InstrumentType::Index) => Some(PriceClass::Points),
            _ => Some(PriceClass::Priced(class)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_terminal_json() {
        let json = r#"{
            "symbol": "SBER",
            "fullName": "Сбербанк",
            "type": "stock",
            "currency": "RUB",
            "minPriceIncrement": 0.01,
            "minQuantityIncrement": 1
        }"#;

        let instrument = Instrument::from_json(json).unwrap();

        assert_eq!(instrument.symbol.as_deref(), Some("SBER"));
        assert_eq!(instrument.full_name.as_deref(), Some("Сбербанк"));
        assert_eq!(instrument.instrument_type, Some(InstrumentType::Stock));
        assert_eq!(instrument.min_price_increment, Some(0.01));
        assert_eq!(instrument.min_quantity_increment, Some(1.0));
        assert_eq!(instrument.quote_crypto_asset, None);
    }

    #[test]
    fn test_unknown_type_deserializes_as_other() {
        let instrument = Instrument::from_json(r#"{"type": "option", "currency": "USD"}"#).unwrap();
        assert_eq!(instrument.instrument_type, Some(InstrumentType::Other));
    }

    #[test]
    fn test_type_parses_case_insensitively() {
        assert_eq!("ETF".parse::<InstrumentType>().unwrap(), InstrumentType::Etf);
        assert_eq!(InstrumentType::Cryptocurrency.to_string(), "cryptocurrency");
    }

    #[test]
    fn test_price_class_dispatch() {
        let future = Instrument::new(InstrumentType::Future, "RUB");
        let stock = Instrument::new(InstrumentType::Stock, "USD");
        let unlisted = Instrument::new(InstrumentType::Stock, "SGD");
        let bare = Instrument::default();

        assert_eq!(future.price_class(), Some(PriceClass::Points));
        assert_eq!(
            stock.price_class(),
            Some(PriceClass::Priced(CurrencyClass::Listed(Currency::USD)))
        );
        assert_eq!(
            unlisted.price_class(),
            Some(PriceClass::Priced(CurrencyClass::Unlisted("SGD")))
        );
        assert_eq!(bare.price_class(), None);
    }

    #[test]
    fn test_empty_currency_counts_as_missing() {
        let instrument = Instrument::new(InstrumentType::Bond, "");
        assert_eq!(instrument.currency_code(), None);
        assert_eq!(instrument.currency_class(), None);
        assert!(Instrument::new(InstrumentType::Bond, "N/A").is_currency_unavailable());
    }
}
