//! Known currencies and currency symbol lookup.
//!
//! The terminal renders a fixed set of currencies through the locale's currency
//! formatting; every other code is printed as is, after the amount.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::instrument::{Instrument, InstrumentType};
use crate::locale::{PLACEHOLDER, POINTS};

/// Sentinel currency code for instruments without a settlement currency.
pub const NOT_AVAILABLE: &str = "N/A";
/// Stablecoin code rendered verbatim instead of through the locale.
pub const USDT: &str = "USDT";

/// Currencies rendered through the locale's currency formatting.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    Hash,
    Eq,
    PartialEq,
)]
pub enum Currency {
    EUR,
    AMD,
    KZT,
    KGS,
    UZS,
    USD,
    CNY,
    TJS,
    BYN,
    HKD,
    XAU,
    TRY,
    XAG,
    RUB,
}

impl Currency {
    /// Every known currency, in the terminal's order.
    pub const KNOWN: [Currency; 14] = [
        Currency::EUR,
        Currency::AMD,
        Currency::KZT,
        Currency::KGS,
        Currency::UZS,
        Currency::USD,
        Currency::CNY,
        Currency::TJS,
        Currency::BYN,
        Currency::HKD,
        Currency::XAU,
        Currency::TRY,
        Currency::XAG,
        Currency::RUB,
    ];

    /// Looks up a known currency by its exact ISO code.
    pub fn from_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Currency symbol as rendered by the `ru-RU` locale.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::EUR => "€",
            Currency::USD => "$",
            Currency::RUB => "₽",
            Currency::CNY => "CN¥",
            Currency::HKD => "HK$",
            Currency::BYN => "Br",
            Currency::AMD => "AMD",
            Currency::KZT => "KZT",
            Currency::KGS => "KGS",
            Currency::UZS => "UZS",
            Currency::TJS => "TJS",
            Currency::TRY => "TRY",
            Currency::XAU => "XAU",
            Currency::XAG => "XAG",
        }
    }

    /// Localized display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Currency::EUR => "евро",
            Currency::AMD => "армянский драм",
            Currency::KZT => "казахский тенге",
            Currency::KGS => "киргизский сом",
            Currency::UZS => "узбекский сум",
            Currency::USD => "доллар США",
            Currency::CNY => "китайский юань",
            Currency::TJS => "таджикский сомони",
            Currency::BYN => "белорусский рубль",
            Currency::HKD => "гонконгский доллар",
            Currency::XAU => "тройская унция золота",
            Currency::TRY => "турецкая лира",
            Currency::XAG => "тройская унция серебра",
            Currency::RUB => "российский рубль",
        }
    }
}

/// Returns `true` if `code` is one of [`Currency::KNOWN`].
pub fn is_known_currency(code: &str) -> bool {
    Currency::from_code(code).is_some()
}

/// Locale symbol for any ISO code; codes without a dedicated symbol render as themselves.
pub fn symbol_for_code(code: &str) -> &str {
    if let Some(currency) = Currency::from_code(code) {
        return currency.symbol();
    }
    match code {
        "GBP" => "£",
        "JPY" => "¥",
        "ILS" => "₪",
        "INR" => "₹",
        "UAH" => "₴",
        _ => code,
    }
}

/// Symbol printed after an instrument's price.
///
/// Points for futures and indices, the quote asset for crypto pairs, `USDT`
/// verbatim, the locale symbol for any other currency and an empty string for
/// `N/A` or a missing currency.
pub fn price_currency_symbol(instrument: Option<&Instrument>) -> String {
    let Some(instrument) = instrument else {
        return String::new();
    };

    match instrument.instrument_type {
        Some(InstrumentType::Future | InstrumentType::Index) => return POINTS.to_string(),
        Some(InstrumentType::Cryptocurrency) => {
            return instrument.quote_crypto_asset.clone().unwrap_or_default();
        }
        _ => {}
    }

    match instrument.currency_code() {
        Some(USDT) => USDT.to_string(),
        Some(code) if code != NOT_AVAILABLE => symbol_for_code(code).to_string(),
        _ => String::new(),
    }
}

/// Localized name of a known currency; other codes are returned unchanged.
pub fn currency_name(code: Option<&str>) -> String {
    match code {
        None | Some("") => PLACEHOLDER.to_string(),
        Some(code) => match Currency::from_code(code) {
            Some(currency) => currency.display_name().to_string(),
            None => code.to_string(),
        },
    }
}
