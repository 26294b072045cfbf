//! Portfolio position as streamed by a broker trader.
use serde::{Deserialize, Serialize};

use crate::instrument::Instrument;

/// A holding of one account: a security position or a cash balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Ticker symbol, or the currency code for balances.
    pub symbol: String,
    /// Broker account the position belongs to.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Average entry price.
    #[serde(default)]
    pub average_price: Option<f64>,
    /// Exchange the position is held on.
    #[serde(default)]
    pub exchange: Option<String>,
    /// Cash balance rather than a security.
    #[serde(default)]
    pub is_balance: bool,
    /// Currency position.
    #[serde(default)]
    pub is_currency: bool,
    /// Held quantity in lots; `0` means the position was closed.
    #[serde(default)]
    pub size: f64,
    /// Lot size.
    #[serde(default)]
    pub lot: Option<f64>,
    /// Resolved instrument, absent when the trader could not find one.
    #[serde(default)]
    pub instrument: Option<Instrument>,
}

impl Position {
    /// Creates a security position of `size` lots.
    pub fn new(symbol: &str, size: f64) -> Self {
        Position {
            symbol: symbol.to_string(),
            size,
            ..Position::default()
        }
    }

    /// Creates a cash balance.
    pub fn balance(currency: &str, size: f64) -> Self {
        Position {
            is_balance: true,
            is_currency: true,
            ..Position::new(currency, size)
        }
    }

    /// Sets the resolved instrument.
    pub fn with_instrument(mut self, instrument: Instrument) -> Self {
        self.instrument = Some(instrument);
        self
    }

    /// Sets the average entry price.
    pub fn with_average_price(mut self, price: f64) -> Self {
        self.average_price = Some(price);
        self
    }

    /// Sets the lot size.
    pub fn with_lot(mut self, lot: f64) -> Self {
        self.lot = Some(lot);
        self
    }

    /// Sets the owning account.
    pub fn with_account(mut self, account_id: &str) -> Self {
        self.account_id = Some(account_id.to_string());
        self
    }

    /// Returns `true` when both updates describe the same holding state.
    ///
    /// The instrument is not compared: a re-resolved instrument alone is not a change.
    pub fn same_holding(&self, other: &Position) -> bool {
        self.account_id == other.account_id
            && self.average_price == other.average_price
            && self.exchange == other.exchange
            && self.is_balance == other.is_balance
            && self.is_currency == other.is_currency
            && self.size == other.size
            && self.lot == other.lot
            && self.symbol == other.symbol
    }

    /// Quantity in units: lots times lot size (a missing lot counts as one).
    pub fn quantity(&self) -> f64 {
        self.size * self.lot.unwrap_or(1.0)
    }
}
