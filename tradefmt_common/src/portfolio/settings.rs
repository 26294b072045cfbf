//! Portfolio table settings document.
use std::io::Read;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::result::Result;

/// Data source of a table column.
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
#[clap(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ColumnSource {
    /// Instrument symbol, falling back to the position symbol.
    Instrument,
    /// Position symbol.
    Symbol,
    /// Held quantity.
    PositionAvailable,
    /// Average entry price.
    PositionAverage,
    /// Last traded price.
    LastPrice,
    /// Profit or loss in money.
    PlAbsolute,
    /// Profit or loss relative to the entry price.
    PlRelative,
}

impl ColumnSource {
    /// Localized column header.
    pub fn title(&self) -> &'static str {
        match self {
            ColumnSource::Instrument => "Инструмент",
            ColumnSource::Symbol => "Тикер",
            ColumnSource::PositionAvailable => "Доступно",
            ColumnSource::PositionAverage => "Средняя",
            ColumnSource::LastPrice => "Последняя цена",
            ColumnSource::PlAbsolute => "Доход",
            ColumnSource::PlRelative => "Доход, %",
        }
    }
}

/// Columns of a freshly created portfolio table, in display order.
pub const DEFAULT_COLUMNS: [ColumnSource; 7] = [
    ColumnSource::Instrument,
    ColumnSource::Symbol,
    ColumnSource::PositionAvailable,
    ColumnSource::PositionAverage,
    ColumnSource::LastPrice,
    ColumnSource::PlAbsolute,
    ColumnSource::PlRelative,
];

/// A configured table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Data source.
    pub source: ColumnSource,
    /// Header override; the localized source title when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Column {
    /// Header shown for the column.
    pub fn header(&self) -> &str {
        self.name.as_deref().unwrap_or(self.source.title())
    }
}

impl From<ColumnSource> for Column {
    fn from(source: ColumnSource) -> Self {
        Column { source, name: None }
    }
}

fn default_columns() -> Vec<Column> {
    DEFAULT_COLUMNS.into_iter().map(Column::from).collect()
}

/// Saved settings of a portfolio table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioSettings {
    /// Trader that streams positions into the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_trader_id: Option<String>,
    /// Leave cash balances out of the table.
    pub hide_balances: bool,
    /// Flash last price cells on change.
    pub highlight_last_price_changes: bool,
    /// Columns in display order.
    pub columns: Vec<Column>,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        PortfolioSettings {
            portfolio_trader_id: None,
            hide_balances: false,
            highlight_last_price_changes: false,
            columns: default_columns(),
        }
    }
}

impl PortfolioSettings {
    /// Parses settings from a JSON document; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = PortfolioSettings::from_json("{}").unwrap();

        assert_eq!(settings, PortfolioSettings::default());
        assert_eq!(settings.columns.len(), 7);
        assert_eq!(settings.columns[0].source, ColumnSource::Instrument);
        assert_eq!(settings.columns[6].source, ColumnSource::PlRelative);
    }

    #[test]
    fn test_custom_columns() {
        let json = r#"{
            "hideBalances": true,
            "columns": [{"source": "symbol"}, {"source": "plAbsolute", "name": "P/L"}]
        }"#;
        let settings = PortfolioSettings::from_json(json).unwrap();

        assert!(settings.hide_balances);
        assert_eq!(settings.columns[0].header(), "Тикер");
        assert_eq!(settings.columns[1].header(), "P/L");
    }

    #[test]
    fn test_unknown_column_is_an_error() {
        assert!(PortfolioSettings::from_json(r#"{"columns": [{"source": "volume"}]}"#).is_err());
    }

    #[test]
    fn test_column_source_names() {
        assert_eq!(ColumnSource::PositionAvailable.to_string(), "positionAvailable");
        assert_eq!("lastPrice".parse::<ColumnSource>().unwrap(), ColumnSource::LastPrice);
    }
}
