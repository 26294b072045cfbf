//! In-memory portfolio grouped into table sections.
//!
//! Position updates arrive one at a time from a trader. `PortfolioBook` keeps the
//! latest state per symbol inside the section the update belongs to:
//!
//! - `PortfolioBook::apply(position)`: store, replace or drop (size `0`) a
//!   position. Returns `false` when the update repeats the stored holding.
//! - `PortfolioBook::section(kind)`: rows of one section, sorted by symbol.
//! - `PortfolioBook::sections(settings)`: the non-empty sections in display order.
//!
//! The book is not synchronized; wrap it in a lock to share it between threads.
use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::position::Position;
use super::settings::PortfolioSettings;
use crate::instrument::InstrumentType;

/// Table section a position is listed under.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    /// Cash balances.
    Balances,
    /// Shares.
    Stocks,
    /// Exchange-traded funds.
    Etfs,
    /// Bonds.
    Bonds,
    /// Futures.
    Futures,
    /// Instruments of any other type.
    Other,
    /// Positions whose instrument could not be resolved.
    Zombies,
}

impl Section {
    /// Section of `position`: balances first, then by instrument type.
    pub fn of(position: &Position) -> Self {
        if position.is_balance {
            return Section::Balances;
        }

        match position
            .instrument
            .as_ref()
            .and_then(|instrument| instrument.instrument_type)
        {
            None => Section::Zombies,
            Some(InstrumentType::Stock) => Section::Stocks,
            Some(InstrumentType::Etf) => Section::Etfs,
            Some(InstrumentType::Bond) => Section::Bonds,
            Some(InstrumentType::Future) => Section::Futures,
            Some(_) => Section::Other,
        }
    }

    /// Localized section caption.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Balances => "Валютные балансы",
            Section::Stocks => "Акции",
            Section::Etfs => "Фонды",
            Section::Bonds => "Облигации",
            Section::Futures => "Фьючерсы",
            Section::Other => "Прочее",
            Section::Zombies => "Неизвестные инструменты",
        }
    }
}

/// Latest position per symbol, grouped by [`Section`].
#[derive(Debug, Default)]
pub struct PortfolioBook {
    sections: HashMap<Section, BTreeMap<String, Position>>,
}

impl PortfolioBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a position update. Returns `true` if the book changed.
    pub fn apply(&mut self, position: Position) -> bool {
        let section = Section::of(&position);
        let rows = self.sections.entry(section).or_default();

        if rows
            .get(&position.symbol)
            .is_some_and(|existing| existing.same_holding(&position))
        {
            trace!("{} {}: unchanged", section, position.symbol);
            return false;
        }

        if position.size == 0.0 {
            let removed = rows.remove(&position.symbol).is_some();
            if removed {
                debug!("{} {}: closed", section, position.symbol);
            }
            return removed;
        }

        debug!("{} {}: size {}", section, position.symbol, position.size);
        rows.insert(position.symbol.clone(), position);
        true
    }

    /// Rows of `section`, sorted by symbol.
    pub fn section(&self, section: Section) -> Vec<&Position> {
        self.sections
            .get(&section)
            .map(|rows| rows.values().collect())
            .unwrap_or_default()
    }

    /// Non-empty sections in display order; balances are skipped when hidden.
    pub fn sections(&self, settings: &PortfolioSettings) -> Vec<(Section, Vec<&Position>)> {
        Section::iter()
            .filter(|section| !(settings.hide_balances && *section == Section::Balances))
            .map(|section| (section, self.section(section)))
            .filter(|(_, rows)| !rows.is_empty())
            .collect()
    }

    /// Number of held positions across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    /// Returns `true` when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Position> for PortfolioBook {
    fn from_iter<I: IntoIterator<Item = Position>>(positions: I) -> Self {
        let mut book = PortfolioBook::new();
        for position in positions {
            book.apply(position);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::Instrument;
    use pretty_assertions::assert_eq;

    fn stock(symbol: &str, size: f64) -> Position {
        Position::new(symbol, size).with_instrument(Instrument::new(InstrumentType::Stock, "USD"))
    }

    fn symbols(rows: &[&Position]) -> Vec<String> {
        rows.iter().map(|row| row.symbol.clone()).collect()
    }

    #[test]
    fn test_routing() {
        let option = Position::new("SI", 1.0)
            .with_instrument(Instrument::new(InstrumentType::Other, "RUB"));
        let fund = Position::new("TMOS", 1.0)
            .with_instrument(Instrument::new(InstrumentType::Etf, "RUB"));

        assert_eq!(Section::of(&Position::balance("RUB", 10.0)), Section::Balances);
        assert_eq!(Section::of(&Position::new("GONE", 1.0)), Section::Zombies);
        assert_eq!(Section::of(&stock("AAPL", 1.0)), Section::Stocks);
        assert_eq!(Section::of(&fund), Section::Etfs);
        assert_eq!(Section::of(&option), Section::Other);
    }

    #[test]
    fn test_apply_inserts_replaces_and_removes() {
        let mut book = PortfolioBook::new();

        assert!(book.apply(stock("AAPL", 5.0)));
        assert!(book.apply(stock("AAPL", 7.0)));
        assert_eq!(book.section(Section::Stocks)[0].size, 7.0);

        assert!(book.apply(stock("AAPL", 0.0)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_identical_update_is_noop() {
        let mut book = PortfolioBook::new();

        assert!(book.apply(stock("AAPL", 5.0)));
        assert!(!book.apply(stock("AAPL", 5.0)));
        assert!(!book.apply(stock("MSFT", 0.0)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_sections_sorted_and_filtered() {
        let mut book: PortfolioBook = vec![
            stock("MSFT", 1.0),
            stock("AAPL", 2.0),
            Position::balance("USD", 100.0),
            Position::new("DELISTED", 3.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(symbols(&book.section(Section::Stocks)), vec!["AAPL", "MSFT"]);

        let all: Vec<Section> = book
            .sections(&PortfolioSettings::default())
            .into_iter()
            .map(|(section, _)| section)
            .collect();
        assert_eq!(all, vec![Section::Balances, Section::Stocks, Section::Zombies]);

        let settings = PortfolioSettings {
            hide_balances: true,
            ..PortfolioSettings::default()
        };
        book.apply(Position::new("DELISTED", 0.0));
        let visible: Vec<Section> = book
            .sections(&settings)
            .into_iter()
            .map(|(section, _)| section)
            .collect();
        assert_eq!(visible, vec![Section::Stocks]);
    }
}
