//! Plain-text rendering of the portfolio table.
use std::collections::HashMap;

use tradefmt_common::portfolio::{PortfolioBook, PortfolioSettings, render_row};

/// Renders the visible sections of `book` as tab-separated lines: a caption per
/// section followed by the header and one line per position.
pub fn render_table(
    book: &PortfolioBook,
    settings: &PortfolioSettings,
    prices: &HashMap<String, f64>,
) -> Vec<String> {
    let header = settings
        .columns
        .iter()
        .map(|column| column.header())
        .collect::<Vec<_>>()
        .join("\t");

    let mut lines = Vec::new();
    for (section, rows) in book.sections(settings) {
        lines.push(format!("# {}", section.title()));
        lines.push(header.clone());
        for position in rows {
            let last_price = prices.get(&position.symbol).copied();
            lines.push(render_row(position, &settings.columns, last_price).join("\t"));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tradefmt_common::portfolio::{Column, ColumnSource, Position};

    #[test]
    fn test_render_table() {
        let positions: Vec<Position> = serde_json::from_str(
            r#"[
                {"symbol": "RUB", "isBalance": true, "size": 1000},
                {"symbol": "GAZP", "averagePrice": 150, "size": 2, "lot": 10,
                 "instrument": {"type": "stock", "currency": "RUB", "minPriceIncrement": 0.01}}
            ]"#,
        )
        .unwrap();
        let book: PortfolioBook = positions.into_iter().collect();
        let settings = PortfolioSettings {
            hide_balances: true,
            columns: vec![
                Column::from(ColumnSource::Symbol),
                Column::from(ColumnSource::PlAbsolute),
            ],
            ..PortfolioSettings::default()
        };
        let prices = HashMap::from([("GAZP".to_string(), 160.0)]);

        assert_eq!(
            render_table(&book, &settings, &prices),
            vec!["# Акции", "Тикер\tДоход", "GAZP\t+200,00"]
        );
    }
}
