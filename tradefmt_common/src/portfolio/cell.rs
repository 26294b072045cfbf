//! Rendering of portfolio table cells.
use super::position::Position;
use super::settings::{Column, ColumnSource};
use crate::format::{
    format_absolute_change, format_price, format_quantity, format_relative_change,
};
use crate::locale::{NumberFormatOptions, PLACEHOLDER};

/// Text of the `column` cell of `position`, given the instrument's last price.
pub fn render_cell(position: &Position, column: ColumnSource, last_price: Option<f64>) -> String {
    let instrument = position.instrument.as_ref();
    let price = |value: f64| format_price(value, instrument, &NumberFormatOptions::default());

    match column {
        ColumnSource::Instrument => instrument
            .and_then(|instrument| instrument.symbol.clone())
            .unwrap_or_else(|| position.symbol.clone()),
        ColumnSource::Symbol => position.symbol.clone(),
        ColumnSource::PositionAvailable => format_quantity(position.size, instrument),
        ColumnSource::PositionAverage => position
            .average_price
            .map_or_else(|| PLACEHOLDER.to_string(), price),
        ColumnSource::LastPrice => last_price.map_or_else(|| PLACEHOLDER.to_string(), price),
        ColumnSource::PlAbsolute => match (last_price, position.average_price) {
            (Some(last), Some(average)) => {
                format_absolute_change((last - average) * position.quantity(), instrument)
            }
            _ => PLACEHOLDER.to_string(),
        },
        ColumnSource::PlRelative => match (last_price, position.average_price) {
            (Some(last), Some(average)) if average != 0.0 => {
                format_relative_change((last - average) / average)
            }
            _ => PLACEHOLDER.to_string(),
        },
    }
}

/// Cells of `position` for every column, in order.
pub fn render_row(position: &Position, columns: &[Column], last_price: Option<f64>) -> Vec<String> {
    columns
        .iter()
        .map(|column| render_cell(position, column.source, last_price))
        .collect()
}
