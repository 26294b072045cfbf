//! Portfolio table model.
//!
//! - `position` — position updates streamed by a trader.
//! - `book` — latest positions grouped into table sections.
//! - `settings` — saved table settings and column sources.
//! - `cell` — per-cell text of a position row.
pub mod book;
pub mod cell;
pub mod position;
pub mod settings;

pub use book::{PortfolioBook, Section};
pub use cell::{render_cell, render_row};
pub use position::Position;
pub use settings::{Column, ColumnSource, DEFAULT_COLUMNS, PortfolioSettings};
