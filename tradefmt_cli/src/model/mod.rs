//! Documents the formatter reads and the tables it prints.
//!
//! - `loader` — instrument, position, price, settings and session table loading.
//! - `table` — plain-text portfolio table.
pub mod loader;
pub mod table;
