//! Static reference tables: currency codes and airport (station) codes.
//!
//! Both tables are loaded once at startup from JSON documents keyed by code
//! and are read-only afterwards. They are passed explicitly to the search
//! parameter validators and to the client.

mod error;
mod table;

pub use error::ReferenceError;
pub use table::{CURRENCIES_FILE, CodeTable, ReferenceData, STATIONS_FILE};
