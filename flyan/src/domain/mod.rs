//! Domain types for fare search results.
//!
//! Code types (`IataCode`, `CurrencyCode`) enforce their format at
//! construction time. Result types (`Airport`, `Flight`) carry whatever the
//! fare API returned once it has been parsed successfully.

mod airport;
mod currency;
mod flight;

pub use airport::{Airport, IataCode, InvalidIataCode};
pub use currency::{CurrencyCode, InvalidCurrencyCode};
pub use flight::{Flight, PreviousPrice, ReturnFlight};
