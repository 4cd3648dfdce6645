//! Flight result types.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Airport, CurrencyCode};

/// The price a fare had before its latest change.
///
/// Either an amount or a free-text marker, as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PreviousPrice {
    Amount(Decimal),
    Text(String),
}

impl fmt::Display for PreviousPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviousPrice::Amount(value) => write!(f, "{value}"),
            PreviousPrice::Text(text) => f.write_str(text),
        }
    }
}

/// A priced one-way flight.
///
/// Dates are local airport times as sent by the API. No ordering between
/// departure and arrival is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flight {
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    pub departure_date: NaiveDateTime,
    pub arrival_date: NaiveDateTime,
    pub price: Decimal,
    pub currency: CurrencyCode,
    /// Opaque key identifying the fare on the provider side.
    pub flight_key: String,
    pub flight_number: String,
    pub previous_price: Option<PreviousPrice>,
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {} {}",
            self.flight_number,
            self.departure_airport.iata_code,
            self.arrival_airport.iata_code,
            self.price,
            self.currency
        )
    }
}

/// A priced outbound/inbound pair.
///
/// Nothing in the client produces these yet: round-trip fare pairing is not
/// implemented (see `RyanairClient::try_get_return_flights`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnFlight {
    pub outbound: Flight,
    pub inbound: Flight,
    pub summary_price: Decimal,
    pub summary_currency: CurrencyCode,
    pub previous_price: Option<PreviousPrice>,
}
