//! Search parameter validation errors.

use chrono::{NaiveDateTime, NaiveTime};

/// Why a search request was rejected.
///
/// Raised while validating a request, before any network traffic. These are
/// never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Not a 3-letter code, or not in the airport reference table
    #[error("invalid airport code {0:?}: must be a known 3-letter IATA code")]
    InvalidAirportCode(String),

    /// A search date lies before the validation time
    #[error("{field} {date} is in the past")]
    PastDate {
        field: &'static str,
        date: NaiveDateTime,
    },

    /// Maximum price was zero or negative
    #[error("max price must be positive, got {0}")]
    InvalidPrice(i64),

    /// A return date lies before the outbound departure date
    #[error("{field} {date} is before the outbound date {outbound}")]
    InvalidReturnDate {
        field: &'static str,
        date: NaiveDateTime,
        outbound: NaiveDateTime,
    },

    /// The end of a date range lies before its start
    #[error("{end_field} {end} is before {start_field} {start}")]
    InvalidDateRange {
        start_field: &'static str,
        start: NaiveDateTime,
        end_field: &'static str,
        end: NaiveDateTime,
    },

    /// The latest departure time lies before the earliest
    #[error("departure time window {from}..{to} is empty")]
    InvalidTimeWindow { from: NaiveTime, to: NaiveTime },
}
