//! Ryanair fare finder client.
//!
//! This module provides an HTTP client for the undocumented public
//! `farfnd/v4` API used by the Ryanair website.
//!
//! Key characteristics of the API:
//! - A session cookie from the site root is expected before fare queries
//! - Fare dates are local airport times without an offset
//! - Responses wrap each flight in a fare entry (`outbound` / `inbound`)
//!
//! Every GET is retried with exponential backoff. One-way searches swallow
//! failures into an empty result by default; `try_*` variants return them.

mod client;
mod convert;
mod error;
mod retry;
mod types;

pub use client::{RyanairClient, RyanairConfig, parse_fares};
pub use convert::{ConversionError, FareLeg, convert_fares, convert_flight};
pub use error::RyanairError;
pub use retry::{RetryPolicy, retry_with_backoff};
pub use types::{
    AirportDto, CityDto, FareDto, FareSummaryDto, FaresResponse, FlightDto, PreviousPriceDto,
    PriceDto,
};
