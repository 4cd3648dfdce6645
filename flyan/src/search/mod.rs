//! Search parameter model.
//!
//! Raw requests (`FlightSearchRequest`, `ReturnFlightSearchRequest`) are
//! validated against the reference tables into immutable parameter values,
//! which convert to the fare API's query parameters.

mod error;
mod params;
mod round_trip;

pub use error::ValidationError;
pub use params::{ApiParams, FlightSearchParams, FlightSearchRequest, TimeWindow};
pub use round_trip::{InboundWindow, ReturnFlightSearchParams, ReturnFlightSearchRequest};
