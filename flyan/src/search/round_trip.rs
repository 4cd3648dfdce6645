//! Round-trip search parameters.
//!
//! A round trip is a validated one-way search plus an inbound window. The
//! query parameters are the one-way parameters with the inbound fields
//! merged on top.

use chrono::{Local, NaiveDateTime, NaiveTime};

use crate::reference::ReferenceData;

use super::error::ValidationError;
use super::params::{ApiParams, FlightSearchParams, FlightSearchRequest, TimeWindow, date_param};

/// Unvalidated input for a round-trip search.
#[derive(Debug, Clone)]
pub struct ReturnFlightSearchRequest {
    pub outbound: FlightSearchRequest,
    pub return_date_from: NaiveDateTime,
    pub return_date_to: NaiveDateTime,
    pub inbound_departure_time_from: NaiveTime,
    pub inbound_departure_time_to: NaiveTime,
}

impl ReturnFlightSearchRequest {
    /// Extend a one-way request with a return date range, at any time of day.
    pub fn new(
        outbound: FlightSearchRequest,
        return_date_from: NaiveDateTime,
        return_date_to: NaiveDateTime,
    ) -> Self {
        let day = TimeWindow::full_day();
        Self {
            outbound,
            return_date_from,
            return_date_to,
            inbound_departure_time_from: day.from(),
            inbound_departure_time_to: day.to(),
        }
    }

    /// Restrict the departure time of day of the inbound flight.
    pub fn with_inbound_departure_times(mut self, from: NaiveTime, to: NaiveTime) -> Self {
        self.inbound_departure_time_from = from;
        self.inbound_departure_time_to = to;
        self
    }

    /// Validate against the reference tables and the local clock.
    pub fn validate(
        self,
        reference: &ReferenceData,
    ) -> Result<ReturnFlightSearchParams, ValidationError> {
        self.validate_at(reference, Local::now().naive_local())
    }

    /// Validate against the reference tables, treating `now` as the current time.
    ///
    /// The outbound part is checked first. Both return dates must then be on
    /// or after the outbound `from_date`, and must form a non-empty range.
    pub fn validate_at(
        self,
        reference: &ReferenceData,
        now: NaiveDateTime,
    ) -> Result<ReturnFlightSearchParams, ValidationError> {
        let outbound = self.outbound.validate_at(reference, now)?;
        let departure = outbound.from_date();

        for (field, date) in [
            ("return_date_from", self.return_date_from),
            ("return_date_to", self.return_date_to),
        ] {
            if date < departure {
                return Err(ValidationError::InvalidReturnDate {
                    field,
                    date,
                    outbound: departure,
                });
            }
        }

        if self.return_date_to < self.return_date_from {
            return Err(ValidationError::InvalidDateRange {
                start_field: "return_date_from",
                start: self.return_date_from,
                end_field: "return_date_to",
                end: self.return_date_to,
            });
        }

        let departure_times =
            TimeWindow::new(self.inbound_departure_time_from, self.inbound_departure_time_to)?;

        Ok(ReturnFlightSearchParams {
            outbound,
            inbound: InboundWindow {
                return_date_from: self.return_date_from,
                return_date_to: self.return_date_to,
                departure_times,
            },
        })
    }
}

/// When the inbound flight may depart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundWindow {
    return_date_from: NaiveDateTime,
    return_date_to: NaiveDateTime,
    departure_times: TimeWindow,
}

impl InboundWindow {
    pub fn return_date_from(&self) -> NaiveDateTime {
        self.return_date_from
    }

    pub fn return_date_to(&self) -> NaiveDateTime {
        self.return_date_to
    }

    pub fn departure_times(&self) -> TimeWindow {
        self.departure_times
    }

    /// Merge the inbound fields into `params`, replacing any existing values.
    pub fn extend_api_params(&self, params: &mut ApiParams) {
        params.insert("inboundDepartureDateFrom".into(), date_param(&self.return_date_from));
        params.insert("inboundDepartureDateTo".into(), date_param(&self.return_date_to));
        params.insert("inboundDepartureTimeFrom".into(), self.departure_times.from_param());
        params.insert("inboundDepartureTimeTo".into(), self.departure_times.to_param());
    }
}

/// Validated parameters for a round-trip fare search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnFlightSearchParams {
    outbound: FlightSearchParams,
    inbound: InboundWindow,
}

impl ReturnFlightSearchParams {
    pub fn outbound(&self) -> &FlightSearchParams {
        &self.outbound
    }

    pub fn inbound(&self) -> &InboundWindow {
        &self.inbound
    }

    /// The one-way parameters with the four inbound fields merged in.
    pub fn to_api_params(&self) -> ApiParams {
        let mut params = self.outbound.to_api_params();
        self.inbound.extend_api_params(&mut params);
        params
    }
}
