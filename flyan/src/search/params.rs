//! One-way search parameters.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};

use crate::domain::IataCode;
use crate::reference::ReferenceData;

use super::error::ValidationError;

/// Query parameters in the shape the fare API expects, keyed by API field name.
pub type ApiParams = BTreeMap<String, String>;

/// Format used for time-of-day filters in query parameters.
const TIME_FORMAT: &str = "%H:%M";

/// Format used for date filters in query parameters.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive range of departure times within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    from: NaiveTime,
    to: NaiveTime,
}

impl TimeWindow {
    /// Create a window; `from` must not be after `to`.
    pub fn new(from: NaiveTime, to: NaiveTime) -> Result<Self, ValidationError> {
        if from > to {
            return Err(ValidationError::InvalidTimeWindow { from, to });
        }
        Ok(Self { from, to })
    }

    /// 00:00 to 23:59.
    pub fn full_day() -> Self {
        Self {
            from: NaiveTime::MIN,
            to: NaiveTime::MIN + TimeDelta::minutes(23 * 60 + 59),
        }
    }

    pub fn from(&self) -> NaiveTime {
        self.from
    }

    pub fn to(&self) -> NaiveTime {
        self.to
    }

    pub(crate) fn from_param(&self) -> String {
        self.from.format(TIME_FORMAT).to_string()
    }

    pub(crate) fn to_param(&self) -> String {
        self.to.format(TIME_FORMAT).to_string()
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::full_day()
    }
}

pub(crate) fn date_param(date: &NaiveDateTime) -> String {
    date.date().format(DATE_FORMAT).to_string()
}

/// Unvalidated input for a one-way search.
///
/// Build one with [`FlightSearchRequest::new`] and the `with_*` setters, then
/// call [`validate`](FlightSearchRequest::validate) to get
/// [`FlightSearchParams`].
#[derive(Debug, Clone)]
pub struct FlightSearchRequest {
    pub from_airport: String,
    pub from_date: NaiveDateTime,
    pub to_date: NaiveDateTime,
    pub destination_country: Option<String>,
    pub max_price: Option<i64>,
    pub to_airport: Option<String>,
    pub departure_time_from: NaiveTime,
    pub departure_time_to: NaiveTime,
    /// Extra query parameters sent as-is, overriding any generated field of
    /// the same name.
    pub custom_params: BTreeMap<String, String>,
}

impl FlightSearchRequest {
    /// A request for flights leaving `from_airport` between two dates, at any
    /// time of day.
    pub fn new(
        from_airport: impl Into<String>,
        from_date: NaiveDateTime,
        to_date: NaiveDateTime,
    ) -> Self {
        let day = TimeWindow::full_day();
        Self {
            from_airport: from_airport.into(),
            from_date,
            to_date,
            destination_country: None,
            max_price: None,
            to_airport: None,
            departure_time_from: day.from,
            departure_time_to: day.to,
            custom_params: BTreeMap::new(),
        }
    }

    /// Only flights landing in this country (ISO 3166 alpha-2, e.g. "IT").
    pub fn with_destination_country(mut self, country: impl Into<String>) -> Self {
        self.destination_country = Some(country.into());
        self
    }

    /// Only fares at or below this price, in the client's currency.
    pub fn with_max_price(mut self, max_price: i64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Only flights landing at this airport.
    pub fn with_to_airport(mut self, airport: impl Into<String>) -> Self {
        self.to_airport = Some(airport.into());
        self
    }

    /// Restrict the departure time of day.
    pub fn with_departure_times(mut self, from: NaiveTime, to: NaiveTime) -> Self {
        self.departure_time_from = from;
        self.departure_time_to = to;
        self
    }

    /// Pass an API field the request does not model. Not validated.
    pub fn with_custom_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_params.insert(key.into(), value.into());
        self
    }

    /// Validate against the reference tables and the local clock.
    pub fn validate(self, reference: &ReferenceData) -> Result<FlightSearchParams, ValidationError> {
        self.validate_at(reference, Local::now().naive_local())
    }

    /// Validate against the reference tables, treating `now` as the current time.
    pub fn validate_at(
        self,
        reference: &ReferenceData,
        now: NaiveDateTime,
    ) -> Result<FlightSearchParams, ValidationError> {
        let from_airport = known_airport(&self.from_airport, reference)?;

        not_in_past("from_date", self.from_date, now)?;
        not_in_past("to_date", self.to_date, now)?;
        if self.to_date < self.from_date {
            return Err(ValidationError::InvalidDateRange {
                start_field: "from_date",
                start: self.from_date,
                end_field: "to_date",
                end: self.to_date,
            });
        }

        if let Some(price) = self.max_price
            && price <= 0
        {
            return Err(ValidationError::InvalidPrice(price));
        }

        let to_airport = self
            .to_airport
            .as_deref()
            .map(|code| known_airport(code, reference))
            .transpose()?;

        let departure_times = TimeWindow::new(self.departure_time_from, self.departure_time_to)?;

        let destination_country = self
            .destination_country
            .map(|country| country.trim().to_uppercase())
            .filter(|country| !country.is_empty());

        Ok(FlightSearchParams {
            from_airport,
            from_date: self.from_date,
            to_date: self.to_date,
            destination_country,
            max_price: self.max_price,
            to_airport,
            departure_times,
            custom_params: self.custom_params,
        })
    }
}

/// Normalize an airport code and check it against the airport table.
pub(crate) fn known_airport(
    code: &str,
    reference: &ReferenceData,
) -> Result<IataCode, ValidationError> {
    IataCode::normalize(code)
        .ok()
        .filter(|iata| reference.has_airport(iata))
        .ok_or_else(|| ValidationError::InvalidAirportCode(code.to_string()))
}

pub(crate) fn not_in_past(
    field: &'static str,
    date: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<(), ValidationError> {
    if date < now {
        return Err(ValidationError::PastDate { field, date });
    }
    Ok(())
}

/// Validated parameters for a one-way fare search.
///
/// Only obtainable through [`FlightSearchRequest::validate`], so every value
/// of this type has a known departure airport and dates that were not in the
/// past when it was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSearchParams {
    from_airport: IataCode,
    from_date: NaiveDateTime,
    to_date: NaiveDateTime,
    destination_country: Option<String>,
    max_price: Option<i64>,
    to_airport: Option<IataCode>,
    departure_times: TimeWindow,
    custom_params: BTreeMap<String, String>,
}

impl FlightSearchParams {
    pub fn from_airport(&self) -> IataCode {
        self.from_airport
    }

    pub fn from_date(&self) -> NaiveDateTime {
        self.from_date
    }

    pub fn to_date(&self) -> NaiveDateTime {
        self.to_date
    }

    pub fn destination_country(&self) -> Option<&str> {
        self.destination_country.as_deref()
    }

    pub fn max_price(&self) -> Option<i64> {
        self.max_price
    }

    pub fn to_airport(&self) -> Option<IataCode> {
        self.to_airport
    }

    pub fn departure_times(&self) -> TimeWindow {
        self.departure_times
    }

    pub fn custom_params(&self) -> &BTreeMap<String, String> {
        &self.custom_params
    }

    /// Convert to the fare API's query parameters.
    ///
    /// Optional filters that were not set are left out entirely. Custom
    /// parameters are merged last and win on a name collision.
    pub fn to_api_params(&self) -> ApiParams {
        let mut params = ApiParams::new();
        params.insert(
            "departureAirportIataCode".into(),
            self.from_airport.as_str().to_string(),
        );
        params.insert("outboundDepartureDateFrom".into(), date_param(&self.from_date));
        params.insert("outboundDepartureDateTo".into(), date_param(&self.to_date));
        params.insert(
            "outboundDepartureTimeFrom".into(),
            self.departure_times.from_param(),
        );
        params.insert(
            "outboundDepartureTimeTo".into(),
            self.departure_times.to_param(),
        );

        if let Some(country) = &self.destination_country {
            params.insert("arrivalCountryCode".into(), country.clone());
        }

        if let Some(price) = self.max_price {
            params.insert("priceValueTo".into(), price.to_string());
        }

        if let Some(airport) = &self.to_airport {
            params.insert(
                "arrivalAirportIataCode".into(),
                airport.as_str().to_string(),
            );
        }

        params.extend(self.custom_params.clone());
        params
    }
}
