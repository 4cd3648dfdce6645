//! Fare API response DTOs.
//!
//! These mirror the JSON returned by the `farfnd` endpoints. Fields every
//! fare must carry are required, so a fare missing one fails to deserialize
//! and takes the whole response with it.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Response from `oneWayFares`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaresResponse {
    /// Fares in the order the API ranked them.
    pub fares: Vec<FareDto>,

    /// Paging information, when the API sends it.
    pub size: Option<u32>,
}

/// One fare entry. Which leg is present depends on the endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareDto {
    pub outbound: Option<FlightDto>,

    pub inbound: Option<FlightDto>,

    /// Combined price for round-trip fares.
    pub summary: Option<FareSummaryDto>,
}

/// A single priced flight.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    pub departure_airport: AirportDto,

    pub arrival_airport: AirportDto,

    /// Local time at the departure airport, e.g. "2026-11-02T06:25:00".
    pub departure_date: NaiveDateTime,

    /// Local time at the arrival airport.
    pub arrival_date: NaiveDateTime,

    pub price: PriceDto,

    /// Opaque fare identifier.
    pub flight_key: String,

    /// Carrier code plus number, e.g. "FR 1234".
    pub flight_number: String,

    /// Omitted or null when the fare has not changed.
    #[serde(default)]
    pub previous_price: Option<PreviousPriceDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportDto {
    pub country_name: String,
    pub iata_code: String,
    pub name: String,
    pub seo_name: String,
    pub city: CityDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub name: String,
    pub code: String,
    pub country_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    pub value: Decimal,
    pub currency_code: String,

    /// Pre-formatted integer part, e.g. "49".
    pub value_main_unit: Option<String>,

    /// Pre-formatted fractional part, e.g. "99".
    pub value_fractional_unit: Option<String>,

    pub currency_symbol: Option<String>,
}

/// Either a plain number or a text marker.
///
/// `Text` is tried first: `Decimal` also accepts JSON strings, so a numeric
/// looking marker such as `"59.99"` would otherwise become a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PreviousPriceDto {
    Text(String),
    Number(Decimal),
}

/// Summary attached to round-trip fares.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareSummaryDto {
    pub price: PriceDto,
    #[serde(default)]
    pub previous_price: Option<PreviousPriceDto>,
    pub new_route: Option<bool>,
    pub trip_duration_days: Option<u32>,
}
