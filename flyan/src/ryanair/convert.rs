//! Conversion from fare DTOs to domain types.

use crate::domain::{Airport, CurrencyCode, Flight, IataCode, PreviousPrice};

use super::types::{AirportDto, FareDto, FaresResponse, FlightDto, PreviousPriceDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A fare entry has no flight under the requested key
    #[error("fare #{index} has no {leg} flight")]
    MissingLeg { index: usize, leg: &'static str },

    /// An airport code is not 3 uppercase letters
    #[error("invalid airport code: {0:?}")]
    InvalidAirport(String),

    /// A currency code is not 3 uppercase letters
    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),
}

/// Which flight of a fare entry to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FareLeg {
    Outbound,
    Inbound,
}

impl FareLeg {
    /// The JSON key holding this leg in a fare entry.
    pub fn key(self) -> &'static str {
        match self {
            FareLeg::Outbound => "outbound",
            FareLeg::Inbound => "inbound",
        }
    }

    fn select(self, fare: &FareDto) -> Option<&FlightDto> {
        match self {
            FareLeg::Outbound => fare.outbound.as_ref(),
            FareLeg::Inbound => fare.inbound.as_ref(),
        }
    }
}

/// Convert every fare in a response, keeping the response order.
///
/// Any bad entry fails the whole conversion; there is no partial result.
pub fn convert_fares(
    response: &FaresResponse,
    leg: FareLeg,
) -> Result<Vec<Flight>, ConversionError> {
    response
        .fares
        .iter()
        .enumerate()
        .map(|(index, fare)| {
            let flight = leg.select(fare).ok_or(ConversionError::MissingLeg {
                index,
                leg: leg.key(),
            })?;
            convert_flight(flight)
        })
        .collect()
}

/// Convert a single flight.
pub fn convert_flight(dto: &FlightDto) -> Result<Flight, ConversionError> {
    let currency = CurrencyCode::parse(&dto.price.currency_code)
        .map_err(|_| ConversionError::InvalidCurrency(dto.price.currency_code.clone()))?;

    Ok(Flight {
        departure_airport: convert_airport(&dto.departure_airport)?,
        arrival_airport: convert_airport(&dto.arrival_airport)?,
        departure_date: dto.departure_date,
        arrival_date: dto.arrival_date,
        price: dto.price.value,
        currency,
        flight_key: dto.flight_key.clone(),
        flight_number: dto.flight_number.clone(),
        previous_price: dto.previous_price.as_ref().map(convert_previous_price),
    })
}

fn convert_airport(dto: &AirportDto) -> Result<Airport, ConversionError> {
    let iata_code = IataCode::parse(&dto.iata_code)
        .map_err(|_| ConversionError::InvalidAirport(dto.iata_code.clone()))?;

    Ok(Airport {
        country_name: dto.country_name.clone(),
        iata_code,
        name: dto.name.clone(),
        seo_name: dto.seo_name.clone(),
        city_name: dto.city.name.clone(),
        city_code: dto.city.code.clone(),
        city_country_code: dto.city.country_code.clone(),
    })
}

fn convert_previous_price(dto: &PreviousPriceDto) -> PreviousPrice {
    match dto {
        PreviousPriceDto::Number(value) => PreviousPrice::Amount(*value),
        PreviousPriceDto::Text(text) => PreviousPrice::Text(text.clone()),
    }
}
