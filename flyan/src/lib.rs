//! Typed client for Ryanair's public fare search API.
//!
//! Validates search parameters against static reference tables, fetches
//! one-way fares with retry/backoff and parses them into typed flights.
//!
//! ```no_run
//! use chrono::{Duration, Local};
//! use flyan::reference::ReferenceData;
//! use flyan::ryanair::{RyanairClient, RyanairConfig};
//! use flyan::search::FlightSearchRequest;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let reference = ReferenceData::load("data")?;
//! let client = RyanairClient::connect(RyanairConfig::new("EUR"), &reference).await?;
//!
//! let start = Local::now().naive_local() + Duration::days(7);
//! let params = FlightSearchRequest::new("DUB", start, start + Duration::days(3))
//!     .with_destination_country("IT")
//!     .with_max_price(100)
//!     .validate(&reference)?;
//!
//! for flight in client.get_oneways(&params).await {
//!     println!("{flight}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod reference;
pub mod ryanair;
pub mod search;
