//! Fare API HTTP client.
//!
//! Owns a cookie-holding HTTP session, retries every GET with backoff and
//! maps fare responses to domain types.

use tracing::{debug, error};

use crate::domain::{CurrencyCode, Flight, ReturnFlight};
use crate::reference::ReferenceData;
use crate::search::{ApiParams, FlightSearchParams, ReturnFlightSearchParams};

use super::convert::{FareLeg, convert_fares};
use super::error::RyanairError;
use super::retry::{RetryPolicy, retry_with_backoff};
use super::types::FaresResponse;

/// Default base URL for the fare finder API.
const DEFAULT_BASE_URL: &str = "https://services-api.ryanair.com/farfnd/v4";

/// Default site root, fetched once to obtain session cookies.
const DEFAULT_HOME_URL: &str = "https://www.ryanair.com";

/// Path of the one-way fares endpoint, relative to the base URL.
const ONE_WAY_FARES_PATH: &str = "oneWayFares";

/// Longest response body excerpt kept in an error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the fare API client.
#[derive(Debug, Clone)]
pub struct RyanairConfig {
    /// Preferred currency; unknown codes fall back to EUR
    pub currency: String,
    /// Base URL for the fare endpoints
    pub base_url: String,
    /// URL of the warm-up request
    pub home_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retry policy applied to every GET
    pub retry: RetryPolicy,
}

impl RyanairConfig {
    /// Create a new config with the given preferred currency.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            home_url: DEFAULT_HOME_URL.to_string(),
            timeout_secs: 30,
            retry: RetryPolicy::default(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom warm-up URL (for testing).
    pub fn with_home_url(mut self, url: impl Into<String>) -> Self {
        self.home_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

impl Default for RyanairConfig {
    fn default() -> Self {
        Self::new(CurrencyCode::EUR.as_str())
    }
}

/// Fare API client.
///
/// A value of this type has completed its warm-up request and picked a
/// working currency. The HTTP session is released when it is dropped.
#[derive(Debug, Clone)]
pub struct RyanairClient {
    http: reqwest::Client,
    base_url: String,
    currency: CurrencyCode,
    retry: RetryPolicy,
}

impl RyanairClient {
    /// Build the session, fetch the home page for cookies and select the
    /// working currency.
    ///
    /// A failing warm-up request (after retries) is returned as an error.
    pub async fn connect(
        config: RyanairConfig,
        reference: &ReferenceData,
    ) -> Result<Self, RyanairError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let client = Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            currency: select_currency(&config.currency, reference),
            retry: config.retry,
        };

        client.get(&config.home_url, &ApiParams::new()).await?;
        debug!(currency = %client.currency, "fare API session ready");

        Ok(client)
    }

    /// The currency fares are requested in.
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Search one-way fares.
    ///
    /// Failures are logged and reported as an empty result, so an empty
    /// `Vec` means either "no flights" or "request failed". Use
    /// [`try_get_oneways`](Self::try_get_oneways) to tell them apart.
    pub async fn get_oneways(&self, params: &FlightSearchParams) -> Vec<Flight> {
        match self.try_get_oneways(params).await {
            Ok(flights) => flights,
            Err(err) => {
                error!(
                    from = %params.from_airport(),
                    error = %err,
                    "one-way fare search failed"
                );
                Vec::new()
            }
        }
    }

    /// Search one-way fares, returning any failure to the caller.
    pub async fn try_get_oneways(
        &self,
        params: &FlightSearchParams,
    ) -> Result<Vec<Flight>, RyanairError> {
        let mut query = params.to_api_params();
        query.insert("currency".into(), self.currency.to_string());

        let url = format!("{}/{}", self.base_url, ONE_WAY_FARES_PATH);
        let body = self.get(&url, &query).await?;
        let flights = parse_fares(&body, FareLeg::Outbound)?;

        debug!(
            from = %params.from_airport(),
            count = flights.len(),
            "one-way fare search complete"
        );
        Ok(flights)
    }

    /// Search round-trip fares.
    ///
    /// Pairing outbound and inbound fares into [`ReturnFlight`]s is not
    /// implemented; this always fails without sending a request.
    pub async fn try_get_return_flights(
        &self,
        _params: &ReturnFlightSearchParams,
    ) -> Result<Vec<ReturnFlight>, RyanairError> {
        Err(RyanairError::NotImplemented("round-trip fare search"))
    }

    /// GET `url` with retry, returning the body of the first successful response.
    async fn get(&self, url: &str, query: &ApiParams) -> Result<String, RyanairError> {
        retry_with_backoff(&self.retry, |_: &RyanairError| true, || {
            self.get_once(url, query)
        })
        .await
    }

    async fn get_once(&self, url: &str, query: &ApiParams) -> Result<String, RyanairError> {
        debug!(url, "GET");
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RyanairError::Api {
                status: status.as_u16(),
                message: excerpt(&body),
            });
        }

        Ok(response.text().await?)
    }
}

/// Parse a fares response body and map the given leg of every fare.
///
/// Any malformed fare fails the whole body.
pub fn parse_fares(body: &str, leg: FareLeg) -> Result<Vec<Flight>, RyanairError> {
    let response: FaresResponse = serde_json::from_str(body).map_err(|e| RyanairError::Json {
        message: e.to_string(),
        body: Some(excerpt(body)),
    })?;

    Ok(convert_fares(&response, leg)?)
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

/// The requested currency if the currency table knows it, EUR otherwise.
fn select_currency(requested: &str, reference: &ReferenceData) -> CurrencyCode {
    match CurrencyCode::parse(&requested.trim().to_uppercase()) {
        Ok(code) if reference.has_currency(&code) => code,
        _ => {
            debug!(requested, fallback = %CurrencyCode::EUR, "unknown currency");
            CurrencyCode::EUR
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::reference::CodeTable;

    fn reference() -> ReferenceData {
        ReferenceData::new(
            CodeTable::from_codes(["EUR", "GBP", "PLN"]),
            CodeTable::from_codes(["DUB"]),
        )
    }

    #[test]
    fn config_defaults() {
        let config = RyanairConfig::default();

        assert_eq!(config.currency, "EUR");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.home_url, DEFAULT_HOME_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn config_builder() {
        let config = RyanairConfig::new("GBP")
            .with_base_url("http://localhost:8080/farfnd")
            .with_home_url("http://localhost:8080/")
            .with_timeout(5)
            .with_retry_policy(RetryPolicy::new(2).with_initial_delay(Duration::ZERO));

        assert_eq!(config.currency, "GBP");
        assert_eq!(config.base_url, "http://localhost:8080/farfnd");
        assert_eq!(config.home_url, "http://localhost:8080/");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.retry.max_attempts, 2);
    }

    #[test]
    fn known_currency_is_selected() {
        assert_eq!(select_currency("PLN", &reference()).as_str(), "PLN");
        assert_eq!(select_currency("gbp", &reference()).as_str(), "GBP");
    }

    #[test]
    fn unknown_currency_falls_back_to_eur() {
        assert_eq!(select_currency("USD", &reference()), CurrencyCode::EUR);
        assert_eq!(select_currency("", &reference()), CurrencyCode::EUR);
        assert_eq!(select_currency("euro", &reference()), CurrencyCode::EUR);
    }

    #[test]
    fn parse_fares_rejects_missing_fares_key() {
        let err = parse_fares(r#"{"size": 0}"#, FareLeg::Outbound).unwrap_err();
        match err {
            RyanairError::Json { message, body } => {
                assert!(message.contains("fares"));
                assert_eq!(body.as_deref(), Some(r#"{"size": 0}"#));
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn parse_fares_rejects_non_json() {
        let err = parse_fares("<html>blocked</html>", FareLeg::Outbound).unwrap_err();
        assert!(matches!(err, RyanairError::Json { .. }));
    }

    #[test]
    fn parse_fares_keeps_only_an_excerpt() {
        let body = "é".repeat(2000);
        match parse_fares(&body, FareLeg::Outbound).unwrap_err() {
            RyanairError::Json { body, .. } => {
                assert_eq!(body.map(|b| b.chars().count()), Some(BODY_EXCERPT_CHARS));
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn excerpt_is_char_bounded() {
        assert_eq!(excerpt("short"), "short");
        assert_eq!(excerpt(&"ü".repeat(600)).chars().count(), BODY_EXCERPT_CHARS);
    }

    #[test]
    fn parse_fares_empty_list() {
        let flights = parse_fares(r#"{"fares": []}"#, FareLeg::Outbound).unwrap();
        assert!(flights.is_empty());
    }
}
