//! Shared helpers: a local fake of the fare API and log capture.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use chrono::{NaiveDate, NaiveDateTime};
use flyan::reference::{CodeTable, ReferenceData};
use flyan::ryanair::{RetryPolicy, RyanairConfig};

/// Two well-formed fares, DUB -> BGY then DUB -> CIA.
pub const TWO_FARES: &str = r#"{
  "arrivalAirportCategories": null,
  "fares": [
    {
      "outbound": {
        "departureAirport": {
          "countryName": "Ireland", "iataCode": "DUB", "name": "Dublin", "seoName": "dublin",
          "city": {"name": "Dublin", "code": "DUBLIN", "countryCode": "ie"}
        },
        "arrivalAirport": {
          "countryName": "Italy", "iataCode": "BGY", "name": "Milan Bergamo", "seoName": "milan-bergamo",
          "city": {"name": "Milan", "code": "MILAN", "countryCode": "it"}
        },
        "departureDate": "2030-06-10T06:25:00",
        "arrivalDate": "2030-06-10T10:05:00",
        "price": {"value": 49.99, "valueMainUnit": "49", "valueFractionalUnit": "99", "currencyCode": "EUR", "currencySymbol": "€"},
        "flightKey": "abc123",
        "flightNumber": "FR 1234",
        "previousPrice": null,
        "priceUpdated": 1780000000000
      },
      "summary": {"price": {"value": 49.99, "currencyCode": "EUR"}, "previousPrice": null, "newRoute": false}
    },
    {
      "outbound": {
        "departureAirport": {
          "countryName": "Ireland", "iataCode": "DUB", "name": "Dublin", "seoName": "dublin",
          "city": {"name": "Dublin", "code": "DUBLIN", "countryCode": "ie"}
        },
        "arrivalAirport": {
          "countryName": "Italy", "iataCode": "CIA", "name": "Rome Ciampino", "seoName": "rome-ciampino",
          "city": {"name": "Rome", "code": "ROME", "countryCode": "it"}
        },
        "departureDate": "2030-06-11T17:40:00",
        "arrivalDate": "2030-06-11T21:45:00",
        "price": {"value": 64.5, "currencyCode": "EUR"},
        "flightKey": "def456",
        "flightNumber": "FR 9015",
        "previousPrice": 71.0
      }
    }
  ],
  "nextPage": null,
  "size": 2
}"#;

/// Fixed "now" for validation, well before the fixture dates.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 6, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 6, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn reference() -> ReferenceData {
    ReferenceData::new(
        CodeTable::from_codes(["EUR", "GBP"]),
        CodeTable::from_codes(["DUB", "BGY", "CIA", "STN"]),
    )
}

/// Behaviour and call log of the fake API.
#[derive(Default)]
pub struct MockApi {
    /// Number of upcoming home page requests to fail with 500
    pub home_failures: AtomicUsize,
    /// Number of upcoming fare requests to fail with 503
    pub fare_failures: AtomicUsize,
    pub home_hits: AtomicUsize,
    pub fare_hits: AtomicUsize,
    pub fare_body: Mutex<String>,
    /// Body sent with failed fare responses; empty means a short default
    pub failure_body: Mutex<String>,
    pub last_query: Mutex<Option<HashMap<String, String>>>,
}

impl MockApi {
    pub fn with_fares(body: &str) -> Arc<Self> {
        let api = Self::default();
        *api.fare_body.lock().unwrap() = body.to_string();
        Arc::new(api)
    }

    pub fn fail_home(self: &Arc<Self>, times: usize) {
        self.home_failures.store(times, Ordering::SeqCst);
    }

    pub fn fail_fares(self: &Arc<Self>, times: usize) {
        self.fare_failures.store(times, Ordering::SeqCst);
    }

    pub fn fail_fares_with(self: &Arc<Self>, times: usize, body: &str) {
        *self.failure_body.lock().unwrap() = body.to_string();
        self.fail_fares(times);
    }

    pub fn home_hits(&self) -> usize {
        self.home_hits.load(Ordering::SeqCst)
    }

    pub fn fare_hits(&self) -> usize {
        self.fare_hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> HashMap<String, String> {
        self.last_query.lock().unwrap().clone().unwrap_or_default()
    }
}

/// Consume one pending failure, if any are left.
fn take_failure(counter: &AtomicUsize) -> bool {
    counter
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
}

async fn home(State(api): State<Arc<MockApi>>) -> Response {
    api.home_hits.fetch_add(1, Ordering::SeqCst);
    if take_failure(&api.home_failures) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "home unavailable").into_response();
    }
    "<html>welcome</html>".into_response()
}

async fn one_way_fares(
    State(api): State<Arc<MockApi>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    api.fare_hits.fetch_add(1, Ordering::SeqCst);
    *api.last_query.lock().unwrap() = Some(query);
    if take_failure(&api.fare_failures) {
        let body = api.failure_body.lock().unwrap().clone();
        let body = if body.is_empty() { "try again later".to_string() } else { body };
        return (StatusCode::SERVICE_UNAVAILABLE, body).into_response();
    }
    let body = api.fare_body.lock().unwrap().clone();
    ([("content-type", "application/json")], body).into_response()
}

/// Serve the fake API on an ephemeral local port.
pub async fn spawn(api: Arc<MockApi>) -> SocketAddr {
    let app = Router::new()
        .route("/", get(home))
        .route("/farfnd/oneWayFares", get(one_way_fares))
        .with_state(api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Client config pointing at the fake API, retrying without delay.
pub fn config(addr: SocketAddr, currency: &str) -> RyanairConfig {
    RyanairConfig::new(currency)
        .with_base_url(format!("http://{addr}/farfnd"))
        .with_home_url(format!("http://{addr}/"))
        .with_timeout(5)
        .with_retry_policy(RetryPolicy::default().with_initial_delay(Duration::ZERO))
}

/// In-memory sink for log output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Capture log events emitted on this thread until the guard is dropped.
pub fn capture_logs() -> (tracing::subscriber::DefaultGuard, LogBuffer) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (tracing::subscriber::set_default(subscriber), buffer)
}
