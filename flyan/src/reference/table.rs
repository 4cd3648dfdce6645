//! Code lookup tables.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::domain::{CurrencyCode, IataCode};

use super::error::ReferenceError;

/// File name of the currency table inside a reference data directory.
pub const CURRENCIES_FILE: &str = "currencies.json";

/// File name of the airport table inside a reference data directory.
pub const STATIONS_FILE: &str = "stations.json";

/// A read-only table of codes, each with the JSON details the source file
/// attached to it.
///
/// Keys are stored uppercase.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    entries: HashMap<String, Value>,
}

impl CodeTable {
    /// Parse a JSON object keyed by code.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Value> = serde_json::from_str(json)?;
        Ok(Self {
            entries: raw
                .into_iter()
                .map(|(code, details)| (code.trim().to_uppercase(), details))
                .collect(),
        })
    }

    /// Build a table holding just the given codes, with no details.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: codes
                .into_iter()
                .map(|code| (code.as_ref().trim().to_uppercase(), Value::Null))
                .collect(),
        }
    }

    /// Whether `code` is in the table. Lookup is case-insensitive.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(&code.to_uppercase())
    }

    /// The details recorded for `code`, if any.
    pub fn get(&self, code: &str) -> Option<&Value> {
        self.entries.get(&code.to_uppercase())
    }

    /// Iterate over all codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two reference tables every search depends on.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    currencies: CodeTable,
    airports: CodeTable,
}

impl ReferenceData {
    /// Build reference data from already-loaded tables.
    pub fn new(currencies: CodeTable, airports: CodeTable) -> Self {
        Self {
            currencies,
            airports,
        }
    }

    /// Load `currencies.json` and `stations.json` from a directory.
    ///
    /// Fails if either file is missing, is not a JSON object, or is empty.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let dir = dir.as_ref();
        let currencies = read_table(&dir.join(CURRENCIES_FILE), "currency")?;
        let airports = read_table(&dir.join(STATIONS_FILE), "airport")?;
        Ok(Self::new(currencies, airports))
    }

    /// Parse both tables from JSON text.
    pub fn from_json(currencies: &str, stations: &str) -> Result<Self, ReferenceError> {
        Ok(Self::new(
            parse_table(currencies, "currency")?,
            parse_table(stations, "airport")?,
        ))
    }

    /// Whether the airport table knows this code.
    pub fn has_airport(&self, code: &IataCode) -> bool {
        self.airports.contains(code.as_str())
    }

    /// Whether the currency table knows this code.
    pub fn has_currency(&self, code: &CurrencyCode) -> bool {
        self.currencies.contains(code.as_str())
    }

    pub fn airports(&self) -> &CodeTable {
        &self.airports
    }

    pub fn currencies(&self) -> &CodeTable {
        &self.currencies
    }
}

fn read_table(path: &Path, table: &'static str) -> Result<CodeTable, ReferenceError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&contents, table)
}

fn parse_table(json: &str, table: &'static str) -> Result<CodeTable, ReferenceError> {
    let parsed =
        CodeTable::from_json_str(json).map_err(|source| ReferenceError::Json { table, source })?;

    if parsed.is_empty() {
        return Err(ReferenceError::Empty { table });
    }

    Ok(parsed)
}
