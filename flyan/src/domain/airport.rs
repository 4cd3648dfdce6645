//! Airport types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid IATA airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code {input:?}: {reason}")]
pub struct InvalidIataCode {
    input: String,
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. Any `IataCode` value is
/// valid by construction; whether the airport actually exists is a question
/// for the airport reference table.
///
/// # Examples
///
/// ```
/// use flyan::domain::IataCode;
///
/// let dub = IataCode::parse("DUB").unwrap();
/// assert_eq!(dub.as_str(), "DUB");
///
/// // Strict parsing rejects lowercase, normalizing accepts it
/// assert!(IataCode::parse("dub").is_err());
/// assert_eq!(IataCode::normalize(" dub ").unwrap(), dub);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IataCode([u8; 3]);

impl IataCode {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIataCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIataCode {
                input: s.to_string(),
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidIataCode {
                input: s.to_string(),
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(IataCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse user input: surrounding whitespace is dropped and letters are
    /// uppercased before strict parsing.
    pub fn normalize(s: &str) -> Result<Self, InvalidIataCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase bytes are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IataCode({})", self.as_str())
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for IataCode {
    type Error = InvalidIataCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IataCode> for String {
    fn from(code: IataCode) -> Self {
        code.as_str().to_string()
    }
}

/// An airport as described by a fare response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub country_name: String,
    pub iata_code: IataCode,
    pub name: String,
    pub seo_name: String,
    pub city_name: String,
    pub city_code: String,
    pub city_country_code: String,
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.iata_code)
    }
}
