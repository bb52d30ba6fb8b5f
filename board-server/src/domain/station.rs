//! Station identifier and station types.

use std::fmt;

/// Error returned when parsing an invalid station short code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station short code: {reason}")]
pub struct InvalidShortCode {
    reason: &'static str,
}

/// Maximum length of a station short code.
///
/// Digitraffic codes are typically 2-4 characters ("HKI", "TPE", "PSL");
/// the longest observed in the station metadata is 6.
const MAX_LEN: usize = 8;

/// A validated station short code.
///
/// Short codes are the rata.digitraffic.fi compact station identifiers:
/// non-empty uppercase ASCII alphanumeric strings (e.g., "HKI" for
/// Helsinki). This type guarantees that any `ShortCode` value is valid
/// by construction.
///
/// # Examples
///
/// ```
/// use board_server::domain::ShortCode;
///
/// let hki = ShortCode::parse("HKI").unwrap();
/// assert_eq!(hki.as_str(), "HKI");
///
/// // Lowercase is rejected
/// assert!(ShortCode::parse("hki").is_err());
///
/// // Empty is rejected
/// assert!(ShortCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Parse a short code from a string.
    ///
    /// The input must be 1 to 8 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidShortCode> {
        if s.is_empty() {
            return Err(InvalidShortCode {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidShortCode {
                reason: "too long (max 8 characters)",
            });
        }

        for b in s.bytes() {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidShortCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(ShortCode(s.to_string()))
    }

    /// Parse a short code, trimming and uppercasing the input first.
    ///
    /// Useful for user-supplied input where case is not significant.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidShortCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShortCode({})", self.0)
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A passenger station.
///
/// Immutable once loaded into the station index. `short_code` is unique
/// across the loaded set (enforced at load time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Display name, e.g. "Helsinki asema".
    pub name: String,

    /// Unique station identifier, e.g. "HKI".
    pub short_code: ShortCode,
}
