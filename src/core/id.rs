use crate::error::{AccessTicketError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the random part of a generated reference code
pub const REFERENCE_SUFFIX_LEN: usize = 7;

const STAFF_ID_LEN: usize = 9;

static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Z0-9]{0,7}-[A-Z0-9]{3,16}$").expect("reference pattern is valid")
});

static PREFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9]{0,7}$").expect("prefix pattern is valid"));

fn base36(mut value: u128, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(BASE36[(value % 36) as usize] as char);
        value /= 36;
    }
    out
}

/// Internal identifier of a ticket
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Generates a fresh random id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an id exactly as stored; older snapshots carry non-UUID ids such as `mock-1`
    pub(crate) fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for display
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-facing ticket code such as `JW-4K9QZ2M`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCode(String);

impl ReferenceCode {
    /// Generates a random code under `prefix`
    pub fn generate(prefix: &str) -> Result<Self> {
        Self::validate_prefix(prefix)?;
        let suffix = base36(Uuid::new_v4().as_u128(), REFERENCE_SUFFIX_LEN);
        Ok(Self(format!("{prefix}-{suffix}")))
    }

    /// Parses user input, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase();
        if REFERENCE_PATTERN.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(AccessTicketError::InvalidReference(s.to_string()))
        }
    }

    pub fn validate_prefix(prefix: &str) -> Result<()> {
        if PREFIX_PATTERN.is_match(prefix) {
            Ok(())
        } else {
            Err(AccessTicketError::InvalidReference(format!(
                "prefix '{prefix}' must be 1-8 uppercase letters or digits starting with a letter"
            )))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an additional staff entry, unique within its ticket
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    #[must_use]
    pub fn new() -> Self {
        Self(base36(Uuid::new_v4().as_u128(), STAFF_ID_LEN).to_ascii_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StaffId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for StaffId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
