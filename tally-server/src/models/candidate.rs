//! Candidate number validation

use serde_json::Value;

use super::ValidationError;

/// A validated candidate for ledger acceptance.
///
/// Construction guarantees the value is a strictly positive integer; the
/// ledger checks (duplicate, predecessor) happen later against storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate(i64);

impl Candidate {
    /// Create a candidate from an already-parsed integer.
    ///
    /// # Example
    /// ```
    /// use tally_server::models::Candidate;
    ///
    /// assert!(Candidate::new(7).is_ok());
    /// assert!(Candidate::new(0).is_err());
    /// ```
    pub fn new(n: i64) -> Result<Self, ValidationError> {
        if n <= 0 {
            return Err(ValidationError::OutOfRange);
        }
        Ok(Self(n))
    }

    /// Extract and validate the `number` field of a request body.
    ///
    /// Accepts JSON integers and strings that parse as integers. Floats,
    /// booleans and null are rejected as non-integers; an absent field (or a
    /// body that is not an object) is reported as missing.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let raw = body.get("number").ok_or(ValidationError::MissingNumber)?;

        let n = match raw {
            Value::Number(num) => num.as_i64().ok_or(ValidationError::NotAnInteger)?,
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::NotAnInteger)?,
            _ => return Err(ValidationError::NotAnInteger),
        };

        Self::new(n)
    }

    /// The candidate value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// The value whose prior acceptance disqualifies this candidate.
    pub fn predecessor(&self) -> i64 {
        self.0 - 1
    }

    /// The value reported back on acceptance.
    pub fn successor(&self) -> i64 {
        self.0 + 1
    }
}
