//! Per-attempt transaction references.

use std::fmt;

use chrono::Utc;
use uuid::Uuid;

const REFERENCE_PREFIX: &str = "SM";

/// Correlation token sent to a gateway for one checkout attempt.
///
/// Format: `SM-{unix millis}-{8 hex chars}`. The random suffix keeps two
/// attempts in the same millisecond distinct. It is not a dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionReference(String);

impl TransactionReference {
    /// Generates a fresh reference from the current time plus 32 random bits.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let entropy = Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}-{}", REFERENCE_PREFIX, millis, &entropy[..8]))
    }

    /// Wraps an existing reference, e.g. a fixed value in tests.
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_reference_has_expected_shape() {
        let reference = TransactionReference::generate();
        let parts: Vec<&str> = reference.as_str().split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "SM");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn rapid_generation_does_not_collide() {
        let references: HashSet<TransactionReference> =
            (0..1_000).map(|_| TransactionReference::generate()).collect();
        assert_eq!(references.len(), 1_000);
    }

    #[test]
    fn from_string_round_trips_display() {
        let reference = TransactionReference::from_string("SM-1700000000000-abcdef01");
        assert_eq!(reference.to_string(), "SM-1700000000000-abcdef01");
    }
}
