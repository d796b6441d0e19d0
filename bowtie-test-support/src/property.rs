//! Proptest run profile shared by the property suites.
//!
//! Case counts default per suite and can be raised or lowered for a whole run
//! through one environment variable.

use std::env;

use thiserror::Error;

/// Environment variable overriding the proptest case count.
pub const PROPTEST_CASES_ENV_KEY: &str = "BOWTIE_PROPTEST_CASES";

/// Reasons a case-count override is ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseOverrideError {
    /// The value was not an unsigned integer.
    #[error("parse error: {0}")]
    Parse(String),
    /// The value was zero.
    #[error("cases must be > 0")]
    Zero,
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
}

impl ProptestRunProfile {
    /// Loads a profile, falling back to `default_cases` when the override is
    /// absent or invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use bowtie_test_support::property::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let cases = match env::var(PROPTEST_CASES_ENV_KEY) {
            Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
                tracing::warn!(
                    env = PROPTEST_CASES_ENV_KEY,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test case override; using default",
                );
                default_cases
            }),
            Err(_) => default_cases,
        };
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }
}

/// Parses a case-count override.
///
/// # Errors
/// Returns [`CaseOverrideError`] for non-numeric or zero values.
pub fn parse_cases(raw: &str) -> Result<u32, CaseOverrideError> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| CaseOverrideError::Parse(error.to_string()))?;
    if parsed == 0 {
        return Err(CaseOverrideError::Zero);
    }
    Ok(parsed)
}
