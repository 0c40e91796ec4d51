//! Property-test run profile parsing for CI and local overrides.
//!
//! Centralizes environment-driven proptest tuning so every suite in the
//! workspace interprets the same variables the same way. Unusable overrides
//! are logged and dropped; a misspelt variable must never fail a suite.

use std::env;

/// Environment variable controlling proptest case counts.
pub const SATLINK_PBT_CASES_ENV_KEY: &str = "SATLINK_PBT_CASES";
/// Environment variable controlling proptest process forking.
pub const SATLINK_PBT_FORK_ENV_KEY: &str = "SATLINK_PBT_FORK";

/// Spellings that switch a boolean override on.
const TRUTHY: &[&str] = &["1", "true", "yes", "on"];
/// Spellings that switch a boolean override off.
const FALSY: &[&str] = &["0", "false", "no", "off"];

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

/// Raw environment overrides captured before interpretation.
#[derive(Clone, Debug, Default)]
struct RawOverrides {
    cases: Option<String>,
    fork: Option<String>,
}

impl RawOverrides {
    fn from_process_env() -> Self {
        Self {
            cases: env::var(SATLINK_PBT_CASES_ENV_KEY).ok(),
            fork: env::var(SATLINK_PBT_FORK_ENV_KEY).ok(),
        }
    }
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use satlink_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::resolve(default_cases, default_fork, &RawOverrides::from_process_env())
    }

    fn resolve(default_cases: u32, default_fork: bool, raw: &RawOverrides) -> Self {
        let cases = interpret(
            raw.cases.as_deref(),
            SATLINK_PBT_CASES_ENV_KEY,
            parse_case_count,
        )
        .unwrap_or(default_cases);
        let fork = interpret(raw.fork.as_deref(), SATLINK_PBT_FORK_ENV_KEY, parse_switch)
            .unwrap_or(default_fork);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

/// Applies a parser to an override, logging and discarding values it does
/// not accept.
fn interpret<T>(raw: Option<&str>, key: &'static str, parser: fn(&str) -> Option<T>) -> Option<T> {
    let raw = raw?;
    let parsed = parser(raw.trim());
    if parsed.is_none() {
        tracing::warn!(
            env = key,
            raw = %raw,
            "unusable property-test override, keeping the default",
        );
    }
    parsed
}

/// A case-count override must be a positive integer.
fn parse_case_count(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|&cases| cases > 0)
}

/// A fork override must be one of the recognised switch spellings.
fn parse_switch(raw: &str) -> Option<bool> {
    let normalized = raw.to_ascii_lowercase();
    if TRUTHY.contains(&normalized.as_str()) {
        return Some(true);
    }
    FALSY.contains(&normalized.as_str()).then_some(false)
}
