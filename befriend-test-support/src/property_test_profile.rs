//! Environment-driven tuning for property-test suites.
//!
//! Local runs keep the suite defaults; CI raises the case count through
//! `PROGTEST_CASES` and may isolate cases with `BEFRIEND_PBT_FORK`.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const BEFRIEND_PBT_FORK_ENV_KEY: &str = "BEFRIEND_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads overrides from the environment, keeping the defaults for unset or
    /// malformed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use befriend_test_support::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_override(PROGTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: read_override(BEFRIEND_PBT_FORK_ENV_KEY, parse_bool).unwrap_or(default_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn read_override<T>(key: &'static str, parser: fn(&str) -> Result<T, String>) -> Option<T> {
    let raw = env::var(key).ok()?;
    match parser(&raw) {
        Ok(value) => Some(value),
        Err(reason) => {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason = %reason,
                "ignoring invalid property-test override",
            );
            None
        }
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
