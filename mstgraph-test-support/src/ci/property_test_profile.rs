//! Environment-driven tuning for property-based test suites.
//!
//! CI raises case counts and enables forking for nightly runs; local runs
//! keep each suite's own default. Malformed overrides fall back to the
//! default with a warning rather than failing the suite.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "MSTGRAPH_PBT_CASES";
/// Environment variable enabling forked execution of property cases.
pub const FORK_ENV_KEY: &str = "MSTGRAPH_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, falling back to the given
    /// defaults for unset or malformed values.
    ///
    /// # Examples
    /// ```
    /// use mstgraph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() >= 1);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, String>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(raw.trim()).unwrap_or_else(|reason| {
        tracing::warn!(env = key, raw = %raw, %reason, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.parse::<u32>() {
        Ok(0) => Err("case count must be at least 1".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("not a case count: {error}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected true/false, yes/no, on/off, or 1/0".to_owned()),
    }
}
