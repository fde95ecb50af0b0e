//! Version fault profiles.
//!
//! A deployed version is mapped to the error rate and latency it should
//! simulate. Only exact matches in [`PROFILE_TABLE`] deviate from
//! [`FaultProfile::DEFAULT`].

use std::time::Duration;

/// Simulated reliability and cost of one application version.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultProfile {
    /// Probability in `[0, 1]` that `/health` and `/work` fail.
    pub error_rate: f64,
    /// Delay applied to every `/work` request, in milliseconds.
    pub latency_ms: u64,
}

impl FaultProfile {
    /// Profile for any version not listed in [`PROFILE_TABLE`].
    pub const DEFAULT: FaultProfile = FaultProfile {
        error_rate: 0.0,
        latency_ms: 50,
    };

    /// Look up the profile for `version`. Never fails.
    pub fn for_version(version: &str) -> FaultProfile {
        PROFILE_TABLE
            .iter()
            .find(|(v, _)| *v == version)
            .map(|(_, profile)| *profile)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for FaultProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Versions with non-default behavior. Each entry overrides one field only.
pub const PROFILE_TABLE: &[(&str, FaultProfile)] = &[
    // Flaky release: 30% of health checks and work requests fail.
    (
        "v1.2.0",
        FaultProfile {
            error_rate: 0.3,
            ..FaultProfile::DEFAULT
        },
    ),
    // Slow release: every work request takes two seconds.
    (
        "v1.3.0",
        FaultProfile {
            latency_ms: 2000,
            ..FaultProfile::DEFAULT
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile() {
        let p = FaultProfile::default();
        assert_eq!(p.error_rate, 0.0);
        assert_eq!(p.latency_ms, 50);
    }

    #[test]
    fn flaky_version_keeps_default_latency() {
        let p = FaultProfile::for_version("v1.2.0");
        assert_eq!(p.error_rate, 0.3);
        assert_eq!(p.latency_ms, 50);
    }

    #[test]
    fn slow_version_keeps_default_error_rate() {
        let p = FaultProfile::for_version("v1.3.0");
        assert_eq!(p.error_rate, 0.0);
        assert_eq!(p.latency_ms, 2000);
        assert_eq!(p.latency(), Duration::from_secs(2));
    }

    #[test]
    fn unknown_versions_get_default() {
        for v in ["v1.0.0", "v1.1.0", "", "V1.2.0", " v1.2.0", "v1.2.0 ", "v1.3", "latest"] {
            assert_eq!(FaultProfile::for_version(v), FaultProfile::DEFAULT, "version {v:?}");
        }
    }

    #[test]
    fn table_has_unique_versions() {
        for (i, (a, _)) in PROFILE_TABLE.iter().enumerate() {
            assert!(
                PROFILE_TABLE[i + 1..].iter().all(|(b, _)| a != b),
                "duplicate entry for {a}"
            );
        }
    }

    #[test]
    fn table_error_rates_are_probabilities() {
        for (v, p) in PROFILE_TABLE {
            assert!((0.0..=1.0).contains(&p.error_rate), "{v} has rate {}", p.error_rate);
        }
    }
}
