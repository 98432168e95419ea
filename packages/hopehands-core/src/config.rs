use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Site configuration loaded from environment variables
///
/// The latencies stand in for network round trips that do not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub organization_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_address: String,
    pub login_latency: Duration,
    pub signup_latency: Duration,
    pub membership_latency: Duration,
    /// Pause before the membership page switches to the status tab
    pub status_tab_delay: Duration,
    pub contact_latency: Duration,
    /// How long the contact confirmation stays up before the form resets
    pub contact_reset_delay: Duration,
    /// Sessions never expire when unset
    pub session_ttl: Option<chrono::Duration>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            organization_name: "HopeHands".to_string(),
            contact_email: "info@hopehands.org".to_string(),
            contact_phone: "+1 (555) 123-4567".to_string(),
            contact_address: "123 Hope Street, City, State 12345".to_string(),
            login_latency: Duration::from_millis(1500),
            signup_latency: Duration::from_millis(1500),
            membership_latency: Duration::from_millis(2000),
            status_tab_delay: Duration::from_millis(2000),
            contact_latency: Duration::from_millis(1500),
            contact_reset_delay: Duration::from_millis(3000),
            session_ttl: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source, defaulting anything unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let millis = |name: &str, default: Duration| -> Result<Duration> {
            match lookup(name) {
                Some(value) => value
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .with_context(|| format!("{name} must be a valid number of milliseconds")),
                None => Ok(default),
            }
        };

        let session_ttl = match lookup("HOPEHANDS_SESSION_TTL_HOURS") {
            Some(value) => {
                let hours: i64 = value
                    .trim()
                    .parse()
                    .context("HOPEHANDS_SESSION_TTL_HOURS must be a valid number")?;
                anyhow::ensure!(hours > 0, "HOPEHANDS_SESSION_TTL_HOURS must be positive");
                let ttl = chrono::Duration::try_hours(hours)
                    .context("HOPEHANDS_SESSION_TTL_HOURS is out of range")?;
                Some(ttl)
            }
            None => None,
        };

        Ok(Self {
            organization_name: lookup("HOPEHANDS_ORG_NAME").unwrap_or(defaults.organization_name),
            contact_email: lookup("HOPEHANDS_CONTACT_EMAIL").unwrap_or(defaults.contact_email),
            contact_phone: lookup("HOPEHANDS_CONTACT_PHONE").unwrap_or(defaults.contact_phone),
            contact_address: lookup("HOPEHANDS_CONTACT_ADDRESS")
                .unwrap_or(defaults.contact_address),
            login_latency: millis("HOPEHANDS_LOGIN_LATENCY_MS", defaults.login_latency)?,
            signup_latency: millis("HOPEHANDS_SIGNUP_LATENCY_MS", defaults.signup_latency)?,
            membership_latency: millis(
                "HOPEHANDS_MEMBERSHIP_LATENCY_MS",
                defaults.membership_latency,
            )?,
            status_tab_delay: millis("HOPEHANDS_STATUS_TAB_DELAY_MS", defaults.status_tab_delay)?,
            contact_latency: millis("HOPEHANDS_CONTACT_LATENCY_MS", defaults.contact_latency)?,
            contact_reset_delay: millis(
                "HOPEHANDS_CONTACT_RESET_MS",
                defaults.contact_reset_delay,
            )?,
            session_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.login_latency, Duration::from_millis(1500));
        assert_eq!(config.membership_latency, Duration::from_millis(2000));
        assert!(config.session_ttl.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("HOPEHANDS_ORG_NAME", "Helping Hands"),
            ("HOPEHANDS_LOGIN_LATENCY_MS", "0"),
            ("HOPEHANDS_SESSION_TTL_HOURS", "24"),
        ]))
        .unwrap();

        assert_eq!(config.organization_name, "Helping Hands");
        assert_eq!(config.login_latency, Duration::ZERO);
        assert_eq!(config.session_ttl, Some(chrono::Duration::hours(24)));
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        let err = SiteConfig::from_lookup(lookup_from(&[("HOPEHANDS_CONTACT_RESET_MS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("HOPEHANDS_CONTACT_RESET_MS"));

        assert!(
            SiteConfig::from_lookup(lookup_from(&[("HOPEHANDS_SESSION_TTL_HOURS", "0")])).is_err()
        );

        let err = SiteConfig::from_lookup(lookup_from(&[(
            "HOPEHANDS_SESSION_TTL_HOURS",
            "9223372036854775807",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
