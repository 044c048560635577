//! Site settings read from the environment.

use std::env;

use crate::view_trigger::TriggerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reveal threshold must be between 0 and 1, got {0}")]
    ThresholdOutOfRange(f64),
    #[error("{key} is not a number: {value:?}")]
    NotANumber { key: &'static str, value: String },
    #[error("{key} is not a boolean: {value:?}")]
    NotABool { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SiteConfig {
    /// How reveal-on-scroll sections decide they have been seen.
    pub reveal: TriggerConfig,
}

impl SiteConfig {
    pub const REVEAL_THRESHOLD: &'static str = "SPICE_REVEAL_THRESHOLD";
    pub const REVEAL_ONCE: &'static str = "SPICE_REVEAL_ONCE";

    /// Reads the process environment.
    ///
    /// # Environment Variables
    /// - `SPICE_REVEAL_THRESHOLD`: fraction of a section that must be on
    ///   screen before it animates in. Defaults to 0.1.
    /// - `SPICE_REVEAL_ONCE`: "true"/"1" or "false"/"0", case-insensitive.
    ///   When false, sections hide again after scrolling out. Defaults to true.
    ///
    /// Unset variables fall back to the defaults. Browsers have no process
    /// environment, so a web build always gets the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`SiteConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let threshold = match lookup(Self::REVEAL_THRESHOLD) {
            Some(value) => value
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::NotANumber {
                    key: Self::REVEAL_THRESHOLD,
                    value,
                })?,
            None => TriggerConfig::DEFAULT_THRESHOLD,
        };
        let trigger_once = match lookup(Self::REVEAL_ONCE) {
            Some(value) => parse_bool(Self::REVEAL_ONCE, value)?,
            None => true,
        };

        Ok(Self {
            reveal: TriggerConfig::new(threshold, trigger_once)?,
        })
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        Ok(false)
    } else {
        Err(ConfigError::NotABool { key, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.reveal.threshold(), 0.1);
        assert!(config.reveal.trigger_once());
    }

    #[test]
    fn reads_both_variables() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("SPICE_REVEAL_THRESHOLD", " 0.5 "),
            ("SPICE_REVEAL_ONCE", "FALSE"),
        ]))
        .unwrap();
        assert_eq!(config.reveal.threshold(), 0.5);
        assert!(!config.reveal.trigger_once());
    }

    #[test]
    fn numeric_booleans() {
        let on = SiteConfig::from_lookup(lookup(&[("SPICE_REVEAL_ONCE", "1")])).unwrap();
        let off = SiteConfig::from_lookup(lookup(&[("SPICE_REVEAL_ONCE", "0")])).unwrap();
        assert!(on.reveal.trigger_once());
        assert!(!off.reveal.trigger_once());
    }

    #[test]
    fn rejects_garbage() {
        let err = SiteConfig::from_lookup(lookup(&[("SPICE_REVEAL_THRESHOLD", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::NotANumber { .. }));

        let err = SiteConfig::from_lookup(lookup(&[("SPICE_REVEAL_ONCE", "maybe")])).unwrap_err();
        assert_eq!(err.to_string(), "SPICE_REVEAL_ONCE is not a boolean: \"maybe\"");
    }

    #[test]
    fn rejects_threshold_outside_unit_range() {
        let err = SiteConfig::from_lookup(lookup(&[("SPICE_REVEAL_THRESHOLD", "2")])).unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOutOfRange(t) if t == 2.0));
    }
}
