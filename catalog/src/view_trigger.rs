//! The reveal-on-scroll state machine.
//!
//! A [`ViewTrigger`] starts out not triggered and fires once its region is
//! visible enough. It knows nothing about browsers: whatever watches the
//! viewport feeds it [`Visibility`] samples and reads back the state to pick an
//! [`AnimationVariant`].

use serde::Serialize;

use crate::config::ConfigError;

/// Relative slack for ratios reported a hair under the threshold they crossed.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriggerConfig {
    threshold: f64,
    trigger_once: bool,
}

impl TriggerConfig {
    /// Fraction of the region that must be visible before the reveal fires.
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    pub fn new(threshold: f64, trigger_once: bool) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            threshold,
            trigger_once,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            trigger_once: true,
        }
    }
}

/// One visibility sample for a watched region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    /// Fraction of the region inside the viewport, 0.0 to 1.0.
    pub ratio: f64,
}

impl Visibility {
    pub fn visible(ratio: f64) -> Self {
        Self {
            intersecting: true,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self {
            intersecting: false,
            ratio: 0.0,
        }
    }

    /// Full visibility has to be reported as exactly 1.0.
    fn reaches(&self, threshold: f64) -> bool {
        if !self.intersecting {
            return false;
        }
        if threshold >= 1.0 {
            return self.ratio >= 1.0;
        }
        self.ratio >= threshold * (1.0 - RATIO_TOLERANCE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, strum::EnumIs)]
pub enum TriggerState {
    #[default]
    NotTriggered,
    Triggered,
}

/// Which set of animation styles dependent elements should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum AnimationVariant {
    Hidden,
    Visible,
}

impl AnimationVariant {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Hidden => "reveal-hidden",
            Self::Visible => "reveal-visible",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewTrigger {
    config: TriggerConfig,
    state: TriggerState,
}

impl ViewTrigger {
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            state: TriggerState::NotTriggered,
        }
    }

    pub fn config(&self) -> TriggerConfig {
        self.config
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn is_triggered(&self) -> bool {
        self.state.is_triggered()
    }

    /// True once the trigger has fired and can never go back, so whatever
    /// feeds it can stop watching.
    pub fn is_settled(&self) -> bool {
        self.config.trigger_once && self.is_triggered()
    }

    pub fn variant(&self) -> AnimationVariant {
        match self.state {
            TriggerState::NotTriggered => AnimationVariant::Hidden,
            TriggerState::Triggered => AnimationVariant::Visible,
        }
    }

    /// Applies a visibility sample. Returns true if the state changed.
    pub fn observe(&mut self, visibility: Visibility) -> bool {
        let next = match self.state {
            TriggerState::NotTriggered if visibility.reaches(self.config.threshold) => {
                TriggerState::Triggered
            }
            TriggerState::Triggered
                if !self.config.trigger_once && !visibility.reaches(self.config.threshold) =>
            {
                TriggerState::NotTriggered
            }
            state => state,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Fires unconditionally. Used where nothing can watch the viewport.
    pub fn force(&mut self) -> bool {
        let changed = self.state.is_not_triggered();
        self.state = TriggerState::Triggered;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn once() -> ViewTrigger {
        ViewTrigger::new(TriggerConfig::default())
    }

    #[test]
    fn starts_hidden() {
        let trigger = once();
        assert!(trigger.state().is_not_triggered());
        assert!(trigger.variant().is_hidden());
        assert_eq!(trigger.variant().class(), "reveal-hidden");
    }

    #[test]
    fn fires_when_threshold_is_reached() {
        let mut trigger = once();
        assert!(!trigger.observe(Visibility::visible(0.05)));
        assert!(!trigger.is_triggered());
        assert!(trigger.observe(Visibility::visible(0.1)));
        assert!(trigger.variant().is_visible());
    }

    #[test]
    fn tolerates_rounding_just_below_threshold() {
        let mut trigger = once();
        assert!(trigger.observe(Visibility::visible(0.09995)));
    }

    #[test]
    fn slack_does_not_reach_far_below_threshold() {
        let mut trigger = once();
        assert!(!trigger.observe(Visibility::visible(0.0998)));
    }

    #[test]
    fn full_threshold_needs_full_visibility() {
        let mut trigger = ViewTrigger::new(TriggerConfig::new(1.0, true).unwrap());
        assert!(!trigger.observe(Visibility::visible(0.9991)));
        assert!(!trigger.is_triggered());
        assert!(trigger.observe(Visibility::visible(1.0)));
    }

    #[test]
    fn non_intersecting_sample_never_fires() {
        let mut trigger = ViewTrigger::new(TriggerConfig::new(0.0, true).unwrap());
        assert!(!trigger.observe(Visibility::hidden()));
        assert!(trigger.observe(Visibility::visible(0.0)));
    }

    #[test]
    fn trigger_once_never_reverts() {
        let mut trigger = once();
        trigger.observe(Visibility::visible(0.5));
        for sample in [
            Visibility::hidden(),
            Visibility::visible(0.01),
            Visibility::visible(1.0),
            Visibility::hidden(),
        ] {
            assert!(!trigger.observe(sample));
            assert!(trigger.is_triggered());
        }
        assert!(trigger.is_settled());
    }

    #[test]
    fn repeating_trigger_follows_visibility() {
        let mut trigger = ViewTrigger::new(TriggerConfig::new(0.25, false).unwrap());
        assert!(trigger.observe(Visibility::visible(0.3)));
        assert!(!trigger.is_settled());
        assert!(trigger.observe(Visibility::hidden()));
        assert!(trigger.state().is_not_triggered());
        assert!(trigger.observe(Visibility::visible(1.0)));
    }

    #[test]
    fn force_fires_once() {
        let mut trigger = once();
        assert!(trigger.force());
        assert!(!trigger.force());
        assert!(trigger.is_triggered());
    }

    #[test]
    fn threshold_must_be_a_fraction() {
        assert!(TriggerConfig::new(1.0, true).is_ok());
        assert!(matches!(
            TriggerConfig::new(1.5, true),
            Err(ConfigError::ThresholdOutOfRange(_))
        ));
        assert!(TriggerConfig::new(-0.1, true).is_err());
        assert!(TriggerConfig::new(f64::NAN, true).is_err());
    }
}
