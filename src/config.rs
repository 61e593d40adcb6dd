//! Configuration for the playground loop.

use crate::scene::Scene;
use std::fmt;
use std::time::Duration;
use unicode_width::UnicodeWidthChar;

/// Configuration for [`crate::Playground`].
#[derive(Debug, Clone)]
pub struct PlaygroundConfig {
    /// Sleep between ticks. Caps the frame rate.
    pub frame_delay: Duration,
    /// Time between marker spawns.
    pub spawn_interval: Duration,
    /// Glyphs for the actor and markers.
    pub scene: Scene,
    /// Fixed seed for reproducible runs. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(100),
            spawn_interval: Duration::from_secs(5),
            scene: Scene::default(),
            seed: None,
        }
    }
}

impl PlaygroundConfig {
    /// Set the per-tick delay.
    #[must_use]
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Set the spawn interval.
    #[must_use]
    pub fn with_spawn_interval(mut self, interval: Duration) -> Self {
        self.spawn_interval = interval;
        self
    }

    /// Set the PRNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the glyphs.
    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Check the settings can drive the loop.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero frame delay or spawn interval, or for a
    /// glyph that does not occupy exactly one terminal column (erasing a
    /// cell writes a single space).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_delay.is_zero() {
            return Err(ConfigError::ZeroDuration("frame delay"));
        }
        if self.spawn_interval.is_zero() {
            return Err(ConfigError::ZeroDuration("spawn interval"));
        }
        for glyph in [self.scene.actor, self.scene.marker] {
            if glyph.width() != Some(1) {
                return Err(ConfigError::Glyph(glyph));
            }
        }
        Ok(())
    }
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A duration that must be positive was zero.
    ZeroDuration(&'static str),
    /// A glyph that is not a single column wide.
    Glyph(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDuration(what) => write!(f, "{what} must be greater than zero"),
            Self::Glyph(c) => write!(f, "glyph {c:?} must be exactly one column wide"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.frame_delay, Duration::from_millis(100));
        assert_eq!(config.spawn_interval, Duration::from_secs(5));
        assert_eq!(config.scene.actor, '@');
        assert_eq!(config.scene.marker, '*');
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_durations_rejected() {
        let config = PlaygroundConfig::default().with_frame_delay(Duration::ZERO);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration("frame delay"))
        );

        let config = PlaygroundConfig::default().with_spawn_interval(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_wide_glyph_rejected() {
        let config = PlaygroundConfig::default().with_scene(Scene {
            actor: '日',
            marker: '*',
        });
        assert_eq!(config.validate(), Err(ConfigError::Glyph('日')));
    }
}
