//! Tunables for one confetti run.

use serde::Deserialize;

use crate::core::time::{Millis, TICK_INTERVAL_MS};

/// Confetti configuration
/// Ranges are `(min, max)` pairs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    pub particle_count: usize,
    pub duration_ms: Millis,
    pub tick_interval_ms: Millis,
    /// Spawn area never shrinks below this, whatever the viewport
    pub min_width: f32,
    pub min_height: f32,
    /// Highest spawn row, above the top edge of the viewport
    pub spawn_top: f32,
    /// Lowest spawn row as a fraction of the spawn area height (exclusive)
    pub spawn_depth: f32,
    pub size: (u32, u32),
    pub fall_speed: (f32, f32),
    pub drift_speed: (f32, f32),
    pub rotation_speed: (f32, f32),
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            duration_ms: 2000,
            tick_interval_ms: TICK_INTERVAL_MS,
            min_width: 700.0,
            min_height: 450.0,
            spawn_top: -200.0,
            spawn_depth: 0.3,
            size: (6, 14),
            fall_speed: (2.0, 8.0),
            drift_speed: (-2.0, 2.0),
            rotation_speed: (-15.0, 15.0),
        }
    }
}

/// Error type for confetti configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfettiConfigError {
    #[error("tick_interval_ms must be greater than zero")]
    ZeroTickInterval,
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} range ({min}, {max}) is reversed")]
    ReversedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
}

impl ConfettiConfig {
    /// Check that every quantity is finite and every range ordered, so that
    /// spawning can never fail.
    pub fn validate(&self) -> Result<(), ConfettiConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfettiConfigError::ZeroTickInterval);
        }
        for (name, value) in [
            ("min_width", self.min_width),
            ("min_height", self.min_height),
            ("spawn_top", self.spawn_top),
            ("spawn_depth", self.spawn_depth),
        ] {
            if !value.is_finite() {
                return Err(ConfettiConfigError::NotFinite { name, value });
            }
        }
        for (name, value) in [("min_width", self.min_width), ("min_height", self.min_height)] {
            if value < 0.0 {
                return Err(ConfettiConfigError::Negative { name, value });
            }
        }
        if self.size.0 > self.size.1 {
            return Err(ConfettiConfigError::ReversedRange {
                name: "size",
                min: self.size.0 as f32,
                max: self.size.1 as f32,
            });
        }
        for (name, (min, max)) in [
            ("fall_speed", self.fall_speed),
            ("drift_speed", self.drift_speed),
            ("rotation_speed", self.rotation_speed),
        ] {
            for value in [min, max] {
                if !value.is_finite() {
                    return Err(ConfettiConfigError::NotFinite { name, value });
                }
            }
            if min > max {
                return Err(ConfettiConfigError::ReversedRange { name, min, max });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ConfettiConfig::default();
        assert_eq!(config.particle_count, 100);
        assert_eq!(config.duration_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reversed_range_rejected() {
        let config = ConfettiConfig {
            fall_speed: (8.0, 2.0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfettiConfigError::ReversedRange {
                name: "fall_speed",
                min: 8.0,
                max: 2.0,
            })
        );
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = ConfettiConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfettiConfigError::ZeroTickInterval));
    }

    #[test]
    fn test_infinite_bounds_rejected() {
        let config = ConfettiConfig {
            fall_speed: (2.0, f32::INFINITY),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfettiConfigError::NotFinite { name: "fall_speed", .. })
        ));

        let config = ConfettiConfig {
            spawn_top: f32::NEG_INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfettiConfigError::NotFinite { name: "spawn_top", .. })
        ));
    }

    #[test]
    fn test_nan_and_negative_rejected() {
        let config = ConfettiConfig {
            rotation_speed: (f32::NAN, 15.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfettiConfigError::NotFinite { name: "rotation_speed", .. })
        ));

        let config = ConfettiConfig {
            min_height: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfettiConfigError::Negative { name: "min_height", .. })
        ));
    }
}
