//! Per-effect tunables, deserializable from TOML tables

use serde::Deserialize;
use thiserror::Error;

/// A tunable that fails validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{section}.{field}: {reason}")]
    Invalid {
        section: &'static str,
        field: &'static str,
        reason: &'static str,
    },
}

fn invalid(section: &'static str, field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid {
        section,
        field,
        reason,
    }
}

/// Ambient heart-field tunables
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Pool capacity
    pub max_hearts: usize,
    /// Seconds between ambient spawns
    pub spawn_interval: f32,
    /// Spawn size range, logical px
    pub size_min: f32,
    pub size_max: f32,
    /// Upward drift in percent-of-viewport per second
    pub rise_speed: f32,
    /// Opacity lost per second
    pub fade_rate: f32,
    /// Degrees per second
    pub spin_rate: f32,
    /// Straight-alpha RGBA in [0, 1]
    pub tint: [f32; 4],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_hearts: 400,
            spawn_interval: 0.5,
            size_min: 15.0,
            size_max: 45.0,
            rise_speed: 4.0,
            fade_rate: 0.1,
            spin_rate: 10.0,
            tint: [217.0 / 255.0, 143.0 / 255.0, 143.0 / 255.0, 0.7],
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hearts == 0 {
            return Err(invalid("field", "max_hearts", "must be at least 1"));
        }
        if !(self.spawn_interval > 0.0) {
            return Err(invalid("field", "spawn_interval", "must be positive"));
        }
        if !(self.size_min > 0.0) {
            return Err(invalid("field", "size_min", "must be positive"));
        }
        if self.size_max < self.size_min {
            return Err(invalid("field", "size_max", "must be >= size_min"));
        }
        // Hearts must fade out or the pool never drains
        if !(self.fade_rate > 0.0) {
            return Err(invalid("field", "fade_rate", "must be positive"));
        }
        if !tint_in_range(self.tint) {
            return Err(invalid("field", "tint", "components must be in [0, 1]"));
        }
        Ok(())
    }
}

/// Click-burst tunables
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Pool capacity
    pub max_hearts: usize,
    /// Hearts per click
    pub burst_count: usize,
    /// Uniform ring-angle jitter half-width, radians
    pub angle_jitter: f32,
    /// Travel distance range, logical px
    pub distance_min: f32,
    pub distance_max: f32,
    /// Lifetime range, seconds
    pub duration_min: f32,
    pub duration_max: f32,
    /// Initial scale range
    pub scale_min: f32,
    pub scale_max: f32,
    /// Quad size at scale 1.0, logical px
    pub base_size: f32,
    /// Relative target-rotation half-range, degrees
    pub spin_range: f32,
    /// Straight-alpha RGBA in [0, 1]
    pub tint: [f32; 4],
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            max_hearts: 300,
            burst_count: 12,
            angle_jitter: 0.25,
            distance_min: 100.0,
            distance_max: 200.0,
            duration_min: 1.8,
            duration_max: 2.5,
            scale_min: 0.5,
            scale_max: 1.5,
            base_size: 36.0,
            spin_range: 360.0,
            tint: [179.0 / 255.0, 81.0 / 255.0, 81.0 / 255.0, 1.0],
        }
    }
}

impl BurstConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hearts == 0 {
            return Err(invalid("burst", "max_hearts", "must be at least 1"));
        }
        if self.burst_count == 0 {
            return Err(invalid("burst", "burst_count", "must be at least 1"));
        }
        if self.angle_jitter < 0.0 {
            return Err(invalid("burst", "angle_jitter", "must be non-negative"));
        }
        if self.distance_min < 0.0 {
            return Err(invalid("burst", "distance_min", "must be non-negative"));
        }
        if self.distance_max < self.distance_min {
            return Err(invalid("burst", "distance_max", "must be >= distance_min"));
        }
        if !(self.duration_min > 0.0) {
            return Err(invalid("burst", "duration_min", "must be positive"));
        }
        if self.duration_max < self.duration_min {
            return Err(invalid("burst", "duration_max", "must be >= duration_min"));
        }
        if !(self.scale_min > 0.0) {
            return Err(invalid("burst", "scale_min", "must be positive"));
        }
        if self.scale_max < self.scale_min {
            return Err(invalid("burst", "scale_max", "must be >= scale_min"));
        }
        if !(self.base_size > 0.0) {
            return Err(invalid("burst", "base_size", "must be positive"));
        }
        if self.spin_range < 0.0 {
            return Err(invalid("burst", "spin_range", "must be non-negative"));
        }
        if !tint_in_range(self.tint) {
            return Err(invalid("burst", "tint", "components must be in [0, 1]"));
        }
        Ok(())
    }
}

fn tint_in_range(tint: [f32; 4]) -> bool {
    tint.iter().all(|c| (0.0..=1.0).contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        FieldConfig::default().validate().unwrap();
        BurstConfig::default().validate().unwrap();
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let config: FieldConfig = toml::from_str(
            r#"
max_hearts = 100
spawn_interval = 0.25
"#,
        )
        .unwrap();
        assert_eq!(config.max_hearts, 100);
        assert!((config.spawn_interval - 0.25).abs() < 1e-6);
        // Untouched fields keep their defaults
        assert!((config.rise_speed - 4.0).abs() < 1e-6);
        assert!((config.tint[3] - 0.7).abs() < 1e-6);
    }

    #[test]
    fn parse_burst_toml() {
        let config: BurstConfig = toml::from_str(
            r#"
burst_count = 24
distance_min = 50
distance_max = 80
tint = [1.0, 0.0, 0.0, 1.0]
"#,
        )
        .unwrap();
        assert_eq!(config.burst_count, 24);
        assert!((config.distance_min - 50.0).abs() < 1e-6);
        assert!((config.tint[0] - 1.0).abs() < 1e-6);
        config.validate().unwrap();
    }

    #[test]
    fn rejects_zero_capacity() {
        let config = FieldConfig {
            max_hearts: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_ranges() {
        let config = BurstConfig {
            duration_min: 3.0,
            duration_max: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FieldConfig {
            size_min: 50.0,
            size_max: 10.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_fading_field() {
        let config = FieldConfig {
            fade_rate: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_tint() {
        let config = BurstConfig {
            tint: [1.2, 0.0, 0.0, 1.0],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
