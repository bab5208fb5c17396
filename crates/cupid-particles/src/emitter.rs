//! Heart emitters: ambient interval spawning and pointer-click bursts

use crate::config::{BurstConfig, FieldConfig};
use crate::particle::{BurstHeart, FieldHeart, Pool};
use crate::rand::ParticleRng;

/// Spawns one ambient heart per elapsed interval.
///
/// No catch-up: a poll after a long gap spawns exactly one heart and
/// re-anchors the deadline to the poll time, so a backgrounded host does
/// not flood the pool on resume. The first poll always fires.
pub struct FieldEmitter {
    last_spawn: Option<f64>,
}

impl FieldEmitter {
    pub fn new() -> Self {
        Self { last_spawn: None }
    }

    /// Deadline of the next spawn on the shared timebase, for host timer
    /// scheduling. Polls at or after it will spawn.
    pub fn next_due(&self, config: &FieldConfig) -> f64 {
        match self.last_spawn {
            Some(t) => t + config.spawn_interval as f64,
            None => 0.0,
        }
    }

    /// Spawn one heart if the interval has elapsed. Returns whether a
    /// heart was spawned.
    pub fn poll(
        &mut self,
        pool: &mut Pool<FieldHeart>,
        config: &FieldConfig,
        rng: &mut ParticleRng,
        now: f64,
    ) -> bool {
        if let Some(last) = self.last_spawn {
            if now - last < config.spawn_interval as f64 {
                return false;
            }
        }
        self.last_spawn = Some(now);
        pool.spawn(
            FieldHeart {
                x: rng.range(0.0, 100.0),
                y: rng.range(0.0, 100.0),
                size: rng.range(config.size_min, config.size_max),
                opacity: 1.0,
                rotation: rng.range(0.0, 360.0),
            },
            now,
        );
        true
    }
}

impl Default for FieldEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a ring of burst hearts around `origin` (logical px, y-down).
/// Hearts share the click origin and timestamp; angles walk the full
/// circle with a small uniform jitter per heart.
pub fn emit_burst(
    pool: &mut Pool<BurstHeart>,
    config: &BurstConfig,
    rng: &mut ParticleRng,
    origin: [f32; 2],
    now: f64,
) {
    for i in 0..config.burst_count {
        let angle = i as f32 * std::f32::consts::TAU / config.burst_count as f32
            + rng.range(-config.angle_jitter, config.angle_jitter);
        let distance = rng.range(config.distance_min, config.distance_max);
        let initial_rotation = rng.range(0.0, 360.0);
        pool.spawn(
            BurstHeart {
                origin,
                offset: [angle.cos() * distance, angle.sin() * distance],
                start: now,
                duration: rng.range(config.duration_min, config.duration_max),
                initial_scale: rng.range(config.scale_min, config.scale_max),
                initial_rotation,
                target_rotation: initial_rotation
                    + rng.range(-config.spin_range, config.spin_range),
            },
            now,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Lifetime;

    #[test]
    fn first_poll_spawns_immediately() {
        let config = FieldConfig::default();
        let mut emitter = FieldEmitter::new();
        let mut pool = Pool::with_capacity(config.max_hearts);
        let mut rng = ParticleRng::new(1);

        assert!(emitter.poll(&mut pool, &config, &mut rng, 0.0));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn interval_gates_spawning() {
        let config = FieldConfig::default();
        let mut emitter = FieldEmitter::new();
        let mut pool = Pool::with_capacity(config.max_hearts);
        let mut rng = ParticleRng::new(1);

        emitter.poll(&mut pool, &config, &mut rng, 0.0);
        assert!(!emitter.poll(&mut pool, &config, &mut rng, 0.2));
        assert!(!emitter.poll(&mut pool, &config, &mut rng, 0.49));
        assert!(emitter.poll(&mut pool, &config, &mut rng, 0.5));
        assert_eq!(pool.len(), 2);
        assert!((emitter.next_due(&config) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn long_gap_spawns_only_one() {
        let config = FieldConfig::default();
        let mut emitter = FieldEmitter::new();
        let mut pool = Pool::with_capacity(config.max_hearts);
        let mut rng = ParticleRng::new(1);

        emitter.poll(&mut pool, &config, &mut rng, 0.0);
        // 30 s gap, e.g. a backgrounded window
        assert!(emitter.poll(&mut pool, &config, &mut rng, 30.0));
        assert_eq!(pool.len(), 2);
        // Deadline re-anchors to the poll time, not to the missed slots
        assert!((emitter.next_due(&config) - 30.5).abs() < 1e-9);
    }

    #[test]
    fn spawned_heart_within_configured_ranges() {
        let config = FieldConfig::default();
        let mut emitter = FieldEmitter::new();
        let mut pool = Pool::with_capacity(config.max_hearts);
        let mut rng = ParticleRng::new(99);

        let mut now = 0.0;
        for _ in 0..50 {
            emitter.poll(&mut pool, &config, &mut rng, now);
            now += config.spawn_interval as f64;
        }
        for heart in pool.iter() {
            assert!(heart.x >= 0.0 && heart.x <= 100.0);
            assert!(heart.y >= 0.0 && heart.y <= 100.0);
            assert!(heart.size >= config.size_min && heart.size <= config.size_max);
            assert_eq!(heart.opacity, 1.0);
            assert!(heart.rotation >= 0.0 && heart.rotation <= 360.0);
        }
    }

    #[test]
    fn burst_spawns_ring_around_origin() {
        let config = BurstConfig::default();
        let mut pool = Pool::with_capacity(config.max_hearts);
        let mut rng = ParticleRng::new(7);

        emit_burst(&mut pool, &config, &mut rng, [100.0, 100.0], 2.0);
        assert_eq!(pool.len(), 12);

        for (i, heart) in pool.iter().enumerate() {
            assert_eq!(heart.origin, [100.0, 100.0]);
            assert_eq!(heart.start, 2.0);

            // Direction within the jitter window of its ring slot
            let slot = i as f32 * std::f32::consts::TAU / 12.0;
            let angle = heart.offset[1].atan2(heart.offset[0]);
            let diff = (angle - slot).rem_euclid(std::f32::consts::TAU);
            let diff = diff.min(std::f32::consts::TAU - diff);
            assert!(diff <= config.angle_jitter + 1e-4);

            let distance = (heart.offset[0].powi(2) + heart.offset[1].powi(2)).sqrt();
            assert!(distance >= config.distance_min - 1e-3);
            assert!(distance <= config.distance_max + 1e-3);
            assert!(heart.duration >= config.duration_min && heart.duration <= config.duration_max);
            assert!(heart.initial_scale >= config.scale_min);
            assert!(heart.initial_scale <= config.scale_max);
            let spin = heart.target_rotation - heart.initial_rotation;
            assert!(spin.abs() <= config.spin_range + 1e-3);
        }
    }

    #[test]
    fn click_flurry_recycles_at_capacity() {
        let config = BurstConfig::default();
        let mut pool = Pool::with_capacity(config.max_hearts);
        let mut rng = ParticleRng::new(3);

        // 26 clicks x 12 hearts = 312 spawns into a 300-slot pool
        for click in 0..26 {
            let now = click as f64 * 0.01;
            emit_burst(&mut pool, &config, &mut rng, [50.0, 50.0], now);
            assert!(pool.len() <= config.max_hearts);
        }
        assert_eq!(pool.len(), config.max_hearts);

        // Every survivor still has lifetime ahead of it
        let now = 0.25;
        for heart in pool.iter() {
            assert!(heart.remaining(now) > 0.0);
        }
    }
}
