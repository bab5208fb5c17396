//! The ambient rising-heart field

use crate::config::FieldConfig;
use crate::emitter::FieldEmitter;
use crate::pack::{HeartVertex, VertexBatch};
use crate::particle::{FieldHeart, Pool};
use crate::rand::ParticleRng;

/// Owns the ambient effect end to end: pool, emitter, RNG, packing buffer.
/// All methods take `now` in seconds on the host's monotonic timebase.
pub struct HeartField {
    config: FieldConfig,
    pool: Pool<FieldHeart>,
    emitter: FieldEmitter,
    rng: ParticleRng,
    batch: VertexBatch,
}

impl HeartField {
    pub fn new(config: FieldConfig, rng: ParticleRng) -> Self {
        let pool = Pool::with_capacity(config.max_hearts);
        let batch = VertexBatch::with_capacity(config.max_hearts);
        Self {
            config,
            pool,
            emitter: FieldEmitter::new(),
            rng,
            batch,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Timer hook: spawn one heart if the ambient interval has elapsed.
    /// Returns whether a heart was spawned (the frame loop should wake).
    pub fn poll_spawn(&mut self, now: f64) -> bool {
        self.emitter
            .poll(&mut self.pool, &self.config, &mut self.rng, now)
    }

    /// Deadline of the next ambient spawn, for host timer scheduling
    pub fn next_spawn_due(&self) -> f64 {
        self.emitter.next_due(&self.config)
    }

    /// Advance all hearts by `dt` seconds, then drop the faded-out ones
    pub fn advance(&mut self, now: f64, dt: f32) {
        for heart in self.pool.iter_mut() {
            heart.step(dt, &self.config);
        }
        self.pool.compact(now);
    }

    /// Pack live hearts into the shared vertex layout (clip-space centers)
    pub fn pack(&mut self) -> &[HeartVertex] {
        self.batch.clear();
        for heart in self.pool.iter() {
            self.batch.push_sprite(&heart.sprite());
        }
        self.batch.vertices()
    }

    /// Number of live hearts
    pub fn live(&self) -> usize {
        self.pool.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_advance_pack_cycle() {
        let mut field = HeartField::new(FieldConfig::default(), ParticleRng::new(11));

        assert!(field.poll_spawn(0.0));
        assert_eq!(field.live(), 1);

        field.advance(0.016, 0.016);
        let verts = field.pack();
        assert_eq!(verts.len(), 6);
        assert!(verts[0].opacity < 1.0);

        // Centers are clip-space
        for v in verts {
            assert!(v.center[0] >= -1.0 && v.center[0] <= 1.0);
            assert!(v.center[1] >= -1.0 && v.center[1] <= 1.0);
        }
    }

    #[test]
    fn field_drains_without_respawn() {
        let config = FieldConfig::default();
        let mut field = HeartField::new(config, ParticleRng::new(5));
        field.poll_spawn(0.0);

        // Drive past the 10 s fade without polling the emitter
        let mut now = 0.0;
        for _ in 0..110 {
            now += 0.1;
            field.advance(now, 0.1);
        }
        assert_eq!(field.live(), 0);
        assert!(field.pack().is_empty());
    }

    #[test]
    fn steady_state_stays_at_capacity() {
        let config = FieldConfig {
            max_hearts: 8,
            ..Default::default()
        };
        let mut field = HeartField::new(config, ParticleRng::new(21));

        let mut now = 0.0;
        for _ in 0..100 {
            field.poll_spawn(now);
            field.advance(now, 0.5);
            now += 0.5;
            assert!(field.live() <= 8);
        }
        assert_eq!(field.live(), 8);
    }
}
