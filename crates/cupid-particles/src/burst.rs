//! The click-triggered heart burst

use crate::config::BurstConfig;
use crate::emitter::emit_burst;
use crate::pack::{HeartVertex, VertexBatch};
use crate::particle::{BurstHeart, Pool};
use crate::rand::ParticleRng;

/// Owns the burst effect: pool, RNG, packing buffer. Hearts are immutable
/// once spawned, so there is no per-frame integration; `advance` only
/// culls and `pack` derives every sprite from elapsed time.
pub struct HeartBurst {
    config: BurstConfig,
    pool: Pool<BurstHeart>,
    rng: ParticleRng,
    batch: VertexBatch,
}

impl HeartBurst {
    pub fn new(config: BurstConfig, rng: ParticleRng) -> Self {
        let pool = Pool::with_capacity(config.max_hearts);
        let batch = VertexBatch::with_capacity(config.max_hearts);
        Self {
            config,
            pool,
            rng,
            batch,
        }
    }

    pub fn config(&self) -> &BurstConfig {
        &self.config
    }

    /// Click handler: emit a ring of hearts at `origin` (logical px)
    pub fn click(&mut self, origin: [f32; 2], now: f64) {
        emit_burst(&mut self.pool, &self.config, &mut self.rng, origin, now);
    }

    /// Drop hearts whose duration has elapsed
    pub fn advance(&mut self, now: f64) {
        self.pool.compact(now);
    }

    /// Pack live hearts into the shared vertex layout (pixel centers,
    /// scaled by `dpr`)
    pub fn pack(&mut self, now: f64, dpr: f32) -> &[HeartVertex] {
        self.batch.clear();
        for heart in self.pool.iter() {
            self.batch
                .push_sprite(&heart.sample(now, self.config.base_size, dpr));
        }
        self.batch.vertices()
    }

    /// Number of live hearts
    pub fn live(&self) -> usize {
        self.pool.len()
    }
}
