//! Heart particle types and the fixed-capacity recycling pool

use crate::config::FieldConfig;
use crate::curves::{ease_out_cubic, lerp_f32};
use crate::pack::HeartSprite;

/// Expiry behavior shared by both heart kinds. `remaining` orders
/// particles for recycling; `is_finite` keeps corrupt state out of the
/// vertex buffer.
pub trait Lifetime {
    /// Remaining lifetime in effect-specific units; <= 0 means expired
    fn remaining(&self, now: f64) -> f32;
    /// False if any field is NaN or infinite
    fn is_finite(&self) -> bool;
}

/// One ambient heart drifting up the viewport.
///
/// `x`/`y` are percent-of-viewport (0-100, y-down); `y` wraps so a heart
/// that crosses the top re-enters from the bottom. Rotation is stored in
/// degrees and converted when packed.
#[derive(Clone, Debug)]
pub struct FieldHeart {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub rotation: f32,
}

impl FieldHeart {
    /// Advance kinematics by `dt` seconds
    pub fn step(&mut self, dt: f32, config: &FieldConfig) {
        self.y = (self.y - config.rise_speed * dt).rem_euclid(100.0);
        self.opacity -= config.fade_rate * dt;
        self.rotation += config.spin_rate * dt;
    }

    /// Drawable state, center mapped to clip space
    pub fn sprite(&self) -> HeartSprite {
        HeartSprite {
            center: [
                self.x / 100.0 * 2.0 - 1.0,
                1.0 - self.y / 100.0 * 2.0,
            ],
            size: self.size,
            opacity: self.opacity,
            rotation: self.rotation.to_radians(),
        }
    }
}

impl Lifetime for FieldHeart {
    fn remaining(&self, _now: f64) -> f32 {
        self.opacity
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.size.is_finite()
            && self.opacity.is_finite()
            && self.rotation.is_finite()
    }
}

/// One click-burst heart. Immutable after spawn; everything drawable is
/// derived from elapsed time in [`BurstHeart::sample`], so a dropped or
/// clamped frame can never leave it in a stale state.
#[derive(Clone, Debug)]
pub struct BurstHeart {
    /// Click point, logical px
    pub origin: [f32; 2],
    /// Full travel vector away from the origin, logical px
    pub offset: [f32; 2],
    /// Spawn timestamp, seconds
    pub start: f64,
    /// Lifetime, seconds
    pub duration: f32,
    pub initial_scale: f32,
    /// Degrees
    pub initial_rotation: f32,
    /// Degrees, reached at the end of travel
    pub target_rotation: f32,
}

impl BurstHeart {
    /// Normalized progress in [0, 1] at `now`
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start) as f32) / self.duration).min(1.0)
    }

    /// Derive the drawable state at `now`. `base_size` is the quad size at
    /// scale 1.0 in logical px; `dpr` converts logical to physical px.
    pub fn sample(&self, now: f64, base_size: f32, dpr: f32) -> HeartSprite {
        let t = self.progress(now);
        let eased = ease_out_cubic(t);
        HeartSprite {
            center: [
                (self.origin[0] + self.offset[0] * eased) * dpr,
                (self.origin[1] + self.offset[1] * eased) * dpr,
            ],
            size: base_size * self.initial_scale * (1.0 - eased) * dpr,
            opacity: 1.0 - t * t,
            rotation: lerp_f32(self.initial_rotation, self.target_rotation, eased).to_radians(),
        }
    }
}

impl Lifetime for BurstHeart {
    fn remaining(&self, now: f64) -> f32 {
        self.duration - (now - self.start) as f32
    }

    fn is_finite(&self) -> bool {
        self.origin[0].is_finite()
            && self.origin[1].is_finite()
            && self.offset[0].is_finite()
            && self.offset[1].is_finite()
            && self.start.is_finite()
            && self.duration.is_finite()
            && self.initial_scale.is_finite()
            && self.initial_rotation.is_finite()
            && self.target_rotation.is_finite()
    }
}

/// Fixed-capacity pool. Spawning past capacity recycles the particle
/// nearest expiry instead of dropping input, so a click flurry keeps its
/// newest hearts.
pub struct Pool<P: Lifetime> {
    particles: Vec<P>,
    capacity: usize,
}

impl<P: Lifetime> Pool<P> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Insert `particle`. At capacity, overwrites the slot with the least
    /// remaining lifetime (lowest index on ties).
    pub fn spawn(&mut self, particle: P, now: f64) {
        if self.particles.len() < self.capacity {
            self.particles.push(particle);
            return;
        }
        let Some(victim) = self.nearest_expiry(now) else {
            return;
        };
        self.particles[victim] = particle;
    }

    fn nearest_expiry(&self, now: f64) -> Option<usize> {
        let mut victim = None;
        let mut least = f32::INFINITY;
        for (i, p) in self.particles.iter().enumerate() {
            let r = p.remaining(now);
            if r < least {
                least = r;
                victim = Some(i);
            }
        }
        victim
    }

    /// Drop expired and non-finite particles in one ordered in-place pass
    pub fn compact(&mut self, now: f64) {
        self.particles
            .retain(|p| p.is_finite() && p.remaining(now) > 0.0);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, P> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.particles
    }
}
