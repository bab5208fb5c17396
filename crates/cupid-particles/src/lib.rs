//! Cupid Particles - CPU half of the heart overlay effects
//!
//! Provides pooled heart simulation with:
//! - Fixed-capacity pools that recycle the nearest-to-expiry heart when full
//! - An interval-driven ambient field and a pointer-click burst emitter
//! - Delta-time kinematics for the field, pure time-derived sampling for bursts
//! - Flat vertex packing (six vertices per heart quad) for GPU upload

pub mod burst;
pub mod config;
pub mod curves;
pub mod emitter;
pub mod field;
pub mod pack;
pub mod particle;
pub mod rand;

pub use burst::HeartBurst;
pub use config::{BurstConfig, ConfigError, FieldConfig};
pub use field::HeartField;
pub use pack::{HeartSprite, HeartVertex, VertexBatch};
pub use particle::{BurstHeart, FieldHeart, Lifetime, Pool};
pub use rand::ParticleRng;
