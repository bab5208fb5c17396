//! Cupid Render - wgpu renderer for the heart overlay
//!
//! Two render layers stack on one transparent surface: the ambient field
//! below, click bursts above. Each effect owns a [`HeartPipeline`] holding
//! its persistent vertex buffer; the heart shape itself is analytic and
//! lives entirely in the fragment shader.

pub mod context;
pub mod heart_pipeline;

pub use context::{RenderContext, RenderError};
pub use heart_pipeline::{CenterSpace, HeartPipeline, HeartUniforms};
