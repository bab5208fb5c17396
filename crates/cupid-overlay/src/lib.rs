//! Cupid Overlay - heart-particle window library
//!
//! This crate provides the `OverlayApp` application handler that hosts
//! the ambient heart field and click bursts in a transparent window,
//! plus the TOML configuration it is built from.

pub mod config;
mod overlay_app;

pub use config::{OverlayConfig, OverlayConfigError, WindowConfig};
pub use overlay_app::OverlayApp;
