//! Cupid Overlay - heart-particle window binary
//!
//! Runs the ambient rising-heart field with click-triggered bursts in
//! a transparent window.
//!
//! Usage:
//!   cupid-overlay [--config <overlay.toml>] [--seed <n>]
//!                 [--width <px>] [--height <px>] [--transparent]

use anyhow::{Context, Result};
use clap::Parser;
use cupid_overlay::{OverlayApp, OverlayConfig};
use std::path::PathBuf;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "cupid-overlay")]
#[command(about = "Heart-particle overlay - ambient field plus click bursts")]
struct Args {
    /// Path to a TOML config file; built-in defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for deterministic heart placement
    #[arg(long)]
    seed: Option<u32>,

    /// Window width in logical pixels (overrides the config file)
    #[arg(long)]
    width: Option<u32>,

    /// Window height in logical pixels (overrides the config file)
    #[arg(long)]
    height: Option<u32>,

    /// Force a transparent window even if the config disables it
    #[arg(long)]
    transparent: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    // Load config
    let mut config = match &args.config {
        Some(path) => OverlayConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => OverlayConfig::default(),
    };
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if args.transparent {
        config.window.transparent = true;
    }

    log::info!(
        "field up to {} hearts every {:.2}s, bursts of {} per click",
        config.field.max_hearts,
        config.field.spawn_interval,
        config.burst.burst_count
    );

    println!("Controls:");
    println!("  Click    - Heart burst");
    println!("  Escape   - Exit");

    // Create and run the event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = OverlayApp::new(config, args.seed);
    event_loop.run_app(&mut app)?;

    Ok(())
}
