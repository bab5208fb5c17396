//! Overlay application implementing winit ApplicationHandler
//!
//! Hosts both heart effects in one transparent window: the ambient
//! field underneath, click bursts on top. Frames are only scheduled
//! while hearts are live; once every pool drains the loop parks and
//! the ambient spawn timer or the next click wakes it.

use crate::config::{OverlayConfig, WindowConfig};
use cupid_particles::{HeartBurst, HeartField, ParticleRng};
use cupid_render::{CenterSpace, HeartPipeline, RenderContext};
use cupid_runtime::LoopDriver;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// GPU-side half of the overlay. Absent when adapter or device creation
/// failed; the simulation and input handling run either way.
struct Renderer {
    context: RenderContext,
    field_pipeline: HeartPipeline,
    burst_pipeline: HeartPipeline,
}

pub struct OverlayApp {
    // Effects
    field: HeartField,
    burst: HeartBurst,
    driver: LoopDriver,
    epoch: Instant,

    // Input
    cursor: Option<PhysicalPosition<f64>>,
    scale_factor: f64,

    // Rendering
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,

    // Window options
    window_config: WindowConfig,
}

impl OverlayApp {
    pub fn new(config: OverlayConfig, seed: Option<u32>) -> Self {
        let (field_rng, burst_rng) = match seed {
            Some(seed) => (
                ParticleRng::new(seed),
                ParticleRng::new(seed.wrapping_add(1)),
            ),
            None => (ParticleRng::from_time(), ParticleRng::from_time()),
        };

        Self {
            field: HeartField::new(config.field, field_rng),
            burst: HeartBurst::new(config.burst, burst_rng),
            driver: LoopDriver::new(),
            epoch: Instant::now(),
            cursor: None,
            scale_factor: 1.0,
            window: None,
            renderer: None,
            window_config: config.window,
        }
    }

    /// Seconds since app start, the timebase every effect runs on
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title(&self.window_config.title)
            .with_inner_size(LogicalSize::new(
                self.window_config.width,
                self.window_config.height,
            ))
            .with_transparent(self.window_config.transparent);

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.scale_factor = window.scale_factor();
        self.window = Some(window.clone());

        // A dead GPU leaves the window running without effects
        match pollster::block_on(RenderContext::new(window.clone())) {
            Ok(context) => {
                let field_pipeline = HeartPipeline::new(
                    &context.device,
                    context.config.format,
                    CenterSpace::Clip,
                    self.field.config().max_hearts,
                    self.field.config().tint,
                );
                let burst_pipeline = HeartPipeline::new(
                    &context.device,
                    context.config.format,
                    CenterSpace::Pixel,
                    self.burst.config().max_hearts,
                    self.burst.config().tint,
                );
                self.renderer = Some(Renderer {
                    context,
                    field_pipeline,
                    burst_pipeline,
                });
            }
            Err(e) => {
                log::warn!("GPU unavailable, running without effects: {}", e);
            }
        }

        window.request_redraw();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Click handler: spawn a burst ring at the cursor and wake the loop
    fn click(&mut self) {
        let Some(position) = self.cursor else {
            return;
        };
        let logical = position.to_logical::<f64>(self.scale_factor);

        let now = self.now();
        self.burst.click([logical.x as f32, logical.y as f32], now);
        log::debug!(
            "burst of {} hearts at ({:.0}, {:.0})",
            self.burst.config().burst_count,
            logical.x,
            logical.y
        );

        if self.driver.wake() {
            self.request_redraw();
        }
    }

    /// Advance both effects by one frame; returns the frame timestamp
    fn tick(&mut self) -> f64 {
        let now = self.now();
        let dt = self.driver.begin_frame(now);

        self.field.advance(now, dt);
        self.burst.advance(now);

        now
    }

    fn render(&mut self, now: f64) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        let output = match renderer.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure and let the next frame pick it up
                let size = renderer.context.size;
                renderer.context.resize(size);
                return;
            }
            Err(e) => {
                log::warn!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let resolution = renderer.context.resolution();

        let mut encoder =
            renderer
                .context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Heart Encoder"),
                });

        // Field below, burst above; only the first pass clears
        renderer.field_pipeline.draw(
            &renderer.context.queue,
            &mut encoder,
            &view,
            self.field.pack(),
            resolution,
            true,
        );
        renderer.burst_pipeline.draw(
            &renderer.context.queue,
            &mut encoder,
            &view,
            self.burst.pack(now, self.scale_factor as f32),
            resolution,
            false,
        );

        renderer
            .context
            .queue
            .submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for OverlayApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.context.resize(new_size);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if state == ElementState::Pressed && button == MouseButton::Left {
                    self.click();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let now = self.tick();
                self.render(now);

                let any_live = self.field.live() > 0 || self.burst.live() > 0;
                if self.driver.end_frame(any_live) {
                    self.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.now();
        if self.field.poll_spawn(now) && self.driver.wake() {
            self.request_redraw();
        }

        // Park until the next ambient spawn. Requested redraws and input
        // still arrive immediately; the deadline only bounds idle sleep.
        let deadline = self.epoch + Duration::from_secs_f64(self.field.next_spawn_due());
        event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
    }
}
