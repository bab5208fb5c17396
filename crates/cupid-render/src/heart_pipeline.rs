//! Heart quad render pipeline
//!
//! One pipeline per effect instance. The vertex stream is the flat
//! seven-float layout packed by cupid-particles; the fragment stage draws
//! an analytic heart, so there are no textures. Output is premultiplied
//! alpha, drawn over a transparent clear so passes stack as layers.

use bytemuck::{Pod, Zeroable};
use cupid_particles::HeartVertex;
use wgpu::util::DeviceExt;

/// Coordinate space of packed vertex centers; selects the vertex shader
/// entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterSpace {
    /// Centers already in clip space (ambient field)
    Clip,
    /// Centers in physical pixels, y-down (click burst)
    Pixel,
}

impl CenterSpace {
    fn vertex_entry(self) -> &'static str {
        match self {
            CenterSpace::Clip => "vs_field",
            CenterSpace::Pixel => "vs_burst",
        }
    }
}

/// Uniforms shared by both entry points, matching WGSL `HeartUniforms`.
/// 32 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct HeartUniforms {
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
    /// Straight-alpha RGBA; the shader premultiplies
    pub tint: [f32; 4],
}

/// Pipeline, persistent vertex buffer, and uniforms for one heart effect
pub struct HeartPipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    capacity_vertices: u32,
    tint: [f32; 4],
}

impl HeartPipeline {
    /// `max_hearts` sizes the vertex buffer once; per-frame uploads only
    /// rewrite the live prefix.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        space: CenterSpace,
        max_hearts: usize,
        tint: [f32; 4],
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Heart Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("heart_shader.wgsl").into()),
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("Heart Uniform Bind Group Layout"),
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Heart Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<HeartVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: unit-quad corner
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // center
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 8,
                    shader_location: 1,
                },
                // size
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 16,
                    shader_location: 2,
                },
                // opacity
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 20,
                    shader_location: 3,
                },
                // rotation
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 24,
                    shader_location: 4,
                },
            ],
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Heart Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(space.vertex_entry()),
                buffers: &[vertex_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_heart"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let capacity_vertices = (max_hearts * 6) as u32;
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Heart Vertex Buffer"),
            size: capacity_vertices as u64 * std::mem::size_of::<HeartVertex>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Heart Uniform Buffer"),
            contents: bytemuck::cast_slice(&[HeartUniforms {
                resolution: [1.0, 1.0],
                _pad: [0.0; 2],
                tint,
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("Heart Uniform Bind Group"),
        });

        Self {
            pipeline,
            vertex_buffer,
            uniform_buffer,
            uniform_bind_group,
            capacity_vertices,
            tint,
        }
    }

    /// Upload the live vertex prefix and record one render pass.
    ///
    /// `clear` picks the load op: the bottom layer clears the surface to
    /// transparent, layers above load what is already there. An empty
    /// batch with `clear` still records the clearing pass, so a drained
    /// effect leaves a blank surface rather than a stale frame.
    pub fn draw(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        vertices: &[HeartVertex],
        resolution: [f32; 2],
        clear: bool,
    ) {
        let count = (vertices.len() as u32).min(self.capacity_vertices);
        if count == 0 && !clear {
            return;
        }

        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[HeartUniforms {
                resolution,
                _pad: [0.0; 2],
                tint: self.tint,
            }]),
        );
        if count > 0 {
            queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(&vertices[..count as usize]),
            );
        }

        let load = if clear {
            wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT)
        } else {
            wgpu::LoadOp::Load
        };

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Heart Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if count == 0 {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..count, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_uniforms_layout() {
        // Matches the WGSL struct: vec2 + pad + vec4
        assert_eq!(std::mem::size_of::<HeartUniforms>(), 32);
        assert_eq!(std::mem::align_of::<HeartUniforms>(), 4);
    }

    #[test]
    fn center_space_selects_entry_point() {
        assert_eq!(CenterSpace::Clip.vertex_entry(), "vs_field");
        assert_eq!(CenterSpace::Pixel.vertex_entry(), "vs_burst");
    }
}
