//! Flat vertex packing: six vertices per heart quad

use bytemuck::{Pod, Zeroable};

/// Unit-quad corners, two triangles
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
];

/// Per-vertex data, matching the WGSL `VertexIn` struct.
/// 7 floats, 28 bytes, tightly packed.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct HeartVertex {
    /// Unit-quad corner in [0, 1]²
    pub position: [f32; 2],
    /// Heart center: clip space for the field, physical px for bursts
    pub center: [f32; 2],
    /// Quad edge length in px
    pub size: f32,
    /// 0 = invisible, 1 = opaque
    pub opacity: f32,
    /// Radians
    pub rotation: f32,
}

/// Drawable state of one heart for the current frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartSprite {
    pub center: [f32; 2],
    pub size: f32,
    pub opacity: f32,
    pub rotation: f32,
}

/// Reusable vertex staging buffer. `clear` keeps the allocation, so
/// steady-state packing never touches the heap.
pub struct VertexBatch {
    vertices: Vec<HeartVertex>,
}

impl VertexBatch {
    pub fn with_capacity(max_hearts: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(max_hearts * QUAD_CORNERS.len()),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Append the six vertices for one heart quad
    pub fn push_sprite(&mut self, sprite: &HeartSprite) {
        for corner in QUAD_CORNERS {
            self.vertices.push(HeartVertex {
                position: corner,
                center: sprite.center,
                size: sprite.size,
                opacity: sprite.opacity,
                rotation: sprite.rotation,
            });
        }
    }

    pub fn vertices(&self) -> &[HeartVertex] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
