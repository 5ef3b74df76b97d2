//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements, per world where they differ
pub mod colors {
    pub const SURFACE_SKY: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const BENEATH_DARK: [f32; 4] = [0.07, 0.07, 0.125, 1.0];
    pub const PLATFORM_SURFACE: [f32; 4] = [0.18, 0.8, 0.44, 1.0];
    pub const PLATFORM_BENEATH: [f32; 4] = [0.27, 0.27, 0.27, 1.0];
    pub const SPIKE: [f32; 4] = [1.0, 0.3, 0.3, 1.0];
    pub const SWITCH: [f32; 4] = [0.2, 0.6, 0.86, 1.0];
    pub const SWITCH_USED: [f32; 4] = [0.1, 0.32, 0.46, 1.0];
    pub const DOOR: [f32; 4] = [0.95, 0.77, 0.06, 1.0];
    pub const PLAYER_SURFACE: [f32; 4] = [0.13, 0.13, 0.13, 1.0];
    pub const PLAYER_BENEATH: [f32; 4] = [0.93, 0.93, 0.93, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    pub const MOTE: [f32; 4] = [1.0, 0.0, 0.0, 0.15];
}
