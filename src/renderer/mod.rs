//! WebGPU rendering module
//!
//! Flat colored-triangle rendering: the scene is tessellated on the CPU each
//! frame and drawn in one pass. Strictly read-only over the simulation.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{build_scene, Scene};
pub use vertex::Vertex;
