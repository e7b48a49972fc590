//! WebGPU rendering module
//!
//! Pixel-block glyphs expanded to colored quads, drawn through a single
//! vertex-color pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
