//! Vertex layout and GPU buffer management for the Cobble engine.
//!
//! This crate provides:
//! - The configurable vertex layout (position/color/normal channel counts)
//! - Layout-driven packing of separate float sequences into one stream
//! - The vertex buffer object: upload on validate, draw-call recording
//! - The debug primitive-mode toggle

pub mod debug;
pub mod layout;
pub mod vertex_buffer;

pub use debug::PrimitiveMode;
pub use layout::{ColorFormat, NormalFormat, PositionFormat, VertexDataError, VertexLayout};
pub use vertex_buffer::VertexBuffer;
