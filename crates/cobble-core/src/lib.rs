//! Core types, math, and traits for the Cobble engine.
//!
//! This crate provides the foundational types used throughout the engine:
//! - Material codes, descriptors, and the material registry
//! - Coordinate systems (chunk, local, global)
//! - Growable and tiling buffers for mesh accumulation
//! - Common error types

pub mod buffer;
pub mod coords;
pub mod error;
pub mod material;

pub use buffer::{tile, ExpandingBuffer};
pub use coords::{to_global, to_local, ChunkPos, LocalPos};
pub use error::{Error, Result};
pub use material::{Material, MaterialCode, MaterialRegistry};

/// Engine-wide constants
pub mod constants {
    /// Size of a chunk in voxels per axis
    pub const CHUNK_SIZE: usize = 16;
    /// Total voxels in a chunk (16^3)
    pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;
}
