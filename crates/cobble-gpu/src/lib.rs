//! Vulkan buffer and memory layer for the Cobble engine.
//!
//! This crate wraps `gpu-allocator` for the one resource kind the meshing
//! pipeline needs: host-visible vertex buffers written through mapped
//! pointers. Device and instance creation belong to the application that
//! owns the graphics context; everything here borrows them.

pub mod error;
pub mod memory;

pub use error::{GpuError, Result};
pub use memory::{GpuAllocator, GpuBuffer};
