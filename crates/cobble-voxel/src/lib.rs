//! Per-voxel face culling and mesh accumulation for the Cobble engine.
//!
//! This crate turns voxel grids into flat vertex data:
//! - Fixed two-triangle geometry tables for the six cube faces
//! - The naive-culling mesher: visible-boundary faces only, no quad
//!   merging, no ambient occlusion baking
//! - Injection points for the external visibility predicates

pub mod face;
pub mod mesher;

pub use face::Face;
pub use mesher::{mesh_voxel, ActiveVisibility, MaterialGrid, MeshData, Visibility};
