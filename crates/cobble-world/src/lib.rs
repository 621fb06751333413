//! Chunk storage, generation, and mesh rebuild for the Cobble engine.

pub mod chunk;
pub mod generation;
pub mod options;

pub use chunk::{Chunk, ChunkSampler};
pub use generation::{default_registry, TerrainConfig, TerrainGenerator, WorldSeed};
pub use options::{find_option, OptionDescriptor, OPTIONS};

use cobble_core::material::MaterialRegistry;
use cobble_voxel::mesher::{MeshData, Visibility};
use rayon::prelude::*;

/// Mesh independent chunks in parallel.
///
/// Each chunk's rebuild stays single-threaded and synchronous; parallelism
/// only spans distinct chunks, whose grids are disjoint. The registry is
/// read-only during meshing and shared without locking.
pub fn mesh_chunks(
    chunks: &[Chunk],
    registry: &MaterialRegistry,
    visibility: &(dyn Visibility + Sync),
) -> Vec<MeshData> {
    chunks
        .par_iter()
        .map(|chunk| chunk.mesh_data(registry, visibility))
        .collect()
}
