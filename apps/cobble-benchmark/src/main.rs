//! Headless chunk meshing benchmark.
//!
//! Generates a square of terrain chunks and rebuilds their meshes on the
//! CPU, sequentially and in parallel, reporting throughput. No GPU is
//! required; the upload path is exercised by the engine proper.

use std::time::Instant;

use tracing::info;

use cobble_core::coords::ChunkPos;
use cobble_voxel::mesher::ActiveVisibility;
use cobble_world::{default_registry, mesh_chunks, Chunk, TerrainGenerator};

/// Side length of the benchmarked chunk square.
const AREA_SIZE: i32 = 8;

fn main() {
    tracing_subscriber::fmt::init();
    info!("Cobble meshing benchmark");

    let registry = default_registry();
    info!(materials = registry.registered_count(), "registry bootstrapped");

    let generator = TerrainGenerator::with_seed(42);
    let start = Instant::now();
    let chunks: Vec<Chunk> = (0..AREA_SIZE * AREA_SIZE)
        .map(|i| {
            let mut chunk = Chunk::new(ChunkPos::new(i % AREA_SIZE, 0, i / AREA_SIZE));
            generator.fill_chunk(&mut chunk);
            chunk
        })
        .collect();
    info!(
        chunks = chunks.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "terrain generated"
    );

    let start = Instant::now();
    let mut total_vertices = 0usize;
    for chunk in &chunks {
        total_vertices += chunk.mesh_data(&registry, &ActiveVisibility).vertex_count();
    }
    let sequential = start.elapsed();
    info!(
        total_vertices,
        faces = total_vertices / 6,
        elapsed_ms = sequential.as_millis() as u64,
        "sequential meshing pass"
    );

    let start = Instant::now();
    let meshes = mesh_chunks(&chunks, &registry, &ActiveVisibility);
    let parallel = start.elapsed();
    let parallel_vertices: usize = meshes.iter().map(cobble_voxel::MeshData::vertex_count).sum();
    assert_eq!(parallel_vertices, total_vertices);
    info!(
        elapsed_ms = parallel.as_millis() as u64,
        speedup = sequential.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON),
        "parallel meshing pass"
    );
}
