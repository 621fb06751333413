//! Chunk meshing throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cobble_core::coords::ChunkPos;
use cobble_core::material::MaterialCode;
use cobble_voxel::mesher::ActiveVisibility;
use cobble_world::{default_registry, Chunk, TerrainGenerator};

fn mesh_terrain_chunk(c: &mut Criterion) {
    let registry = default_registry();
    let generator = TerrainGenerator::with_seed(42);
    let mut chunk = Chunk::new(ChunkPos::new(0, 0, 0));
    generator.fill_chunk(&mut chunk);

    c.bench_function("mesh_terrain_chunk", |b| {
        b.iter(|| black_box(chunk.mesh_data(&registry, &ActiveVisibility)));
    });
}

fn mesh_solid_chunk(c: &mut Criterion) {
    let registry = default_registry();
    let mut chunk = Chunk::new(ChunkPos::new(0, 0, 0));
    chunk.fill(MaterialCode(1));

    c.bench_function("mesh_solid_chunk", |b| {
        b.iter(|| black_box(chunk.mesh_data(&registry, &ActiveVisibility)));
    });
}

fn mesh_checkerboard_chunk(c: &mut Criterion) {
    let registry = default_registry();
    let mut chunk = Chunk::new(ChunkPos::new(0, 0, 0));
    // Worst case for the culling mesher: every face of every solid voxel
    // survives.
    for z in 0..16u8 {
        for y in 0..16u8 {
            for x in 0..16u8 {
                if (x + y + z) % 2 == 0 {
                    chunk.set_material(
                        cobble_core::coords::LocalPos::new(x, y, z),
                        MaterialCode(1),
                    );
                }
            }
        }
    }

    c.bench_function("mesh_checkerboard_chunk", |b| {
        b.iter(|| black_box(chunk.mesh_data(&registry, &ActiveVisibility)));
    });
}

criterion_group!(
    benches,
    mesh_terrain_chunk,
    mesh_solid_chunk,
    mesh_checkerboard_chunk
);
criterion_main!(benches);
