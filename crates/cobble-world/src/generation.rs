//! Procedural terrain generation and the material bootstrap.
//!
//! This is the reference grid-edit collaborator: it registers the base
//! material palette before any mesh build and fills chunks voxel-by-voxel
//! through `set_material`.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use cobble_core::constants::CHUNK_SIZE;
use cobble_core::coords::{to_global, LocalPos};
use cobble_core::material::{MaterialCode, MaterialRegistry};

use crate::chunk::Chunk;

/// Stone material code
pub const STONE: MaterialCode = MaterialCode(1);
/// Dirt material code
pub const DIRT: MaterialCode = MaterialCode(2);
/// Grass material code
pub const GRASS: MaterialCode = MaterialCode(3);
/// Snow material code
pub const SNOW: MaterialCode = MaterialCode(4);
/// Sand material code
pub const SAND: MaterialCode = MaterialCode(5);

/// Build a registry holding the base palette.
///
/// Code 0 stays the reserved air material; the rest are opaque surface
/// materials. Runs once at startup, before meshing begins (the registry is
/// read-only afterwards).
pub fn default_registry() -> MaterialRegistry {
    let mut registry = MaterialRegistry::new();
    registry.register(STONE, [128, 128, 128, 255], true);
    registry.register(DIRT, [139, 90, 43, 255], true);
    registry.register(GRASS, [86, 125, 70, 255], true);
    registry.register(SNOW, [236, 238, 245, 255], true);
    registry.register(SAND, [215, 199, 133, 255], true);
    registry
}

/// Seed for procedural generation.
pub type WorldSeed = u64;

/// Terrain generator configuration.
#[derive(Debug, Clone)]
pub struct TerrainConfig {
    /// Seed for noise generation.
    pub seed: WorldSeed,
    /// Base surface height (world Y).
    pub base_height: f64,
    /// Horizontal scale of terrain features.
    pub terrain_scale: f64,
    /// Maximum terrain height variation.
    pub terrain_height: f64,
    /// Number of noise octaves for detail.
    pub octaves: usize,
    /// Depth of dirt layer below surface.
    pub dirt_depth: i32,
    /// World Y above which surfaces turn to snow.
    pub snow_line: i32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            base_height: 4.0,
            terrain_scale: 40.0,
            terrain_height: 10.0,
            octaves: 4,
            dirt_depth: 3,
            snow_line: 48,
        }
    }
}

/// Procedural terrain generator using fractal noise.
pub struct TerrainGenerator {
    config: TerrainConfig,
    height_noise: Fbm<Perlin>,
}

impl TerrainGenerator {
    /// Create a new terrain generator with the given configuration.
    pub fn new(config: TerrainConfig) -> Self {
        let height_noise = Fbm::<Perlin>::new(config.seed as u32).set_octaves(config.octaves);
        Self {
            config,
            height_noise,
        }
    }

    /// Create a terrain generator with default configuration.
    pub fn with_seed(seed: WorldSeed) -> Self {
        Self::new(TerrainConfig {
            seed,
            ..Default::default()
        })
    }

    /// Get the terrain configuration.
    pub const fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Surface height (world Y) at world XZ coordinates.
    pub fn height_at(&self, world_x: f32, world_z: f32) -> i32 {
        let nx = f64::from(world_x) / self.config.terrain_scale;
        let nz = f64::from(world_z) / self.config.terrain_scale;

        // Noise returns [-1, 1]; map to [0, terrain_height] above the base
        let noise_value = self.height_noise.get([nx, nz]);
        (self.config.base_height + (noise_value + 1.0) * 0.5 * self.config.terrain_height) as i32
    }

    /// Material for a world Y relative to the surface height of its column.
    fn material_at_depth(&self, world_y: i32, surface_height: i32) -> MaterialCode {
        if world_y > surface_height {
            MaterialCode::AIR
        } else if world_y == surface_height {
            if world_y >= self.config.snow_line {
                SNOW
            } else {
                GRASS
            }
        } else if world_y > surface_height - self.config.dirt_depth {
            DIRT
        } else {
            STONE
        }
    }

    /// Fill a chunk's grid voxel-by-voxel from the height field.
    ///
    /// Pure grid edits; the caller triggers `build_mesh` afterwards.
    pub fn fill_chunk(&self, chunk: &mut Chunk) {
        let pos = chunk.pos();
        for lz in 0..CHUNK_SIZE {
            for lx in 0..CHUNK_SIZE {
                let world_x = to_global(pos.x, lx as i32);
                let world_z = to_global(pos.z, lz as i32);
                let surface_height = self.height_at(world_x, world_z);

                for ly in 0..CHUNK_SIZE {
                    let world_y = to_global(pos.y, ly as i32) as i32;
                    let code = self.material_at_depth(world_y, surface_height);
                    if !code.is_air() {
                        chunk.set_material(
                            LocalPos::new(lx as u8, ly as u8, lz as u8),
                            code,
                        );
                    }
                }
            }
        }
    }
}
