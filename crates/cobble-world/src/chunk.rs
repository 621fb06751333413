//! Chunk data structure: a 16x16x16 grid of material codes with an owned,
//! rebuildable vertex buffer.

use cobble_core::constants::{CHUNK_SIZE, CHUNK_VOLUME};
use cobble_core::coords::{to_local, ChunkPos, LocalPos};
use cobble_core::error::{Error, Result};
use cobble_core::material::{Material, MaterialCode, MaterialRegistry};
use cobble_gpu::memory::GpuAllocator;
use cobble_render::{PrimitiveMode, VertexBuffer, VertexLayout};
use cobble_voxel::mesher::{mesh_voxel, MaterialGrid, MeshData, Visibility};

/// A container for a 16x16x16 selection of voxels.
///
/// The chunk exclusively owns its voxel grid and its derived vertex buffer.
/// Rebuilds are not incremental: a single voxel edit requires a full
/// `build_mesh`, and the new buffer replaces the old one only once the
/// rebuild has fully succeeded. No locking happens here; a chunk's grid
/// must not be mutated while its rebuild is in progress.
pub struct Chunk {
    pos: ChunkPos,
    voxels: Box<[MaterialCode; CHUNK_VOLUME]>,
    vbo: Option<VertexBuffer>,
}

impl Chunk {
    /// Create a chunk at the given chunk-grid position with every voxel air.
    pub fn new(pos: ChunkPos) -> Self {
        Self {
            pos,
            voxels: Box::new([MaterialCode::AIR; CHUNK_VOLUME]),
            vbo: None,
        }
    }

    /// Position on the chunk grid.
    pub const fn pos(&self) -> ChunkPos {
        self.pos
    }

    /// Set the material at a local position.
    ///
    /// The caller supplies in-range coordinates; bounds are only enforced
    /// by the grid's fixed sizing (an out-of-range `LocalPos` panics on the
    /// index). Editing does not rebuild the mesh; trigger `build_mesh`
    /// after a batch of edits.
    #[inline]
    pub fn set_material(&mut self, local: LocalPos, code: MaterialCode) {
        self.voxels[local.to_index()] = code;
    }

    /// Stored material code at a local position.
    #[inline]
    pub fn code_at(&self, local: LocalPos) -> MaterialCode {
        self.voxels[local.to_index()]
    }

    /// Fill the entire grid with one material.
    pub fn fill(&mut self, code: MaterialCode) {
        self.voxels.fill(code);
    }

    /// Material at a local position, bounds-safe.
    ///
    /// Any coordinate outside [0, 15] resolves to air, so boundary-neighbor
    /// checks never special-case chunk edges. Cross-chunk lookup is an
    /// external collaborator's concern.
    pub fn material_at_local(
        &self,
        registry: &MaterialRegistry,
        x: i32,
        y: i32,
        z: i32,
    ) -> Material {
        let max = CHUNK_SIZE as i32;
        if x < 0 || x >= max || y < 0 || y >= max || z < 0 || z >= max {
            return Material::AIR;
        }
        *registry.get(self.voxels[LocalPos::new(x as u8, y as u8, z as u8).to_index()])
    }

    /// Material at a global position.
    pub fn material_at_global(
        &self,
        registry: &MaterialRegistry,
        gx: f32,
        gy: f32,
        gz: f32,
    ) -> Material {
        let x = to_local(self.pos.x, gx);
        let y = to_local(self.pos.y, gy);
        let z = to_local(self.pos.z, gz);
        self.material_at_local(registry, x, y, z)
    }

    /// Borrowing grid view binding this chunk to a registry for meshing.
    pub const fn sampler<'a>(&'a self, registry: &'a MaterialRegistry) -> ChunkSampler<'a> {
        ChunkSampler {
            chunk: self,
            registry,
        }
    }

    /// Accumulate this chunk's mesh into fresh buffers.
    ///
    /// Iterates all 4096 cells in the fixed deterministic order matching
    /// the local-index formula (x fastest, then y, then z), invoking the
    /// voxel mesher per cell.
    pub fn mesh_data(&self, registry: &MaterialRegistry, visibility: &dyn Visibility) -> MeshData {
        let sampler = self.sampler(registry);
        let mut data = MeshData::for_chunk();

        for i in 0..CHUNK_VOLUME {
            let x = (i % CHUNK_SIZE) as i32;
            let y = ((i / CHUNK_SIZE) % CHUNK_SIZE) as i32;
            let z = (i / (CHUNK_SIZE * CHUNK_SIZE)) as i32;
            mesh_voxel(&mut data, &sampler, visibility, x, y, z);
        }

        data
    }

    /// Rebuild the chunk's vertex buffer from its current voxel contents.
    ///
    /// Builds into new buffers and swaps them in only on success, so a
    /// failed rebuild leaves the previously valid mesh untouched. The
    /// upload runs on the calling thread, which must own the graphics
    /// context.
    pub fn build_mesh(
        &mut self,
        registry: &MaterialRegistry,
        visibility: &dyn Visibility,
        allocator: &mut GpuAllocator,
    ) -> Result<()> {
        let data = self.mesh_data(registry, visibility);

        let mode = self
            .vbo
            .as_ref()
            .map_or(PrimitiveMode::Triangles, VertexBuffer::primitive_mode);
        let mut vbo = VertexBuffer::with_mode(VertexLayout::XYZ_RGB, mode);
        vbo.set_coordinates(data.positions);
        vbo.set_channels(data.colors);
        vbo.validate(allocator)
            .map_err(|e| Error::Gpu(e.to_string()))?;

        if let Some(old) = self.vbo.replace(vbo) {
            old.destroy(allocator).map_err(|e| Error::Gpu(e.to_string()))?;
        }
        Ok(())
    }

    /// True once `build_mesh` has produced a vertex buffer.
    pub const fn has_mesh(&self) -> bool {
        self.vbo.is_some()
    }

    /// Vertices in the chunk's current mesh.
    pub fn vertex_count(&self) -> usize {
        self.vbo.as_ref().map_or(0, VertexBuffer::vertex_count)
    }

    /// Switch the debug primitive mode of the chunk's mesh. Set by the
    /// external input collaborator; never affects mesh content.
    pub fn set_primitive_mode(&mut self, mode: PrimitiveMode) {
        if let Some(vbo) = &mut self.vbo {
            vbo.set_primitive_mode(mode);
        }
    }

    /// Record a draw of the chunk's mesh.
    ///
    /// # Safety
    /// The command buffer must be in recording state on the graphics
    /// context thread.
    pub unsafe fn render(&self, device: &ash::Device, cmd: ash::vk::CommandBuffer) {
        if let Some(vbo) = &self.vbo {
            unsafe { vbo.record_draw(device, cmd) };
        }
    }

    /// Release the chunk's GPU-side buffer.
    pub fn destroy(mut self, allocator: &mut GpuAllocator) -> Result<()> {
        if let Some(vbo) = self.vbo.take() {
            vbo.destroy(allocator).map_err(|e| Error::Gpu(e.to_string()))?;
        }
        Ok(())
    }
}

/// The mesher's view of one chunk plus the registry resolving its codes.
pub struct ChunkSampler<'a> {
    chunk: &'a Chunk,
    registry: &'a MaterialRegistry,
}

impl MaterialGrid for ChunkSampler<'_> {
    fn chunk_pos(&self) -> ChunkPos {
        self.chunk.pos
    }

    fn material_at(&self, x: i32, y: i32, z: i32) -> Material {
        self.chunk.material_at_local(self.registry, x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cobble_voxel::mesher::ActiveVisibility;

    fn stone_registry() -> MaterialRegistry {
        let mut registry = MaterialRegistry::new();
        registry.register(MaterialCode(1), [128, 128, 128, 255], true);
        registry
    }

    #[test]
    fn new_chunk_is_air() {
        let registry = MaterialRegistry::new();
        let chunk = Chunk::new(ChunkPos::new(0, 0, 0));
        for z in 0..16 {
            for y in 0..16 {
                for x in 0..16 {
                    assert!(!chunk.material_at_local(&registry, x, y, z).active);
                }
            }
        }
        assert!(!chunk.has_mesh());
        assert_eq!(chunk.vertex_count(), 0);
    }

    #[test]
    fn out_of_bounds_reads_are_air() {
        let registry = stone_registry();
        let mut chunk = Chunk::new(ChunkPos::new(0, 0, 0));
        chunk.fill(MaterialCode(1));

        for (x, y, z) in [
            (-1, 0, 0),
            (16, 0, 0),
            (0, -1, 0),
            (0, 16, 0),
            (0, 0, -1),
            (0, 0, 16),
            (100, 100, 100),
            (-100, 5, 5),
        ] {
            let material = chunk.material_at_local(&registry, x, y, z);
            assert_eq!(material, Material::AIR);
        }
    }

    #[test]
    fn set_and_get_roundtrip() {
        let registry = stone_registry();
        let mut chunk = Chunk::new(ChunkPos::new(0, 0, 0));
        chunk.set_material(LocalPos::new(3, 7, 11), MaterialCode(1));

        assert_eq!(chunk.code_at(LocalPos::new(3, 7, 11)), MaterialCode(1));
        assert!(chunk.material_at_local(&registry, 3, 7, 11).active);
        assert!(!chunk.material_at_local(&registry, 3, 7, 12).active);
    }

    #[test]
    fn global_lookup_in_negative_chunk() {
        let registry = stone_registry();
        let mut chunk = Chunk::new(ChunkPos::new(-1, 0, 0));
        chunk.set_material(LocalPos::new(15, 0, 0), MaterialCode(1));

        // Local 15 in chunk -1 is global x in [-1, 0)
        let material = chunk.material_at_global(&registry, -0.5, 0.0, 0.0);
        assert!(material.active);
        // One voxel to the left is air
        let material = chunk.material_at_global(&registry, -1.5, 0.0, 0.0);
        assert!(!material.active);
    }

    #[test]
    fn single_voxel_meshes_six_faces() {
        let registry = stone_registry();
        let mut chunk = Chunk::new(ChunkPos::new(0, 0, 0));
        chunk.set_material(LocalPos::new(8, 8, 8), MaterialCode(1));

        let data = chunk.mesh_data(&registry, &ActiveVisibility);
        assert_eq!(data.vertex_count(), 36);
        assert_eq!(data.positions.len(), 108);
        assert_eq!(data.colors.len(), 108);
    }

    #[test]
    fn solid_chunk_meshes_only_boundary_faces() {
        let registry = stone_registry();
        let mut chunk = Chunk::new(ChunkPos::new(0, 0, 0));
        chunk.fill(MaterialCode(1));

        let data = chunk.mesh_data(&registry, &ActiveVisibility);
        // Interior voxels contribute nothing; only the 6*16*16 boundary
        // faces remain.
        let boundary_faces = 6 * 16 * 16;
        assert_eq!(data.vertex_count(), boundary_faces * 6);
        assert_eq!(data.positions.len(), data.colors.len());
    }

    #[test]
    fn interior_voxel_of_solid_block_is_silent() {
        let registry = stone_registry();
        let mut chunk = Chunk::new(ChunkPos::new(0, 0, 0));
        // A 3x3x3 solid block: the center voxel has all 6 neighbors active
        for z in 5..8 {
            for y in 5..8 {
                for x in 5..8 {
                    chunk.set_material(LocalPos::new(x, y, z), MaterialCode(1));
                }
            }
        }

        let sampler = chunk.sampler(&registry);
        let mut center = MeshData::new();
        mesh_voxel(&mut center, &sampler, &ActiveVisibility, 6, 6, 6);
        assert!(center.is_empty());
    }

    #[test]
    fn mesh_positions_span_global_chunk_bounds() {
        let registry = stone_registry();
        let mut chunk = Chunk::new(ChunkPos::new(1, 0, -2));
        chunk.fill(MaterialCode(1));

        let data = chunk.mesh_data(&registry, &ActiveVisibility);
        for vertex in data.positions.as_slice().chunks_exact(3) {
            assert!(vertex[0] >= 16.0 && vertex[0] <= 32.0);
            assert!(vertex[1] >= 0.0 && vertex[1] <= 16.0);
            assert!(vertex[2] >= -32.0 && vertex[2] <= -16.0);
        }
    }
}
