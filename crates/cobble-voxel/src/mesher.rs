//! The naive-culling voxel mesher.
//!
//! For each voxel the mesher asks two injected predicates whether the voxel
//! renders at all and whether an exposed face is still hidden by some
//! further occluder, then emits the surviving faces into the accumulation
//! buffers. The result is a visible-boundary mesh: no greedy quad merging,
//! no ambient occlusion baking.

use cobble_core::buffer::{tile, ExpandingBuffer};
use cobble_core::coords::{to_global, ChunkPos};
use cobble_core::material::Material;

use crate::face::{Face, VERTS_PER_FACE};

/// The mesher's view of a voxel grid.
///
/// Implementations must be bounds-safe: coordinates outside [0, 15] on any
/// axis resolve to air, so boundary-neighbor checks never need
/// special-casing at chunk edges. True cross-chunk lookup belongs to an
/// external collaborator, not this trait.
pub trait MaterialGrid {
    /// Chunk-grid position of the grid, for local-to-global conversion.
    fn chunk_pos(&self) -> ChunkPos;

    /// Material at a local coordinate; air when out of bounds.
    fn material_at(&self, x: i32, y: i32, z: i32) -> Material;
}

/// Externally supplied visibility predicates.
///
/// The decision logic behind these is not part of the meshing core and may
/// evolve independently; the mesher only calls them as pure boolean queries.
pub trait Visibility {
    /// Whether the voxel at a local coordinate should be rendered at all.
    /// A false answer skips the voxel entirely: no faces, no color data.
    fn should_render(&self, grid: &dyn MaterialGrid, x: i32, y: i32, z: i32) -> bool;

    /// Whether the (neighbor) position hides a face despite holding an
    /// inactive material, e.g. because a further occluder exists.
    fn is_eclipsed(&self, grid: &dyn MaterialGrid, x: i32, y: i32, z: i32) -> bool;
}

/// Minimal visibility policy: active materials render, nothing is eclipsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveVisibility;

impl Visibility for ActiveVisibility {
    #[inline]
    fn should_render(&self, grid: &dyn MaterialGrid, x: i32, y: i32, z: i32) -> bool {
        grid.material_at(x, y, z).active
    }

    #[inline]
    fn is_eclipsed(&self, _grid: &dyn MaterialGrid, _x: i32, _y: i32, _z: i32) -> bool {
        false
    }
}

/// Accumulated mesh data: parallel position and color sequences.
///
/// Each visible face contributes exactly 18 position floats and 18 color
/// floats, so `positions.len() == colors.len()` holds whenever the mesher
/// is not mid-face.
#[derive(Debug, Default)]
pub struct MeshData {
    /// Vertex positions, 3 floats per vertex.
    pub positions: ExpandingBuffer,
    /// Vertex colors, 3 floats (RGB) per vertex.
    pub colors: ExpandingBuffer,
}

/// Worst-case floats one chunk can emit per buffer: a checkerboard fill,
/// where every second voxel is solid and every face survives culling.
const CHUNK_WORST_CASE_FLOATS: usize = 2048 * 6 * VERTS_PER_FACE * 3;

impl MeshData {
    /// Create empty mesh data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create mesh data preallocated for a full chunk rebuild.
    pub fn for_chunk() -> Self {
        Self {
            positions: ExpandingBuffer::with_capacity(CHUNK_WORST_CASE_FLOATS),
            colors: ExpandingBuffer::with_capacity(CHUNK_WORST_CASE_FLOATS),
        }
    }

    /// Total vertices accumulated so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// True if no face has been emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Mesh a single voxel: decide which of its six faces are visible and
/// append their geometry and flat color into `out`.
///
/// A face is emitted iff the strictly adjacent material in that direction
/// is not active and the neighbor position is not eclipsed. Faces are
/// visited in the fixed order Left, Right, Bottom, Top, Front, Back; any
/// subset may be absent.
pub fn mesh_voxel(
    out: &mut MeshData,
    grid: &dyn MaterialGrid,
    visibility: &dyn Visibility,
    x: i32,
    y: i32,
    z: i32,
) {
    if !visibility.should_render(grid, x, y, z) {
        return;
    }

    let material = grid.material_at(x, y, z);
    let face_colors = tile(&material.rgb_f32(), VERTS_PER_FACE);

    let chunk = grid.chunk_pos();
    let gx = to_global(chunk.x, x);
    let gy = to_global(chunk.y, y);
    let gz = to_global(chunk.z, z);

    for face in Face::ALL {
        let offset = face.offset();
        let (nx, ny, nz) = (x + offset.x, y + offset.y, z + offset.z);

        if grid.material_at(nx, ny, nz).active {
            continue;
        }
        if visibility.is_eclipsed(grid, nx, ny, nz) {
            continue;
        }

        out.positions.extend_from_slice(&face.vertices(gx, gy, gz));
        out.colors.extend_from_slice(&face_colors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cobble_core::material::MaterialCode;
    use std::collections::HashMap;

    /// Grid stub holding explicit materials at a few cells, air elsewhere.
    struct TestGrid {
        chunk: ChunkPos,
        cells: HashMap<(i32, i32, i32), Material>,
    }

    impl TestGrid {
        fn new() -> Self {
            Self {
                chunk: ChunkPos::new(0, 0, 0),
                cells: HashMap::new(),
            }
        }

        fn solid(&mut self, x: i32, y: i32, z: i32, code: i8, rgb: [u8; 3]) {
            self.cells.insert(
                (x, y, z),
                Material {
                    code: MaterialCode(code),
                    color: [rgb[0], rgb[1], rgb[2], 255],
                    active: true,
                },
            );
        }
    }

    impl MaterialGrid for TestGrid {
        fn chunk_pos(&self) -> ChunkPos {
            self.chunk
        }

        fn material_at(&self, x: i32, y: i32, z: i32) -> Material {
            self.cells
                .get(&(x, y, z))
                .copied()
                .unwrap_or(Material::AIR)
        }
    }

    #[test]
    fn isolated_voxel_emits_six_faces() {
        let mut grid = TestGrid::new();
        grid.solid(5, 5, 5, 1, [128, 128, 128]);

        let mut out = MeshData::new();
        mesh_voxel(&mut out, &grid, &ActiveVisibility, 5, 5, 5);

        assert_eq!(out.vertex_count(), 36);
        assert_eq!(out.positions.len(), 108);
        assert_eq!(out.colors.len(), 108);
    }

    #[test]
    fn air_voxel_emits_nothing() {
        let grid = TestGrid::new();
        let mut out = MeshData::new();
        mesh_voxel(&mut out, &grid, &ActiveVisibility, 5, 5, 5);
        assert!(out.is_empty());
    }

    #[test]
    fn adjacent_pair_hides_shared_faces() {
        let mut grid = TestGrid::new();
        grid.solid(4, 5, 5, 1, [100, 100, 100]);
        grid.solid(5, 5, 5, 1, [100, 100, 100]);

        let mut out = MeshData::new();
        mesh_voxel(&mut out, &grid, &ActiveVisibility, 4, 5, 5);
        mesh_voxel(&mut out, &grid, &ActiveVisibility, 5, 5, 5);

        // 12 faces minus the two touching ones
        assert_eq!(out.vertex_count(), 10 * 6);
        assert_eq!(out.positions.len(), out.colors.len());
    }

    #[test]
    fn flat_color_tiled_across_all_vertices() {
        let mut grid = TestGrid::new();
        grid.solid(0, 0, 0, 2, [255, 0, 51]);

        let mut out = MeshData::new();
        mesh_voxel(&mut out, &grid, &ActiveVisibility, 0, 0, 0);

        let expected = grid.material_at(0, 0, 0).rgb_f32();
        for rgb in out.colors.as_slice().chunks_exact(3) {
            assert_eq!(rgb, expected);
        }
    }

    #[test]
    fn positions_use_global_coordinates() {
        let mut grid = TestGrid::new();
        grid.chunk = ChunkPos::new(2, 0, -1);
        grid.solid(3, 0, 0, 1, [10, 10, 10]);

        let mut out = MeshData::new();
        mesh_voxel(&mut out, &grid, &ActiveVisibility, 3, 0, 0);

        // Every x coordinate lies in [35, 36], every z in [-16, -15]
        for vertex in out.positions.as_slice().chunks_exact(3) {
            assert!(vertex[0] >= 35.0 && vertex[0] <= 36.0);
            assert!(vertex[2] >= -16.0 && vertex[2] <= -15.0);
        }
    }

    /// Suppresses rendering entirely.
    struct RenderNothing;

    impl Visibility for RenderNothing {
        fn should_render(&self, _: &dyn MaterialGrid, _: i32, _: i32, _: i32) -> bool {
            false
        }
        fn is_eclipsed(&self, _: &dyn MaterialGrid, _: i32, _: i32, _: i32) -> bool {
            false
        }
    }

    #[test]
    fn suppressed_voxel_emits_nothing() {
        let mut grid = TestGrid::new();
        grid.solid(5, 5, 5, 1, [128, 128, 128]);

        let mut out = MeshData::new();
        mesh_voxel(&mut out, &grid, &RenderNothing, 5, 5, 5);
        assert!(out.is_empty());
    }

    /// Eclipses one specific neighbor position.
    struct EclipseAt(i32, i32, i32);

    impl Visibility for EclipseAt {
        fn should_render(&self, grid: &dyn MaterialGrid, x: i32, y: i32, z: i32) -> bool {
            grid.material_at(x, y, z).active
        }
        fn is_eclipsed(&self, _: &dyn MaterialGrid, x: i32, y: i32, z: i32) -> bool {
            (x, y, z) == (self.0, self.1, self.2)
        }
    }

    #[test]
    fn eclipsed_neighbor_suppresses_one_face() {
        let mut grid = TestGrid::new();
        grid.solid(5, 5, 5, 1, [128, 128, 128]);

        let mut out = MeshData::new();
        // Eclipse the position left of the voxel: the Left face disappears
        mesh_voxel(&mut out, &grid, &EclipseAt(4, 5, 5), 5, 5, 5);

        assert_eq!(out.vertex_count(), 5 * 6);
        assert_eq!(out.positions.len(), out.colors.len());
    }
}
