//! Cube face directions and their fixed vertex tables.

use glam::IVec3;

/// Number of vertices emitted per face (two triangles).
pub const VERTS_PER_FACE: usize = 6;

/// Number of position floats emitted per face.
pub const FLOATS_PER_FACE: usize = VERTS_PER_FACE * 3;

/// One of the six axis-aligned cube faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// -X
    Left,
    /// +X
    Right,
    /// -Y
    Bottom,
    /// +Y
    Top,
    /// -Z
    Front,
    /// +Z
    Back,
}

impl Face {
    /// All faces in per-voxel emission order.
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Bottom,
        Self::Top,
        Self::Front,
        Self::Back,
    ];

    /// Unit offset to the neighboring voxel this face borders.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> IVec3 {
        match self {
            Self::Left => IVec3::NEG_X,
            Self::Right => IVec3::X,
            Self::Bottom => IVec3::NEG_Y,
            Self::Top => IVec3::Y,
            Self::Front => IVec3::NEG_Z,
            Self::Back => IVec3::Z,
        }
    }

    /// The six vertices (two triangles) covering this face of the unit cube
    /// at global position (x, y, z)-(x+1, y+1, z+1).
    ///
    /// Vertex ordering is fixed data, not computed. Left/Bottom/Front share
    /// one winding pattern and Right/Top/Back use the mirrored one, so every
    /// face winds counter-clockwise seen from outside the cube; downstream
    /// back-face culling relies on this.
    #[must_use]
    pub fn vertices(self, x: f32, y: f32, z: f32) -> [f32; FLOATS_PER_FACE] {
        let xp = x + 1.0;
        let yp = y + 1.0;
        let zp = z + 1.0;

        match self {
            Self::Left => [
                x, yp, z, //
                x, y, z, //
                x, y, zp, //
                x, yp, z, //
                x, y, zp, //
                x, yp, zp,
            ],
            Self::Right => [
                xp, yp, zp, //
                xp, y, zp, //
                xp, y, z, //
                xp, yp, zp, //
                xp, y, z, //
                xp, yp, z,
            ],
            Self::Bottom => [
                x, y, zp, //
                x, y, z, //
                xp, y, zp, //
                x, y, z, //
                xp, y, z, //
                xp, y, zp,
            ],
            Self::Top => [
                xp, yp, zp, //
                x, yp, z, //
                x, yp, zp, //
                xp, yp, zp, //
                xp, yp, z, //
                x, yp, z,
            ],
            Self::Front => [
                xp, yp, z, //
                xp, y, z, //
                x, y, z, //
                xp, yp, z, //
                x, y, z, //
                x, yp, z,
            ],
            Self::Back => [
                x, y, zp, //
                xp, y, zp, //
                xp, yp, zp, //
                x, yp, zp, //
                x, y, zp, //
                xp, yp, zp,
            ],
        }
    }
}
