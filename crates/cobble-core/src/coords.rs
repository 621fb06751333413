//! Coordinate systems for the voxel world.

use crate::constants::CHUNK_SIZE;
use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Position within a chunk (0 to CHUNK_SIZE-1 per axis).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct LocalPos {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl LocalPos {
    /// Create a new local position
    #[inline]
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        debug_assert!((x as usize) < CHUNK_SIZE);
        debug_assert!((y as usize) < CHUNK_SIZE);
        debug_assert!((z as usize) < CHUNK_SIZE);
        Self { x, y, z }
    }

    /// Create a local position from caller-supplied coordinates, validating bounds.
    ///
    /// Grid writes assume in-range coordinates; layers accepting untrusted
    /// input go through this instead.
    pub fn try_new(x: i32, y: i32, z: i32) -> Result<Self> {
        let max = CHUNK_SIZE as i32;
        if x < 0 || x >= max || y < 0 || y >= max || z < 0 || z >= max {
            return Err(Error::OutOfBounds(format!(
                "local position ({x}, {y}, {z}) outside [0, {}]",
                CHUNK_SIZE - 1
            )));
        }
        Ok(Self::new(x as u8, y as u8, z as u8))
    }

    /// Convert to linear index for flat array storage: `x + 16*y + 256*z`
    #[inline]
    pub const fn to_index(self) -> usize {
        self.x as usize
            + (self.y as usize) * CHUNK_SIZE
            + (self.z as usize) * CHUNK_SIZE * CHUNK_SIZE
    }

    /// Create from linear index
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        let x = (index % CHUNK_SIZE) as u8;
        let y = ((index / CHUNK_SIZE) % CHUNK_SIZE) as u8;
        let z = (index / (CHUNK_SIZE * CHUNK_SIZE)) as u8;
        Self { x, y, z }
    }
}

/// Chunk position in chunk-grid coordinates.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPos {
    /// Create a new chunk position
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// World-space origin of this chunk (its minimum corner).
    #[inline]
    pub fn world_origin(self) -> Vec3 {
        Vec3::new(
            to_global(self.x, 0),
            to_global(self.y, 0),
            to_global(self.z, 0),
        )
    }

    /// Get the six neighboring chunk positions
    pub fn neighbors(self) -> [ChunkPos; 6] {
        [
            ChunkPos::new(self.x - 1, self.y, self.z),
            ChunkPos::new(self.x + 1, self.y, self.z),
            ChunkPos::new(self.x, self.y - 1, self.z),
            ChunkPos::new(self.x, self.y + 1, self.z),
            ChunkPos::new(self.x, self.y, self.z - 1),
            ChunkPos::new(self.x, self.y, self.z + 1),
        ]
    }

    /// Convert to glam IVec3
    #[inline]
    pub const fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl From<IVec3> for ChunkPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Convert a local coordinate to the global coordinate along one axis.
#[inline]
pub fn to_global(chunk_coord: i32, local: i32) -> f32 {
    (local + chunk_coord * CHUNK_SIZE as i32) as f32
}

/// Convert a global coordinate to a local chunk coordinate along one axis.
///
/// The subtraction happens before flooring, never after, and the result is
/// not clamped: values outside [0, 15] signal a neighbor-chunk lookup.
#[inline]
pub fn to_local(chunk_coord: i32, global: f32) -> i32 {
    (global - (chunk_coord * CHUNK_SIZE as i32) as f32).floor() as i32
}
