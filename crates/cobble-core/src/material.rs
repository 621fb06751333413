//! Material codes, descriptors, and the registry.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Number of addressable material slots (one per signed 8-bit code).
const SLOT_COUNT: usize = 256;

/// Identity of a material: a signed 8-bit code stored per voxel.
///
/// Code 0 is reserved for air (empty, non-occluding space).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct MaterialCode(pub i8);

impl MaterialCode {
    /// Air (empty space)
    pub const AIR: Self = Self(0);

    /// Registry slot for this code.
    #[inline]
    pub const fn slot(self) -> usize {
        (self.0 as i16 + 128) as usize
    }

    /// Returns true if this code is air
    #[inline]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }
}

/// Material descriptor shared by all voxels with the same code.
///
/// Immutable once registered; replaced wholesale by re-registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// The code this descriptor was registered under
    pub code: MaterialCode,
    /// RGBA color (0-255 per channel)
    pub color: [u8; 4],
    /// Whether voxels of this material occlude and render.
    /// Inactive materials never contribute faces and never block a
    /// neighbor's face.
    pub active: bool,
}

impl Material {
    /// The air descriptor: fully transparent, inactive.
    pub const AIR: Self = Self {
        code: MaterialCode::AIR,
        color: [255, 255, 255, 0],
        active: false,
    };

    /// Normalized RGB triple, the color source pattern for face emission.
    #[inline]
    pub fn rgb_f32(&self) -> [f32; 3] {
        [
            f32::from(self.color[0]) / 255.0,
            f32::from(self.color[1]) / 255.0,
            f32::from(self.color[2]) / 255.0,
        ]
    }
}

/// Registry mapping every material code to its descriptor.
///
/// An explicit object passed by reference to consumers; there is no global
/// registry. All 256 slots start as the air descriptor, so lookup is total:
/// codes that were never registered resolve to air. Materials are expected
/// to be registered once at startup, before meshing begins; after that the
/// registry is read-only and safe to share across meshing threads.
pub struct MaterialRegistry {
    slots: [Material; SLOT_COUNT],
    registered: [bool; SLOT_COUNT],
}

impl MaterialRegistry {
    /// Create a registry with every slot resolved to air.
    pub fn new() -> Self {
        let mut registry = Self {
            slots: [Material::AIR; SLOT_COUNT],
            registered: [false; SLOT_COUNT],
        };
        registry.registered[MaterialCode::AIR.slot()] = true;
        registry
    }

    /// Register a material descriptor under the given code.
    ///
    /// Registering the same code twice silently replaces the earlier
    /// descriptor: the last registration for a code wins. This includes
    /// code 0, which the engine expects to remain the inactive air
    /// material; callers that overwrite it get what they asked for.
    pub fn register(&mut self, code: MaterialCode, color: [u8; 4], active: bool) -> Material {
        let material = Material {
            code,
            color,
            active,
        };
        self.slots[code.slot()] = material;
        self.registered[code.slot()] = true;
        material
    }

    /// Look up the descriptor for a code. Total over all 256 codes.
    #[inline]
    pub fn get(&self, code: MaterialCode) -> &Material {
        &self.slots[code.slot()]
    }

    /// Whether voxels of this code occlude and render.
    #[inline]
    pub fn is_active(&self, code: MaterialCode) -> bool {
        self.slots[code.slot()].active
    }

    /// Whether a descriptor was ever explicitly registered for this code.
    #[inline]
    pub fn is_registered(&self, code: MaterialCode) -> bool {
        self.registered[code.slot()]
    }

    /// Number of explicitly registered codes (air counts).
    pub fn registered_count(&self) -> usize {
        self.registered.iter().filter(|&&r| r).count()
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}
