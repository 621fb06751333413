//! Debug primitive-mode toggle.
//!
//! An external input collaborator switches the mode to inspect mesh
//! structure as points or wireframe lines. Switching never touches mesh
//! content; it is purely draw-time state.

use ash::vk;

/// Primitive topology used when drawing a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveMode {
    /// One point per vertex.
    Points,
    /// Line list over consecutive vertex pairs.
    Lines,
    /// Filled triangle list (default).
    #[default]
    Triangles,
}

impl PrimitiveMode {
    /// Cycle to the next mode.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Points => Self::Lines,
            Self::Lines => Self::Triangles,
            Self::Triangles => Self::Points,
        }
    }

    /// The Vulkan topology for this mode.
    #[must_use]
    pub const fn as_vk(self) -> vk::PrimitiveTopology {
        match self {
            Self::Points => vk::PrimitiveTopology::POINT_LIST,
            Self::Lines => vk::PrimitiveTopology::LINE_LIST,
            Self::Triangles => vk::PrimitiveTopology::TRIANGLE_LIST,
        }
    }
}
