//! Vertex layout configuration and layout-driven packing.

use ash::vk;
use thiserror::Error;

/// Errors from packing vertex data against a layout.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VertexDataError {
    /// Coordinate float count does not divide into whole vertices.
    #[error("coordinate length {len} is not a multiple of {components} position components")]
    MisalignedCoordinates { len: usize, components: usize },

    /// Color channel float count disagrees with the coordinate data.
    #[error("channel data holds {got} floats, layout expects {expected}")]
    ChannelCountMismatch { got: usize, expected: usize },

    /// Normal float count disagrees with the coordinate data.
    #[error("normal data holds {got} floats, layout expects {expected}")]
    NormalCountMismatch { got: usize, expected: usize },
}

/// Number of position components per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionFormat {
    /// 2D positions (XY)
    Xy,
    /// 3D positions (XYZ)
    #[default]
    Xyz,
}

impl PositionFormat {
    /// Floats per vertex for this format.
    #[inline]
    #[must_use]
    pub const fn components(self) -> usize {
        match self {
            Self::Xy => 2,
            Self::Xyz => 3,
        }
    }

    const fn vk_format(self) -> vk::Format {
        match self {
            Self::Xy => vk::Format::R32G32_SFLOAT,
            Self::Xyz => vk::Format::R32G32B32_SFLOAT,
        }
    }
}

/// Number of color components per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFormat {
    /// No color channel
    Disabled,
    /// Opaque RGB
    #[default]
    Rgb,
    /// RGBA with alpha
    Rgba,
}

impl ColorFormat {
    /// Floats per vertex for this format.
    #[inline]
    #[must_use]
    pub const fn components(self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    const fn vk_format(self) -> vk::Format {
        match self {
            Self::Disabled => vk::Format::UNDEFINED,
            Self::Rgb => vk::Format::R32G32B32_SFLOAT,
            Self::Rgba => vk::Format::R32G32B32A32_SFLOAT,
        }
    }
}

/// Whether a 3-float normal is packed per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalFormat {
    /// No normals
    #[default]
    Disabled,
    /// One normal per vertex
    Enabled,
}

impl NormalFormat {
    /// Floats per vertex for this format.
    #[inline]
    #[must_use]
    pub const fn components(self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Enabled => 3,
        }
    }
}

/// How raw position/color/normal sequences are packed for upload.
///
/// Data is interleaved into a single tightly-packed binding; the layout
/// reports stride and attribute offsets for pipeline vertex-input state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexLayout {
    /// Position channel count
    pub position: PositionFormat,
    /// Color channel count
    pub color: ColorFormat,
    /// Normal channel toggle
    pub normal: NormalFormat,
}

impl VertexLayout {
    /// The chunk-mesh layout: XYZ positions with RGB colors.
    pub const XYZ_RGB: Self = Self {
        position: PositionFormat::Xyz,
        color: ColorFormat::Rgb,
        normal: NormalFormat::Disabled,
    };

    /// Floats packed per vertex.
    #[inline]
    #[must_use]
    pub const fn floats_per_vertex(self) -> usize {
        self.position.components() + self.color.components() + self.normal.components()
    }

    /// Packed stride in bytes.
    #[inline]
    #[must_use]
    pub const fn stride(self) -> u32 {
        (self.floats_per_vertex() * std::mem::size_of::<f32>()) as u32
    }

    /// Vertices described by `coordinate_floats` position floats.
    ///
    /// The vertex count always derives from the layout and the buffer
    /// length; it is never tracked separately.
    #[inline]
    #[must_use]
    pub const fn vertex_count(self, coordinate_floats: usize) -> usize {
        coordinate_floats / self.position.components()
    }

    /// Vertex input binding for pipeline creation (binding 0).
    #[must_use]
    pub fn binding_description(self) -> vk::VertexInputBindingDescription {
        vk::VertexInputBindingDescription::default()
            .binding(0)
            .stride(self.stride())
            .input_rate(vk::VertexInputRate::VERTEX)
    }

    /// Vertex input attributes for pipeline creation, in packing order.
    #[must_use]
    pub fn attribute_descriptions(self) -> Vec<vk::VertexInputAttributeDescription> {
        let mut attributes = Vec::with_capacity(3);
        let mut location = 0;
        let mut offset = 0u32;

        attributes.push(
            vk::VertexInputAttributeDescription::default()
                .binding(0)
                .location(location)
                .format(self.position.vk_format())
                .offset(offset),
        );
        location += 1;
        offset += (self.position.components() * std::mem::size_of::<f32>()) as u32;

        if self.color != ColorFormat::Disabled {
            attributes.push(
                vk::VertexInputAttributeDescription::default()
                    .binding(0)
                    .location(location)
                    .format(self.color.vk_format())
                    .offset(offset),
            );
            location += 1;
            offset += (self.color.components() * std::mem::size_of::<f32>()) as u32;
        }

        if self.normal == NormalFormat::Enabled {
            attributes.push(
                vk::VertexInputAttributeDescription::default()
                    .binding(0)
                    .location(location)
                    .format(vk::Format::R32G32B32_SFLOAT)
                    .offset(offset),
            );
        }

        attributes
    }

    /// Interleave the separate sequences into one packed stream.
    ///
    /// Validates that the coordinate data divides into whole vertices and
    /// that every enabled channel covers exactly the same vertex count.
    pub fn pack(
        self,
        coordinates: &[f32],
        channels: &[f32],
        normals: &[f32],
    ) -> Result<Vec<f32>, VertexDataError> {
        let position_components = self.position.components();
        if coordinates.len() % position_components != 0 {
            return Err(VertexDataError::MisalignedCoordinates {
                len: coordinates.len(),
                components: position_components,
            });
        }
        let vertex_count = coordinates.len() / position_components;

        let expected_channels = vertex_count * self.color.components();
        if channels.len() != expected_channels {
            return Err(VertexDataError::ChannelCountMismatch {
                got: channels.len(),
                expected: expected_channels,
            });
        }

        let expected_normals = vertex_count * self.normal.components();
        if normals.len() != expected_normals {
            return Err(VertexDataError::NormalCountMismatch {
                got: normals.len(),
                expected: expected_normals,
            });
        }

        let color_components = self.color.components();
        let normal_components = self.normal.components();
        let mut packed = Vec::with_capacity(vertex_count * self.floats_per_vertex());
        for vertex in 0..vertex_count {
            let p = vertex * position_components;
            packed.extend_from_slice(&coordinates[p..p + position_components]);
            if color_components > 0 {
                let c = vertex * color_components;
                packed.extend_from_slice(&channels[c..c + color_components]);
            }
            if normal_components > 0 {
                let n = vertex * normal_components;
                packed.extend_from_slice(&normals[n..n + normal_components]);
            }
        }

        Ok(packed)
    }
}
