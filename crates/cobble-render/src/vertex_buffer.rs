//! The vertex buffer object: staged source data, validated GPU upload,
//! and draw-call recording.

use ash::vk;
use cobble_core::buffer::ExpandingBuffer;
use cobble_gpu::error::{GpuError, Result};
use cobble_gpu::memory::{GpuAllocator, GpuBuffer};
use tracing::debug;

use crate::debug::PrimitiveMode;
use crate::layout::VertexLayout;

/// A vertex buffer with layout-driven packing.
///
/// Mutations (`set_coordinates`, `set_channels`, `set_normals`) only stage
/// source data. `validate` packs and uploads it, committing the vertex
/// count that subsequent draws use. Rendering a mutated-but-unvalidated
/// buffer draws the stale committed data; calling `validate` after every
/// mutation is the caller's contract, not a runtime guard.
pub struct VertexBuffer {
    layout: VertexLayout,
    mode: PrimitiveMode,
    coordinates: ExpandingBuffer,
    channels: ExpandingBuffer,
    normals: ExpandingBuffer,
    gpu: Option<GpuBuffer>,
    committed_vertices: u32,
    dirty: bool,
}

impl VertexBuffer {
    /// Create an empty vertex buffer for the given layout, drawing filled
    /// triangles.
    pub fn new(layout: VertexLayout) -> Self {
        Self::with_mode(layout, PrimitiveMode::Triangles)
    }

    /// Create an empty vertex buffer with an explicit primitive mode.
    pub fn with_mode(layout: VertexLayout, mode: PrimitiveMode) -> Self {
        Self {
            layout,
            mode,
            coordinates: ExpandingBuffer::new(),
            channels: ExpandingBuffer::new(),
            normals: ExpandingBuffer::new(),
            gpu: None,
            committed_vertices: 0,
            dirty: false,
        }
    }

    /// The layout this buffer packs against.
    pub const fn layout(&self) -> VertexLayout {
        self.layout
    }

    /// Replace the position source data. Nothing is uploaded until
    /// `validate` runs.
    pub fn set_coordinates(&mut self, data: ExpandingBuffer) {
        self.coordinates = data;
        self.dirty = true;
    }

    /// Replace the color channel source data.
    pub fn set_channels(&mut self, data: ExpandingBuffer) {
        self.channels = data;
        self.dirty = true;
    }

    /// Replace the normal source data.
    pub fn set_normals(&mut self, data: ExpandingBuffer) {
        self.normals = data;
        self.dirty = true;
    }

    /// Current primitive mode.
    pub const fn primitive_mode(&self) -> PrimitiveMode {
        self.mode
    }

    /// Switch the primitive mode. Draw-time state only; the packed data is
    /// untouched and no re-validation is needed.
    pub fn set_primitive_mode(&mut self, mode: PrimitiveMode) {
        self.mode = mode;
    }

    /// Vertices described by the staged coordinate data.
    pub fn vertex_count(&self) -> usize {
        self.layout.vertex_count(self.coordinates.len())
    }

    /// Vertices committed by the last successful `validate`.
    pub const fn committed_vertex_count(&self) -> u32 {
        self.committed_vertices
    }

    /// True if the source data changed since the last `validate`.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Pack the staged data per the layout and upload it to the GPU.
    ///
    /// Must run on the thread owning the graphics context. The backing
    /// buffer is recreated only when the packed data outgrows it. On error
    /// the previously committed data stays valid.
    pub fn validate(&mut self, allocator: &mut GpuAllocator) -> Result<()> {
        let packed = self
            .layout
            .pack(
                self.coordinates.as_slice(),
                self.channels.as_slice(),
                self.normals.as_slice(),
            )
            .map_err(|e| GpuError::InvalidState(e.to_string()))?;

        let byte_len = (packed.len() * std::mem::size_of::<f32>()) as u64;
        if byte_len > 0 {
            let needs_new = self.gpu.as_ref().map_or(true, |gpu| gpu.size < byte_len);
            if needs_new {
                if let Some(mut old) = self.gpu.take() {
                    allocator.free_buffer(&mut old)?;
                }
                self.gpu = Some(allocator.create_vertex_buffer(byte_len, "vertex_data")?);
            }
            if let Some(gpu) = &self.gpu {
                gpu.write(&packed)?;
            }
        }

        self.committed_vertices = self.layout.vertex_count(self.coordinates.len()) as u32;
        self.dirty = false;
        debug!(
            vertices = self.committed_vertices,
            bytes = byte_len,
            "validated vertex buffer"
        );
        Ok(())
    }

    /// Record a draw over the committed vertex count.
    ///
    /// Binds the buffer, sets the dynamic primitive topology, and issues
    /// the draw. The bound pipeline must declare
    /// `VK_DYNAMIC_STATE_PRIMITIVE_TOPOLOGY`. Recording nothing when no
    /// vertices are committed keeps empty chunks free.
    ///
    /// # Safety
    /// The command buffer must be in recording state on the graphics
    /// context thread.
    pub unsafe fn record_draw(&self, device: &ash::Device, cmd: vk::CommandBuffer) {
        let Some(gpu) = &self.gpu else {
            return;
        };
        if self.committed_vertices == 0 {
            return;
        }

        unsafe {
            device.cmd_bind_vertex_buffers(cmd, 0, &[gpu.buffer], &[0]);
            device.cmd_set_primitive_topology(cmd, self.mode.as_vk());
            device.cmd_draw(cmd, self.committed_vertices, 1, 0, 0);
        }
    }

    /// Free the GPU-side buffer.
    ///
    /// # Arguments
    /// * `allocator` - GPU memory allocator used to create the buffer
    pub fn destroy(mut self, allocator: &mut GpuAllocator) -> Result<()> {
        if let Some(mut gpu) = self.gpu.take() {
            allocator.free_buffer(&mut gpu)?;
        }
        Ok(())
    }
}
