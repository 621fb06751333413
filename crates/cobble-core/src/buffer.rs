//! Growable and tiling buffers for mesh accumulation.

/// Capacity granted to an empty buffer on its first append.
const MIN_CAPACITY: usize = 64;

/// Append-only sequence of f32 values with amortized O(1) growth.
///
/// Capacity doubles whenever an append would exceed it, so storage may
/// over-allocate; the logical length is always exact. Elements are never
/// lost or reordered across growth events.
#[derive(Clone, Debug, Default)]
pub struct ExpandingBuffer {
    data: Vec<f32>,
}

impl ExpandingBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty buffer with room for `capacity` elements.
    ///
    /// Useful when the final size is roughly known, e.g. a worst-case
    /// chunk mesh.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements appended so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if nothing has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current allocated capacity in elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Append a single value.
    #[inline]
    pub fn push(&mut self, value: f32) {
        self.ensure_capacity(self.data.len() + 1);
        self.data.push(value);
    }

    /// Append all values from a slice, preserving their order.
    #[inline]
    pub fn extend_from_slice(&mut self, values: &[f32]) {
        self.ensure_capacity(self.data.len() + values.len());
        self.data.extend_from_slice(values);
    }

    /// View the appended elements in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Drop all elements, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consume the buffer, yielding its backing storage.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Grow to at least `required` elements by doubling the current
    /// capacity, so repeated appends stay amortized O(1).
    fn ensure_capacity(&mut self, required: usize) {
        let capacity = self.data.capacity();
        if required <= capacity {
            return;
        }
        let grown = capacity.max(MIN_CAPACITY / 2) * 2;
        self.data
            .reserve_exact(grown.max(required) - self.data.len());
    }
}

impl From<Vec<f32>> for ExpandingBuffer {
    fn from(data: Vec<f32>) -> Self {
        Self { data }
    }
}

/// Replicate `pattern` verbatim `repeat_count` times into a new sequence.
///
/// The result has length `pattern.len() * repeat_count` and preserves
/// element order within each copy. Used to splat one flat color across all
/// six vertices of a face.
pub fn tile(pattern: &[f32], repeat_count: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(pattern.len() * repeat_count);
    for _ in 0..repeat_count {
        out.extend_from_slice(pattern);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_order_across_growth() {
        // Spans several doublings starting from the minimum capacity
        for n in [0usize, 1, 63, 64, 65, 640] {
            let mut buffer = ExpandingBuffer::new();
            for i in 0..n {
                buffer.push(i as f32);
            }
            assert_eq!(buffer.len(), n);
            for (i, &value) in buffer.as_slice().iter().enumerate() {
                assert_eq!(value, i as f32);
            }
        }
    }

    #[test]
    fn growth_doubles_capacity() {
        let mut buffer = ExpandingBuffer::with_capacity(4);
        for i in 0..5 {
            buffer.push(i as f32);
        }
        assert!(buffer.capacity() >= 8);
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn extend_crossing_capacity_boundary() {
        let mut buffer = ExpandingBuffer::with_capacity(4);
        buffer.push(0.0);
        let tail: Vec<f32> = (1..100).map(|i| i as f32).collect();
        buffer.extend_from_slice(&tail);

        assert_eq!(buffer.len(), 100);
        for (i, &value) in buffer.as_slice().iter().enumerate() {
            assert_eq!(value, i as f32);
        }
    }

    #[test]
    fn clear_keeps_allocation() {
        let mut buffer = ExpandingBuffer::new();
        buffer.extend_from_slice(&[1.0, 2.0, 3.0]);
        let capacity = buffer.capacity();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), capacity);
    }

    #[test]
    fn tile_repeats_pattern_in_order() {
        let tiled = tile(&[0.25, 0.5, 0.75], 6);
        assert_eq!(tiled.len(), 18);
        for copy in tiled.chunks_exact(3) {
            assert_eq!(copy, &[0.25, 0.5, 0.75]);
        }
    }

    #[test]
    fn tile_empty_cases() {
        assert!(tile(&[], 6).is_empty());
        assert!(tile(&[1.0, 2.0], 0).is_empty());
    }
}
