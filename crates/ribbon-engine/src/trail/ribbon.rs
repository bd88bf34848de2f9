use crate::coords::Vec3;

use super::{GeometrySink, GeometryView, StripIndexSequencer, TrailError, VertexWindow};

/// Ribbon trail geometry: a sliding window of vertex pairs plus the triangle-strip
/// indices that draw it as a chain of quads.
///
/// A trail configured for `N` segments builds up to `4 + 2 * (N - 1)` vertices and
/// as many indices, then keeps that size: new pairs evict the oldest pair while the
/// index sequence stays frozen.
///
/// Index growth is tied to vertex growth (one index pair per vertex pair), so
/// `index_count() == vertex_count()` at all times and indices never reference an
/// empty slot.
///
/// # Threading
///
/// `RibbonTrail` has no internal synchronization. Producers and renderers on
/// different threads must go through [`SharedTrail`](super::SharedTrail), which
/// serializes every access behind a single lock.
#[derive(Debug, Clone)]
pub struct RibbonTrail {
    window: VertexWindow,
    indices: StripIndexSequencer,
    num_segments: usize,
    dirty: bool,
}

impl RibbonTrail {
    /// Creates an empty trail that builds up to `num_segments` quads.
    pub fn new(num_segments: usize) -> Result<Self, TrailError> {
        if num_segments < 1 {
            return Err(TrailError::InvalidSegmentCount {
                requested: num_segments,
            });
        }
        let capacity = max_vertex_count(num_segments).ok_or(TrailError::TooManySegments {
            requested: num_segments,
        })?;
        Ok(Self {
            window: VertexWindow::new(capacity),
            indices: StripIndexSequencer::new(capacity),
            num_segments,
            dirty: false,
        })
    }

    /// Adds a new leading edge to the ribbon, evicting the oldest pair when full.
    pub fn add_vertex_pair(&mut self, first: Vec3, second: Vec3) {
        self.window.add_pair(first, second);
        if self.indices.advance() && self.indices.is_complete() {
            log::debug!(
                "ribbon trail indices complete ({} indices for {} segments)",
                self.indices.len(),
                self.num_segments
            );
        }
        log::trace!("ribbon trail pair added; {} vertices", self.window.len());
        self.dirty = true;
    }

    /// Empties the trail back to its freshly constructed state and marks it dirty.
    pub fn reset(&mut self) {
        self.window.clear();
        self.indices.clear();
        self.dirty = true;
        log::debug!("ribbon trail reset");
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn num_segments(&self) -> usize {
        self.num_segments
    }

    /// Vertex (and index) count of a fully extended trail.
    #[inline]
    pub fn max_vertex_count(&self) -> usize {
        self.window.capacity()
    }

    /// True once the window holds its full complement of vertices.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.window.is_full()
    }

    /// Vertices in slot order; this is the layout `indices()` refers to.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        self.window.slots()
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        self.indices.as_slice()
    }

    /// Slot holding the oldest vertex.
    #[inline]
    pub fn oldest_slot(&self) -> usize {
        self.window.oldest_slot()
    }

    /// Vertices from oldest to newest.
    pub fn iter_vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.window.iter()
    }

    /// Returns true if geometry changed since the last acknowledged upload.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledges that the current geometry has been uploaded.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Forces the next sync to re-upload (e.g. after GPU buffers were lost).
    #[inline]
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Borrowed view of the current geometry.
    pub fn view(&self) -> GeometryView<'_> {
        GeometryView {
            vertices: self.vertices(),
            indices: self.indices(),
            oldest_slot: self.oldest_slot(),
        }
    }

    /// Uploads geometry to `sink` if dirty.
    ///
    /// Returns `Ok(true)` if an upload happened. On error the trail stays dirty.
    pub fn sync<S: GeometrySink>(&mut self, sink: &mut S) -> Result<bool, S::Error> {
        if !self.dirty {
            return Ok(false);
        }
        sink.upload(self.view())?;
        self.dirty = false;
        Ok(true)
    }
}

/// Vertex capacity of a trail with `num_segments` quads.
///
/// `None` for zero segments, or when the capacity would not fit a `u32` count
/// (indices and draw ranges are 32-bit).
pub fn max_vertex_count(num_segments: usize) -> Option<usize> {
    let capacity = num_segments.checked_sub(1)?.checked_mul(2)?.checked_add(4)?;
    u32::try_from(capacity).ok()?;
    Some(capacity)
}
