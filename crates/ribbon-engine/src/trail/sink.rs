use crate::coords::Vec3;

/// Borrowed geometry handed to a [`GeometrySink`] during an upload.
#[derive(Debug, Copy, Clone)]
pub struct GeometryView<'a> {
    /// Window contents in slot order (what `indices` address).
    pub vertices: &'a [Vec3],
    /// Triangle-strip indices into `vertices`.
    pub indices: &'a [u32],
    /// Slot holding the oldest vertex. Drawing the strip in age order means
    /// walking slots starting here, wrapping at `vertices.len()`.
    pub oldest_slot: usize,
}

impl GeometryView<'_> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Receiver of trail geometry, typically a renderer owning GPU buffers.
///
/// `RibbonTrail::sync` only calls `upload` when the trail is dirty, and keeps
/// the trail dirty when `upload` fails so the next frame retries.
pub trait GeometrySink {
    type Error;

    fn upload(&mut self, view: GeometryView<'_>) -> Result<(), Self::Error>;
}
