use std::sync::Arc;

use parking_lot::Mutex;

use crate::coords::Vec3;

use super::{GeometrySink, RibbonTrail, TrailError};

/// Thread-shareable handle to a [`RibbonTrail`].
///
/// Every read and write takes the same lock, so a growth thread and a render
/// thread never observe a half-applied `add_vertex_pair`. Clones share the trail.
///
/// Lock scopes are kept to a single operation; renderers that need the data
/// outside the lock take a [`TrailSnapshot`] or go through [`SharedTrail::sync`].
#[derive(Debug, Clone)]
pub struct SharedTrail {
    inner: Arc<Mutex<RibbonTrail>>,
}

/// Owned copy of trail geometry taken under the lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrailSnapshot {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub oldest_slot: usize,
    pub vertex_count: usize,
    pub index_count: usize,
    pub max_vertex_count: usize,
}

impl SharedTrail {
    pub fn new(num_segments: usize) -> Result<Self, TrailError> {
        RibbonTrail::new(num_segments).map(Self::from_trail)
    }

    pub fn from_trail(trail: RibbonTrail) -> Self {
        Self {
            inner: Arc::new(Mutex::new(trail)),
        }
    }

    pub fn add_vertex_pair(&self, first: Vec3, second: Vec3) {
        self.inner.lock().add_vertex_pair(first, second);
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.lock().vertex_count()
    }

    pub fn index_count(&self) -> usize {
        self.inner.lock().index_count()
    }

    pub fn is_dirty(&self) -> bool {
        self.inner.lock().is_dirty()
    }

    /// Runs `f` with shared access to the trail while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&RibbonTrail) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs `f` with exclusive access to the trail while holding the lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut RibbonTrail) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Copies the current geometry out of the trail.
    pub fn snapshot(&self) -> TrailSnapshot {
        let trail = self.inner.lock();
        TrailSnapshot {
            vertices: trail.vertices().to_vec(),
            indices: trail.indices().to_vec(),
            oldest_slot: trail.oldest_slot(),
            vertex_count: trail.vertex_count(),
            index_count: trail.index_count(),
            max_vertex_count: trail.max_vertex_count(),
        }
    }

    /// Uploads to `sink` if dirty, holding the lock for the duration of the upload.
    pub fn sync<S: GeometrySink>(&self, sink: &mut S) -> Result<bool, S::Error> {
        self.inner.lock().sync(sink)
    }
}
