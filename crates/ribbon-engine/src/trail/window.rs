use crate::coords::Vec3;

/// Fixed-capacity sliding window over vertices, filled and evicted one pair at a time.
///
/// Storage is slot-addressed: while filling, pair `p` lands in slots `2p, 2p + 1`.
/// Once full, each new pair overwrites the slots of the evicted oldest pair, so slot
/// indices stay stable for the lifetime of the window and only their contents move.
///
/// Invariants:
/// - `len <= capacity`
/// - `len` and `capacity` are even
/// - `head` (oldest slot) is even and `< capacity` (or 0 when empty)
#[derive(Debug, Clone)]
pub struct VertexWindow {
    slots: Vec<Vec3>,
    capacity: usize,
    head: usize,
}

impl VertexWindow {
    /// Creates an empty window holding at most `capacity` vertices.
    ///
    /// `capacity` must be even and non-zero; `RibbonTrail` derives it from the
    /// segment count, which guarantees both.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 2 && capacity % 2 == 0, "capacity must be even and non-zero");
        Self {
            slots: Vec::new(),
            capacity,
            head: 0,
        }
    }

    /// Appends a pair as the newest entry, evicting the oldest pair first if full.
    pub fn add_pair(&mut self, first: Vec3, second: Vec3) {
        if self.is_full() {
            // The oldest pair's slots become the newest pair's slots.
            let slot = self.head;
            self.slots[slot] = first;
            self.slots[slot + 1] = second;
            self.head = (slot + 2) % self.capacity;
        } else {
            self.slots.push(first);
            self.slots.push(second);
        }
    }

    /// Number of vertices currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Empties the window. Capacity is unchanged and the slot cursor is rewound.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }

    /// Slot-addressed contents (the layout strip indices refer to).
    #[inline]
    pub fn slots(&self) -> &[Vec3] {
        &self.slots
    }

    /// Slot holding the oldest retained vertex.
    #[inline]
    pub fn oldest_slot(&self) -> usize {
        self.head
    }

    /// Returns the `i`-th oldest vertex.
    pub fn get(&self, i: usize) -> Option<Vec3> {
        if i >= self.slots.len() {
            return None;
        }
        Some(self.slots[(self.head + i) % self.slots.len()])
    }

    /// Iterates vertices from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: f32) -> Vec3 {
        Vec3::new(n, 0.0, 0.0)
    }

    fn push_pairs(w: &mut VertexWindow, pairs: std::ops::Range<u32>) {
        for p in pairs {
            let base = (p * 2) as f32;
            w.add_pair(v(base), v(base + 1.0));
        }
    }

    fn ages(w: &VertexWindow) -> Vec<f32> {
        w.iter().map(|p| p.x).collect()
    }

    // ── filling ───────────────────────────────────────────────────────────

    #[test]
    fn starts_empty() {
        let w = VertexWindow::new(8);
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
        assert_eq!(w.capacity(), 8);
        assert_eq!(w.get(0), None);
        assert_eq!(w.iter().count(), 0);
    }

    #[test]
    fn fills_slots_in_insertion_order() {
        let mut w = VertexWindow::new(8);
        push_pairs(&mut w, 0..3);
        assert_eq!(w.len(), 6);
        assert!(!w.is_full());
        assert_eq!(w.oldest_slot(), 0);
        let slots: Vec<f32> = w.slots().iter().map(|p| p.x).collect();
        assert_eq!(slots, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    // ── eviction ──────────────────────────────────────────────────────────

    #[test]
    fn never_exceeds_capacity() {
        let mut w = VertexWindow::new(4);
        for p in 0..10 {
            push_pairs(&mut w, p..p + 1);
            assert!(w.len() <= 4);
            assert_eq!(w.len() % 2, 0);
        }
        assert_eq!(w.len(), 4);
    }

    #[test]
    fn evicts_oldest_pair_into_its_slots() {
        let mut w = VertexWindow::new(8);
        push_pairs(&mut w, 0..5);
        // Pair 4 (vertices 8, 9) replaced pair 0 in slots 0-1.
        let slots: Vec<f32> = w.slots().iter().map(|p| p.x).collect();
        assert_eq!(slots, vec![8.0, 9.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(w.oldest_slot(), 2);
    }

    #[test]
    fn eviction_keeps_age_order() {
        let mut w = VertexWindow::new(6);
        push_pairs(&mut w, 0..7);
        // 7 pairs into 3 slots-pairs: pairs 0..4 evicted, 4, 5, 6 survive.
        assert_eq!(ages(&w), vec![8.0, 9.0, 10.0, 11.0, 12.0, 13.0]);
        assert_eq!(w.get(0), Some(v(8.0)));
        assert_eq!(w.get(5), Some(v(13.0)));
        assert_eq!(w.get(6), None);
    }

    #[test]
    fn oldest_surviving_pair_follows_eviction_count() {
        let mut w = VertexWindow::new(8);
        push_pairs(&mut w, 0..4);
        for evicted in 1..=9u32 {
            push_pairs(&mut w, 3 + evicted..4 + evicted);
            let oldest = w.get(0).map(|p| p.x);
            assert_eq!(oldest, Some((evicted * 2) as f32));
        }
    }

    #[test]
    fn head_wraps_back_to_slot_zero() {
        let mut w = VertexWindow::new(4);
        push_pairs(&mut w, 0..4);
        assert_eq!(w.oldest_slot(), 0);
        assert_eq!(ages(&w), vec![4.0, 5.0, 6.0, 7.0]);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_rewinds_slots_and_keeps_capacity() {
        let mut w = VertexWindow::new(4);
        push_pairs(&mut w, 0..3);
        w.clear();
        assert!(w.is_empty());
        assert_eq!(w.capacity(), 4);
        assert_eq!(w.oldest_slot(), 0);

        push_pairs(&mut w, 10..11);
        assert_eq!(w.slots(), &[v(20.0), v(21.0)]);
    }
}
