/// Incremental builder for the triangle-strip index sequence of a ribbon.
///
/// Triangle-strip assembly turns every three consecutive indices into a triangle,
/// alternating winding each step. For a flat chain of quads, every other vertex
/// pair must be emitted in reversed order, which yields:
///
/// ```text
/// 0, 1, 3, 2, 4, 5, 7, 6, 8, 9, 11, 10, ...
/// ```
///
/// Indices address window *slots*, not vertex identities. The sequence grows by one
/// pair per vertex pair added and freezes at `capacity` entries; from then on it is
/// reused unchanged every frame while the window recycles its slots.
#[derive(Debug, Clone)]
pub struct StripIndexSequencer {
    indices: Vec<u32>,
    capacity: usize,
}

impl StripIndexSequencer {
    pub fn new(capacity: usize) -> Self {
        Self {
            indices: Vec::new(),
            capacity,
        }
    }

    /// Appends the indices for the next vertex pair.
    ///
    /// Returns `false` (and leaves the sequence untouched) once it is complete.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        let pairs_added = self.indices.len() / 2 + 1;
        match pair_indices(pairs_added) {
            Some(pair) => {
                self.indices.extend_from_slice(&pair);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.indices.len() >= self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    /// Drops every index; the next `advance` starts again from pair 1.
    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

/// Indices contributed by the `pairs_added`-th vertex pair (counting from 1).
///
/// Odd pairs keep natural order, even pairs are reversed. `None` for pair 0 or
/// once the slots no longer fit in `u32`.
pub fn pair_indices(pairs_added: usize) -> Option<[u32; 2]> {
    let lower = pairs_added.checked_sub(1)?.checked_mul(2)?;
    let lower = u32::try_from(lower).ok()?;
    let upper = lower.checked_add(1)?;
    if pairs_added % 2 == 1 {
        Some([lower, upper])
    } else {
        Some([upper, lower])
    }
}

/// Indices contributed by segment `segment` (0-based).
///
/// Segment 0 owns both of its vertex pairs; every later segment only adds its
/// trailing pair, since the leading pair is shared with the previous segment.
///
/// `None` once the segment's slots no longer fit in `u32`.
pub fn segment_indices(segment: usize) -> Option<Vec<u32>> {
    if segment == 0 {
        return Some(vec![0, 1, 3, 2]);
    }
    let lower = (segment - 1).checked_mul(2)?.checked_add(4)?;
    let lower = u32::try_from(lower).ok()?;
    let upper = lower.checked_add(1)?;
    if segment % 2 == 1 {
        Some(vec![lower, upper])
    } else {
        Some(vec![upper, lower])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(capacity: usize, pairs: usize) -> Vec<u32> {
        let mut seq = StripIndexSequencer::new(capacity);
        for _ in 0..pairs {
            seq.advance();
        }
        seq.as_slice().to_vec()
    }

    // ── formulations ──────────────────────────────────────────────────────

    #[test]
    fn pair_rule_alternates_order() {
        assert_eq!(pair_indices(1), Some([0, 1]));
        assert_eq!(pair_indices(2), Some([3, 2]));
        assert_eq!(pair_indices(3), Some([4, 5]));
        assert_eq!(pair_indices(4), Some([7, 6]));
        assert_eq!(pair_indices(5), Some([8, 9]));
        assert_eq!(pair_indices(6), Some([11, 10]));
    }

    #[test]
    fn no_pair_zero() {
        assert_eq!(pair_indices(0), None);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn slots_past_u32_are_not_truncated() {
        // Pair 2^31 covers slots 2^32 - 2 and 2^32 - 1, the last addressable ones.
        let last = 1usize << 31;
        assert_eq!(pair_indices(last), Some([u32::MAX, u32::MAX - 1]));
        assert_eq!(pair_indices(last + 1), None);
        assert_eq!(pair_indices(usize::MAX), None);

        // Segment k's trailing pair starts at slot 2k + 2.
        assert_eq!(segment_indices(last - 2), Some(vec![u32::MAX, u32::MAX - 1]));
        assert_eq!(segment_indices(last - 1), None);
        assert_eq!(segment_indices(usize::MAX), None);
    }

    #[test]
    fn segment_and_pair_rules_agree() {
        for segments in 1..=12 {
            let by_segment: Vec<u32> = (0..segments)
                .flat_map(|s| segment_indices(s).unwrap())
                .collect();
            let by_pair: Vec<u32> = (1..=segments + 1)
                .flat_map(|p| pair_indices(p).unwrap())
                .collect();
            assert_eq!(by_segment, by_pair, "segments = {segments}");
        }
    }

    #[test]
    fn every_slot_referenced_exactly_once() {
        let capacity = 4 + 2 * 9;
        let mut seen = built(capacity, 100);
        seen.sort_unstable();
        let expected: Vec<u32> = (0..capacity as u32).collect();
        assert_eq!(seen, expected);
    }

    // ── incremental build ─────────────────────────────────────────────────

    #[test]
    fn grows_one_pair_at_a_time() {
        let mut seq = StripIndexSequencer::new(8);
        assert!(seq.is_empty());
        assert!(seq.advance());
        assert_eq!(seq.as_slice(), &[0, 1]);
        assert!(seq.advance());
        assert_eq!(seq.as_slice(), &[0, 1, 3, 2]);
        assert!(seq.advance());
        assert!(seq.advance());
        assert_eq!(seq.as_slice(), &[0, 1, 3, 2, 4, 5, 7, 6]);
        assert!(seq.is_complete());
    }

    #[test]
    fn freezes_at_capacity() {
        let mut seq = StripIndexSequencer::new(4);
        seq.advance();
        seq.advance();
        for _ in 0..10 {
            assert!(!seq.advance());
        }
        assert_eq!(seq.as_slice(), &[0, 1, 3, 2]);
        assert_eq!(seq.len(), seq.capacity());
    }

    #[test]
    fn clear_restarts_from_first_pair() {
        let mut seq = StripIndexSequencer::new(6);
        for _ in 0..5 {
            seq.advance();
        }
        seq.clear();
        assert!(seq.is_empty());
        assert!(!seq.is_complete());

        for _ in 0..3 {
            seq.advance();
        }
        assert_eq!(seq.as_slice(), built(6, 3).as_slice());
    }
}
