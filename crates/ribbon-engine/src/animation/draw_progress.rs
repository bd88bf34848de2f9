use crate::trail::RibbonTrail;

/// How many strip indices to draw this frame.
///
/// Grows by `step` per tick up to `max`, then wraps back to `initial`, which
/// animates the ribbon unrolling along its stored history. Owned by whoever
/// renders; ticked by whatever schedules growth.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DrawProgress {
    initial: u32,
    step: u32,
    max: u32,
    current: u32,
}

impl DrawProgress {
    pub fn new(initial: u32, step: u32, max: u32) -> Self {
        debug_assert!(step > 0, "a zero step never reaches max");
        Self {
            initial,
            step,
            max,
            current: initial,
        }
    }

    /// Progress sized for a fully extended `trail`: starts at one vertex pair and
    /// grows one pair per tick.
    pub fn for_trail(trail: &RibbonTrail) -> Self {
        Self::new(2, 2, trail.max_vertex_count() as u32)
    }

    /// Advances one step, wrapping to `initial` once `max` was reached.
    pub fn tick(&mut self) -> u32 {
        if self.current >= self.max {
            self.current = self.initial;
        } else {
            self.current += self.step;
        }
        self.current
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Indices to draw given how many are actually uploaded.
    #[inline]
    pub fn draw_count(&self, available: u32) -> u32 {
        self.current.min(available)
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_until_max_then_wraps() {
        let mut p = DrawProgress::new(2, 2, 8);
        assert_eq!(p.current(), 2);
        let seen: Vec<u32> = (0..6).map(|_| p.tick()).collect();
        assert_eq!(seen, vec![4, 6, 8, 2, 4, 6]);
    }

    #[test]
    fn overshooting_step_still_wraps() {
        let mut p = DrawProgress::new(1, 5, 8);
        assert_eq!(p.tick(), 6);
        assert_eq!(p.tick(), 11);
        assert_eq!(p.tick(), 1);
    }

    #[test]
    fn draw_count_is_bounded_by_available_indices() {
        let mut p = DrawProgress::new(2, 2, 8);
        p.tick();
        p.tick();
        assert_eq!(p.draw_count(4), 4);
        assert_eq!(p.draw_count(100), 6);
        assert_eq!(p.draw_count(0), 0);
    }

    #[test]
    fn sized_from_trail_capacity() {
        let trail = RibbonTrail::new(3).unwrap();
        let p = DrawProgress::for_trail(&trail);
        assert_eq!(p.current(), 2);
        assert_eq!(p.max(), 8);
    }

    #[test]
    fn reset_returns_to_initial() {
        let mut p = DrawProgress::new(2, 2, 8);
        p.tick();
        p.reset();
        assert_eq!(p.current(), 2);
    }
}
