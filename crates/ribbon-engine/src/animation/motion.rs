use crate::coords::Vec3;

/// Produces the next leading edge of a trail.
pub trait MotionSource {
    fn next_pair(&mut self) -> (Vec3, Vec3);
}

impl<F> MotionSource for F
where
    F: FnMut() -> (Vec3, Vec3),
{
    fn next_pair(&mut self) -> (Vec3, Vec3) {
        self()
    }
}

/// Motion source sweeping an edge across device space.
///
/// Starts at `(0.75, -0.5, 1.0)` / `(0.65, 0.5, 1.0)` and moves by `step` per pair,
/// tilting the edge slightly every other pair so consecutive quads are visibly
/// distinct. Wraps back to the start once the edge leaves `[-1, 1]` on x or y.
#[derive(Debug, Clone)]
pub struct SweepMotion {
    start: (Vec3, Vec3),
    step: Vec3,
    tilt: f32,
    emitted: u32,
    head: (Vec3, Vec3),
}

impl SweepMotion {
    pub const DEFAULT_START: (Vec3, Vec3) =
        (Vec3::new(0.75, -0.5, 1.0), Vec3::new(0.65, 0.5, 1.0));

    pub fn new(step: Vec3) -> Self {
        Self::with_start(Self::DEFAULT_START, step)
    }

    pub fn with_start(start: (Vec3, Vec3), step: Vec3) -> Self {
        Self {
            start,
            step,
            tilt: 0.1,
            emitted: 0,
            head: start,
        }
    }

    fn in_bounds(v: Vec3) -> bool {
        (-1.0..=1.0).contains(&v.x) && (-1.0..=1.0).contains(&v.y)
    }
}

impl Default for SweepMotion {
    fn default() -> Self {
        Self::new(Vec3::new(-0.3, 0.0, 0.0))
    }
}

impl MotionSource for SweepMotion {
    fn next_pair(&mut self) -> (Vec3, Vec3) {
        if !Self::in_bounds(self.head.0) || !Self::in_bounds(self.head.1) {
            log::debug!("sweep motion left device range after {} pairs; wrapping", self.emitted);
            self.head = self.start;
        }

        let (a, b) = self.head;
        let skew = if self.emitted % 2 == 0 { 0.0 } else { self.tilt };
        let pair = (a + Vec3::new(skew, 0.0, 0.0), b - Vec3::new(skew, 0.0, 0.0));

        self.head = (a + self.step, b + self.step);
        self.emitted = self.emitted.wrapping_add(1);
        pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).to_array().iter().all(|d| d.abs() < 1e-5)
    }

    #[test]
    fn first_pair_is_start_anchor() {
        let mut m = SweepMotion::default();
        assert_eq!(m.next_pair(), SweepMotion::DEFAULT_START);
    }

    #[test]
    fn advances_by_step() {
        let mut m = SweepMotion::new(Vec3::new(-0.5, 0.0, 0.0));
        m.next_pair();
        m.next_pair();
        let (a, b) = m.next_pair();
        assert!(close(a, Vec3::new(-0.25, -0.5, 1.0)));
        assert!(close(b, Vec3::new(-0.35, 0.5, 1.0)));
    }

    #[test]
    fn wraps_after_leaving_device_range() {
        let mut m = SweepMotion::new(Vec3::new(-0.5, 0.0, 0.0));
        // x: 0.75, 0.25, -0.25, -0.75, then -1.25 is out of range.
        for _ in 0..4 {
            m.next_pair();
        }
        let (a, _) = m.next_pair();
        assert!(a.x >= 0.75);
        assert!(a.x <= 0.85);
    }

    #[test]
    fn closures_are_motion_sources() {
        let mut n = 0.0;
        let mut src = move || {
            n += 1.0;
            (Vec3::new(n, 0.0, 0.0), Vec3::new(n, 1.0, 0.0))
        };
        assert_eq!(src.next_pair().0.x, 1.0);
        assert_eq!(src.next_pair().0.x, 2.0);
    }
}
