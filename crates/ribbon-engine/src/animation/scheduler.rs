use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::trail::SharedTrail;

use super::MotionSource;

/// Notification sent from the growth thread to the rendering side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GrowthEvent {
    /// A pair was pushed into the trail; `vertex_count` is the count right after.
    PairAdded { vertex_count: usize },
}

/// Periodically grows a [`SharedTrail`] from a [`MotionSource`] on a background thread.
///
/// The trail is only touched through its lock. The render side learns about growth
/// via [`GrowthScheduler::events`] and keeps its own per-frame state (e.g.
/// `DrawProgress`); nothing is shared through globals.
///
/// Dropping the scheduler stops and joins the thread.
pub struct GrowthScheduler {
    stop_tx: Option<Sender<()>>,
    events_rx: Receiver<GrowthEvent>,
    handle: Option<JoinHandle<()>>,
}

impl GrowthScheduler {
    /// Spawns the growth thread. The first pair is added after one `interval`.
    pub fn start<M>(trail: SharedTrail, mut motion: M, interval: Duration) -> Result<Self>
    where
        M: MotionSource + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let (events_tx, events_rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("ribbon-growth".to_string())
            .spawn(move || {
                log::debug!("growth thread started ({interval:?} interval)");
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        // Explicit stop or the scheduler was dropped.
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }

                    let (first, second) = motion.next_pair();
                    let vertex_count = trail.with_mut(|t| {
                        t.add_vertex_pair(first, second);
                        t.vertex_count()
                    });

                    if events_tx.send(GrowthEvent::PairAdded { vertex_count }).is_err() {
                        break;
                    }
                }
                log::debug!("growth thread stopped");
            })
            .context("failed to spawn ribbon growth thread")?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            events_rx,
            handle: Some(handle),
        })
    }

    /// Drains pending growth events without blocking.
    pub fn events(&self) -> Vec<GrowthEvent> {
        let mut out = Vec::new();
        loop {
            match self.events_rx.try_recv() {
                Ok(ev) => out.push(ev),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }

    /// Blocks until the next growth event, or `None` after `timeout`.
    pub fn wait_event(&self, timeout: Duration) -> Option<GrowthEvent> {
        self.events_rx.recv_timeout(timeout).ok()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signals the growth thread and waits for it to exit. Idempotent.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("ribbon growth thread panicked");
            }
        }
    }
}

impl Drop for GrowthScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;

    fn counter() -> impl FnMut() -> (Vec3, Vec3) + Send + 'static {
        let mut n = 0.0f32;
        move || {
            n += 1.0;
            (Vec3::new(n, 0.0, 0.0), Vec3::new(n, 1.0, 0.0))
        }
    }

    #[test]
    fn grows_trail_and_reports_events() {
        let trail = SharedTrail::new(2).unwrap();
        let sched =
            GrowthScheduler::start(trail.clone(), counter(), Duration::from_millis(1)).unwrap();

        let mut seen = Vec::new();
        while seen.len() < 5 {
            let ev = sched
                .wait_event(Duration::from_secs(5))
                .expect("growth thread stalled");
            seen.push(ev);
        }
        drop(sched);

        assert_eq!(seen[0], GrowthEvent::PairAdded { vertex_count: 2 });
        assert_eq!(seen[1], GrowthEvent::PairAdded { vertex_count: 4 });
        assert_eq!(seen[2], GrowthEvent::PairAdded { vertex_count: 6 });
        assert_eq!(seen[4], GrowthEvent::PairAdded { vertex_count: 6 });
        assert_eq!(trail.index_count(), 6);
    }

    #[test]
    fn stop_joins_promptly_with_long_interval() {
        let trail = SharedTrail::new(1).unwrap();
        let mut sched =
            GrowthScheduler::start(trail.clone(), counter(), Duration::from_secs(3600)).unwrap();
        assert!(sched.is_running());

        sched.stop();
        assert!(!sched.is_running());
        assert_eq!(trail.vertex_count(), 0);
        assert!(sched.events().is_empty());

        // Second stop is a no-op.
        sched.stop();
    }
}
