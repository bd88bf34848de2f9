//! Trail animation: growth scheduling and per-frame draw progress.
//!
//! Intended usage:
//! - a `GrowthScheduler` feeds a `SharedTrail` from a `MotionSource` on its own thread
//! - the render loop owns a `DrawProgress` and ticks it for every drained `GrowthEvent`

mod draw_progress;
mod motion;
mod scheduler;

pub use draw_progress::DrawProgress;
pub use motion::{MotionSource, SweepMotion};
pub use scheduler::{GrowthEvent, GrowthScheduler};
