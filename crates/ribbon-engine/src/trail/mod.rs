//! Ribbon trail geometry.
//!
//! Responsibilities:
//! - keep a bounded, pair-granular history of trail-edge vertices (`VertexWindow`)
//! - derive the triangle-strip index sequence that draws it as quads (`StripIndexSequencer`)
//! - expose both behind a dirty-tracked façade (`RibbonTrail`) and a locked
//!   cross-thread handle (`SharedTrail`)
//!
//! No GPU resources live here; renderers consume geometry through `GeometrySink`.

mod error;
mod ribbon;
mod sequencer;
mod shared;
mod sink;
mod window;

pub use error::TrailError;
pub use ribbon::{max_vertex_count, RibbonTrail};
pub use sequencer::{pair_indices, segment_indices, StripIndexSequencer};
pub use shared::{SharedTrail, TrailSnapshot};
pub use sink::{GeometrySink, GeometryView};
pub use window::VertexWindow;
