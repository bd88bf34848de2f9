//! GPU rendering subsystem.
//!
//! Renderers consume trail geometry through `GeometrySink` and issue GPU commands
//! via wgpu. Each renderer owns its GPU resources (pipelines, buffers); uploads
//! happen only when the trail reports itself dirty.

mod ctx;
mod ribbon;

pub use crate::trail::{GeometrySink, GeometryView};
pub use ctx::{RenderCtx, RenderTarget};
pub use ribbon::{RibbonRenderer, RibbonRendererConfig, UploadError};
