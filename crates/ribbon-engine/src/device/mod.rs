//! Headless GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue without a window surface
//! - owning an offscreen color target and handing out per-frame encoders

mod headless;
mod init;

pub use headless::{GpuFrame, HeadlessGpu};
pub use init::GpuInit;
