//! Ribbon engine crate.
//!
//! This crate owns ribbon-trail geometry (a sliding window of vertex pairs and
//! its triangle-strip indices) plus the pieces that feed and draw it: growth
//! scheduling, a headless GPU device, and a wgpu strip renderer.

pub mod animation;
pub mod coords;
pub mod device;
pub mod logging;
pub mod render;
pub mod trail;
