//! Coordinate types shared by the trail core and the renderer.
//!
//! Canonical CPU space for ribbon geometry is object/world space; the bundled
//! ribbon shader passes positions through unchanged, so the demo sources emit
//! normalized device coordinates directly (+X right, +Y up).

mod vec3;

pub use vec3::Vec3;
