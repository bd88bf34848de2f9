/// Initialization parameters for the headless GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Render into an sRGB color target.
    pub prefer_srgb: bool,

    /// Offscreen color target size in pixels. Zero extents are clamped to 1.
    pub target_size: (u32, u32),

    /// Adapter selection hint.
    pub power_preference: wgpu::PowerPreference,

    /// Allow a software adapter (useful on CI machines without a GPU).
    pub force_fallback_adapter: bool,

    /// Required wgpu features.
    ///
    /// Favor an empty set for portability unless a feature is strictly necessary.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            target_size: (800, 600),
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
        }
    }
}

/// Picks the offscreen color format.
pub(crate) fn choose_target_format(prefer_srgb: bool) -> wgpu::TextureFormat {
    if prefer_srgb {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_preference_selects_format() {
        assert_eq!(choose_target_format(true), wgpu::TextureFormat::Rgba8UnormSrgb);
        assert_eq!(choose_target_format(false), wgpu::TextureFormat::Rgba8Unorm);
        assert!(choose_target_format(true).is_srgb());
    }
}
