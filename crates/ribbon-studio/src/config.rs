use std::time::Duration;

use anyhow::{Context, Result};

/// Studio run configuration.
///
/// Defaults mirror a short demo run; every field can be overridden from the
/// environment (see [`StudioConfig::from_env`]).
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// Quads the ribbon builds up to before it starts evicting.
    pub segments: usize,
    /// Delay between new vertex pairs.
    pub growth_interval: Duration,
    /// Frames rendered before exiting.
    pub frames: u32,
    /// Target frame pacing for the headless loop.
    pub frame_interval: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            segments: 3,
            growth_interval: Duration::from_millis(250),
            frames: 240,
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl StudioConfig {
    /// Defaults overridden by `RIBBON_SEGMENTS`, `RIBBON_INTERVAL_MS` and `RIBBON_FRAMES`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("RIBBON_SEGMENTS") {
            config.segments = v
                .trim()
                .parse()
                .with_context(|| format!("RIBBON_SEGMENTS is not a count: {v:?}"))?;
        }
        if let Some(v) = lookup("RIBBON_INTERVAL_MS") {
            let ms: u64 = v
                .trim()
                .parse()
                .with_context(|| format!("RIBBON_INTERVAL_MS is not milliseconds: {v:?}"))?;
            config.growth_interval = Duration::from_millis(ms);
        }
        if let Some(v) = lookup("RIBBON_FRAMES") {
            config.frames = v
                .trim()
                .parse()
                .with_context(|| format!("RIBBON_FRAMES is not a count: {v:?}"))?;
        }

        Ok(config)
    }
}
