mod config;

use std::time::Instant;

use anyhow::{Context, Result};
use ribbon_engine::animation::{DrawProgress, GrowthEvent, GrowthScheduler, SweepMotion};
use ribbon_engine::device::{GpuInit, HeadlessGpu};
use ribbon_engine::logging::{init_logging, LoggingConfig};
use ribbon_engine::render::{RenderCtx, RenderTarget, RibbonRenderer, RibbonRendererConfig};
use ribbon_engine::trail::SharedTrail;

use config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_env().context("invalid studio configuration")?;
    log::info!("ribbon studio starting: {config:?}");

    let trail = SharedTrail::new(config.segments).context("failed to create ribbon trail")?;
    let mut progress = trail.with(DrawProgress::for_trail);

    let gpu = pollster::block_on(HeadlessGpu::new(GpuInit {
        force_fallback_adapter: std::env::var_os("RIBBON_SOFTWARE").is_some(),
        ..Default::default()
    }))
    .context("GPU initialization failed")?;
    log::info!("offscreen target {:?} ({:?})", gpu.size(), gpu.target_format());
    let mut renderer = RibbonRenderer::new(RibbonRendererConfig::default());

    // Growth runs on its own thread; this loop owns rendering state.
    let mut scheduler =
        GrowthScheduler::start(trail.clone(), SweepMotion::default(), config.growth_interval)?;

    let started = Instant::now();
    let mut uploads = 0u32;

    for frame_index in 0..config.frames {
        let frame_start = Instant::now();

        for event in scheduler.events() {
            let GrowthEvent::PairAdded { vertex_count } = event;
            let drawn = progress.tick();
            log::trace!("frame {frame_index}: trail at {vertex_count} vertices, drawing {drawn}");
        }

        match trail.sync(&mut renderer) {
            Ok(true) => uploads += 1,
            Ok(false) => {}
            Err(e) => log::warn!("ribbon upload rejected: {e}"),
        }

        let available = u32::try_from(trail.index_count()).unwrap_or(u32::MAX);
        let mut frame = gpu.begin_frame();
        {
            let ctx = RenderCtx::from_gpu(&gpu);
            let mut target = RenderTarget::from_frame(&mut frame);
            renderer.render(&ctx, &mut target, progress.draw_count(available));
        }
        gpu.submit(frame);

        if let Some(rest) = config.frame_interval.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    scheduler.stop();

    let (vertices, indices) = trail.with(|t| (t.vertex_count(), t.index_count()));
    log::info!(
        "rendered {} frames in {:.2?}: {uploads} uploads, trail {vertices} vertices / {indices} indices",
        config.frames,
        started.elapsed()
    );

    Ok(())
}
