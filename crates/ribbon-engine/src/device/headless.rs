use anyhow::{Context, Result};

use super::init::{choose_target_format, GpuInit};

/// Owns wgpu core objects and an offscreen color target.
///
/// This type is the low-level rendering context when no window is involved:
/// - creates and stores Instance/Adapter/Device/Queue
/// - owns the texture renderers draw into
/// - provides an encoder + view per frame and submits it
pub struct HeadlessGpu {
    /// Kept alive for the lifetime of the device.
    _instance: wgpu::Instance,

    /// Selected adapter.
    _adapter: wgpu::Adapter,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,

    /// Offscreen color target.
    target: wgpu::Texture,
    format: wgpu::TextureFormat,
    size: (u32, u32),
}

/// Represents a single frame being recorded.
///
/// Short-lived; hand it back to [`HeadlessGpu::submit`] once drawing is recorded.
pub struct GpuFrame {
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl HeadlessGpu {
    /// Creates a device and an offscreen target.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(init: GpuInit) -> Result<Self> {
        let GpuInit {
            prefer_srgb,
            target_size,
            power_preference,
            force_fallback_adapter,
            required_features,
            required_limits,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference,
                compatible_surface: None,
                force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("ribbon-engine device"),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let size = (target_size.0.max(1), target_size.1.max(1));
        let format = choose_target_format(prefer_srgb);
        let target = create_target(&device, format, size);

        Ok(Self {
            _instance: instance,
            _adapter: adapter,
            device,
            queue,
            target,
            format,
            size,
        })
    }

    /// Returns the offscreen target format.
    pub fn target_format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Returns the offscreen target size in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Creates a view of the offscreen target and an encoder for one frame.
    pub fn begin_frame(&self) -> GpuFrame {
        let view = self
            .target
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("ribbon frame encoder"),
            });

        GpuFrame { view, encoder }
    }

    /// Submits the recorded commands for the given frame.
    pub fn submit(&self, frame: GpuFrame) {
        self.queue.submit(std::iter::once(frame.encoder.finish()));
    }
}

fn create_target(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    (width, height): (u32, u32),
) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some("ribbon offscreen target"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    })
}
