use crate::device::{GpuFrame, HeadlessGpu};

/// Renderer-facing context (device/queue + target format).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub target_format: wgpu::TextureFormat,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        target_format: wgpu::TextureFormat,
    ) -> Self {
        Self {
            device,
            queue,
            target_format,
        }
    }

    #[inline]
    pub fn from_gpu(gpu: &'a HeadlessGpu) -> Self {
        Self::new(gpu.device(), gpu.queue(), gpu.target_format())
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }

    /// Borrows the encoder and color view of an in-flight frame.
    #[inline]
    pub fn from_frame(frame: &'a mut GpuFrame) -> Self {
        Self::new(&mut frame.encoder, &frame.view)
    }
}
