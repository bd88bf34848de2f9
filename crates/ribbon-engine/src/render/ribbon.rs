use crate::coords::Vec3;
use crate::render::{RenderCtx, RenderTarget};
use crate::trail::{GeometrySink, GeometryView};

/// Ribbon renderer configuration.
#[derive(Debug, Clone)]
pub struct RibbonRendererConfig {
    /// Largest index sequence accepted by `upload`. Bounds GPU buffer growth.
    pub max_indices: usize,

    /// Clear color applied before drawing; `None` draws over existing contents.
    pub clear: Option<wgpu::Color>,
}

impl Default for RibbonRendererConfig {
    fn default() -> Self {
        Self {
            max_indices: 1 << 16,
            clear: Some(wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            }),
        }
    }
}

/// Geometry that could not be accepted for upload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum UploadError {
    #[error("ribbon has {requested} indices, renderer budget is {budget}")]
    TooManyIndices { requested: usize, budget: usize },

    #[error("ribbon index {index} points past {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
}

/// CPU-side copy of the last accepted upload, waiting to be written to the GPU.
///
/// Vertices are stored twice back to back. Drawing the frozen strip indices with
/// `base_vertex = oldest_slot` then walks the window from oldest to newest slot,
/// wrapping for free, so the strip follows the trail's age order even after the
/// window has recycled its slots.
#[derive(Debug, Default, Clone, PartialEq)]
struct StagedGeometry {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    base_vertex: i32,
}

impl StagedGeometry {
    fn stage(&mut self, view: GeometryView<'_>) {
        self.vertices.clear();
        self.vertices.extend_from_slice(view.vertices);
        self.vertices.extend_from_slice(view.vertices);

        self.indices.clear();
        self.indices.extend_from_slice(view.indices);

        self.base_vertex = view.oldest_slot as i32;
    }
}

/// Triangle-strip renderer for a ribbon trail.
///
/// Implements [`GeometrySink`]: `RibbonTrail::sync` / `SharedTrail::sync` hand it
/// new geometry only when the trail is dirty. Accepted geometry is staged on the
/// CPU and written to GPU buffers on the next [`render`](Self::render), so buffer
/// writes happen on the thread that owns the device.
#[derive(Default)]
pub struct RibbonRenderer {
    config: RibbonRendererConfig,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
    ibo: Option<wgpu::Buffer>,
    ibo_capacity: usize,

    staged: StagedGeometry,
    pending: bool,

    // What the GPU buffers currently hold.
    index_count: u32,
    base_vertex: i32,

    warned_short_draw: bool,
}

impl RibbonRenderer {
    pub fn new(config: RibbonRendererConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// True if geometry was accepted but not yet written to the GPU.
    #[inline]
    pub fn has_pending_upload(&self) -> bool {
        self.pending
    }

    /// Index count currently resident on the GPU.
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Draws up to `draw_count` strip indices into `target`.
    ///
    /// Pending geometry is written first. Fewer than 3 drawable indices form no
    /// triangle, so nothing is recorded in that case (except the clear, if any).
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_count: u32) {
        self.ensure_pipeline(ctx);
        self.flush(ctx);

        let n = draw_count.min(self.index_count);
        if n < 3 && self.index_count >= 3 && !self.warned_short_draw {
            log::debug!("RibbonRenderer: draw count {draw_count} forms no triangle; skipping strip");
            self.warned_short_draw = true;
        }

        let load = match self.config.clear {
            Some(color) => wgpu::LoadOp::Clear(color),
            None => wgpu::LoadOp::Load,
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ribbon strip pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if n < 3 {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..n, self.base_vertex, 0..1);
    }

    /// Writes staged geometry to GPU buffers, growing them if needed.
    fn flush(&mut self, ctx: &RenderCtx<'_>) {
        if !self.pending {
            return;
        }
        self.pending = false;

        let staged = &self.staged;
        if staged.indices.is_empty() {
            self.index_count = 0;
            self.base_vertex = 0;
            return;
        }

        if self.vbo.is_none() || staged.vertices.len() > self.vbo_capacity {
            let cap = staged.vertices.len().next_power_of_two().max(64);
            log::debug!("RibbonRenderer: vertex buffer -> {cap} vertices");
            self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("ribbon vbo"),
                size: (cap * std::mem::size_of::<Vec3>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vbo_capacity = cap;
        }

        if self.ibo.is_none() || staged.indices.len() > self.ibo_capacity {
            let cap = staged.indices.len().next_power_of_two().max(64);
            log::debug!("RibbonRenderer: index buffer -> {cap} indices");
            self.ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("ribbon ibo"),
                size: (cap * std::mem::size_of::<u32>()) as u64,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.ibo_capacity = cap;
        }

        let (Some(vbo), Some(ibo)) = (self.vbo.as_ref(), self.ibo.as_ref()) else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&staged.vertices));
        ctx.queue.write_buffer(ibo, 0, bytemuck::cast_slice(&staged.indices));

        self.index_count = staged.indices.len() as u32;
        self.base_vertex = staged.base_vertex;
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.target_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ribbon shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/ribbon.wgsl").into()),
        });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("ribbon pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ribbon pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: Some(wgpu::IndexFormat::Uint32),
                front_face: wgpu::FrontFace::Ccw,
                // Winding alternates between quads by construction; never cull.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.target_format);
        self.pipeline = Some(pipeline);
    }
}

impl GeometrySink for RibbonRenderer {
    type Error = UploadError;

    fn upload(&mut self, view: GeometryView<'_>) -> Result<(), Self::Error> {
        if view.indices.len() > self.config.max_indices {
            return Err(UploadError::TooManyIndices {
                requested: view.indices.len(),
                budget: self.config.max_indices,
            });
        }
        if let Some(&index) = view.indices.iter().find(|&&i| i as usize >= view.vertices.len()) {
            return Err(UploadError::IndexOutOfRange {
                index,
                vertices: view.vertices.len(),
            });
        }

        self.staged.stage(view);
        self.pending = true;
        log::debug!(
            "RibbonRenderer: staged {} vertices / {} indices (oldest slot {})",
            view.vertices.len(),
            view.indices.len(),
            view.oldest_slot
        );
        Ok(())
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vec3>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}
