use wgpu::util::DeviceExt;

use crate::core::{
    DrawableSize, FrameRenderFailure, ParameterRenderer, ParameterVector, SurfaceView,
};
use crate::dof::DerivedLens;

use super::context::GpuContext;
use super::overlay::{Overlay, OverlayFrame};
use super::surface::SurfaceFrame;

/// Full-screen DoF pass plus the egui overlay
pub struct DofRenderer {
    context: GpuContext,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    derived: DerivedLens,
    elapsed: f32,
    overlay: Overlay,
}

impl DofRenderer {
    /// Create the pipeline with derived state seeded from `initial`, the
    /// parameter vector the first frame will draw with
    pub fn new(
        context: GpuContext,
        format: wgpu::TextureFormat,
        size: DrawableSize,
        initial: &ParameterVector,
    ) -> Self {
        let derived = DerivedLens::derive(initial, size);
        let uniform = derived.uniform(size, 0.0);

        let uniform_buffer =
            context
                .device()
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("DoF Uniform Buffer"),
                    contents: bytemuck::cast_slice(&[uniform]),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });

        let (pipeline, bind_group) =
            Self::create_pipeline(context.device(), &uniform_buffer, format);
        let overlay = Overlay::new(&context, format);

        Self {
            context,
            pipeline,
            bind_group,
            uniform_buffer,
            derived,
            elapsed: 0.0,
            overlay,
        }
    }

    /// Hand the next frame's UI output to the overlay pass
    pub fn queue_overlay(&mut self, frame: OverlayFrame) {
        self.overlay.queue(frame);
    }

    pub fn derived(&self) -> &DerivedLens {
        &self.derived
    }

    fn create_pipeline(
        device: &wgpu::Device,
        uniform_buffer: &wgpu::Buffer,
        format: wgpu::TextureFormat,
    ) -> (wgpu::RenderPipeline, wgpu::BindGroup) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("DoF Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("dof.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("dof_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("dof_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("DoF Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("DoF Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        (pipeline, bind_group)
    }
}

impl ParameterRenderer<SurfaceFrame> for DofRenderer {
    fn encode_frame(
        &mut self,
        drawable: &mut SurfaceFrame,
        size: DrawableSize,
        frame_duration: f32,
        _params: &ParameterVector,
    ) -> Result<(), FrameRenderFailure> {
        if drawable.size() != size {
            return Err(FrameRenderFailure::new(format!(
                "drawable is {:?}, expected {:?}",
                drawable.size(),
                size
            )));
        }

        self.elapsed += frame_duration;
        // New parameters take effect once frame_adjusted has derived a
        // kernel for them
        let uniform = self.derived.uniform(size, self.elapsed);

        let device = self.context.device();
        let queue = self.context.queue();
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("DoF Encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("DoF Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: drawable.view(),
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.draw(0..3, 0..1);
        }

        let overlay_commands = self.overlay.encode(
            &self.context,
            &mut encoder,
            drawable.view(),
            [size.width, size.height],
        );

        queue.submit(
            overlay_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );

        match pollster::block_on(device.pop_error_scope()) {
            Some(error) => Err(FrameRenderFailure::new(error.to_string())),
            None => Ok(()),
        }
    }

    fn recompute_derived(&mut self, params: &ParameterVector, view: &SurfaceView) {
        self.derived = DerivedLens::derive(params, view.size);
        let DerivedLens { lens, kernel } = self.derived;
        log::debug!(
            "blur kernel for {}x{}: radius {:.2}px, {} taps (focus {:.1}m, f/{:.1}, {:.0}mm)",
            view.size.width,
            view.size.height,
            kernel.radius,
            kernel.taps,
            lens.focal_distance,
            lens.f_stop,
            lens.focal_length
        );
    }
}
