use super::context::GpuContext;

/// Tessellated egui output waiting to be drawn over the next frame
#[derive(Default)]
pub struct OverlayFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

impl OverlayFrame {
    /// Replace the shapes with `newer`'s while keeping texture updates
    /// that were never uploaded
    pub fn merge(&mut self, newer: OverlayFrame) {
        self.primitives = newer.primitives;
        self.pixels_per_point = newer.pixels_per_point;
        self.textures_delta.append(newer.textures_delta);
    }
}

/// egui pass drawn on top of the DoF image
pub struct Overlay {
    renderer: egui_wgpu::Renderer,
    pending: Option<OverlayFrame>,
}

impl Overlay {
    pub fn new(context: &GpuContext, format: wgpu::TextureFormat) -> Self {
        Self {
            renderer: egui_wgpu::Renderer::new(
                context.device(),
                format,
                egui_wgpu::RendererOptions::default(),
            ),
            pending: None,
        }
    }

    /// Queue UI output for the next encoded frame. If the previous one was
    /// never drawn (skipped tick), its texture updates carry over.
    pub fn queue(&mut self, frame: OverlayFrame) {
        match self.pending.as_mut() {
            Some(pending) => pending.merge(frame),
            None => self.pending = Some(frame),
        }
    }

    /// Record the overlay pass into `encoder`. Returns command buffers
    /// egui needs submitted before the encoder.
    pub fn encode(
        &mut self,
        context: &GpuContext,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
    ) -> Vec<wgpu::CommandBuffer> {
        let Some(frame) = self.pending.take() else {
            return Vec::new();
        };

        for (id, delta) in &frame.textures_delta.set {
            self.renderer
                .update_texture(context.device(), context.queue(), *id, delta);
        }

        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: frame.pixels_per_point,
        };
        let command_buffers = self.renderer.update_buffers(
            context.device(),
            context.queue(),
            encoder,
            &frame.primitives,
            &screen,
        );

        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.renderer.render(&mut pass, &frame.primitives, &screen);
        }

        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }

        command_buffers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_unapplied_texture_frees() {
        let mut older = OverlayFrame {
            pixels_per_point: 1.0,
            ..OverlayFrame::default()
        };
        older.textures_delta.free.push(egui::TextureId::Managed(1));

        let mut newer = OverlayFrame {
            pixels_per_point: 2.0,
            ..OverlayFrame::default()
        };
        newer.textures_delta.free.push(egui::TextureId::Managed(2));

        older.merge(newer);

        assert_eq!(older.pixels_per_point, 2.0);
        assert_eq!(
            older.textures_delta.free,
            vec![egui::TextureId::Managed(1), egui::TextureId::Managed(2)]
        );
    }
}
