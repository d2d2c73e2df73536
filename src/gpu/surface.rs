use anyhow::{anyhow, Result};
use wgpu::{SurfaceCapabilities, SurfaceConfiguration, SurfaceError, SurfaceTexture, TextureFormat, TextureView};

use crate::core::{Drawable, DrawableSize, DrawableSource};

use super::context::GpuContext;

/// One acquired swapchain texture
pub struct SurfaceFrame {
    texture: SurfaceTexture,
    view: TextureView,
}

impl SurfaceFrame {
    fn new(texture: SurfaceTexture) -> Self {
        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    pub fn view(&self) -> &TextureView {
        &self.view
    }

    pub fn size(&self) -> DrawableSize {
        DrawableSize::new(self.texture.texture.width(), self.texture.texture.height())
    }
}

impl Drawable for SurfaceFrame {
    fn present(self) {
        self.texture.present();
    }

    fn discard(self) {
        // Dropping an unpresented SurfaceTexture hands it back to the swapchain
        drop(self);
    }
}

/// Surface configuration preferring an sRGB format
fn surface_config(
    caps: &SurfaceCapabilities,
    size: DrawableSize,
    vsync: bool,
) -> Result<SurfaceConfiguration> {
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .ok_or_else(|| anyhow!("surface reports no supported texture formats"))?;
    let alpha_mode = caps
        .alpha_modes
        .first()
        .copied()
        .ok_or_else(|| anyhow!("surface reports no supported alpha modes"))?;
    let present_mode = if vsync {
        wgpu::PresentMode::AutoVsync
    } else {
        wgpu::PresentMode::AutoNoVsync
    };

    Ok(SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    })
}

/// Window surface handing out one `SurfaceFrame` per tick
pub struct WgpuSurface {
    surface: wgpu::Surface<'static>,
    context: GpuContext,
    config: SurfaceConfiguration,
    size: DrawableSize,
}

impl WgpuSurface {
    pub fn new(
        surface: wgpu::Surface<'static>,
        context: GpuContext,
        size: DrawableSize,
        vsync: bool,
    ) -> Result<Self> {
        let caps = surface.get_capabilities(context.adapter());
        let config = surface_config(&caps, size, vsync)?;

        let mut this = Self {
            surface,
            context,
            config,
            size,
        };
        this.configure();
        log::info!(
            "surface configured: {}x{} {:?} {:?}",
            size.width,
            size.height,
            this.config.format,
            this.config.present_mode
        );
        Ok(this)
    }

    pub fn format(&self) -> TextureFormat {
        self.config.format
    }

    fn configure(&mut self) {
        if self.size.is_empty() {
            return;
        }
        self.surface.configure(self.context.device(), &self.config);
    }
}

impl DrawableSource for WgpuSurface {
    type Drawable = SurfaceFrame;

    fn drawable_size(&self) -> DrawableSize {
        self.size
    }

    fn resize(&mut self, size: DrawableSize) {
        self.size = size;
        if size.is_empty() {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.configure();
    }

    fn next_drawable(&mut self) -> Option<SurfaceFrame> {
        if self.size.is_empty() {
            return None;
        }

        match self.surface.get_current_texture() {
            Ok(texture) => Some(SurfaceFrame::new(texture)),
            Err(SurfaceError::Outdated | SurfaceError::Lost) => {
                log::debug!("surface outdated, reconfiguring");
                self.configure();
                None
            }
            Err(SurfaceError::Timeout) => {
                log::trace!("surface acquire timed out");
                None
            }
            Err(e) => {
                log::warn!("failed to acquire surface texture: {e}");
                None
            }
        }
    }
}
