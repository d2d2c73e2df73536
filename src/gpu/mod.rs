//! wgpu implementations of the core's drawable and renderer seams.

mod context;
mod overlay;
mod renderer;
mod surface;

pub use context::GpuContext;
pub use overlay::{Overlay, OverlayFrame};
pub use renderer::DofRenderer;
pub use surface::{SurfaceFrame, WgpuSurface};
