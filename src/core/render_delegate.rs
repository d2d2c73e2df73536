use super::drawable::DrawableSize;
use super::error::FrameRenderFailure;

/// What happened to the drawable of the frame that was just drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    Discarded,
}

/// Read-only view of the surface handed to `frame_adjusted`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceView {
    pub size: DrawableSize,
    /// Zero-based index of the tick that just rendered
    pub frame_index: u64,
    /// Measured duration passed to the draw call, in seconds
    pub frame_duration: f32,
    pub outcome: FrameOutcome,
}

/// Per-frame callbacks a renderer implements to attach to a `FrameSurface`.
///
/// Every tick that obtains a drawable calls `draw_to_drawable` and then
/// `frame_adjusted`, exactly once each and in that order.
pub trait RenderDelegate<D> {
    /// Render one frame into `drawable`.
    ///
    /// The drawable is only borrowed; the surface presents it on success
    /// and discards it on failure.
    fn draw_to_drawable(
        &mut self,
        drawable: &mut D,
        size: DrawableSize,
        frame_duration: f32,
    ) -> Result<(), FrameRenderFailure>;

    /// Bookkeeping after the draw call, seeing the just-rendered state
    fn frame_adjusted(&mut self, view: &SurfaceView);
}
