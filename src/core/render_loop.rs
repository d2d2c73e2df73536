use std::marker::PhantomData;
use std::sync::Arc;

use super::drawable::DrawableSize;
use super::error::FrameRenderFailure;
use super::pacing::FramePacer;
use super::parameters::{ParameterSlot, ParameterVector};
use super::render_delegate::{RenderDelegate, SurfaceView};
use super::slider_stack::SliderStack;

/// A concrete renderer driven by a `RenderLoopController`.
///
/// It never sees slider state, only the parameter vector the controller
/// applied for the current frame.
pub trait ParameterRenderer<D> {
    /// Issue the draw calls for one frame into `drawable`
    fn encode_frame(
        &mut self,
        drawable: &mut D,
        size: DrawableSize,
        frame_duration: f32,
        params: &ParameterVector,
    ) -> Result<(), FrameRenderFailure>;

    /// Rebuild state derived from `params` and the drawable size (kernels,
    /// uniforms) after the frame that first used them
    fn recompute_derived(&mut self, params: &ParameterVector, view: &SurfaceView);
}

/// Glue between the slider panel and the render delegate callbacks.
///
/// Slider edits land in a shared single-slot `ParameterSlot`; each draw
/// call swaps in the latest complete vector before rendering, so a frame
/// sees either all-old or all-new values.
pub struct RenderLoopController<D, R> {
    renderer: R,
    pending: Arc<ParameterSlot>,
    applied: ParameterVector,
    applied_generation: u64,
    /// Generation and drawable size derived state was last built for
    derived_for: Option<(u64, DrawableSize)>,
    pacer: FramePacer,
    _drawable: PhantomData<fn(&mut D)>,
}

impl<D, R> RenderLoopController<D, R>
where
    R: ParameterRenderer<D>,
{
    /// Subscribe to `stack` and start from its current values
    pub fn bind(stack: &mut SliderStack, renderer: R) -> Self {
        let pending = Arc::new(ParameterSlot::new());

        let slot = Arc::clone(&pending);
        stack.on_any_change(move |change| {
            let generation = slot.publish(change.values.clone());
            log::trace!(
                "slider {} `{}` -> {} (generation {generation})",
                change.index,
                change.name,
                change.value
            );
        });

        Self {
            renderer,
            pending,
            applied: stack.snapshot(),
            applied_generation: 0,
            derived_for: None,
            pacer: FramePacer::new(),
            _drawable: PhantomData,
        }
    }

    /// Swap in the newest pending vector, if one arrived since last frame
    fn apply_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!(
                "applying parameters {:?} (generation {})",
                pending.values.as_slice(),
                pending.generation
            );
            self.applied = pending.values;
            self.applied_generation = pending.generation;
        }
    }

    /// Vector used by the most recent frame
    pub fn applied(&self) -> &ParameterVector {
        &self.applied
    }

    /// Generation of the applied vector; 0 while still on the initial values
    pub fn applied_generation(&self) -> u64 {
        self.applied_generation
    }

    pub fn parameter_slot(&self) -> &Arc<ParameterSlot> {
        &self.pending
    }

    pub fn pacing(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl<D, R> RenderDelegate<D> for RenderLoopController<D, R>
where
    R: ParameterRenderer<D>,
{
    fn draw_to_drawable(
        &mut self,
        drawable: &mut D,
        size: DrawableSize,
        frame_duration: f32,
    ) -> Result<(), FrameRenderFailure> {
        self.apply_pending();
        self.renderer
            .encode_frame(drawable, size, frame_duration, &self.applied)
    }

    fn frame_adjusted(&mut self, view: &SurfaceView) {
        if let Some(report) = self.pacer.record(view.frame_duration) {
            log::debug!(
                "{:.1} fps over {} frames (smoothed {:.2} ms)",
                report.fps,
                report.frames,
                report.smoothed_frame_time * 1000.0
            );
        }

        let current = (self.applied_generation, view.size);
        if self.derived_for != Some(current) {
            self.renderer.recompute_derived(&self.applied, view);
            self.derived_for = Some(current);
        }
    }
}
