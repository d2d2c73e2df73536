use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::clock::FrameClock;
use super::drawable::{Drawable, DrawableSize, DrawableSource};
use super::error::FrameRenderFailure;
use super::render_delegate::{FrameOutcome, RenderDelegate, SurfaceView};

/// Render-loop state of a `FrameSurface`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// No delegate attached
    Idle,
    /// Delegate attached, ticks render
    Armed,
    /// Inside a tick's callbacks
    Rendering,
}

/// Result of one display-refresh tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// No delegate attached; nothing happened
    Idle,
    /// No drawable was obtainable; neither callback fired
    Skipped,
    /// Frame drawn and presented
    Rendered { frame_index: u64, frame_duration: f32 },
    /// Draw call failed; drawable discarded, loop continues
    Failed {
        frame_index: u64,
        failure: FrameRenderFailure,
    },
}

/// Per-surface frame counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub rendered: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl FrameStats {
    /// Ticks in which the delegate was called
    pub fn drawn(&self) -> u64 {
        self.rendered + self.failed
    }
}

type FailureHook = Box<dyn FnMut(&FrameRenderFailure) + Send>;

/// Drives one render delegate from display refresh ticks.
///
/// The surface only holds a weak reference to its delegate; dropping the
/// delegate's last `Arc` detaches it at the next tick.
pub struct FrameSurface<S, R>
where
    S: DrawableSource,
    R: RenderDelegate<S::Drawable>,
{
    source: S,
    delegate: Option<Weak<Mutex<R>>>,
    state: SurfaceState,
    clock: FrameClock,
    stats: FrameStats,
    on_failure: Option<FailureHook>,
}

impl<S, R> FrameSurface<S, R>
where
    S: DrawableSource,
    R: RenderDelegate<S::Drawable>,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            delegate: None,
            state: SurfaceState::Idle,
            clock: FrameClock::new(),
            stats: FrameStats::default(),
            on_failure: None,
        }
    }

    /// Attach `delegate`, replacing any previous one, and start rendering
    /// on the next tick
    pub fn attach_delegate(&mut self, delegate: &Arc<Mutex<R>>) {
        if self.state == SurfaceState::Idle {
            self.clock.restart();
        }
        self.delegate = Some(Arc::downgrade(delegate));
        self.state = SurfaceState::Armed;
        log::debug!("render delegate attached");
    }

    /// Stop calling the delegate. Takes effect at the next tick.
    pub fn detach_delegate(&mut self) {
        if self.delegate.take().is_some() {
            log::debug!("render delegate detached");
        }
        self.state = SurfaceState::Idle;
    }

    /// Register a diagnostic hook for frames whose draw call failed
    pub fn on_frame_failure<F>(&mut self, hook: F)
    where
        F: FnMut(&FrameRenderFailure) + Send + 'static,
    {
        self.on_failure = Some(Box::new(hook));
    }

    /// Run one display-refresh tick
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != SurfaceState::Armed {
            return TickOutcome::Idle;
        }

        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            log::debug!("render delegate dropped, surface going idle");
            self.detach_delegate();
            return TickOutcome::Idle;
        };

        let Some(mut drawable) = self.source.next_drawable() else {
            log::trace!("no drawable available, skipping tick");
            self.stats.skipped += 1;
            return TickOutcome::Skipped;
        };

        let frame_index = self.stats.drawn();
        let frame_duration = self.clock.lap();
        let size = self.source.drawable_size();

        self.state = SurfaceState::Rendering;
        let mut renderer = delegate.lock();

        let result = renderer.draw_to_drawable(&mut drawable, size, frame_duration);
        let outcome = match &result {
            Ok(()) => {
                drawable.present();
                self.stats.rendered += 1;
                FrameOutcome::Presented
            }
            Err(failure) => {
                drawable.discard();
                self.stats.failed += 1;
                log::warn!("frame {frame_index} abandoned: {failure}");
                if let Some(hook) = self.on_failure.as_mut() {
                    hook(failure);
                }
                FrameOutcome::Discarded
            }
        };

        renderer.frame_adjusted(&SurfaceView {
            size,
            frame_index,
            frame_duration,
            outcome,
        });
        drop(renderer);

        self.state = SurfaceState::Armed;

        match result {
            Ok(()) => TickOutcome::Rendered {
                frame_index,
                frame_duration,
            },
            Err(failure) => TickOutcome::Failed {
                frame_index,
                failure,
            },
        }
    }

    /// Forward a view resize to the drawable source
    pub fn resize(&mut self, size: DrawableSize) {
        log::debug!("surface resized to {}x{}", size.width, size.height);
        self.source.resize(size);
    }

    pub fn size(&self) -> DrawableSize {
        self.source.drawable_size()
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn is_attached(&self) -> bool {
        self.delegate
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
