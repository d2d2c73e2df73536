//! Render-loop and parameter-binding core.
//!
//! Nothing in here touches the GPU, the window system or the widget
//! toolkit; those plug in through `DrawableSource`, `Drawable` and
//! `ParameterRenderer`.

pub mod clock;
pub mod drawable;
pub mod error;
pub mod frame_surface;
pub mod pacing;
pub mod parameter_slider;
pub mod parameters;
pub mod render_delegate;
pub mod render_loop;
pub mod slider_stack;

pub use clock::FrameClock;
pub use drawable::{Drawable, DrawableSize, DrawableSource};
pub use error::{FrameRenderFailure, InvalidConfiguration};
pub use frame_surface::{FrameStats, FrameSurface, SurfaceState, TickOutcome};
pub use pacing::{FramePacer, PacingReport};
pub use parameter_slider::{ParameterSlider, SliderSpec};
pub use parameters::{ParameterSlot, ParameterVector, PendingParameters};
pub use render_delegate::{FrameOutcome, RenderDelegate, SurfaceView};
pub use render_loop::{ParameterRenderer, RenderLoopController};
pub use slider_stack::{SliderChange, SliderStack};
