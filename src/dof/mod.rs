//! Depth-of-field parameter model: how the positional parameter vector
//! maps onto lens settings, and the blur kernel derived from them.

mod derived;
mod kernel;
mod lens;
mod uniform;

pub use derived::DerivedLens;
pub use kernel::BlurKernel;
pub use lens::{default_slider_specs, DofParameters};
pub use uniform::DofUniform;
