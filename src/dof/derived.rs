use crate::core::{DrawableSize, ParameterVector};

use super::kernel::BlurKernel;
use super::lens::DofParameters;
use super::uniform::DofUniform;

/// A blur kernel together with the lens settings it was derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedLens {
    pub lens: DofParameters,
    pub kernel: BlurKernel,
}

impl DerivedLens {
    pub fn derive(params: &ParameterVector, size: DrawableSize) -> Self {
        let lens = DofParameters::from_vector(params);
        Self {
            lens,
            kernel: BlurKernel::derive(&lens, size),
        }
    }

    /// Uniform block for one frame; focus and kernel always agree
    pub fn uniform(&self, size: DrawableSize, time: f32) -> DofUniform {
        DofUniform::new(&self.lens, &self.kernel, size, time)
    }
}
