use bytemuck::{Pod, Zeroable};

use crate::core::DrawableSize;

use super::kernel::BlurKernel;
use super::lens::DofParameters;

/// Uniform block read by `dof.wgsl`
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct DofUniform {
    pub resolution: [f32; 2],
    pub focal_distance: f32,
    pub coc_scale: f32,
    pub max_radius: f32,
    pub taps: f32,
    pub time: f32,
    _pad: f32,
}

impl DofUniform {
    pub fn new(lens: &DofParameters, kernel: &BlurKernel, size: DrawableSize, time: f32) -> Self {
        Self {
            resolution: [size.width as f32, size.height as f32],
            focal_distance: lens.focal_distance,
            coc_scale: kernel.coc_scale,
            max_radius: kernel.radius,
            taps: kernel.taps as f32,
            time,
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_uniform_aligned() {
        assert_eq!(std::mem::size_of::<DofUniform>(), 32);
        assert_eq!(std::mem::size_of::<DofUniform>() % 16, 0);
    }

    #[test]
    fn test_packs_kernel_and_lens() {
        let lens = DofParameters::default();
        let size = DrawableSize::new(800, 600);
        let kernel = BlurKernel::derive(&lens, size);

        let uniform = DofUniform::new(&lens, &kernel, size, 1.5);
        assert_eq!(uniform.resolution, [800.0, 600.0]);
        assert_eq!(uniform.focal_distance, 5.0);
        assert_eq!(uniform.max_radius, kernel.radius);
        assert_eq!(uniform.taps, kernel.taps as f32);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 32);
    }
}
