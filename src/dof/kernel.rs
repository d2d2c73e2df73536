use crate::core::DrawableSize;

use super::lens::DofParameters;

/// Full-frame sensor width, meters
const SENSOR_WIDTH: f32 = 0.036;
/// Depth range of the rendered scene, meters
const SCENE_NEAR: f32 = 0.5;
const SCENE_FAR: f32 = 60.0;
/// Gather taps per axis the shader will take at most
const MAX_TAPS: u32 = 15;

/// Blur kernel derived from lens settings and drawable size.
///
/// Recomputed after the frame that first used new parameters, never
/// inside the draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurKernel {
    /// Circle-of-confusion diameter in pixels is
    /// `coc_scale * |depth - focal_distance| / depth`
    pub coc_scale: f32,
    /// Largest blur radius anywhere in the scene, pixels
    pub radius: f32,
    /// Radius rounded up for the gather loop
    pub kernel_radius: u32,
    /// Gather taps per axis
    pub taps: u32,
}

impl BlurKernel {
    pub fn derive(lens: &DofParameters, size: DrawableSize) -> Self {
        let focal_length = (lens.focal_length / 1000.0).max(f32::EPSILON);
        // Focusing inside the focal length has no real image
        let focus = lens.focal_distance.max(focal_length * 1.001);
        let f_stop = lens.f_stop.max(f32::EPSILON);

        let coc_scale = focal_length * focal_length / (f_stop * (focus - focal_length))
            / SENSOR_WIDTH
            * size.width as f32;

        let worst_depth_term = [SCENE_NEAR, SCENE_FAR]
            .iter()
            .map(|&d| (d - focus).abs() / d)
            .fold(0.0_f32, f32::max);

        let radius = (0.5 * coc_scale * worst_depth_term).min(lens.max_blur.max(0.0));
        let kernel_radius = radius.ceil() as u32;
        let taps = (2 * kernel_radius + 1).min(MAX_TAPS);

        Self {
            coc_scale,
            radius,
            kernel_radius,
            taps,
        }
    }

    /// Blur radius in pixels at `depth` meters
    pub fn radius_at(&self, depth: f32, lens: &DofParameters) -> f32 {
        if depth <= 0.0 {
            return self.radius;
        }
        let coc = self.coc_scale * (depth - lens.focal_distance).abs() / depth;
        (0.5 * coc).min(self.radius)
    }

    pub fn is_sharp(&self) -> bool {
        self.kernel_radius == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> DrawableSize {
        DrawableSize::new(1280, 720)
    }

    #[test]
    fn test_radius_never_exceeds_max_blur() {
        let lens = DofParameters {
            f_stop: 1.4,
            focal_length: 200.0,
            max_blur: 8.0,
            ..DofParameters::default()
        };
        let kernel = BlurKernel::derive(&lens, size());
        assert!(kernel.radius <= 8.0);
        assert_eq!(kernel.kernel_radius, 8);
    }

    #[test]
    fn test_zero_max_blur_is_sharp() {
        let lens = DofParameters {
            max_blur: 0.0,
            ..DofParameters::default()
        };
        let kernel = BlurKernel::derive(&lens, size());
        assert!(kernel.is_sharp());
        assert_eq!(kernel.taps, 1);
    }

    #[test]
    fn test_wider_aperture_blurs_more() {
        let open = DofParameters {
            f_stop: 1.4,
            max_blur: 1000.0,
            ..DofParameters::default()
        };
        let closed = DofParameters { f_stop: 16.0, ..open };

        let open_kernel = BlurKernel::derive(&open, size());
        let closed_kernel = BlurKernel::derive(&closed, size());
        assert!(open_kernel.radius > closed_kernel.radius);
    }

    #[test]
    fn test_in_focus_depth_has_no_blur() {
        let lens = DofParameters::default();
        let kernel = BlurKernel::derive(&lens, size());
        assert_eq!(kernel.radius_at(lens.focal_distance, &lens), 0.0);
        assert!(kernel.radius_at(SCENE_FAR, &lens) > 0.0);
    }

    #[test]
    fn test_taps_are_capped() {
        let lens = DofParameters {
            f_stop: 1.4,
            focal_length: 200.0,
            max_blur: 32.0,
            ..DofParameters::default()
        };
        let kernel = BlurKernel::derive(&lens, size());
        assert_eq!(kernel.taps, MAX_TAPS);
    }

    #[test]
    fn test_focus_inside_focal_length_stays_finite() {
        let lens = DofParameters {
            focal_distance: 0.01,
            focal_length: 200.0,
            ..DofParameters::default()
        };
        let kernel = BlurKernel::derive(&lens, size());
        assert!(kernel.coc_scale.is_finite());
        assert!(kernel.radius.is_finite());
    }

    #[test]
    fn test_empty_drawable_is_sharp() {
        let kernel = BlurKernel::derive(&DofParameters::default(), DrawableSize::new(0, 0));
        assert!(kernel.is_sharp());
    }
}
