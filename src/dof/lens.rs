use crate::core::{ParameterVector, SliderSpec};

/// Parameter slot of each lens setting in the slider stack
pub const FOCAL_DISTANCE_SLOT: usize = 0;
pub const F_STOP_SLOT: usize = 1;
pub const FOCAL_LENGTH_SLOT: usize = 2;
pub const MAX_BLUR_SLOT: usize = 3;

/// Lens settings decoded from the parameter vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DofParameters {
    /// Distance to the plane in focus, meters
    pub focal_distance: f32,
    pub f_stop: f32,
    /// Millimeters
    pub focal_length: f32,
    /// Upper bound on blur radius, pixels
    pub max_blur: f32,
}

impl Default for DofParameters {
    fn default() -> Self {
        Self {
            focal_distance: 5.0,
            f_stop: 2.8,
            focal_length: 50.0,
            max_blur: 12.0,
        }
    }
}

impl DofParameters {
    /// Read lens settings by slot. Missing trailing slots keep defaults.
    pub fn from_vector(params: &ParameterVector) -> Self {
        let defaults = Self::default();
        Self {
            focal_distance: params
                .get(FOCAL_DISTANCE_SLOT)
                .unwrap_or(defaults.focal_distance),
            f_stop: params.get(F_STOP_SLOT).unwrap_or(defaults.f_stop),
            focal_length: params
                .get(FOCAL_LENGTH_SLOT)
                .unwrap_or(defaults.focal_length),
            max_blur: params.get(MAX_BLUR_SLOT).unwrap_or(defaults.max_blur),
        }
    }
}

/// The slider panel matching `DofParameters`' slot layout
pub fn default_slider_specs() -> Vec<SliderSpec> {
    let d = DofParameters::default();
    vec![
        SliderSpec::new("focalDistance", 0.1, 100.0, 0.1, d.focal_distance),
        SliderSpec::new("fStop", 1.4, 22.0, 0.1, d.f_stop),
        SliderSpec::new("focalLength", 10.0, 200.0, 1.0, d.focal_length),
        SliderSpec::new("maxBlur", 0.0, 32.0, 1.0, d.max_blur),
    ]
}
