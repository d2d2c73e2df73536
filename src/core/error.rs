use thiserror::Error;

/// Raised while building sliders or a slider stack. Never raised per frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error("slider stack requires at least one slider")]
    EmptySliderStack,

    #[error("slider `{name}` has a non-finite bound or step")]
    NonFiniteBound { name: String },

    #[error("slider `{name}` has an inverted range [{min}, {max}]")]
    InvertedRange { name: String, min: f32, max: f32 },

    #[error("slider `{name}` step must be positive, got {step}")]
    NonPositiveStep { name: String, step: f32 },

    #[error("slider `{name}` initial value {value} is outside [{min}, {max}]")]
    InitialOutOfRange {
        name: String,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// A single frame's render callback failed. The surface discards the
/// drawable and keeps ticking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("frame render failed: {message}")]
pub struct FrameRenderFailure {
    message: String,
}

impl FrameRenderFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack_message() {
        let err = InvalidConfiguration::EmptySliderStack;
        assert_eq!(err.to_string(), "slider stack requires at least one slider");
    }

    #[test]
    fn test_inverted_range_message_names_slider() {
        let err = InvalidConfiguration::InvertedRange {
            name: "aperture".into(),
            min: 4.0,
            max: 2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("aperture"));
        assert!(msg.contains("[4, 2]"));
    }

    #[test]
    fn test_frame_failure_keeps_message() {
        let failure = FrameRenderFailure::new("encoder lost");
        assert_eq!(failure.message(), "encoder lost");
        assert_eq!(failure.to_string(), "frame render failed: encoder lost");
    }
}
