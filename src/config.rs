use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{InvalidConfiguration, SliderSpec, SliderStack};
use crate::dof::default_slider_specs;

/// Slider panel layout, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub sliders: Vec<SliderSpec>,
}

impl PanelConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read panel config {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("failed to parse panel config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate every slider and build the stack in file order
    pub fn build_stack(&self) -> Result<SliderStack, InvalidConfiguration> {
        SliderStack::from_specs(self.sliders.iter().cloned())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            sliders: default_slider_specs(),
        }
    }
}
