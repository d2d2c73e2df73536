use super::error::InvalidConfiguration;
use super::parameter_slider::{ParameterSlider, SliderSpec};
use super::parameters::ParameterVector;

/// One effective value change, delivered to every `on_any_change` handler
#[derive(Debug, Clone, PartialEq)]
pub struct SliderChange {
    pub index: usize,
    pub name: String,
    pub value: f32,
    /// Full stack snapshot taken right after the edit
    pub values: ParameterVector,
}

type ChangeHandler = Box<dyn FnMut(&SliderChange) + Send>;

/// Ordered, fixed-length set of sliders backing the parameter panel.
///
/// Stack order is the renderer's parameter slot order.
pub struct SliderStack {
    sliders: Vec<ParameterSlider>,
    handlers: Vec<ChangeHandler>,
}

impl SliderStack {
    pub fn init_with(sliders: Vec<ParameterSlider>) -> Result<Self, InvalidConfiguration> {
        if sliders.is_empty() {
            return Err(InvalidConfiguration::EmptySliderStack);
        }

        Ok(Self {
            sliders,
            handlers: Vec::new(),
        })
    }

    /// Validate every spec, then build the stack in spec order
    pub fn from_specs(
        specs: impl IntoIterator<Item = SliderSpec>,
    ) -> Result<Self, InvalidConfiguration> {
        let sliders = specs
            .into_iter()
            .map(ParameterSlider::new)
            .collect::<Result<Vec<_>, _>>()?;

        Self::init_with(sliders)
    }

    /// Current values in stack order
    pub fn values(&self) -> Vec<f32> {
        self.sliders.iter().map(ParameterSlider::value).collect()
    }

    pub fn snapshot(&self) -> ParameterVector {
        ParameterVector::from(self.values())
    }

    /// Register a handler called once per effective value change
    pub fn on_any_change<F>(&mut self, handler: F)
    where
        F: FnMut(&SliderChange) + Send + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Edit the slider at `index`. Returns whether the value changed.
    pub fn set_value(&mut self, index: usize, value: f32) -> bool {
        let Some(slider) = self.sliders.get_mut(index) else {
            log::warn!(
                "ignoring edit to slider {index}: stack has {} sliders",
                self.sliders.len()
            );
            return false;
        };

        if !slider.set_value(value) {
            return false;
        }

        if !self.handlers.is_empty() {
            let change = SliderChange {
                index,
                name: self.sliders[index].name().to_owned(),
                value: self.sliders[index].value(),
                values: self.snapshot(),
            };
            for handler in &mut self.handlers {
                handler(&change);
            }
        }

        true
    }

    pub fn slider(&self, index: usize) -> Option<&ParameterSlider> {
        self.sliders.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterSlider> {
        self.sliders.iter()
    }

    /// Index of the first slider named `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.sliders.iter().position(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    /// Always false; an empty stack cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }
}

impl std::fmt::Debug for SliderStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderStack")
            .field("sliders", &self.sliders)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn three_sliders() -> SliderStack {
        SliderStack::from_specs([
            SliderSpec::new("a", 0.0, 10.0, 1.0, 1.0),
            SliderSpec::new("b", 0.0, 10.0, 1.0, 2.0),
            SliderSpec::new("c", 0.0, 10.0, 1.0, 3.0),
        ])
        .unwrap()
    }

    fn recorder(stack: &mut SliderStack) -> Arc<Mutex<Vec<SliderChange>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        stack.on_any_change(move |change| sink.lock().unwrap().push(change.clone()));
        seen
    }

    #[test]
    fn test_empty_stack_is_invalid() {
        let err = SliderStack::init_with(Vec::new()).unwrap_err();
        assert_eq!(err, InvalidConfiguration::EmptySliderStack);
    }

    #[test]
    fn test_single_slider_stack_is_valid() {
        let slider = ParameterSlider::new(SliderSpec::new("only", 0.0, 1.0, 0.1, 0.5)).unwrap();
        let stack = SliderStack::init_with(vec![slider]).unwrap();
        assert_eq!(stack.len(), 1);
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_from_specs_surfaces_slider_errors() {
        let err = SliderStack::from_specs([
            SliderSpec::new("ok", 0.0, 1.0, 0.1, 0.5),
            SliderSpec::new("bad", 1.0, 0.0, 0.1, 0.5),
        ])
        .unwrap_err();
        assert!(matches!(err, InvalidConfiguration::InvertedRange { ref name, .. } if name == "bad"));
    }

    #[test]
    fn test_values_keep_construction_order() {
        let mut stack = three_sliders();
        assert_eq!(stack.values(), vec![1.0, 2.0, 3.0]);

        stack.set_value(2, 7.0);
        stack.set_value(0, 4.0);
        assert_eq!(stack.values(), vec![4.0, 2.0, 7.0]);
        assert_eq!(stack.values().len(), 3);
    }

    #[test]
    fn test_each_effective_edit_notifies_exactly_once() {
        let mut stack = three_sliders();
        let seen = recorder(&mut stack);

        assert!(stack.set_value(1, 9.0));
        assert!(stack.set_value(1, 8.0));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].index, 1);
        assert_eq!(seen[0].name, "b");
        assert_eq!(seen[0].value, 9.0);
        assert_eq!(seen[0].values.as_slice(), &[1.0, 9.0, 3.0]);
        assert_eq!(seen[1].values.as_slice(), &[1.0, 8.0, 3.0]);
    }

    #[test]
    fn test_no_op_edit_does_not_notify() {
        let mut stack = three_sliders();
        let seen = recorder(&mut stack);

        assert!(!stack.set_value(0, 1.0));
        stack.set_value(0, 10.0);
        // Clamps onto the current value
        assert!(!stack.set_value(0, 99.0));

        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_notification_reports_clamped_value() {
        let mut stack = three_sliders();
        let seen = recorder(&mut stack);

        stack.set_value(2, -5.0);
        assert_eq!(seen.lock().unwrap()[0].value, 0.0);
    }

    #[test]
    fn test_every_handler_sees_each_change() {
        let mut stack = three_sliders();
        let first = recorder(&mut stack);
        let second = recorder(&mut stack);

        stack.set_value(0, 5.0);

        assert_eq!(first.lock().unwrap().len(), 1);
        assert_eq!(second.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let mut stack = three_sliders();
        let seen = recorder(&mut stack);

        assert!(!stack.set_value(3, 1.0));
        assert_eq!(stack.values(), vec![1.0, 2.0, 3.0]);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_position_finds_first_match() {
        let stack = SliderStack::from_specs([
            SliderSpec::new("dup", 0.0, 1.0, 0.1, 0.1),
            SliderSpec::new("dup", 0.0, 1.0, 0.1, 0.2),
        ])
        .unwrap();

        assert_eq!(stack.position("dup"), Some(0));
        assert_eq!(stack.position("missing"), None);
    }

    #[test]
    fn test_slider_reads_do_not_expose_mutation() {
        let stack = three_sliders();
        let slider = stack.slider(1).unwrap();
        assert_eq!(slider.name(), "b");
        assert_eq!(stack.iter().map(|s| s.name()).collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
