use std::sync::{Arc, Mutex};

use dof_viewer::core::{InvalidConfiguration, ParameterSlider, SliderSpec, SliderStack};

fn slider(name: &str, min: f32, max: f32, initial: f32) -> ParameterSlider {
    ParameterSlider::new(SliderSpec::new(name, min, max, 1.0, initial)).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_empty_stack_is_invalid() {
    assert_eq!(
        SliderStack::init_with(Vec::new()).unwrap_err(),
        InvalidConfiguration::EmptySliderStack
    );
}

#[test]
fn test_single_slider_stack_is_valid() {
    let stack = SliderStack::init_with(vec![slider("only", 0.0, 1.0, 0.5)]).unwrap();
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.values(), vec![0.5]);
}

#[test]
fn test_values_follow_construction_order() {
    let stack = SliderStack::init_with(vec![
        slider("c", 0.0, 10.0, 3.0),
        slider("a", 0.0, 10.0, 1.0),
        slider("b", 0.0, 10.0, 2.0),
    ])
    .unwrap();

    assert_eq!(stack.values(), vec![3.0, 1.0, 2.0]);
    assert_eq!(stack.position("a"), Some(1));
}

#[test]
fn test_invalid_slider_spec_is_rejected_by_stack() {
    let err = SliderStack::from_specs([
        SliderSpec::new("ok", 0.0, 1.0, 0.1, 0.5),
        SliderSpec::new("bad", 5.0, 1.0, 0.1, 2.0),
    ])
    .unwrap_err();

    assert!(matches!(err, InvalidConfiguration::InvertedRange { .. }));
}

// ============================================================================
// Edits and notification
// ============================================================================

#[test]
fn test_focal_distance_is_clamped() {
    let mut stack =
        SliderStack::from_specs([SliderSpec::new("focalDistance", 0.1, 100.0, 0.1, 5.0)])
            .unwrap();

    stack.set_value(0, 150.0);
    assert_eq!(stack.values(), vec![100.0]);

    stack.set_value(0, -3.0);
    assert_eq!(stack.values(), vec![0.1]);
}

#[test]
fn test_every_change_notifies_once_with_full_vector() {
    let mut stack = SliderStack::init_with(vec![
        slider("a", 0.0, 10.0, 1.0),
        slider("b", 0.0, 10.0, 2.0),
        slider("c", 0.0, 10.0, 3.0),
    ])
    .unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    stack.on_any_change(move |change| {
        sink.lock().unwrap().push((change.index, change.values.to_vec()));
    });

    stack.set_value(1, 9.0);
    stack.set_value(1, 9.0);
    stack.set_value(2, 42.0);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(1, vec![1.0, 9.0, 3.0]), (2, vec![1.0, 9.0, 10.0])]
    );
}

#[test]
fn test_unknown_index_is_ignored() {
    let mut stack = SliderStack::init_with(vec![slider("a", 0.0, 10.0, 1.0)]).unwrap();
    assert!(!stack.set_value(7, 5.0));
    assert_eq!(stack.values(), vec![1.0]);
}

#[test]
fn test_edits_from_another_thread_reach_handler() {
    let mut stack = SliderStack::init_with(vec![slider("a", 0.0, 100.0, 0.0)]).unwrap();
    let total = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&total);
    stack.on_any_change(move |_| *sink.lock().unwrap() += 1);

    let stack = std::thread::spawn(move || {
        for v in 1..=10 {
            stack.set_value(0, v as f32);
        }
        stack
    })
    .join()
    .unwrap();

    assert_eq!(*total.lock().unwrap(), 10);
    assert_eq!(stack.values(), vec![10.0]);
}
