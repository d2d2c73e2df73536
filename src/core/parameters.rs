use std::ops::Index;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Ordered slider values, positionally mapped to renderer slots.
///
/// Immutable once built; clones share the same allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterVector {
    values: Arc<[f32]>,
}

impl ParameterVector {
    pub fn new(values: impl Into<Arc<[f32]>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<f32> {
        self.values.get(slot).copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.values.to_vec()
    }
}

impl From<Vec<f32>> for ParameterVector {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

impl Index<usize> for ParameterVector {
    type Output = f32;

    fn index(&self, slot: usize) -> &f32 {
        &self.values[slot]
    }
}

/// A published snapshot tagged with the order it was published in
#[derive(Debug, Clone, PartialEq)]
pub struct PendingParameters {
    pub generation: u64,
    pub values: ParameterVector,
}

/// Single-slot handoff of the latest parameter vector from the UI side
/// to the render side.
///
/// `publish` replaces whatever is waiting, so rapid edits coalesce to the
/// newest snapshot. The slot only ever holds complete vectors.
#[derive(Debug, Default)]
pub struct ParameterSlot {
    generation: AtomicU64,
    latest: Mutex<SlotState>,
}

#[derive(Debug, Default)]
struct SlotState {
    pending: Option<PendingParameters>,
    newest_stored: u64,
}

impl ParameterSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `values` as the pending vector and return its generation
    pub fn publish(&self, values: ParameterVector) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut state = self.latest.lock();
        // A slower publisher must not overwrite a newer snapshot, even one
        // that was already taken
        if generation > state.newest_stored {
            state.newest_stored = generation;
            state.pending = Some(PendingParameters { generation, values });
        }

        generation
    }

    /// Consume the pending vector, if any
    pub fn take(&self) -> Option<PendingParameters> {
        self.latest.lock().pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.latest.lock().pending.is_some()
    }

    /// Generation of the most recent publish (0 before the first one)
    pub fn published_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}
