use indexmap::IndexMap;

use crate::core::{Axis, AxisId, AxisRange};

/// Recorded `(min, max)` of many axes, keyed by axis identity.
///
/// Drag gestures record one of these on mouse-down and restore it before
/// every mouse-move, so each move applies the full accumulated delta to the
/// same baseline instead of compounding small incremental deltas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiAxisLimits {
    limits: IndexMap<AxisId, (f64, f64)>,
}

impl MultiAxisLimits {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures every axis, overwriting earlier entries for the same id.
    #[must_use]
    pub fn record<'a>(axes: impl IntoIterator<Item = &'a Axis>) -> Self {
        let mut limits = Self::new();
        for axis in axes {
            limits.remember(axis);
        }
        limits
    }

    pub fn remember(&mut self, axis: &Axis) {
        self.limits.insert(axis.id(), (axis.min(), axis.max()));
    }

    /// Writes the recorded bounds back onto `axis`.
    ///
    /// Returns `false` without touching the axis when it was not recorded,
    /// which happens for axes added after the snapshot was taken.
    pub fn restore(&self, axis: &mut Axis) -> bool {
        match self.limits.get(&axis.id()) {
            Some(&(min, max)) => {
                axis.range_mut().set(min, max);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, axis: AxisId) -> Option<AxisRange> {
        self.limits
            .get(&axis)
            .map(|&(min, max)| AxisRange::new(min, max))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AxisId, AxisRange)> + '_ {
        self.limits
            .iter()
            .map(|(&id, &(min, max))| (id, AxisRange::new(min, max)))
    }
}
