//! # Spinning Drone
//!
//! Extends [`Drone`] without touching it: the spinning drone holds a base
//! drone, runs its flight unchanged and appends one new step.

use crate::primitives::SPIN_AROUND;
use crate::{Drone, DroneError, DroneName, Flyable, StatusSink};

/// A drone that spins around once airborne.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinningDrone {
    base: Drone,
    model: String,
}

impl SpinningDrone {
    /// Create a spinning drone with a name and model label.
    #[must_use]
    pub fn new(name: impl Into<DroneName>, model: impl Into<String>) -> Self {
        Self {
            base: Drone::new(name),
            model: model.into(),
        }
    }

    /// The base drone whose steps this one reuses.
    #[must_use]
    pub fn base(&self) -> &Drone {
        &self.base
    }

    /// Model label.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The extension step, run once the base flight is airborne.
    pub fn spin_around(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        sink.emit(SPIN_AROUND)
    }
}

impl Flyable for SpinningDrone {
    fn name(&self) -> &DroneName {
        self.base.name()
    }

    fn fly(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        self.base.fly(sink)?;
        self.spin_around(sink)
    }
}
