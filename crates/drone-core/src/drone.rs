//! # Drone
//!
//! The base drone. Every step of a flight is its own operation with a
//! single concern, so a caller can run and observe any one of them without
//! repeating the whole sequence.
//!
//! | Step | Concern |
//! |------|---------|
//! | `announce` | banner naming the drone |
//! | `check_battery` | battery diagnostic |
//! | `check_propeller` | propeller diagnostic |
//! | `take_off` | takeoff phase |
//! | `health_check` | in-flight health check |

use crate::primitives::{BATTERY_CHECK, HEALTH_CHECK, PROPELLER_CHECK, TAKE_OFF, flight_banner};
use crate::{DroneError, DroneName, Flyable, StatusSink};

/// A drone that can fly and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drone {
    name: DroneName,
}

impl Drone {
    /// Create a drone with the given name.
    #[must_use]
    pub fn new(name: impl Into<DroneName>) -> Self {
        Self { name: name.into() }
    }

    /// Publish the banner naming this drone.
    pub fn announce(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        sink.emit(&flight_banner(&self.name))
    }

    /// Pre-flight checks: battery, then propellers.
    pub fn prepare(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        self.check_battery(sink)?;
        self.check_propeller(sink)
    }

    /// Battery diagnostic.
    pub fn check_battery(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        sink.emit(BATTERY_CHECK)
    }

    /// Propeller diagnostic.
    pub fn check_propeller(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        sink.emit(PROPELLER_CHECK)
    }

    /// Takeoff phase.
    pub fn take_off(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        sink.emit(TAKE_OFF)
    }

    /// In-flight health check.
    pub fn health_check(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        sink.emit(HEALTH_CHECK)
    }
}

impl Flyable for Drone {
    fn name(&self) -> &DroneName {
        &self.name
    }

    fn fly(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        self.announce(sink)?;
        self.prepare(sink)?;
        self.take_off(sink)?;
        self.health_check(sink)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Recorder;
    use crate::primitives::flight_sequence;

    #[test]
    fn fly_emits_hummingbird_sequence() {
        let drone = Drone::new("Hummingbird");
        let mut recorder = Recorder::new();

        drone.fly(&mut recorder).expect("fly");

        assert_eq!(
            recorder.lines(),
            [
                ">>> flying drone[Hummingbird] ...",
                "[preparing] checking battery's status ...",
                "[preparing] checking propellers' status ...",
                "[taking off] taking off now ...",
                "[flying] on the air, everything is ok, auto balancing enabled ...",
            ]
        );
    }

    #[test]
    fn steps_are_callable_alone() {
        let drone = Drone::new("Hummingbird");
        let mut recorder = Recorder::new();

        drone.take_off(&mut recorder).expect("take off");
        assert_eq!(recorder.lines(), [TAKE_OFF]);

        recorder.clear();
        drone.health_check(&mut recorder).expect("health");
        assert_eq!(recorder.lines(), [HEALTH_CHECK]);
    }

    #[test]
    fn prepare_runs_battery_before_propeller() {
        let drone = Drone::new("Hummingbird");
        let mut recorder = Recorder::new();

        drone.prepare(&mut recorder).expect("prepare");

        assert_eq!(recorder.lines(), [BATTERY_CHECK, PROPELLER_CHECK]);
    }

    #[test]
    fn fly_twice_repeats_sequence() {
        let drone = Drone::new("Swift");
        let mut recorder = Recorder::new();

        drone.fly(&mut recorder).expect("fly");
        drone.fly(&mut recorder).expect("fly");

        let once = flight_sequence(drone.name());
        let twice: Vec<String> = once.iter().chain(once.iter()).cloned().collect();
        assert_eq!(recorder.into_lines(), twice);
    }
}
