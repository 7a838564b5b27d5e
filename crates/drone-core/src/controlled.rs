//! # Controlled Drone
//!
//! A drone built against an externally supplied [`Controller`]. The drone
//! only reads the controller's type label; it never constructs one, so
//! two drones can run on differently configured controllers with no
//! change to their own logic.

use crate::{Controller, Drone, DroneError, DroneName, Flyable, StatusSink};

/// A drone flying under an injected controller.
#[derive(Debug)]
pub struct ControlledDrone {
    base: Drone,
    controller: Box<dyn Controller>,
}

impl ControlledDrone {
    /// Create a drone owning the given controller.
    #[must_use]
    pub fn new(name: impl Into<DroneName>, controller: Box<dyn Controller>) -> Self {
        Self {
            base: Drone::new(name),
            controller,
        }
    }

    /// The controller this drone was built with.
    #[must_use]
    pub fn controller(&self) -> &dyn Controller {
        self.controller.as_ref()
    }
}

impl Flyable for ControlledDrone {
    fn name(&self) -> &DroneName {
        self.base.name()
    }

    fn fly(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        self.base.fly(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlightController, Recorder};

    #[derive(Debug)]
    struct Bench;

    impl Controller for Bench {
        fn kind(&self) -> &str {
            "bench rig"
        }
    }

    #[test]
    fn controller_is_held_not_built() {
        let controller = FlightController::new("NBCFB X-20B");
        let drone = ControlledDrone::new("Hummingbird#1", Box::new(controller));
        assert_eq!(drone.controller().kind(), "NBCFB X-20B");
    }

    #[test]
    fn flight_ignores_controller_kind() {
        let a = ControlledDrone::new("Twin", Box::new(FlightController::new("NBCFB X-20B")));
        let b = ControlledDrone::new("Twin", Box::new(Bench));
        let mut first = Recorder::new();
        let mut second = Recorder::new();

        a.fly(&mut first).expect("fly");
        b.fly(&mut second).expect("fly");

        assert_eq!(first, second);
        assert_eq!(b.controller().kind(), "bench rig");
    }
}
