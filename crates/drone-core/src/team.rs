//! # Team Drone
//!
//! A drone conforming to both [`Flyable`] and [`Groupable`], with the team
//! behavior held as a separate capability rather than merged into flight.
//!
//! The team capability is a required field checked when the drone is
//! built. A `TeamDrone` that exists always has something to delegate
//! `add` to.

use crate::{Drone, DroneError, DroneName, Flyable, Groupable, StatusSink, TeamAnnouncer};

/// A drone that flies and forms teams.
pub struct TeamDrone {
    base: Drone,
    team: Box<dyn Groupable>,
}

impl TeamDrone {
    /// Create a team drone using the stock [`TeamAnnouncer`] capability.
    #[must_use]
    pub fn new(name: impl Into<DroneName>) -> Self {
        Self {
            base: Drone::new(name),
            team: Box::new(TeamAnnouncer),
        }
    }

    /// Start building a team drone with a caller-supplied team capability.
    #[must_use]
    pub fn builder(name: impl Into<DroneName>) -> TeamDroneBuilder {
        TeamDroneBuilder {
            name: name.into(),
            team: None,
        }
    }

    /// The base drone whose flight this one reuses.
    #[must_use]
    pub fn base(&self) -> &Drone {
        &self.base
    }
}

impl std::fmt::Debug for TeamDrone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamDrone")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl Flyable for TeamDrone {
    fn name(&self) -> &DroneName {
        self.base.name()
    }

    fn fly(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        self.base.fly(sink)
    }
}

impl Groupable for TeamDrone {
    fn add(&self, peer: &dyn Flyable, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        self.team.add(peer, sink)
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builder for [`TeamDrone`]; refuses to build without a team capability.
pub struct TeamDroneBuilder {
    name: DroneName,
    team: Option<Box<dyn Groupable>>,
}

impl TeamDroneBuilder {
    /// Set the team capability.
    #[must_use]
    pub fn team(mut self, team: impl Groupable + 'static) -> Self {
        self.team = Some(Box::new(team));
        self
    }

    /// Finish construction.
    ///
    /// Returns `DroneError::MissingCapability("team")` if no team
    /// capability was supplied.
    pub fn build(self) -> Result<TeamDrone, DroneError> {
        let team = self.team.ok_or(DroneError::MissingCapability("team"))?;
        Ok(TeamDrone {
            base: Drone::new(self.name),
            team,
        })
    }
}
