//! # Capabilities
//!
//! Independent behavioral contracts a drone may conform to.
//!
//! Flight and teaming are separate traits: code that only needs a drone to
//! fly depends on [`Flyable`] alone and never sees [`Groupable`].

use crate::primitives::team_up;
use crate::{DroneError, DroneName, StatusSink};

/// Something that can fly.
pub trait Flyable {
    /// The name this flyer was constructed with.
    fn name(&self) -> &DroneName;

    /// Run the full flight sequence, publishing one line per step.
    fn fly(&self, sink: &mut dyn StatusSink) -> Result<(), DroneError>;
}

/// Something that can form a team with other flyers.
///
/// Peers are taken as `&dyn Flyable`, so any flyer can join a team, not
/// only drones of the same concrete type.
pub trait Groupable {
    /// Add `peer` to the team.
    fn add(&self, peer: &dyn Flyable, sink: &mut dyn StatusSink) -> Result<(), DroneError>;
}

/// Stateless team capability that announces every new member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamAnnouncer;

impl Groupable for TeamAnnouncer {
    fn add(&self, peer: &dyn Flyable, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        sink.emit(&team_up(peer.name()))
    }
}
