//! # drone-core
//!
//! Capability-composed drones - THE LOGIC.
//!
//! Each drone variant demonstrates one design principle by how it is put
//! together, not by what it prints:
//! - [`Drone`]: every flight step is its own operation (single responsibility)
//! - [`SpinningDrone`]: extends [`Drone`] by holding one (open/closed)
//! - [`TeamDrone`]: flight and teaming are separate traits (interface segregation)
//! - [`ControlledDrone`]: the controller is injected, never built (dependency inversion)
//!
//! ## Architectural Constraints
//!
//! - Sequential: no async, no threads, no shared mutable state
//! - Drones never write to stdout; every line goes through a [`StatusSink`]
//! - Capabilities a drone declares are present from construction onward

// =============================================================================
// MODULES
// =============================================================================

pub mod capability;
pub mod controlled;
pub mod drone;
pub mod extended;
pub mod primitives;
pub mod scenario;
pub mod sink;
pub mod team;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Controller, DroneError, DroneName, FlightController};

// =============================================================================
// RE-EXPORTS: Capabilities & Entities
// =============================================================================

pub use capability::{Flyable, Groupable, TeamAnnouncer};
pub use controlled::ControlledDrone;
pub use drone::Drone;
pub use extended::SpinningDrone;
pub use team::{TeamDrone, TeamDroneBuilder};

// =============================================================================
// RE-EXPORTS: Output & Scenarios
// =============================================================================

pub use scenario::{
    ControlledConfig, ControlledEntry, ExtendedConfig, FleetConfig, Scenario, SoloConfig,
    TeamConfig,
};
pub use sink::{Recorder, StatusSink, WriterSink};
