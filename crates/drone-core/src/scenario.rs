//! # Scenarios
//!
//! One scenario per design principle, each assembling its drones from a
//! [`FleetConfig`] and flying them into a status sink.
//!
//! | Scenario | Lines |
//! |----------|-------|
//! | single-responsibility | one flight (5) |
//! | open-closed | one flight + spin (6) |
//! | interface-segregation | two flights + team-up (11) |
//! | dependency-inversion | one flight per configured drone (10 by default) |

use crate::primitives::{
    DEFAULT_CONTROLLED, DEFAULT_EXTENDED_MODEL, DEFAULT_EXTENDED_NAME, DEFAULT_NAME,
    FLIGHT_LINE_COUNT, MIN_CONTROLLED_DRONES,
};
use crate::{
    ControlledDrone, Controller, Drone, DroneError, DroneName, FlightController, Flyable,
    Groupable, SpinningDrone, StatusSink, TeamDrone,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

// =============================================================================
// FLEET CONFIGURATION
// =============================================================================

/// Names and labels of every drone the scenarios build.
///
/// Every section is optional when deserialized; missing values fall back to
/// the default fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    pub single_responsibility: SoloConfig,
    pub open_closed: ExtendedConfig,
    pub interface_segregation: TeamConfig,
    pub dependency_inversion: ControlledConfig,
}

impl FleetConfig {
    /// Reject fleets whose scenarios could not publish their fixed line
    /// sequences.
    ///
    /// - every drone name must be printable (no control characters)
    /// - dependency inversion needs at least [`MIN_CONTROLLED_DRONES`]
    ///   drones, each on a distinct controller label
    pub fn validate(&self) -> Result<(), DroneError> {
        let names = [
            &self.single_responsibility.name,
            &self.open_closed.name,
            &self.interface_segregation.mate,
            &self.interface_segregation.leader,
        ];
        let controlled = self.dependency_inversion.drones.iter().map(|d| &d.name);

        if let Some(bad) = names.into_iter().chain(controlled).find(|n| !n.is_printable()) {
            return Err(DroneError::Config(format!(
                "Drone name {:?} contains control characters",
                bad.as_str()
            )));
        }

        self.dependency_inversion.validate()
    }
}

/// Drone flown by the single-responsibility scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoloConfig {
    pub name: DroneName,
}

impl Default for SoloConfig {
    fn default() -> Self {
        Self {
            name: DroneName::new(DEFAULT_NAME),
        }
    }
}

/// Drone flown by the open-closed scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedConfig {
    pub name: DroneName,
    pub model: String,
}

impl Default for ExtendedConfig {
    fn default() -> Self {
        Self {
            name: DroneName::new(DEFAULT_EXTENDED_NAME),
            model: DEFAULT_EXTENDED_MODEL.to_string(),
        }
    }
}

/// Drones flown by the interface-segregation scenario.
///
/// The `mate` is held only through its flight capability; the `leader`
/// carries the team capability and adds the mate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    pub mate: DroneName,
    pub leader: DroneName,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            mate: DroneName::new(DEFAULT_NAME),
            leader: DroneName::new(DEFAULT_NAME),
        }
    }
}

/// Drones flown by the dependency-inversion scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlledConfig {
    pub drones: Vec<ControlledEntry>,
}

impl Default for ControlledConfig {
    fn default() -> Self {
        Self {
            drones: DEFAULT_CONTROLLED
                .iter()
                .map(|(name, controller)| ControlledEntry {
                    name: DroneName::new(*name),
                    controller: FlightController::new(*controller),
                })
                .collect(),
        }
    }
}

impl ControlledConfig {
    fn validate(&self) -> Result<(), DroneError> {
        if self.drones.len() < MIN_CONTROLLED_DRONES {
            return Err(DroneError::Config(format!(
                "dependency_inversion needs at least {} drones, found {}",
                MIN_CONTROLLED_DRONES,
                self.drones.len()
            )));
        }

        let mut seen = BTreeSet::new();
        for entry in &self.drones {
            if !seen.insert(entry.controller.kind()) {
                return Err(DroneError::Config(format!(
                    "Controller '{}' is shared by more than one drone",
                    entry.controller
                )));
            }
        }
        Ok(())
    }
}

/// One controller-injected drone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlledEntry {
    pub name: DroneName,
    pub controller: FlightController,
}

// =============================================================================
// SCENARIO
// =============================================================================

/// The four demonstration scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    SingleResponsibility,
    OpenClosed,
    InterfaceSegregation,
    DependencyInversion,
}

impl Scenario {
    /// Every scenario, in presentation order.
    pub const ALL: [Scenario; 4] = [
        Scenario::SingleResponsibility,
        Scenario::OpenClosed,
        Scenario::InterfaceSegregation,
        Scenario::DependencyInversion,
    ];

    /// Stable key used on the command line and in JSON output.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Scenario::SingleResponsibility => "single-responsibility",
            Scenario::OpenClosed => "open-closed",
            Scenario::InterfaceSegregation => "interface-segregation",
            Scenario::DependencyInversion => "dependency-inversion",
        }
    }

    /// Human-readable principle name.
    #[must_use]
    pub fn principle(&self) -> &'static str {
        match self {
            Scenario::SingleResponsibility => "Single Responsibility",
            Scenario::OpenClosed => "Open/Closed",
            Scenario::InterfaceSegregation => "Interface Segregation",
            Scenario::DependencyInversion => "Dependency Inversion",
        }
    }

    /// Number of lines [`Scenario::run`] emits for the given fleet.
    #[must_use]
    pub fn expected_line_count(&self, fleet: &FleetConfig) -> usize {
        match self {
            Scenario::SingleResponsibility => FLIGHT_LINE_COUNT,
            Scenario::OpenClosed => FLIGHT_LINE_COUNT + 1,
            Scenario::InterfaceSegregation => FLIGHT_LINE_COUNT * 2 + 1,
            Scenario::DependencyInversion => {
                FLIGHT_LINE_COUNT * fleet.dependency_inversion.drones.len()
            }
        }
    }

    /// Build the scenario's drones from `fleet` and fly them into `sink`.
    ///
    /// The fleet is validated first; nothing is emitted for an invalid one.
    pub fn run(&self, fleet: &FleetConfig, sink: &mut dyn StatusSink) -> Result<(), DroneError> {
        fleet.validate()?;

        match self {
            Scenario::SingleResponsibility => {
                Drone::new(fleet.single_responsibility.name.clone()).fly(sink)
            }
            Scenario::OpenClosed => {
                let cfg = &fleet.open_closed;
                SpinningDrone::new(cfg.name.clone(), cfg.model.clone()).fly(sink)
            }
            Scenario::InterfaceSegregation => {
                let cfg = &fleet.interface_segregation;
                let mate: Box<dyn Flyable> = Box::new(TeamDrone::new(cfg.mate.clone()));
                mate.fly(sink)?;

                let leader = TeamDrone::new(cfg.leader.clone());
                leader.fly(sink)?;
                leader.add(mate.as_ref(), sink)
            }
            Scenario::DependencyInversion => {
                for entry in &fleet.dependency_inversion.drones {
                    let drone =
                        ControlledDrone::new(entry.name.clone(), Box::new(entry.controller.clone()));
                    drone.fly(sink)?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Scenario {
    type Err = DroneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "s" | "single-responsibility" => Ok(Scenario::SingleResponsibility),
            "o" | "open-closed" => Ok(Scenario::OpenClosed),
            "i" | "interface-segregation" => Ok(Scenario::InterfaceSegregation),
            "d" | "dependency-inversion" => Ok(Scenario::DependencyInversion),
            _ => Err(DroneError::UnknownScenario(s.to_string())),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Recorder;
    use crate::primitives::{SPIN_AROUND, flight_sequence};

    fn run(scenario: Scenario, fleet: &FleetConfig) -> Vec<String> {
        let mut recorder = Recorder::new();
        scenario.run(fleet, &mut recorder).expect("run");
        recorder.into_lines()
    }

    #[test]
    fn every_scenario_matches_expected_line_count() {
        let fleet = FleetConfig::default();
        for scenario in Scenario::ALL {
            assert_eq!(
                run(scenario, &fleet).len(),
                scenario.expected_line_count(&fleet),
                "{}",
                scenario
            );
        }
    }

    #[test]
    fn open_closed_names_falcon() {
        let lines = run(Scenario::OpenClosed, &FleetConfig::default());
        assert_eq!(lines[0], ">>> flying drone[Falcon] ...");
        assert_eq!(lines[5], SPIN_AROUND);
    }

    #[test]
    fn interface_segregation_ends_with_team_up() {
        let lines = run(Scenario::InterfaceSegregation, &FleetConfig::default());
        let hummingbird = flight_sequence(&DroneName::new("Hummingbird"));

        assert_eq!(lines[..5], hummingbird[..]);
        assert_eq!(lines[5..10], hummingbird[..]);
        assert_eq!(
            lines[10],
            "[team up] forming a team, adding Hummingbird to my team ..."
        );
    }

    #[test]
    fn dependency_inversion_flies_each_configured_drone() {
        let mut fleet = FleetConfig::default();
        fleet.dependency_inversion.drones.push(ControlledEntry {
            name: DroneName::new("Hummingbird#3"),
            controller: FlightController::new("NBCFB Q-1"),
        });

        let lines = run(Scenario::DependencyInversion, &fleet);

        assert_eq!(lines.len(), 15);
        assert_eq!(lines[10], ">>> flying drone[Hummingbird#3] ...");
    }

    fn controlled(entries: &[(&str, &str)]) -> FleetConfig {
        let mut fleet = FleetConfig::default();
        fleet.dependency_inversion.drones = entries
            .iter()
            .map(|(name, controller)| ControlledEntry {
                name: DroneName::new(*name),
                controller: FlightController::new(*controller),
            })
            .collect();
        fleet
    }

    fn assert_rejected(fleet: &FleetConfig) {
        let mut recorder = Recorder::new();
        let result = Scenario::DependencyInversion.run(fleet, &mut recorder);
        assert!(matches!(result, Err(DroneError::Config(_))), "{:?}", result);
        assert!(recorder.is_empty());
    }

    #[test]
    fn default_fleet_is_valid() {
        assert!(FleetConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_controlled_fleet_rejected() {
        assert_rejected(&controlled(&[]));
    }

    #[test]
    fn single_controlled_drone_rejected() {
        assert_rejected(&controlled(&[("Hummingbird#1", "NBCFB X-20B")]));
    }

    #[test]
    fn shared_controller_label_rejected() {
        assert_rejected(&controlled(&[
            ("Hummingbird#1", "NBCFB X-20B"),
            ("Hummingbird#2", "NBCFB X-20B"),
        ]));
    }

    #[test]
    fn multiline_name_rejected_before_any_line() {
        let mut fleet = FleetConfig::default();
        fleet.single_responsibility.name = DroneName::new("a\nb");
        let mut recorder = Recorder::new();

        let result = Scenario::SingleResponsibility.run(&fleet, &mut recorder);

        assert!(matches!(result, Err(DroneError::Config(_))));
        assert!(recorder.is_empty());
    }

    #[test]
    fn parse_accepts_keys_and_shorthands() {
        assert_eq!("open-closed".parse::<Scenario>().ok(), Some(Scenario::OpenClosed));
        assert_eq!(
            "Dependency_Inversion".parse::<Scenario>().ok(),
            Some(Scenario::DependencyInversion)
        );
        assert_eq!("s".parse::<Scenario>().ok(), Some(Scenario::SingleResponsibility));
        assert!(matches!(
            "liskov".parse::<Scenario>(),
            Err(DroneError::UnknownScenario(_))
        ));
    }

    #[test]
    fn display_round_trips_through_key() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.to_string().parse::<Scenario>().ok(), Some(scenario));
        }
    }
}
