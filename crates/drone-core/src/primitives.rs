//! # Status Primitives
//!
//! Fixed status line texts and default fleet values.
//!
//! Every line a drone can publish is defined here, so the exact wording
//! lives in one place and tests can compare against the same constants.

use crate::DroneName;

/// Prefix of the line opening every flight: `>>> flying drone[<name>] ...`
pub const FLIGHT_BANNER_PREFIX: &str = ">>> flying drone[";

/// Suffix of the line opening every flight.
pub const FLIGHT_BANNER_SUFFIX: &str = "] ...";

/// Battery diagnostic, the first preparation step.
pub const BATTERY_CHECK: &str = "[preparing] checking battery's status ...";

/// Propeller diagnostic, the second preparation step.
pub const PROPELLER_CHECK: &str = "[preparing] checking propellers' status ...";

/// Takeoff phase.
pub const TAKE_OFF: &str = "[taking off] taking off now ...";

/// In-flight health check.
pub const HEALTH_CHECK: &str = "[flying] on the air, everything is ok, auto balancing enabled ...";

/// Extension step appended by spinning drones.
pub const SPIN_AROUND: &str = "[flying] I am spinning around ...";

/// Number of lines a single plain flight publishes (banner + four steps).
pub const FLIGHT_LINE_COUNT: usize = 5;

// =============================================================================
// DEFAULT FLEET
// =============================================================================

/// Default drone name for the base and segregated drones.
pub const DEFAULT_NAME: &str = "Hummingbird";

/// Default name of the extended drone.
pub const DEFAULT_EXTENDED_NAME: &str = "Falcon";

/// Default model label of the extended drone.
pub const DEFAULT_EXTENDED_MODEL: &str = "Y";

/// Fewest controller-injected drones a fleet may configure; each needs its
/// own controller label.
pub const MIN_CONTROLLED_DRONES: usize = 2;

/// Default (name, controller label) pairs for controller-injected drones.
pub const DEFAULT_CONTROLLED: [(&str, &str); 2] = [
    ("Hummingbird#1", "NBCFB X-20B"),
    ("Hummingbird#2", "NBCFB W-93S"),
];

// =============================================================================
// FORMATTING
// =============================================================================

/// The banner line naming the drone about to fly.
#[must_use]
pub fn flight_banner(name: &DroneName) -> String {
    format!("{}{}{}", FLIGHT_BANNER_PREFIX, name, FLIGHT_BANNER_SUFFIX)
}

/// The team-up line naming the peer joining the team.
#[must_use]
pub fn team_up(peer: &DroneName) -> String {
    format!("[team up] forming a team, adding {} to my team ...", peer)
}

/// The full line sequence of one plain flight.
#[must_use]
pub fn flight_sequence(name: &DroneName) -> Vec<String> {
    vec![
        flight_banner(name),
        BATTERY_CHECK.to_string(),
        PROPELLER_CHECK.to_string(),
        TAKE_OFF.to_string(),
        HEALTH_CHECK.to_string(),
    ]
}
