//! # Core Type Definitions
//!
//! This module contains the value types shared by every drone variant:
//! - Identity (`DroneName`)
//! - Controller abstraction (`Controller`, `FlightController`)
//! - Error types (`DroneError`)

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// IDENTITY
// =============================================================================

/// The name a drone is constructed with.
///
/// There is no setter: once a drone holds a name, it keeps it for its
/// whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DroneName(String);

impl DroneName {
    /// Create a new name from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the name fits inside a single status line.
    ///
    /// Control characters (newlines, carriage returns, escapes) would split
    /// or garble the banner, so they are not allowed.
    #[must_use]
    pub fn is_printable(&self) -> bool {
        !self.0.chars().any(char::is_control)
    }
}

impl From<&str> for DroneName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DroneName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for DroneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// The abstract shape of a flight controller.
///
/// Drones only ever read the label; how a controller is built or
/// configured is the caller's business.
pub trait Controller: Send + Sync + std::fmt::Debug {
    /// The controller's type label, e.g. `"NBCFB X-20B"`.
    fn kind(&self) -> &str;
}

/// A passive controller value holding nothing but its type label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightController {
    kind: String,
}

impl FlightController {
    /// Create a controller with the given type label.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl Controller for FlightController {
    fn kind(&self) -> &str {
        &self.kind
    }
}

impl std::fmt::Display for FlightController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.kind)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or flying drones.
///
/// Flight itself never fails; errors come from construction-time
/// validation, the output sink, or the surrounding configuration.
#[derive(Debug, Error)]
pub enum DroneError {
    /// A drone was built without a capability it declares.
    #[error("Missing capability: {0}")]
    MissingCapability(&'static str),

    /// The requested scenario does not exist.
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// The status sink refused a line.
    #[error("Sink error: {0}")]
    Sink(String),

    /// The fleet configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
