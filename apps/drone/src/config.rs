//! # Fleet Configuration
//!
//! Loads a [`FleetConfig`] from TOML.
//!
//! Resolution order:
//! 1. `--config <path>` on the command line
//! 2. the `DRONE_CONFIG` environment variable
//! 3. the built-in default fleet
//!
//! ```toml
//! [single_responsibility]
//! name = "Hummingbird"
//!
//! [open_closed]
//! name = "Falcon"
//! model = "Y"
//!
//! [[dependency_inversion.drones]]
//! name = "Hummingbird#1"
//! controller = "NBCFB X-20B"
//! ```

use drone_core::{DroneError, FleetConfig};
use std::path::{Path, PathBuf};

/// Environment variable naming a fleet configuration file.
pub const CONFIG_ENV: &str = "DRONE_CONFIG";

/// Largest fleet file accepted (64 KiB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Pick the configuration path: explicit flag first, then `DRONE_CONFIG`.
pub fn resolve_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CONFIG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Load the fleet for this run, falling back to defaults when no path is set.
pub fn load_or_default(flag: Option<&Path>) -> Result<FleetConfig, DroneError> {
    match resolve_path(flag) {
        Some(path) => load(&path),
        None => {
            tracing::debug!("No fleet configuration given, using defaults");
            Ok(FleetConfig::default())
        }
    }
}

/// Read and parse a TOML fleet file.
pub fn load(path: &Path) -> Result<FleetConfig, DroneError> {
    let path = validate_file_path(path)?;
    validate_file_size(&path, MAX_CONFIG_FILE_SIZE)?;

    let text = std::fs::read_to_string(&path)
        .map_err(|e| DroneError::Config(format!("Cannot read '{}': {}", path.display(), e)))?;

    let fleet = parse(&text).map_err(|e| match e {
        DroneError::Config(msg) => {
            DroneError::Config(format!("Invalid fleet file '{}': {}", path.display(), msg))
        }
        other => other,
    })?;

    tracing::info!("Loaded fleet configuration from {}", path.display());
    Ok(fleet)
}

/// Parse and validate fleet configuration from TOML text.
pub fn parse(text: &str) -> Result<FleetConfig, DroneError> {
    let fleet: FleetConfig =
        toml::from_str(text).map_err(|e| DroneError::Config(e.to_string()))?;
    fleet.validate()?;
    Ok(fleet)
}

/// Refuse files larger than `max_size` before reading them.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), DroneError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| DroneError::Config(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(DroneError::Config(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve the path and make sure it names a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, DroneError> {
    let canonical = path.canonicalize().map_err(|e| {
        DroneError::Config(format!("Invalid config path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(DroneError::Config(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}
