//! # CLI Command Implementations
//!
//! Each command flies scenarios from drone-core and renders their lines,
//! either verbatim (one status line per stdout line) or as JSON.

use super::Commands;
use drone_core::{DroneError, FleetConfig, Recorder, Scenario, WriterSink};
use serde::Serialize;
use std::io::Write;

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// Lines produced by one scenario, as rendered in JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutput {
    pub scenario: Scenario,
    pub principle: String,
    pub lines: Vec<String>,
}

/// Fly a scenario into memory.
pub fn record(scenario: Scenario, fleet: &FleetConfig) -> Result<ScenarioOutput, DroneError> {
    let mut recorder = Recorder::new();
    scenario.run(fleet, &mut recorder)?;

    tracing::debug!(
        scenario = scenario.key(),
        lines = recorder.len(),
        "Scenario recorded"
    );

    Ok(ScenarioOutput {
        scenario,
        principle: scenario.principle().to_string(),
        lines: recorder.into_lines(),
    })
}

/// Scenarios a command flies, in order. `list` flies none.
pub fn scenarios_for(command: &Commands) -> Result<Vec<Scenario>, DroneError> {
    match command {
        Commands::Run { scenario } => Ok(vec![scenario.parse()?]),
        Commands::All => Ok(Scenario::ALL.to_vec()),
        Commands::List => Ok(Vec::new()),
    }
}

/// Record every scenario a command flies.
pub fn record_command(
    command: &Commands,
    fleet: &FleetConfig,
) -> Result<Vec<ScenarioOutput>, DroneError> {
    scenarios_for(command)?
        .into_iter()
        .map(|scenario| record(scenario, fleet))
        .collect()
}

/// Render JSON for one or more scenario outputs.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, DroneError> {
    serde_json::to_string_pretty(value).map_err(|e| DroneError::Serialization(e.to_string()))
}

/// Fly a scenario straight to stdout.
fn fly_to_stdout(scenario: Scenario, fleet: &FleetConfig) -> Result<(), DroneError> {
    tracing::info!("Flying scenario {} ({})", scenario, scenario.principle());

    let mut sink = WriterSink::new(std::io::stdout().lock());
    scenario.run(fleet, &mut sink)?;
    sink.flush()
}

fn print_json(json: &str) -> Result<(), DroneError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json).map_err(|e| DroneError::Io(e.to_string()))
}

// =============================================================================
// RUN / ALL COMMANDS
// =============================================================================

/// Fly the scenarios selected by `run` or `all`.
///
/// In JSON mode `run` prints a single object and `all` prints an array.
pub fn cmd_fly(fleet: &FleetConfig, command: &Commands, json_mode: bool) -> Result<(), DroneError> {
    if json_mode {
        let outputs = record_command(command, fleet)?;
        let json = match (command, outputs.as_slice()) {
            (Commands::Run { .. }, [single]) => render_json(single)?,
            _ => render_json(&outputs)?,
        };
        return print_json(&json);
    }

    for scenario in scenarios_for(command)? {
        fly_to_stdout(scenario, fleet)?;
    }
    Ok(())
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// List available scenarios.
pub fn cmd_list(json_mode: bool) -> Result<(), DroneError> {
    if json_mode {
        let output: Vec<_> = Scenario::ALL
            .iter()
            .map(|s| {
                serde_json::json!({
                    "scenario": s.key(),
                    "principle": s.principle(),
                })
            })
            .collect();
        return print_json(&render_json(&output)?);
    }

    let mut stdout = std::io::stdout().lock();
    for scenario in Scenario::ALL {
        writeln!(stdout, "{:<24} {}", scenario.key(), scenario.principle())
            .map_err(|e| DroneError::Io(e.to_string()))?;
    }
    Ok(())
}
