/*!
 * Error Types
 * Centralized error handling with thiserror and serde support
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation errors
///
/// The simulation has no external failure surface (no I/O, no untrusted
/// input); the only conditions modeled as errors are programmer-level
/// misconfigurations. Ready-queue emptiness is an ordinary `None`, not an
/// error, since it is the expected terminal state of the run loop.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Unknown process class: {0}")]
    UnknownClass(String),

    #[error("Process {0} not found in registry")]
    ProcessNotFound(Pid),
}
