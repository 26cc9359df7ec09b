/*!
 * Core Types
 * Common types used across the simulation
 */

/// Process ID type
pub type Pid = u32;

/// Simulated clock value, in ticks
pub type Tick = u64;

/// Priority level (smaller = higher priority)
pub type Priority = u8;

/// Common result type for simulation operations
pub type SimResult<T> = Result<T, super::errors::SimulationError>;
