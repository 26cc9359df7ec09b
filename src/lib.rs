/*!
 * Scheduler Simulation Library
 * Discrete-time preemptive priority scheduling with forking and signals
 */

pub mod core;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use crate::core::{Pid, Priority, SimResult, SimulationError, Tick};
pub use crate::process::{ProcessClass, ProcessControlBlock, ProcessTable};
pub use crate::report::SimulationReport;
pub use crate::scheduler::{
    GanttEntry, ReadyQueue, Simulation, Timeline, QUANTUM_TICKS, SIGNAL_INTERVAL,
};
