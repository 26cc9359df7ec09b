/*!
 * Scheduler
 * Ready queue, timeline recorder, and the tick-loop execution engine
 */

pub mod engine;
pub mod queue;
pub mod timeline;

pub use engine::{Simulation, QUANTUM_TICKS, SIGNAL_INTERVAL};
pub use queue::ReadyQueue;
pub use timeline::{GanttEntry, Timeline};
