/*!
 * Process Control Block
 * Per-process schedulable state: progress, quantum, signal and fork counters
 */

use super::types::ProcessClass;
use crate::core::types::{Pid, Priority, Tick};
use serde::{Deserialize, Serialize};

/// Process control block
///
/// `pid`, `class`, and the values derived from the class (priority, total
/// ticks) are immutable after construction; the counters only ever grow,
/// except `current_quantum`, which resets to zero whenever the process is
/// reselected after a context switch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessControlBlock {
    pub pid: Pid,
    pub class: ProcessClass,
    pub executed_ticks: Tick,
    pub current_quantum: Tick,
    pub received_signals: u32,
    pub fork_count: u32,
}

impl ProcessControlBlock {
    pub fn new(pid: Pid, class: ProcessClass) -> Self {
        Self {
            pid,
            class,
            executed_ticks: 0,
            current_quantum: 0,
            received_signals: 0,
            fork_count: 0,
        }
    }

    /// Scheduling priority, derived from the class (smaller = higher)
    pub fn priority(&self) -> Priority {
        self.class.priority()
    }

    /// Total CPU ticks this process needs to complete
    pub fn total_ticks(&self) -> Tick {
        self.class.total_ticks()
    }

    /// Consume exactly one unit of CPU work
    pub fn execute_tick(&mut self) {
        self.executed_ticks += 1;
        self.current_quantum += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.executed_ticks >= self.total_ticks()
    }

    /// Reset the burst counter; called when the process yields the CPU
    pub fn reset_quantum(&mut self) {
        self.current_quantum = 0;
    }

    pub fn deliver_signal(&mut self) {
        self.received_signals += 1;
    }

    pub fn record_fork(&mut self) {
        self.fork_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pcb_is_idle() {
        let pcb = ProcessControlBlock::new(1, ProcessClass::Pa);
        assert_eq!(pcb.executed_ticks, 0);
        assert_eq!(pcb.current_quantum, 0);
        assert_eq!(pcb.received_signals, 0);
        assert_eq!(pcb.fork_count, 0);
        assert!(!pcb.is_complete());
    }

    #[test]
    fn test_execute_until_complete() {
        let mut pcb = ProcessControlBlock::new(3, ProcessClass::Pc);
        for _ in 0..4 {
            pcb.execute_tick();
            assert!(!pcb.is_complete());
        }
        pcb.execute_tick();
        assert_eq!(pcb.executed_ticks, 5);
        assert!(pcb.is_complete());
    }

    #[test]
    fn test_quantum_reset_preserves_progress() {
        let mut pcb = ProcessControlBlock::new(2, ProcessClass::Pb);
        pcb.execute_tick();
        pcb.execute_tick();
        assert_eq!(pcb.current_quantum, 2);

        pcb.reset_quantum();
        assert_eq!(pcb.current_quantum, 0);
        assert_eq!(pcb.executed_ticks, 2);
    }
}
