/*!
 * Process Table
 * Registry of every process created during a run, plus pid allocation
 */

use super::pcb::ProcessControlBlock;
use crate::core::errors::SimulationError;
use crate::core::types::{Pid, SimResult};
use std::collections::BTreeMap;

/// Registry of all processes, keyed by pid.
///
/// Processes are inserted at creation and never removed; completion only
/// retires a process from the ready queue, not from the table. The BTreeMap
/// keeps iteration in ascending pid order for reporting. The table also owns
/// the monotonically increasing pid allocator.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    entries: BTreeMap<Pid, ProcessControlBlock>,
    next_pid: Pid,
}

impl ProcessTable {
    /// Empty table; `next_pid` is the first pid handed out by [`Self::allocate_pid`]
    pub fn new(next_pid: Pid) -> Self {
        Self {
            entries: BTreeMap::new(),
            next_pid,
        }
    }

    /// Register a newly created process
    pub fn insert(&mut self, pcb: ProcessControlBlock) {
        debug_assert!(!self.entries.contains_key(&pcb.pid), "duplicate pid");
        self.entries.insert(pcb.pid, pcb);
    }

    /// Hand out the next pid; ids are unique and monotonically increasing
    pub fn allocate_pid(&mut self) -> Pid {
        let pid = self.next_pid;
        self.next_pid += 1;
        pid
    }

    pub fn get(&self, pid: Pid) -> Option<&ProcessControlBlock> {
        self.entries.get(&pid)
    }

    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut ProcessControlBlock> {
        self.entries.get_mut(&pid)
    }

    /// Lookup that treats a missing pid as a registry invariant violation
    pub fn require(&self, pid: Pid) -> SimResult<&ProcessControlBlock> {
        self.get(pid).ok_or(SimulationError::ProcessNotFound(pid))
    }

    /// All processes in ascending pid order
    pub fn iter(&self) -> impl Iterator<Item = &ProcessControlBlock> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
