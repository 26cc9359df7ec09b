/*!
 * Fork Policy
 * Decides when a process spawns a child and what class the child is
 */

use super::pcb::ProcessControlBlock;
use super::types::ProcessClass;
use crate::core::types::{Pid, Tick};

/// Executed-tick interval between fork milestones
pub const FORK_INTERVAL: Tick = 3;

/// Whether a process is due to fork at its current progress.
///
/// Forking classes (PA, PB) owe one child per completed milestone, i.e.
/// per positive multiple of [`FORK_INTERVAL`] executed ticks. Comparing
/// `fork_count` against `executed_ticks / FORK_INTERVAL` guards against
/// double-forking if the same milestone is re-evaluated.
pub fn fork_due(pcb: &ProcessControlBlock) -> bool {
    if pcb.class.child_class().is_none() {
        return false;
    }

    if pcb.executed_ticks == 0 || pcb.executed_ticks % FORK_INTERVAL != 0 {
        return false;
    }

    let owed = pcb.executed_ticks / FORK_INTERVAL;
    Tick::from(pcb.fork_count) < owed
}

/// Spawn a child for `parent`, assigning it `child_pid`.
///
/// Returns `None` for non-forking classes. On success the parent's fork
/// counter is incremented; the caller is responsible for admitting the
/// child to the registry and ready queue.
pub fn spawn_child(parent: &mut ProcessControlBlock, child_pid: Pid) -> Option<ProcessControlBlock> {
    let child_class = parent.class.child_class()?;
    parent.record_fork();
    Some(ProcessControlBlock::new(child_pid, child_class))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcb_with_progress(class: ProcessClass, executed: Tick, forks: u32) -> ProcessControlBlock {
        let mut pcb = ProcessControlBlock::new(1, class);
        pcb.executed_ticks = executed;
        pcb.fork_count = forks;
        pcb
    }

    #[test]
    fn test_fork_due_at_milestones() {
        assert!(fork_due(&pcb_with_progress(ProcessClass::Pa, 3, 0)));
        assert!(fork_due(&pcb_with_progress(ProcessClass::Pa, 6, 1)));
        assert!(fork_due(&pcb_with_progress(ProcessClass::Pa, 9, 2)));
        assert!(fork_due(&pcb_with_progress(ProcessClass::Pb, 3, 0)));
        assert!(fork_due(&pcb_with_progress(ProcessClass::Pb, 6, 1)));
    }

    #[test]
    fn test_fork_not_due_off_milestone() {
        assert!(!fork_due(&pcb_with_progress(ProcessClass::Pa, 0, 0)));
        assert!(!fork_due(&pcb_with_progress(ProcessClass::Pa, 1, 0)));
        assert!(!fork_due(&pcb_with_progress(ProcessClass::Pa, 4, 1)));
        assert!(!fork_due(&pcb_with_progress(ProcessClass::Pb, 7, 2)));
    }

    #[test]
    fn test_fork_not_due_when_already_forked() {
        // Milestone already satisfied; re-evaluation must not double-fork
        assert!(!fork_due(&pcb_with_progress(ProcessClass::Pa, 3, 1)));
        assert!(!fork_due(&pcb_with_progress(ProcessClass::Pb, 6, 2)));
    }

    #[test]
    fn test_pc_never_forks() {
        for executed in 0..=5 {
            assert!(!fork_due(&pcb_with_progress(ProcessClass::Pc, executed, 0)));
        }
    }

    #[test]
    fn test_spawn_child_classes() {
        let mut pa = pcb_with_progress(ProcessClass::Pa, 3, 0);
        let child = spawn_child(&mut pa, 10).unwrap();
        assert_eq!(child.class, ProcessClass::Pb);
        assert_eq!(child.pid, 10);
        assert_eq!(pa.fork_count, 1);

        let mut pb = pcb_with_progress(ProcessClass::Pb, 3, 0);
        let child = spawn_child(&mut pb, 11).unwrap();
        assert_eq!(child.class, ProcessClass::Pc);

        let mut pc = pcb_with_progress(ProcessClass::Pc, 3, 0);
        assert!(spawn_child(&mut pc, 12).is_none());
        assert_eq!(pc.fork_count, 0);
    }
}
