/*!
 * Ready Queue
 * Runnable, non-executing processes with priority-min extraction
 */

use crate::core::types::{Pid, Priority};
use crate::process::ProcessTable;

/// Queue slot: a pid plus the arrival sequence number used as tie-break key
#[derive(Debug, Clone, Copy)]
struct QueuedProcess {
    pid: Pid,
    seq: u64,
}

/// Ready queue with full-scan minimum extraction.
///
/// Priority is not cached per slot; it is looked up from the process table
/// at extraction time. Ties within a priority tier are broken by arrival
/// order through an explicit monotonic sequence key, so FIFO behavior does
/// not depend on the container's iteration order.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    entries: Vec<QueuedProcess>,
    next_seq: u64,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a process; arrival order is remembered for tie-breaking
    pub fn insert(&mut self, pid: Pid) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(QueuedProcess { pid, seq });
    }

    /// Remove and return the pid with the numerically smallest priority,
    /// FIFO within a tier. Returns `None` when the queue is empty, which is
    /// the expected terminal condition of the run loop.
    pub fn extract_next(&mut self, table: &ProcessTable) -> Option<Pid> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .min_by_key(|(_, slot)| {
                let priority = table
                    .get(slot.pid)
                    .map(|pcb| pcb.priority())
                    .unwrap_or(Priority::MAX);
                (priority, slot.seq)
            })
            .map(|(index, _)| index)?;

        Some(self.entries.remove(index).pid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProcessClass, ProcessControlBlock};
    use proptest::prelude::*;

    fn table_with(classes: &[ProcessClass]) -> ProcessTable {
        let mut table = ProcessTable::new(classes.len() as Pid + 1);
        for (i, class) in classes.iter().enumerate() {
            table.insert(ProcessControlBlock::new(i as Pid + 1, *class));
        }
        table
    }

    #[test]
    fn test_extract_empty() {
        let table = ProcessTable::new(1);
        let mut queue = ReadyQueue::new();
        assert!(queue.extract_next(&table).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_extract_highest_priority() {
        // P1=PA(2), P2=PB(3), P3=PC(1)
        let table = table_with(&[ProcessClass::Pa, ProcessClass::Pb, ProcessClass::Pc]);
        let mut queue = ReadyQueue::new();
        queue.insert(1);
        queue.insert(2);
        queue.insert(3);

        assert_eq!(queue.extract_next(&table), Some(3));
        assert_eq!(queue.extract_next(&table), Some(1));
        assert_eq!(queue.extract_next(&table), Some(2));
        assert_eq!(queue.extract_next(&table), None);
    }

    #[test]
    fn test_fifo_within_priority_tier() {
        let table = table_with(&[ProcessClass::Pb, ProcessClass::Pb, ProcessClass::Pb]);
        let mut queue = ReadyQueue::new();
        queue.insert(2);
        queue.insert(3);
        queue.insert(1);

        assert_eq!(queue.extract_next(&table), Some(2));
        assert_eq!(queue.extract_next(&table), Some(3));
        assert_eq!(queue.extract_next(&table), Some(1));
    }

    #[test]
    fn test_reinserted_process_loses_tie() {
        let table = table_with(&[ProcessClass::Pb, ProcessClass::Pb]);
        let mut queue = ReadyQueue::new();
        queue.insert(1);
        queue.insert(2);

        assert_eq!(queue.extract_next(&table), Some(1));
        queue.insert(1);
        // Same tier: the earlier-queued process wins
        assert_eq!(queue.extract_next(&table), Some(2));
        assert_eq!(queue.extract_next(&table), Some(1));
    }

    fn class_strategy() -> impl Strategy<Value = ProcessClass> {
        prop_oneof![
            Just(ProcessClass::Pa),
            Just(ProcessClass::Pb),
            Just(ProcessClass::Pc),
        ]
    }

    proptest! {
        #[test]
        fn prop_extraction_is_stable_priority_sort(classes in prop::collection::vec(class_strategy(), 1..32)) {
            let table = table_with(&classes);
            let mut queue = ReadyQueue::new();
            for i in 0..classes.len() {
                queue.insert(i as Pid + 1);
            }

            let mut extracted = Vec::new();
            while let Some(pid) = queue.extract_next(&table) {
                extracted.push(pid);
            }

            // Expected order: stable sort of arrival order by priority
            let mut expected: Vec<Pid> = (1..=classes.len() as Pid).collect();
            expected.sort_by_key(|pid| classes[(*pid - 1) as usize].priority());

            prop_assert_eq!(extracted, expected);
        }
    }
}
