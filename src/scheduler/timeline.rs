/*!
 * Timeline Recorder
 * Accumulates contiguous per-process execution intervals (Gantt entries)
 */

use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Serialize};

/// One contiguous CPU-occupancy interval for a process; `start < end` always
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GanttEntry {
    pub pid: Pid,
    pub start: Tick,
    pub end: Tick,
}

/// Passive accumulator of Gantt entries, appended at every context switch.
/// Past entries are never mutated; the finished sequence is chronological
/// and gap-free because the engine never idles between bursts.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    entries: Vec<GanttEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished burst; zero-length intervals are never recorded
    pub fn record(&mut self, pid: Pid, start: Tick, end: Tick) {
        debug_assert!(start < end, "zero-length burst");
        self.entries.push(GanttEntry { pid, start, end });
    }

    pub fn entries(&self) -> &[GanttEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total recorded CPU time for one process
    pub fn cpu_time(&self, pid: Pid) -> Tick {
        self.entries
            .iter()
            .filter(|e| e.pid == pid)
            .map(|e| e.end - e.start)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_cpu_time() {
        let mut timeline = Timeline::new();
        timeline.record(1, 0, 4);
        timeline.record(2, 4, 8);
        timeline.record(1, 8, 10);

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.cpu_time(1), 6);
        assert_eq!(timeline.cpu_time(2), 4);
        assert_eq!(timeline.cpu_time(9), 0);
    }

    #[test]
    fn test_entries_keep_recorded_order() {
        let mut timeline = Timeline::new();
        timeline.record(2, 0, 4);
        timeline.record(1, 4, 5);

        let pids: Vec<_> = timeline.entries().iter().map(|e| e.pid).collect();
        assert_eq!(pids, vec![2, 1]);
    }
}
