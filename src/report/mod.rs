/*!
 * Reporting Sink
 * Read-only view of a finished run: Gantt chart and signal counts
 */

use crate::core::types::{Pid, Tick};
use crate::scheduler::{GanttEntry, Simulation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Final results of a simulation run.
///
/// Gantt entries appear in recorded (chronological) order; signal counts
/// are keyed by pid, so iteration is ascending for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub gantt: Vec<GanttEntry>,
    pub signal_counts: BTreeMap<Pid, u32>,
    pub total_signals: u32,
    pub signals_dropped: u32,
    pub final_tick: Tick,
}

impl SimulationReport {
    /// Snapshot the results of a finished simulation
    pub fn from_simulation(sim: &Simulation) -> Self {
        let signal_counts: BTreeMap<Pid, u32> = sim
            .table()
            .iter()
            .map(|pcb| (pcb.pid, pcb.received_signals))
            .collect();
        let total_signals = signal_counts.values().sum();

        Self {
            gantt: sim.timeline().entries().to_vec(),
            signal_counts,
            total_signals,
            signals_dropped: sim.signals_dropped(),
            final_tick: sim.clock(),
        }
    }

    /// Render the Gantt chart and signal-count tables as plain text
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("Gantt Chart:\n");
        out.push_str("+----------+------------+----------+\n");
        out.push_str("| Process  | Start Time | End Time |\n");
        out.push_str("+----------+------------+----------+\n");
        for entry in &self.gantt {
            let _ = writeln!(
                out,
                "| P{:<7} | {:<10} | {:<8} |",
                entry.pid, entry.start, entry.end
            );
        }
        out.push_str("+----------+------------+----------+\n");

        out.push_str("\nSignal Count per Process:\n");
        for (pid, count) in &self.signal_counts {
            let _ = writeln!(out, "P{}: {} signals", pid, count);
        }
        let _ = writeln!(out, "\nTotal signals: {}", self.total_signals);

        out
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
