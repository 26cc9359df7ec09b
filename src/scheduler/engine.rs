/*!
 * Execution Engine
 * Tick-by-tick driver: admission, execution, forking, preemption, signals
 */

use super::queue::ReadyQueue;
use super::timeline::Timeline;
use crate::core::errors::SimulationError;
use crate::core::types::{Pid, SimResult, Tick};
use crate::process::{fork_due, spawn_child, ProcessClass, ProcessControlBlock, ProcessTable};
use log::{debug, info, warn};

/// Maximum consecutive ticks a process may hold the CPU before preemption
pub const QUANTUM_TICKS: Tick = 4;

/// Clock-tick interval between signal deliveries
pub const SIGNAL_INTERVAL: Tick = 3;

/// The process currently occupying the CPU slot, plus the clock value at
/// which its current burst began (the start of its next Gantt entry)
#[derive(Debug, Clone, Copy)]
struct RunningProcess {
    pid: Pid,
    burst_start: Tick,
}

/// The whole mutable state of one simulation run.
///
/// There is exactly one logical actor: the engine advances a single global
/// clock and evaluates forking, preemption, and signal delivery
/// synchronously within each tick, so runs are fully deterministic.
#[derive(Debug, Clone)]
pub struct Simulation {
    clock: Tick,
    table: ProcessTable,
    ready: ReadyQueue,
    current: Option<RunningProcess>,
    timeline: Timeline,
    signals_delivered: u32,
    signals_dropped: u32,
}

impl Simulation {
    /// Build a simulation from seed processes; `next_pid` is the first id
    /// handed to a forked child.
    pub fn new(seeds: Vec<ProcessControlBlock>, next_pid: Pid) -> Self {
        let mut table = ProcessTable::new(next_pid);
        let mut ready = ReadyQueue::new();
        for pcb in seeds {
            ready.insert(pcb.pid);
            table.insert(pcb);
        }

        Self {
            clock: 0,
            table,
            ready,
            current: None,
            timeline: Timeline::new(),
            signals_delivered: 0,
            signals_dropped: 0,
        }
    }

    /// The fixed initial scenario: P1 (PA) and P2 (PB), next pid 3.
    ///
    /// Both seeds enter the ready queue; the first admission extracts P1
    /// (priority 2 beats 3), so P1 runs with P2 queued behind it.
    pub fn bootstrap() -> Self {
        Self::new(
            vec![
                ProcessControlBlock::new(1, ProcessClass::Pa),
                ProcessControlBlock::new(2, ProcessClass::Pb),
            ],
            3,
        )
    }

    /// Run the simulation to natural exhaustion (CPU slot and queue empty)
    pub fn run(&mut self) -> SimResult<()> {
        while self.step()? {}

        info!(
            "Simulation complete at tick {} ({} processes, {} gantt entries, {} signals delivered, {} dropped)",
            self.clock,
            self.table.len(),
            self.timeline.len(),
            self.signals_delivered,
            self.signals_dropped
        );
        Ok(())
    }

    /// One iteration of the tick loop. Returns `Ok(false)` once no process
    /// is left to admit, which is the only termination condition.
    pub fn step(&mut self) -> SimResult<bool> {
        // Admission: fill an empty CPU slot from the ready queue. The burst
        // start of a newly admitted process is the current clock value.
        let (pid, burst_start) = match self.current {
            Some(RunningProcess { pid, burst_start }) => (pid, burst_start),
            None => match self.ready.extract_next(&self.table) {
                Some(pid) => {
                    debug!("Process {} admitted at tick {}", pid, self.clock);
                    self.current = Some(RunningProcess {
                        pid,
                        burst_start: self.clock,
                    });
                    (pid, self.clock)
                }
                None => return Ok(false),
            },
        };

        // Execute exactly one unit of CPU work.
        self.table
            .get_mut(pid)
            .ok_or(SimulationError::ProcessNotFound(pid))?
            .execute_tick();

        // Fork check, on post-increment progress.
        if fork_due(self.table.require(pid)?) {
            let child_pid = self.table.allocate_pid();
            let parent = self
                .table
                .get_mut(pid)
                .ok_or(SimulationError::ProcessNotFound(pid))?;
            if let Some(child) = spawn_child(parent, child_pid) {
                info!(
                    "Process {} forked child {} (class: {}) at tick {}",
                    pid, child_pid, child.class, self.clock
                );
                self.table.insert(child);
                self.ready.insert(child_pid);
            }
        }

        // Advance the clock.
        self.clock += 1;

        // Switch decision: completion or quantum expiry, nothing else.
        let pcb = self.table.require(pid)?;
        let complete = pcb.is_complete();
        let needs_switch = complete || pcb.current_quantum >= QUANTUM_TICKS;

        // Signal delivery uses the post-advance clock. When a switch is
        // pending the signal is deferred to whichever process is admitted
        // by the switch; otherwise the running process receives it now.
        let mut deferred_signal = false;
        if self.clock % SIGNAL_INTERVAL == 0 {
            if needs_switch {
                deferred_signal = true;
            } else {
                self.deliver_signal(pid);
            }
        }

        if needs_switch {
            self.switch_out(pid, burst_start, complete, deferred_signal)?;
        }

        Ok(true)
    }

    /// Context switch: record the finished burst, requeue or retire the
    /// outgoing process, admit the next one, and deliver any deferred signal.
    fn switch_out(
        &mut self,
        pid: Pid,
        burst_start: Tick,
        complete: bool,
        deferred_signal: bool,
    ) -> SimResult<()> {
        self.timeline.record(pid, burst_start, self.clock);

        // Completion takes precedence over requeue: a process finishing
        // exactly at quantum expiry is retired, not requeued.
        if complete {
            info!("Process {} completed at tick {}", pid, self.clock);
        } else {
            self.table
                .get_mut(pid)
                .ok_or(SimulationError::ProcessNotFound(pid))?
                .reset_quantum();
            self.ready.insert(pid);
            debug!("Process {} preempted at tick {} (quantum expiry)", pid, self.clock);
        }

        match self.ready.extract_next(&self.table) {
            Some(next) => {
                debug!("Process {} admitted at tick {}", next, self.clock);
                self.current = Some(RunningProcess {
                    pid: next,
                    burst_start: self.clock,
                });
                if deferred_signal {
                    self.deliver_signal(next);
                }
            }
            None => {
                self.current = None;
                if deferred_signal {
                    self.signals_dropped += 1;
                    warn!(
                        "Signal at tick {} dropped: no runnable process",
                        self.clock
                    );
                }
            }
        }

        Ok(())
    }

    fn deliver_signal(&mut self, pid: Pid) {
        if let Some(pcb) = self.table.get_mut(pid) {
            pcb.deliver_signal();
            self.signals_delivered += 1;
            debug!("Signal delivered to process {} at tick {}", pid, self.clock);
        }
    }

    /// Current clock value, in ticks
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Pid of the process occupying the CPU slot, if any
    pub fn current(&self) -> Option<Pid> {
        self.current.map(|r| r.pid)
    }

    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn signals_delivered(&self) -> u32 {
        self.signals_delivered
    }

    pub fn signals_dropped(&self) -> u32 {
        self.signals_dropped
    }
}
