/*!
 * Scheduler Simulation - Main Entry Point
 *
 * Runs the fixed two-seed scenario (P1: PA, P2: PB) to exhaustion and
 * prints the Gantt chart and per-process signal counts.
 */

use anyhow::Result;
use log::info;
use sched_sim::{Simulation, SimulationReport};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let json = std::env::args().any(|arg| arg == "--json");

    info!("Starting scheduler simulation");
    let mut sim = Simulation::bootstrap();
    sim.run()?;

    let report = SimulationReport::from_simulation(&sim);
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
