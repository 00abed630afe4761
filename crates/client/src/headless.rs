use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use cannonbattle::{InputEvents, SimulationLoop};

/// Plays without a terminal UI: fires once per second of simulated time and
/// logs what happens. Paced in real time so target relocation still runs.
pub fn run(sim: &mut SimulationLoop, ticks: u32) -> Result<()> {
    let tick_rate = sim.timestep().tick_rate();
    let dt = sim.timestep().dt();
    let frame = Duration::from_secs_f64(dt);

    for tick in 0..ticks {
        let input = if tick % tick_rate == 0 {
            InputEvents::FIRE
        } else {
            InputEvents::empty()
        };

        let report = sim.update(dt, Instant::now(), input)?;
        for event in report.events.iter().filter(|e| !e.is_hit()) {
            log::info!("{}", event.describe());
        }

        if tick % tick_rate == 0 {
            let target = sim.game().target().borrow();
            let launcher = sim.game().launcher().borrow();
            log::debug!(
                "tick {}: {} shots in flight, target {}/{} at x={:.0}",
                tick,
                launcher.projectiles().len(),
                target.hitpoints().current,
                target.hitpoints().max,
                target.position().x
            );
        }

        thread::sleep(frame);
    }

    let target = sim.game().target().borrow();
    log::info!(
        "Finished {} ticks, target at {}/{} hitpoints",
        ticks,
        target.hitpoints().current,
        target.hitpoints().max
    );
    Ok(())
}
