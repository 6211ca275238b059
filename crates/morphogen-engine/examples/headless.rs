//! Headless Gray-Scott run: seed, tick, report.
//!
//! Demonstrates:
//!   1. Building a `SimConfig` and validating it through `Simulation::new`
//!   2. Driving the simulation tick by tick and reading `StepMetrics`
//!   3. Reading a snapshot: value ranges, display values, and the state hash
//!
//! Run with:
//!   cargo run --example headless

use morphogen_engine::{BlobPlacement, SeedConfig, SimConfig, Simulation};

// ─── Run parameters ─────────────────────────────────────────────

const SIZE: u32 = 96;
const TICKS: u32 = 200;
const REPORT_EVERY: u32 = 50;

// ASCII ramp from background (display value 1) to spot (0).
const RAMP: &[u8] = b"@%#*+=-:. ";

fn main() {
    let mut config = SimConfig::default();
    config.params.width = SIZE;
    config.params.height = SIZE;
    config.seeding = SeedConfig {
        placement: BlobPlacement::Random { count: 6 },
        radius: 5,
        ..SeedConfig::default()
    };
    config.seed = 42;

    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "{}x{} grid, {} sub-steps per tick, dt = {} (stability bound {:.3})",
        SIZE,
        SIZE,
        sim.params().substeps_per_tick,
        sim.params().dt,
        sim.stepper().max_stable_dt(),
    );

    // ─── Tick loop ──────────────────────────────────────────────

    for tick in 1..=TICKS {
        let metrics = sim.tick();
        if tick % REPORT_EVERY == 0 {
            let snap = sim.snapshot();
            let (v_min, v_max) = snap.v().min_max();
            println!(
                "tick {tick:>4}  gen {:>6}  {:>6} us  (slowest sub-step {:>5} us)  V in [{v_min:.3}, {v_max:.3}]  hash {:016x}",
                metrics.generation,
                metrics.total_us,
                metrics.slowest_substep_us,
                snap.hash(),
            );
        }
    }

    // ─── Render ─────────────────────────────────────────────────

    let snap = sim.snapshot();
    for y in (0..i64::from(SIZE)).step_by(4) {
        let line: String = (0..i64::from(SIZE))
            .step_by(2)
            .map(|x| {
                let d = snap.display_value(x, y);
                let i = (d * (RAMP.len() - 1) as f32).round() as usize;
                RAMP[RAMP.len() - 1 - i.min(RAMP.len() - 1)] as char
            })
            .collect();
        println!("{line}");
    }
}
