//! Integration tests: whole-simulation invariants.
//!
//! Boundedness, the exact background fixed point, toroidal wrap,
//! determinism under a fixed seed, and sub-step composition.

use morphogen_core::SimulationParameters;
use morphogen_engine::{BlobPlacement, SeedConfig, SimConfig, Simulation};
use morphogen_test_utils::fixtures::{impulse_pair, params_sized};
use morphogen_test_utils::{assert_bit_identical, assert_bounded, background_cells};
use proptest::prelude::*;

fn seeded(width: u32, height: u32, blobs: usize, radius: u32, seed: u64) -> SimConfig {
    SimConfig {
        params: params_sized(width, height),
        seeding: SeedConfig {
            placement: BlobPlacement::Random { count: blobs },
            radius,
            ..SeedConfig::default()
        },
        seed,
    }
}

// ── Boundedness ─────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn fields_stay_in_unit_interval(
        width in 1u32..24,
        height in 1u32..24,
        du in 0.01f32..1.5,
        dv in 0.01f32..1.5,
        feed in 0.001f32..0.2,
        kill in 0.001f32..0.2,
        dt in 0.05f32..3.0,
        blobs in 0usize..6,
        radius in 0u32..4,
        seed in any::<u64>(),
        substeps in 1u32..40,
    ) {
        let config = SimConfig {
            params: SimulationParameters {
                width,
                height,
                du,
                dv,
                feed,
                kill,
                dt,
                substeps_per_tick: 1,
            },
            seeding: SeedConfig {
                placement: BlobPlacement::Random { count: blobs },
                radius: radius.min(width.max(height)),
                ..SeedConfig::default()
            },
            seed,
        };
        let mut sim = Simulation::new(config).unwrap();
        assert_bounded(sim.snapshot().pair());
        for _ in 0..substeps {
            sim.advance(1);
            prop_assert!(sim.snapshot().pair().is_bounded());
        }
    }
}

// ── Fixed point ─────────────────────────────────────────────────────

#[test]
fn pure_background_never_changes() {
    let config = SimConfig {
        params: params_sized(32, 24),
        seeding: SeedConfig::background_only(),
        seed: 7,
    };
    let mut sim = Simulation::new(config).unwrap();
    sim.advance(200);
    let snap = sim.snapshot();
    assert_eq!(background_cells(snap.pair()), 32 * 24);
    assert!(snap.u().as_slice().iter().all(|&u| u == 1.0));
    assert!(snap.v().as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn background_fixed_point_holds_for_any_kinetics() {
    let params = SimulationParameters {
        width: 9,
        height: 5,
        du: 0.3,
        dv: 1.7,
        feed: 0.5,
        kill: 0.9,
        dt: 2.5,
        substeps_per_tick: 3,
    };
    let mut sim = Simulation::from_fields(
        params,
        morphogen_core::FieldPair::background(9, 5).unwrap(),
    )
    .unwrap();
    for _ in 0..20 {
        sim.tick();
    }
    assert_eq!(background_cells(sim.snapshot().pair()), 45);
}

// ── Torus wrap ──────────────────────────────────────────────────────

#[test]
fn impulse_at_origin_reaches_opposite_edges() {
    let (w, h) = (7u32, 5u32);
    let pair = impulse_pair(w, h, 0, 0, 0.4, 0.6);
    let mut sim = Simulation::from_fields(params_sized(w, h), pair).unwrap();
    sim.advance(1);
    let snap = sim.snapshot();
    let (lx, ly) = (i64::from(w) - 1, i64::from(h) - 1);

    // Each wrapped neighbour sees the impulse exactly as its mirror
    // image on the interior side does.
    for ((ax, ay), (bx, by)) in [
        ((lx, 0), (1, 0)),
        ((0, ly), (0, 1)),
        ((lx, ly), (1, 1)),
        ((1, ly), (1, 1)),
        ((lx, 1), (1, 1)),
    ] {
        assert_eq!(
            snap.u().get(ax, ay).to_bits(),
            snap.u().get(bx, by).to_bits(),
            "U at ({ax},{ay}) vs ({bx},{by})"
        );
        assert_eq!(
            snap.v().get(ax, ay).to_bits(),
            snap.v().get(bx, by).to_bits(),
            "V at ({ax},{ay}) vs ({bx},{by})"
        );
        assert!(snap.v().get(ax, ay) > 0.0, "V at ({ax},{ay}) untouched");
    }

    // Cells two or more steps away are still background.
    assert_eq!(snap.u().get(3, 2), 1.0);
    assert_eq!(snap.v().get(3, 2), 0.0);
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn same_seed_same_run() {
    let mut a = Simulation::new(seeded(40, 30, 5, 4, 1234)).unwrap();
    let mut b = Simulation::new(seeded(40, 30, 5, 4, 1234)).unwrap();
    assert_bit_identical(a.snapshot().pair(), b.snapshot().pair());
    for _ in 0..5 {
        a.tick();
        b.tick();
        assert_bit_identical(a.snapshot().pair(), b.snapshot().pair());
        assert_eq!(a.snapshot().hash(), b.snapshot().hash());
    }
}

#[test]
fn different_seeds_diverge() {
    let a = Simulation::new(seeded(40, 30, 5, 4, 1)).unwrap();
    let b = Simulation::new(seeded(40, 30, 5, 4, 2)).unwrap();
    assert_ne!(a.snapshot().hash(), b.snapshot().hash());
}

#[test]
fn reseed_replays_identically() {
    let mut sim = Simulation::new(seeded(24, 24, 3, 3, 99)).unwrap();
    sim.advance(25);
    let first = sim.snapshot().to_owned_snapshot();

    sim.reseed(99);
    sim.advance(25);
    assert_eq!(sim.snapshot().generation(), first.generation());
    assert_bit_identical(sim.snapshot().pair(), first.as_snapshot().pair());
}

// ── Sub-step composition ────────────────────────────────────────────

#[test]
fn advance_n_equals_n_single_advances() {
    let mut batched = Simulation::new(seeded(33, 17, 4, 3, 55)).unwrap();
    let mut single = Simulation::new(seeded(33, 17, 4, 3, 55)).unwrap();

    batched.advance(23);
    for _ in 0..23 {
        single.advance(1);
    }
    assert_eq!(batched.generation(), 23);
    assert_eq!(single.generation(), 23);
    assert_bit_identical(batched.snapshot().pair(), single.snapshot().pair());
}

#[test]
fn tick_equals_advance_substeps_per_tick() {
    let mut ticked = Simulation::new(seeded(20, 20, 2, 3, 8)).unwrap();
    let mut advanced = Simulation::new(seeded(20, 20, 2, 3, 8)).unwrap();
    let n = ticked.params().substeps_per_tick;
    ticked.tick();
    ticked.tick();
    advanced.advance(2 * n);
    assert_bit_identical(ticked.snapshot().pair(), advanced.snapshot().pair());
}
