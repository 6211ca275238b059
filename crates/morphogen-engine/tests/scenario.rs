//! Integration tests: the 10x10 reference scenario, construction
//! failures, and golden-file encoding of a run.

use morphogen_core::ParamError;
use morphogen_engine::{
    decode_field, encode_field, BlobPlacement, ConfigError, SeedConfig, SimConfig, Simulation,
};
use morphogen_test_utils::fixtures::{disc_pair, params_sized, scenario_params};
use morphogen_test_utils::{assert_bit_identical, assert_bounded, background_cells};

fn one_blob_config(seed: u64) -> SimConfig {
    SimConfig {
        params: scenario_params(),
        seeding: SeedConfig {
            placement: BlobPlacement::Fixed(vec![(5, 5)]),
            radius: 2,
            ..SeedConfig::default()
        },
        seed,
    }
}

// ── Reference scenario ──────────────────────────────────────────────

#[test]
fn opposite_corner_stays_background_after_one_advance() {
    let mut sim = Simulation::new(one_blob_config(0)).unwrap();

    let before = sim.snapshot();
    // 13 lattice points within radius 2, the rest untouched.
    assert_eq!(background_cells(before.pair()), 100 - 13);
    assert_eq!(before.u().get(0, 0), 1.0);
    assert_eq!(before.v().get(0, 0), 0.0);

    sim.advance(1);
    let after = sim.snapshot();
    assert_eq!(after.generation(), 1);
    assert_eq!(after.u().get(0, 0), 1.0);
    assert_eq!(after.v().get(0, 0), 0.0);
    assert_eq!(after.display_value(0, 0), 1.0);
    assert_bounded(after.pair());
}

#[test]
fn blob_centre_reacts() {
    let mut sim = Simulation::new(one_blob_config(3)).unwrap();
    let v_before = sim.snapshot().v().get(5, 5);
    assert!((0.25..=0.75).contains(&v_before));
    sim.tick();
    let snap = sim.snapshot();
    assert_ne!(snap.v().get(5, 5), v_before);
    assert!(snap.v().get(5, 5) > 0.0);
}

#[test]
fn deterministic_disc_matches_injected_fields() {
    // A radius-2 disc at (5, 5) with constant magnitudes, built by hand
    // and by the seeder with degenerate ranges.
    let config = SimConfig {
        seeding: SeedConfig {
            u_range: (0.5, 0.5),
            v_range: (0.25, 0.25),
            ..one_blob_config(0).seeding
        },
        ..one_blob_config(0)
    };
    let mut seeded = Simulation::new(config).unwrap();
    let mut injected =
        Simulation::from_fields(scenario_params(), disc_pair(10, 10, 5, 5, 2, 0.5, 0.25)).unwrap();
    assert_bit_identical(seeded.snapshot().pair(), injected.snapshot().pair());

    seeded.advance(5);
    injected.advance(5);
    assert_bit_identical(seeded.snapshot().pair(), injected.snapshot().pair());
}

// ── Construction failures ───────────────────────────────────────────

#[test]
fn invalid_configs_are_rejected() {
    let mut zero_width = one_blob_config(0);
    zero_width.params.width = 0;
    assert!(matches!(
        Simulation::new(zero_width),
        Err(ConfigError::Params(ParamError::InvalidDimension { name: "width", .. }))
    ));

    let mut bad_dt = one_blob_config(0);
    bad_dt.params.dt = -1.0;
    assert!(matches!(
        Simulation::new(bad_dt),
        Err(ConfigError::Params(ParamError::NonPositive { name: "dt", .. }))
    ));

    let mut nan_du = one_blob_config(0);
    nan_du.params.du = f32::NAN;
    assert!(matches!(
        Simulation::new(nan_du),
        Err(ConfigError::Params(ParamError::NonPositive { name: "du", .. }))
    ));

    let mut no_substeps = one_blob_config(0);
    no_substeps.params.substeps_per_tick = 0;
    assert!(matches!(
        Simulation::new(no_substeps),
        Err(ConfigError::Params(ParamError::ZeroSubsteps))
    ));

    let mut huge_radius = one_blob_config(0);
    huge_radius.seeding.radius = 11;
    assert!(matches!(
        Simulation::new(huge_radius),
        Err(ConfigError::BlobRadiusTooLarge { radius: 11, max: 10 })
    ));

    let mut bad_range = one_blob_config(0);
    bad_range.seeding.v_range = (0.8, 0.2);
    assert!(matches!(
        Simulation::new(bad_range),
        Err(ConfigError::InvalidSeedRange { name: "v_range", .. })
    ));
}

#[test]
fn tiny_injected_grids_construct_and_advance() {
    for (w, h) in [(1u32, 1u32), (3, 3)] {
        let params = params_sized(w, h);
        let pair = disc_pair(w, h, 1, 1, 0, 0.5, 0.25);
        let mut sim = Simulation::from_fields(params, pair).unwrap();
        sim.advance(3);
        assert_eq!(sim.generation(), 3);
        assert_bounded(sim.snapshot().pair());

        sim.reseed(1);
        assert_eq!(background_cells(sim.snapshot().pair()), (w * h) as usize);
    }
}

#[test]
fn extreme_fixed_centre_wraps_instead_of_failing() {
    let mut config = one_blob_config(0);
    config.seeding.placement = BlobPlacement::Fixed(vec![(i64::MAX, i64::MIN)]);
    let sim = Simulation::new(config).unwrap();
    // i64::MAX = 7 (mod 10) and i64::MIN = 2 (mod 10).
    assert!(sim.snapshot().v().get(7, 2) >= 0.25);
    assert_eq!(background_cells(sim.snapshot().pair()), 100 - 13);
}

// ── Golden encoding ─────────────────────────────────────────────────

#[test]
fn encoded_run_restores_and_continues_identically() {
    let mut sim = Simulation::new(one_blob_config(11)).unwrap();
    sim.advance(4);

    let snap = sim.snapshot();
    let u_bytes = encode_field(snap.u());
    let v_bytes = encode_field(snap.v());
    assert_eq!(u_bytes.len(), 10 * 10 * 4);

    let restored = morphogen_core::FieldPair::new(
        decode_field(10, 10, &u_bytes).unwrap(),
        decode_field(10, 10, &v_bytes).unwrap(),
    )
    .unwrap();
    assert_bit_identical(&restored, snap.pair());

    let mut resumed = Simulation::from_fields(scenario_params(), restored).unwrap();
    sim.advance(6);
    resumed.advance(6);
    assert_bit_identical(sim.snapshot().pair(), resumed.snapshot().pair());
}
