//! Named parameter sets and field pairs.

use morphogen_core::{FieldPair, SimulationParameters};

/// The 10x10 reference scenario: `Du = 0.916`, `Dv = 0.18`, `F = 0.095`,
/// `K = 0.06`, `dt = 1`, one sub-step per tick.
pub fn scenario_params() -> SimulationParameters {
    SimulationParameters {
        width: 10,
        height: 10,
        du: 0.916,
        dv: 0.18,
        feed: 0.095,
        kill: 0.06,
        dt: 1.0,
        substeps_per_tick: 1,
    }
}

/// Default kinetics on a `width x height` grid.
pub fn params_sized(width: u32, height: u32) -> SimulationParameters {
    SimulationParameters {
        width,
        height,
        ..SimulationParameters::default()
    }
}

/// Background pair with a single cell set to `(u, v)`.
pub fn impulse_pair(width: u32, height: u32, x: i64, y: i64, u: f32, v: f32) -> FieldPair {
    let mut pair = FieldPair::background(width, height).expect("valid test grid");
    let (fu, fv) = pair.split_mut();
    fu.set(x, y, u);
    fv.set(x, y, v);
    pair
}

/// Background pair with every cell within `radius` of `(cx, cy)` set to
/// `(u, v)`, wrapping at the edges.
pub fn disc_pair(
    width: u32,
    height: u32,
    cx: i64,
    cy: i64,
    radius: i64,
    u: f32,
    v: f32,
) -> FieldPair {
    let mut pair = FieldPair::background(width, height).expect("valid test grid");
    let (fu, fv) = pair.split_mut();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                fu.set(cx + dx, cy + dy, u);
                fv.set(cx + dx, cy + dy, v);
            }
        }
    }
    pair
}
