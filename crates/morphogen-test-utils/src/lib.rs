//! Test fixtures and assertions for Morphogen development.
//!
//! Parameter sets and hand-built field pairs shared by the integration
//! tests and benches. See [`fixtures`] for the named scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use morphogen_core::{Field, FieldPair};

/// Panic with the offending cell if any value in `pair` is non-finite or
/// outside `[0, 1]`.
pub fn assert_bounded(pair: &FieldPair) {
    for (name, field) in [("U", pair.u()), ("V", pair.v())] {
        for (i, &v) in field.as_slice().iter().enumerate() {
            assert!(
                v.is_finite() && (0.0..=1.0).contains(&v),
                "{name}[{i}] = {v} is outside [0, 1]"
            );
        }
    }
}

/// Bit patterns of every cell, for exact comparison that treats `-0.0`
/// and `0.0` as different.
pub fn bits(field: &Field) -> Vec<u32> {
    field.as_slice().iter().map(|v| v.to_bits()).collect()
}

/// Assert two pairs are bit-identical, reporting the first differing cell.
pub fn assert_bit_identical(a: &FieldPair, b: &FieldPair) {
    assert_eq!(
        (a.width(), a.height()),
        (b.width(), b.height()),
        "shape differs"
    );
    for (name, fa, fb) in [("U", a.u(), b.u()), ("V", a.v(), b.v())] {
        let (ba, bb) = (bits(fa), bits(fb));
        if let Some(i) = ba.iter().zip(&bb).position(|(x, y)| x != y) {
            panic!(
                "{name}[{i}] differs: {} vs {}",
                f32::from_bits(ba[i]),
                f32::from_bits(bb[i])
            );
        }
    }
}

/// Count cells whose U and V both equal the background state exactly.
pub fn background_cells(pair: &FieldPair) -> usize {
    pair.u()
        .as_slice()
        .iter()
        .zip(pair.v().as_slice())
        .filter(|&(&u, &v)| u == 1.0 && v == 0.0)
        .count()
}
