//! Hashing utilities for snapshot comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of field state. These
//! hashes are not cryptographically secure. They exist for cheap
//! equality checks in determinism tests and golden runs.

use morphogen_core::{Field, FieldPair};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash one field: its dimensions, then every `f32::to_bits()` in
/// row-major order.
pub fn field_hash(field: &Field) -> u64 {
    fold_field(FNV_OFFSET, field)
}

fn fold_field(mut hash: u64, field: &Field) -> u64 {
    hash = fnv1a_u32(hash, field.width());
    hash = fnv1a_u32(hash, field.height());
    for &v in field.as_slice() {
        hash = fnv1a_u32(hash, v.to_bits());
    }
    hash
}

/// Hash both species, U then V. The species index is folded in at each
/// boundary so swapping U and V changes the hash.
pub fn pair_hash(pair: &FieldPair) -> u64 {
    let mut hash = FNV_OFFSET;
    for (index, field) in [pair.u(), pair.v()].into_iter().enumerate() {
        hash = fnv1a_u32(hash, index as u32);
        hash = fold_field(hash, field);
    }
    hash
}
