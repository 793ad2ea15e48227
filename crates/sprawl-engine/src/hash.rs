//! Grid hashing for reproducibility checks.
//!
//! FNV-1a over the shape and every category code. Not cryptographic;
//! used to compare runs cheaply.

use sprawl_core::CategoryGrid;

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

/// Hash a category grid.
///
/// The shape is folded in first, so a 2×3 and a 3×2 grid with the same
/// cells hash differently.
pub fn grid_hash(grid: &CategoryGrid) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, grid.rows());
    hash = fnv1a_u32(hash, grid.cols());
    for &category in grid.cells() {
        hash = fnv1a_byte(hash, category.code());
    }
    hash
}
