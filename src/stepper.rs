// 64-bit LCG with prime modulus m = 2^64 - 59. Multiplier from P. L'Ecuyer,
// "Tables of linear congruential generators of different sizes and good
// lattice structure" (1999).
// https://en.wikipedia.org/wiki/Linear_congruential_generator

/// Multiplier, `0 <= A < M`.
pub const A: u64 = 13891176665706064842;

/// Modulus, 2^64 - 59 (prime).
pub const M: u64 = 18446744073709551557;

// 2^64 - M. The folding step and the correction bounds below are derived for
// this exact value; changing A or M means re-deriving them, not reusing these.
const GAP: u64 = 59;

// Ceiling on final correction passes. After the bulk pre-correction at most
// two subtractions of M remain; hitting the ceiling means the k <= 58 bound
// no longer holds for the chosen constants.
const MAX_FIXUPS: u32 = 3;

/// Exact 128-bit product of two 64-bit operands as a (hi, lo) pair.
const fn mul_wide(a: u64, x: u64) -> (u64, u64) {
    let p = a as u128 * x as u128;
    ((p >> 64) as u64, p as u64)
}

/// `(a * x) mod M` by unrestricted-precision multiply-then-modulo.
/// Oracle for `fast_step`.
pub const fn reference_step(a: u64, x: u64) -> u64 {
    assert!(x < M);
    (a as u128 * x as u128 % M as u128) as u64
}

/// `(a * x) mod M` without a 128-bit modulo: one wide multiply, then only
/// additive corrections.
pub const fn fast_step(a: u64, x: u64) -> u64 {
    fast_step_counted(a, x).0
}

const fn fast_step_counted(a: u64, x: u64) -> (u64, u32) {
    assert!(x < M);
    let (hi, lo) = mul_wide(a, x);

    // 2^64 ≡ GAP (mod M), so hi*2^64 + lo ≡ GAP*hi + lo. Both halves are at
    // most 2^64 - 1, hence r < 60 * 2^64 and r >> 64 <= 59.
    let mut r = lo as u128 + GAP as u128 * hi as u128;

    // Remove the bulk of the excess in one shot, leaving r < 2^65 + GAP^2.
    let k = r >> 64;
    if k > 1 {
        r -= (k - 1) * M as u128;
    }

    let mut fixups = 0;
    while r >= M as u128 {
        r -= M as u128;
        fixups += 1;
        assert!(
            fixups <= MAX_FIXUPS,
            "correction loop exceeded its pass ceiling: the pre-correction bound does not hold"
        );
    }
    (r as u64, fixups)
}
