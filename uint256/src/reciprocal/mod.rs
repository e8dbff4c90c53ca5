//! Fixed-point reciprocal of a 256-bit modulus.
//!
//! The modulus is left-aligned into `y ∈ [2^255, 2^256)`, a 32-bit estimate
//! of `1/y` is taken from a hardware division and then refined by four
//! Newton-Raphson steps `r' = 2r - y·r²`, each doubling the precision
//! (32 → 64 → 128 → 192 → 320 bits). A final full-precision check makes sure
//! the estimate never exceeds `1/y`, and the result is shifted back to the
//! scale of the input modulus.
//!
//! For a modulus with a nonzero top limb the output approximates
//! `2^512 / m` from below, which is the `µ` consumed by [`crate::reduce`].

mod cache;
mod pinned;

use crate::integer::{Bits, Reciprocal, U256};
use crate::numeric::{decrement, double, is_zero, mul_high, mul_wide, shr, sub, WideningMul};

pub use cache::ReciprocalCache;
pub use pinned::{init_pinned, pinned};

/// Computes the 320-bit reciprocal of `m`.
///
/// - `reciprocal(0) = 0`
/// - `reciprocal(1) = 2^320 - 1`
/// - powers of two take a direct formula and never touch the cache
/// - otherwise `cache` is consulted first and filled on a miss
///
/// # Correctness
///
/// The result is a usable Barrett reciprocal only when the top limb of `m`
/// is nonzero. Other inputs still produce a value but it carries no
/// guarantee.
pub fn reciprocal(m: &U256, cache: Option<&ReciprocalCache>) -> Reciprocal {
    let s = m.leading_zeros();

    if m.count_ones() <= 1 {
        return power_of_two_reciprocal(m, s);
    }

    if let Some(mu) = cache.and_then(|cache| cache.lookup(m)) {
        return mu;
    }

    // Maximise division precision by left-aligning the divisor.
    let y = *m << s;
    let mu = realign(newton_raphson(y.as_limbs()), 255 - s);

    if let Some(cache) = cache {
        cache.insert(m, mu);
    }

    mu
}

/// Zero, one and exact powers of two.
fn power_of_two_reciprocal(m: &U256, s: u32) -> Reciprocal {
    if s >= 255 {
        // 0 -> 0, 1 -> 2^320 - 1
        Reciprocal([m.limb(0).wrapping_neg(); 5])
    } else {
        let p = 255 - s;
        let mut limbs = [u64::MAX; 5];
        limbs[4] = u64::MAX >> (p % 64);
        Reciprocal(limbs)
    }
}

/// Replaces an all-zero estimate by all-ones when `y` sits at `2^255` in its
/// top limb, where the true value `2^k` wrapped around to zero.
#[inline]
fn saturate<const N: usize>(r: [u64; N], y_top: u64) -> [u64; N] {
    if is_zero(&r) && (y_top << 1) == 0 {
        [u64::MAX; N]
    } else {
        r
    }
}

/// 32-bit seed, `floor(2^63 / yh)` for the top 32 bits `yh` of `y`.
#[inline]
fn seed(yh: u32) -> u64 {
    if yh == 0x8000_0000 {
        // 2^32 does not fit.
        u32::MAX as u64
    } else {
        (1u64 << 63) / yh as u64
    }
}

/// Refines `1/y` for a left-aligned `y` and returns a 320-bit estimate of
/// `2^574 / y`, never above the exact value.
fn newton_raphson(y: &[u64; 4]) -> [u64; 5] {
    // 32 -> 64
    let r0 = seed((y[3] >> 32) as u32);
    let (_, t1) = WideningMul::widening_mul(r0 * r0, y[3]);
    let [r1] = saturate([((r0 << 32).wrapping_sub(t1)) << 1], y[3]);

    // 64 -> 128
    let a2: [u64; 2] = mul_wide(&[r1], &[r1]);
    let e2: [u64; 4] = mul_wide(&a2, &[y[2], y[3]]);
    let (t2, _) = sub(&[0, r1], &[e2[2], e2[3]]);
    let r2 = saturate(double(&t2), y[3]);

    // 128 -> 192
    let a3: [u64; 4] = mul_wide(&r2, &r2);
    let q3: [u64; 5] = mul_high(&a3, y, 3);
    let (t3, _) = sub(&[0, 0, 0, r2[0], r2[1]], &q3);
    let r3 = saturate(double(&[t3[2], t3[3], t3[4]]), y[3]);

    // 192 -> 320, landing on 1/4y
    let a4: [u64; 6] = mul_wide(&r3, &r3);
    let q4: [u64; 7] = mul_high(&a4, y, 3);
    let (t4, _) = sub(&[0, 0, 0, 0, r3[0], r3[1], r3[2]], &q4);
    let r4 = [t4[2], t4[3], t4[4], t4[5], t4[6]];

    // r4·y must not exceed 1/4, i.e. 2^62 in the top limb of nine.
    let check: [u64; 9] = mul_wide(&r4, y);
    let mut quarter = [0u64; 9];
    quarter[8] = 1 << 62;
    let (_, over) = sub(&quarter, &check);

    if over {
        decrement(&r4)
    } else {
        r4
    }
}

/// Moves `2^574 / y` to the scale of the input modulus, whose highest set
/// bit is `p`, truncating excess bits.
fn realign(mu: [u64; 5], p: u32) -> Reciprocal {
    let limbs = match (p % 64) as i32 - 1 {
        -1 => double(&mu),
        0 => mu,
        shift => shr(&mu, shift as u32),
    };
    Reciprocal(limbs)
}
