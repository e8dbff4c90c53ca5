//! Barrett reduction of 512-bit values modulo a four-limb modulus.

mod barrett;
mod ops;

use crate::integer::{Reciprocal, U256, U512};
use crate::numeric::{add, gte, mul_high, mul_low, sub};

pub use barrett::BarrettModulus256;
pub use ops::*;

/// Calculates `x (mod m)` using the reciprocal `mu` of `m`.
///
/// Variable names follow the Barrett reduction pseudocode of the Handbook of
/// Applied Cryptography (Algorithm 14.42) with `b = 2^64` and `k = 4`.
///
/// # Correctness
///
/// - `m[3] > 1`
/// - `mu == reciprocal(m, _)`
///
/// Violating either yields an unspecified value; nothing is reported.
pub fn reduce(x: &U512, m: &U256, mu: &Reciprocal) -> U256 {
    let x = x.as_limbs();
    let m = m.as_limbs();

    // q1 = x / b^(k-1)
    let q1 = [x[3], x[4], x[5], x[6], x[7]];

    // q2 = q1 * mu, q3 = q2 / b^(k+1)
    //
    // Only columns from k upward are formed; the lowest of them is fractional
    // and dropped.
    let q2: [u64; 6] = mul_high(&q1, mu.as_limbs(), 4);
    let q3 = [q2[1], q2[2], q2[3], q2[4], q2[5]];

    // r1 = x mod b^(k+1)
    let r1 = [x[0], x[1], x[2], x[3], x[4]];

    // r2 = q3 * m mod b^(k+1)
    let r2: [u64; 5] = mul_low(&q3, m);

    // r = r1 - r2 mod b^(k+1); if it borrowed, r += m
    let m = [m[0], m[1], m[2], m[3], 0];
    let (mut r, borrow) = sub(&r1, &r2);
    if borrow {
        r = add(&r, &m).0;
    }

    // The error bound keeps this to at most a couple of rounds.
    while gte(&r, &m) {
        r = sub(&r, &m).0;
    }

    debug_assert_eq!(r[4], 0);
    U256([r[0], r[1], r[2], r[3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIXED_MODULUS;
    use crate::reciprocal::reciprocal;

    #[test]
    fn test_square_minus_one() {
        let m = FIXED_MODULUS;
        let mu = reciprocal(&m, None);

        // m² - 1 = (m - 1)(m + 1), so the residue is m - 1.
        let square = m.widening_mul(&m);
        let mut limbs = *square.as_limbs();
        limbs[0] -= 1;
        let x = U512::from_limbs(limbs);

        let expected = U256::from_limbs([m[0] - 1, m[1], m[2], m[3]]);
        assert_eq!(reduce(&x, &m, &mu), expected);
    }

    #[test]
    fn test_small_values_unchanged() {
        let m = U256::from_limbs([3, 5, 7, 11]);
        let mu = reciprocal(&m, None);

        assert_eq!(reduce(&U512::ZERO, &m, &mu), U256::ZERO);
        let x = U256::from_limbs([2, 5, 7, 11]);
        assert_eq!(reduce(&x.zero_extend(), &m, &mu), x);
        assert_eq!(reduce(&m.zero_extend(), &m, &mu), U256::ZERO);
    }
}
