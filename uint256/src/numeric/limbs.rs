//! Fixed-width operations over little-endian arrays of 64-bit limbs.
//!
//! `limbs[0]` is the least significant limb. Every function works on stack
//! arrays whose lengths are known at compile time, so the loops unroll into
//! straight-line carry chains.

use super::{BorrowingSub, CarryingAdd, CarryingMul, WideningMul};

/// Adds `value` into `acc` at limb position `index`, rippling the carry
/// upward. A carry out of the most significant limb is dropped.
#[inline(always)]
fn add_at(acc: &mut [u64], mut index: usize, value: u64) {
    let (sum, mut carry) = CarryingAdd::carrying_add(acc[index], value, false);
    acc[index] = sum;
    while carry {
        index += 1;
        if index == acc.len() {
            break;
        }
        (acc[index], carry) = CarryingAdd::carrying_add(acc[index], 0, true);
    }
}

/// Full schoolbook product `a * b`.
///
/// `K` must equal `N + M`.
#[inline]
pub fn mul_wide<const N: usize, const M: usize, const K: usize>(
    a: &[u64; N],
    b: &[u64; M],
) -> [u64; K] {
    debug_assert_eq!(K, N + M);
    let mut out = [0u64; K];
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let (lo, hi) = CarryingMul::carrying_mul(ai, bj, carry);
            let (sum, c) = CarryingAdd::carrying_add(out[i + j], lo, false);
            out[i + j] = sum;
            carry = hi + c as u64;
        }
        out[i + M] = carry;
    }
    out
}

/// Upper limbs of `a * b`, starting at limb `from`.
///
/// Partial products landing wholly below limb `from - 1` are skipped, as is
/// the low half of every product in column `from - 1`. Only the carry out of
/// the skipped columns is lost, so the result is at most a few units below
/// `floor(a * b / 2^(64 * from))` in its least significant limb.
///
/// `K` must equal `N + M - from`.
#[inline]
pub fn mul_high<const N: usize, const M: usize, const K: usize>(
    a: &[u64; N],
    b: &[u64; M],
    from: usize,
) -> [u64; K] {
    debug_assert!(from >= 1);
    debug_assert_eq!(K, N + M - from);
    let mut out = [0u64; K];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            let col = i + j;
            if col + 1 < from {
                continue;
            }
            let (lo, hi) = WideningMul::widening_mul(ai, bj);
            if col >= from {
                add_at(&mut out, col - from, lo);
            }
            add_at(&mut out, col + 1 - from, hi);
        }
    }
    out
}

/// Lowest `K` limbs of `a * b`, i.e. the product modulo `2^(64 * K)`.
#[inline]
pub fn mul_low<const N: usize, const M: usize, const K: usize>(
    a: &[u64; N],
    b: &[u64; M],
) -> [u64; K] {
    let mut out = [0u64; K];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            let col = i + j;
            if col >= K {
                continue;
            }
            let (lo, hi) = WideningMul::widening_mul(ai, bj);
            add_at(&mut out, col, lo);
            if col + 1 < K {
                add_at(&mut out, col + 1, hi);
            }
        }
    }
    out
}

/// Carry-chained `a + b`, returning the wrapped sum and the carry-out.
#[inline]
pub fn add<const N: usize>(a: &[u64; N], b: &[u64; N]) -> ([u64; N], bool) {
    let mut out = [0u64; N];
    let mut carry = false;
    for i in 0..N {
        (out[i], carry) = CarryingAdd::carrying_add(a[i], b[i], carry);
    }
    (out, carry)
}

/// Borrow-chained `a - b`, returning the wrapped difference and the borrow-out.
#[inline]
pub fn sub<const N: usize>(a: &[u64; N], b: &[u64; N]) -> ([u64; N], bool) {
    let mut out = [0u64; N];
    let mut borrow = false;
    for i in 0..N {
        (out[i], borrow) = BorrowingSub::borrowing_sub(a[i], b[i], borrow);
    }
    (out, borrow)
}

/// `a - 1`, wrapping at zero.
#[inline]
pub fn decrement<const N: usize>(a: &[u64; N]) -> [u64; N] {
    let mut out = *a;
    let mut borrow = true;
    for limb in out.iter_mut() {
        if !borrow {
            break;
        }
        (*limb, borrow) = BorrowingSub::borrowing_sub(*limb, 0, true);
    }
    out
}

/// `2 * a`, dropping the bit shifted out of the top limb.
#[inline]
pub fn double<const N: usize>(a: &[u64; N]) -> [u64; N] {
    add(a, a).0
}

/// Logical right shift by `shift` bits, `0 < shift < 64`, pulling bits
/// across limb boundaries.
#[inline]
pub fn shr<const N: usize>(a: &[u64; N], shift: u32) -> [u64; N] {
    debug_assert!(shift > 0 && shift < 64);
    let mut out = [0u64; N];
    for i in 0..N {
        out[i] = a[i] >> shift;
        if i + 1 < N {
            out[i] |= a[i + 1] << (64 - shift);
        }
    }
    out
}

/// Returns `true` if `a >= b`.
#[inline]
pub fn gte<const N: usize>(a: &[u64; N], b: &[u64; N]) -> bool {
    for i in (0..N).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

/// Returns `true` if every limb is zero.
#[inline]
pub fn is_zero<const N: usize>(a: &[u64; N]) -> bool {
    a.iter().all(|&limb| limb == 0)
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    #[test]
    fn test_mul_wide_max() {
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        let a = [u64::MAX; 2];
        let p: [u64; 4] = mul_wide(&a, &a);
        assert_eq!(p, [1, 0, u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn test_mul_high_matches_wide() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let a: [u64; 5] = rng.gen();
            let b: [u64; 4] = rng.gen();
            let full: [u64; 9] = mul_wide(&a, &b);
            let high: [u64; 6] = mul_high(&a, &b, 3);

            // The skipped columns can only push the true value upward, and
            // by less than one unit of limb `from + 1`.
            let exact: [u64; 6] = full[3..].try_into().unwrap();
            assert!(gte(&exact, &high));
            let carried = add(&high, &[0, 1, 0, 0, 0, 0]).0;
            assert!(exact[1..] == high[1..] || exact[1..] == carried[1..]);
        }
    }

    #[test]
    fn test_mul_low_matches_wide() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let a: [u64; 5] = rng.gen();
            let b: [u64; 4] = rng.gen();
            let full: [u64; 9] = mul_wide(&a, &b);
            let low: [u64; 5] = mul_low(&a, &b);
            assert_eq!(low[..], full[..5]);
        }
    }

    #[test]
    fn test_add_sub() {
        let (s, carry) = add(&[u64::MAX, u64::MAX, 0], &[1, 0, 0]);
        assert_eq!((s, carry), ([0, 0, 1], false));

        let (d, borrow) = sub(&[0, 0, 1], &[1, 0, 0]);
        assert_eq!((d, borrow), ([u64::MAX, u64::MAX, 0], false));

        let (d, borrow) = sub(&[0, 0], &[1, 0]);
        assert_eq!((d, borrow), ([u64::MAX, u64::MAX], true));

        assert_eq!(decrement(&[0, 0, 5]), [u64::MAX, u64::MAX, 4]);
        assert_eq!(decrement(&[7, 1]), [6, 1]);
    }

    #[test]
    fn test_shift() {
        assert_eq!(double(&[1 << 63, 1 << 63]), [0, 1]);
        assert_eq!(shr(&[0, 1, 1 << 63], 1), [1 << 63, 0, 1 << 62]);
        assert_eq!(shr(&[u64::MAX; 3], 63), [u64::MAX, u64::MAX, 1]);
    }

    #[test]
    fn test_compare() {
        assert!(gte(&[0, 1], &[u64::MAX, 0]));
        assert!(gte(&[3, 3], &[3, 3]));
        assert!(!gte(&[2, 3], &[3, 3]));
        assert!(is_zero(&[0u64; 5]));
        assert!(!is_zero(&[0, 0, 1]));
    }
}
