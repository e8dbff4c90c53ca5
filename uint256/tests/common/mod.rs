#![allow(dead_code)]

use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;
use uint256::{Reciprocal, U256, U512};

pub fn to_big(limbs: &[u64]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &limb| (acc << 64u32) + limb)
}

fn to_limbs<const N: usize>(value: &BigUint) -> [u64; N] {
    let digits = value.to_u64_digits();
    assert!(digits.len() <= N, "value does not fit in {N} limbs");
    let mut limbs = [0u64; N];
    limbs[..digits.len()].copy_from_slice(&digits);
    limbs
}

pub fn u256_from_big(value: &BigUint) -> U256 {
    U256::from_limbs(to_limbs(value))
}

pub fn u512_from_big(value: &BigUint) -> U512 {
    U512::from_limbs(to_limbs(value))
}

pub fn big_u256(value: &U256) -> BigUint {
    to_big(value.as_limbs())
}

pub fn big_reciprocal(value: &Reciprocal) -> BigUint {
    to_big(value.as_limbs())
}

/// A random modulus of exactly `bits` bits that is not a power of two.
pub fn random_modulus<R: Rng>(rng: &mut R, bits: u32) -> U256 {
    assert!((2..=256).contains(&bits));
    let mut limbs: [u64; 4] = rng.gen();
    for (i, limb) in limbs.iter_mut().enumerate() {
        let low = i as u32 * 64;
        if low >= bits {
            *limb = 0;
        } else if bits - low < 64 {
            *limb &= (1u64 << (bits - low)) - 1;
        }
    }
    let top = bits - 1;
    limbs[(top / 64) as usize] |= 1 << (top % 64);
    limbs[0] |= 1;
    U256::from_limbs(limbs)
}

/// A random value below `bound`.
pub fn random_below<R: Rng>(rng: &mut R, bound: &BigUint) -> BigUint {
    let limbs: [u64; 8] = rng.gen();
    to_big(&limbs) % bound
}
