//! Fixed-width unsigned integer types.
//!
//! All types store 64-bit limbs least-significant first and carry no hidden
//! normalization: the all-zero value is zero.

mod bits;

use std::cmp::Ordering;
use std::fmt::{self, Display, LowerHex};
use std::ops::{Index, Shl};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::Uint256Error;
use crate::numeric::{is_zero, mul_wide};

pub use bits::Bits;

/// Writes limbs as big-endian hex without leading zeros.
fn write_hex(f: &mut fmt::Formatter<'_>, limbs: &[u64], prefix: bool) -> fmt::Result {
    if prefix {
        f.write_str("0x")?;
    }
    let mut rest = limbs.iter().rev().skip_while(|&&limb| limb == 0);
    match rest.next() {
        None => f.write_str("0"),
        Some(top) => {
            write!(f, "{top:x}")?;
            rest.try_for_each(|limb| write!(f, "{limb:016x}"))
        }
    }
}

/// A 256-bit unsigned integer, four 64-bit limbs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct U256(pub(crate) [u64; 4]);

impl U256 {
    /// The value `0`.
    pub const ZERO: Self = Self([0; 4]);

    /// The value `1`.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// The value `2^256 - 1`.
    pub const MAX: Self = Self([u64::MAX; 4]);

    /// Creates a value from limbs, least significant first.
    #[inline]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }

    /// Returns the limbs, least significant first.
    #[inline]
    pub const fn as_limbs(&self) -> &[u64; 4] {
        &self.0
    }

    /// Returns limb `i`, where limb 0 is the least significant.
    #[inline]
    pub const fn limb(&self, i: usize) -> u64 {
        self.0[i]
    }

    /// Returns `true` if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero(&self.0)
    }

    /// Widens `self` to 512 bits.
    #[inline]
    pub const fn zero_extend(self) -> U512 {
        let [a, b, c, d] = self.0;
        U512([a, b, c, d, 0, 0, 0, 0])
    }

    /// Calculates the complete 512-bit product `self * rhs`.
    #[inline]
    pub fn widening_mul(&self, rhs: &Self) -> U512 {
        U512(mul_wide(&self.0, &rhs.0))
    }
}

impl From<u64> for U256 {
    #[inline]
    fn from(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }
}

impl TryFrom<&[u64]> for U256 {
    type Error = Uint256Error;

    #[inline]
    fn try_from(limbs: &[u64]) -> Result<Self, Self::Error> {
        <[u64; 4]>::try_from(limbs)
            .map(Self)
            .map_err(|_| Uint256Error::LimbCount {
                expected: 4,
                found: limbs.len(),
            })
    }
}

impl Index<usize> for U256 {
    type Output = u64;

    #[inline]
    fn index(&self, index: usize) -> &u64 {
        &self.0[index]
    }
}

impl Ord for U256 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Shl<u32> for U256 {
    type Output = Self;

    /// Logical left shift. Shifting by 256 or more yields zero.
    #[inline]
    fn shl(self, shift: u32) -> Self {
        if shift >= 256 {
            return Self::ZERO;
        }
        let limb_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;
        let mut out = [0u64; 4];
        for i in limb_shift..4 {
            let src = i - limb_shift;
            out[i] = self.0[src] << bit_shift;
            if bit_shift != 0 && src > 0 {
                out[i] |= self.0[src - 1] >> (64 - bit_shift);
            }
        }
        Self(out)
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0, f.alternate())
    }
}

impl Display for U256 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0, true)
    }
}

/// A 512-bit unsigned integer, eight 64-bit limbs. The dividend of Barrett reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct U512(pub(crate) [u64; 8]);

impl U512 {
    /// The value `0`.
    pub const ZERO: Self = Self([0; 8]);

    /// Creates a value from limbs, least significant first.
    #[inline]
    pub const fn from_limbs(limbs: [u64; 8]) -> Self {
        Self(limbs)
    }

    /// Returns the limbs, least significant first.
    #[inline]
    pub const fn as_limbs(&self) -> &[u64; 8] {
        &self.0
    }

    /// Joins a low and a high 256-bit half.
    #[inline]
    pub const fn from_halves(low: U256, high: U256) -> Self {
        let [a, b, c, d] = low.0;
        let [e, f, g, h] = high.0;
        Self([a, b, c, d, e, f, g, h])
    }

    /// The low 256 bits.
    #[inline]
    pub const fn low(&self) -> U256 {
        U256([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// The high 256 bits.
    #[inline]
    pub const fn high(&self) -> U256 {
        U256([self.0[4], self.0[5], self.0[6], self.0[7]])
    }
}

impl From<U256> for U512 {
    #[inline]
    fn from(value: U256) -> Self {
        value.zero_extend()
    }
}

impl LowerHex for U512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0, f.alternate())
    }
}

impl Display for U512 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0, true)
    }
}

/// A 320-bit fixed-point reciprocal, five 64-bit limbs.
///
/// For a modulus `m` whose top limb is nonzero this is an approximation of
/// `2^512 / m` from below. It is only meaningful together with the modulus
/// it was computed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct Reciprocal(pub(crate) [u64; 5]);

impl Reciprocal {
    /// All limbs zero.
    pub const ZERO: Self = Self([0; 5]);

    /// The value `2^320 - 1`.
    pub const MAX: Self = Self([u64::MAX; 5]);

    /// Creates a value from limbs, least significant first.
    #[inline]
    pub const fn from_limbs(limbs: [u64; 5]) -> Self {
        Self(limbs)
    }

    /// Returns the limbs, least significant first.
    #[inline]
    pub const fn as_limbs(&self) -> &[u64; 5] {
        &self.0
    }

    /// Returns `true` if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero(&self.0)
    }
}

impl Display for Reciprocal {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0, true)
    }
}
