use std::fmt::Display;

use crate::error::Uint256Error;
use crate::integer::{Reciprocal, U256, U512};
use crate::reciprocal::{reciprocal, ReciprocalCache};

use super::{Reduce, ReduceMul};

/// A 256-bit modulus, using barrett reduction algorithm.
///
/// The struct stores the modulus number and its precomputed
/// reciprocal `µ ≈ 2^512 / value`.
///
/// It's efficient if many reductions are performed with a single modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarrettModulus256 {
    /// the value to indicate the modulus
    value: U256,
    /// ratio `µ`
    ratio: Reciprocal,
}

impl BarrettModulus256 {
    /// Creates a [`BarrettModulus256`] instance, taking the reciprocal from
    /// `cache` when possible.
    ///
    /// Returns [`Uint256Error::InvalidModulus`] unless the top limb of
    /// `value` is greater than 1.
    pub fn new(value: U256, cache: Option<&ReciprocalCache>) -> Result<Self, Uint256Error> {
        if value[3] <= 1 {
            return Err(Uint256Error::InvalidModulus { modulus: value });
        }
        Ok(Self {
            value,
            ratio: reciprocal(&value, cache),
        })
    }

    /// Returns the value of this [`BarrettModulus256`].
    #[inline]
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// Returns the ratio of this [`BarrettModulus256`].
    #[inline]
    pub const fn ratio(&self) -> Reciprocal {
        self.ratio
    }
}

impl Display for BarrettModulus256 {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Reduce<U512> for BarrettModulus256 {
    type Output = U256;

    /// Calculates `value (mod modulus)` for any 512-bit `value`.
    #[inline]
    fn reduce(self, value: U512) -> Self::Output {
        super::reduce(&value, &self.value, &self.ratio)
    }
}

impl Reduce<U256> for BarrettModulus256 {
    type Output = U256;

    /// Calculates `value (mod modulus)`.
    #[inline]
    fn reduce(self, value: U256) -> Self::Output {
        self.reduce(value.zero_extend())
    }
}

impl ReduceMul<U256> for BarrettModulus256 {
    type Output = U256;

    #[inline]
    fn reduce_mul(self, a: U256, b: U256) -> Self::Output {
        self.reduce(a.widening_mul(&b))
    }
}
