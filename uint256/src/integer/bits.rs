use super::U256;

/// Extension trait to provide access to bits of integers.
pub trait Bits {
    /// The number of bits this type has.
    const BITS: u32;

    /// Returns the number of ones in the binary representation of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uint256::{Bits, U256};
    ///
    /// let n = U256::from_limbs([0b1011, 0, 1 << 63, 0]);
    ///
    /// assert_eq!(n.count_ones(), 4);
    /// ```
    fn count_ones(self) -> u32;

    /// Returns the number of leading zeros in the binary representation
    /// of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uint256::{Bits, U256};
    ///
    /// let n = U256::from_limbs([0, 1, 0, 0]);
    ///
    /// assert_eq!(n.leading_zeros(), 191);
    /// ```
    fn leading_zeros(self) -> u32;
}

macro_rules! impl_bits {
    ($($T:ty),*) => {
        $(
            impl Bits for $T {
                const BITS: u32 = <$T>::BITS;

                #[inline]
                fn count_ones(self) -> u32 {
                    <$T>::count_ones(self)
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$T>::leading_zeros(self)
                }
            }
        )*
    };
}

impl_bits!(u32, u64);

impl Bits for U256 {
    const BITS: u32 = 256;

    #[inline]
    fn count_ones(self) -> u32 {
        self.0.iter().map(|limb| limb.count_ones()).sum()
    }

    /// Scans from the most significant limb and stops at the first nonzero one.
    #[inline]
    fn leading_zeros(self) -> u32 {
        let mut zeros = 0;
        for limb in self.0.iter().rev() {
            zeros += limb.leading_zeros();
            if *limb != 0 {
                break;
            }
        }
        zeros
    }
}
