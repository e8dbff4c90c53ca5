/// Carrying add operation trait.
pub trait CarryingAdd: Sized {
    /// Calculates `self` + `rhs` + `carry` and returns the wrapped sum
    /// together with the carry-out bit.
    ///
    /// Chaining the carry-out of one limb into the carry-in of the next
    /// builds a multi-limb addition.
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool);
}

/// Borrowing sub operation trait.
pub trait BorrowingSub: Sized {
    /// Calculates `self` - `rhs` - `borrow` and returns the wrapped difference
    /// together with the borrow-out bit.
    ///
    /// Chaining the borrow-out of one limb into the borrow-in of the next
    /// builds a multi-limb subtraction.
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool);
}

/// Widening mul operation trait.
pub trait WideningMul: Sized {
    /// A wider type for multiplication.
    type WideT;

    /// Calculates the complete product `self` * `rhs` without the possibility to overflow.
    ///
    /// This returns the low-order (wrapping) bits and the high-order (overflow) bits
    /// of the result as two separate values, in that order.
    fn widening_mul(self, rhs: Self) -> (Self, Self);
}

/// Carrying mul operation trait.
pub trait CarryingMul: Sized {
    /// Calculates `self` * `rhs` + `carry` without the possibility to overflow.
    ///
    /// This returns the low-order (wrapping) bits and the high-order (overflow) bits
    /// of the result as two separate values, in that order.
    fn carrying_mul(self, rhs: Self, carry: Self) -> (Self, Self);
}

macro_rules! impl_limb_widening {
    ($($SelfT:ty => $WideT:ty),*) => {
        $(
            impl CarryingAdd for $SelfT {
                #[inline]
                fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
                    #[cfg(feature = "nightly")]
                    {
                        <$SelfT>::carrying_add(self, rhs, carry)
                    }

                    #[cfg(not(feature = "nightly"))]
                    {
                        let (a, b) = self.overflowing_add(rhs);
                        let (c, d) = a.overflowing_add(carry as Self);
                        (c, b || d)
                    }
                }
            }

            impl BorrowingSub for $SelfT {
                #[inline]
                fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
                    #[cfg(feature = "nightly")]
                    {
                        <$SelfT>::borrowing_sub(self, rhs, borrow)
                    }

                    #[cfg(not(feature = "nightly"))]
                    {
                        let (a, b) = self.overflowing_sub(rhs);
                        let (c, d) = a.overflowing_sub(borrow as Self);
                        (c, b || d)
                    }
                }
            }

            impl WideningMul for $SelfT {
                type WideT = $WideT;

                #[inline]
                fn widening_mul(self, rhs: Self) -> (Self, Self) {
                    let wide = (self as $WideT) * (rhs as $WideT);
                    (wide as Self, (wide >> <$SelfT>::BITS) as Self)
                }
            }

            impl CarryingMul for $SelfT {
                #[inline]
                fn carrying_mul(self, rhs: Self, carry: Self) -> (Self, Self) {
                    let wide = (self as $WideT) * (rhs as $WideT) + (carry as $WideT);
                    (wide as Self, (wide >> <$SelfT>::BITS) as Self)
                }
            }
        )*
    };
}

impl_limb_widening! { u32 => u64, u64 => u128 }
