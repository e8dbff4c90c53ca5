/// The modulo operation.
pub trait Reduce<T> {
    /// Output type.
    type Output;

    /// Calculates `value (mod modulus)` where `self` is modulus.
    fn reduce(self, value: T) -> Self::Output;
}

/// The modular multiplication.
pub trait ReduceMul<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a * b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_mul(self, a: T, b: B) -> Self::Output;
}
