//! This module defines the errors that may occur when
//! building values of this library from unchecked input.

use thiserror::Error;

use crate::integer::U256;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Uint256Error {
    /// Error that occurs when a modulus can not drive the four-limb Barrett reducer.
    #[error("modulus {modulus} is not a four-limb value with a top limb greater than 1")]
    InvalidModulus {
        /// The rejected modulus.
        modulus: U256,
    },
    /// Error that occurs when a limb slice has the wrong length.
    #[error("expected {expected} limbs, found {found}")]
    LimbCount {
        /// The number of limbs the target type holds.
        expected: usize,
        /// The number of limbs supplied.
        found: usize,
    },
}
