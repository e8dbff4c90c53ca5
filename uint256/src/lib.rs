#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "nightly", feature(bigint_helper_methods))]
#![deny(missing_docs)]

//! Division-free modular reduction for fixed-width 256-bit unsigned integers.
//!
//! A 320-bit fixed-point reciprocal of the modulus is computed once by
//! Newton-Raphson refinement (and cached), then every 512-bit product is
//! reduced by Barrett reduction using only multiplications and a small
//! bounded correction.

pub mod constants;
pub mod error;
pub mod integer;
pub mod numeric;
pub mod reciprocal;
pub mod reduce;

pub use error::Uint256Error;
pub use integer::{Bits, Reciprocal, U256, U512};
pub use reciprocal::{init_pinned, pinned, reciprocal, ReciprocalCache};
pub use reduce::{reduce, BarrettModulus256, Reduce, ReduceMul};
