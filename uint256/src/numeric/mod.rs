//! Limb-level arithmetic: single-limb widening primitives and
//! carry-propagating operations over fixed-length limb arrays.

mod limbs;
mod widening;

pub use limbs::*;
pub use widening::*;
