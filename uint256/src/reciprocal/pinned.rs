//! The pinned modulus and its reciprocal, computed once per process.

#[cfg(feature = "fixed-modulus")]
use log::debug;
#[cfg(feature = "fixed-modulus")]
use once_cell::sync::Lazy;

#[cfg(feature = "fixed-modulus")]
use crate::constants::FIXED_MODULUS;
use crate::integer::{Reciprocal, U256};

#[cfg(feature = "fixed-modulus")]
static PINNED: Lazy<(U256, Reciprocal)> = Lazy::new(|| {
    // Must not consult a cache: cache lookups read this very value.
    let mu = super::reciprocal(&FIXED_MODULUS, None);
    debug!("pinned reciprocal of {FIXED_MODULUS} is {mu}");
    (FIXED_MODULUS, mu)
});

/// Returns the pinned `(modulus, reciprocal)` pair, or `None` when the
/// `fixed-modulus` feature is disabled.
///
/// The first call computes the pair; every later call, from any thread,
/// observes the same immutable value.
#[inline]
pub fn pinned() -> Option<(U256, Reciprocal)> {
    #[cfg(feature = "fixed-modulus")]
    {
        Some(*PINNED)
    }

    #[cfg(not(feature = "fixed-modulus"))]
    {
        None
    }
}

/// Forces the pinned reciprocal to be computed now, e.g. before worker
/// threads start.
#[inline]
pub fn init_pinned() {
    let _ = pinned();
}
